use num_traits::Float;

use crate::matrix::SplitComplexMatrix;
use crate::table::lookup::TableAccessor;
use super::periodic::{interpolate_point, scatter_point, TapGeometry};

/// Runs the forward interpolation for one realization: K coefficients in, M samples out.
#[inline]
pub(crate) fn forward_realization<T: Float, A: TableAccessor<T>>(accessor: &A, geometry: &TapGeometry<T>, times: &[T], c_re: &[T], c_im: &[T], out_re: &mut [T], out_im: &mut [T])
{
    for ((&t, re), im) in times.iter().zip(out_re.iter_mut()).zip(out_im.iter_mut())
    {
        let acc = interpolate_point(accessor, geometry, t, c_re, c_im);
        *re = acc.re;
        *im = acc.im;
    }
}

#[cfg(feature="rayon")]
fn forward_realization_parallel<T: Float + Send + Sync, A: TableAccessor<T>>(accessor: &A, geometry: &TapGeometry<T>, times: &[T], c_re: &[T], c_im: &[T], out_re: &mut [T], out_im: &mut [T])
{
    use rayon::iter::{IndexedParallelIterator, IntoParallelRefIterator, IntoParallelRefMutIterator, ParallelIterator};
    times.par_iter().zip(out_re.par_iter_mut()).zip(out_im.par_iter_mut()).for_each(|((&t, re), im)|
    {
        let acc = interpolate_point(accessor, geometry, t, c_re, c_im);
        *re = acc.re;
        *im = acc.im;
    });
}

/// Spreads M samples of one realization onto its K coefficients.
#[inline]
pub(crate) fn adjoint_realization<T: Float, A: TableAccessor<T>>(accessor: &A, geometry: &TapGeometry<T>, times: &[T], f_re: &[T], f_im: &[T], c_re: &mut [T], c_im: &mut [T])
{
    for ((&t, &re), &im) in times.iter().zip(f_re).zip(f_im)
    {
        scatter_point(accessor, geometry, t, re, im, c_re, c_im);
    }
}

///
/// Applies the convolution driver to every column of `coefficients` (K x N) at every query
/// time, producing an M x N matrix. Columns are independent and share the table and times.
///
pub(crate) fn forward_batch<T: Float + Send + Sync, A: TableAccessor<T>>(accessor: &A, geometry: &TapGeometry<T>, coefficients: &SplitComplexMatrix<T>, times: &[T], parallel: bool) -> SplitComplexMatrix<T>
{
    let grid_len = coefficients.rows();
    let num_samples = times.len();
    let realizations = coefficients.cols();
    let mut result = SplitComplexMatrix::zeros(num_samples, realizations);
    if num_samples == 0 || realizations == 0 || grid_len == 0
    {
        return result;
    }
    let (out_re, out_im) = result.planes_mut();
    let columns = coefficients.re().chunks_exact(grid_len)
        .zip(coefficients.im().chunks_exact(grid_len))
        .zip(out_re.chunks_exact_mut(num_samples).zip(out_im.chunks_exact_mut(num_samples)));

    #[cfg(feature="rayon")]
    if parallel
    {
        use rayon::iter::{ParallelBridge, ParallelIterator};
        log::trace!("forward batch: {realizations} realization(s) x {num_samples} sample(s) in parallel");
        columns.par_bridge().for_each(|((c_re, c_im), (f_re, f_im))|
        {
            forward_realization_parallel(accessor, geometry, times, c_re, c_im, f_re, f_im);
        });
        return result;
    }
    #[cfg(not(feature="rayon"))]
    let _ = parallel;

    for ((c_re, c_im), (f_re, f_im)) in columns
    {
        forward_realization(accessor, geometry, times, c_re, c_im, f_re, f_im);
    }
    result
}

///
/// Adjoint of [`forward_batch`]: maps M x N samples back onto a K x N coefficient matrix.
///
pub(crate) fn adjoint_batch<T: Float + Send + Sync, A: TableAccessor<T>>(accessor: &A, geometry: &TapGeometry<T>, samples: &SplitComplexMatrix<T>, times: &[T], grid_len: usize, parallel: bool) -> SplitComplexMatrix<T>
{
    let num_samples = samples.rows();
    let realizations = samples.cols();
    let mut result = SplitComplexMatrix::zeros(grid_len, realizations);
    if num_samples == 0 || realizations == 0 || grid_len == 0
    {
        return result;
    }
    let (out_re, out_im) = result.planes_mut();
    let columns = samples.re().chunks_exact(num_samples)
        .zip(samples.im().chunks_exact(num_samples))
        .zip(out_re.chunks_exact_mut(grid_len).zip(out_im.chunks_exact_mut(grid_len)));

    #[cfg(feature="rayon")]
    if parallel
    {
        use rayon::iter::{ParallelBridge, ParallelIterator};
        log::trace!("adjoint batch: {realizations} realization(s) x {num_samples} sample(s) in parallel");
        columns.par_bridge().for_each(|((f_re, f_im), (c_re, c_im))|
        {
            adjoint_realization(accessor, geometry, times, f_re, f_im, c_re, c_im);
        });
        return result;
    }
    #[cfg(not(feature="rayon"))]
    let _ = parallel;

    for ((f_re, f_im), (c_re, c_im)) in columns
    {
        adjoint_realization(accessor, geometry, times, f_re, f_im, c_re, c_im);
    }
    result
}
