//! Host-facing entry points.
//!
//! A scripting host hands native code loosely typed, column-major arrays. These functions
//! check every argument (class, shape, scalar-ness, table length, order/flip combination)
//! before any numeric work and either return a freshly allocated result or a descriptive
//! [`InterpError`]; nothing partial is ever produced.
//!
//! Usage mirrors the host call `fm = interp1_table(ck, h, J, L, tm, [order, flips])`.

use crate::errors::InterpError;
use crate::interpolator::TableInterpolator;
use crate::matrix::SplitComplexMatrix;
use crate::options::{InterpolationOptions, TableOrder};
use crate::table::KernelTable;

#[derive(Clone, Debug, PartialEq)]
pub enum HostData
{
    Double { re: Vec<f64>, im: Option<Vec<f64>> },
    Int32(Vec<i32>),
}

/// Column-major host array.
#[derive(Clone, Debug, PartialEq)]
pub struct HostArray
{
    rows: usize,
    cols: usize,
    data: HostData,
}

impl HostArray
{
    pub fn real(rows: usize, cols: usize, re: Vec<f64>) -> Result<Self, InterpError>
    {
        if re.len() != rows * cols
        {
            return Err(InterpError::MatrixShape { name: "re", rows, cols, len: re.len() });
        }
        Ok(Self { rows, cols, data: HostData::Double { re, im: None } })
    }

    pub fn complex(rows: usize, cols: usize, re: Vec<f64>, im: Vec<f64>) -> Result<Self, InterpError>
    {
        if re.len() != rows * cols
        {
            return Err(InterpError::MatrixShape { name: "re", rows, cols, len: re.len() });
        }
        if im.len() != rows * cols
        {
            return Err(InterpError::MatrixShape { name: "im", rows, cols, len: im.len() });
        }
        Ok(Self { rows, cols, data: HostData::Double { re, im: Some(im) } })
    }

    pub fn real_column(values: Vec<f64>) -> Self
    {
        Self { rows: values.len(), cols: 1, data: HostData::Double { re: values, im: None } }
    }

    pub fn int32(value: i32) -> Self
    {
        Self { rows: 1, cols: 1, data: HostData::Int32(vec![value]) }
    }

    pub fn int32_matrix(rows: usize, cols: usize, values: Vec<i32>) -> Result<Self, InterpError>
    {
        if values.len() != rows * cols
        {
            return Err(InterpError::MatrixShape { name: "int32", rows, cols, len: values.len() });
        }
        Ok(Self { rows, cols, data: HostData::Int32(values) })
    }

    pub fn rows(&self) -> usize
    {
        self.rows
    }

    pub fn cols(&self) -> usize
    {
        self.cols
    }

    pub fn data(&self) -> &HostData
    {
        &self.data
    }

    fn complex_planes(&self, name: &'static str) -> Result<(&[f64], &[f64]), InterpError>
    {
        match &self.data
        {
            HostData::Double { re, im: Some(im) } => Ok((re.as_slice(), im.as_slice())),
            _ => Err(InterpError::NotComplexDouble { name }),
        }
    }

    fn real_plane(&self, name: &'static str) -> Result<&[f64], InterpError>
    {
        match &self.data
        {
            HostData::Double { re, im: None } => Ok(re.as_slice()),
            _ => Err(InterpError::NotRealDouble { name }),
        }
    }

    fn scalar_int32(&self, name: &'static str) -> Result<i32, InterpError>
    {
        match &self.data
        {
            HostData::Int32(values) if self.rows == 1 && self.cols == 1 => Ok(values[0]),
            _ => Err(InterpError::NotScalarInt32 { name }),
        }
    }
}

impl From<SplitComplexMatrix<f64>> for HostArray
{
    fn from(matrix: SplitComplexMatrix<f64>) -> Self
    {
        let (rows, cols, re, im) = matrix.into_parts();
        Self { rows, cols, data: HostData::Double { re, im: Some(im) } }
    }
}

fn positive(value: i32, name: &'static str) -> Result<usize, InterpError>
{
    if value < 1
    {
        return Err(InterpError::NonPositive { name, value: value as i64 });
    }
    Ok(value as usize)
}

/// Validated table, options and query times shared by the forward and adjoint calls.
struct TableCall
{
    interpolator: TableInterpolator<f64>,
    times: Vec<f64>,
}

fn parse_table_call(base: InterpolationOptions, h: &HostArray, j: &HostArray, l: &HostArray, tm: &HostArray, order: Option<&HostArray>, flip: Option<&HostArray>) -> Result<TableCall, InterpError>
{
    let times = tm.real_plane("t_m")?;
    let neighbors = j.scalar_int32("J")?;
    let oversampling = l.scalar_int32("L")?;
    let order = order.map(|a| a.scalar_int32("order")).transpose()?.unwrap_or(0);
    let flip = flip.map(|a| a.scalar_int32("flips")).transpose()?.unwrap_or(0);
    let neighbors = positive(neighbors, "J")?;
    let oversampling = positive(oversampling, "L")?;

    let expected = neighbors * oversampling + 1;
    if h.rows() != expected || h.cols() != 1
    {
        log::error!("J={} L={} tablelength={}", neighbors, oversampling, h.rows());
        return Err(InterpError::TableSize { neighbors, oversampling, expected, rows: h.rows(), cols: h.cols() });
    }
    if tm.cols() != 1
    {
        return Err(InterpError::NotColumnVector { cols: tm.cols() });
    }

    let table = match h.data()
    {
        HostData::Double { re, im: Some(im) } =>
        {
            if order != 0
            {
                return Err(InterpError::ComplexOrder);
            }
            KernelTable::complex(neighbors, oversampling, re.clone(), im.clone())?
        }
        HostData::Double { re, im: None } => KernelTable::real(neighbors, oversampling, re.clone())?,
        HostData::Int32(_) => return Err(InterpError::NotRealDouble { name: "h" }),
    };
    let order = TableOrder::try_from(order as i64)?;
    let flip = match flip
    {
        0 => false,
        1 => true,
        other => return Err(InterpError::BadFlip(other as i64)),
    };
    let options = InterpolationOptions { order, flip, ..base };
    Ok(TableCall { interpolator: TableInterpolator::new(table, options)?, times: times.to_vec() })
}

fn check_counts(inputs: usize, min: usize, max: usize, outputs: usize) -> Result<(), InterpError>
{
    if inputs < min || inputs > max
    {
        return Err(InterpError::InputCount { got: inputs, min, max });
    }
    if outputs > 1
    {
        return Err(InterpError::OutputCount(outputs));
    }
    Ok(())
}

///
/// Forward periodic table interpolation: `(ck, h, J, L, tm, [order, flips])` -> `fm`.
///
/// `ck` is a K x N complex matrix, `h` a (J*L+1) x 1 real or complex table, `J`, `L`,
/// `order` and `flips` int32 scalars and `tm` an M x 1 real column. Returns M x N complex.
///
pub fn interp1_table_per(inputs: &[HostArray], nargout: usize) -> Result<HostArray, InterpError>
{
    interp1_table_per_with(InterpolationOptions::default(), inputs, nargout)
}

/// [`interp1_table_per`] with `allow_flip` and `parallel` taken from `base`.
pub fn interp1_table_per_with(base: InterpolationOptions, inputs: &[HostArray], nargout: usize) -> Result<HostArray, InterpError>
{
    check_counts(inputs.len(), 5, 7, nargout)?;
    let ck = &inputs[0];
    let (ck_re, ck_im) = ck.complex_planes("ck")?;
    let call = parse_table_call(base, &inputs[1], &inputs[2], &inputs[3], &inputs[4], inputs.get(5), inputs.get(6))?;
    let coefficients = SplitComplexMatrix::from_parts(ck.rows(), ck.cols(), ck_re.to_vec(), ck_im.to_vec())?;
    let result = call.interpolator.interpolate(&coefficients, &call.times)?;
    Ok(result.into())
}

///
/// Adjoint periodic table interpolation: `(fm, h, J, L, tm, K, [order, flips])` -> `ck`.
///
/// `fm` is an M x N complex matrix of samples at `tm`; the result is K x N complex.
///
pub fn interp1_table_adj(inputs: &[HostArray], nargout: usize) -> Result<HostArray, InterpError>
{
    interp1_table_adj_with(InterpolationOptions::default(), inputs, nargout)
}

/// [`interp1_table_adj`] with `allow_flip` and `parallel` taken from `base`.
pub fn interp1_table_adj_with(base: InterpolationOptions, inputs: &[HostArray], nargout: usize) -> Result<HostArray, InterpError>
{
    check_counts(inputs.len(), 6, 8, nargout)?;
    let fm = &inputs[0];
    let (fm_re, fm_im) = fm.complex_planes("fm")?;
    let grid_len = positive(inputs[5].scalar_int32("K")?, "K")?;
    let call = parse_table_call(base, &inputs[1], &inputs[2], &inputs[3], &inputs[4], inputs.get(6), inputs.get(7))?;
    if fm.rows() != call.times.len()
    {
        return Err(InterpError::RowMismatch { name: "fm", got: fm.rows(), expected: call.times.len() });
    }
    let samples = SplitComplexMatrix::from_parts(fm.rows(), fm.cols(), fm_re.to_vec(), fm_im.to_vec())?;
    let result = call.interpolator.adjoint(&samples, &call.times, grid_len)?;
    Ok(result.into())
}

#[cfg(test)]
mod tests
{
    use super::*;
    use crate::table::cosine_window;

    fn standard_inputs() -> Vec<HostArray>
    {
        let re: Vec<f64> = (0..8).map(|i| (i as f64 * 0.9).sin()).collect();
        let im: Vec<f64> = (0..8).map(|i| (i as f64 * 0.4).cos()).collect();
        vec![
            HostArray::complex(8, 1, re, im).unwrap(),
            HostArray::real_column(cosine_window(4, 4)),
            HostArray::int32(4),
            HostArray::int32(4),
            HostArray::real_column(vec![2.3, 10.3, 0.0]),
        ]
    }

    fn plane(array: &HostArray) -> (&[f64], &[f64])
    {
        match array.data()
        {
            HostData::Double { re, im: Some(im) } => (re.as_slice(), im.as_slice()),
            other => panic!("expected complex output, got {other:?}"),
        }
    }

    #[test]
    fn check_forward_call()
    {
        let out = interp1_table_per(&standard_inputs(), 1).unwrap();
        assert_eq!((out.rows(), out.cols()), (3, 1));
        let (re, im) = plane(&out);
        assert!((re[0] - re[1]).abs() < 1e-12);
        assert!((im[0] - im[1]).abs() < 1e-12);

        let mut with_order = standard_inputs();
        with_order.push(HostArray::int32(1));
        with_order.push(HostArray::int32(0));
        assert!(interp1_table_per(&with_order, 0).is_ok());
    }

    #[test]
    fn check_argument_counts()
    {
        let inputs = standard_inputs();
        assert_eq!(interp1_table_per(&inputs[..4], 1).err(), Some(InterpError::InputCount { got: 4, min: 5, max: 7 }));
        assert_eq!(interp1_table_per(&inputs, 2).err(), Some(InterpError::OutputCount(2)));
    }

    #[test]
    fn check_argument_classes()
    {
        let mut inputs = standard_inputs();
        inputs[0] = HostArray::real_column(vec![0.0; 8]);
        assert_eq!(interp1_table_per(&inputs, 1).err(), Some(InterpError::NotComplexDouble { name: "ck" }));

        let mut inputs = standard_inputs();
        inputs[4] = HostArray::complex(1, 1, vec![0.0], vec![1.0]).unwrap();
        assert_eq!(interp1_table_per(&inputs, 1).err(), Some(InterpError::NotRealDouble { name: "t_m" }));

        let mut inputs = standard_inputs();
        inputs[2] = HostArray::real_column(vec![4.0]);
        assert_eq!(interp1_table_per(&inputs, 1).err(), Some(InterpError::NotScalarInt32 { name: "J" }));

        let mut inputs = standard_inputs();
        inputs[3] = HostArray::int32_matrix(1, 2, vec![4, 4]).unwrap();
        assert_eq!(interp1_table_per(&inputs, 1).err(), Some(InterpError::NotScalarInt32 { name: "L" }));

        let mut inputs = standard_inputs();
        inputs.push(HostArray::real_column(vec![1.0]));
        assert_eq!(interp1_table_per(&inputs, 1).err(), Some(InterpError::NotScalarInt32 { name: "order" }));
    }

    #[test]
    fn check_shape_errors()
    {
        let mut inputs = standard_inputs();
        inputs[1] = HostArray::real_column(vec![0.0; 16]);
        assert_eq!(interp1_table_per(&inputs, 1).err(), Some(InterpError::TableSize { neighbors: 4, oversampling: 4, expected: 17, rows: 16, cols: 1 }));

        let mut inputs = standard_inputs();
        inputs[1] = HostArray::real(17, 2, vec![0.0; 34]).unwrap();
        assert!(matches!(interp1_table_per(&inputs, 1), Err(InterpError::TableSize { cols: 2, .. })));

        let mut inputs = standard_inputs();
        inputs[4] = HostArray::real(1, 3, vec![0.0, 1.0, 2.0]).unwrap();
        assert_eq!(interp1_table_per(&inputs, 1).err(), Some(InterpError::NotColumnVector { cols: 3 }));

        let mut inputs = standard_inputs();
        inputs[2] = HostArray::int32(0);
        assert_eq!(interp1_table_per(&inputs, 1).err(), Some(InterpError::NonPositive { name: "J", value: 0 }));
    }

    #[test]
    fn check_order_and_flip_rejection()
    {
        let mut inputs = standard_inputs();
        let h = cosine_window(4, 4);
        inputs[1] = HostArray::complex(17, 1, h.clone(), vec![0.0; 17]).unwrap();
        inputs.push(HostArray::int32(1));
        assert_eq!(interp1_table_per(&inputs, 1).err(), Some(InterpError::ComplexOrder));

        let mut inputs = standard_inputs();
        inputs.push(HostArray::int32(2));
        assert_eq!(interp1_table_per(&inputs, 1).err(), Some(InterpError::BadOrder(2)));

        let mut inputs = standard_inputs();
        inputs.push(HostArray::int32(0));
        inputs.push(HostArray::int32(3));
        assert_eq!(interp1_table_per(&inputs, 1).err(), Some(InterpError::BadFlip(3)));

        let mut inputs = standard_inputs();
        inputs.push(HostArray::int32(0));
        inputs.push(HostArray::int32(1));
        assert!(interp1_table_per(&inputs, 1).is_ok());
        let no_flip = InterpolationOptions { allow_flip: false, ..Default::default() };
        assert_eq!(interp1_table_per_with(no_flip, &inputs, 1).err(), Some(InterpError::FlipDisabled));
    }

    #[test]
    fn check_multiple_realizations_proceed()
    {
        let mut inputs = standard_inputs();
        let re: Vec<f64> = (0..16).map(|i| i as f64).collect();
        inputs[0] = HostArray::complex(8, 2, re, vec![0.5; 16]).unwrap();
        let out = interp1_table_per(&inputs, 1).unwrap();
        assert_eq!((out.rows(), out.cols()), (3, 2));
    }

    #[test]
    fn check_adjoint_call()
    {
        let inputs = vec![
            HostArray::complex(3, 1, vec![1.0, 0.0, -1.0], vec![0.0, 2.0, 0.5]).unwrap(),
            HostArray::real_column(cosine_window(4, 4)),
            HostArray::int32(4),
            HostArray::int32(4),
            HostArray::real_column(vec![2.3, 10.3, 0.0]),
            HostArray::int32(8),
        ];
        let out = interp1_table_adj(&inputs, 1).unwrap();
        assert_eq!((out.rows(), out.cols()), (8, 1));

        let mut short = inputs.clone();
        short[4] = HostArray::real_column(vec![2.3]);
        assert_eq!(interp1_table_adj(&short, 1).err(), Some(InterpError::RowMismatch { name: "fm", got: 3, expected: 1 }));

        let mut zero = inputs;
        zero[5] = HostArray::int32(0);
        assert_eq!(interp1_table_adj(&zero, 1).err(), Some(InterpError::NonPositive { name: "K", value: 0 }));
    }
}
