use num_traits::Float;
use serde::{Deserialize, Serialize};

use crate::errors::InterpError;

///
/// Column-major complex matrix with separate real and imaginary planes. Each column is one
/// realization: K coefficients on the way in, M samples on the way out.
///
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SplitComplexMatrix<T>
{
    rows: usize,
    cols: usize,
    re: Vec<T>,
    im: Vec<T>,
}

impl<T: Float> SplitComplexMatrix<T>
{
    pub fn zeros(rows: usize, cols: usize) -> Self
    {
        Self { rows, cols, re: vec![T::zero(); rows * cols], im: vec![T::zero(); rows * cols] }
    }

    pub fn from_parts(rows: usize, cols: usize, re: Vec<T>, im: Vec<T>) -> Result<Self, InterpError>
    {
        if re.len() != rows * cols
        {
            return Err(InterpError::MatrixShape { name: "re", rows, cols, len: re.len() });
        }
        if im.len() != rows * cols
        {
            return Err(InterpError::MatrixShape { name: "im", rows, cols, len: im.len() });
        }
        Ok(Self { rows, cols, re, im })
    }

    /// Single-column matrix.
    pub fn column_vector(re: Vec<T>, im: Vec<T>) -> Result<Self, InterpError>
    {
        let rows = re.len();
        Self::from_parts(rows, 1, re, im)
    }

    #[inline]
    pub fn rows(&self) -> usize
    {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize
    {
        self.cols
    }

    pub fn re(&self) -> &[T]
    {
        &self.re
    }

    pub fn im(&self) -> &[T]
    {
        &self.im
    }

    pub(crate) fn planes_mut(&mut self) -> (&mut [T], &mut [T])
    {
        (&mut self.re, &mut self.im)
    }

    pub fn column(&self, col: usize) -> (&[T], &[T])
    {
        let range = col * self.rows..(col + 1) * self.rows;
        (&self.re[range.clone()], &self.im[range])
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> (T, T)
    {
        let i = col * self.rows + row;
        (self.re[i], self.im[i])
    }

    pub fn scale(&mut self, alpha_re: T, alpha_im: T)
    {
        for (re, im) in self.re.iter_mut().zip(self.im.iter_mut())
        {
            let (r, i) = (*re, *im);
            *re = alpha_re * r - alpha_im * i;
            *im = alpha_re * i + alpha_im * r;
        }
    }

    pub fn into_parts(self) -> (usize, usize, Vec<T>, Vec<T>)
    {
        (self.rows, self.cols, self.re, self.im)
    }
}

#[test]
fn check_matrix_columns()
{
    let m = SplitComplexMatrix::from_parts(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], vec![0.0, -1.0, -2.0, -3.0, -4.0, -5.0]).unwrap();
    assert_eq!(m.column(1), (&[3.0, 4.0][..], &[-2.0, -3.0][..]));
    assert_eq!(m.get(1, 2), (6.0, -5.0));
    assert!(matches!(SplitComplexMatrix::from_parts(2, 2, vec![0.0; 4], vec![0.0; 3]), Err(InterpError::MatrixShape { name: "im", .. })));
}

#[test]
fn check_matrix_scale()
{
    let mut m = SplitComplexMatrix::column_vector(vec![1.0, 0.0], vec![0.0, 1.0]).unwrap();
    m.scale(0.0, 2.0);
    assert_eq!(m.re(), &[0.0, -2.0]);
    assert_eq!(m.im(), &[2.0, 0.0]);
}
