//! Kernel table accessors.
//!
//! Each accessor turns a fractional table position into a tap weight and knows how to
//! multiply-accumulate that weight against split complex data. The three supported
//! (table type, order) combinations are separate types so the convolution loop is
//! monomorphized once per call instead of branching per sample.

use num_traits::{Float, ToPrimitive};

/// Running sum kept as two real accumulators.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Accumulator<T>
{
    pub re: T,
    pub im: T,
}

impl<T: Float> Accumulator<T>
{
    #[inline]
    pub fn zero() -> Self
    {
        Self { re: T::zero(), im: T::zero() }
    }
}

pub trait TableAccessor<T: Float>: Sync
{
    type Weight: Copy;

    /// Weight of the tap at table position `position` (`J*L/2` is the window centre).
    fn weight(&self, position: T) -> Self::Weight;

    /// acc += w * c
    fn accumulate(weight: Self::Weight, c_re: T, c_im: T, acc: &mut Accumulator<T>);

    /// acc += conj(w) * f
    fn accumulate_adjoint(weight: Self::Weight, f_re: T, f_im: T, acc: &mut Accumulator<T>);
}

/// Shared clamp/mirror logic for a table of `last + 1` entries centred at `center`.
#[derive(Clone, Copy, Debug)]
struct Positioner<T>
{
    center: T,
    last: usize,
    flip: bool,
}

impl<T: Float> Positioner<T>
{
    #[inline]
    fn mirror(&self, position: T) -> T
    {
        if self.flip
        {
            self.center + (position - self.center).abs()
        }
        else
        {
            position
        }
    }

    #[inline]
    fn clamp(&self, index: isize) -> usize
    {
        if index <= 0
        {
            0
        }
        else
        {
            (index as usize).min(self.last)
        }
    }

    /// Round to nearest entry, clamped to the table.
    #[inline]
    fn nearest(&self, position: T) -> usize
    {
        let index = self.mirror(position).round().to_isize().unwrap_or(0);
        self.clamp(index)
    }

    /// Lower/upper entries bracketing the position plus the fractional part.
    #[inline]
    fn bracket(&self, position: T) -> (usize, usize, T)
    {
        let position = self.mirror(position);
        let lower = position.floor();
        let index = lower.to_isize().unwrap_or(0);
        (self.clamp(index), self.clamp(index + 1), position - lower)
    }
}

/// Order 0 lookup in a real table.
pub struct RealNearest<'a, T>
{
    table: &'a [T],
    positioner: Positioner<T>,
}

/// Order 1 (piecewise linear) lookup in a real table.
pub struct RealLinear<'a, T>
{
    table: &'a [T],
    positioner: Positioner<T>,
}

/// Order 0 lookup in a complex table.
pub struct ComplexNearest<'a, T>
{
    re: &'a [T],
    im: &'a [T],
    positioner: Positioner<T>,
}

impl<'a, T: Float> RealNearest<'a, T>
{
    pub fn new(table: &'a [T], center: T, flip: bool) -> Self
    {
        Self { table, positioner: Positioner { center, last: table.len().saturating_sub(1), flip } }
    }
}

impl<'a, T: Float> RealLinear<'a, T>
{
    pub fn new(table: &'a [T], center: T, flip: bool) -> Self
    {
        Self { table, positioner: Positioner { center, last: table.len().saturating_sub(1), flip } }
    }
}

impl<'a, T: Float> ComplexNearest<'a, T>
{
    pub fn new(re: &'a [T], im: &'a [T], center: T) -> Self
    {
        Self { re, im, positioner: Positioner { center, last: re.len().min(im.len()).saturating_sub(1), flip: false } }
    }
}

impl<T: Float + Sync> TableAccessor<T> for RealNearest<'_, T>
{
    type Weight = T;

    #[inline]
    fn weight(&self, position: T) -> T
    {
        self.table[self.positioner.nearest(position)]
    }

    #[inline]
    fn accumulate(weight: T, c_re: T, c_im: T, acc: &mut Accumulator<T>)
    {
        acc.re = acc.re + weight * c_re;
        acc.im = acc.im + weight * c_im;
    }

    #[inline]
    fn accumulate_adjoint(weight: T, f_re: T, f_im: T, acc: &mut Accumulator<T>)
    {
        Self::accumulate(weight, f_re, f_im, acc);
    }
}

impl<T: Float + Sync> TableAccessor<T> for RealLinear<'_, T>
{
    type Weight = T;

    #[inline]
    fn weight(&self, position: T) -> T
    {
        let (lower, upper, frac) = self.positioner.bracket(position);
        (T::one() - frac) * self.table[lower] + frac * self.table[upper]
    }

    #[inline]
    fn accumulate(weight: T, c_re: T, c_im: T, acc: &mut Accumulator<T>)
    {
        acc.re = acc.re + weight * c_re;
        acc.im = acc.im + weight * c_im;
    }

    #[inline]
    fn accumulate_adjoint(weight: T, f_re: T, f_im: T, acc: &mut Accumulator<T>)
    {
        Self::accumulate(weight, f_re, f_im, acc);
    }
}

impl<T: Float + Sync> TableAccessor<T> for ComplexNearest<'_, T>
{
    type Weight = (T, T);

    #[inline]
    fn weight(&self, position: T) -> (T, T)
    {
        let index = self.positioner.nearest(position);
        (self.re[index], self.im[index])
    }

    #[inline]
    fn accumulate((w_re, w_im): (T, T), c_re: T, c_im: T, acc: &mut Accumulator<T>)
    {
        acc.re = acc.re + w_re * c_re - w_im * c_im;
        acc.im = acc.im + w_re * c_im + w_im * c_re;
    }

    #[inline]
    fn accumulate_adjoint((w_re, w_im): (T, T), f_re: T, f_im: T, acc: &mut Accumulator<T>)
    {
        acc.re = acc.re + w_re * f_re + w_im * f_im;
        acc.im = acc.im + w_re * f_im - w_im * f_re;
    }
}
