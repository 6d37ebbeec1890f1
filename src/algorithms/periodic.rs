use num_traits::{Float, ToPrimitive};

use crate::table::{KernelTable, to_float};
use crate::table::lookup::{Accumulator, TableAccessor};

///
/// Placement of the J taps relative to a query time.
///
/// The window is supported on [-J/2, J/2), so for a query time t the contributing grid
/// indices are the J consecutive integers k with `t - J/2 < k <= t + J/2`, the first of
/// which is `1 + floor(t - J/2)`.
///
#[derive(Clone, Copy, Debug)]
pub struct TapGeometry<T>
{
    neighbors: usize,
    oversampling: T,
    half_width: T,
    center: T,
}

impl<T: Float> TapGeometry<T>
{
    pub fn new(table: &KernelTable<T>) -> Self
    {
        let neighbors = table.neighbors();
        Self
        {
            neighbors,
            oversampling: to_float(table.oversampling()),
            half_width: to_float::<T>(neighbors) / to_float(2),
            center: table.center(),
        }
    }

    #[inline]
    pub fn neighbors(&self) -> usize
    {
        self.neighbors
    }

    /// Lowest contributing grid index (unwrapped) and the offset `t - k0` of that tap.
    #[inline]
    pub fn first_tap(&self, t: T) -> (i64, T)
    {
        let first = (t - self.half_width).floor() + T::one();
        (first.to_i64().unwrap_or(0), t - first)
    }

    /// Table position for a tap at offset `t - k`.
    #[inline]
    pub fn position(&self, offset: T) -> T
    {
        offset * self.oversampling + self.center
    }
}

/// Periodic grid index in [0, modulus) for any signed k.
#[inline]
pub fn wrap_index(k: i64, modulus: usize) -> usize
{
    k.rem_euclid(modulus as i64) as usize
}

///
/// Interpolated value at one query time: sum over the J taps of w(t - k) * c[k mod K].
/// When K < J the walk wraps more than once and a coefficient contributes once per visit.
///
#[inline]
pub fn interpolate_point<T: Float, A: TableAccessor<T>>(accessor: &A, geometry: &TapGeometry<T>, t: T, c_re: &[T], c_im: &[T]) -> Accumulator<T>
{
    let modulus = c_re.len();
    let (first, mut offset) = geometry.first_tap(t);
    let mut k = wrap_index(first, modulus);
    let mut acc = Accumulator::zero();
    for _ in 0..geometry.neighbors
    {
        let weight = accessor.weight(geometry.position(offset));
        A::accumulate(weight, c_re[k], c_im[k], &mut acc);
        offset = offset - T::one();
        k += 1;
        if k == modulus
        {
            k = 0;
        }
    }
    acc
}

///
/// Adjoint of [`interpolate_point`]: spreads one sample f onto the same J taps,
/// c[k mod K] += conj(w(t - k)) * f.
///
#[inline]
pub fn scatter_point<T: Float, A: TableAccessor<T>>(accessor: &A, geometry: &TapGeometry<T>, t: T, f_re: T, f_im: T, c_re: &mut [T], c_im: &mut [T])
{
    let modulus = c_re.len();
    let (first, mut offset) = geometry.first_tap(t);
    let mut k = wrap_index(first, modulus);
    for _ in 0..geometry.neighbors
    {
        let weight = accessor.weight(geometry.position(offset));
        let mut acc = Accumulator { re: c_re[k], im: c_im[k] };
        A::accumulate_adjoint(weight, f_re, f_im, &mut acc);
        c_re[k] = acc.re;
        c_im[k] = acc.im;
        offset = offset - T::one();
        k += 1;
        if k == modulus
        {
            k = 0;
        }
    }
}

#[test]
fn check_wrap_index()
{
    assert_eq!(wrap_index(0, 8), 0);
    assert_eq!(wrap_index(7, 8), 7);
    assert_eq!(wrap_index(8, 8), 0);
    assert_eq!(wrap_index(-1, 8), 7);
    assert_eq!(wrap_index(-17, 8), 7);
    assert_eq!(wrap_index(-5, 3), 1);
    assert_eq!(wrap_index(5, 1), 0);
}

#[test]
fn check_first_tap()
{
    let table = KernelTable::real(4, 4, vec![0.0_f64; 17]).unwrap();
    let geometry = TapGeometry::new(&table);
    let (k0, offset) = geometry.first_tap(2.3);
    assert_eq!(k0, 1);
    assert!((offset - 1.3).abs() < 1e-12);
    // integer query time: taps t-1 .. t+2
    assert_eq!(geometry.first_tap(5.0).0, 4);
    assert_eq!(geometry.first_tap(-0.5).0, -2);

    let odd = KernelTable::real(3, 2, vec![0.0_f64; 7]).unwrap();
    let geometry = TapGeometry::new(&odd);
    // taps 1, 2, 3 cover t = 2.2 within [-1.5, 1.5)
    assert_eq!(geometry.first_tap(2.2).0, 1);
    assert_eq!(geometry.first_tap(2.6).0, 2);
}

#[test]
fn check_tap_positions_stay_inside_table()
{
    use crate::table::lookup::RealNearest;
    let table = KernelTable::real(5, 3, vec![1.0_f64; 16]).unwrap();
    let geometry = TapGeometry::new(&table);
    for i in 0..200
    {
        let t = -7.0 + i as f64 * 0.0731;
        let (_, offset) = geometry.first_tap(t);
        let lowest = geometry.position(offset - (geometry.neighbors() - 1) as f64);
        let highest = geometry.position(offset);
        assert!(lowest >= -1e-9, "t={t} lowest={lowest}");
        assert!(highest < 15.0 + 1e-9, "t={t} highest={highest}");
    }
    let h = vec![1.0; 16];
    let accessor = RealNearest::new(&h, table.center(), false);
    let ones = vec![1.0; 4];
    let zeros = vec![0.0; 4];
    let acc = interpolate_point(&accessor, &geometry, 1.7, &ones, &zeros);
    assert_eq!(acc.re, 5.0);
    assert_eq!(acc.im, 0.0);
}
