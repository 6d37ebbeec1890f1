use num_traits::Float;

use crate::algorithms::batch::{adjoint_batch, forward_batch};
use crate::algorithms::periodic::TapGeometry;
use crate::errors::InterpError;
use crate::matrix::SplitComplexMatrix;
use crate::options::{InterpolationOptions, TableOrder};
use crate::table::lookup::{ComplexNearest, RealLinear, RealNearest};
use crate::table::{KernelTable, TableValues};

/// The (table type, order) combination selected for an interpolator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KernelVariant
{
    RealNearest,
    RealLinear,
    ComplexNearest,
}

///
/// Periodic 1D interpolation by table lookup.
///
/// Forward direction, for every realization (column) of coefficients c and every query time t_m:
///
/// f(t_m) = sum_{k=0}^{K-1} c_k h((t_m - k) mod K)
///
/// where h is nonzero (and tabulated) on [-J/2, J/2]. The kernel variant is fixed when the
/// interpolator is built, so each call runs one monomorphized loop.
///
pub struct TableInterpolator<T>
{
    table: KernelTable<T>,
    geometry: TapGeometry<T>,
    options: InterpolationOptions,
    variant: KernelVariant,
}

impl<T: Float + Send + Sync> TableInterpolator<T>
{
    pub fn new(table: KernelTable<T>, options: InterpolationOptions) -> Result<Self, InterpError>
    {
        table.validate()?;
        if options.flip && !options.allow_flip
        {
            return Err(InterpError::FlipDisabled);
        }
        let variant = match (table.is_complex(), options.order)
        {
            (false, TableOrder::Nearest) => KernelVariant::RealNearest,
            (false, TableOrder::Linear) => KernelVariant::RealLinear,
            (true, TableOrder::Linear) => return Err(InterpError::ComplexOrder),
            (true, TableOrder::Nearest) =>
            {
                if options.flip
                {
                    return Err(InterpError::ComplexFlip);
                }
                KernelVariant::ComplexNearest
            }
        };
        log::debug!("table interpolator: {:?} J={} L={} flip={}", variant, table.neighbors(), table.oversampling(), options.flip);
        let geometry = TapGeometry::new(&table);
        Ok(Self { table, geometry, options, variant })
    }

    pub fn variant(&self) -> KernelVariant
    {
        self.variant
    }

    pub fn table(&self) -> &KernelTable<T>
    {
        &self.table
    }

    pub fn options(&self) -> &InterpolationOptions
    {
        &self.options
    }

    fn check_realizations(realizations: usize)
    {
        if realizations != 1
        {
            log::warn!("caution: {realizations} realizations (columns) given, expected 1");
        }
    }

    ///
    /// Interpolates every column of `coefficients` (K x N) at `times`, returning an M x N matrix.
    ///
    pub fn interpolate(&self, coefficients: &SplitComplexMatrix<T>, times: &[T]) -> Result<SplitComplexMatrix<T>, InterpError>
    {
        if coefficients.rows() == 0
        {
            return Err(InterpError::NonPositive { name: "K", value: 0 });
        }
        Self::check_realizations(coefficients.cols());
        let center = self.table.center();
        let flip = self.options.flip;
        let parallel = self.options.parallel;
        // complex tables only ever carry order 0, checked in `new`
        let result = match self.table.values()
        {
            TableValues::Real(h) => match self.options.order
            {
                TableOrder::Nearest => forward_batch(&RealNearest::new(h, center, flip), &self.geometry, coefficients, times, parallel),
                TableOrder::Linear => forward_batch(&RealLinear::new(h, center, flip), &self.geometry, coefficients, times, parallel),
            },
            TableValues::Complex { re, im } => forward_batch(&ComplexNearest::new(re, im, center), &self.geometry, coefficients, times, parallel),
        };
        Ok(result)
    }

    ///
    /// Adjoint interpolation: spreads the M x N `samples` taken at `times` back onto a periodic
    /// grid of `grid_len` coefficients per realization, using conjugated tap weights.
    ///
    pub fn adjoint(&self, samples: &SplitComplexMatrix<T>, times: &[T], grid_len: usize) -> Result<SplitComplexMatrix<T>, InterpError>
    {
        if grid_len == 0
        {
            return Err(InterpError::NonPositive { name: "K", value: 0 });
        }
        if samples.rows() != times.len()
        {
            return Err(InterpError::RowMismatch { name: "samples", got: samples.rows(), expected: times.len() });
        }
        Self::check_realizations(samples.cols());
        let center = self.table.center();
        let flip = self.options.flip;
        let parallel = self.options.parallel;
        // complex tables only ever carry order 0, checked in `new`
        let result = match self.table.values()
        {
            TableValues::Real(h) => match self.options.order
            {
                TableOrder::Nearest => adjoint_batch(&RealNearest::new(h, center, flip), &self.geometry, samples, times, grid_len, parallel),
                TableOrder::Linear => adjoint_batch(&RealLinear::new(h, center, flip), &self.geometry, samples, times, grid_len, parallel),
            },
            TableValues::Complex { re, im } => adjoint_batch(&ComplexNearest::new(re, im, center), &self.geometry, samples, times, grid_len, parallel),
        };
        Ok(result)
    }
}
