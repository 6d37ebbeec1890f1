//! Periodic 1D interpolation by kernel table lookup, the inner step of NUFFT-style
//! resampling: K uniform coefficients on a periodic grid are evaluated at M arbitrary
//! query times through a window of J taps tabulated at L samples per grid unit.
pub mod algorithms;
pub mod boundary;
pub mod errors;
pub mod interpolator;
pub mod matrix;
pub mod options;
pub mod serialization;
pub mod table;

pub use errors::InterpError;
pub use interpolator::{KernelVariant, TableInterpolator};
pub use matrix::SplitComplexMatrix;
pub use options::{InterpolationOptions, TableOrder};
pub use table::KernelTable;
