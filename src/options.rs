use serde::{Deserialize, Serialize};

use crate::errors::InterpError;

/// Table interpolation order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TableOrder
{
    /// Nearest table entry.
    #[default]
    Nearest = 0,
    /// Linear blend of the two bracketing entries.
    Linear = 1,
}

impl TryFrom<i64> for TableOrder
{
    type Error = InterpError;

    fn try_from(value: i64) -> Result<Self, Self::Error>
    {
        match value
        {
            0 => Ok(TableOrder::Nearest),
            1 => Ok(TableOrder::Linear),
            _ => Err(InterpError::BadOrder(value)),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InterpolationOptions
{
    pub order: TableOrder,
    /// Mirror lookups about the window centre so only the t >= 0 half of the table is read.
    pub flip: bool,
    /// When false, requesting `flip` is rejected.
    pub allow_flip: bool,
    /// Process realizations and samples on the rayon pool (needs the `rayon` feature).
    pub parallel: bool,
}

impl Default for InterpolationOptions
{
    fn default() -> Self
    {
        Self { order: TableOrder::Nearest, flip: false, allow_flip: true, parallel: true }
    }
}

impl InterpolationOptions
{
    pub fn with_order(mut self, order: TableOrder) -> Self
    {
        self.order = order;
        self
    }

    pub fn with_flip(mut self, flip: bool) -> Self
    {
        self.flip = flip;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self
    {
        self.parallel = parallel;
        self
    }
}

#[test]
fn check_order_from_int()
{
    assert_eq!(TableOrder::try_from(0_i64), Ok(TableOrder::Nearest));
    assert_eq!(TableOrder::try_from(1_i64), Ok(TableOrder::Linear));
    assert_eq!(TableOrder::try_from(2_i64), Err(InterpError::BadOrder(2)));
    assert_eq!(TableOrder::try_from(-1_i64), Err(InterpError::BadOrder(-1)));
}

#[test]
fn check_options_defaults_from_json()
{
    let options: InterpolationOptions = serde_json::from_str(r#"{"order":"Linear"}"#).unwrap();
    assert_eq!(options, InterpolationOptions::default().with_order(TableOrder::Linear));
    assert!(options.allow_flip);
    assert!(!options.flip);
}
