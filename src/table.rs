pub mod lookup;

use std::io::Write;

use num_traits::Float;
use serde::{Deserialize, Serialize};

use crate::errors::InterpError;
use crate::serialization::SerializationFormat;

/// Tabulated samples of the interpolation window h(t) on [-J/2, J/2].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum TableValues<T>
{
    Real(Vec<T>),
    Complex { re: Vec<T>, im: Vec<T> },
}

///
/// Dense kernel table with `J*L + 1` entries. Entry 0 is h(-J/2), entry `J*L` is h(J/2)
/// and consecutive entries are `1/L` apart.
///
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct KernelTable<T>
{
    neighbors: usize,
    oversampling: usize,
    values: TableValues<T>,
}

/// Converts a count to the scalar type. Every float type can hold a `usize` (possibly rounded).
#[inline]
pub(crate) fn to_float<T: Float>(value: usize) -> T
{
    T::from(value).unwrap_or_else(T::infinity)
}

impl<T: Float> KernelTable<T>
{
    /// Real-valued table for `neighbors` (J) taps at `oversampling` (L) samples per unit.
    pub fn real(neighbors: usize, oversampling: usize, values: Vec<T>) -> Result<Self, InterpError>
    {
        let table = Self { neighbors, oversampling, values: TableValues::Real(values) };
        table.validate()?;
        Ok(table)
    }

    /// Complex-valued table given as separate real and imaginary planes.
    pub fn complex(neighbors: usize, oversampling: usize, re: Vec<T>, im: Vec<T>) -> Result<Self, InterpError>
    {
        let table = Self { neighbors, oversampling, values: TableValues::Complex { re, im } };
        table.validate()?;
        Ok(table)
    }

    ///
    /// Checks J >= 1, L >= 1 and that the table holds exactly `J*L + 1` entries.
    ///
    pub fn validate(&self) -> Result<(), InterpError>
    {
        if self.neighbors == 0
        {
            return Err(InterpError::NonPositive { name: "J", value: 0 });
        }
        if self.oversampling == 0
        {
            return Err(InterpError::NonPositive { name: "L", value: 0 });
        }
        if let TableValues::Complex { re, im } = &self.values
        {
            if re.len() != im.len()
            {
                return Err(InterpError::TablePlanes { re: re.len(), im: im.len() });
            }
        }
        let expected = self.expected_len();
        if self.len() != expected
        {
            return Err(InterpError::TableSize
            {
                neighbors: self.neighbors,
                oversampling: self.oversampling,
                expected,
                rows: self.len(),
                cols: 1,
            });
        }
        Ok(())
    }

    #[inline]
    fn expected_len(&self) -> usize
    {
        self.neighbors * self.oversampling + 1
    }

    /// Number of taps J.
    #[inline]
    pub fn neighbors(&self) -> usize
    {
        self.neighbors
    }

    /// Samples per unit grid spacing L.
    #[inline]
    pub fn oversampling(&self) -> usize
    {
        self.oversampling
    }

    pub fn len(&self) -> usize
    {
        match &self.values
        {
            TableValues::Real(h) => h.len(),
            TableValues::Complex { re, .. } => re.len(),
        }
    }

    pub fn is_empty(&self) -> bool
    {
        self.len() == 0
    }

    pub fn is_complex(&self) -> bool
    {
        matches!(self.values, TableValues::Complex { .. })
    }

    pub fn values(&self) -> &TableValues<T>
    {
        &self.values
    }

    /// Table position of the window centre t = 0, i.e. `J*L/2`.
    #[inline]
    pub fn center(&self) -> T
    {
        to_float::<T>(self.neighbors * self.oversampling) / to_float(2)
    }

    /// Maps an offset `t` in grid units to a (fractional) table position.
    #[inline]
    pub fn position(&self, offset: T) -> T
    {
        offset * to_float(self.oversampling) + self.center()
    }
}

impl<T: Float + Serialize + serde::de::DeserializeOwned> KernelTable<T>
{
    pub fn write(&self, path: &str, format: SerializationFormat) -> Result<(), InterpError>
    {
        let mut file = std::io::BufWriter::new(std::fs::File::create(path).map_err(|_|InterpError::FileIOError)?);
        let buffer = crate::serialization::serialize(self, format)?;
        file.write_all(&buffer).map_err(|_|InterpError::WriteBufferFailed)?;
        Ok(())
    }

    ///
    /// Write table to buffer with the specified serialization format.
    ///
    pub fn write_buffer(&self, format: SerializationFormat) -> Result<Vec<u8>, InterpError>
    {
        crate::serialization::serialize(self, format)
    }

    ///
    /// Reads a table from a buffer. The table invariants are re-checked after decoding.
    ///
    pub fn read_buffer(buffer: &[u8], format: SerializationFormat) -> Result<Self, InterpError>
    {
        let table: Self = crate::serialization::deserialize(buffer, format)?;
        table.validate()?;
        Ok(table)
    }

    pub fn read<Reader: std::io::Read>(mut reader: Reader, format: SerializationFormat) -> Result<Self, InterpError>
    {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes).map_err(|_|InterpError::ReadBufferFailed)?;
        Self::read_buffer(&bytes, format)
    }
}

/// Windows sampled for tests: raised cosine cos^2(pi t / J) on [-J/2, J/2].
#[cfg(test)]
pub(crate) fn cosine_window(neighbors: usize, oversampling: usize) -> Vec<f64>
{
    let n = neighbors * oversampling + 1;
    (0..n).map(|i|
    {
        let t = i as f64 / oversampling as f64 - neighbors as f64 / 2.0;
        let c = (std::f64::consts::PI * t / neighbors as f64).cos();
        c * c
    }).collect()
}

#[test]
fn check_table_length()
{
    assert!(KernelTable::real(4, 4, vec![0.0_f64; 17]).is_ok());
    let err = KernelTable::real(4, 4, vec![0.0_f64; 16]).unwrap_err();
    assert_eq!(err, InterpError::TableSize { neighbors: 4, oversampling: 4, expected: 17, rows: 16, cols: 1 });
    assert!(matches!(KernelTable::real(0, 4, vec![0.0_f64; 1]), Err(InterpError::NonPositive { name: "J", .. })));
    assert!(matches!(KernelTable::real(4, 0, vec![0.0_f64; 1]), Err(InterpError::NonPositive { name: "L", .. })));
    assert!(matches!(KernelTable::complex(2, 2, vec![0.0_f64; 5], vec![0.0; 4]), Err(InterpError::TablePlanes { .. })));
}

#[test]
fn check_table_position()
{
    let table = KernelTable::real(4, 4, cosine_window(4, 4)).unwrap();
    assert_eq!(table.center(), 8.0);
    assert_eq!(table.position(-2.0), 0.0);
    assert_eq!(table.position(2.0), 16.0);
    assert_eq!(table.position(0.25), 9.0);

    // odd J*L puts the centre between two samples
    let odd = KernelTable::real(3, 1, vec![0.0_f64; 4]).unwrap();
    assert_eq!(odd.center(), 1.5);
    assert!(!odd.is_complex());
}

#[test]
fn check_table_persistence()
{
    let table = KernelTable::complex(2, 3, cosine_window(2, 3), vec![0.5_f64; 7]).unwrap();
    for format in [SerializationFormat::Json, SerializationFormat::JsonLz4, SerializationFormat::Bincode, SerializationFormat::BincodeLz4]
    {
        let bytes = table.write_buffer(format).unwrap();
        let restored = KernelTable::<f64>::read(bytes.as_slice(), format).unwrap();
        assert_eq!(table, restored);
    }
}

#[test]
fn check_corrupt_table_rejected()
{
    let json = r#"{"neighbors":2,"oversampling":2,"values":{"Real":[0.0,1.0,0.0]}}"#;
    let err = KernelTable::<f64>::read_buffer(json.as_bytes(), SerializationFormat::Json).unwrap_err();
    assert!(matches!(err, InterpError::TableSize { expected: 5, rows: 3, .. }));
}
