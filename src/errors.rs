use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum InterpError
{
    #[error("wrong number of inputs: got {got}, expected {min} to {max}")]
    InputCount { got: usize, min: usize, max: usize },
    #[error("too many output arguments: {0}")]
    OutputCount(usize),
    #[error("{name} must be complex double")]
    NotComplexDouble { name: &'static str },
    #[error("{name} must be real double")]
    NotRealDouble { name: &'static str },
    #[error("{name} must be scalar int32")]
    NotScalarInt32 { name: &'static str },
    #[error("{name} must be at least 1, got {value}")]
    NonPositive { name: &'static str, value: i64 },
    #[error("h size problem: J={neighbors} L={oversampling} needs {expected} x 1 entries, table is {rows} x {cols}")]
    TableSize { neighbors: usize, oversampling: usize, expected: usize, rows: usize, cols: usize },
    #[error("complex table planes differ in length: re={re} im={im}")]
    TablePlanes { re: usize, im: usize },
    #[error("t_m must be col vector, got {cols} columns")]
    NotColumnVector { cols: usize },
    #[error("bad order {0}, expected 0 | 1")]
    BadOrder(i64),
    #[error("bad flip {0}, expected 0 | 1")]
    BadFlip(i64),
    #[error("only 0th order implemented for complex tables")]
    ComplexOrder,
    #[error("flip requested but flip support is disabled")]
    FlipDisabled,
    #[error("flip is only defined for real tables")]
    ComplexFlip,
    #[error("matrix {name} has shape {rows} x {cols} but {len} entries")]
    MatrixShape { name: &'static str, rows: usize, cols: usize, len: usize },
    #[error("{name} has {got} rows, expected {expected}")]
    RowMismatch { name: &'static str, got: usize, expected: usize },
    #[error("serialization failed")]
    SerializationFailed,
    #[error("deserialization failed")]
    DeserializationFailed,
    #[error("LZ4 decompression failed")]
    LZ4DecompressionFailed,
    #[error("file I/O error")]
    FileIOError,
    #[error("failed to read buffer")]
    ReadBufferFailed,
    #[error("failed to write buffer")]
    WriteBufferFailed,
}
