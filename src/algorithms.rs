pub(crate) mod batch;
pub mod periodic;
