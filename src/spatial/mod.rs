mod error;
mod v3f;

pub use error::SliceLengthError;
pub use v3f::{V3f, ComponentIter};
