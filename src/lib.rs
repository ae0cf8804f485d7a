//! Single-precision 3D vector value type.

mod spatial;

pub use spatial::{V3f, ComponentIter, SliceLengthError};
