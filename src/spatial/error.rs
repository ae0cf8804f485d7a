#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("expected at least 3 components, got {len}")]
pub struct SliceLengthError {
	pub len: usize
}
