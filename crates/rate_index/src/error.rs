use thiserror::Error;

/// Rejected input at the public boundary of the index.
///
/// Every variant is a caller mistake; nothing inside the index can fail once
/// it has been built.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum IndexError {
    #[error("cannot build a rate index over an empty rate sequence")]
    EmptyRates,
    #[error("rate at index {index} is NaN")]
    NanRate { index: usize },
    #[error("range bound {bound} is negative")]
    NegativeBound { bound: i64 },
    #[error("inverted range: left {left} > right {right}")]
    InvertedRange { left: usize, right: usize },
    #[error("range end {right} is out of bounds for {len} rates")]
    OutOfBounds { right: usize, len: usize },
}

impl IndexError {
    /// All index errors are invalid-input errors; hosts map them to a client error.
    pub fn is_invalid_input(&self) -> bool {
        true
    }
}
