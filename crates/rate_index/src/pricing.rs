use crate::{IndexError, RangeMinIndex};

/// Builds a fresh index over `rates` and answers one inclusive range query.
///
/// Bounds arrive as signed integers from the outside world; negative bounds
/// are rejected before the index is consulted.
pub fn min_rate_in_range(rates: &[f64], left: i64, right: i64) -> Result<f64, IndexError> {
    let left = to_index(left)?;
    let right = to_index(right)?;
    RangeMinIndex::new(rates)?.min(left..=right)
}

fn to_index(bound: i64) -> Result<usize, IndexError> {
    usize::try_from(bound).map_err(|_| IndexError::NegativeBound { bound })
}
