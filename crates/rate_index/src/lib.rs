mod error;
mod pricing;
mod segment_tree;

pub use error::IndexError;
pub use pricing::min_rate_in_range;
pub use segment_tree::RangeMinIndex;
