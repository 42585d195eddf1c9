//! Descriptive statistics: column summaries and quantiles.

pub mod describe;
pub mod quantile;

pub use describe::*;
pub use quantile::*;
