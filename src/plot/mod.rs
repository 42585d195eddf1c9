//! Terminal plotting: histogram binning and ASCII chart rendering.

pub mod ascii;
pub mod histogram;

pub use ascii::*;
pub use histogram::*;
