//! SVG chart rendering.

pub mod svg;

pub use svg::*;
