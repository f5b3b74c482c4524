//! Shape renderers.

pub mod circle;
pub mod line;
