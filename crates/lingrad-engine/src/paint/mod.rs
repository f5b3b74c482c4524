//! Paint model shared between the editor and renderers.
//!
//! Renderers consume linear premultiplied colors; editor-side colors are
//! straight-alpha `coords::ColorRgba` and are converted at the draw boundary.

pub mod color;

pub use color::Color;
