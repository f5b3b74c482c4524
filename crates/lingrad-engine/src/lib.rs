//! lingrad engine crate.
//!
//! Platform + GPU runtime pieces used by the gradient studio: window loop,
//! input translation, frame timing, logging, and instanced shape renderers.

pub mod device;
pub mod window;
pub mod input;
pub mod time;
pub mod core;

pub mod logging;
pub mod coords;
pub mod render;
pub mod paint;
pub mod scene;
