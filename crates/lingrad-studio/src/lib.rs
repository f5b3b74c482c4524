//! Interactive multi-stop linear gradient editor.
//!
//! The gradient core (`gradient`, `geometry`, `interaction`) is plain data and
//! math with no GPU types; `uniforms`, `overlay` and `renderer` turn it into
//! draw calls on top of `lingrad_engine`.

pub mod config;
pub mod editor;
pub mod geometry;
pub mod gradient;
pub mod interaction;
pub mod overlay;
pub mod renderer;
pub mod resources;
pub mod uniforms;

pub use config::EditorConfig;
pub use editor::GradientEditor;
