use super::shapes::{CircleCmd, LineCmd};

/// Renderer-agnostic draw command stream.
///
/// Each variant has a push helper under `scene::shapes::*` and a matching
/// renderer under `render::shapes::*`.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Line(LineCmd),
    Circle(CircleCmd),
}
