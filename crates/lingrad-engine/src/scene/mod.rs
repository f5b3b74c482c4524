//! Scene (draw stream) types.
//!
//! - renderer-agnostic draw commands
//! - deterministic ordering (z-index + insertion order)
//! - shape-specific push helpers live under `scene::shapes`

mod cmd;
mod list;
mod z_index;

pub mod shapes;

pub use cmd::DrawCmd;
pub use list::{DrawItem, DrawList};
pub use shapes::{Border, CircleCmd, LineCmd};
pub use z_index::{SortKey, ZIndex};
