//! GPU rendering subsystem.
//!
//! Renderers consume `scene` draw streams and issue GPU commands via wgpu.
//! Each renderer owns its GPU resources (pipelines, buffers) and creates them lazily.
//!
//! Convention:
//! - CPU geometry is in logical pixels (top-left origin, +Y down).
//! - Vertex shaders convert to NDC using a viewport uniform.

mod ctx;
pub mod quad;
mod shader;
pub mod shapes;

pub use ctx::{RenderCtx, RenderTarget};
pub use shader::{compile_wgsl, ShaderError};
