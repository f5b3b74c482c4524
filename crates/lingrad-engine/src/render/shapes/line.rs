use bytemuck::{Pod, Zeroable};

use crate::render::quad::QuadBatch;
use crate::render::{RenderCtx, RenderTarget};
use crate::scene::{DrawCmd, DrawList, LineCmd};

/// Renderer for `DrawCmd::Line`: each segment is a unit quad stretched along
/// the segment and extruded by `width` across it.
pub struct LineRenderer {
    batch: QuadBatch,
    instances: Vec<LineInstance>,
}

impl Default for LineRenderer {
    fn default() -> Self {
        Self {
            batch: QuadBatch::new(
                "lingrad line",
                include_str!("shaders/line.wgsl"),
                LineInstance::layout,
            ),
            instances: Vec::new(),
        }
    }
}

impl LineRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render(
        &mut self,
        ctx: &RenderCtx<'_>,
        target: &mut RenderTarget<'_>,
        draw_list: &mut DrawList,
    ) {
        self.instances.clear();
        self.instances.extend(draw_list.iter_in_paint_order().filter_map(|item| match &item.cmd {
            DrawCmd::Line(cmd) => LineInstance::from_cmd(cmd),
            _ => None,
        }));

        self.batch.draw(ctx, target, &self.instances);
    }
}

/// Instance data layout (36 bytes):
///
///  offset  0  from   [f32; 2]   loc 1
///  offset  8  to     [f32; 2]   loc 2
///  offset 16  color  [f32; 4]   loc 3
///  offset 32  width  f32        loc 4
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
struct LineInstance {
    from: [f32; 2],
    to: [f32; 2],
    color: [f32; 4],
    width: f32,
}

impl LineInstance {
    const ATTRS: [wgpu::VertexAttribute; 4] = wgpu::vertex_attr_array![
        1 => Float32x2, // from
        2 => Float32x2, // to
        3 => Float32x4, // color
        4 => Float32    // width
    ];

    fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<LineInstance>() as u64,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &Self::ATTRS,
        }
    }

    fn from_cmd(cmd: &LineCmd) -> Option<Self> {
        // Zero-length segments have no direction to extrude along.
        if !(cmd.width > 0.0) || cmd.from.distance_squared(cmd.to) <= f32::EPSILON {
            return None;
        }

        Some(Self {
            from: [cmd.from.x, cmd.from.y],
            to: [cmd.to.x, cmd.to.y],
            color: cmd.color.to_array(),
            width: cmd.width,
        })
    }
}
