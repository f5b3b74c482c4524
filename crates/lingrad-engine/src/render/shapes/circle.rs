use bytemuck::{Pod, Zeroable};

use crate::render::quad::QuadBatch;
use crate::render::{RenderCtx, RenderTarget};
use crate::scene::{CircleCmd, DrawCmd, DrawList};

/// Renderer for `DrawCmd::Circle`.
///
/// Fill and border are premultiplied colors; the border is an AA ring painted
/// on the inside of the circle's edge.
pub struct CircleRenderer {
    batch: QuadBatch,
    instances: Vec<CircleInstance>,
}

impl Default for CircleRenderer {
    fn default() -> Self {
        Self {
            batch: QuadBatch::new(
                "lingrad circle",
                include_str!("shaders/circle.wgsl"),
                CircleInstance::layout,
            ),
            instances: Vec::new(),
        }
    }
}

impl CircleRenderer {
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
            DrawCmd::Circle(cmd) => CircleInstance::from_cmd(cmd),
            _ => None,
        }));

        self.batch.draw(ctx, target, &self.instances);
    }
}

// ── GPU types ─────────────────────────────────────────────────────────────

/// Instance data layout (48 bytes):
///
///  offset  0  center       [f32; 2]   loc 1
///  offset  8  radius_bw    [f32; 2]   loc 2  (.x = radius, .y = border_width)
///  offset 16  fill         [f32; 4]   loc 3
///  offset 32  border_color [f32; 4]   loc 4
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
struct CircleInstance {
    center: [f32; 2],
    radius_bw: [f32; 2],
    fill: [f32; 4],
    border_color: [f32; 4],
}

impl CircleInstance {
    const ATTRS: [wgpu::VertexAttribute; 4] = wgpu::vertex_attr_array![
        1 => Float32x2, // center
        2 => Float32x2, // radius_bw
        3 => Float32x4, // fill
        4 => Float32x4  // border_color
    ];

    fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<CircleInstance>() as u64,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &Self::ATTRS,
        }
    }

    fn from_cmd(cmd: &CircleCmd) -> Option<Self> {
        if !(cmd.radius > 0.0) || !cmd.center.is_finite() {
            return None;
        }

        let (border_width, border_color) = match &cmd.border {
            Some(b) => (b.width.clamp(0.0, cmd.radius), b.color.to_array()),
            None => (0.0, [0.0; 4]),
        };

        Some(Self {
            center: [cmd.center.x, cmd.center.y],
            radius_bw: [cmd.radius, border_width],
            fill: cmd.fill.to_array(),
            border_color,
        })
    }
}
