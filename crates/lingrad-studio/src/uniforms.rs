//! Shader inputs derived from the gradient definition.

use bytemuck::{Pod, Zeroable};
use lingrad_engine::coords::{ColorRgba, Rect, Vec2};

use crate::gradient::GradientDefinition;

/// Stops the fragment shader can hold. Extra stops stay editable but are not shaded.
pub const MAX_GPU_STOPS: usize = 16;

/// Uniform set for one frame, mirroring the definition exactly.
#[derive(Debug, Clone, PartialEq)]
pub struct GradientUniforms {
    pub num_stops: i32,
    pub gradient_start_pos: Vec2,
    pub gradient_end_pos: Vec2,
    pub colors: Vec<ColorRgba>,
    pub stops: Vec<f32>,
    pub window_height: f32,
}

impl GradientUniforms {
    pub fn from_definition(def: &GradientDefinition, window_size: Vec2) -> Self {
        Self {
            num_stops: i32::try_from(def.len()).unwrap_or(i32::MAX),
            gradient_start_pos: def.start,
            gradient_end_pos: def.end,
            colors: def.colors().to_vec(),
            stops: def.stops().to_vec(),
            window_height: window_size.y,
        }
    }

    /// `true` when the shader will only see the first [`MAX_GPU_STOPS`] stops.
    #[inline]
    pub fn is_truncated(&self) -> bool {
        self.stops.len() > MAX_GPU_STOPS
    }
}

/// std140-compatible image of [`GradientUniforms`] plus the target rect.
///
/// Stops are packed four per `vec4` so the array keeps a 16-byte stride.
/// Layout must match `struct Gradient` in the gradient shaders.
#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
pub struct GradientUniformBlock {
    pub num_stops: i32,
    pub _pad: u32,
    pub start: [f32; 2],
    pub end: [f32; 2],
    pub viewport: [f32; 2],
    pub rect_origin: [f32; 2],
    pub rect_size: [f32; 2],
    pub colors: [[f32; 4]; MAX_GPU_STOPS],
    pub stops: [[f32; 4]; MAX_GPU_STOPS / 4],
}

impl GradientUniformBlock {
    pub fn new(uniforms: &GradientUniforms, window_width: f32, rect: Rect) -> Self {
        let count = uniforms.stops.len().min(MAX_GPU_STOPS);

        let mut colors = [[0.0; 4]; MAX_GPU_STOPS];
        for (dst, c) in colors.iter_mut().zip(&uniforms.colors) {
            *dst = c.to_array();
        }

        let mut stops = [[0.0; 4]; MAX_GPU_STOPS / 4];
        for (i, &u) in uniforms.stops.iter().take(MAX_GPU_STOPS).enumerate() {
            stops[i / 4][i % 4] = u;
        }

        Self {
            num_stops: count as i32,
            _pad: 0,
            start: [uniforms.gradient_start_pos.x, uniforms.gradient_start_pos.y],
            end: [uniforms.gradient_end_pos.x, uniforms.gradient_end_pos.y],
            viewport: [window_width, uniforms.window_height],
            rect_origin: [rect.origin.x, rect.origin.y],
            rect_size: [rect.size.x, rect.size.y],
            colors,
            stops,
        }
    }

    /// Stop `i` as the shader reads it.
    pub fn stop(&self, i: usize) -> f32 {
        self.stops[i / 4][i % 4]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gradient::GradientModel;

    fn uniforms() -> GradientUniforms {
        let model = GradientModel::initialize(Vec2::new(800.0, 600.0));
        GradientUniforms::from_definition(model.definition(), Vec2::new(800.0, 600.0))
    }

    fn many_stops(n: usize) -> GradientDefinition {
        let stops = (0..n).map(|i| i as f32 / n as f32).collect();
        let colors = (0..n).map(|i| ColorRgba::new(i as f32, 0.0, 0.0, 1.0)).collect();
        GradientDefinition::new(Vec2::zero(), Vec2::new(100.0, 0.0), stops, colors).unwrap()
    }

    // ── derivation ────────────────────────────────────────────────────────

    #[test]
    fn mirrors_definition() {
        let u = uniforms();
        assert_eq!(u.num_stops, 4);
        assert_eq!(u.gradient_start_pos, Vec2::new(100.0, 100.0));
        assert_eq!(u.gradient_end_pos, Vec2::new(700.0, 500.0));
        assert_eq!(u.stops, vec![0.10, 0.25, 0.75, 0.90]);
        assert_eq!(u.colors[1], ColorRgba::new(1.0, 0.0, 1.0, 1.0));
        assert_eq!(u.window_height, 600.0);
        assert!(!u.is_truncated());
    }

    #[test]
    fn keeps_every_stop_on_cpu_side() {
        let u = GradientUniforms::from_definition(&many_stops(20), Vec2::new(10.0, 10.0));
        assert_eq!(u.num_stops, 20);
        assert_eq!(u.stops.len(), 20);
        assert!(u.is_truncated());
    }

    // ── gpu block ─────────────────────────────────────────────────────────

    #[test]
    fn block_layout_matches_shader() {
        assert_eq!(std::mem::size_of::<GradientUniformBlock>(), 368);
        assert_eq!(std::mem::offset_of!(GradientUniformBlock, colors), 48);
        assert_eq!(std::mem::offset_of!(GradientUniformBlock, stops), 304);
    }

    #[test]
    fn block_packs_stops_four_per_vec4() {
        let rect = Rect::new(200.0, 200.0, 400.0, 200.0);
        let block = GradientUniformBlock::new(&uniforms(), 800.0, rect);
        assert_eq!(block.num_stops, 4);
        assert_eq!(block.stops[0], [0.10, 0.25, 0.75, 0.90]);
        assert_eq!(block.stop(2), 0.75);
        assert_eq!(block.colors[3], [0.0, 1.0, 0.0, 1.0]);
        assert_eq!(block.colors[4], [0.0; 4]);
        assert_eq!(block.viewport, [800.0, 600.0]);
        assert_eq!(block.rect_origin, [200.0, 200.0]);
        assert_eq!(block.rect_size, [400.0, 200.0]);
    }

    #[test]
    fn block_truncates_extra_stops() {
        let u = GradientUniforms::from_definition(&many_stops(20), Vec2::new(10.0, 10.0));
        let block = GradientUniformBlock::new(&u, 10.0, Rect::default());
        assert_eq!(block.num_stops, MAX_GPU_STOPS as i32);
        assert_eq!(block.stop(15), 15.0 / 20.0);
        assert_eq!(block.colors[15][0], 15.0);
    }
}
