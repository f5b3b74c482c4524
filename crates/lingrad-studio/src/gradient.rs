//! Gradient model: end points, stop positions and stop colors.

use lingrad_engine::coords::{ColorRgba, Vec2};
use thiserror::Error;

use crate::geometry::Axis;

/// Distance of the initial end points from the window corners.
pub const ENDPOINT_INSET: Vec2 = Vec2::new(100.0, 100.0);

/// Stop positions of a freshly initialized gradient.
pub const SEED_STOPS: [f32; 4] = [0.10, 0.25, 0.75, 0.90];

/// Stop colors of a freshly initialized gradient, red, magenta, blue, green.
pub const SEED_COLORS: [ColorRgba; 4] = [
    ColorRgba::new(1.0, 0.0, 0.0, 1.0),
    ColorRgba::new(1.0, 0.0, 1.0, 1.0),
    ColorRgba::new(0.0, 0.0, 1.0, 1.0),
    ColorRgba::new(0.0, 1.0, 0.0, 1.0),
];

#[derive(Debug, Copy, Clone, Eq, PartialEq, Error)]
pub enum GradientError {
    #[error("gradient has {stops} stops but {colors} colors")]
    LengthMismatch { stops: usize, colors: usize },
}

/// A linear gradient in screen space.
///
/// `stops[i]` anchors `colors[i]`; both sequences always have the same length.
/// Stops are kept in list order and are never sorted.
#[derive(Debug, Clone, PartialEq)]
pub struct GradientDefinition {
    pub start: Vec2,
    pub end: Vec2,
    stops: Vec<f32>,
    colors: Vec<ColorRgba>,
}

impl GradientDefinition {
    pub fn new(
        start: Vec2,
        end: Vec2,
        stops: Vec<f32>,
        colors: Vec<ColorRgba>,
    ) -> Result<Self, GradientError> {
        if stops.len() != colors.len() {
            return Err(GradientError::LengthMismatch {
                stops: stops.len(),
                colors: colors.len(),
            });
        }
        Ok(Self { start, end, stops, colors })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    #[inline]
    pub fn stops(&self) -> &[f32] {
        &self.stops
    }

    #[inline]
    pub fn colors(&self) -> &[ColorRgba] {
        &self.colors
    }

    /// Overwrites the position of stop `index`. Returns `false` if there is no such stop.
    pub fn set_stop(&mut self, index: usize, position: f32) -> bool {
        match self.stops.get_mut(index) {
            Some(stop) => {
                *stop = position;
                true
            }
            None => false,
        }
    }

    #[inline]
    pub fn color_mut(&mut self, index: usize) -> Option<&mut ColorRgba> {
        self.colors.get_mut(index)
    }

    /// Projection frame for the current end points.
    #[inline]
    pub fn axis(&self) -> Axis {
        Axis::new(self.start, self.end)
    }

    /// Screen positions of all stops, in list order.
    pub fn stop_points(&self) -> impl Iterator<Item = Vec2> + '_ {
        let axis = self.axis();
        self.stops.iter().map(move |&u| axis.point_for_stop(u))
    }
}

/// Exclusive owner of the edited gradient.
#[derive(Debug, Clone, PartialEq)]
pub struct GradientModel {
    definition: GradientDefinition,
}

impl GradientModel {
    /// Seeds the four-stop sample gradient inset from the window corners.
    pub fn initialize(window_size: Vec2) -> Self {
        Self {
            definition: GradientDefinition {
                start: ENDPOINT_INSET,
                end: window_size - ENDPOINT_INSET,
                stops: SEED_STOPS.to_vec(),
                colors: SEED_COLORS.to_vec(),
            },
        }
    }

    pub fn from_definition(definition: GradientDefinition) -> Self {
        Self { definition }
    }

    #[inline]
    pub fn definition(&self) -> &GradientDefinition {
        &self.definition
    }

    #[inline]
    pub fn definition_mut(&mut self) -> &mut GradientDefinition {
        &mut self.definition
    }

    /// Sets the animated channels for elapsed time `t` (seconds).
    ///
    /// Even stops get `g = 0.5 + sin(t)/2`, odd stops `b = 0.5 + cos(t)/2`.
    /// The result depends on `t` only, so replaying a time replays the colors.
    pub fn animate(&mut self, t: f64) {
        let wave_g = animated_green(t);
        let wave_b = animated_blue(t);

        for (i, color) in self.definition.colors.iter_mut().enumerate() {
            if i % 2 == 0 {
                color.g = wave_g;
            } else {
                color.b = wave_b;
            }
        }
    }
}

#[inline]
pub fn animated_green(t: f64) -> f32 {
    (0.5 + t.sin() / 2.0) as f32
}

#[inline]
pub fn animated_blue(t: f64) -> f32 {
    (0.5 + t.cos() / 2.0) as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model() -> GradientModel {
        GradientModel::initialize(Vec2::new(800.0, 600.0))
    }

    // ── initialize ────────────────────────────────────────────────────────

    #[test]
    fn initialize_insets_endpoints() {
        let def = model().definition().clone();
        assert_eq!(def.start, Vec2::new(100.0, 100.0));
        assert_eq!(def.end, Vec2::new(700.0, 500.0));
    }

    #[test]
    fn initialize_seeds_four_stops() {
        let m = model();
        let def = m.definition();
        assert_eq!(def.stops(), &[0.10, 0.25, 0.75, 0.90]);
        assert_eq!(def.colors(), &SEED_COLORS);
        assert_eq!(def.len(), 4);
    }

    // ── animate ───────────────────────────────────────────────────────────

    #[test]
    fn animate_sets_wave_channels() {
        for t in [0.0, 0.5, 1.0, 3.25, 100.0] {
            let mut m = model();
            m.animate(t);
            let c = m.definition().colors();
            let g = (0.5 + f64::sin(t) / 2.0) as f32;
            let b = (0.5 + f64::cos(t) / 2.0) as f32;
            assert_eq!(c[0].g, g);
            assert_eq!(c[2].g, g);
            assert_eq!(c[1].b, b);
            assert_eq!(c[3].b, b);
        }
    }

    #[test]
    fn animate_leaves_other_channels() {
        let mut m = model();
        m.animate(2.0);
        let c = m.definition().colors();
        assert_eq!((c[0].r, c[0].b, c[0].a), (1.0, 0.0, 1.0));
        assert_eq!((c[1].r, c[1].g, c[1].a), (1.0, 0.0, 1.0));
        assert_eq!((c[2].r, c[2].b, c[2].a), (0.0, 1.0, 1.0));
        assert_eq!((c[3].r, c[3].g, c[3].a), (0.0, 1.0, 1.0));
    }

    #[test]
    fn animate_is_deterministic() {
        let mut a = model();
        let mut b = model();
        a.animate(7.5);
        b.animate(1.0);
        b.animate(7.5);
        let bits = |m: &GradientModel| -> Vec<[u32; 4]> {
            m.definition()
                .colors()
                .iter()
                .map(|c| [c.r.to_bits(), c.g.to_bits(), c.b.to_bits(), c.a.to_bits()])
                .collect()
        };
        assert_eq!(bits(&a), bits(&b));
    }

    #[test]
    fn animate_does_not_touch_geometry() {
        let mut m = model();
        let before = m.definition().clone();
        m.animate(4.0);
        assert_eq!(m.definition().stops(), before.stops());
        assert_eq!(m.definition().start, before.start);
        assert_eq!(m.definition().end, before.end);
    }

    // ── definition ────────────────────────────────────────────────────────

    #[test]
    fn new_rejects_length_mismatch() {
        let err = GradientDefinition::new(
            Vec2::zero(),
            Vec2::new(1.0, 0.0),
            vec![0.0, 1.0],
            vec![ColorRgba::black()],
        )
        .unwrap_err();
        assert_eq!(err, GradientError::LengthMismatch { stops: 2, colors: 1 });
    }

    #[test]
    fn set_stop_ignores_missing_index() {
        let mut m = model();
        assert!(m.definition_mut().set_stop(1, 0.5));
        assert!(!m.definition_mut().set_stop(4, 0.5));
        assert_eq!(m.definition().stops(), &[0.10, 0.5, 0.75, 0.90]);
    }

    #[test]
    fn stop_points_follow_axis() {
        let m = model();
        let points: Vec<Vec2> = m.definition().stop_points().collect();
        assert_eq!(points.len(), 4);
        assert!((points[1].x - 250.0).abs() < 1e-3);
        assert!((points[1].y - 200.0).abs() < 1e-3);
    }
}
