//! Mouse interaction: hit-testing control points and applying drags.
//!
//! The controller never holds references into the gradient. It keeps a
//! [`DragTarget`] tag and resolves it against the definition on every drag,
//! so a target that no longer resolves simply does nothing.

use lingrad_engine::coords::Vec2;

use crate::config::HitRadii;
use crate::geometry::GeometryError;
use crate::gradient::GradientDefinition;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Endpoint {
    Start,
    End,
}

impl Endpoint {
    fn label(self) -> &'static str {
        match self {
            Endpoint::Start => "start",
            Endpoint::End => "end",
        }
    }
}

/// The control point currently being dragged.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub enum DragTarget {
    #[default]
    None,
    Endpoint(Endpoint),
    Stop(usize),
}

#[derive(Debug, Clone)]
pub struct InteractionController {
    hit: HitRadii,
    target: DragTarget,
    /// Set once a degenerate axis has been reported for the current drag.
    degenerate_reported: bool,
}

impl Default for InteractionController {
    fn default() -> Self {
        Self::new(HitRadii::default())
    }
}

impl InteractionController {
    pub fn new(hit: HitRadii) -> Self {
        Self::with_target(hit, DragTarget::None)
    }

    /// Controller starting from an existing drag state.
    pub fn with_target(hit: HitRadii, target: DragTarget) -> Self {
        Self {
            hit,
            target,
            degenerate_reported: false,
        }
    }

    #[inline]
    pub fn target(&self) -> DragTarget {
        self.target
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.target != DragTarget::None
    }

    #[inline]
    pub fn hit_radii(&self) -> HitRadii {
        self.hit
    }

    /// Control point under `p`, without changing any state.
    ///
    /// Stops are tested first in list order, then `start`, then `end`.
    pub fn hit_test(&self, def: &GradientDefinition, p: Vec2) -> DragTarget {
        let axis = def.axis();

        let stop = def
            .stops()
            .iter()
            .position(|&u| axis.point_for_stop(u).distance_squared(p) < self.hit.stop_sq);
        if let Some(i) = stop {
            return DragTarget::Stop(i);
        }

        if def.start.distance_squared(p) < self.hit.endpoint_sq {
            return DragTarget::Endpoint(Endpoint::Start);
        }
        if def.end.distance_squared(p) < self.hit.endpoint_sq {
            return DragTarget::Endpoint(Endpoint::End);
        }

        DragTarget::None
    }

    /// Starts a drag on whatever lies under `p`. A miss leaves the controller idle.
    pub fn mouse_down(&mut self, def: &GradientDefinition, p: Vec2) -> DragTarget {
        self.target = self.hit_test(def, p);
        self.degenerate_reported = false;

        match self.target {
            DragTarget::Stop(i) => log::info!("gradient stop {i} selected"),
            DragTarget::Endpoint(which) => log::info!("gradient {} selected", which.label()),
            DragTarget::None => log::trace!("mouse down at ({}, {}) hit nothing", p.x, p.y),
        }

        self.target
    }

    /// Moves the dragged control point to `p`.
    ///
    /// End points follow the pointer unclamped. A stop takes the clamped
    /// projection of `p`; on a degenerate axis it is left unchanged and
    /// `DegenerateAxis` is returned (logged once per drag).
    pub fn mouse_drag(&mut self, def: &mut GradientDefinition, p: Vec2) -> Result<(), GeometryError> {
        match self.target {
            DragTarget::None => Ok(()),

            DragTarget::Endpoint(Endpoint::Start) => {
                def.start = p;
                Ok(())
            }
            DragTarget::Endpoint(Endpoint::End) => {
                def.end = p;
                Ok(())
            }

            DragTarget::Stop(i) => {
                if i >= def.len() {
                    return Ok(());
                }

                match def.axis().stop_for_point(p) {
                    Ok(u) => {
                        def.set_stop(i, u);
                        self.degenerate_reported = false;
                        Ok(())
                    }
                    Err(err) => {
                        if !self.degenerate_reported {
                            log::warn!("cannot drag stop {i}: {err}");
                            self.degenerate_reported = true;
                        }
                        Err(err)
                    }
                }
            }
        }
    }

    /// Ends any drag.
    pub fn mouse_up(&mut self) {
        if self.is_dragging() {
            log::debug!("drag of {:?} released", self.target);
        }
        self.target = DragTarget::None;
        self.degenerate_reported = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gradient::{GradientModel, SEED_COLORS};
    use lingrad_engine::coords::ColorRgba;

    fn seeded() -> GradientDefinition {
        GradientModel::initialize(Vec2::new(800.0, 600.0)).definition().clone()
    }

    fn controller() -> InteractionController {
        InteractionController::default()
    }

    // ── hit testing ───────────────────────────────────────────────────────

    #[test]
    fn hits_stop_at_its_screen_position() {
        let def = seeded();
        let p = def.axis().point_for_stop(0.75);
        assert_eq!(controller().hit_test(&def, p), DragTarget::Stop(2));
    }

    #[test]
    fn hit_radius_is_strict() {
        let def = seeded();
        let c = controller();
        let p = def.axis().point_for_stop(0.25);
        assert_eq!(c.hit_test(&def, p + Vec2::new(10.0, 0.0)), DragTarget::Stop(1));
        assert_eq!(c.hit_test(&def, Vec2::new(0.0, 0.0)), DragTarget::None);

        let start = def.start;
        assert_eq!(
            c.hit_test(&def, start + Vec2::new(-8.0, 0.0)),
            DragTarget::Endpoint(Endpoint::Start)
        );
        assert_eq!(c.hit_test(&def, start + Vec2::new(-9.0, 0.0)), DragTarget::None);
    }

    #[test]
    fn stop_radius_boundary() {
        let def = GradientDefinition::new(
            Vec2::new(10.0, 100.0),
            Vec2::new(810.0, 100.0),
            vec![0.5],
            vec![ColorRgba::black()],
        )
        .unwrap();
        let c = controller();
        assert_eq!(def.axis().point_for_stop(0.5), Vec2::new(410.0, 100.0));
        assert_eq!(c.hit_test(&def, Vec2::new(410.0, 110.0)), DragTarget::Stop(0));
        assert_eq!(c.hit_test(&def, Vec2::new(400.0, 101.0)), DragTarget::None);
        assert_eq!(c.hit_test(&def, Vec2::new(409.0, 110.0)), DragTarget::None);
    }

    #[test]
    fn stop_on_start_wins_over_start() {
        let def = GradientDefinition::new(
            Vec2::new(100.0, 100.0),
            Vec2::new(700.0, 500.0),
            vec![0.0, 0.5],
            vec![ColorRgba::black(), ColorRgba::white()],
        )
        .unwrap();
        assert_eq!(controller().hit_test(&def, def.start), DragTarget::Stop(0));
    }

    #[test]
    fn first_overlapping_stop_wins() {
        let def = GradientDefinition::new(
            Vec2::new(0.0, 0.0),
            Vec2::new(400.0, 0.0),
            vec![0.5, 0.51],
            vec![ColorRgba::black(), ColorRgba::white()],
        )
        .unwrap();
        assert_eq!(
            controller().hit_test(&def, Vec2::new(203.0, 0.0)),
            DragTarget::Stop(0)
        );
    }

    #[test]
    fn start_wins_over_end_when_both_hit() {
        let def = GradientDefinition::new(
            Vec2::new(100.0, 100.0),
            Vec2::new(104.0, 100.0),
            Vec::new(),
            Vec::new(),
        )
        .unwrap();
        assert_eq!(
            controller().hit_test(&def, Vec2::new(102.0, 100.0)),
            DragTarget::Endpoint(Endpoint::Start)
        );
    }

    #[test]
    fn empty_stops_fall_through_to_endpoints() {
        let def = GradientDefinition::new(
            Vec2::new(100.0, 100.0),
            Vec2::new(700.0, 500.0),
            Vec::new(),
            Vec::new(),
        )
        .unwrap();
        let c = controller();
        assert_eq!(c.hit_test(&def, def.end), DragTarget::Endpoint(Endpoint::End));
        assert_eq!(c.hit_test(&def, Vec2::new(400.0, 300.0)), DragTarget::None);
    }

    #[test]
    fn custom_radii_are_used() {
        let def = seeded();
        let c = InteractionController::new(HitRadii { stop_sq: 1.0, endpoint_sq: 1.0 });
        let p = def.axis().point_for_stop(0.25) + Vec2::new(3.0, 0.0);
        assert_eq!(c.hit_test(&def, p), DragTarget::None);
    }

    // ── state transitions ─────────────────────────────────────────────────

    #[test]
    fn mouse_down_miss_stays_idle() {
        let def = seeded();
        let mut c = controller();
        assert_eq!(c.mouse_down(&def, Vec2::new(400.0, 50.0)), DragTarget::None);
        assert!(!c.is_dragging());
    }

    #[test]
    fn mouse_down_replaces_previous_target() {
        let def = seeded();
        let mut c = InteractionController::with_target(HitRadii::default(), DragTarget::Stop(3));
        c.mouse_down(&def, def.end);
        assert_eq!(c.target(), DragTarget::Endpoint(Endpoint::End));
    }

    #[test]
    fn mouse_up_returns_to_idle() {
        let mut c = InteractionController::with_target(
            HitRadii::default(),
            DragTarget::Endpoint(Endpoint::Start),
        );
        c.mouse_up();
        assert_eq!(c.target(), DragTarget::None);
        c.mouse_up();
        assert_eq!(c.target(), DragTarget::None);
    }

    // ── dragging ──────────────────────────────────────────────────────────

    #[test]
    fn endpoint_drag_is_unclamped() {
        let mut def = seeded();
        let mut c = InteractionController::with_target(
            HitRadii::default(),
            DragTarget::Endpoint(Endpoint::End),
        );
        c.mouse_drag(&mut def, Vec2::new(-50.0, 2000.0)).unwrap();
        assert_eq!(def.end, Vec2::new(-50.0, 2000.0));
        assert_eq!(def.start, Vec2::new(100.0, 100.0));
    }

    #[test]
    fn stop_drag_changes_only_that_stop() {
        let mut def = seeded();
        let before = def.clone();
        let mut c = InteractionController::with_target(HitRadii::default(), DragTarget::Stop(2));

        let p = def.axis().point_for_stop(0.4);
        c.mouse_drag(&mut def, p).unwrap();

        assert!((def.stops()[2] - 0.4).abs() < 1e-5);
        for i in [0, 1, 3] {
            assert_eq!(def.stops()[i], before.stops()[i]);
        }
        assert_eq!(def.colors(), &SEED_COLORS);
        assert_eq!((def.start, def.end), (before.start, before.end));
    }

    #[test]
    fn stop_drag_past_end_clamps() {
        let mut def = seeded();
        let mut c = InteractionController::with_target(HitRadii::default(), DragTarget::Stop(0));
        c.mouse_drag(&mut def, Vec2::new(5000.0, 5000.0)).unwrap();
        assert_eq!(def.stops()[0], 1.0);
    }

    #[test]
    fn drag_without_target_is_noop() {
        let mut def = seeded();
        let before = def.clone();
        controller().mouse_drag(&mut def, Vec2::new(10.0, 10.0)).unwrap();
        assert_eq!(def, before);
    }

    #[test]
    fn stale_stop_index_is_noop() {
        let mut def = seeded();
        let before = def.clone();
        let mut c = InteractionController::with_target(HitRadii::default(), DragTarget::Stop(9));
        assert!(c.mouse_drag(&mut def, Vec2::new(300.0, 300.0)).is_ok());
        assert_eq!(def, before);
    }

    #[test]
    fn degenerate_axis_leaves_stop_unchanged() {
        let mut def = seeded();
        def.end = def.start;
        let mut c = InteractionController::with_target(HitRadii::default(), DragTarget::Stop(1));

        let err = c.mouse_drag(&mut def, Vec2::new(300.0, 300.0)).unwrap_err();
        assert_eq!(err, GeometryError::DegenerateAxis);
        assert_eq!(def.stops()[1], 0.25);

        // Still reported on every move; only the log line is deduplicated.
        assert!(c.mouse_drag(&mut def, Vec2::new(310.0, 300.0)).is_err());
        assert_eq!(c.target(), DragTarget::Stop(1));
    }
}
