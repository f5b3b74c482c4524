//! Mapping between screen points and normalized positions along the gradient axis.
//!
//! Screen space is y-down, so the axis angle is measured with the vertical
//! component flipped: `atan2(start.y - end.y, end.x - start.x)`.

use lingrad_engine::coords::Vec2;
use thiserror::Error;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Error)]
pub enum GeometryError {
    /// `start` and `end` coincide, so no screen point maps to a stop position.
    #[error("gradient axis is degenerate: start and end points coincide")]
    DegenerateAxis,
}

/// Projection frame of a gradient axis, derived from its two end points.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Axis {
    start: Vec2,
    end: Vec2,
    length: f32,
    angle: f32,
    cos: f32,
    sin: f32,
}

impl Axis {
    pub fn new(start: Vec2, end: Vec2) -> Self {
        let angle = (start.y - end.y).atan2(end.x - start.x);
        Self {
            start,
            end,
            length: start.distance(end),
            angle,
            cos: angle.cos(),
            sin: angle.sin(),
        }
    }

    #[inline]
    pub fn start(&self) -> Vec2 {
        self.start
    }

    #[inline]
    pub fn end(&self) -> Vec2 {
        self.end
    }

    /// Euclidean distance between the end points.
    #[inline]
    pub fn length(&self) -> f32 {
        self.length
    }

    /// Axis direction in radians, y-up convention.
    #[inline]
    pub fn angle(&self) -> f32 {
        self.angle
    }

    /// Screen point of the stop at normalized position `u`.
    ///
    /// Defined for every axis; on a degenerate one all stops sit on `start`.
    pub fn point_for_stop(&self, u: f32) -> Vec2 {
        self.start
            + Vec2::new(
                self.length * u * self.cos,
                -self.length * u * self.sin,
            )
    }

    /// Scalar coordinate of `p` along the axis direction.
    #[inline]
    pub fn projected_coordinate(&self, p: Vec2) -> f32 {
        p.x * self.cos - p.y * self.sin
    }

    /// Projected distance from `start` to `end`; zero when degenerate.
    #[inline]
    pub fn projected_span(&self) -> f32 {
        self.projected_coordinate(self.end) - self.projected_coordinate(self.start)
    }

    #[inline]
    pub fn is_degenerate(&self) -> bool {
        !(self.projected_span().abs() > f32::EPSILON)
    }

    /// Normalized position of the projection of `p` onto the axis, clamped to `[0, 1]`.
    pub fn stop_for_point(&self, p: Vec2) -> Result<f32, GeometryError> {
        if self.is_degenerate() {
            return Err(GeometryError::DegenerateAxis);
        }
        let span = self.projected_span();
        let u = (self.projected_coordinate(p) - self.projected_coordinate(self.start)) / span;
        Ok(u.clamp(0.0, 1.0))
    }
}
