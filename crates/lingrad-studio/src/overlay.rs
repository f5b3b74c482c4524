//! Control-point overlay drawn on top of the gradient.

use lingrad_engine::paint::Color;
use lingrad_engine::scene::{Border, DrawList, ZIndex};

use crate::gradient::GradientDefinition;

pub const AXIS_LINE_WIDTH: f32 = 1.0;
pub const ENDPOINT_RADIUS: f32 = 8.0;
pub const STOP_RADIUS: f32 = 10.0;
pub const STOP_STROKE_WIDTH: f32 = 2.0;

const AXIS_Z: ZIndex = ZIndex::new(0);
const ENDPOINT_Z: ZIndex = ZIndex::new(1);
const STOP_Z: ZIndex = ZIndex::new(2);

/// Appends the axis line, the end point handles and one marker per stop.
///
/// Stop markers are filled with the stop color and outlined in black. The
/// stroke is centered on `STOP_RADIUS`, so the marker extends half the stroke
/// past it.
pub fn build_overlay(def: &GradientDefinition, list: &mut DrawList) {
    let black = Color::black();

    list.push_line(AXIS_Z, def.start, def.end, AXIS_LINE_WIDTH, black);

    list.push_solid_circle(ENDPOINT_Z, def.start, ENDPOINT_RADIUS, black);
    list.push_solid_circle(ENDPOINT_Z, def.end, ENDPOINT_RADIUS, black);

    let outer = STOP_RADIUS + STOP_STROKE_WIDTH * 0.5;
    for (center, &color) in def.stop_points().zip(def.colors()) {
        list.push_circle(
            STOP_Z,
            center,
            outer,
            Color::from(color),
            Some(Border::new(STOP_STROKE_WIDTH, black)),
        );
    }
}
