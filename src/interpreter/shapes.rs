//! Body descriptors for instruction-spawned shapes.
//!
//! Positions and sizes are design units; everything goes through the scale
//! before it reaches the descriptor. Shapes drop from the top (y = 0).

use std::f32::consts::FRAC_PI_2;

use crate::core::Scale;
use crate::rigid_body::{BodyDescriptor, BodyOptions, RenderStyle};

pub const CIRCLE_RADIUS: f32 = 30.0;
pub const CIRCLE_X: f32 = 100.0;
pub const SQUARE_SIZE: f32 = 60.0;
pub const SQUARE_X: f32 = 225.0;
pub const TRIANGLE_RADIUS: f32 = 40.0;
pub const TRIANGLE_X: f32 = 350.0;
pub const ROW_START_X: f32 = 50.0;
pub const ROW_SPACING: f32 = 87.0;
pub const SPAWN_Y: f32 = 0.0;

pub fn circle(scale: Scale, fill: &str, jitter: f32) -> BodyDescriptor {
    BodyDescriptor::circle(scale.px(CIRCLE_X + jitter), scale.px(SPAWN_Y), scale.px(CIRCLE_RADIUS)).with(BodyOptions {
        restitution: 0.95,
        friction: 0.0,
        density: 0.01,
        render: RenderStyle::fill(fill),
        ..BodyOptions::default()
    })
}

pub fn square(scale: Scale, fill: &str) -> BodyDescriptor {
    let size = scale.px(SQUARE_SIZE);
    BodyDescriptor::rectangle(scale.px(SQUARE_X), scale.px(SPAWN_Y), size, size).with(BodyOptions {
        restitution: 0.95,
        friction: 0.25,
        density: 0.01,
        render: RenderStyle::fill(fill),
        ..BodyOptions::default()
    })
}

/// Rotated a quarter turn so a flat edge faces the floor.
pub fn triangle(scale: Scale, fill: &str, jitter: f32) -> BodyDescriptor {
    BodyDescriptor::polygon(scale.px(TRIANGLE_X + jitter), scale.px(SPAWN_Y), 3, scale.px(TRIANGLE_RADIUS)).with(
        BodyOptions {
            restitution: 0.75,
            friction: 0.5,
            density: 0.01,
            angle: FRAC_PI_2,
            render: RenderStyle::fill(fill),
            ..BodyOptions::default()
        },
    )
}

/// The `index`-th circle of a row spawned from a color array.
pub fn row_circle(scale: Scale, fill: &str, index: usize, density: f32, drag: f32) -> BodyDescriptor {
    let x = ROW_START_X + index as f32 * ROW_SPACING;
    BodyDescriptor::circle(scale.px(x), scale.px(SPAWN_Y), scale.px(CIRCLE_RADIUS)).with(BodyOptions {
        restitution: 0.95,
        friction: 0.0,
        density,
        friction_air: drag,
        render: RenderStyle::fill(fill),
        ..BodyOptions::default()
    })
}
