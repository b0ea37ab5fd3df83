use crate::core::Scale;
use crate::rigid_body::{BodyDescriptor, BodyOptions};
use crate::rigid_body_system::{Composite, StackCell};
use crate::systems::engine::Engine;

use super::{outline, SceneInstall};

const COLUMNS: u32 = 15;
const ROWS: u32 = 15;
const UNIT: f32 = 20.0;

/// Bouncy, slippery squares stacked into a triangle.
pub fn build(engine: &mut Engine, scale: Scale) -> SceneInstall {
    let size = scale.px(UNIT);
    let pyramid = Composite::pyramid(scale.px(75.0), scale.px(515.0), COLUMNS, ROWS, 0.0, 0.0, |cell: StackCell| {
        BodyDescriptor::rectangle(cell.x, cell.y, size, size)
            .with(BodyOptions {
                restitution: 0.95,
                friction: 0.01,
                density: 0.001,
                render: outline(),
                ..BodyOptions::default()
            })
    });

    let mut install = SceneInstall::default();
    install.composites.push(engine.world.add_composite(pyramid));
    install
}
