use crate::core::Scale;
use crate::rigid_body::{BodyDescriptor, BodyOptions};
use crate::rigid_body_system::{Composite, StackCell};
use crate::systems::engine::Engine;

use super::{outline, SceneInstall};

const HEIGHT: u32 = 10;
const UNIT: f32 = 30.0;

/// One column of heavy, grippy, barely bouncing crates.
pub fn build(engine: &mut Engine, scale: Scale) -> SceneInstall {
    let size = scale.px(UNIT);
    let column = Composite::stack(scale.px(335.0), scale.px(375.0), 1, HEIGHT, 0.0, 0.0, |cell: StackCell| {
        BodyDescriptor::rectangle(cell.x, cell.y, size, size)
            .with(BodyOptions {
                restitution: 0.001,
                friction: 1.25,
                density: 0.05,
                render: outline(),
                ..BodyOptions::default()
            })
    });

    let mut install = SceneInstall::default();
    install.composites.push(engine.world.add_composite(column));
    install
}
