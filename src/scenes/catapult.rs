use crate::core::Scale;
use crate::rigid_body::{BodyDescriptor, BodyOptions, CollisionFilter, Vec2};
use crate::rigid_body_system::Constraint;
use crate::systems::engine::Engine;

use super::{outline, SceneInstall};

/// Lever on a fulcrum with a ball resting on the far end.
///
/// Arm and fulcrum share a non-colliding group so the arm can swing through
/// the fulcrum while still hitting everything else. The arm turns freely on a
/// pin at its center.
pub fn build(engine: &mut Engine, scale: Scale) -> SceneInstall {
    let s = |v: f32| scale.px(v);
    let group = engine.world.next_group(true);
    let filter = CollisionFilter { group };

    let arm = BodyDescriptor::rectangle(s(225.0), s(610.0), s(250.0), s(20.0))
        .with(BodyOptions {
            collision_filter: filter,
            render: outline(),
            ..BodyOptions::default()
        });

    let fulcrum = BodyDescriptor::rectangle(s(225.0), s(635.0), s(20.0), s(80.0))
        .with(BodyOptions {
            is_static: true,
            collision_filter: filter,
            render: outline(),
            ..BodyOptions::default()
        });

    let stand = BodyDescriptor::rectangle(s(325.0), s(648.0), s(10.0), s(54.0))
        .with(BodyOptions {
            is_static: true,
            render: outline(),
            ..BodyOptions::default()
        });

    let projectile = BodyDescriptor::circle(s(325.0), s(580.0), s(20.0))
        .with(BodyOptions {
            restitution: 0.75,
            friction: 0.1,
            density: 0.0001,
            render: outline(),
            ..BodyOptions::default()
        });

    let fulcrum = engine.world.add_body(fulcrum);
    let stand = engine.world.add_body(stand);
    let projectile = engine.world.add_body(projectile);
    let arm = engine.world.add_body(arm);
    engine.world.add_constraint(Constraint::pin(arm, Vec2::new(s(225.0), s(610.0))));

    let mut install = SceneInstall::default();
    for id in [stand, fulcrum, projectile, arm] {
        install.track_body(engine, id);
    }
    install
}
