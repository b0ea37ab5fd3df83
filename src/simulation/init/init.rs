use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::core::{clock, diagnostics, Scale};
use crate::rigid_body::{BodyDescriptor, BodyOptions};
use crate::scenes::{self, SceneRegistry};
use crate::systems::engine::{Engine, Runner};

use super::render_extract::{Render, RenderOptions};
use super::settings::PlayfieldOptions;
use super::Session;

pub(super) fn create_session(
    container: &str,
    options: &PlayfieldOptions,
    scale: Scale,
    preset: Option<&str>,
    surface: Option<Render>,
) -> Session {
    let s = |v: f32| scale.px(v);

    let mut engine = Engine::new(options.engine_options());

    let render_options = RenderOptions {
        width: s(options.width),
        height: s(options.height),
        wireframes: false,
        background: options.background.clone(),
    };
    let render = match surface {
        Some(mut render) => {
            render.stop();
            render.attach(container, render_options);
            render
        }
        None => Render::create(container, render_options),
    };

    install_walls(&mut engine, scale);

    let seed = options.seed.unwrap_or_else(clock::now_ms);

    let mut session = Session {
        engine,
        runner: Runner::new(),
        render,
        scale,
        user_bodies: Vec::new(),
        scene: SceneRegistry::default(),
        rng: ChaCha8Rng::seed_from_u64(seed),
    };
    session.render.run();

    if let Some(name) = preset.filter(|name| !name.is_empty()) {
        scenes::apply_named(&mut session.engine, &mut session.scene, name, scale);
    }

    diagnostics::info(&format!(
        "playfield initialized: {}x{} @ {} (preset: {})",
        session.render.options().width,
        session.render.options().height,
        scale.factor(),
        session.scene.active().map(|p| p.as_str()).unwrap_or("none"),
    ));

    session
}

/// Ceiling, floor, left and right walls around the 450x700 design field.
fn install_walls(engine: &mut Engine, scale: Scale) {
    let s = |v: f32| scale.px(v);
    let walls = [
        (225.0, -100.0, 450.0, 5.0),
        (225.0, 700.0, 450.0, 50.0),
        (-20.0, 350.0, 50.0, 900.0),
        (470.0, 350.0, 50.0, 900.0),
    ];
    for (x, y, w, h) in walls {
        engine
            .world
            .add_body(BodyDescriptor::rectangle(s(x), s(y), s(w), s(h)).with(BodyOptions::fixed()));
    }
}
