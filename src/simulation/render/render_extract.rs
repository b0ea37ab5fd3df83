use serde::Serialize;

use crate::rigid_body::{Body, Shape, Vec2};
use crate::systems::engine::Engine;

/// Canvas the host draws into, sized in scaled pixels
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderOptions {
    pub width: f32,
    pub height: f32,
    pub wireframes: bool,
    pub background: String,
}

/// Renderer attachment for one session.
///
/// Drawing happens on the host; this only tracks the target element and
/// whether frames are being produced, and extracts what to draw. The same
/// surface survives a re-initialize and is re-attached to the new world.
#[derive(Clone, Debug)]
pub struct Render {
    container: String,
    options: RenderOptions,
    running: bool,
    attachments: u32,
}

impl Render {
    pub fn create(container: &str, options: RenderOptions) -> Self {
        Self {
            container: container.to_string(),
            options,
            running: false,
            attachments: 1,
        }
    }

    /// Point a stopped surface at a (possibly different) container and size.
    pub fn attach(&mut self, container: &str, options: RenderOptions) {
        self.container = container.to_string();
        self.options = options;
        self.attachments += 1;
    }

    pub fn run(&mut self) {
        self.running = true;
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// How many worlds this surface has been attached to
    pub fn attachments(&self) -> u32 {
        self.attachments
    }

    pub fn container(&self) -> &str {
        &self.container
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Snapshot every body in draw order (top-level first, then composites).
    pub fn frame(&self, engine: &Engine) -> RenderFrame {
        RenderFrame {
            width: self.options.width,
            height: self.options.height,
            background: self.options.background.clone(),
            wireframes: self.options.wireframes,
            bodies: engine.world.bodies().map(|body| BodyView::from_body(&body)).collect(),
        }
    }
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderFrame {
    pub width: f32,
    pub height: f32,
    pub background: String,
    pub wireframes: bool,
    pub bodies: Vec<BodyView>,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BodyView {
    pub id: u32,
    pub shape: Shape,
    pub position: Vec2,
    pub angle: f32,
    /// World-space outline; empty for circles
    pub vertices: Vec<Vec2>,
    pub is_static: bool,
    pub fill_style: String,
    pub stroke_style: Option<String>,
    pub line_width: f32,
}

impl BodyView {
    fn from_body(body: &Body) -> Self {
        Self {
            id: body.id.0,
            shape: body.shape,
            position: body.position,
            angle: body.angle,
            vertices: body.world_vertices(),
            is_static: body.is_static,
            fill_style: body.render.fill_style.clone(),
            stroke_style: body.render.stroke_style.clone(),
            line_width: body.render.line_width,
        }
    }
}
