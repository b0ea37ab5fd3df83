use std::f32::consts::PI;

use serde::{Deserialize, Serialize};

use super::vec2::Vec2;

/// Identifier handed out by the world when a body is added
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BodyId(pub u32);

/// Body geometry in local coordinates
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Shape {
    Circle { radius: f32 },
    Rectangle { width: f32, height: f32 },
    /// Regular polygon whose vertices sit on a circle of `radius`
    Polygon { sides: u32, radius: f32 },
}

impl Shape {
    /// Vertices around the local origin (empty for circles).
    pub fn local_vertices(&self) -> Vec<Vec2> {
        match *self {
            Shape::Circle { .. } => Vec::new(),
            Shape::Rectangle { width, height } => {
                let (hw, hh) = (width * 0.5, height * 0.5);
                vec![
                    Vec2::new(-hw, -hh),
                    Vec2::new(hw, -hh),
                    Vec2::new(hw, hh),
                    Vec2::new(-hw, hh),
                ]
            }
            Shape::Polygon { sides, radius } => {
                let n = sides.max(3);
                let theta = 2.0 * PI / n as f32;
                let offset = theta * 0.5;
                (0..n)
                    .map(|i| {
                        let a = offset + i as f32 * theta;
                        Vec2::new(radius * a.cos(), radius * a.sin())
                    })
                    .collect()
            }
        }
    }

    /// Vertices placed at `position` and turned by `angle`.
    pub fn world_vertices(&self, position: Vec2, angle: f32) -> Vec<Vec2> {
        self.local_vertices()
            .into_iter()
            .map(|v| position + v.rotate(angle))
            .collect()
    }

    pub fn bounds(&self, position: Vec2, angle: f32) -> Bounds {
        if let Shape::Circle { radius } = *self {
            let r = Vec2::new(radius, radius);
            return Bounds {
                min: position - r,
                max: position + r,
            };
        }

        let mut min = Vec2::new(f32::MAX, f32::MAX);
        let mut max = Vec2::new(f32::MIN, f32::MIN);
        for v in self.world_vertices(position, angle) {
            min.x = min.x.min(v.x);
            min.y = min.y.min(v.y);
            max.x = max.x.max(v.x);
            max.y = max.y.max(v.y);
        }
        Bounds { min, max }
    }
}

/// Collision filter group.
///
/// Bodies sharing a non-zero group always collide when it is positive and
/// never collide when it is negative. Group 0 collides with everything.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollisionFilter {
    pub group: i32,
}

impl CollisionFilter {
    pub fn can_collide(&self, other: &CollisionFilter) -> bool {
        if self.group == other.group && self.group != 0 {
            return self.group > 0;
        }
        true
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderStyle {
    pub fill_style: String,
    pub stroke_style: Option<String>,
    pub line_width: f32,
}

impl RenderStyle {
    pub fn fill(fill: &str) -> Self {
        Self {
            fill_style: fill.to_string(),
            stroke_style: None,
            line_width: 0.0,
        }
    }

    pub fn outlined(fill: &str, stroke: &str, line_width: f32) -> Self {
        Self {
            fill_style: fill.to_string(),
            stroke_style: Some(stroke.to_string()),
            line_width,
        }
    }
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self::fill("rgb(255, 255, 255)")
    }
}

/// Material and placement options for a new body
#[derive(Clone, Debug, PartialEq)]
pub struct BodyOptions {
    pub is_static: bool,
    /// Bounciness (0.0 = no bounce, 1.0 = full elastic)
    pub restitution: f32,
    pub friction: f32,
    /// Air resistance applied every step
    pub friction_air: f32,
    pub density: f32,
    pub angle: f32,
    pub collision_filter: CollisionFilter,
    pub render: RenderStyle,
}

impl Default for BodyOptions {
    fn default() -> Self {
        Self {
            is_static: false,
            restitution: 0.0,
            friction: 0.1,
            friction_air: 0.01,
            density: 0.001,
            angle: 0.0,
            collision_filter: CollisionFilter::default(),
            render: RenderStyle::default(),
        }
    }
}

impl BodyOptions {
    pub fn fixed() -> Self {
        Self {
            is_static: true,
            ..Self::default()
        }
    }
}

/// Everything needed to build a body: shape, position (pixel units) and options
#[derive(Clone, Debug, PartialEq)]
pub struct BodyDescriptor {
    pub shape: Shape,
    pub position: Vec2,
    pub options: BodyOptions,
}

impl BodyDescriptor {
    pub fn circle(x: f32, y: f32, radius: f32) -> Self {
        Self {
            shape: Shape::Circle { radius },
            position: Vec2::new(x, y),
            options: BodyOptions::default(),
        }
    }

    pub fn rectangle(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            shape: Shape::Rectangle { width, height },
            position: Vec2::new(x, y),
            options: BodyOptions::default(),
        }
    }

    pub fn polygon(x: f32, y: f32, sides: u32, radius: f32) -> Self {
        Self {
            shape: Shape::Polygon { sides, radius },
            position: Vec2::new(x, y),
            options: BodyOptions::default(),
        }
    }

    pub fn with(mut self, options: BodyOptions) -> Self {
        self.options = options;
        self
    }

    pub fn translate(&mut self, offset: Vec2) {
        self.position = self.position + offset;
    }

    pub fn bounds(&self) -> Bounds {
        self.shape.bounds(self.position, self.options.angle)
    }
}

/// Axis-aligned bounds in world coordinates
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub min: Vec2,
    pub max: Vec2,
}

impl Bounds {
    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }
}

/// Snapshot of a simulated body, read back from the physics world
#[derive(Clone, Debug)]
pub struct Body {
    pub id: BodyId,
    pub shape: Shape,

    // === Physics State ===
    /// World position (center of mass)
    pub position: Vec2,
    /// Linear velocity (pixels per second)
    pub velocity: Vec2,
    /// Rotation angle (radians)
    pub angle: f32,
    pub angular_velocity: f32,
    pub mass: f32,
    pub is_static: bool,

    // === Material properties ===
    pub restitution: f32,
    pub friction: f32,
    pub friction_air: f32,
    pub density: f32,
    pub collision_filter: CollisionFilter,
    pub render: RenderStyle,
}

impl Body {
    /// Vertices in world coordinates (empty for circles).
    pub fn world_vertices(&self) -> Vec<Vec2> {
        self.shape.world_vertices(self.position, self.angle)
    }

    pub fn bounds(&self) -> Bounds {
        self.shape.bounds(self.position, self.angle)
    }
}
