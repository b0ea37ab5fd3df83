use std::collections::HashSet;

use rapier2d::prelude::*;

use crate::rigid_body::{Body, BodyDescriptor, BodyId, BodyOptions, CollisionFilter, Shape, Vec2};

use super::composites::{Composite, CompositeId};
use super::constraint::{Constraint, ConstraintId};

/// Pixels per simulation meter. A power of two, so pixel positions survive the
/// round trip exactly. Everything outside this module is in pixels.
pub const PIXELS_PER_METER: f32 = 64.0;

/// Frame length the per-step air drag is expressed against (60 Hz).
const FRAME_SECONDS: f32 = 1.0 / 60.0;

fn to_meters(v: Vec2) -> Vector<Real> {
    vector![v.x / PIXELS_PER_METER, v.y / PIXELS_PER_METER]
}

fn to_meters_point(v: Vec2) -> Point<Real> {
    point![v.x / PIXELS_PER_METER, v.y / PIXELS_PER_METER]
}

fn to_pixels(v: &Vector<Real>) -> Vec2 {
    Vec2::new(v.x * PIXELS_PER_METER, v.y * PIXELS_PER_METER)
}

/// Per-frame velocity loss `drag` as a continuous damping coefficient.
fn damping(drag: f32) -> f32 {
    let drag = drag.clamp(0.0, 0.99);
    drag / ((1.0 - drag) * FRAME_SECONDS)
}

/// Collision groups for a filter.
///
/// Each negative group owns one membership bit and filters that bit out, so
/// members skip each other but still hit everything else. Groups past 31
/// wrap around and share bits.
fn interaction_groups(filter: CollisionFilter) -> InteractionGroups {
    if filter.group >= 0 {
        return InteractionGroups::all();
    }
    let bit = 1u32 << (1 + (filter.group.unsigned_abs() - 1) % 31);
    let own = Group::from_bits_truncate(bit);
    InteractionGroups::new(own, Group::ALL.difference(own))
}

fn collider_for(shape: &Shape, options: &BodyOptions) -> Collider {
    let m = |v: f32| v / PIXELS_PER_METER;
    let builder = match *shape {
        Shape::Circle { radius } => ColliderBuilder::ball(m(radius)),
        Shape::Rectangle { width, height } => ColliderBuilder::cuboid(m(width) * 0.5, m(height) * 0.5),
        Shape::Polygon { radius, .. } => {
            let points: Vec<Point<Real>> = shape
                .local_vertices()
                .into_iter()
                .map(to_meters_point)
                .collect();
            ColliderBuilder::convex_hull(&points).unwrap_or_else(|| ColliderBuilder::ball(m(radius)))
        }
    };

    builder
        // density is per square pixel; keep masses in the same units
        .density(options.density * PIXELS_PER_METER * PIXELS_PER_METER)
        .restitution(options.restitution)
        .restitution_combine_rule(CoefficientCombineRule::Max)
        .friction(options.friction)
        .friction_combine_rule(CoefficientCombineRule::Min)
        .collision_groups(interaction_groups(options.collision_filter))
        .build()
}

struct BodyRecord {
    id: BodyId,
    handle: RigidBodyHandle,
    shape: Shape,
    options: BodyOptions,
    composite: Option<CompositeId>,
}

struct CompositeRecord {
    id: CompositeId,
    bodies: Vec<BodyId>,
}

struct ConstraintRecord {
    id: ConstraintId,
    constraint: Constraint,
    joint: ImpulseJointHandle,
}

/// Every body, composite and constraint currently simulated.
///
/// Owns the rapier sets and pipeline; the records on top map playfield ids
/// to rapier handles and remember what each body was built from.
pub struct World {
    bodies: RigidBodySet,
    colliders: ColliderSet,
    impulse_joints: ImpulseJointSet,
    multibody_joints: MultibodyJointSet,
    islands: IslandManager,
    broad_phase: BroadPhase,
    narrow_phase: NarrowPhase,
    ccd: CCDSolver,
    pipeline: PhysicsPipeline,
    /// Fixed, collider-less body at the origin that world pins attach to
    ground: RigidBodyHandle,

    records: Vec<BodyRecord>,
    composites: Vec<CompositeRecord>,
    constraints: Vec<ConstraintRecord>,
    next_id: u32,
    next_group: i32,
    next_non_colliding_group: i32,
}

impl World {
    pub fn new() -> Self {
        let mut bodies = RigidBodySet::new();
        let ground = bodies.insert(RigidBodyBuilder::fixed().build());

        Self {
            bodies,
            colliders: ColliderSet::new(),
            impulse_joints: ImpulseJointSet::new(),
            multibody_joints: MultibodyJointSet::new(),
            islands: IslandManager::new(),
            broad_phase: BroadPhase::new(),
            narrow_phase: NarrowPhase::new(),
            ccd: CCDSolver::new(),
            pipeline: PhysicsPipeline::new(),
            ground,
            records: Vec::new(),
            composites: Vec::new(),
            constraints: Vec::new(),
            next_id: 1,
            next_group: 1,
            next_non_colliding_group: -1,
        }
    }

    fn allocate_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id = self.next_id.saturating_add(1);
        id
    }

    /// Fresh collision group. Non-colliding groups are negative.
    pub fn next_group(&mut self, non_colliding: bool) -> i32 {
        if non_colliding {
            let group = self.next_non_colliding_group;
            self.next_non_colliding_group -= 1;
            group
        } else {
            let group = self.next_group;
            self.next_group += 1;
            group
        }
    }

    fn insert(&mut self, descriptor: BodyDescriptor, composite: Option<CompositeId>) -> BodyId {
        let BodyDescriptor {
            shape,
            position,
            options,
        } = descriptor;

        let builder = if options.is_static {
            RigidBodyBuilder::fixed()
        } else {
            RigidBodyBuilder::dynamic()
        };
        let rigid_body = builder
            .translation(to_meters(position))
            .rotation(options.angle)
            .linear_damping(damping(options.friction_air))
            .angular_damping(damping(options.friction_air))
            .build();

        let handle = self.bodies.insert(rigid_body);
        self.colliders
            .insert_with_parent(collider_for(&shape, &options), handle, &mut self.bodies);

        let id = BodyId(self.allocate_id());
        self.records.push(BodyRecord {
            id,
            handle,
            shape,
            options,
            composite,
        });
        id
    }

    /// Add a top-level body.
    pub fn add_body(&mut self, descriptor: BodyDescriptor) -> BodyId {
        self.insert(descriptor, None)
    }

    /// Remove a body (top-level or composite member) and any pin holding it.
    pub fn remove_body(&mut self, id: BodyId) -> bool {
        let Some(idx) = self.records.iter().position(|r| r.id == id) else {
            return false;
        };
        let record = self.records.remove(idx);
        // Attached colliders and joints go with the rigid body.
        self.bodies.remove(
            record.handle,
            &mut self.islands,
            &mut self.colliders,
            &mut self.impulse_joints,
            &mut self.multibody_joints,
            true,
        );
        self.constraints.retain(|c| c.constraint.body != id);

        if let Some(owner) = record.composite {
            if let Some(composite) = self.composites.iter_mut().find(|c| c.id == owner) {
                composite.bodies.retain(|b| *b != id);
            }
        }
        true
    }

    pub fn add_composite(&mut self, composite: Composite) -> CompositeId {
        let id = CompositeId(self.allocate_id());
        let bodies = composite
            .bodies
            .into_iter()
            .map(|descriptor| self.insert(descriptor, Some(id)))
            .collect();
        self.composites.push(CompositeRecord { id, bodies });
        id
    }

    /// Remove a composite together with whatever members it still has.
    pub fn remove_composite(&mut self, id: CompositeId) -> bool {
        let Some(idx) = self.composites.iter().position(|c| c.id == id) else {
            return false;
        };
        let composite = self.composites.remove(idx);
        for body in composite.bodies {
            self.remove_body(body);
        }
        true
    }

    pub fn composite_bodies(&self, id: CompositeId) -> Option<&[BodyId]> {
        self.composites
            .iter()
            .find(|c| c.id == id)
            .map(|c| c.bodies.as_slice())
    }

    pub fn composite_count(&self) -> usize {
        self.composites.len()
    }

    /// Pin a body with a revolute joint. `None` if the body is not in the world.
    pub fn add_constraint(&mut self, constraint: Constraint) -> Option<ConstraintId> {
        let handle = self.records.iter().find(|r| r.id == constraint.body)?.handle;
        let joint = RevoluteJointBuilder::new()
            .local_anchor1(to_meters_point(constraint.anchor))
            .local_anchor2(to_meters_point(constraint.point_on_body));
        let joint = self.impulse_joints.insert(self.ground, handle, joint, true);

        let id = ConstraintId(self.allocate_id());
        self.constraints.push(ConstraintRecord { id, constraint, joint });
        Some(id)
    }

    pub fn remove_constraint(&mut self, id: ConstraintId) -> bool {
        let Some(idx) = self.constraints.iter().position(|c| c.id == id) else {
            return false;
        };
        let record = self.constraints.remove(idx);
        self.impulse_joints.remove(record.joint, true);
        true
    }

    pub fn constraint_ids(&self) -> Vec<ConstraintId> {
        self.constraints.iter().map(|c| c.id).collect()
    }

    pub fn constraints(&self) -> impl Iterator<Item = &Constraint> {
        self.constraints.iter().map(|c| &c.constraint)
    }

    pub fn constraint_count(&self) -> usize {
        self.constraints.len()
    }

    fn snapshot(&self, record: &BodyRecord) -> Option<Body> {
        let rigid_body = self.bodies.get(record.handle)?;
        let options = &record.options;
        Some(Body {
            id: record.id,
            shape: record.shape,
            position: to_pixels(rigid_body.translation()),
            velocity: to_pixels(rigid_body.linvel()),
            angle: rigid_body.rotation().angle(),
            angular_velocity: rigid_body.angvel(),
            mass: rigid_body.mass(),
            is_static: options.is_static,
            restitution: options.restitution,
            friction: options.friction,
            friction_air: options.friction_air,
            density: options.density,
            collision_filter: options.collision_filter,
            render: options.render.clone(),
        })
    }

    pub fn body(&self, id: BodyId) -> Option<Body> {
        let record = self.records.iter().find(|r| r.id == id)?;
        self.snapshot(record)
    }

    /// Snapshots of every body in insertion order.
    pub fn bodies(&self) -> impl Iterator<Item = Body> + '_ {
        self.records.iter().filter_map(|r| self.snapshot(r))
    }

    pub fn body_count(&self) -> usize {
        self.records.len()
    }

    pub fn static_body_count(&self) -> usize {
        self.records.iter().filter(|r| r.options.is_static).count()
    }

    pub fn contains_body(&self, id: BodyId) -> bool {
        self.records.iter().any(|r| r.id == id)
    }

    /// Move a body to `position` and stop it. Returns false if it is gone.
    pub fn restore(&mut self, id: BodyId, position: Vec2) -> bool {
        let Some(handle) = self.records.iter().find(|r| r.id == id).map(|r| r.handle) else {
            return false;
        };
        let Some(rigid_body) = self.bodies.get_mut(handle) else {
            return false;
        };
        rigid_body.set_translation(to_meters(position), true);
        rigid_body.set_linvel(vector![0.0, 0.0], true);
        rigid_body.set_angvel(0.0, true);
        true
    }

    /// Remove every non-static body not in `keep`, composite members included.
    pub fn remove_dynamic_bodies_except(&mut self, keep: &HashSet<BodyId>) -> usize {
        let doomed: Vec<BodyId> = self
            .records
            .iter()
            .filter(|r| !r.options.is_static && !keep.contains(&r.id))
            .map(|r| r.id)
            .collect();
        for id in doomed.iter() {
            self.remove_body(*id);
        }
        doomed.len()
    }

    /// Advance the simulation. `gravity` is in pixels per second squared.
    pub(crate) fn step(&mut self, gravity: Vec2, params: &IntegrationParameters) {
        self.pipeline.step(
            &to_meters(gravity),
            params,
            &mut self.islands,
            &mut self.broad_phase,
            &mut self.narrow_phase,
            &mut self.bodies,
            &mut self.colliders,
            &mut self.impulse_joints,
            &mut self.multibody_joints,
            &mut self.ccd,
            None,
            &(),
            &(),
        );
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rigid_body::BodyOptions;
    use crate::rigid_body_system::StackCell;

    #[test]
    fn ids_are_never_reused() {
        let mut world = World::new();
        let a = world.add_body(BodyDescriptor::circle(0.0, 0.0, 5.0));
        assert!(world.remove_body(a));
        assert!(!world.remove_body(a));
        let b = world.add_body(BodyDescriptor::circle(0.0, 0.0, 5.0));
        assert_ne!(a, b);
        assert_eq!(world.body_count(), 1);
    }

    #[test]
    fn mass_is_density_times_pixel_area() {
        let mut world = World::new();
        let id = world.add_body(BodyDescriptor::rectangle(0.0, 0.0, 60.0, 60.0).with(BodyOptions {
            density: 0.01,
            ..BodyOptions::default()
        }));
        let body = world.body(id).unwrap();
        assert!((body.mass - 36.0).abs() < 1e-2, "mass = {}", body.mass);
    }

    #[test]
    fn snapshot_reads_back_placement() {
        let mut world = World::new();
        let id = world.add_body(BodyDescriptor::polygon(350.0, 10.0, 3, 40.0).with(BodyOptions {
            angle: std::f32::consts::FRAC_PI_2,
            ..BodyOptions::default()
        }));
        let body = world.body(id).unwrap();
        assert!((body.position.x - 350.0).abs() < 1e-3);
        assert!((body.position.y - 10.0).abs() < 1e-3);
        assert!((body.angle - std::f32::consts::FRAC_PI_2).abs() < 1e-5);
        assert_eq!(body.world_vertices().len(), 3);
    }

    #[test]
    fn dynamic_sweep_keeps_static_and_kept_bodies() {
        let mut world = World::new();
        world.add_body(BodyDescriptor::rectangle(0.0, 0.0, 10.0, 10.0).with(BodyOptions::fixed()));
        let kept = world.add_body(BodyDescriptor::circle(0.0, 0.0, 5.0));
        let stack = world.add_composite(Composite::stack(0.0, 0.0, 1, 3, 0.0, 0.0, |c: StackCell| {
            BodyDescriptor::rectangle(c.x, c.y, 4.0, 4.0)
        }));

        assert_eq!(world.body_count(), 5);
        let removed = world.remove_dynamic_bodies_except(&HashSet::from([kept]));
        assert_eq!(removed, 3);
        assert_eq!(world.body_count(), 2);
        assert!(world.contains_body(kept));
        assert_eq!(world.composite_bodies(stack), Some(&[][..]));

        assert!(world.remove_composite(stack));
        assert_eq!(world.composite_count(), 0);
    }

    #[test]
    fn removing_a_pinned_body_drops_its_pin() {
        let mut world = World::new();
        let arm = world.add_body(BodyDescriptor::rectangle(225.0, 610.0, 250.0, 20.0));
        assert!(world.add_constraint(Constraint::pin(arm, Vec2::new(225.0, 610.0))).is_some());
        assert_eq!(world.constraint_count(), 1);

        world.remove_body(arm);
        assert_eq!(world.constraint_count(), 0);
        assert!(world.add_constraint(Constraint::pin(arm, Vec2::zero())).is_none());
    }

    #[test]
    fn restore_moves_and_stops_a_body() {
        let mut world = World::new();
        let id = world.add_body(BodyDescriptor::circle(100.0, 100.0, 10.0));
        let params = IntegrationParameters::default();
        for _ in 0..30 {
            world.step(Vec2::new(0.0, 1000.0), &params);
        }
        assert!(world.body(id).unwrap().position.y > 100.0);

        assert!(world.restore(id, Vec2::new(100.0, 100.0)));
        let body = world.body(id).unwrap();
        assert!((body.position.y - 100.0).abs() < 1e-3);
        assert_eq!(body.velocity, Vec2::zero());
        assert_eq!(body.angular_velocity, 0.0);
    }

    #[test]
    fn groups_count_away_from_zero() {
        let mut world = World::new();
        assert_eq!(world.next_group(true), -1);
        assert_eq!(world.next_group(true), -2);
        assert_eq!(world.next_group(false), 1);
    }

    #[test]
    fn interaction_groups_agree_with_filters() {
        let filters = [
            CollisionFilter::default(),
            CollisionFilter { group: -1 },
            CollisionFilter { group: -2 },
            CollisionFilter { group: 3 },
        ];
        for a in filters.iter() {
            for b in filters.iter() {
                assert_eq!(
                    interaction_groups(*a).test(interaction_groups(*b)),
                    a.can_collide(b),
                    "{:?} vs {:?}",
                    a,
                    b
                );
            }
        }
    }
}
