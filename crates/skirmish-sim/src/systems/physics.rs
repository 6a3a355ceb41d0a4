//! Headless physics: overlap tests between bodies and contact-begin reporting.
//!
//! Bodies never push each other; a contact is only reported, and only on
//! the first step in which the two volumes overlap. Precise bodies are
//! tested along the segment they moved since `begin_step`.

use std::collections::{HashMap, HashSet};

use hecs::{Entity, World};

use skirmish_core::components::{Body, Position, Shape};
use skirmish_core::types::Point2D;

use crate::systems::contact::ContactBody;

/// Physics world settings plus the set of currently touching pairs.
#[derive(Debug, Clone, Default)]
pub struct PhysicsWorld {
    gravity: Point2D,
    active: HashSet<(Entity, Entity)>,
    /// Positions of precise bodies at the start of the frame.
    sweep_start: HashMap<Entity, Point2D>,
}

impl PhysicsWorld {
    pub fn new(gravity: Point2D) -> Self {
        Self {
            gravity,
            active: HashSet::new(),
            sweep_start: HashMap::new(),
        }
    }

    pub fn gravity(&self) -> Point2D {
        self.gravity
    }

    pub fn set_gravity(&mut self, gravity: Point2D) {
        self.gravity = gravity;
    }

    /// Number of pairs touching as of the last step.
    pub fn active_contacts(&self) -> usize {
        self.active.len()
    }

    /// Record where every precise body starts the frame. Call before moving
    /// anything; the next `step` sweeps each precise body from here.
    pub fn begin_step(&mut self, world: &World) {
        self.sweep_start = world
            .query::<(&Position, &Body)>()
            .iter()
            .filter(|(_, (_, body))| body.precise)
            .map(|(entity, (pos, _))| (entity, pos.0))
            .collect();
    }

    /// Find pairs whose overlap began since the previous step.
    ///
    /// A pair is tested when either body's contact mask names the other's
    /// category. The (a, b) order of a reported pair is not meaningful.
    pub fn step(&mut self, world: &World) -> Vec<(ContactBody, ContactBody)> {
        let bodies: Vec<(Entity, Point2D, Body)> = world
            .query::<(&Position, &Body)>()
            .iter()
            .map(|(entity, (pos, body))| (entity, pos.0, *body))
            .collect();

        let mut touching = HashSet::new();
        let mut began = Vec::new();

        for (i, &(ea, pa, ba)) in bodies.iter().enumerate() {
            for &(eb, pb, bb) in &bodies[i + 1..] {
                let tested =
                    ba.contact_mask.contains(bb.category) || bb.contact_mask.contains(ba.category);
                if !tested || !self.touched(ea, pa, ba, eb, pb, bb) {
                    continue;
                }

                let key = pair_key(ea, eb);
                if !self.active.contains(&key) {
                    began.push((
                        ContactBody {
                            entity: ea,
                            category: ba.category,
                        },
                        ContactBody {
                            entity: eb,
                            category: bb.category,
                        },
                    ));
                }
                touching.insert(key);
            }
        }

        // Pairs that separated or lost a body are forgotten.
        self.active = touching;
        self.sweep_start.clear();
        began
    }

    fn touched(
        &self,
        ea: Entity,
        pa: Point2D,
        ba: Body,
        eb: Entity,
        pb: Point2D,
        bb: Body,
    ) -> bool {
        if ba.precise {
            if let Some(&from) = self.sweep_start.get(&ea) {
                return swept_overlaps(from, pa, ba.shape, pb, bb.shape);
            }
        }
        if bb.precise {
            if let Some(&from) = self.sweep_start.get(&eb) {
                return swept_overlaps(from, pb, bb.shape, pa, ba.shape);
            }
        }
        overlaps(pa, ba.shape, pb, bb.shape)
    }
}

fn pair_key(a: Entity, b: Entity) -> (Entity, Entity) {
    if a.to_bits() <= b.to_bits() {
        (a, b)
    } else {
        (b, a)
    }
}

/// Overlap test between two shapes centered at `pa` and `pb`.
pub fn overlaps(pa: Point2D, sa: Shape, pb: Point2D, sb: Shape) -> bool {
    match (sa, sb) {
        (Shape::Circle { radius: ra }, Shape::Circle { radius: rb }) => {
            let reach = ra + rb;
            pa.distance_squared(pb) <= reach * reach
        }
        (Shape::Circle { radius }, Shape::Rect { half_extents }) => {
            circle_rect(pa, radius, pb, half_extents)
        }
        (Shape::Rect { half_extents }, Shape::Circle { radius }) => {
            circle_rect(pb, radius, pa, half_extents)
        }
        (Shape::Rect { half_extents: ha }, Shape::Rect { half_extents: hb }) => {
            let d = (pa - pb).abs();
            d.x <= ha.x + hb.x && d.y <= ha.y + hb.y
        }
    }
}

/// Overlap test for shape `sa` moving from `from` to `to` against a
/// stationary shape `sb` at `pb`.
///
/// Circle against circle is exact. Other pairs test the segment against
/// `sb`'s box grown by `sa`'s extent, which is slightly generous at corners.
pub fn swept_overlaps(from: Point2D, to: Point2D, sa: Shape, pb: Point2D, sb: Shape) -> bool {
    match (sa, sb) {
        (Shape::Circle { radius: ra }, Shape::Circle { radius: rb }) => {
            let reach = ra + rb;
            closest_on_segment(from, to, pb).distance_squared(pb) <= reach * reach
        }
        _ => segment_hits_box(from, to, pb, extent(sb) + extent(sa)),
    }
}

fn extent(shape: Shape) -> Point2D {
    match shape {
        Shape::Circle { radius } => Point2D::splat(radius),
        Shape::Rect { half_extents } => half_extents,
    }
}

fn closest_on_segment(from: Point2D, to: Point2D, point: Point2D) -> Point2D {
    let d = to - from;
    let len_sq = d.length_squared();
    if len_sq <= 0.0 {
        return from;
    }
    let t = ((point - from).dot(d) / len_sq).clamp(0.0, 1.0);
    from + d * t
}

/// Slab test of the segment `from..to` against the box at `center`.
fn segment_hits_box(from: Point2D, to: Point2D, center: Point2D, half: Point2D) -> bool {
    let lo = center - half;
    let hi = center + half;
    let d = to - from;
    let (mut t_enter, mut t_exit) = (0.0f32, 1.0f32);

    for axis in 0..2 {
        if d[axis] == 0.0 {
            if from[axis] < lo[axis] || from[axis] > hi[axis] {
                return false;
            }
            continue;
        }
        let inv = 1.0 / d[axis];
        let mut t0 = (lo[axis] - from[axis]) * inv;
        let mut t1 = (hi[axis] - from[axis]) * inv;
        if t0 > t1 {
            std::mem::swap(&mut t0, &mut t1);
        }
        t_enter = t_enter.max(t0);
        t_exit = t_exit.min(t1);
        if t_enter > t_exit {
            return false;
        }
    }
    true
}

fn circle_rect(center: Point2D, radius: f32, rect_center: Point2D, half: Point2D) -> bool {
    let closest = center.clamp(rect_center - half, rect_center + half);
    center.distance_squared(closest) <= radius * radius
}

#[cfg(test)]
mod tests {
    use super::*;
    use skirmish_core::components::CategorySet;
    use skirmish_core::enums::Category;

    fn circle(r: f32) -> Shape {
        Shape::Circle { radius: r }
    }

    fn rect(w: f32, h: f32) -> Shape {
        Shape::Rect {
            half_extents: Point2D::new(w / 2.0, h / 2.0),
        }
    }

    fn spawn(world: &mut World, at: Point2D, category: Category, mask: &[Category], shape: Shape) -> Entity {
        world.spawn((
            Position(at),
            Body {
                category,
                contact_mask: CategorySet::of(mask),
                shape,
                precise: false,
            },
        ))
    }

    #[test]
    fn circle_rect_overlap() {
        let r = rect(20.0, 20.0);
        assert!(overlaps(Point2D::new(0.0, 0.0), circle(5.0), Point2D::new(14.0, 0.0), r));
        assert!(!overlaps(Point2D::new(0.0, 0.0), circle(5.0), Point2D::new(16.0, 0.0), r));
        // Nearest rect corner (0,0) is ~5.66 from the circle center.
        assert!(!overlaps(Point2D::new(-4.0, -4.0), circle(5.0), Point2D::new(10.0, 10.0), r));
        assert!(overlaps(Point2D::new(10.0, 10.0), r, Point2D::new(0.0, 0.0), circle(5.0)));
    }

    #[test]
    fn circle_circle_and_rect_rect() {
        assert!(overlaps(Point2D::ZERO, circle(3.0), Point2D::new(5.0, 0.0), circle(2.0)));
        assert!(!overlaps(Point2D::ZERO, circle(3.0), Point2D::new(5.1, 0.0), circle(2.0)));
        assert!(overlaps(Point2D::ZERO, rect(10.0, 10.0), Point2D::new(9.0, 9.0), rect(10.0, 10.0)));
        assert!(!overlaps(Point2D::ZERO, rect(10.0, 10.0), Point2D::new(11.0, 0.0), rect(10.0, 10.0)));
    }

    #[test]
    fn reports_contact_only_when_it_begins() {
        let mut world = World::new();
        let mut physics = PhysicsWorld::new(Point2D::ZERO);
        let projectile = spawn(
            &mut world,
            Point2D::new(100.0, 100.0),
            Category::Projectile,
            &[Category::Monster],
            circle(6.5),
        );
        let monster = spawn(
            &mut world,
            Point2D::new(105.0, 100.0),
            Category::Monster,
            &[Category::Projectile],
            rect(27.0, 32.0),
        );

        let first = physics.step(&world);
        assert_eq!(first.len(), 1);
        let (a, b) = first[0];
        let mut seen = [a.entity, b.entity];
        seen.sort_by_key(|e| e.to_bits());
        let mut expected = [projectile, monster];
        expected.sort_by_key(|e| e.to_bits());
        assert_eq!(seen, expected);

        assert!(physics.step(&world).is_empty(), "still touching, no new contact");
        assert_eq!(physics.active_contacts(), 1);

        // Separate, then touch again.
        world.get::<&mut Position>(monster).unwrap().0 = Point2D::new(300.0, 100.0);
        assert!(physics.step(&world).is_empty());
        assert_eq!(physics.active_contacts(), 0);
        world.get::<&mut Position>(monster).unwrap().0 = Point2D::new(100.0, 100.0);
        assert_eq!(physics.step(&world).len(), 1);
    }

    #[test]
    fn masks_filter_pairs() {
        let mut world = World::new();
        let mut physics = PhysicsWorld::new(Point2D::ZERO);
        // Player has no mask and neither body names the player.
        spawn(&mut world, Point2D::ZERO, Category::Player, &[], rect(27.0, 40.0));
        spawn(&mut world, Point2D::ZERO, Category::Monster, &[Category::Projectile], rect(27.0, 32.0));
        spawn(&mut world, Point2D::new(500.0, 0.0), Category::Monster, &[Category::Projectile], rect(27.0, 32.0));
        assert!(physics.step(&world).is_empty());
    }

    #[test]
    fn removed_bodies_are_forgotten() {
        let mut world = World::new();
        let mut physics = PhysicsWorld::new(Point2D::ZERO);
        let p = spawn(&mut world, Point2D::ZERO, Category::Projectile, &[Category::Monster], circle(5.0));
        spawn(&mut world, Point2D::ZERO, Category::Monster, &[Category::Projectile], rect(10.0, 10.0));
        assert_eq!(physics.step(&world).len(), 1);
        world.despawn(p).unwrap();
        assert!(physics.step(&world).is_empty());
        assert_eq!(physics.active_contacts(), 0);
    }

    #[test]
    fn swept_circle_hits_box_it_jumped_over() {
        let monster = rect(27.0, 32.0);
        let from = Point2D::new(13.5, 160.0);
        let to = Point2D::new(313.5, 160.0);
        let at = Point2D::new(200.0, 160.0);
        assert!(!overlaps(to, circle(6.5), at, monster));
        assert!(swept_overlaps(from, to, circle(6.5), at, monster));
        // Passing well above the box.
        let high = Point2D::new(0.0, 200.0);
        assert!(!swept_overlaps(from + high, to + high, circle(6.5), at, monster));
        // Stopping short of it.
        assert!(!swept_overlaps(from, Point2D::new(170.0, 160.0), circle(6.5), at, monster));
    }

    #[test]
    fn swept_circle_circle() {
        let at = Point2D::new(50.0, 3.0);
        assert!(swept_overlaps(Point2D::ZERO, Point2D::new(100.0, 0.0), circle(2.0), at, circle(2.0)));
        assert!(!swept_overlaps(Point2D::ZERO, Point2D::new(100.0, 0.0), circle(1.0), at, circle(1.0)));
        // Zero-length sweep falls back to a point test.
        assert!(swept_overlaps(at, at, circle(1.0), at, circle(1.0)));
    }

    #[test]
    fn precise_body_does_not_tunnel() {
        let mut world = World::new();
        let mut physics = PhysicsWorld::new(Point2D::ZERO);
        let projectile = world.spawn((
            Position(Point2D::new(13.5, 160.0)),
            Body {
                category: Category::Projectile,
                contact_mask: CategorySet::of(&[Category::Monster]),
                shape: circle(6.5),
                precise: true,
            },
        ));
        spawn(
            &mut world,
            Point2D::new(200.0, 160.0),
            Category::Monster,
            &[Category::Projectile],
            rect(27.0, 32.0),
        );

        physics.begin_step(&world);
        world.get::<&mut Position>(projectile).unwrap().0 = Point2D::new(313.5, 160.0);
        assert_eq!(physics.step(&world).len(), 1);

        // Without a recorded start the same jump is missed.
        world.get::<&mut Position>(projectile).unwrap().0 = Point2D::new(13.5, 160.0);
        physics.step(&world);
        world.get::<&mut Position>(projectile).unwrap().0 = Point2D::new(313.5, 160.0);
        assert!(physics.step(&world).is_empty());
    }
}
