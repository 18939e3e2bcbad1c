use collisions::{
    Collision, CollisionFinder, CollisionHandler, CollisionManager, EntityMover, ResolverConfig,
};
use common::shapes::{Circle, Rectangle};
use nalgebra::{Point2, Vector2};
use quadtree::EntityView;
use std::collections::HashMap;

struct Unit {
    circle: Circle,
    moving: bool,
    removed: bool,
}

#[derive(Default)]
struct World {
    units: HashMap<u32, Unit>,
    orders: Vec<(u32, Point2<f32>)>,
}

impl World {
    fn spawn(&mut self, value: u32, x: f32, y: f32, radius: f32) {
        self.units.insert(
            value,
            Unit {
                circle: Circle::new(x, y, radius),
                moving: false,
                removed: false,
            },
        );
    }

    fn position(&self, value: u32) -> Point2<f32> {
        self.units[&value].circle.center()
    }
}

impl EntityView for World {
    fn bounding_rect(&self, value: u32) -> Option<Rectangle> {
        self.units.get(&value).map(|unit| unit.circle.bounding_box)
    }

    fn is_moving(&self, value: u32) -> bool {
        self.units.get(&value).map_or(false, |unit| unit.moving)
    }

    fn is_marked_for_removal(&self, value: u32) -> bool {
        self.units.get(&value).map_or(false, |unit| unit.removed)
    }
}

impl EntityMover for World {
    // Units arrive instantly.
    fn go_to(&mut self, value: u32, target: Point2<f32>) {
        if let Some(unit) = self.units.get_mut(&value) {
            unit.circle.update(target.x, target.y);
            unit.moving = true;
        }
        self.orders.push((value, target));
    }
}

fn arena() -> Rectangle {
    Rectangle::new(100.0, 100.0, 200.0, 200.0)
}

#[test]
fn test_overlapping_pair_is_pushed_apart() {
    let _ = env_logger::builder().is_test(true).try_init();
    let mut world = World::default();
    world.spawn(1, 50.0, 50.0, 10.0);
    world.spawn(2, 65.0, 50.0, 10.0);

    let mut manager = CollisionManager::new(arena());
    assert_eq!(manager.insert_entity(1, &world), Ok(true));
    assert_eq!(manager.insert_entity(2, &world), Ok(true));

    let before = (world.position(1) - world.position(2)).norm();
    let collisions = manager.update(&mut world);
    assert_eq!(
        collisions,
        vec![Collision {
            first: 1,
            second: 2,
            penetration_depth: 5.0,
            unit_vector: Vector2::new(-1.0, 0.0),
        }]
    );
    assert_eq!(
        world.orders,
        vec![(1, Point2::new(40.0, 50.0)), (2, Point2::new(75.0, 50.0))]
    );

    let after = (world.position(1) - world.position(2)).norm();
    assert!(after >= before);

    // Now 35 apart: the next tick finds nothing.
    assert!(manager.update(&mut world).is_empty());
}

#[test]
fn test_distant_entities_do_not_collide() {
    let mut world = World::default();
    world.spawn(1, 50.0, 50.0, 10.0);
    world.spawn(2, 70.0, 50.0, 10.0);

    let collisions = CollisionFinder::new().find(&[(1, 2)], &world);
    assert!(collisions.is_empty());
}

#[test]
fn test_coincident_centres_separate_along_x() {
    let _ = env_logger::builder().is_test(true).try_init();
    let mut world = World::default();
    world.spawn(3, 20.0, 20.0, 5.0);
    world.spawn(4, 20.0, 20.0, 7.0);

    let collisions = CollisionFinder::new().find(&[(3, 4)], &world);
    assert_eq!(collisions.len(), 1);
    assert_eq!(collisions[0].penetration_depth, 12.0);
    assert_eq!(collisions[0].unit_vector, Vector2::new(1.0, 0.0));

    let handler = CollisionHandler::new_with_config(ResolverConfig {
        nudge_distance: 2.0,
    });
    handler.handle(&collisions, &mut world);
    assert_eq!(world.position(3), Point2::new(22.0, 20.0));
    assert_eq!(world.position(4), Point2::new(18.0, 20.0));
}

#[test]
fn test_pairs_with_missing_entities_are_skipped() {
    let mut world = World::default();
    world.spawn(1, 50.0, 50.0, 10.0);

    assert!(CollisionFinder::new().find(&[(1, 2)], &world).is_empty());
    CollisionHandler::new().handle(&[], &mut world);
    assert!(world.orders.is_empty());
}

#[test]
fn test_remove_wrecks_stops_tracking() {
    let mut world = World::default();
    world.spawn(1, 50.0, 50.0, 10.0);
    world.spawn(2, 55.0, 50.0, 10.0);

    let mut manager = CollisionManager::new(arena());
    manager.insert_entity(1, &world).unwrap();
    manager.insert_entity(2, &world).unwrap();

    world.units.get_mut(&2).unwrap().removed = true;
    assert_eq!(manager.remove_wrecks(&world), vec![2]);
    assert!(!manager.quadtree().contains(2));
    assert!(manager.update(&mut world).is_empty());

    let mut boxes = Vec::new();
    manager.all_node_bounding_boxes(&mut boxes);
    assert_eq!(boxes, vec![arena()]);
}
