use common::shapes::*;
use nalgebra::Point2;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn test_new_and_getters() {
    let rect = Rectangle::new(2.0, 3.0, 4.0, 6.0);
    assert_eq!(rect.width(), 4.0);
    assert_eq!(rect.height(), 6.0);
    assert_eq!(rect.left(), 0.0);
    assert_eq!(rect.right(), 4.0);
    assert_eq!(rect.top(), 0.0);
    assert_eq!(rect.bottom(), 6.0);
    assert_eq!(rect.center(), Point2::new(2.0, 3.0));
}

#[test]
fn test_from_corners() {
    let rect = Rectangle::from_corners(Point2::new(-10.0, 0.0), Point2::new(10.0, 40.0));
    assert_eq!(rect, Rectangle::new(0.0, 20.0, 20.0, 40.0));
}

#[test]
fn test_quadrants() {
    let rect = Rectangle::new(50.0, 50.0, 100.0, 100.0);
    let [top_left, top_right, bottom_left, bottom_right] = rect.quadrants();
    assert_eq!(top_left, Rectangle::new(25.0, 25.0, 50.0, 50.0));
    assert_eq!(top_right, Rectangle::new(75.0, 25.0, 50.0, 50.0));
    assert_eq!(bottom_left, Rectangle::new(25.0, 75.0, 50.0, 50.0));
    assert_eq!(bottom_right, Rectangle::new(75.0, 75.0, 50.0, 50.0));
}

#[test]
fn test_intersects_excludes_touching_edges() {
    let rect = Rectangle::new(0.0, 0.0, 10.0, 10.0);
    assert!(rect.intersects(&Rectangle::new(9.0, 0.0, 10.0, 10.0)));
    assert!(!rect.intersects(&Rectangle::new(10.0, 0.0, 10.0, 10.0)));
    assert!(!rect.intersects(&Rectangle::new(0.0, 30.0, 10.0, 10.0)));
}

#[test]
fn test_contains_circle() {
    let rect = Rectangle::new(2.0, 3.0, 4.0, 6.0);
    assert!(rect.contains_circle(2.0, 3.0, 1.0));
    assert!(!rect.contains_circle(6.0, 3.0, 1.0));
    assert!(!rect.contains_circle(2.0, 8.0, 1.0));
}

#[test]
fn test_circle_bounding_box_roundtrip() {
    let circle = Circle::new(5.0, 7.0, 10.0);
    assert_eq!(circle.bounding_box, Rectangle::new(5.0, 7.0, 20.0, 20.0));
    assert_eq!(Circle::from_bounding_box(&circle.bounding_box), circle);

    let mut moved = circle;
    moved.update(-5.0, 0.0);
    assert_eq!(moved.bounding_box.center(), Point2::new(-5.0, 0.0));
}

#[test]
fn test_get_random_circle_coords_inside() {
    let rect = Rectangle::new(2.0, 3.0, 6.0, 8.0);
    let radius = 1.0;

    // Use a fixed seed for reproducibility.
    let mut rng: StdRng = SeedableRng::seed_from_u64(123);

    for _ in 0..10 {
        let (x, y) = rect.get_random_circle_coords_inside(radius, &mut rng);
        assert!(rect.contains_circle(x, y, radius));
    }
}

#[test]
fn test_get_random_circle_coords_inside_small_rectangle() {
    let rect = Rectangle::new(2.0, 3.0, 2.0, 2.0);
    let radius = 2.0;

    let mut rng: StdRng = SeedableRng::seed_from_u64(123);

    let (x, y) = rect.get_random_circle_coords_inside(radius, &mut rng);
    // The generated coordinates should be clamped to the left/top of the rectangle.
    assert_eq!(x, rect.left() + radius + 1.0);
    assert_eq!(y, rect.top() + radius + 1.0);
}
