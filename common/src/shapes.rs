use nalgebra::Point2;
use rand::Rng;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Circle {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    pub bounding_box: Rectangle,
}

impl Circle {
    pub fn new(x: f32, y: f32, radius: f32) -> Self {
        let bounding_box = Rectangle {
            x,
            y,
            width: radius * 2.0,
            height: radius * 2.0,
        };
        Self {
            x,
            y,
            radius,
            bounding_box,
        }
    }

    // Circle inscribed in a bounding rectangle, radius taken from its half width
    pub fn from_bounding_box(rect: &Rectangle) -> Self {
        Self::new(rect.x, rect.y, rect.width / 2.0)
    }

    pub fn center(&self) -> Point2<f32> {
        Point2::new(self.x, self.y)
    }

    pub fn update(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
        self.update_bounding_box();
    }

    fn update_bounding_box(&mut self) {
        self.bounding_box = Rectangle {
            x: self.x,
            y: self.y,
            width: self.radius * 2.0,
            height: self.radius * 2.0,
        };
    }
}

/// Axis-aligned rectangle stored by its center and size.
///
/// The y axis points down, so `top()` is the smaller y coordinate.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Rectangle {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rectangle {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn from_corners(min: Point2<f32>, max: Point2<f32>) -> Self {
        Self {
            x: (min.x + max.x) / 2.0,
            y: (min.y + max.y) / 2.0,
            width: max.x - min.x,
            height: max.y - min.y,
        }
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn left(&self) -> f32 {
        self.x - self.width / 2.0
    }

    pub fn right(&self) -> f32 {
        self.x + self.width / 2.0
    }

    pub fn top(&self) -> f32 {
        self.y - self.height / 2.0
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height / 2.0
    }

    pub fn center(&self) -> Point2<f32> {
        Point2::new(self.x, self.y)
    }

    // Returns the four equal quadrants in top-left, top-right, bottom-left, bottom-right order
    pub fn quadrants(&self) -> [Rectangle; 4] {
        let half_width = self.width / 2.0;
        let half_height = self.height / 2.0;
        let quarter_width = half_width / 2.0;
        let quarter_height = half_height / 2.0;
        [
            Rectangle::new(
                self.x - quarter_width,
                self.y - quarter_height,
                half_width,
                half_height,
            ),
            Rectangle::new(
                self.x + quarter_width,
                self.y - quarter_height,
                half_width,
                half_height,
            ),
            Rectangle::new(
                self.x - quarter_width,
                self.y + quarter_height,
                half_width,
                half_height,
            ),
            Rectangle::new(
                self.x + quarter_width,
                self.y + quarter_height,
                half_width,
                half_height,
            ),
        ]
    }

    /// Open-interval overlap: rectangles that only touch along an edge do not intersect.
    pub fn intersects(&self, other: &Rectangle) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }

    pub fn contains_circle(&self, x: f32, y: f32, radius: f32) -> bool {
        let dx = (x - self.x).abs();
        let dy = (y - self.y).abs();
        let half_width = self.width / 2.0;
        let half_height = self.height / 2.0;
        if dx > half_width + radius || dy > half_height + radius {
            return false;
        }
        if dx <= half_width || dy <= half_height {
            return true;
        }
        let corner_distance_sq = (dx - half_width).powi(2) + (dy - half_height).powi(2);
        corner_distance_sq <= radius.powi(2)
    }

    pub fn get_random_circle_coords_inside<R: Rng>(&self, radius: f32, rng: &mut R) -> (f32, f32) {
        // One unit of margin keeps the circle strictly inside.
        let radius = radius + 1.0;
        (
            self.random_in_range(rng, self.left() + radius, self.right() - radius),
            self.random_in_range(rng, self.top() + radius, self.bottom() - radius),
        )
    }

    fn random_in_range<R: Rng>(&self, rng: &mut R, min: f32, max: f32) -> f32 {
        // Too small to fit: pin to the low edge.
        if min > max {
            return min;
        }
        rng.gen_range(min..=max)
    }
}
