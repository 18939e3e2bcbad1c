use common::shapes::Rectangle;

pub trait EntityView {
    // None once the handle no longer exists.
    fn bounding_rect(&self, value: u32) -> Option<Rectangle>;

    fn is_moving(&self, value: u32) -> bool;

    fn is_marked_for_removal(&self, value: u32) -> bool;
}
