//! Viewport mapping between page coordinates and canvas coordinates.
//!
//! Pointer events arrive in page space (relative to the document). Rooms
//! live in canvas space, whose origin is the canvas element's top-left.
//! Both spaces share orientation and scale, so the mapping is a translation.

use crate::geometry::Point;

/// Position of the canvas element within the page.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    origin: Point,
}

impl Viewport {
    /// Creates a viewport for a canvas whose top-left sits at `origin` in
    /// page coordinates.
    pub fn new(origin: Point) -> Self {
        Self { origin }
    }

    /// Page position of the canvas top-left.
    pub fn origin(&self) -> Point {
        self.origin
    }

    /// Updates the canvas position, e.g. after the page scrolls or the
    /// designer surface is laid out again.
    pub fn set_origin(&mut self, origin: Point) {
        self.origin = origin;
    }

    /// Converts page coordinates to canvas coordinates.
    pub fn page_to_canvas(&self, page: Point) -> Point {
        page - self.origin
    }

    /// Converts canvas coordinates to page coordinates.
    pub fn canvas_to_page(&self, canvas: Point) -> Point {
        canvas + self.origin
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_viewport() {
        let viewport = Viewport::default();
        let p = Point::new(12.0, 34.0);
        assert_eq!(viewport.page_to_canvas(p), p);
    }

    #[test]
    fn test_offset_round_trip() {
        let viewport = Viewport::new(Point::new(100.0, 250.0));
        let canvas = viewport.page_to_canvas(Point::new(130.0, 260.0));
        assert_eq!(canvas, Point::new(30.0, 10.0));
        assert_eq!(viewport.canvas_to_page(canvas), Point::new(130.0, 260.0));
    }
}
