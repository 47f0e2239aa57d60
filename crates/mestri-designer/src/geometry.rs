//! Geometry for the layout canvas.
//!
//! Pure functions only: feet-to-pixel scaling, boundary clamping, drag
//! arithmetic and area aggregation. Canvas space has its origin at the
//! top-left with y growing downward.

use std::ops::{Add, Sub};

use crate::room::Room;

/// Default rendering scale.
pub const PIXELS_PER_FOOT: f64 = 10.0;

/// A point in canvas pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Creates a new point.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// A width/height pair in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// The canvas rooms are laid out on: its pixel extent and the scale used
/// to turn feet into pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasSpace {
    pub size: Size,
    pub pixels_per_foot: f64,
}

impl CanvasSpace {
    pub fn new(width: f64, height: f64, pixels_per_foot: f64) -> Self {
        Self {
            size: Size::new(width, height),
            pixels_per_foot,
        }
    }

    /// Rendered footprint of a room on this canvas.
    pub fn footprint(&self, room: &Room) -> Size {
        to_pixel_size(room, self.pixels_per_foot)
    }

    /// Clamps a proposed top-left for `room` into the canvas.
    pub fn clamp(&self, room: &Room, proposed: Point) -> Point {
        clamp_position(proposed, self.footprint(room), self.size)
    }
}

impl Default for CanvasSpace {
    fn default() -> Self {
        Self::new(600.0, 400.0, PIXELS_PER_FOOT)
    }
}

/// Rendered size of a room: length along x, width along y.
pub fn to_pixel_size(room: &Room, pixels_per_foot: f64) -> Size {
    Size::new(room.length * pixels_per_foot, room.width * pixels_per_foot)
}

/// Clamps each axis of `position` into `[0, canvas - footprint]`.
///
/// A footprint larger than the canvas pins that axis to 0; the room then
/// overflows the canvas visually.
pub fn clamp_position(position: Point, footprint: Size, canvas: Size) -> Point {
    Point::new(
        clamp_axis(position.x, footprint.width, canvas.width),
        clamp_axis(position.y, footprint.height, canvas.height),
    )
}

fn clamp_axis(value: f64, extent: f64, limit: f64) -> f64 {
    if value.is_nan() {
        return 0.0;
    }
    value.min(limit - extent).max(0.0)
}

/// Proposed top-left for a room being dragged.
///
/// `grab_offset` is the pointer position relative to the room's top-left
/// when the drag began. The result is unclamped.
pub fn drag_delta(pointer_start: Point, pointer_current: Point, grab_offset: Point) -> Point {
    let start_top_left = pointer_start - grab_offset;
    start_top_left + (pointer_current - pointer_start)
}

/// Sum of `length * width` over `rooms`, in square feet.
pub fn total_area<'a>(rooms: impl IntoIterator<Item = &'a Room>) -> f64 {
    rooms.into_iter().map(Room::area).sum()
}

/// Whether `point` lies inside the rectangle at `top_left` with `size`,
/// edges included.
pub fn contains(top_left: Point, size: Size, point: Point) -> bool {
    point.x >= top_left.x
        && point.x <= top_left.x + size.width
        && point.y >= top_left.y
        && point.y <= top_left.y + size.height
}
