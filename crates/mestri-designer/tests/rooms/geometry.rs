use mestri_designer::{
    clamp_position, drag_delta, to_pixel_size, total_area, Point, Room, Size,
};

fn room(id: u64, length: f64, width: f64) -> Room {
    Room {
        id,
        name: "room".to_string(),
        length,
        width,
        position: Point::default(),
    }
}

#[test]
fn test_pixel_size_uses_scale() {
    let r = room(1, 15.0, 10.0);
    assert_eq!(to_pixel_size(&r, 10.0), Size::new(150.0, 100.0));
    assert_eq!(to_pixel_size(&r, 4.0), Size::new(60.0, 40.0));
}

#[test]
fn test_clamp_to_far_edges() {
    let p = clamp_position(
        Point::new(500.0, 500.0),
        Size::new(150.0, 100.0),
        Size::new(400.0, 400.0),
    );
    assert_eq!(p, Point::new(250.0, 300.0));
}

#[test]
fn test_clamp_axes_are_independent() {
    let p = clamp_position(
        Point::new(-10.0, 120.0),
        Size::new(150.0, 100.0),
        Size::new(400.0, 400.0),
    );
    assert_eq!(p, Point::new(0.0, 120.0));
}

#[test]
fn test_clamp_room_larger_than_canvas() {
    let p = clamp_position(
        Point::new(30.0, 30.0),
        Size::new(450.0, 500.0),
        Size::new(400.0, 400.0),
    );
    assert_eq!(p, Point::new(0.0, 0.0));
}

#[test]
fn test_drag_delta_keeps_grab_offset() {
    // Grabbed 10px right and 15px below the top-left.
    let start = Point::new(30.0, 35.0);
    let offset = Point::new(10.0, 15.0);
    assert_eq!(drag_delta(start, start, offset), Point::new(20.0, 20.0));
    assert_eq!(
        drag_delta(start, Point::new(130.0, 85.0), offset),
        Point::new(120.0, 70.0)
    );
}

#[test]
fn test_total_area() {
    let rooms = vec![room(1, 15.0, 10.0), room(2, 12.0, 10.0)];
    assert_eq!(total_area(&rooms), 270.0);
    assert_eq!(total_area(&Vec::<Room>::new()), 0.0);
}
