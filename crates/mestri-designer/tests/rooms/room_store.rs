use std::sync::{Arc, Mutex};

use mestri_core::{EventBus, EventFilter, LayoutEvent};
use mestri_designer::{Point, RoomField, RoomStore};
use mestri_settings::DesignerSettings;

fn store() -> RoomStore {
    RoomStore::new(&DesignerSettings::default())
}

#[test]
fn test_add_room_defaults() {
    let mut store = store();
    let room = store.add_room("bedroom");

    assert_eq!(room.id, 1);
    assert_eq!(room.name, "bedroom");
    assert_eq!(room.length, 12.0);
    assert_eq!(room.width, 10.0);
    assert_eq!(room.position, Point::new(20.0, 20.0));
    assert_eq!(store.rooms(), &[room]);
}

#[test]
fn test_category_is_used_verbatim() {
    let mut store = store();
    let room = store.add_room("Master Suite ");
    assert_eq!(room.name, "Master Suite ");
}

#[test]
fn test_update_length_and_width() {
    let mut store = store();
    store.add_room("bedroom");

    store.update_room(1, RoomField::Length, "15");
    store.update_room(1, RoomField::Width, "11.5");

    let room = store.get(1).unwrap();
    assert_eq!(room.length, 15.0);
    assert_eq!(room.width, 11.5);
    assert_eq!(room.position, Point::new(20.0, 20.0));
}

#[test]
fn test_invalid_input_sets_zero() {
    let mut store = store();
    store.add_room("bedroom");

    store.update_room(1, RoomField::Length, "abc");

    let room = store.get(1).unwrap();
    assert_eq!(room.length, 0.0);
    assert_eq!(room.width, 10.0);
    assert_eq!(store.total_area(), 0.0);
}

#[test]
fn test_update_missing_room_is_noop() {
    let mut store = store();
    store.add_room("bedroom");
    let before = store.rooms().to_vec();

    store.update_room(42, RoomField::Length, "99");

    assert_eq!(store.rooms(), before.as_slice());
}

#[test]
fn test_remove_missing_room_leaves_store_unchanged() {
    let mut store = store();
    store.add_room("bedroom");
    store.add_room("kitchen");
    let before = store.rooms().to_vec();

    assert!(!store.remove_room(7));
    assert_eq!(store.rooms(), before.as_slice());
}

#[test]
fn test_remove_keeps_order() {
    let mut store = store();
    store.add_room("bedroom");
    store.add_room("kitchen");
    store.add_room("study");

    assert!(store.remove_room(2));

    let names: Vec<_> = store.rooms().iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["bedroom", "study"]);
}

#[test]
fn test_export_layout() {
    let mut store = store();
    store.add_room("bedroom");
    store.add_room("kitchen");
    store.update_room(2, RoomField::Width, "8");

    let layout = store.export_layout();
    assert_eq!(layout.len(), 2);
    assert_eq!(layout[1].name, "kitchen");
    assert_eq!(layout[1].area, 96.0);
}

#[test]
fn test_mutations_are_published() {
    let bus = Arc::new(EventBus::new());
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = seen.clone();
    bus.subscribe(EventFilter::All, move |event| {
        sink.lock().unwrap().push(event.clone());
    });

    let mut store = RoomStore::with_event_bus(&DesignerSettings::default(), bus);
    store.add_room("bedroom");
    store.update_room(1, RoomField::Length, "15");
    store.update_room(5, RoomField::Length, "15");
    store.set_position(1, Point::new(30.0, 40.0));
    store.remove_room(1);
    store.remove_room(1);

    let seen = seen.lock().unwrap();
    assert_eq!(
        *seen,
        vec![
            LayoutEvent::RoomAdded {
                id: 1,
                name: "bedroom".to_string()
            },
            LayoutEvent::RoomResized {
                id: 1,
                length: 15.0,
                width: 10.0
            },
            LayoutEvent::RoomMoved {
                id: 1,
                x: 30.0,
                y: 40.0
            },
            LayoutEvent::RoomRemoved { id: 1 },
        ]
    );
}

#[test]
fn test_custom_defaults() {
    let settings = DesignerSettings {
        default_length: 8.0,
        default_width: 6.0,
        ..DesignerSettings::default()
    };
    let mut store = RoomStore::new(&settings);
    let room = store.add_room("bathroom");
    assert_eq!(room.area(), 48.0);
}
