use mestri_designer::{ListEvent, ListView, RoomField, RoomStore};
use mestri_settings::DesignerSettings;

#[test]
fn test_rows_follow_store_order() {
    let mut store = RoomStore::new(&DesignerSettings::default());
    store.add_room("bedroom");
    store.add_room("kitchen");

    let mut view = ListView::new();
    view.render(&store);

    let labels: Vec<_> = view.rows().iter().map(|r| r.label.as_str()).collect();
    assert_eq!(labels, vec!["bedroom 1", "kitchen 2"]);
    assert_eq!(view.rows()[1].area, "120");
}

#[test]
fn test_edit_goes_through_store() {
    let mut store = RoomStore::new(&DesignerSettings::default());
    store.add_room("bedroom");
    let mut view = ListView::new();

    view.dispatch(
        ListEvent::Edit {
            id: 1,
            field: RoomField::Width,
            raw: "9".to_string(),
        },
        &mut store,
    );
    view.render(&store);

    assert_eq!(store.get(1).unwrap().width, 9.0);
    assert_eq!(view.rows()[0].width, "9");
    assert_eq!(view.rows()[0].area, "108");
}

#[test]
fn test_stale_edit_after_remove() {
    let mut store = RoomStore::new(&DesignerSettings::default());
    store.add_room("bedroom");
    let view = ListView::new();

    view.dispatch(ListEvent::Remove { id: 1 }, &mut store);
    view.dispatch(
        ListEvent::Edit {
            id: 1,
            field: RoomField::Length,
            raw: "20".to_string(),
        },
        &mut store,
    );

    assert!(store.is_empty());
}

#[test]
fn test_render_empty_store() {
    let store = RoomStore::new(&DesignerSettings::default());
    let mut view = ListView::new();
    view.render(&store);
    assert!(view.rows().is_empty());
    assert_eq!(view.to_text(), "");
}
