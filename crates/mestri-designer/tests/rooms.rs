#[path = "rooms/room_store.rs"]
mod room_store;
#[path = "rooms/geometry.rs"]
mod geometry;
#[path = "rooms/list_view.rs"]
mod list_view;
