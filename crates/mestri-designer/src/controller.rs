//! Designer controller for host integration.
//!
//! Owns the room store and both view adapters, routes user actions to
//! them, and applies the finished layout to the hosting form. Views are
//! refreshed whenever the store publishes a collection change; drag moves
//! update only the dragged rectangle.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use mestri_core::{EventBus, EventCategory, EventFilter, LayoutEntry, LayoutEvent, SubscriptionId};
use mestri_settings::DesignerSettings;

use crate::canvas_view::{CanvasView, RoomRect};
use crate::geometry::Point;
use crate::host::HostForm;
use crate::list_view::{ListEvent, ListView};
use crate::room::{Room, RoomField, RoomId};
use crate::room_store::RoomStore;
use crate::viewport::Viewport;

/// What Save/Apply handed to the host.
#[derive(Debug, Clone, PartialEq)]
pub struct SaveOutcome {
    /// Total area rounded to the nearest square foot
    pub total_area: i64,
    pub layout: Vec<LayoutEntry>,
}

/// Designer state for host integration
pub struct DesignerController {
    store: RoomStore,
    list: ListView,
    canvas: CanvasView,
    open: bool,
    stats: String,
    needs_render: Arc<AtomicBool>,
    subscription: SubscriptionId,
}

impl DesignerController {
    /// Creates a closed designer with an empty store and its own event bus.
    pub fn new(settings: &DesignerSettings) -> Self {
        Self::with_event_bus(settings, Arc::new(EventBus::new()))
    }

    /// Creates a closed designer publishing on a shared event bus.
    pub fn with_event_bus(settings: &DesignerSettings, events: Arc<EventBus>) -> Self {
        let needs_render = Arc::new(AtomicBool::new(false));
        let flag = needs_render.clone();
        let subscription = events.subscribe(
            EventFilter::Categories(vec![EventCategory::Rooms]),
            move |event| {
                if event.invalidates_views() {
                    flag.store(true, Ordering::SeqCst);
                }
            },
        );

        let mut controller = Self {
            store: RoomStore::with_event_bus(settings, events),
            list: ListView::new(),
            canvas: CanvasView::new(Viewport::default()),
            open: false,
            stats: String::new(),
            needs_render,
            subscription,
        };
        controller.render_all();
        controller
    }

    /// Reveals the designer surface.
    pub fn open(&mut self) {
        if !self.open {
            self.open = true;
            self.store.events().publish(LayoutEvent::DesignerOpened);
        }
    }

    /// Hides the designer surface. Rooms are kept.
    ///
    /// An active drag is left running; only `pointer_up` ends it.
    pub fn close(&mut self) {
        if self.open {
            self.open = false;
            self.store.events().publish(LayoutEvent::DesignerClosed);
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Adds a room of `category` and refreshes both views and the stats.
    pub fn add_room(&mut self, category: &str) -> Room {
        let room = self.store.add_room(category);
        self.refresh();
        room
    }

    /// Handles an edit or remove from the list view.
    pub fn list_event(&mut self, event: ListEvent) {
        self.list.dispatch(event, &mut self.store);
        self.refresh();
    }

    /// Shorthand for a list-view field edit.
    pub fn edit_room(&mut self, id: RoomId, field: RoomField, raw: &str) {
        self.list_event(ListEvent::Edit {
            id,
            field,
            raw: raw.to_string(),
        });
    }

    /// Shorthand for a list-view remove.
    pub fn remove_room(&mut self, id: RoomId) {
        self.list_event(ListEvent::Remove { id });
    }

    /// PointerDown on the canvas, in page coordinates.
    pub fn pointer_down(&mut self, page: Point) -> Option<RoomId> {
        self.canvas.pointer_down(page, &self.store)
    }

    /// PointerMove anywhere on the page.
    pub fn pointer_move(&mut self, page: Point) -> Option<&RoomRect> {
        self.canvas.pointer_move(page, &mut self.store)
    }

    /// PointerUp anywhere on the page; always ends the drag.
    pub fn pointer_up(&mut self) {
        self.canvas.pointer_up();
    }

    /// Applies the layout to `form` and hides the designer.
    ///
    /// The store is left intact so reopening shows the same layout.
    pub fn save<F: HostForm + ?Sized>(&mut self, form: &mut F) -> SaveOutcome {
        let total_area = self.store.total_area().round() as i64;
        let layout = self.store.export_layout();

        form.set_area(total_area);
        form.set_custom_layout(layout.clone());

        tracing::info!(
            "Applied layout: {} rooms, {} sqft",
            layout.len(),
            total_area
        );
        self.store.events().publish(LayoutEvent::LayoutSaved {
            total_area,
            room_count: layout.len(),
        });
        self.close();

        SaveOutcome { total_area, layout }
    }

    /// Total area readout, rounded to whole square feet.
    pub fn stats(&self) -> &str {
        &self.stats
    }

    pub fn store(&self) -> &RoomStore {
        &self.store
    }

    pub fn list_view(&self) -> &ListView {
        &self.list
    }

    pub fn canvas_view(&self) -> &CanvasView {
        &self.canvas
    }

    /// Mutable canvas access, e.g. to move its viewport origin.
    pub fn canvas_view_mut(&mut self) -> &mut CanvasView {
        &mut self.canvas
    }

    /// Re-renders if the store reported a collection change since the last
    /// render.
    fn refresh(&mut self) {
        if self.needs_render.swap(false, Ordering::SeqCst) {
            self.render_all();
        }
    }

    fn render_all(&mut self) {
        self.list.render(&self.store);
        self.canvas.render(&self.store);
        self.stats = format!("{}", self.store.total_area().round() as i64);
    }
}

impl Drop for DesignerController {
    fn drop(&mut self) {
        self.store.events().unsubscribe(self.subscription);
    }
}

impl std::fmt::Debug for DesignerController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DesignerController")
            .field("rooms", &self.store.len())
            .field("open", &self.open)
            .field("drag", &self.canvas.drag_state())
            .finish()
    }
}
