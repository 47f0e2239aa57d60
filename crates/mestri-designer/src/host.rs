//! Seam between the designer and the form that hosts it.

use mestri_core::{LayoutEntry, ProjectForm};

/// The hosting form, as seen by the designer on Save/Apply.
pub trait HostForm {
    /// Writes the rounded total area into the form's area field.
    fn set_area(&mut self, area: i64);

    /// Stores the exported layout for the next plan request.
    fn set_custom_layout(&mut self, layout: Vec<LayoutEntry>);
}

impl HostForm for ProjectForm {
    fn set_area(&mut self, area: i64) {
        self.area = area.to_string();
    }

    fn set_custom_layout(&mut self, layout: Vec<LayoutEntry>) {
        self.custom_layout = Some(layout);
    }
}
