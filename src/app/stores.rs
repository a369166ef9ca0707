//! Composition root for the style stores.
//!
//! Creates the single style store, injects it into the template store, and
//! applies start-up configuration. Both stores live as long as `Stores`.

use crate::app::StoreConfig;
use crate::state::{SharedStyle, StyleState, TemplateState};
use crate::template::{TemplateCatalog, TemplateName};
use std::cell::{Ref, RefCell, RefMut};
use std::rc::Rc;

/// The process-wide pair of stores.
///
/// A UI layer reads `style()` to render and calls `template.set_template`
/// when the user picks a template.
///
/// Style observers run while the style store is mutably borrowed, so a
/// callback that calls `style()` (or borrows the shared handle) panics.
/// Read the new value from the `StyleChange` instead.
#[derive(Debug)]
pub struct Stores {
    /// Shared style store
    style: SharedStyle,

    /// Template catalog and selection
    pub template: TemplateState,
}

impl Default for Stores {
    fn default() -> Self {
        Self::new()
    }
}

impl Stores {
    /// Creates both stores at their documented defaults.
    pub fn new() -> Self {
        Self::with_catalog(TemplateCatalog::builtin())
    }

    /// Creates both stores over a custom catalog.
    ///
    /// The style store starts at the catalog's `modern` record, matching
    /// `current_template`.
    pub fn with_catalog(catalog: TemplateCatalog) -> Self {
        let initial = catalog.get(TemplateName::default()).clone();
        let style: SharedStyle = Rc::new(RefCell::new(StyleState::with_style(initial)));
        let template = TemplateState::with_catalog(Rc::clone(&style), catalog);
        tracing::debug!("Created style stores");
        Self { style, template }
    }

    /// Creates both stores from a start-up configuration.
    pub fn from_config(config: &StoreConfig) -> Self {
        let mut stores = Self::with_catalog(config.catalog());
        stores.template.set_template(config.initial_template);
        stores
    }

    /// Borrows the style store for reading.
    pub fn style(&self) -> Ref<'_, StyleState> {
        self.style.borrow()
    }

    /// Borrows the style store for direct field updates.
    pub fn style_mut(&self) -> RefMut<'_, StyleState> {
        self.style.borrow_mut()
    }

    /// Returns a clone of the shared style handle.
    pub fn style_handle(&self) -> SharedStyle {
        Rc::clone(&self.style)
    }
}
