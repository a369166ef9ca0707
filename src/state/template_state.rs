//! Template selection state management.
//!
//! This module owns the template catalog and the currently selected
//! template, and pushes a selected template's fields into the style store.

use crate::error::Result;
use crate::state::observers::{Observers, SubscriptionId};
use crate::state::style_state::StyleState;
use crate::template::{TemplateCatalog, TemplateName, TemplateStyle};
use std::cell::RefCell;
use std::rc::Rc;

/// Shared handle to the style store.
pub type SharedStyle = Rc<RefCell<StyleState>>;

/// State related to template selection.
///
/// Responsibilities:
/// - Holding the fixed template catalog
/// - Tracking the current template
/// - Applying a template to the injected style store
pub struct TemplateState {
    /// Name of the last applied template
    current_template: TemplateName,
    /// Catalog fixed at construction
    templates: TemplateCatalog,
    /// Style store the templates are applied to
    style: SharedStyle,
    /// Callbacks notified after a template has been applied
    observers: Observers<TemplateName>,
}

impl std::fmt::Debug for TemplateState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TemplateState")
            .field("current_template", &self.current_template)
            .finish_non_exhaustive()
    }
}

impl TemplateState {
    /// Creates a template state over the built-in catalog.
    pub fn new(style: SharedStyle) -> Self {
        Self::with_catalog(style, TemplateCatalog::builtin())
    }

    /// Creates a template state over a custom catalog.
    ///
    /// The style store is not touched; `current_template` starts at `modern`.
    pub fn with_catalog(style: SharedStyle, templates: TemplateCatalog) -> Self {
        Self {
            current_template: TemplateName::default(),
            templates,
            style,
            observers: Observers::new(),
        }
    }

    // ===== Template Queries =====

    pub fn current_template(&self) -> TemplateName {
        self.current_template
    }

    pub fn templates(&self) -> &TemplateCatalog {
        &self.templates
    }

    pub fn template(&self, name: TemplateName) -> &TemplateStyle {
        self.templates.get(name)
    }

    /// Returns the shared style store handle.
    pub fn style(&self) -> &SharedStyle {
        &self.style
    }

    // ===== Template Mutations =====

    /// Applies a template to the style store.
    ///
    /// All five fields are written before this returns.
    pub fn set_template(&mut self, name: TemplateName) {
        self.current_template = name;
        let template = self.templates.get(name);

        {
            let mut style = self.style.borrow_mut();
            style.update_font(template.font.as_str());
            style.update_color(template.color.as_str());
            style.update_text_size(template.text_size);
            style.update_gradient_start(template.gradient_start.as_str());
            style.update_gradient_end(template.gradient_end.as_str());
        }

        tracing::debug!("Applied template '{}'", name);
        self.observers.notify(&name);
    }

    /// Applies a template given by its string name.
    ///
    /// Unknown names are rejected with `StyleError::UnknownTemplate` and
    /// leave both stores unchanged.
    pub fn set_template_by_name(&mut self, name: &str) -> Result<()> {
        let template_name = name.parse::<TemplateName>().inspect_err(|_| {
            tracing::warn!("Rejected unknown template '{}'", name);
        })?;
        self.set_template(template_name);
        Ok(())
    }

    // ===== Observers =====

    /// Registers a callback invoked after each template application.
    pub fn subscribe(&mut self, callback: impl FnMut(&TemplateName) + 'static) -> SubscriptionId {
        self.observers.subscribe(callback)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }
}
