//! State management modules for rstyle.
//!
//! This module contains state-only logic (no rendering concerns):
//! - Style state (font, color, text size, gradient)
//! - Template state (catalog, current template, template application)
//! - Observers (change notification shared by both stores)

mod observers;
mod style_state;
mod template_state;

pub use observers::{Observers, SubscriptionId};
pub use style_state::{StyleChange, StyleField, StyleState};
pub use template_state::{SharedStyle, TemplateState};
