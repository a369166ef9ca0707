//! Style preference state management.
//!
//! This module holds the current UI style values (font, color, text size,
//! gradient) and the per-field setters that mutate them.

use crate::color::hex_to_color32;
use crate::state::observers::{Observers, SubscriptionId};
use crate::template::TemplateStyle;
use egui::Color32;

/// Identifies one independently settable style field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleField {
    Font,
    Color,
    TextSize,
    GradientStart,
    GradientEnd,
}

/// A single field write, carrying the new value.
#[derive(Debug, Clone, PartialEq)]
pub enum StyleChange {
    Font(String),
    Color(String),
    TextSize(f32),
    GradientStart(String),
    GradientEnd(String),
}

impl StyleChange {
    /// Returns the field this change wrote.
    pub fn field(&self) -> StyleField {
        match self {
            StyleChange::Font(_) => StyleField::Font,
            StyleChange::Color(_) => StyleField::Color,
            StyleChange::TextSize(_) => StyleField::TextSize,
            StyleChange::GradientStart(_) => StyleField::GradientStart,
            StyleChange::GradientEnd(_) => StyleField::GradientEnd,
        }
    }
}

/// State related to UI style preferences.
///
/// Responsibilities:
/// - Holding the five style fields
/// - Providing one setter per field
/// - Notifying observers after each write
///
/// Setters accept any value; colors and sizes are stored as given.
pub struct StyleState {
    /// Font family identifier
    font: String,
    /// Text color
    color: String,
    /// Text size in points
    text_size: f32,
    /// Background gradient start color
    gradient_start: String,
    /// Background gradient end color
    gradient_end: String,
    /// Callbacks notified after each field write
    observers: Observers<StyleChange>,
}

impl std::fmt::Debug for StyleState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StyleState")
            .field("font", &self.font)
            .field("color", &self.color)
            .field("text_size", &self.text_size)
            .field("gradient_start", &self.gradient_start)
            .field("gradient_end", &self.gradient_end)
            .finish_non_exhaustive()
    }
}

impl Default for StyleState {
    fn default() -> Self {
        Self::new()
    }
}

impl StyleState {
    /// Creates a new style state with the default (modern) values.
    pub fn new() -> Self {
        Self::with_style(TemplateStyle::default())
    }

    /// Creates a new style state initialized from a style record.
    pub fn with_style(style: TemplateStyle) -> Self {
        Self {
            font: style.font,
            color: style.color,
            text_size: style.text_size,
            gradient_start: style.gradient_start,
            gradient_end: style.gradient_end,
            observers: Observers::new(),
        }
    }

    // ===== Style Queries =====

    pub fn font(&self) -> &str {
        &self.font
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn text_size(&self) -> f32 {
        self.text_size
    }

    pub fn gradient_start(&self) -> &str {
        &self.gradient_start
    }

    pub fn gradient_end(&self) -> &str {
        &self.gradient_end
    }

    /// Returns the current fields as a style record.
    pub fn snapshot(&self) -> TemplateStyle {
        TemplateStyle {
            font: self.font.clone(),
            color: self.color.clone(),
            text_size: self.text_size,
            gradient_start: self.gradient_start.clone(),
            gradient_end: self.gradient_end.clone(),
        }
    }

    // ===== Color Queries =====

    /// Text color as Color32, or None if it is not a hex color.
    pub fn text_color32(&self) -> Option<Color32> {
        hex_to_color32(&self.color)
    }

    pub fn gradient_start_color32(&self) -> Option<Color32> {
        hex_to_color32(&self.gradient_start)
    }

    pub fn gradient_end_color32(&self) -> Option<Color32> {
        hex_to_color32(&self.gradient_end)
    }

    // ===== Style Mutations =====

    pub fn update_color(&mut self, color: impl Into<String>) {
        self.color = color.into();
        tracing::trace!("style color = {}", self.color);
        self.observers.notify(&StyleChange::Color(self.color.clone()));
    }

    pub fn update_font(&mut self, font: impl Into<String>) {
        self.font = font.into();
        tracing::trace!("style font = {}", self.font);
        self.observers.notify(&StyleChange::Font(self.font.clone()));
    }

    pub fn update_text_size(&mut self, size: f32) {
        self.text_size = size;
        tracing::trace!("style text_size = {}", self.text_size);
        self.observers.notify(&StyleChange::TextSize(size));
    }

    pub fn update_gradient_start(&mut self, color: impl Into<String>) {
        self.gradient_start = color.into();
        tracing::trace!("style gradient_start = {}", self.gradient_start);
        self.observers
            .notify(&StyleChange::GradientStart(self.gradient_start.clone()));
    }

    pub fn update_gradient_end(&mut self, color: impl Into<String>) {
        self.gradient_end = color.into();
        tracing::trace!("style gradient_end = {}", self.gradient_end);
        self.observers
            .notify(&StyleChange::GradientEnd(self.gradient_end.clone()));
    }

    // ===== Observers =====

    /// Registers a callback invoked after every field write.
    ///
    /// The callback runs while the store is mutably borrowed; read the new
    /// value from the change event rather than from the store.
    pub fn subscribe(&mut self, callback: impl FnMut(&StyleChange) + 'static) -> SubscriptionId {
        self.observers.subscribe(callback)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }
}
