//! Start-up configuration for the style stores.
//!
//! Configuration is a JSON document (camelCase keys):
//!
//! ```json
//! { "initialTemplate": "classic", "catalog": { "modern": { ... }, "classic": { ... } } }
//! ```
//!
//! Both keys are optional. Configuration only shapes start-up; nothing is
//! written back.

use crate::error::Result;
use crate::template::{TemplateCatalog, TemplateName};
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Start-up options for [`Stores`](crate::app::Stores).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StoreConfig {
    /// Template applied when the stores are created
    pub initial_template: TemplateName,
    /// Replacement for the built-in catalog
    pub catalog: Option<TemplateCatalog>,
}

impl StoreConfig {
    /// Parses a configuration document.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a configuration file.
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read style config {}", path.display()))?;
        Self::from_json(&json)
            .with_context(|| format!("Invalid style config {}", path.display()))
    }

    /// Parses a configuration document, falling back to defaults when it is
    /// absent or invalid.
    pub fn load_or_default(json: Option<&str>) -> Self {
        let Some(json) = json else {
            return Self::default();
        };

        match Self::from_json(json) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Falling back to default style config: {}", e);
                Self::default()
            }
        }
    }

    /// Returns the configured catalog, or the built-in one.
    pub fn catalog(&self) -> TemplateCatalog {
        self.catalog.clone().unwrap_or_else(TemplateCatalog::builtin)
    }
}
