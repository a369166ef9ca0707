//! Template catalog for rstyle
//!
//! A template is a named, immutable bundle of the five style fields. The
//! catalog covers every [`TemplateName`], so looking a template up by its
//! typed name never fails.
//!
//! # Examples
//!
//! ```
//! use rstyle::template::{TemplateCatalog, TemplateName};
//!
//! let catalog = TemplateCatalog::builtin();
//! let classic = catalog.get(TemplateName::Classic);
//! assert_eq!(classic.font, "serif");
//! ```

use crate::error::{Result, StyleError};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

static BUILTIN_CATALOG: Lazy<TemplateCatalog> = Lazy::new(|| TemplateCatalog {
    modern: modern_template(),
    classic: classic_template(),
});

/// Names of the available templates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateName {
    #[default]
    Modern,
    Classic,
}

impl TemplateName {
    /// Every template name, in catalog order
    pub const ALL: [TemplateName; 2] = [TemplateName::Modern, TemplateName::Classic];

    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateName::Modern => "modern",
            TemplateName::Classic => "classic",
        }
    }
}

impl fmt::Display for TemplateName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TemplateName {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self> {
        TemplateName::ALL
            .into_iter()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| StyleError::UnknownTemplate(s.to_string()))
    }
}

/// The five style fields carried by a template
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateStyle {
    pub font: String,
    pub color: String,
    pub text_size: f32,
    pub gradient_start: String,
    pub gradient_end: String,
}

impl Default for TemplateStyle {
    fn default() -> Self {
        modern_template()
    }
}

/// Fixed mapping from every template name to its style record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateCatalog {
    modern: TemplateStyle,
    classic: TemplateStyle,
}

impl TemplateCatalog {
    /// Returns a copy of the built-in catalog
    pub fn builtin() -> Self {
        BUILTIN_CATALOG.clone()
    }

    /// Parses a catalog from JSON. Every template name must be present.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Retrieves a template by name
    pub fn get(&self, name: TemplateName) -> &TemplateStyle {
        match name {
            TemplateName::Modern => &self.modern,
            TemplateName::Classic => &self.classic,
        }
    }

    /// Retrieves a template by its string name
    pub fn get_by_name(&self, name: &str) -> Option<&TemplateStyle> {
        name.parse().ok().map(|name| self.get(name))
    }

    /// Iterates over `(name, template)` pairs in catalog order
    pub fn iter(&self) -> impl Iterator<Item = (TemplateName, &TemplateStyle)> {
        TemplateName::ALL.into_iter().map(move |name| (name, self.get(name)))
    }
}

impl Default for TemplateCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Sans-serif on a white-to-gray gradient; matches the store defaults
fn modern_template() -> TemplateStyle {
    TemplateStyle {
        font: "sans".to_string(),
        color: "#1f2937".to_string(),
        text_size: 16.0,
        gradient_start: "#ffffff".to_string(),
        gradient_end: "#f3f4f6".to_string(),
    }
}

/// Serif on a warm amber gradient
fn classic_template() -> TemplateStyle {
    TemplateStyle {
        font: "serif".to_string(),
        color: "#292524".to_string(),
        text_size: 18.0,
        gradient_start: "#fef3c7".to_string(),
        gradient_end: "#fde68a".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_template_names() {
        assert_eq!("modern".parse::<TemplateName>().unwrap(), TemplateName::Modern);
        assert_eq!("classic".parse::<TemplateName>().unwrap(), TemplateName::Classic);

        // Names are case-sensitive
        assert!(matches!(
            "Classic".parse::<TemplateName>(),
            Err(StyleError::UnknownTemplate(name)) if name == "Classic"
        ));
    }

    #[test]
    fn test_builtin_catalog_values() {
        let catalog = TemplateCatalog::builtin();

        let classic = catalog.get(TemplateName::Classic);
        assert_eq!(classic.font, "serif");
        assert_eq!(classic.color, "#292524");
        assert_eq!(classic.text_size, 18.0);
        assert_eq!(classic.gradient_start, "#fef3c7");
        assert_eq!(classic.gradient_end, "#fde68a");

        assert_eq!(catalog.get(TemplateName::Modern), &TemplateStyle::default());
    }

    #[test]
    fn test_get_by_name() {
        let catalog = TemplateCatalog::builtin();
        assert_eq!(catalog.get_by_name("classic").map(|t| t.text_size), Some(18.0));
        assert!(catalog.get_by_name("nonexistent").is_none());
    }

    #[test]
    fn test_iter_follows_catalog_order() {
        let catalog = TemplateCatalog::builtin();
        let names: Vec<_> = catalog.iter().map(|(name, _)| name).collect();
        assert_eq!(names, TemplateName::ALL);
    }

    #[test]
    fn test_catalog_from_json() {
        let json = r##"{
            "modern": {"font": "inter", "color": "#000000", "textSize": 14,
                       "gradientStart": "#ffffff", "gradientEnd": "#eeeeee"},
            "classic": {"font": "garamond", "color": "#111111", "textSize": 20,
                        "gradientStart": "#fef3c7", "gradientEnd": "#fde68a"}
        }"##;

        let catalog = TemplateCatalog::from_json(json).unwrap();
        assert_eq!(catalog.get(TemplateName::Modern).font, "inter");
        assert_eq!(catalog.get(TemplateName::Classic).text_size, 20.0);
    }

    #[test]
    fn test_catalog_missing_template_is_rejected() {
        let json = r##"{
            "modern": {"font": "sans", "color": "#1f2937", "textSize": 16,
                       "gradientStart": "#ffffff", "gradientEnd": "#f3f4f6"}
        }"##;

        assert!(matches!(
            TemplateCatalog::from_json(json),
            Err(StyleError::CatalogParse(_))
        ));
    }
}
