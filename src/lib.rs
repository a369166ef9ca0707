pub mod app;
pub mod color;
pub mod error;
pub mod state;
pub mod template;

// Export stores and configuration
pub use app::{StoreConfig, Stores};

// Export state components
pub use state::{
    SharedStyle, StyleChange, StyleField, StyleState,
    SubscriptionId, TemplateState
};

// Export template catalog
pub use template::{TemplateCatalog, TemplateName, TemplateStyle};

// Export error types
pub use error::{Result, StyleError};

// Export color helpers
pub use color::{hex_to_color32, is_hex_color};
