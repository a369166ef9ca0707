//! Application-level wiring for the style stores.
//!
//! This module contains the store composition root and start-up configuration.

mod config;
mod stores;

pub use config::StoreConfig;
pub use stores::Stores;
