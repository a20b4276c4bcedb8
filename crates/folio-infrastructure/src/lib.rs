//! Infrastructure adapters for the folio core.
//!
//! Concrete session stores, seed-data loading with built-in
//! fallbacks, configuration, and the mock submit gateway. Everything
//! here sits on the outside of the `folio-core` seams.

pub mod config;
pub mod file_store;
pub mod gateway;
pub mod memory_store;
pub mod seed;

pub use crate::config::FolioConfig;
pub use crate::file_store::FileSessionStore;
pub use crate::gateway::{MockSubmitGateway, SubmitGateway, SubmitReceipt};
pub use crate::memory_store::InMemorySessionStore;
