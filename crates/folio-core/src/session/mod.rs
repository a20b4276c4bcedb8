//! Session domain module.
//!
//! - `model`: the process-wide `Session` state
//! - `repository`: the `SessionStore` key-value persistence trait
//! - `manager`: `SessionManager`, owning the session lifecycle

mod manager;
mod model;
mod repository;

pub use manager::SessionManager;
pub use model::Session;
pub use repository::{SESSION_KEY, SessionStore};
