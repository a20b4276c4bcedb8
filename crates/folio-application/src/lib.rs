//! Use-case layer for the folio portfolio admin.
//!
//! Wires the domain core and the infrastructure adapters into the
//! workflow a rendering adapter drives.

pub mod admin_usecase;
pub mod bootstrap;

pub use admin_usecase::{AdminUseCase, EditState};
pub use bootstrap::bootstrap;
