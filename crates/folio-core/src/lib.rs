//! Domain core for the folio portfolio admin.
//!
//! Pure, synchronous state management for the admin workflow: the
//! in-memory skill collection, the process-wide session, the access
//! policy gating mutations, and the render-ready view projection. The
//! core has no rendering surface and no I/O of its own beyond the
//! [`session::SessionStore`] key-value seam.

pub mod contact;
pub mod error;
pub mod policy;
pub mod projection;
pub mod session;
pub mod skill;
pub mod user;

// Re-export common error type
pub use error::FolioError;
