//! Skill domain module.
//!
//! - `model`: the `SkillRecord` entity
//! - `store`: the in-memory `RecordStore` collection

mod model;
mod store;

pub use model::{MAX_LEVEL, SkillRecord};
pub use store::RecordStore;
