//! In-memory skill record collection.

use super::model::{MAX_LEVEL, SkillRecord};
use crate::error::{FolioError, Result};

/// The authoritative in-memory collection of skill records.
///
/// `RecordStore` holds the skill list in insertion order together with
/// the known category labels. All mutations are synchronous and
/// validated up front; identifiers come from a high-water mark that
/// only ever moves forward, so a new record's id is strictly greater
/// than every id handed out before it, including ids of records that
/// have since been removed.
#[derive(Debug, Default)]
pub struct RecordStore {
    records: Vec<SkillRecord>,
    categories: Vec<String>,
    /// Highest id ever present in the store; never decreases
    max_assigned: u32,
}

impl RecordStore {
    /// Creates an empty store with no category suggestions.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store seeded with existing records and category labels.
    ///
    /// Seed data is trusted as loaded (the loader is responsible for
    /// falling back to well-formed defaults on bad input). The id
    /// high-water mark starts at the highest seeded id.
    pub fn with_seed(records: Vec<SkillRecord>, categories: Vec<String>) -> Self {
        let max_assigned = records.iter().map(|r| r.id).max().unwrap_or(0);
        Self {
            records,
            categories,
            max_assigned,
        }
    }

    /// Returns all records in insertion order.
    pub fn list(&self) -> &[SkillRecord] {
        &self.records
    }

    /// Returns the known category labels, in document order.
    ///
    /// These are autocomplete suggestions only; `add` and `update`
    /// accept free-text categories.
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Looks up a record by id.
    pub fn get(&self, id: u32) -> Option<&SkillRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Adds a new record and returns it.
    ///
    /// # Errors
    ///
    /// Returns `FolioError::Validation` if `category` or `skill_name`
    /// is empty after trimming, or `level` exceeds [`MAX_LEVEL`].
    pub fn add(&mut self, category: &str, skill_name: &str, level: u8) -> Result<SkillRecord> {
        let (category, skill_name) = validate_fields(category, skill_name, level)?;

        self.max_assigned += 1;
        let record = SkillRecord {
            id: self.max_assigned,
            category,
            skill_name,
            level,
        };
        self.records.push(record.clone());
        Ok(record)
    }

    /// Updates the record with the given id in place and returns it.
    ///
    /// The record's id is never changed by an update.
    ///
    /// # Errors
    ///
    /// Returns `FolioError::NotFound` if no record has `id`, or
    /// `FolioError::Validation` under the same constraints as [`add`](Self::add).
    pub fn update(
        &mut self,
        id: u32,
        category: &str,
        skill_name: &str,
        level: u8,
    ) -> Result<SkillRecord> {
        let (category, skill_name) = validate_fields(category, skill_name, level)?;

        let record = self
            .records
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| FolioError::not_found("skill", id))?;

        record.category = category;
        record.skill_name = skill_name;
        record.level = level;
        Ok(record.clone())
    }

    /// Removes the record with the given id.
    ///
    /// Removal is not idempotent: removing an id that is absent fails,
    /// including a repeat removal of an id that was just deleted.
    ///
    /// # Errors
    ///
    /// Returns `FolioError::NotFound` if no record has `id`.
    pub fn remove(&mut self, id: u32) -> Result<()> {
        let index = self
            .records
            .iter()
            .position(|r| r.id == id)
            .ok_or_else(|| FolioError::not_found("skill", id))?;
        self.records.remove(index);
        Ok(())
    }
}

/// Validates add/update input, returning the trimmed text fields.
fn validate_fields(category: &str, skill_name: &str, level: u8) -> Result<(String, String)> {
    let category = category.trim();
    if category.is_empty() {
        return Err(FolioError::validation("category", "must not be empty"));
    }
    let skill_name = skill_name.trim();
    if skill_name.is_empty() {
        return Err(FolioError::validation("skillName", "must not be empty"));
    }
    if level > MAX_LEVEL {
        return Err(FolioError::validation(
            "level",
            format!("must be between 0 and {MAX_LEVEL}"),
        ));
    }
    Ok((category.to_string(), skill_name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_assigns_sequential_ids() {
        let mut store = RecordStore::new();

        let first = store.add("Backend", "Go", 80).unwrap();
        let second = store.add("Frontend", "TS", 70).unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(store.list().len(), 2);
    }

    #[test]
    fn test_add_id_strictly_increases_after_removal() {
        let mut store = RecordStore::new();

        store.add("Backend", "Go", 80).unwrap();
        let second = store.add("Frontend", "TS", 70).unwrap();
        store.remove(second.id).unwrap();

        // Highest assigned id so far was 2, so the next must be 3
        let third = store.add("Database", "PostgreSQL", 60).unwrap();
        assert_eq!(third.id, 3);
    }

    #[test]
    fn test_ids_never_reused_after_draining_the_store() {
        let mut store = RecordStore::new();

        let first = store.add("Backend", "Go", 80).unwrap();
        let second = store.add("Frontend", "TS", 70).unwrap();
        store.remove(first.id).unwrap();
        store.remove(second.id).unwrap();
        assert!(store.list().is_empty());

        // The high-water mark survives an emptied store
        let third = store.add("Database", "PostgreSQL", 60).unwrap();
        assert_eq!(third.id, 3);
    }

    #[test]
    fn test_add_validates_fields() {
        let mut store = RecordStore::new();

        assert!(store.add("", "Go", 80).unwrap_err().is_validation());
        assert!(store.add("Backend", "   ", 80).unwrap_err().is_validation());
        assert!(store.add("Backend", "Go", 101).unwrap_err().is_validation());
        assert!(store.list().is_empty());
    }

    #[test]
    fn test_add_trims_text_fields() {
        let mut store = RecordStore::new();

        let record = store.add("  Backend ", " Go ", 80).unwrap();

        assert_eq!(record.category, "Backend");
        assert_eq!(record.skill_name, "Go");
    }

    #[test]
    fn test_update_mutates_in_place_and_keeps_id() {
        let mut store = RecordStore::new();
        let record = store.add("Backend", "Go", 80).unwrap();

        let updated = store.update(record.id, "Backend", "Rust", 90).unwrap();

        assert_eq!(updated.id, record.id);
        assert_eq!(updated.skill_name, "Rust");
        assert_eq!(updated.level, 90);
        assert_eq!(store.list().len(), 1);
    }

    #[test]
    fn test_update_unknown_id_fails() {
        let mut store = RecordStore::new();

        let err = store.update(42, "Backend", "Go", 80).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_remove_twice_fails_the_second_time() {
        let mut store = RecordStore::new();
        let record = store.add("Backend", "Go", 80).unwrap();

        store.remove(record.id).unwrap();
        let err = store.remove(record.id).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_add_remove_list_scenario() {
        let mut store = RecordStore::new();

        let first = store.add("Backend", "Go", 80).unwrap();
        assert_eq!(first.id, 1);
        let second = store.add("Frontend", "TS", 70).unwrap();
        assert_eq!(second.id, 2);

        store.remove(1).unwrap();

        let remaining = store.list();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, 2);
        assert_eq!(remaining[0].category, "Frontend");
        assert_eq!(remaining[0].skill_name, "TS");
        assert_eq!(remaining[0].level, 70);
    }

    #[test]
    fn test_seeded_store_continues_id_sequence() {
        let seed = vec![
            SkillRecord {
                id: 5,
                category: "Backend".to_string(),
                skill_name: "Go".to_string(),
                level: 80,
            },
            SkillRecord {
                id: 2,
                category: "Frontend".to_string(),
                skill_name: "TS".to_string(),
                level: 70,
            },
        ];
        let mut store = RecordStore::with_seed(seed, vec!["Backend".to_string()]);

        let record = store.add("Tools", "Git", 75).unwrap();
        assert_eq!(record.id, 6);
        assert_eq!(store.categories(), ["Backend".to_string()]);
    }
}
