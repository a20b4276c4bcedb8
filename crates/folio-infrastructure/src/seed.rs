//! Seed data loading with built-in fallbacks.
//!
//! The core is seeded from two JSON documents: the skill table
//! (`{ "skills": [...], "categories": [...] }`) and the account list
//! (`{ "users": [...] }`). A missing or malformed document is logged
//! at warn level and replaced by a small built-in default, never
//! surfaced as an error: loading must complete, successfully or via
//! fallback, before the core is first used.

use folio_core::error::{FolioError, Result};
use folio_core::skill::{MAX_LEVEL, SkillRecord};
use folio_core::user::UserAccount;
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// The skill seed document shape.
#[derive(Debug, Default, Deserialize)]
pub struct SkillDocument {
    #[serde(default)]
    pub skills: Vec<SkillRecord>,
    #[serde(default)]
    pub categories: Vec<String>,
}

/// The account seed document shape.
#[derive(Debug, Default, Deserialize)]
pub struct AccountDocument {
    #[serde(default)]
    pub users: Vec<UserAccount>,
}

/// Loads the skill document from `path`, falling back to
/// [`default_skill_document`] on any failure.
pub fn load_skill_document(path: impl AsRef<Path>) -> SkillDocument {
    let path = path.as_ref();
    let loaded = read_json::<SkillDocument>(path).and_then(|document| {
        check_skill_invariants(&document)?;
        Ok(document)
    });
    match loaded {
        Ok(document) => {
            debug!(?path, skills = document.skills.len(), "skill document loaded");
            document
        }
        Err(err) => {
            warn!(?path, %err, "failed to load skill document, using built-in defaults");
            default_skill_document()
        }
    }
}

/// Loads the account document from `path`, falling back to
/// [`default_account_document`] on any failure.
pub fn load_account_document(path: impl AsRef<Path>) -> AccountDocument {
    let path = path.as_ref();
    match read_json::<AccountDocument>(path) {
        Ok(document) => {
            debug!(?path, users = document.users.len(), "account document loaded");
            document
        }
        Err(err) => {
            warn!(?path, %err, "failed to load account document, using built-in defaults");
            default_account_document()
        }
    }
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let raw = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

/// Checks the record invariants the store enforces on its own
/// mutations: ids unique and greater than zero, levels in range. A
/// document that parses but violates them is treated as malformed.
fn check_skill_invariants(document: &SkillDocument) -> Result<()> {
    let mut seen = HashSet::new();
    for record in &document.skills {
        if record.id == 0 {
            return Err(FolioError::validation("id", "must be greater than zero"));
        }
        if !seen.insert(record.id) {
            return Err(FolioError::validation(
                "id",
                format!("duplicate id {}", record.id),
            ));
        }
        if record.level > MAX_LEVEL {
            return Err(FolioError::validation(
                "level",
                format!("must be between 0 and {MAX_LEVEL}"),
            ));
        }
    }
    Ok(())
}

/// The built-in skill table used when no document can be loaded.
pub fn default_skill_document() -> SkillDocument {
    SkillDocument {
        skills: vec![
            SkillRecord {
                id: 1,
                category: "Frontend".to_string(),
                skill_name: "JavaScript".to_string(),
                level: 85,
            },
            SkillRecord {
                id: 2,
                category: "Frontend".to_string(),
                skill_name: "CSS".to_string(),
                level: 80,
            },
            SkillRecord {
                id: 3,
                category: "Backend".to_string(),
                skill_name: "Node.js".to_string(),
                level: 75,
            },
            SkillRecord {
                id: 4,
                category: "Database".to_string(),
                skill_name: "PostgreSQL".to_string(),
                level: 65,
            },
        ],
        categories: vec![
            "Frontend".to_string(),
            "Backend".to_string(),
            "Database".to_string(),
            "DevOps".to_string(),
            "Tools".to_string(),
        ],
    }
}

/// The built-in single admin account used when no document can be
/// loaded.
pub fn default_account_document() -> AccountDocument {
    AccountDocument {
        users: vec![UserAccount {
            username: "admin".to_string(),
            password: "admin123".to_string(),
            display_name: "Administrator".to_string(),
        }],
    }
}
