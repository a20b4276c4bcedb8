//! Startup wiring.
//!
//! Loads seed data (with fallback defaults), opens the file-backed
//! session store, and assembles the [`AdminUseCase`]. Loading finishes
//! before the core is handed to a renderer, so every operation after
//! this point is synchronous.

use crate::admin_usecase::AdminUseCase;
use folio_core::error::Result;
use folio_core::session::SessionManager;
use folio_core::skill::RecordStore;
use folio_infrastructure::config::FolioConfig;
use folio_infrastructure::file_store::FileSessionStore;
use folio_infrastructure::seed;
use tracing::info;

/// Builds a ready-to-use [`AdminUseCase`] from configuration.
///
/// # Errors
///
/// Returns `FolioError::Storage` if the session store directory
/// cannot be created. Seed documents never fail: missing or malformed
/// files fall back to built-in defaults.
pub fn bootstrap(config: &FolioConfig) -> Result<AdminUseCase> {
    let skills = seed::load_skill_document(&config.data.skills_path);
    let accounts = seed::load_account_document(&config.data.accounts_path);

    let records = RecordStore::with_seed(skills.skills, skills.categories);
    let store = FileSessionStore::new(&config.storage.dir)?;
    let sessions = SessionManager::new(Box::new(store));

    info!(
        records = records.list().len(),
        accounts = accounts.users.len(),
        "folio bootstrapped"
    );
    Ok(AdminUseCase::new(records, sessions, accounts.users))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn config_in(dir: &TempDir) -> FolioConfig {
        let mut config = FolioConfig::default();
        config.data.skills_path = dir.path().join("skills.json");
        config.data.accounts_path = dir.path().join("users.json");
        config.storage.dir = dir.path().join("storage");
        config
    }

    #[test]
    fn test_bootstrap_with_missing_documents_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let uc = bootstrap(&config_in(&dir)).unwrap();

        // Built-in defaults: a small table and a single admin account
        assert!(!uc.rows().is_empty());
        assert!(!uc.categories().is_empty());
        assert!(!uc.session().logged_in);
    }

    #[test]
    fn test_bootstrap_loads_documents_and_restores_session() {
        let dir = TempDir::new().unwrap();
        let config = config_in(&dir);
        fs::write(
            &config.data.skills_path,
            r#"{"skills": [{"id": 1, "category": "Backend", "skillName": "Go", "level": 80}],
                "categories": ["Backend"]}"#,
        )
        .unwrap();
        fs::write(
            &config.data.accounts_path,
            r#"{"users": [{"username": "ann", "password": "pw1", "displayName": "Ann"}]}"#,
        )
        .unwrap();

        {
            let mut uc = bootstrap(&config).unwrap();
            assert_eq!(uc.rows().len(), 1);
            uc.login("ann", "pw1").unwrap();
        }

        // A second bootstrap over the same storage dir restores the session
        let uc = bootstrap(&config).unwrap();
        assert!(uc.session().logged_in);
        assert_eq!(
            uc.session().current_user.as_ref().unwrap().username,
            "ann".to_string()
        );
        assert!(uc.rows().iter().all(|row| row.editable));
    }

    #[test]
    fn test_bootstrap_fails_when_storage_dir_is_a_file() {
        let dir = TempDir::new().unwrap();
        let mut config = config_in(&dir);
        let blocker: PathBuf = dir.path().join("blocked");
        fs::write(&blocker, "not a directory").unwrap();
        config.storage.dir = blocker;

        assert!(bootstrap(&config).is_err());
    }
}
