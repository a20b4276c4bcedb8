//! Read-only view projection of the record store.
//!
//! Produces the render-ready representation a UI layer draws from,
//! with no DOM or widget coupling. Projection is pure and recomputed
//! wholesale on every store or session change; at tens of rows there
//! is nothing to be gained from incremental diffing.

use crate::policy::AccessPolicy;
use crate::session::Session;
use crate::skill::SkillRecord;
use serde::Serialize;

/// One render-ready table row.
///
/// `editable` is derived from the session at projection time, so a
/// single source of truth decides whether a renderer draws edit
/// controls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RowView {
    pub id: u32,
    pub category: String,
    pub skill_name: String,
    pub level: u8,
    pub editable: bool,
}

/// Projects `records` into render-ready rows under `session`.
pub fn project(records: &[SkillRecord], session: &Session) -> Vec<RowView> {
    let editable = AccessPolicy::can_mutate(session);
    records
        .iter()
        .map(|record| RowView {
            id: record.id,
            category: record.category.clone(),
            skill_name: record.skill_name.clone(),
            level: record.level,
            editable,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::user::UserAccount;

    fn records() -> Vec<SkillRecord> {
        vec![
            SkillRecord {
                id: 1,
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
        ]
    }

    #[test]
    fn test_anonymous_rows_are_not_editable() {
        let rows = project(&records(), &Session::anonymous());

        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|row| !row.editable));
    }

    #[test]
    fn test_authenticated_rows_are_editable() {
        let session = Session::authenticated(UserAccount {
            username: "admin".to_string(),
            password: "admin123".to_string(),
            display_name: "Administrator".to_string(),
        });

        let rows = project(&records(), &session);

        assert!(rows.iter().all(|row| row.editable));
        assert_eq!(rows[0].id, 1);
        assert_eq!(rows[1].skill_name, "TS");
    }

    #[test]
    fn test_projection_preserves_order() {
        let rows = project(&records(), &Session::anonymous());
        assert_eq!(
            rows.iter().map(|r| r.id).collect::<Vec<_>>(),
            vec![1, 2]
        );
    }
}
