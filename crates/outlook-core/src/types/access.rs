//! Roles and the actions each role may perform.
//!
//! Staff: every action.
//! Student: submit an evaluation and download a report.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Staff,
    Student,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Staff => "staff",
            Self::Student => "student",
        }
    }
}

/// Every role-gated action exposed by the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GatedAction {
    Submit,
    ViewReport,
    ViewHistory,
    EditRecord,
    DeleteRecord,
}

impl GatedAction {
    pub const ALL: [GatedAction; 5] = [
        Self::Submit,
        Self::ViewReport,
        Self::ViewHistory,
        Self::EditRecord,
        Self::DeleteRecord,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Submit => "submit",
            Self::ViewReport => "view_report",
            Self::ViewHistory => "view_history",
            Self::EditRecord => "edit_record",
            Self::DeleteRecord => "delete_record",
        }
    }
}

/// Check if a role grants access to an action.
pub fn role_allows(role: Role, action: GatedAction) -> bool {
    match role {
        Role::Staff => true,
        Role::Student => matches!(action, GatedAction::Submit | GatedAction::ViewReport),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn staff_allows_everything() {
        for action in GatedAction::ALL {
            assert!(role_allows(Role::Staff, action), "{}", action.as_str());
        }
    }

    #[test]
    fn student_limited_to_submit_and_report() {
        let allowed: Vec<_> = GatedAction::ALL
            .into_iter()
            .filter(|a| role_allows(Role::Student, *a))
            .collect();
        assert_eq!(allowed, vec![GatedAction::Submit, GatedAction::ViewReport]);
    }

    #[test]
    fn roles_deserialize_lowercase() {
        let role: Role = serde_json::from_str("\"staff\"").unwrap();
        assert_eq!(role, Role::Staff);
        assert_eq!(Role::Student.as_str(), "student");
        assert!(serde_json::from_str::<Role>("\"admin\"").is_err());
    }
}
