//! Store managers, as held in the document store.

use serde::{Deserialize, Serialize};

use super::id::ManagerId;

/// Inclusive salary bounds accepted for a manager.
pub const SALARY_MIN: i64 = 30_000;
pub const SALARY_MAX: i64 = 70_000;

/// Required manager ID length, in characters.
pub const MANAGER_ID_LEN: usize = 4;

/// A name must be strictly longer than this many characters.
pub const NAME_MIN_EXCLUSIVE: usize = 5;

/// A store manager.
///
/// A manager may be assigned to at most one store at a time. Nothing in the
/// document store enforces this; the store edit workflow checks it before
/// every assignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manager {
    pub id: ManagerId,
    pub name: String,
    pub salary: i64,
}

impl Manager {
    pub fn new(id: impl Into<ManagerId>, name: impl Into<String>, salary: i64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            salary,
        }
    }
}

/// Raw manager form input, exactly as submitted.
///
/// Salary stays a string until validation parses it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ManagerDraft {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub salary: String,
}

impl ManagerDraft {
    pub fn new(id: impl Into<String>, name: impl Into<String>, salary: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            salary: salary.into(),
        }
    }
}
