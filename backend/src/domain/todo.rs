//! Todo entity and task text validation.

use serde::{Deserialize, Serialize};

use crate::domain::OwnerToken;

/// External handle for a stored todo, assigned by the database on insert.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct TodoId(i32);

impl TodoId {
    /// Wrap a raw database identifier.
    #[must_use]
    pub const fn new(value: i32) -> Self {
        Self(value)
    }

    /// Raw identifier value.
    #[must_use]
    pub const fn value(self) -> i32 {
        self.0
    }
}

impl std::fmt::Display for TodoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single task record scoped to one anonymous owner.
///
/// ## Invariants
/// - `id` and `owner` are immutable after creation.
/// - `task` is non-empty when created via [`TaskText`]; the edit path
///   overwrites it verbatim without re-validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Todo {
    pub id: TodoId,
    pub owner: OwnerToken,
    pub task: String,
    pub done: bool,
}

/// Task text accepted on the creation path: trimmed of surrounding
/// whitespace and guaranteed non-empty.
///
/// # Examples
/// ```
/// use backend::domain::TaskText;
///
/// assert_eq!(TaskText::new("  buy milk  ").map(|t| t.as_str().to_owned()),
///            Some("buy milk".to_owned()));
/// assert!(TaskText::new("   ").is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskText(String);

impl TaskText {
    /// Trim the submitted text; `None` when nothing remains.
    ///
    /// Blank submissions are not an error, they are silently dropped by the
    /// caller, so absence is modelled rather than a validation failure.
    #[must_use]
    pub fn new(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_owned()))
        }
    }

    /// Borrow the validated text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl std::fmt::Display for TaskText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
