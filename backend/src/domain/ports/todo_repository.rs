//! Port for todo persistence.
//!
//! The [`TodoRepository`] trait defines the contract for storing and
//! mutating todos. Every operation is scoped by an [`OwnerToken`]: a row
//! belonging to a different owner is indistinguishable from a missing row,
//! both surface as [`TodoRepositoryError::NotFound`]. That symmetry is the
//! application's only access-control mechanism and must hold for every
//! adapter.

use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;

use crate::domain::{DomainError, OwnerToken, TaskText, Todo, TodoId};

/// Errors raised by todo repository adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TodoRepositoryError {
    /// No todo matches the requested id for this owner.
    #[error("no todo matches the requested id for this owner")]
    NotFound,
    /// Repository connection could not be established.
    #[error("todo repository connection failed: {message}")]
    Connection { message: String },
    /// Query or mutation failed during execution.
    #[error("todo repository query failed: {message}")]
    Query { message: String },
}

impl TodoRepositoryError {
    /// Create a connection error with the given message.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Create a query error with the given message.
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }
}

impl From<TodoRepositoryError> for DomainError {
    fn from(error: TodoRepositoryError) -> Self {
        match error {
            TodoRepositoryError::NotFound => Self::not_found("todo not found"),
            TodoRepositoryError::Connection { .. } | TodoRepositoryError::Query { .. } => {
                Self::internal(error.to_string())
            }
        }
    }
}

/// Port for todo storage and retrieval, scoped by owner token.
///
/// Listing follows insertion order (ascending id), which is stable enough
/// for display. Mutations touch at most one row and rely on the storage
/// backend for single-row atomicity.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TodoRepository: Send + Sync {
    /// All todos belonging to `owner`, in insertion order.
    async fn list(&self, owner: &OwnerToken) -> Result<Vec<Todo>, TodoRepositoryError>;

    /// Insert a new todo with `done = false`.
    ///
    /// `task` is already trimmed and non-empty; blank submissions never
    /// reach the repository (handlers drop them silently).
    async fn create(
        &self,
        owner: &OwnerToken,
        task: &TaskText,
    ) -> Result<(), TodoRepositoryError>;

    /// Fetch a single todo by id.
    async fn find(&self, owner: &OwnerToken, id: TodoId) -> Result<Todo, TodoRepositoryError>;

    /// Overwrite the task text verbatim.
    ///
    /// The edit path performs no trimming or validation, unlike creation.
    async fn update_task(
        &self,
        owner: &OwnerToken,
        id: TodoId,
        task: &str,
    ) -> Result<(), TodoRepositoryError>;

    /// Flip the done flag.
    async fn toggle_done(&self, owner: &OwnerToken, id: TodoId)
        -> Result<(), TodoRepositoryError>;

    /// Remove the todo permanently.
    async fn delete(&self, owner: &OwnerToken, id: TodoId) -> Result<(), TodoRepositoryError>;
}

/// In-memory implementation for tests that do not need a database.
///
/// Ids are assigned from a monotonically increasing counter starting at 1,
/// mirroring the auto-increment behaviour of the SQLite adapter.
#[derive(Debug, Default)]
pub struct InMemoryTodoRepository {
    inner: Mutex<InMemoryState>,
}

#[derive(Debug, Default)]
struct InMemoryState {
    next_id: i32,
    todos: Vec<Todo>,
}

impl InMemoryTodoRepository {
    /// Create an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn with_state<T>(&self, op: impl FnOnce(&mut InMemoryState) -> T) -> T {
        let mut state = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        op(&mut state)
    }
}

#[async_trait]
impl TodoRepository for InMemoryTodoRepository {
    async fn list(&self, owner: &OwnerToken) -> Result<Vec<Todo>, TodoRepositoryError> {
        Ok(self.with_state(|state| {
            state
                .todos
                .iter()
                .filter(|todo| &todo.owner == owner)
                .cloned()
                .collect()
        }))
    }

    async fn create(
        &self,
        owner: &OwnerToken,
        task: &TaskText,
    ) -> Result<(), TodoRepositoryError> {
        self.with_state(|state| {
            state.next_id += 1;
            let todo = Todo {
                id: TodoId::new(state.next_id),
                owner: owner.clone(),
                task: task.as_str().to_owned(),
                done: false,
            };
            state.todos.push(todo);
        });
        Ok(())
    }

    async fn find(&self, owner: &OwnerToken, id: TodoId) -> Result<Todo, TodoRepositoryError> {
        self.with_state(|state| {
            state
                .todos
                .iter()
                .find(|todo| todo.id == id && &todo.owner == owner)
                .cloned()
                .ok_or(TodoRepositoryError::NotFound)
        })
    }

    async fn update_task(
        &self,
        owner: &OwnerToken,
        id: TodoId,
        task: &str,
    ) -> Result<(), TodoRepositoryError> {
        self.with_state(|state| {
            let todo = state
                .todos
                .iter_mut()
                .find(|todo| todo.id == id && &todo.owner == owner)
                .ok_or(TodoRepositoryError::NotFound)?;
            todo.task = task.to_owned();
            Ok(())
        })
    }

    async fn toggle_done(
        &self,
        owner: &OwnerToken,
        id: TodoId,
    ) -> Result<(), TodoRepositoryError> {
        self.with_state(|state| {
            let todo = state
                .todos
                .iter_mut()
                .find(|todo| todo.id == id && &todo.owner == owner)
                .ok_or(TodoRepositoryError::NotFound)?;
            todo.done = !todo.done;
            Ok(())
        })
    }

    async fn delete(&self, owner: &OwnerToken, id: TodoId) -> Result<(), TodoRepositoryError> {
        self.with_state(|state| {
            let before = state.todos.len();
            state
                .todos
                .retain(|todo| !(todo.id == id && &todo.owner == owner));
            if state.todos.len() == before {
                Err(TodoRepositoryError::NotFound)
            } else {
                Ok(())
            }
        })
    }
}
