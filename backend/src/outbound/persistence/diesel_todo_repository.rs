//! SQLite-backed `TodoRepository` implementation using Diesel ORM.
//!
//! Each operation checks out a pooled connection on the Tokio blocking pool
//! and issues a single statement. Mutations filter on both the row id and
//! the owner token so a foreign row and a missing row produce the same
//! `NotFound`, which keeps ownership unguessable from the outside.

use async_trait::async_trait;
use diesel::dsl::not;
use diesel::prelude::*;
use tracing::debug;

use crate::domain::ports::{TodoRepository, TodoRepositoryError};
use crate::domain::{OwnerToken, TaskText, Todo, TodoId};

use super::models::{NewTodoRow, TodoRow};
use super::pool::{DbPool, PoolError};
use super::schema::todos;

/// Diesel-backed implementation of the `TodoRepository` port.
#[derive(Clone)]
pub struct DieselTodoRepository {
    pool: DbPool,
}

impl DieselTodoRepository {
    /// Create a new repository with the given connection pool.
    #[must_use]
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Run a blocking Diesel operation off the async executor.
    async fn with_conn<T, F>(&self, op: F) -> Result<T, TodoRepositoryError>
    where
        T: Send + 'static,
        F: FnOnce(&mut SqliteConnection) -> Result<T, TodoRepositoryError> + Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut conn = pool.get().map_err(map_pool_error)?;
            op(&mut conn)
        })
        .await
        .map_err(|error| TodoRepositoryError::query(format!("blocking task failed: {error}")))?
    }
}

/// Map pool errors to repository errors.
fn map_pool_error(error: PoolError) -> TodoRepositoryError {
    match error {
        PoolError::Checkout { message } | PoolError::Build { message } => {
            TodoRepositoryError::connection(message)
        }
        PoolError::Migration { message } => TodoRepositoryError::query(message),
    }
}

/// Map Diesel errors to repository errors.
fn map_diesel_error(error: diesel::result::Error) -> TodoRepositoryError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        other => debug!(error = %other, "diesel operation failed"),
    }

    match error {
        DieselError::NotFound => TodoRepositoryError::NotFound,
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            TodoRepositoryError::connection("database connection error")
        }
        _ => TodoRepositoryError::query("database error"),
    }
}

/// Convert a row to the domain entity, surfacing tampered owner columns.
fn row_to_todo(row: TodoRow) -> Result<Todo, TodoRepositoryError> {
    row.into_domain()
        .map_err(|error| TodoRepositoryError::query(error.to_string()))
}

/// Interpret an affected-row count from an id-scoped mutation.
fn one_row_or_not_found(affected: usize) -> Result<(), TodoRepositoryError> {
    if affected == 0 {
        Err(TodoRepositoryError::NotFound)
    } else {
        Ok(())
    }
}

#[async_trait]
impl TodoRepository for DieselTodoRepository {
    async fn list(&self, owner: &OwnerToken) -> Result<Vec<Todo>, TodoRepositoryError> {
        let owner = owner.as_str().to_owned();
        self.with_conn(move |conn| {
            let rows = todos::table
                .filter(todos::owner.eq(&owner))
                .order(todos::id.asc())
                .select(TodoRow::as_select())
                .load::<TodoRow>(conn)
                .map_err(map_diesel_error)?;
            rows.into_iter().map(row_to_todo).collect()
        })
        .await
    }

    async fn create(
        &self,
        owner: &OwnerToken,
        task: &TaskText,
    ) -> Result<(), TodoRepositoryError> {
        let owner = owner.as_str().to_owned();
        let task = task.as_str().to_owned();
        self.with_conn(move |conn| {
            diesel::insert_into(todos::table)
                .values(NewTodoRow {
                    owner: &owner,
                    task: &task,
                    done: false,
                })
                .execute(conn)
                .map_err(map_diesel_error)?;
            Ok(())
        })
        .await
    }

    async fn find(&self, owner: &OwnerToken, id: TodoId) -> Result<Todo, TodoRepositoryError> {
        let owner = owner.as_str().to_owned();
        self.with_conn(move |conn| {
            let row = todos::table
                .filter(todos::id.eq(id.value()))
                .filter(todos::owner.eq(&owner))
                .select(TodoRow::as_select())
                .first::<TodoRow>(conn)
                .optional()
                .map_err(map_diesel_error)?
                .ok_or(TodoRepositoryError::NotFound)?;
            row_to_todo(row)
        })
        .await
    }

    async fn update_task(
        &self,
        owner: &OwnerToken,
        id: TodoId,
        task: &str,
    ) -> Result<(), TodoRepositoryError> {
        let owner = owner.as_str().to_owned();
        let task = task.to_owned();
        self.with_conn(move |conn| {
            let affected = diesel::update(
                todos::table
                    .filter(todos::id.eq(id.value()))
                    .filter(todos::owner.eq(&owner)),
            )
            .set(todos::task.eq(&task))
            .execute(conn)
            .map_err(map_diesel_error)?;
            one_row_or_not_found(affected)
        })
        .await
    }

    async fn toggle_done(
        &self,
        owner: &OwnerToken,
        id: TodoId,
    ) -> Result<(), TodoRepositoryError> {
        let owner = owner.as_str().to_owned();
        self.with_conn(move |conn| {
            // Single-statement negation; atomicity comes from SQLite itself.
            let affected = diesel::update(
                todos::table
                    .filter(todos::id.eq(id.value()))
                    .filter(todos::owner.eq(&owner)),
            )
            .set(todos::done.eq(not(todos::done)))
            .execute(conn)
            .map_err(map_diesel_error)?;
            one_row_or_not_found(affected)
        })
        .await
    }

    async fn delete(&self, owner: &OwnerToken, id: TodoId) -> Result<(), TodoRepositoryError> {
        let owner = owner.as_str().to_owned();
        self.with_conn(move |conn| {
            let affected = diesel::delete(
                todos::table
                    .filter(todos::id.eq(id.value()))
                    .filter(todos::owner.eq(&owner)),
            )
            .execute(conn)
            .map_err(map_diesel_error)?;
            one_row_or_not_found(affected)
        })
        .await
    }
}
