//! Diesel row structs bridging the `todos` table and domain types.

use diesel::prelude::*;

use crate::domain::{OwnerToken, Todo, TodoId};

use super::schema::todos;

/// Read model for a stored todo row.
#[derive(Debug, Queryable, Selectable, Identifiable)]
#[diesel(table_name = todos)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct TodoRow {
    pub id: i32,
    pub owner: String,
    pub task: String,
    pub done: bool,
}

impl TodoRow {
    /// Convert a database row into the domain entity.
    ///
    /// The owner column is non-empty by construction (rows are only ever
    /// inserted with a validated token), so a blank value indicates outside
    /// tampering and surfaces as a query error upstream.
    pub fn into_domain(self) -> Result<Todo, crate::domain::OwnerTokenValidationError> {
        Ok(Todo {
            id: TodoId::new(self.id),
            owner: OwnerToken::new(self.owner)?,
            task: self.task,
            done: self.done,
        })
    }
}

/// Insert model for a new todo row.
#[derive(Debug, Insertable)]
#[diesel(table_name = todos)]
pub struct NewTodoRow<'a> {
    pub owner: &'a str,
    pub task: &'a str,
    pub done: bool,
}
