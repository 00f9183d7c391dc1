//! Domain ports for the hexagonal boundary.

mod todo_repository;

#[cfg(test)]
pub use todo_repository::MockTodoRepository;
pub use todo_repository::{InMemoryTodoRepository, TodoRepository, TodoRepositoryError};
