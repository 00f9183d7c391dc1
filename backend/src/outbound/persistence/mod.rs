//! SQLite persistence adapters using Diesel ORM.
//!
//! # Architecture
//!
//! - **Thin adapters**: The repository implementation only translates
//!   between Diesel rows and domain types. No business logic resides here.
//! - **Internal models**: Diesel row structs (`models.rs`) and the schema
//!   definition (`schema.rs`) are implementation details, never exposed to
//!   the domain layer.
//! - **Blocking off the executor**: Diesel's SQLite driver is synchronous,
//!   so every query runs on the Tokio blocking pool.
//! - **Strongly typed errors**: Database failures are mapped to
//!   [`crate::domain::ports::TodoRepositoryError`] variants.

mod diesel_todo_repository;
mod models;
mod pool;
mod schema;

pub use diesel_todo_repository::DieselTodoRepository;
pub use pool::{DbPool, PoolConfig, PoolError};
