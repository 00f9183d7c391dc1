//! Domain primitives and ports.
//!
//! Purpose: Define strongly typed domain entities used by the HTTP and
//! persistence layers. Keep types immutable where the model demands it and
//! document invariants in each type's Rustdoc.
//!
//! Public surface:
//! - `Todo` — a single task record scoped to an anonymous owner.
//! - `TaskText` — trimmed, non-empty task text accepted on creation.
//! - `OwnerToken` — opaque anonymous identity carried in a cookie.
//! - `DomainError` / `ErrorCode` — transport-agnostic failure payload.

pub mod error;
pub mod owner;
pub mod ports;
pub mod todo;

pub use self::error::{DomainError, ErrorCode};
pub use self::owner::{OwnerToken, OwnerTokenValidationError};
pub use self::todo::{TaskText, Todo, TodoId};
