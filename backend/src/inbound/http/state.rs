//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data` so they only
//! depend on the domain port and remain testable with an in-memory
//! repository. There is deliberately no global store handle: each test can
//! wire an isolated instance.

use std::sync::Arc;

use crate::domain::ports::TodoRepository;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub todos: Arc<dyn TodoRepository>,
}

impl HttpState {
    /// Construct state around a repository implementation.
    #[must_use]
    pub fn new(todos: Arc<dyn TodoRepository>) -> Self {
        Self { todos }
    }
}
