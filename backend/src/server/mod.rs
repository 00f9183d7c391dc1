//! HTTP server wiring shared by the binary and the integration tests.

pub mod config;

use actix_web::web;

pub use config::{ConfigError, ServerConfig};

use crate::inbound::http::todos;

/// Register the todo routes on an Actix service config.
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use actix_web::{web, App};
/// use backend::domain::ports::InMemoryTodoRepository;
/// use backend::inbound::http::state::HttpState;
///
/// let state = HttpState::new(Arc::new(InMemoryTodoRepository::new()));
/// let app = App::new()
///     .app_data(web::Data::new(state))
///     .configure(backend::server::routes);
/// ```
pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.service(todos::index)
        .service(todos::add)
        .service(todos::edit_form)
        .service(todos::edit_submit)
        .service(todos::check)
        .service(todos::delete);
}
