//! Entry point: wires tracing, persistence, and the HTTP routes.

use std::sync::Arc;

use actix_web::{web, App, HttpServer};
use tracing::{info, warn};
use tracing_subscriber::{fmt, EnvFilter};

use backend::inbound::http::state::HttpState;
use backend::outbound::persistence::{DbPool, DieselTodoRepository, PoolConfig};
use backend::server::{self, ServerConfig};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let config = ServerConfig::from_env().map_err(std::io::Error::other)?;

    let pool = DbPool::build(&PoolConfig::new(config.database_url.as_str()))
        .map_err(std::io::Error::other)?;
    pool.run_migrations().map_err(std::io::Error::other)?;

    let state = HttpState::new(Arc::new(DieselTodoRepository::new(pool)));

    info!(addr = %config.bind_addr, database = %config.database_url, "starting todo server");
    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .configure(server::routes)
    })
    .bind(config.bind_addr)?
    .run()
    .await
}
