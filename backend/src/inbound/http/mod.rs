//! HTTP inbound adapter exposing the todo endpoints.

pub mod error;
pub mod identity;
pub mod state;
pub mod todos;
pub mod views;

pub use error::ApiResult;
