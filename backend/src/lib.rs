//! Cookie-identified, per-user todo list web application.
//!
//! Anonymous identities are carried in a long-lived cookie; todos are plain
//! rows in SQLite, scoped to the owner token on every operation. The crate
//! follows a hexagonal layout: [`domain`] holds the entities and the
//! repository port, [`inbound`] the Actix HTTP adapter, [`outbound`] the
//! Diesel persistence adapter, and [`server`] the shared wiring.

pub mod domain;
pub mod inbound;
pub mod outbound;
pub mod server;
