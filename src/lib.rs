//! Catalog administration backend.
//!
//! The always-on layers (`domain`, `repository` traits, `services`, `dto`)
//! hold the business rules. The `data` feature adds the Diesel/SQLite
//! gateways and `server` adds the Actix-web JSON API.

#[cfg(feature = "data")]
pub mod db;
pub mod domain;
pub mod dto;
#[cfg(feature = "data")]
pub mod error_conversions;
#[cfg(feature = "server")]
pub mod forms;
#[cfg(feature = "data")]
pub mod models;
pub mod repository;
#[cfg(feature = "server")]
pub mod routes;
#[cfg(feature = "data")]
pub mod schema;
pub mod services;
