/// Posts Service Library
///
/// CRUD HTTP API for posts and the comments nested under them.
///
/// # Modules
///
/// - `handlers`: HTTP request handlers and shared handler state
/// - `validation`: request payload checks
/// - `models`: records, request payloads and response envelopes
/// - `db`: the `PostStore` contract plus in-memory and PostgreSQL stores
/// - `routes`: route table
/// - `error`: error types and their HTTP mapping
/// - `config`: configuration management
/// - `metrics` / `middleware`: Prometheus collectors and the request recorder
/// - `openapi`: generated API description
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod metrics;
pub mod middleware;
pub mod models;
pub mod openapi;
pub mod routes;
pub mod validation;

pub use config::Config;
pub use error::{AppError, Result};
pub use handlers::AppState;
