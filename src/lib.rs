//! Mining CMS: REST content API for a mining company's website, backed by PostgreSQL.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod model;
pub mod response;
pub mod routes;
pub mod service;
pub mod sql;
pub mod state;
pub mod store;

pub use config::{ServerConfig, DEFAULT_LOG_FILTER};
pub use error::AppError;
pub use response::{Envelope, Outcome};
pub use routes::{api_routes, app, common_routes, common_routes_with_ready};
pub use service::CrudService;
pub use state::AppState;
pub use store::{ensure_database_exists, ensure_schema};
