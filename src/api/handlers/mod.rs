//! HTTP request handlers.

pub mod auth_handler;
pub mod person_handler;
pub mod upload_handler;

pub use auth_handler::auth_routes;
pub use person_handler::person_routes;
pub use upload_handler::upload_routes;
