//! Person API - A request/response validation demo
//!
//! This crate is a small Axum application built around a single in-memory
//! "person" resource. Every endpoint exercises a different input surface:
//! JSON bodies, query and path parameters, form fields, headers, cookies,
//! and multipart file uploads.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Resource models and their validation rule tables
//! - **validation**: Framework-agnostic field validation engine
//! - **registry**: In-memory store of known person identifiers
//! - **api**: HTTP handlers, extractors, and routes
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server
//! cargo run -- serve
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod registry;
pub mod validation;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use domain::{Location, Person, PersonOut};
pub use errors::{AppError, AppResult};
pub use registry::PersonRegistry;
