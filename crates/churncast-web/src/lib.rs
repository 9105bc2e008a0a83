//! Churncast web application
//!
//! Serves the customer form, the JSON prediction API and the in-memory
//! prediction history over axum. The inference artifacts are loaded once
//! at startup and shared read-only across requests.

pub mod cli;
pub mod models;
pub mod server;
pub mod state;

pub use cli::*;
pub use models::*;
pub use server::*;
pub use state::*;
