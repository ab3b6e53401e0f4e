//! Web bootstrap for Chassis applications.
//!
//! A thin wrapper over axum: assembles the application router with the
//! stock middleware (CORS, static asset serving, request tracing) and
//! runs the serve loop. Handlers obtain services exclusively through the
//! container; nothing in this crate constructs a service directly.

mod config;
mod routes;
mod server;

pub use config::HttpConfig;
pub use routes::routes;
pub use server::serve;
