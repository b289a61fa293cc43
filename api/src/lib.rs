//! # myFlix API
//!
//! HTTP transport for the myFlix catalog: routes, request bodies, bearer
//! extraction, error-to-status mapping and middleware. `main.rs` wires the
//! configured storage back end into [`app::create_app`].

pub mod app;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;

pub use app::create_app;
pub use routes::AppState;
