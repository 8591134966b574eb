//! Middleware applied by the router

pub mod cors;
pub mod logging;

pub use cors::allow_any_origin;
pub use logging::request_logging_middleware;
