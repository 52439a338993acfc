//! API middleware components

pub mod cors;
pub mod logging;
pub mod metrics;

pub use self::cors::cors_layer;
pub use self::logging::logging_middleware;
pub use self::metrics::metrics_middleware;
