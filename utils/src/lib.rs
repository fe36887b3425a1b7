//! Shared utilities for HAZE tooling.

pub mod logging;

pub use logging::{init_logging, init_tracing, LogFormat};
