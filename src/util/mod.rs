//! Utility modules for hookgen

pub mod logging;

pub use logging::{init_logging, log_level};
