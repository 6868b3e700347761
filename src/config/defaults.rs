// src/config/defaults.rs
use crate::config::app::Logging;

pub const DEFAULT_LOG_FILTER: &str = "info";

pub fn default_logging() -> Logging {
    Logging {
        filter: DEFAULT_LOG_FILTER.into(),
    }
}

pub fn default_filter() -> String {
    DEFAULT_LOG_FILTER.into()
}
