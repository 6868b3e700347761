// src/config/mod.rs
//! Configuration for the command-line front end
//!
//! Central, lazy-loaded global config with TOML + env overrides.
//! The cipher core never reads it.

pub use app::{config_path, load, try_load, try_load_from, Config, Logging};

mod app;
mod defaults;
