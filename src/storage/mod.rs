//! # Storage Layer
//!
//! Everything the scheduler reads from disk.
//!
//! | Data | Format | Location |
//! |------|--------|----------|
//! | Global config | TOML | `<config dir>/sched/config.toml` |
//! | Project config | TOML | nearest `sched.toml`, or `--config <path>` |
//! | Requests | JSON or YAML | any path, or stdin (`-`, JSON) |
//!
//! ## Key Types
//!
//! - [`Config`] - Project and global configuration
//! - [`load_request`] - Reads a [`crate::service::ScheduleRequest`] document

mod config;
mod request;

pub use config::{Config, ConfigError, GlobalConfig, OutputFormat, ProjectConfig, PROJECT_CONFIG_FILE};
pub use request::{load_request, parse_request, DocumentFormat, RequestError};
