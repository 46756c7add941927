//! Infrastructure Layer - codelens
//!
//! The outermost ring: configuration loading, logging setup, and shared
//! error-context/file/timing utilities. Nothing in `codelens-domain` or
//! `codelens-application` depends on this crate; it depends on both.
//!
//! ## Modules
//!
//! - `config::*`: `AppConfig` plus its `figment`-backed loader/builder
//! - `logging`: `tracing`/`tracing-subscriber`/`tracing-appender` setup
//! - `error_ext`: `ErrorContext` extension trait for attaching context to
//!   foreign errors on the way into the domain `Error` type
//! - `constants`: infrastructure-specific tuning knobs not owned by the domain
//! - `utils::*`: file and timing helpers shared by providers and the CLI

pub mod config;
pub mod constants;
pub mod error_ext;
pub mod logging;
pub mod utils;

pub use config::{AppConfig, ConfigBuilder, ConfigLoader};
pub use error_ext::ErrorContext;
pub use logging::init_logging;
