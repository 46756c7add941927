//! Configuration loading and validation
//!
//! Defaults, `codelens.toml`, and `CODELENS_*` environment variables are
//! layered with `figment` in [`loader`]; the composed shape they fill in
//! lives in [`data`].

mod data;
mod loader;

pub use data::AppConfig;
pub use loader::{ConfigBuilder, ConfigLoader};
