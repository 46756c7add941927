//! Infrastructure layer constants
//!
//! Contains constants that are part of the infrastructure implementation.
//! Domain-specific constants are defined in `codelens_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "codelens.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "codelens";

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "CODELENS";

// Re-export domain constants for convenience
pub use codelens_domain::constants::*;
