//! Ruleset configuration for the OAS lint crates.
//!
//! Discovers and parses `.oaslintrc`-family files. The parsed `rules`
//! entries are handed to the linter crate as raw JSON values; this crate
//! only owns the file format, not rule semantics.

mod config;
mod error;
mod loader;

pub use config::{ExtendsConfig, RulesetConfig};
pub use error::{ConfigError, Result};
pub use loader::{find_config, load_config, load_config_from_str};
