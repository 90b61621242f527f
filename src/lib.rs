//! Environment-backed application configuration.
//!
//! Resolves an immutable [`Config`] once at process startup from
//! environment variables, optionally merged with a local `.env` file,
//! applying defaults for optional values and failing fast when required
//! configuration is missing.
//!
//! # Usage
//!
//! ```no_run
//! use app_config::Config;
//!
//! let config = match Config::load() {
//!     Ok(config) => config,
//!     Err(e) => {
//!         eprintln!("Configuration error: {}", e);
//!         std::process::exit(1);
//!     }
//! };
//!
//! println!("listening on port {}", config.port);
//! ```

pub mod config;
pub mod errors;

pub use config::Config;
pub use errors::{ConfigError, ConfigResult};
