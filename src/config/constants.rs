//! Application-wide constants
//!
//! Centralized location for magic values to improve maintainability.

// =============================================================================
// Environment Variables
// =============================================================================

/// Required variable holding the MongoDB connection string
pub const ENV_MONGO_URI: &str = "MONGO_URI";

/// Optional variable overriding the listen port
pub const ENV_PORT: &str = "PORT";

/// Optional variable selecting the deployment environment
pub const ENV_APP_ENV: &str = "APP_ENV";

// =============================================================================
// Defaults
// =============================================================================

/// Listen port used when PORT is unset
pub const DEFAULT_PORT: u16 = 5000;

/// Environment tag used when APP_ENV is unset
pub const DEFAULT_ENVIRONMENT: &str = "development";

/// Environment tag identifying production deployments
pub const ENVIRONMENT_PRODUCTION: &str = "production";
