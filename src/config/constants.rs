//! Application-wide constants
//!
//! Centralized location for magic values to improve maintainability.

// =============================================================================
// Server Configuration
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 3000;

/// Default request body limit for mugshot uploads (2 MiB)
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 2 * 1024 * 1024;

// =============================================================================
// User Store
// =============================================================================

/// Prefix of every generated user key ("user1", "user2", ...)
pub const USER_KEY_PREFIX: &str = "user";

/// Multipart field carrying the optional mugshot file
pub const MUGSHOT_FIELD: &str = "mugshot";
