/// Service name reported by the health check and root endpoint
pub const SERVICE_NAME: &str = "ryc-backend";

/// Public API version reported by the root endpoint
pub const API_VERSION: &str = "1.0.0";

// =============================================================================
// REVIEW CONSTANTS
// =============================================================================

/// A flag whose pre-increment flag count is at least this value moves the
/// review to `FLAGGED`, so the third flag is the one that hides it.
pub const FLAG_THRESHOLD: i32 = 2;

/// Literal prefix of every anonymous review identifier
pub const ANONYMOUS_ID_PREFIX: &str = "anon_";

/// Random bytes behind each anonymous identifier (128 bits)
pub const ANONYMOUS_ID_BYTES: usize = 16;
