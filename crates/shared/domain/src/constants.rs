//! Domain-level constants.

// =============================================================================
// Identifiers
// =============================================================================

/// First id handed out by an empty store (and again after a full reset)
pub const FIRST_USER_ID: i64 = 1;

// =============================================================================
// Hours
// =============================================================================

/// Hours worked by a freshly created user
pub const INITIAL_HOURS_WORKED: f64 = 0.0;

// =============================================================================
// Messages
// =============================================================================

/// Body returned when a single user lookup misses
pub const USER_NOT_FOUND_MESSAGE: &str = "User not found";
