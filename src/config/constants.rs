//! Application-wide constants
//!
//! Centralized location for magic values to improve maintainability.

use std::ops::RangeInclusive;

// =============================================================================
// Server
// =============================================================================

/// Default bind host
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default listen port
pub const DEFAULT_SERVER_PORT: u16 = 3000;

// =============================================================================
// Person validation bounds
// =============================================================================

/// Minimum length for first/last name fields
pub const NAME_MIN_LENGTH: usize = 1;

/// Maximum length for first/last name fields
pub const NAME_MAX_LENGTH: usize = 50;

/// Ages must be strictly positive
pub const AGE_MIN: i64 = 1;

/// Oldest accepted age
pub const AGE_MAX: i64 = 115;

/// Minimum age accepted by the person detail query
pub const ADULT_AGE_MIN: i64 = 18;

/// Minimum password length
pub const PASSWORD_MIN_LENGTH: usize = 8;

// =============================================================================
// Location validation bounds
// =============================================================================

/// Minimum length for city/state/country fields
pub const LOCATION_MIN_LENGTH: usize = 2;

/// Maximum length for city/state/country fields
pub const LOCATION_MAX_LENGTH: usize = 50;

// =============================================================================
// Form validation bounds
// =============================================================================

/// Maximum username length for login
pub const USERNAME_MAX_LENGTH: usize = 20;

/// Maximum length for contact first/last name fields
pub const CONTACT_NAME_MAX_LENGTH: usize = 20;

/// Minimum length for the contact message body
pub const MESSAGE_MIN_LENGTH: usize = 20;

// =============================================================================
// Registry
// =============================================================================

/// Person ids the seeded registry recognizes (database stand-in)
pub const KNOWN_PERSON_IDS: RangeInclusive<u32> = 1..=10;

// =============================================================================
// Fixed response strings
// =============================================================================

/// Detail string returned when a person id is not in the registry
pub const PERSON_NOT_FOUND_DETAIL: &str = "This person doesn't exist!";

/// Confirmation string returned when a person id is in the registry
pub const PERSON_EXISTS_DETAIL: &str = "It exists!";

/// Message returned on a successful login
pub const LOGIN_SUCCESS_MESSAGE: &str = "Login successful!";
