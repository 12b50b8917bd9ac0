//! User domain entity and related types.

use serde::{Deserialize, Serialize};

use crate::constants::INITIAL_HOURS_WORKED;
use crate::error::{DomainError, DomainResult};

/// Store-assigned user identifier
pub type UserId = i64;

/// User domain entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique user identifier, assigned by the store
    #[cfg_attr(feature = "openapi", schema(example = 1))]
    pub id: UserId,
    /// Display name
    #[cfg_attr(feature = "openapi", schema(example = "John Doe"))]
    pub name: String,
    /// Total hours worked
    #[cfg_attr(feature = "openapi", schema(example = 0.0))]
    pub hours_worked: f64,
}

impl User {
    /// Create a new user with no hours recorded
    pub fn new(id: UserId, name: String) -> Self {
        Self {
            id,
            name,
            hours_worked: INITIAL_HOURS_WORKED,
        }
    }

    /// Replace the user's name
    pub fn rename(&mut self, name: String) {
        self.name = name;
    }

    /// Add `delta` hours (negative values subtract).
    ///
    /// The total is left unchanged when the result would not be finite.
    pub fn add_hours(&mut self, delta: f64) -> DomainResult<()> {
        let total = self.hours_worked + delta;
        if !total.is_finite() {
            return Err(DomainError::validation(
                "hoursToAdd must keep hoursWorked a finite number",
            ));
        }

        self.hours_worked = total;
        Ok(())
    }
}

/// User creation payload.
///
/// Only the name is read; `id` and `hoursWorked` keys in the body are ignored.
#[derive(Debug, Clone, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CreateUser {
    /// User display name
    #[cfg_attr(feature = "openapi", schema(example = "John Doe"))]
    pub name: String,
}

/// Name replacement payload
#[derive(Debug, Clone, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ReplaceName {
    /// New display name
    #[cfg_attr(feature = "openapi", schema(example = "Jane Doe"))]
    pub name: String,
}

/// Hours adjustment payload
#[derive(Debug, Clone, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct AdjustHours {
    /// Hours to add to the running total
    #[cfg_attr(feature = "openapi", schema(example = 5.0))]
    pub hours_to_add: f64,
}
