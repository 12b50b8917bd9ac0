//! Domain layer - Core entities and value objects.
//!
//! This crate contains pure domain logic with no infrastructure dependencies.
//! Types here are shared by the user service and the HTTP API.

pub mod constants;
pub mod error;
pub mod user;

pub use constants::*;
pub use error::{DomainError, DomainResult};
pub use user::{AdjustHours, CreateUser, ReplaceName, User, UserId};
