//! User Service Library
//!
//! This crate owns the in-memory user collection and the use cases built on it.
//! The HTTP API embeds it directly.

pub mod repository;
pub mod service;

use std::sync::Arc;

use crate::repository::UserStore;
use crate::service::{UserManager, UserService};

/// Build a user service backed by a fresh, empty store.
pub fn in_memory_service() -> Arc<dyn UserService> {
    let user_repo = Arc::new(UserStore::new());
    Arc::new(UserManager::new(user_repo))
}
