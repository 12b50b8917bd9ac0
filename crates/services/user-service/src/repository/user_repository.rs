//! In-memory user repository.

use async_trait::async_trait;
use tokio::sync::RwLock;

use domain::{DomainError, DomainResult, User, UserId, FIRST_USER_ID};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
///
/// Every method is atomic with respect to every other method on the same
/// repository.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// All users in insertion order
    async fn list(&self) -> Vec<User>;

    /// Find user by ID
    async fn find_by_id(&self, id: UserId) -> Option<User>;

    /// Create a new user with the next free id and zero hours
    async fn create(&self, name: String) -> User;

    /// Replace a user's name
    async fn update_name(&self, id: UserId, name: String) -> DomainResult<User>;

    /// Add hours to a user's total
    async fn add_hours(&self, id: UserId, delta: f64) -> DomainResult<User>;

    /// Remove a user and return it
    async fn delete(&self, id: UserId) -> DomainResult<User>;

    /// Remove every user and restart ids at 1
    async fn delete_all(&self) -> Vec<User>;

    /// Number of stored users
    async fn count(&self) -> usize;
}

/// Users plus the id counter, guarded together.
#[derive(Debug)]
struct StoreState {
    items: Vec<User>,
    next_id: UserId,
}

impl StoreState {
    fn position(&self, id: UserId) -> DomainResult<usize> {
        self.items
            .iter()
            .position(|u| u.id == id)
            .ok_or(DomainError::not_found(id))
    }

    fn find_mut(&mut self, id: UserId) -> DomainResult<&mut User> {
        self.items
            .iter_mut()
            .find(|u| u.id == id)
            .ok_or(DomainError::not_found(id))
    }
}

impl Default for StoreState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            next_id: FIRST_USER_ID,
        }
    }
}

/// In-memory implementation of UserRepository.
///
/// Lookups scan the insertion-ordered list; ids are never reused until
/// `delete_all` resets the counter.
#[derive(Debug, Default)]
pub struct UserStore {
    state: RwLock<StoreState>,
}

impl UserStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn list(&self) -> Vec<User> {
        self.state.read().await.items.clone()
    }

    async fn find_by_id(&self, id: UserId) -> Option<User> {
        let state = self.state.read().await;
        state.items.iter().find(|u| u.id == id).cloned()
    }

    async fn create(&self, name: String) -> User {
        let mut state = self.state.write().await;

        let user = User::new(state.next_id, name);
        state.next_id += 1;
        state.items.push(user.clone());

        tracing::debug!(id = user.id, "user created");
        user
    }

    async fn update_name(&self, id: UserId, name: String) -> DomainResult<User> {
        let mut state = self.state.write().await;
        let user = state.find_mut(id)?;
        user.rename(name);
        Ok(user.clone())
    }

    async fn add_hours(&self, id: UserId, delta: f64) -> DomainResult<User> {
        let mut state = self.state.write().await;
        let user = state.find_mut(id)?;
        user.add_hours(delta)?;

        tracing::debug!(id, delta, total = user.hours_worked, "hours added");
        Ok(user.clone())
    }

    async fn delete(&self, id: UserId) -> DomainResult<User> {
        let mut state = self.state.write().await;
        let index = state.position(id)?;
        let user = state.items.remove(index);

        tracing::debug!(id, "user deleted");
        Ok(user)
    }

    async fn delete_all(&self) -> Vec<User> {
        let mut state = self.state.write().await;
        let removed = state.items.len();
        *state = StoreState::default();

        tracing::debug!(removed, "all users deleted");
        state.items.clone()
    }

    async fn count(&self) -> usize {
        self.state.read().await.items.len()
    }
}
