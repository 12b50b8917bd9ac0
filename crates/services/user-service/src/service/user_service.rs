//! User service - Handles user-related business logic.

use async_trait::async_trait;
use std::sync::Arc;

use common::{AppResult, OptionExt};
use domain::{User, UserId};

use crate::repository::UserRepository;

/// User service trait for dependency injection.
#[async_trait]
pub trait UserService: Send + Sync {
    /// List all users in creation order
    async fn list_users(&self) -> AppResult<Vec<User>>;

    /// Get user by ID
    async fn get_user(&self, id: UserId) -> AppResult<User>;

    /// Create a new user; id and hours are assigned here, never by the caller
    async fn create_user(&self, name: String) -> AppResult<User>;

    /// Replace the user's name
    async fn rename_user(&self, id: UserId, name: String) -> AppResult<User>;

    /// Add hours to the user's total
    async fn add_hours(&self, id: UserId, hours_to_add: f64) -> AppResult<User>;

    /// Delete a user, returning the removed record
    async fn delete_user(&self, id: UserId) -> AppResult<User>;

    /// Delete every user and reset id assignment
    async fn delete_all_users(&self) -> AppResult<Vec<User>>;

    /// Number of users currently stored
    async fn user_count(&self) -> usize;
}

/// Concrete implementation of UserService using repository.
pub struct UserManager {
    repo: Arc<dyn UserRepository>,
}

impl UserManager {
    /// Create new user service instance with repository
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl UserService for UserManager {
    async fn list_users(&self) -> AppResult<Vec<User>> {
        Ok(self.repo.list().await)
    }

    async fn get_user(&self, id: UserId) -> AppResult<User> {
        self.repo.find_by_id(id).await.ok_or_not_found()
    }

    async fn create_user(&self, name: String) -> AppResult<User> {
        Ok(self.repo.create(name).await)
    }

    async fn rename_user(&self, id: UserId, name: String) -> AppResult<User> {
        Ok(self.repo.update_name(id, name).await?)
    }

    async fn add_hours(&self, id: UserId, hours_to_add: f64) -> AppResult<User> {
        Ok(self.repo.add_hours(id, hours_to_add).await?)
    }

    async fn delete_user(&self, id: UserId) -> AppResult<User> {
        Ok(self.repo.delete(id).await?)
    }

    async fn delete_all_users(&self) -> AppResult<Vec<User>> {
        Ok(self.repo.delete_all().await)
    }

    async fn user_count(&self) -> usize {
        self.repo.count().await
    }
}

#[cfg(test)]
mod tests {
    use mockall::predicate::eq;

    use super::*;
    use crate::repository::MockUserRepository;
    use common::AppError;
    use domain::DomainError;

    fn create_test_user(id: UserId) -> User {
        User::new(id, "Test User".to_string())
    }

    #[tokio::test]
    async fn test_get_user_success() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id()
            .with(eq(1))
            .returning(|id| Some(create_test_user(id)));

        let service = UserManager::new(Arc::new(repo));
        let result = service.get_user(1).await;

        assert_eq!(result.unwrap().id, 1);
    }

    #[tokio::test]
    async fn test_get_user_not_found() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id().returning(|_| None);

        let service = UserManager::new(Arc::new(repo));
        let result = service.get_user(999).await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound));
    }

    #[tokio::test]
    async fn test_list_users_success() {
        let mut repo = MockUserRepository::new();
        repo.expect_list()
            .returning(|| vec![create_test_user(1), create_test_user(2)]);

        let service = UserManager::new(Arc::new(repo));
        let result = service.list_users().await;

        assert_eq!(result.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_create_user_passes_name_through() {
        let mut repo = MockUserRepository::new();
        repo.expect_create()
            .with(eq("John Doe".to_string()))
            .times(1)
            .returning(|name| User::new(1, name));

        let service = UserManager::new(Arc::new(repo));
        let user = service.create_user("John Doe".to_string()).await.unwrap();

        assert_eq!(user.name, "John Doe");
        assert_eq!(user.hours_worked, 0.0);
    }

    #[tokio::test]
    async fn test_rename_user_not_found() {
        let mut repo = MockUserRepository::new();
        repo.expect_update_name()
            .returning(|id, _| Err(DomainError::not_found(id)));

        let service = UserManager::new(Arc::new(repo));
        let result = service.rename_user(5, "Jane".to_string()).await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound));
    }

    #[tokio::test]
    async fn test_add_hours_success() {
        let mut repo = MockUserRepository::new();
        repo.expect_add_hours()
            .with(eq(1), eq(5.0))
            .returning(|id, delta| {
                let mut user = create_test_user(id);
                user.add_hours(delta)?;
                Ok(user)
            });

        let service = UserManager::new(Arc::new(repo));
        let user = service.add_hours(1, 5.0).await.unwrap();

        assert_eq!(user.hours_worked, 5.0);
    }

    #[tokio::test]
    async fn test_add_hours_overflow_is_validation_error() {
        let mut repo = MockUserRepository::new();
        repo.expect_add_hours()
            .returning(|_, _| Err(DomainError::validation("hoursWorked overflow")));

        let service = UserManager::new(Arc::new(repo));
        let result = service.add_hours(1, 1e308).await;

        assert!(matches!(result.unwrap_err(), AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_delete_user_not_found() {
        let mut repo = MockUserRepository::new();
        repo.expect_delete()
            .with(eq(3))
            .returning(|id| Err(DomainError::not_found(id)));

        let service = UserManager::new(Arc::new(repo));
        let result = service.delete_user(3).await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound));
    }

    #[tokio::test]
    async fn test_delete_all_users_returns_empty() {
        let mut repo = MockUserRepository::new();
        repo.expect_delete_all().times(1).returning(Vec::new);

        let service = UserManager::new(Arc::new(repo));
        let result = service.delete_all_users().await;

        assert!(result.unwrap().is_empty());
    }
}
