use tracing::debug;

use crate::{
    error::{ApiError, ApiResult},
    store::UserStore,
    users::repo_types::User,
};

impl UserStore {
    /// Create a user, failing if the username is already registered.
    pub async fn create_user(&self, name: String, username: String) -> ApiResult<User> {
        let mut users = self.users.write().await;
        if users.iter().any(|u| u.username == username) {
            return Err(ApiError::DuplicateUsername);
        }
        let user = User::new(name, username);
        users.push(user.clone());
        debug!(user_id = %user.id, total = users.len(), "user stored");
        Ok(user)
    }

    /// Find a user by username.
    pub async fn find_by_username(&self, username: &str) -> Option<User> {
        self.users
            .read()
            .await
            .iter()
            .find(|u| u.username == username)
            .cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn create_user_starts_with_no_todos() {
        let store = UserStore::new();
        let user = store
            .create_user("Ada".into(), "ada".into())
            .await
            .expect("create user");
        assert_eq!(user.username, "ada");
        assert_eq!(user.name, "Ada");
        assert!(user.todos.is_empty());
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn duplicate_username_is_rejected() {
        let store = UserStore::new();
        let first = store.create_user("Ada".into(), "ada".into()).await.unwrap();
        let err = store
            .create_user("Other Ada".into(), "ada".into())
            .await
            .unwrap_err();
        assert_eq!(err, ApiError::DuplicateUsername);
        assert_eq!(store.len().await, 1);
        assert_eq!(store.find_by_username("ada").await.unwrap().id, first.id);
    }

    #[tokio::test]
    async fn find_by_username_misses_unknown() {
        let store = UserStore::new();
        store.create_user("Ada".into(), "ada".into()).await.unwrap();
        assert!(store.find_by_username("grace").await.is_none());
        assert!(store.find_by_username("ADA").await.is_none());
    }

    #[tokio::test]
    async fn users_get_distinct_ids() {
        let store = UserStore::new();
        let a = store.create_user("Ada".into(), "ada".into()).await.unwrap();
        let g = store.create_user("Grace".into(), "grace".into()).await.unwrap();
        assert_ne!(a.id, g.id);
        assert_eq!(store.len().await, 2);
    }
}
