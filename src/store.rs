use tokio::sync::RwLock;

use crate::users::repo_types::User;

/// Process-lifetime collection of users and the todos they own.
///
/// Users are kept in creation order and looked up by linear scan. Every
/// operation takes the lock once, so a uniqueness check and the insert that
/// follows it cannot interleave with another writer. User operations live in
/// `users::repo`, todo operations in `todos::repo`.
#[derive(Debug, Default)]
pub struct UserStore {
    pub(crate) users: RwLock<Vec<User>>,
}

impl UserStore {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub(crate) async fn len(&self) -> usize {
        self.users.read().await.len()
    }
}
