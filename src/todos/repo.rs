use time::OffsetDateTime;
use tracing::debug;
use uuid::Uuid;

use crate::{
    error::{ApiError, ApiResult},
    store::UserStore,
    todos::repo_types::Todo,
    users::repo_types::User,
};

fn user_mut(users: &mut [User], user_id: Uuid) -> ApiResult<&mut User> {
    users
        .iter_mut()
        .find(|u| u.id == user_id)
        .ok_or(ApiError::UserNotFound)
}

fn todo_mut(user: &mut User, todo_id: Uuid) -> ApiResult<&mut Todo> {
    user.todos
        .iter_mut()
        .find(|t| t.id == todo_id)
        .ok_or(ApiError::TodoNotFound)
}

impl User {
    /// Find one of this user's todos by id.
    pub fn find_todo(&self, todo_id: Uuid) -> Option<&Todo> {
        self.todos.iter().find(|t| t.id == todo_id)
    }
}

impl UserStore {
    /// Current todo sequence of a user, in insertion order.
    pub async fn list_todos(&self, user_id: Uuid) -> ApiResult<Vec<Todo>> {
        let users = self.users.read().await;
        users
            .iter()
            .find(|u| u.id == user_id)
            .map(|u| u.todos.clone())
            .ok_or(ApiError::UserNotFound)
    }

    /// Append a todo to the user's sequence.
    pub async fn add_todo(&self, user_id: Uuid, todo: Todo) -> ApiResult<Todo> {
        let mut users = self.users.write().await;
        let user = user_mut(&mut users, user_id)?;
        user.todos.push(todo.clone());
        debug!(%user_id, todo_id = %todo.id, count = user.todos.len(), "todo appended");
        Ok(todo)
    }

    /// Overwrite title and deadline; nothing else changes.
    pub async fn update_todo(
        &self,
        user_id: Uuid,
        todo_id: Uuid,
        title: String,
        deadline: OffsetDateTime,
    ) -> ApiResult<Todo> {
        let mut users = self.users.write().await;
        let todo = todo_mut(user_mut(&mut users, user_id)?, todo_id)?;
        todo.title = title;
        todo.deadline = deadline;
        Ok(todo.clone())
    }

    /// Set `done`. There is no way back to false.
    pub async fn mark_done(&self, user_id: Uuid, todo_id: Uuid) -> ApiResult<Todo> {
        let mut users = self.users.write().await;
        let todo = todo_mut(user_mut(&mut users, user_id)?, todo_id)?;
        todo.done = true;
        Ok(todo.clone())
    }

    /// Remove one todo and return what is left, order preserved.
    pub async fn delete_todo(&self, user_id: Uuid, todo_id: Uuid) -> ApiResult<Vec<Todo>> {
        let mut users = self.users.write().await;
        let user = user_mut(&mut users, user_id)?;
        let before = user.todos.len();
        user.todos.retain(|t| t.id != todo_id);
        if user.todos.len() == before {
            return Err(ApiError::TodoNotFound);
        }
        debug!(%user_id, %todo_id, remaining = user.todos.len(), "todo removed");
        Ok(user.todos.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    async fn store_with_user() -> (UserStore, User) {
        let store = UserStore::new();
        let user = store.create_user("Ada".into(), "ada".into()).await.unwrap();
        (store, user)
    }

    fn todo(title: &str) -> Todo {
        Todo::new(title.into(), datetime!(2025-01-01 0:00 UTC))
    }

    #[tokio::test]
    async fn add_todo_appends_exactly_one() {
        let (store, user) = store_with_user().await;
        let created = store.add_todo(user.id, todo("first")).await.unwrap();
        let todos = store.list_todos(user.id).await.unwrap();
        assert_eq!(todos.len(), 1);
        assert_eq!(todos[0], created);
        assert!(!todos[0].done);
    }

    #[tokio::test]
    async fn add_todo_for_unknown_user_fails() {
        let store = UserStore::new();
        let err = store.add_todo(Uuid::new_v4(), todo("x")).await.unwrap_err();
        assert_eq!(err, ApiError::UserNotFound);
    }

    #[tokio::test]
    async fn update_changes_only_title_and_deadline() {
        let (store, user) = store_with_user().await;
        let original = store.add_todo(user.id, todo("draft")).await.unwrap();
        let updated = store
            .update_todo(
                user.id,
                original.id,
                "final".into(),
                datetime!(2026-06-30 12:00 UTC),
            )
            .await
            .unwrap();
        assert_eq!(updated.title, "final");
        assert_eq!(updated.deadline, datetime!(2026-06-30 12:00 UTC));
        assert_eq!(updated.id, original.id);
        assert_eq!(updated.done, original.done);
        assert_eq!(updated.created_at, original.created_at);
    }

    #[tokio::test]
    async fn mark_done_is_idempotent() {
        let (store, user) = store_with_user().await;
        let t = store.add_todo(user.id, todo("t")).await.unwrap();
        assert!(store.mark_done(user.id, t.id).await.unwrap().done);
        assert!(store.mark_done(user.id, t.id).await.unwrap().done);
        assert!(store.list_todos(user.id).await.unwrap()[0].done);
    }

    #[tokio::test]
    async fn delete_keeps_order_of_the_rest() {
        let (store, user) = store_with_user().await;
        let a = store.add_todo(user.id, todo("a")).await.unwrap();
        let b = store.add_todo(user.id, todo("b")).await.unwrap();
        let c = store.add_todo(user.id, todo("c")).await.unwrap();

        let remaining = store.delete_todo(user.id, b.id).await.unwrap();
        let ids: Vec<Uuid> = remaining.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![a.id, c.id]);
        assert_eq!(store.list_todos(user.id).await.unwrap(), remaining);
    }

    #[tokio::test]
    async fn delete_unknown_todo_fails() {
        let (store, user) = store_with_user().await;
        store.add_todo(user.id, todo("a")).await.unwrap();
        let err = store.delete_todo(user.id, Uuid::new_v4()).await.unwrap_err();
        assert_eq!(err, ApiError::TodoNotFound);
        assert_eq!(store.list_todos(user.id).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn todos_are_scoped_to_their_owner() {
        let (store, ada) = store_with_user().await;
        let grace = store
            .create_user("Grace".into(), "grace".into())
            .await
            .unwrap();
        let t = store.add_todo(ada.id, todo("ada's")).await.unwrap();

        assert_eq!(
            store.mark_done(grace.id, t.id).await.unwrap_err(),
            ApiError::TodoNotFound
        );
        assert!(store.list_todos(grace.id).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn find_todo_on_snapshot() {
        let (store, user) = store_with_user().await;
        let t = store.add_todo(user.id, todo("a")).await.unwrap();
        let snapshot = store.find_by_username("ada").await.unwrap();
        assert_eq!(snapshot.find_todo(t.id), Some(&t));
        assert!(snapshot.find_todo(Uuid::new_v4()).is_none());
    }
}
