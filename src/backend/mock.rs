use async_trait::async_trait;

use super::TaskBackend;
use crate::models::task::Task;
use crate::models::user::User;

/// The only credential the mock backend accepts.
pub const SENTINEL_TOKEN: &str = "test-token";

/// In-memory backend returning fixed records. Read-only once built.
#[derive(Debug, Clone)]
pub struct MockBackend {
    users: Vec<User>,
    tasks: Vec<Task>,
    token: String,
}

impl MockBackend {
    /// Backend seeded with the standard three users and five tasks.
    pub fn new() -> Self {
        Self::with_data(
            vec![
                User::new("u1", "山田太郎"),
                User::new("u2", "佐藤花子"),
                User::new("u3", "鈴木次郎"),
            ],
            vec![
                Task::new("t1", "u1", true),
                Task::new("t2", "u1", false),
                Task::new("t3", "u2", true),
                Task::new("t4", "u2", true),
                Task::new("t5", "u3", false),
            ],
            SENTINEL_TOKEN,
        )
    }

    pub fn with_data(users: Vec<User>, tasks: Vec<Task>, token: impl Into<String>) -> Self {
        Self {
            users,
            tasks,
            token: token.into(),
        }
    }
}

impl Default for MockBackend {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TaskBackend for MockBackend {
    async fn list_users(&self) -> Vec<User> {
        self.users.clone()
    }

    async fn list_tasks(&self) -> Vec<Task> {
        self.tasks.clone()
    }

    async fn authenticate(&self, token: &str) -> bool {
        !token.is_empty() && token == self.token
    }
}
