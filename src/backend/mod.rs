//! Data source the dashboard reads users, tasks and credentials from.

mod mock;

pub use mock::{MockBackend, SENTINEL_TOKEN};

use async_trait::async_trait;

use crate::models::task::Task;
use crate::models::user::User;

/// Upstream backend seam. Every call succeeds.
#[async_trait]
pub trait TaskBackend: Send + Sync {
    /// All users, in a stable order.
    async fn list_users(&self) -> Vec<User>;

    /// All tasks, across every user.
    async fn list_tasks(&self) -> Vec<Task>;

    /// Whether `token` is an accepted credential.
    async fn authenticate(&self, token: &str) -> bool;
}
