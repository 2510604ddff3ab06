//! Dashboard aggregation: per-user task completion.

use crate::backend::TaskBackend;
use crate::models::dashboard::{completion_rate, DashboardRow};
use crate::models::task::Task;
use crate::models::user::User;

/// Fetch users and tasks together and build one row per user, in user order.
pub async fn compute_dashboard(backend: &dyn TaskBackend) -> Vec<DashboardRow> {
    let (users, tasks) = tokio::join!(backend.list_users(), backend.list_tasks());

    let rows = aggregate(&users, &tasks);
    tracing::debug!(users = users.len(), tasks = tasks.len(), "Computed dashboard");
    rows
}

/// Group `tasks` under their owning user. Tasks with an unknown owner are dropped.
pub fn aggregate(users: &[User], tasks: &[Task]) -> Vec<DashboardRow> {
    users
        .iter()
        .map(|user| {
            let (done_count, total_count) = tasks
                .iter()
                .filter(|t| t.user_id == user.id)
                .fold((0u32, 0u32), |(done, total), t| {
                    (done + u32::from(t.done), total + 1)
                });

            DashboardRow {
                user_id: user.id.clone(),
                user_name: user.name.clone(),
                done_count,
                total_count,
                rate: completion_rate(done_count, total_count),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::MockBackend;

    fn counts(row: &DashboardRow) -> (u32, u32, u32) {
        (row.done_count, row.total_count, row.rate)
    }

    #[tokio::test]
    async fn fixed_data_yields_three_rows_in_order() {
        let rows = compute_dashboard(&MockBackend::new()).await;

        let ids: Vec<&str> = rows.iter().map(|r| r.user_id.as_str()).collect();
        assert_eq!(ids, ["u1", "u2", "u3"]);
        assert_eq!(counts(&rows[0]), (1, 2, 50));
        assert_eq!(counts(&rows[1]), (2, 2, 100));
        assert_eq!(counts(&rows[2]), (0, 1, 0));
        assert_eq!(rows[0].user_name, "山田太郎");
    }

    #[tokio::test]
    async fn repeated_calls_are_identical() {
        let backend = MockBackend::new();
        let first = compute_dashboard(&backend).await;
        let second = compute_dashboard(&backend).await;
        assert_eq!(first, second);
    }

    #[test]
    fn user_without_tasks_gets_zero_row() {
        let users = vec![User::new("a", "Alice"), User::new("b", "Bob")];
        let tasks = vec![Task::new("t1", "a", true)];

        let rows = aggregate(&users, &tasks);
        assert_eq!(rows.len(), 2);
        assert_eq!(counts(&rows[1]), (0, 0, 0));
    }

    #[test]
    fn orphan_tasks_are_ignored() {
        let users = vec![User::new("a", "Alice")];
        let tasks = vec![
            Task::new("t1", "a", false),
            Task::new("t2", "ghost", true),
            Task::new("t3", "ghost", true),
        ];

        let rows = aggregate(&users, &tasks);
        assert_eq!(rows.len(), 1);
        assert_eq!(counts(&rows[0]), (0, 1, 0));
    }

    #[test]
    fn totals_match_owned_task_count() {
        let users = vec![User::new("a", "Alice"), User::new("b", "Bob")];
        let tasks: Vec<Task> = (0..7)
            .map(|i| Task::new(format!("t{i}"), if i % 2 == 0 { "a" } else { "b" }, i % 3 == 0))
            .collect();

        let rows = aggregate(&users, &tasks);
        let owned_by = |id: &str| tasks.iter().filter(|t| t.user_id == id).count() as u32;
        for row in &rows {
            assert_eq!(row.total_count, owned_by(row.user_id.as_str()));
            assert!(row.done_count <= row.total_count);
            assert!(row.rate <= 100);
        }
        assert_eq!(rows.iter().map(|r| r.total_count).sum::<u32>(), 7);
    }

    #[test]
    fn empty_user_list_yields_no_rows() {
        assert!(aggregate(&[], &[Task::new("t1", "a", true)]).is_empty());
    }

    #[tokio::test]
    async fn rates_round_from_backend_data() {
        let backend = MockBackend::with_data(
            vec![User::new("a", "Alice")],
            vec![
                Task::new("t1", "a", true),
                Task::new("t2", "a", true),
                Task::new("t3", "a", false),
            ],
            "x",
        );
        let rows = compute_dashboard(&backend).await;
        assert_eq!(counts(&rows[0]), (2, 3, 67));
    }
}
