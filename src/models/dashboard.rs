//! Per-user task completion row returned by `GET /dashboard`.

use serde::{Deserialize, Serialize};

/// Completion statistics for a single user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardRow {
    pub user_id: String,
    pub user_name: String,
    pub done_count: u32,
    pub total_count: u32,
    /// Completion percentage in `0..=100`, rounded half up.
    pub rate: u32,
}

/// Rounded completion percentage; zero when there are no tasks.
///
/// Integer form of `round(done / total * 100)` with halves rounded up.
pub fn completion_rate(done_count: u32, total_count: u32) -> u32 {
    if total_count == 0 {
        return 0;
    }
    let done = u64::from(done_count);
    let total = u64::from(total_count);
    ((done * 200 + total) / (total * 2)) as u32
}
