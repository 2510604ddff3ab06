use serde::{Deserialize, Serialize};

/// A task owned by a user. `user_id` is not checked against the user list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub user_id: String,
    pub done: bool,
}

impl Task {
    pub fn new(id: impl Into<String>, user_id: impl Into<String>, done: bool) -> Self {
        Self {
            id: id.into(),
            user_id: user_id.into(),
            done,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn task_serializes_camel_case() {
        let json = serde_json::to_value(Task::new("t1", "u1", true)).unwrap();
        assert_eq!(json["id"], "t1");
        assert_eq!(json["userId"], "u1");
        assert_eq!(json["done"], true);
        assert!(json.get("user_id").is_none());
    }
}
