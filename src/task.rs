use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Identifier of a task. Its string form is what routes interpolate.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct TaskId(String);

impl TaskId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TaskId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<u32> for TaskId {
    fn from(id: u32) -> Self {
        Self(id.to_string())
    }
}

// Task documents in the wild use both `"id": "1"` and `"id": 1`.
impl<'de> Deserialize<'de> for TaskId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Text(String),
            Number(u64),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Text(id) => Self(id),
            Raw::Number(id) => Self(id.to_string()),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Pending,
    Completed,
}

impl Status {
    /// Column order used by the board.
    pub const ALL: [Status; 2] = [Status::Pending, Status::Completed];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Completed => "completed",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub status: Status,
    pub due_date: String, // opaque, e.g. "2025-12-20"
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn deserializes_camel_case_document() {
        let task: Task = serde_json::from_str(
            r#"{"id":"1","title":"Test Task","description":"This is a test task",
                "priority":"high","status":"pending","dueDate":"2025-12-20"}"#,
        )
        .expect("valid task");

        assert_eq!(task.id, TaskId::from("1"));
        assert_eq!(task.priority, Priority::High);
        assert_eq!(task.status, Status::Pending);
        assert_eq!(task.due_date, "2025-12-20");
    }

    #[rstest]
    fn numeric_id_keeps_its_decimal_form() {
        let task: Task = serde_json::from_str(
            r#"{"id":42,"title":"t","description":"d",
                "priority":"low","status":"completed","dueDate":"2025-01-01"}"#,
        )
        .expect("valid task");

        assert_eq!(task.id.as_str(), "42");
    }

    #[rstest]
    #[case(r#""urgent""#, r#""pending""#)]
    #[case(r#""high""#, r#""done""#)]
    #[case(r#""High""#, r#""pending""#)]
    fn rejects_values_outside_the_enumerations(#[case] priority: &str, #[case] status: &str) {
        let doc = format!(
            r#"{{"id":"1","title":"t","description":"d","priority":{priority},"status":{status},"dueDate":"x"}}"#
        );
        assert!(serde_json::from_str::<Task>(&doc).is_err());
    }

    #[rstest]
    fn rejects_missing_fields() {
        let doc = r#"{"id":"1","title":"t","priority":"low","status":"pending","dueDate":"x"}"#;
        assert!(serde_json::from_str::<Task>(doc).is_err());
    }

    #[rstest]
    #[case(Priority::Low, "low")]
    #[case(Priority::Medium, "medium")]
    #[case(Priority::High, "high")]
    fn priority_displays_lowercase(#[case] priority: Priority, #[case] expected: &str) {
        assert_eq!(priority.to_string(), expected);
    }
}
