//! Data structures mirroring the REST resources.

use serde::{Deserialize, Serialize};

// ============================================
// Status / priority enumerations
// ============================================

/// Record status as used by both projects and tasks.
///
/// Wire values are fixed strings; anything else is carried as
/// `Unrecognized` so a single bad value never sinks a whole list,
/// and the UI can flag it instead of silently defaulting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Status {
    Active,
    InProgress,
    Completed,
    Planned,
    Unrecognized(String),
}

impl Status {
    pub fn label(&self) -> &str {
        match self {
            Status::Active => "Active",
            Status::InProgress => "In-Progress",
            Status::Completed => "Completed",
            Status::Planned => "Planned",
            Status::Unrecognized(s) => s,
        }
    }

    /// CSS class for the status badge.
    pub fn badge_class(&self) -> &'static str {
        match self {
            Status::Active => "success",
            Status::Completed => "primary",
            Status::InProgress => "warning",
            Status::Planned => "danger",
            Status::Unrecognized(_) => "neutral",
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, Status::Unrecognized(_))
    }
}

impl From<String> for Status {
    fn from(s: String) -> Self {
        match s.as_str() {
            "Active" => Status::Active,
            "In-Progress" => Status::InProgress,
            "Completed" => Status::Completed,
            "Planned" => Status::Planned,
            _ => Status::Unrecognized(s),
        }
    }
}

impl From<Status> for String {
    fn from(s: Status) -> Self {
        s.label().to_string()
    }
}

impl Default for Status {
    fn default() -> Self {
        Status::Active
    }
}

/// Task priority.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Priority {
    High,
    Medium,
    Low,
    Unrecognized(String),
}

impl Priority {
    pub fn label(&self) -> &str {
        match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
            Priority::Unrecognized(s) => s,
        }
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            Priority::High => "danger",
            Priority::Medium => "warning",
            Priority::Low => "success",
            Priority::Unrecognized(_) => "neutral",
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, Priority::Unrecognized(_))
    }
}

impl From<String> for Priority {
    fn from(s: String) -> Self {
        match s.as_str() {
            "High" => Priority::High,
            "Medium" => Priority::Medium,
            "Low" => Priority::Low,
            _ => Priority::Unrecognized(s),
        }
    }
}

impl From<Priority> for String {
    fn from(p: Priority) -> Self {
        p.label().to_string()
    }
}

impl Default for Priority {
    fn default() -> Self {
        Priority::Medium
    }
}

// ============================================
// Resource records
// ============================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Project {
    pub project_id: i64,
    pub project_name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub start_date: String,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub status: Status,
}

/// Task row as served by the task detail view: carries the joined
/// project and employee names alongside the raw references.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub task_id: i64,
    pub task_title: String,
    #[serde(default)]
    pub task_description: Option<String>,
    pub project_id: i64,
    #[serde(default)]
    pub project_name: String,
    #[serde(rename = "EmployeeID")]
    pub employee_id: i64,
    #[serde(rename = "EmployeeName", default)]
    pub employee_name: String,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub status: Status,
    pub start_date: String,
    pub due_date: String,
}

/// Employee record. `project_count` / `task_count` are derived by the
/// server and may be absent on single-record responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    #[serde(rename = "EmployeeID")]
    pub employee_id: i64,
    #[serde(rename = "FirstName")]
    pub first_name: String,
    #[serde(rename = "LastName")]
    pub last_name: String,
    #[serde(rename = "Email")]
    pub email: String,
    #[serde(rename = "DepartmentID")]
    pub department_id: i64,
    #[serde(default)]
    pub department_name: Option<String>,
    #[serde(rename = "HireDate", default)]
    pub hire_date: Option<String>,
    #[serde(default)]
    pub project_count: i64,
    #[serde(default)]
    pub task_count: i64,
}

impl Employee {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_wire_values_round_trip() {
        for wire in ["Active", "In-Progress", "Completed", "Planned"] {
            let status = Status::from(wire.to_string());
            assert!(status.is_recognized(), "{} should be recognized", wire);
            assert_eq!(String::from(status), wire);
        }
    }

    #[test]
    fn unknown_status_is_carried_not_defaulted() {
        let status = Status::from("On Hold".to_string());
        assert_eq!(status, Status::Unrecognized("On Hold".to_string()));
        assert_eq!(status.label(), "On Hold");
        assert_eq!(status.badge_class(), "neutral");
    }

    #[test]
    fn badge_classes_match_display_contract() {
        assert_eq!(Status::Active.badge_class(), "success");
        assert_eq!(Status::Completed.badge_class(), "primary");
        assert_eq!(Status::InProgress.badge_class(), "warning");
        assert_eq!(Status::Planned.badge_class(), "danger");
        assert_eq!(Priority::High.badge_class(), "danger");
        assert_eq!(Priority::Medium.badge_class(), "warning");
        assert_eq!(Priority::Low.badge_class(), "success");
    }

    #[test]
    fn project_deserializes_with_optional_fields_missing() {
        let json = r#"{
            "project_id": 3,
            "project_name": "Site Redesign",
            "start_date": "2024-01-01T00:00:00",
            "status": "Planned"
        }"#;
        let p: Project = serde_json::from_str(json).unwrap();
        assert_eq!(p.project_id, 3);
        assert_eq!(p.status, Status::Planned);
        assert!(p.description.is_none());
        assert!(p.end_date.is_none());
    }

    #[test]
    fn task_maps_renamed_employee_fields() {
        let json = r#"{
            "task_id": 7,
            "task_title": "Wireframes",
            "project_id": 3,
            "project_name": "Site Redesign",
            "EmployeeID": 12,
            "EmployeeName": "Ada Lovelace",
            "priority": "High",
            "status": "In-Progress",
            "start_date": "2024-01-02",
            "due_date": "2024-01-20"
        }"#;
        let t: Task = serde_json::from_str(json).unwrap();
        assert_eq!(t.employee_id, 12);
        assert_eq!(t.employee_name, "Ada Lovelace");
        assert_eq!(t.priority, Priority::High);
        assert_eq!(t.status, Status::InProgress);
    }

    #[test]
    fn employee_counters_default_to_zero() {
        let json = r#"{
            "EmployeeID": 12,
            "FirstName": "Ada",
            "LastName": "Lovelace",
            "Email": "ada@example.com",
            "DepartmentID": 2
        }"#;
        let e: Employee = serde_json::from_str(json).unwrap();
        assert_eq!(e.project_count, 0);
        assert_eq!(e.task_count, 0);
        assert_eq!(e.full_name(), "Ada Lovelace");
    }
}
