//! REST client for the project-management API.
//!
//! All endpoints share one shape: a collection GET returning a plural
//! envelope, a single-record GET via `?id=`, POST/PUT with a JSON body
//! returning `{ success, message }`, and DELETE via `?id=`.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

use crate::models::{Employee, Priority, Project, Status, Task};
use crate::utils::log_trace::log_error;

pub const PROJECTS_URL: &str = "/api/projects";
pub const TASKS_URL: &str = "/api/tasks";
pub const EMPLOYEES_URL: &str = "/api/employees";

// ============================================
// Response envelopes
// ============================================

/// Outcome of a mutating call. `success: false` is a logical failure:
/// the request went through but the server refused it.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiMessage {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

impl ApiMessage {
    pub fn message_or(&self, fallback: &str) -> String {
        match &self.message {
            Some(m) if !m.is_empty() => m.clone(),
            _ => fallback.to_string(),
        }
    }
}

#[derive(Deserialize)]
struct ProjectsEnvelope {
    #[serde(default)]
    projects: Vec<Project>,
}

#[derive(Deserialize)]
struct ProjectEnvelope {
    project: Option<Project>,
}

#[derive(Deserialize)]
struct TasksEnvelope {
    #[serde(default)]
    tasks: Vec<Task>,
}

#[derive(Deserialize)]
struct TaskEnvelope {
    task: Option<Task>,
}

#[derive(Deserialize)]
struct EmployeesEnvelope {
    #[serde(default)]
    employees: Vec<Employee>,
}

#[derive(Deserialize)]
struct EmployeeEnvelope {
    employee: Option<Employee>,
}

// ============================================
// Form payloads
// ============================================

/// Project form payload. The id is present only on update; on create
/// it is omitted entirely so the server assigns one.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<i64>,
    pub project_name: String,
    pub description: String,
    pub start_date: String,
    pub end_date: Option<String>,
    pub status: Status,
}

#[derive(Debug, Clone, Serialize)]
pub struct TaskPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_id: Option<i64>,
    pub project_id: i64,
    pub employee_id: i64,
    pub task_title: String,
    pub task_description: String,
    pub priority: Priority,
    pub start_date: String,
    pub due_date: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct EmployeePayload {
    #[serde(rename = "EmployeeID", skip_serializing_if = "Option::is_none")]
    pub employee_id: Option<i64>,
    #[serde(rename = "FirstName")]
    pub first_name: String,
    #[serde(rename = "LastName")]
    pub last_name: String,
    #[serde(rename = "Email")]
    pub email: String,
    #[serde(rename = "DepartmentID")]
    pub department_id: i64,
}

// ============================================
// URL / body builders (pure)
// ============================================

pub fn by_id_url(base: &str, id: i64) -> String {
    format!("{}?id={}", base, id)
}

pub fn tasks_list_url(project_id: Option<i64>) -> String {
    match project_id {
        Some(id) => format!("{}?project_id={}", TASKS_URL, id),
        None => TASKS_URL.to_string(),
    }
}

/// Partial PUT body for a status-only transition: exactly the id and
/// the new status, nothing else, so the server takes the narrow path.
pub fn task_status_body(task_id: i64, status: &Status) -> serde_json::Value {
    serde_json::json!({
        "task_id": task_id,
        "status": status.label(),
    })
}

// ============================================
// Fetch plumbing
// ============================================

async fn request(method: &str, url: &str, body: Option<&serde_json::Value>) -> Result<JsValue, String> {
    let opts = RequestInit::new();
    opts.set_method(method);
    if let Some(body) = body {
        opts.set_body(&JsValue::from_str(&body.to_string()));
    }

    let request = Request::new_with_str_and_init(url, &opts)
        .map_err(|e| format!("request setup failed: {:?}", e))?;
    if body.is_some() {
        request
            .headers()
            .set("Content-Type", "application/json")
            .map_err(|e| format!("header setup failed: {:?}", e))?;
    }

    let window = web_sys::window().ok_or("no window")?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| format!("fetch failed: {:?}", e))?;

    let resp: Response = resp_value
        .dyn_into()
        .map_err(|_| "not a Response".to_string())?;

    if !resp.ok() {
        return Err(format!("HTTP {}", resp.status()));
    }

    JsFuture::from(resp.json().map_err(|e| format!("json() failed: {:?}", e))?)
        .await
        .map_err(|e| format!("response body was not JSON: {:?}", e))
}

async fn fetch_decoded<T: DeserializeOwned>(
    method: &str,
    url: &str,
    body: Option<&serde_json::Value>,
) -> Result<T, String> {
    let value = request(method, url, body).await.map_err(|e| {
        log_error("api", &format!("{} {}: {}", method, url, e));
        e
    })?;
    serde_wasm_bindgen::from_value(value).map_err(|e| {
        let msg = format!("decode failed: {:?}", e);
        log_error("api", &format!("{} {}: {}", method, url, msg));
        msg
    })
}

async fn send<P: Serialize>(method: &str, url: &str, payload: &P) -> Result<ApiMessage, String> {
    let body = serde_json::to_value(payload).map_err(|e| format!("encode failed: {}", e))?;
    fetch_decoded(method, url, Some(&body)).await
}

// ============================================
// Projects
// ============================================

pub async fn list_projects() -> Result<Vec<Project>, String> {
    let envelope: ProjectsEnvelope = fetch_decoded("GET", PROJECTS_URL, None).await?;
    Ok(envelope.projects)
}

pub async fn get_project(id: i64) -> Result<Project, String> {
    let envelope: ProjectEnvelope =
        fetch_decoded("GET", &by_id_url(PROJECTS_URL, id), None).await?;
    envelope.project.ok_or_else(|| "empty response".to_string())
}

pub async fn save_project(payload: &ProjectPayload) -> Result<ApiMessage, String> {
    let method = if payload.project_id.is_some() { "PUT" } else { "POST" };
    send(method, PROJECTS_URL, payload).await
}

pub async fn delete_project(id: i64) -> Result<ApiMessage, String> {
    fetch_decoded("DELETE", &by_id_url(PROJECTS_URL, id), None).await
}

// ============================================
// Tasks
// ============================================

pub async fn list_tasks(project_id: Option<i64>) -> Result<Vec<Task>, String> {
    let envelope: TasksEnvelope =
        fetch_decoded("GET", &tasks_list_url(project_id), None).await?;
    Ok(envelope.tasks)
}

pub async fn get_task(id: i64) -> Result<Task, String> {
    let envelope: TaskEnvelope = fetch_decoded("GET", &by_id_url(TASKS_URL, id), None).await?;
    envelope.task.ok_or_else(|| "empty response".to_string())
}

pub async fn save_task(payload: &TaskPayload) -> Result<ApiMessage, String> {
    let method = if payload.task_id.is_some() { "PUT" } else { "POST" };
    send(method, TASKS_URL, payload).await
}

pub async fn update_task_status(task_id: i64, status: &Status) -> Result<ApiMessage, String> {
    let body = task_status_body(task_id, status);
    fetch_decoded("PUT", TASKS_URL, Some(&body)).await
}

pub async fn delete_task(id: i64) -> Result<ApiMessage, String> {
    fetch_decoded("DELETE", &by_id_url(TASKS_URL, id), None).await
}

// ============================================
// Employees
// ============================================

pub async fn list_employees() -> Result<Vec<Employee>, String> {
    let envelope: EmployeesEnvelope = fetch_decoded("GET", EMPLOYEES_URL, None).await?;
    Ok(envelope.employees)
}

pub async fn get_employee(id: i64) -> Result<Employee, String> {
    let envelope: EmployeeEnvelope =
        fetch_decoded("GET", &by_id_url(EMPLOYEES_URL, id), None).await?;
    envelope.employee.ok_or_else(|| "empty response".to_string())
}

pub async fn save_employee(payload: &EmployeePayload) -> Result<ApiMessage, String> {
    let method = if payload.employee_id.is_some() { "PUT" } else { "POST" };
    send(method, EMPLOYEES_URL, payload).await
}

pub async fn delete_employee(id: i64) -> Result<ApiMessage, String> {
    fetch_decoded("DELETE", &by_id_url(EMPLOYEES_URL, id), None).await
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(value: &serde_json::Value) -> Vec<String> {
        value.as_object().unwrap().keys().cloned().collect()
    }

    #[test]
    fn list_urls() {
        assert_eq!(tasks_list_url(None), "/api/tasks");
        assert_eq!(tasks_list_url(Some(3)), "/api/tasks?project_id=3");
        assert_eq!(by_id_url(PROJECTS_URL, 42), "/api/projects?id=42");
    }

    #[test]
    fn create_payload_omits_id() {
        let payload = ProjectPayload {
            project_id: None,
            project_name: "Site Redesign".to_string(),
            description: String::new(),
            start_date: "2024-01-01".to_string(),
            end_date: None,
            status: Status::Planned,
        };
        let value = serde_json::to_value(&payload).unwrap();
        assert!(!keys(&value).contains(&"project_id".to_string()));
        assert_eq!(value["status"], "Planned");
        // absent end date goes over the wire as an explicit null
        assert!(value["end_date"].is_null());
    }

    #[test]
    fn update_payload_carries_id() {
        let payload = ProjectPayload {
            project_id: Some(7),
            project_name: "Site Redesign".to_string(),
            description: "reworked scope".to_string(),
            start_date: "2024-01-01".to_string(),
            end_date: Some("2024-06-30".to_string()),
            status: Status::Active,
        };
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["project_id"], 7);
        assert_eq!(value["end_date"], "2024-06-30");
    }

    #[test]
    fn employee_payload_uses_server_field_names() {
        let payload = EmployeePayload {
            employee_id: Some(12),
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            department_id: 2,
        };
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["EmployeeID"], 12);
        assert_eq!(value["FirstName"], "Ada");
        assert_eq!(value["DepartmentID"], 2);
    }

    #[test]
    fn list_envelopes_default_to_empty_on_missing_key() {
        let projects: ProjectsEnvelope = serde_json::from_str("{}").unwrap();
        assert!(projects.projects.is_empty());
        let projects: ProjectsEnvelope = serde_json::from_str(r#"{"projects": []}"#).unwrap();
        assert!(projects.projects.is_empty());

        let tasks: TasksEnvelope = serde_json::from_str("{}").unwrap();
        assert!(tasks.tasks.is_empty());
        let employees: EmployeesEnvelope = serde_json::from_str("{}").unwrap();
        assert!(employees.employees.is_empty());
    }

    #[test]
    fn sparse_api_message_reads_as_failure() {
        // A body with no success flag must never pass for a success.
        let msg: ApiMessage = serde_json::from_str("{}").unwrap();
        assert!(!msg.success);
        assert!(msg.message.is_none());
        assert_eq!(msg.message_or("fallback"), "fallback");

        let msg: ApiMessage = serde_json::from_str(r#"{"message": "Not found"}"#).unwrap();
        assert!(!msg.success);
        assert_eq!(msg.message_or("fallback"), "Not found");
    }

    #[test]
    fn status_body_is_exactly_id_and_status() {
        let body = task_status_body(9, &Status::Completed);
        let mut body_keys = keys(&body);
        body_keys.sort();
        assert_eq!(body_keys, vec!["status", "task_id"]);
        assert_eq!(body["task_id"], 9);
        assert_eq!(body["status"], "Completed");
    }
}
