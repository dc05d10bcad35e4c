//! Chronological trace log.
//!
//! Every API failure and notable UI action is recorded with a category
//! so a session can be reconstructed after the fact. Entries go to the
//! browser console and to a bounded localStorage-backed ring buffer.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

const MAX_LOG_ENTRIES: usize = 500;
const STORAGE_KEY: &str = "project_tracker_log_trace";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    pub timestamp: String,
    pub level: String,
    pub category: String, // "api", "ui"
    pub message: String,
}

struct LogTrace {
    logs: VecDeque<LogEntry>,
}

impl LogTrace {
    fn new() -> Self {
        let mut trace = LogTrace {
            logs: VecDeque::with_capacity(MAX_LOG_ENTRIES),
        };
        trace.load_from_storage();
        trace
    }

    fn log(&mut self, level: &str, category: &str, message: &str) {
        let timestamp = js_sys::Date::new_0()
            .to_iso_string()
            .as_string()
            .unwrap_or_default();

        let line = format!("[{}] {}", category, message);
        match level {
            "error" => web_sys::console::error_1(&line.into()),
            "warn" => web_sys::console::warn_1(&line.into()),
            _ => web_sys::console::log_1(&line.into()),
        }

        if self.logs.len() >= MAX_LOG_ENTRIES {
            self.logs.pop_front();
        }
        self.logs.push_back(LogEntry {
            timestamp,
            level: level.to_string(),
            category: category.to_string(),
            message: message.to_string(),
        });
        self.save_to_storage();
    }

    fn load_from_storage(&mut self) {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                if let Ok(Some(json)) = storage.get_item(STORAGE_KEY) {
                    if let Ok(logs) = serde_json::from_str::<Vec<LogEntry>>(&json) {
                        self.logs = logs.into_iter().collect();
                    }
                }
            }
        }
    }

    fn save_to_storage(&self) {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let logs: Vec<&LogEntry> = self.logs.iter().collect();
                let json = serde_json::to_string(&logs).unwrap_or_else(|_| "[]".to_string());
                let _ = storage.set_item(STORAGE_KEY, &json);
            }
        }
    }
}

thread_local! {
    static LOG_TRACE: std::cell::RefCell<LogTrace> = std::cell::RefCell::new(LogTrace::new());
}

pub fn log_info(category: &str, message: &str) {
    LOG_TRACE.with(|trace| trace.borrow_mut().log("info", category, message));
}

pub fn log_warn(category: &str, message: &str) {
    LOG_TRACE.with(|trace| trace.borrow_mut().log("warn", category, message));
}

pub fn log_error(category: &str, message: &str) {
    LOG_TRACE.with(|trace| trace.borrow_mut().log("error", category, message));
}
