//! Status and priority badges.

use leptos::*;

use crate::models::{Priority, Status};
use crate::utils::log_trace::log_warn;

#[component]
pub fn StatusBadge(status: Status) -> impl IntoView {
    if !status.is_recognized() {
        log_warn("ui", &format!("unrecognized status value: {}", status.label()));
    }
    view! {
        <span class=format!("badge {}", status.badge_class())>{status.label().to_string()}</span>
    }
}

#[component]
pub fn PriorityBadge(priority: Priority) -> impl IntoView {
    if !priority.is_recognized() {
        log_warn("ui", &format!("unrecognized priority value: {}", priority.label()));
    }
    view! {
        <span class=format!("badge {}", priority.badge_class())>{priority.label().to_string()}</span>
    }
}
