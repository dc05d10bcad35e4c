//! Employees table and edit modal.

use leptos::*;
use web_sys::SubmitEvent;

use crate::api::{self, EmployeePayload};
use crate::components::{use_notices, Modal};
use crate::models::Employee;
use crate::utils::log_trace::log_info;
use crate::utils::{format_date, matches_filter};

#[component]
pub fn EmployeesView() -> impl IntoView {
    let notices = use_notices();

    let (rows, set_rows) = create_signal(Vec::<Employee>::new());
    let (filter, set_filter) = create_signal(String::new());

    let (modal_open, set_modal_open) = create_signal(false);
    let (editing_id, set_editing_id) = create_signal(None::<i64>);
    let (first_name, set_first_name) = create_signal(String::new());
    let (last_name, set_last_name) = create_signal(String::new());
    let (email, set_email) = create_signal(String::new());
    let (department_sel, set_department_sel) = create_signal(String::new());
    let (saving, set_saving) = create_signal(false);

    let load = move || {
        spawn_local(async move {
            match api::list_employees().await {
                Ok(list) => set_rows.set(list),
                Err(_) => notices.error("Failed to load employees"),
            }
        })
    };

    create_effect(move |_| load());

    let add = move |_| {
        set_editing_id.set(None);
        set_first_name.set(String::new());
        set_last_name.set(String::new());
        set_email.set(String::new());
        set_department_sel.set(String::new());
        set_modal_open.set(true);
    };

    let edit = move |id: i64| {
        spawn_local(async move {
            match api::get_employee(id).await {
                Ok(e) => {
                    set_editing_id.set(Some(e.employee_id));
                    set_first_name.set(e.first_name);
                    set_last_name.set(e.last_name);
                    set_email.set(e.email);
                    set_department_sel.set(e.department_id.to_string());
                    set_modal_open.set(true);
                }
                Err(_) => notices.error("Failed to load the employee"),
            }
        })
    };

    let save = move |ev: SubmitEvent| {
        ev.prevent_default();
        if saving.get_untracked() {
            return;
        }
        let Ok(department_id) = department_sel.get_untracked().parse::<i64>() else {
            notices.error("Enter a department id");
            return;
        };
        let payload = EmployeePayload {
            employee_id: editing_id.get_untracked(),
            first_name: first_name.get_untracked(),
            last_name: last_name.get_untracked(),
            email: email.get_untracked(),
            department_id,
        };
        set_saving.set(true);
        spawn_local(async move {
            match api::save_employee(&payload).await {
                Ok(result) if result.success => {
                    log_info("ui", "employee saved");
                    notices.success(result.message_or("Employee saved"));
                    set_modal_open.set(false);
                    load();
                }
                Ok(result) => notices.error(result.message_or("The operation failed")),
                Err(_) => notices.error("An error occurred"),
            }
            set_saving.set(false);
        });
    };

    let remove = move |id: i64| {
        let confirmed = web_sys::window()
            .and_then(|w| w.confirm_with_message("Delete this employee?").ok())
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        spawn_local(async move {
            match api::delete_employee(id).await {
                Ok(result) if result.success => {
                    notices.success(result.message_or("Employee deleted"));
                    load();
                }
                Ok(result) => notices.error(result.message_or("Delete failed")),
                Err(_) => notices.error("An error occurred"),
            }
        })
    };

    view! {
        <div class="resource-view">
            <div class="view-header">
                <h2>"Employees"</h2>
                <div class="view-actions">
                    <input type="text" class="filter-input" placeholder="Filter employees..."
                        prop:value=move || filter.get()
                        on:input=move |ev| set_filter.set(event_target_value(&ev))
                    />
                    <button class="btn-primary" on:click=add>"+ New Employee"</button>
                </div>
            </div>

            <table class="data-table">
                <thead>
                    <tr>
                        <th>"ID"</th>
                        <th>"Name"</th>
                        <th>"Email"</th>
                        <th>"Department"</th>
                        <th>"Hired"</th>
                        <th>"Workload"</th>
                        <th>"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        let rows = rows.get();
                        if rows.is_empty() {
                            view! {
                                <tr>
                                    <td colspan="7" class="empty-state">"No employees yet"</td>
                                </tr>
                            }.into_view()
                        } else {
                            rows.into_iter().map(|e| {
                                let row_text = format!(
                                    "{} {} {} {}",
                                    e.employee_id,
                                    e.full_name(),
                                    e.email,
                                    e.department_name.clone().unwrap_or_default(),
                                );
                                let id = e.employee_id;
                                view! {
                                    <tr class:hidden=move || !matches_filter(&filter.get(), &row_text)>
                                        <td><strong>"#" {e.employee_id}</strong></td>
                                        <td><strong>{e.full_name()}</strong></td>
                                        <td>{e.email.clone()}</td>
                                        <td>{e.department_name.clone().unwrap_or_else(|| "-".to_string())}</td>
                                        <td>{format_date(e.hire_date.as_deref())}</td>
                                        <td>
                                            <span class="badge primary">{e.project_count} " projects"</span>
                                            <span class="badge warning">{e.task_count} " tasks"</span>
                                        </td>
                                        <td>
                                            <button class="btn-warning btn-sm" on:click=move |_| edit(id)>"Edit"</button>
                                            <button class="btn-danger btn-sm" on:click=move |_| remove(id)>"Delete"</button>
                                        </td>
                                    </tr>
                                }
                            }).collect_view()
                        }
                    }}
                </tbody>
            </table>

            <Modal open=modal_open
                title=Signal::derive(move || {
                    let title = if editing_id.get().is_some() { "Edit Employee" } else { "New Employee" };
                    title.to_string()
                })
                on_close=move || set_modal_open.set(false)
            >
                <form on:submit=save>
                    <div class="form-row">
                        <div class="form-group">
                            <label>"First name"</label>
                            <input type="text" required
                                prop:value=move || first_name.get()
                                on:input=move |ev| set_first_name.set(event_target_value(&ev))
                            />
                        </div>
                        <div class="form-group">
                            <label>"Last name"</label>
                            <input type="text" required
                                prop:value=move || last_name.get()
                                on:input=move |ev| set_last_name.set(event_target_value(&ev))
                            />
                        </div>
                    </div>
                    <div class="form-group">
                        <label>"Email"</label>
                        <input type="email" required
                            prop:value=move || email.get()
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="form-group">
                        <label>"Department id"</label>
                        <input type="number" required min="1"
                            prop:value=move || department_sel.get()
                            on:input=move |ev| set_department_sel.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="form-actions">
                        <button type="button" class="btn-secondary" on:click=move |_| set_modal_open.set(false)>
                            "Cancel"
                        </button>
                        <button type="submit" class="btn-primary" disabled=move || saving.get()>
                            {move || if saving.get() { "Saving..." } else { "Save" }}
                        </button>
                    </div>
                </form>
            </Modal>
        </div>
    }
}
