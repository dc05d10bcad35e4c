//! Tasks table and edit modal.
//!
//! On top of the common list/edit contract this view has a project
//! filter (server-side, via `?project_id=`) and a one-click status
//! transition to Completed.

use leptos::*;
use web_sys::SubmitEvent;

use crate::api::{self, TaskPayload};
use crate::components::{use_notices, Modal, PriorityBadge, StatusBadge};
use crate::models::{Employee, Priority, Project, Status, Task};
use crate::utils::log_trace::log_info;
use crate::utils::{date_input_value, format_date, matches_filter};
use crate::AppContext;

#[component]
pub fn TasksView() -> impl IntoView {
    let notices = use_notices();
    let ctx = use_context::<AppContext>().expect("AppContext not found");

    let (rows, set_rows) = create_signal(Vec::<Task>::new());
    let (filter, set_filter) = create_signal(String::new());

    // Dropdown sources for the edit form and the project filter.
    let (projects, set_projects) = create_signal(Vec::<Project>::new());
    let (employees, set_employees) = create_signal(Vec::<Employee>::new());

    let (modal_open, set_modal_open) = create_signal(false);
    let (editing_id, set_editing_id) = create_signal(None::<i64>);
    let (title, set_title) = create_signal(String::new());
    let (description, set_description) = create_signal(String::new());
    let (project_sel, set_project_sel) = create_signal(String::new());
    let (employee_sel, set_employee_sel) = create_signal(String::new());
    let (priority, set_priority) = create_signal(Priority::Medium.label().to_string());
    let (start_date, set_start_date) = create_signal(String::new());
    let (due_date, set_due_date) = create_signal(String::new());
    let (saving, set_saving) = create_signal(false);

    let load = move || {
        let project_id = ctx.task_project_filter.get_untracked();
        spawn_local(async move {
            match api::list_tasks(project_id).await {
                Ok(list) => set_rows.set(list),
                Err(_) => notices.error("Failed to load tasks"),
            }
        })
    };

    // Reload whenever the project filter changes (also covers mount).
    create_effect(move |_| {
        let _ = ctx.task_project_filter.get();
        load();
    });

    create_effect(move |_| {
        spawn_local(async move {
            if let Ok(list) = api::list_projects().await {
                set_projects.set(list);
            }
            if let Ok(list) = api::list_employees().await {
                set_employees.set(list);
            }
        });
    });

    let add = move |_| {
        set_editing_id.set(None);
        set_title.set(String::new());
        set_description.set(String::new());
        set_project_sel.set(
            ctx.task_project_filter
                .get_untracked()
                .map(|id| id.to_string())
                .unwrap_or_default(),
        );
        set_employee_sel.set(String::new());
        set_priority.set(Priority::Medium.label().to_string());
        set_start_date.set(String::new());
        set_due_date.set(String::new());
        set_modal_open.set(true);
    };

    let edit = move |id: i64| {
        spawn_local(async move {
            match api::get_task(id).await {
                Ok(t) => {
                    set_editing_id.set(Some(t.task_id));
                    set_title.set(t.task_title);
                    set_description.set(t.task_description.unwrap_or_default());
                    set_project_sel.set(t.project_id.to_string());
                    set_employee_sel.set(t.employee_id.to_string());
                    set_priority.set(t.priority.label().to_string());
                    set_start_date.set(date_input_value(&t.start_date).to_string());
                    set_due_date.set(date_input_value(&t.due_date).to_string());
                    set_modal_open.set(true);
                }
                Err(_) => notices.error("Failed to load the task"),
            }
        })
    };

    let save = move |ev: SubmitEvent| {
        ev.prevent_default();
        if saving.get_untracked() {
            return;
        }
        let (Ok(project_id), Ok(employee_id)) = (
            project_sel.get_untracked().parse::<i64>(),
            employee_sel.get_untracked().parse::<i64>(),
        ) else {
            notices.error("Select a project and an employee");
            return;
        };
        let payload = TaskPayload {
            task_id: editing_id.get_untracked(),
            project_id,
            employee_id,
            task_title: title.get_untracked(),
            task_description: description.get_untracked(),
            priority: Priority::from(priority.get_untracked()),
            start_date: start_date.get_untracked(),
            due_date: due_date.get_untracked(),
        };
        set_saving.set(true);
        spawn_local(async move {
            match api::save_task(&payload).await {
                Ok(result) if result.success => {
                    log_info("ui", "task saved");
                    notices.success(result.message_or("Task saved"));
                    set_modal_open.set(false);
                    load();
                }
                Ok(result) => notices.error(result.message_or("The operation failed")),
                Err(_) => notices.error("An error occurred"),
            }
            set_saving.set(false);
        });
    };

    // Partial update: only the id and the new status go over the wire.
    let complete = move |id: i64| {
        spawn_local(async move {
            match api::update_task_status(id, &Status::Completed).await {
                Ok(result) if result.success => {
                    notices.success(result.message_or("Task status updated"));
                    load();
                }
                Ok(result) => notices.error(result.message_or("The operation failed")),
                Err(_) => notices.error("An error occurred"),
            }
        })
    };

    let remove = move |id: i64| {
        let confirmed = web_sys::window()
            .and_then(|w| w.confirm_with_message("Delete this task?").ok())
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        spawn_local(async move {
            match api::delete_task(id).await {
                Ok(result) if result.success => {
                    notices.success(result.message_or("Task deleted"));
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
                <h2>"Tasks"</h2>
                <div class="view-actions">
                    <select class="project-filter"
                        prop:value=move || {
                            ctx.task_project_filter.get().map(|id| id.to_string()).unwrap_or_default()
                        }
                        on:change=move |ev| {
                            ctx.task_project_filter.set(event_target_value(&ev).parse::<i64>().ok())
                        }
                    >
                        <option value="">"All projects"</option>
                        {move || projects.get().into_iter().map(|p| view! {
                            <option value=p.project_id.to_string()>{p.project_name}</option>
                        }).collect_view()}
                    </select>
                    <input type="text" class="filter-input" placeholder="Filter tasks..."
                        prop:value=move || filter.get()
                        on:input=move |ev| set_filter.set(event_target_value(&ev))
                    />
                    <button class="btn-primary" on:click=add>"+ New Task"</button>
                </div>
            </div>

            <table class="data-table">
                <thead>
                    <tr>
                        <th>"ID"</th>
                        <th>"Title"</th>
                        <th>"Project"</th>
                        <th>"Assignee"</th>
                        <th>"Priority"</th>
                        <th>"Status"</th>
                        <th>"Due"</th>
                        <th>"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        let rows = rows.get();
                        if rows.is_empty() {
                            view! {
                                <tr>
                                    <td colspan="8" class="empty-state">"No tasks yet"</td>
                                </tr>
                            }.into_view()
                        } else {
                            rows.into_iter().map(|t| {
                                let row_text = format!(
                                    "{} {} {} {} {} {}",
                                    t.task_id,
                                    t.task_title,
                                    t.project_name,
                                    t.employee_name,
                                    t.priority.label(),
                                    t.status.label(),
                                );
                                let id = t.task_id;
                                view! {
                                    <tr class:hidden=move || !matches_filter(&filter.get(), &row_text)>
                                        <td><strong>"#" {t.task_id}</strong></td>
                                        <td><strong>{t.task_title.clone()}</strong></td>
                                        <td>{t.project_name.clone()}</td>
                                        <td>{t.employee_name.clone()}</td>
                                        <td><PriorityBadge priority=t.priority.clone() /></td>
                                        <td><StatusBadge status=t.status.clone() /></td>
                                        <td>{format_date(Some(&t.due_date))}</td>
                                        <td>
                                            <button class="btn-success btn-sm" title="Mark completed"
                                                on:click=move |_| complete(id)>"✓"</button>
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
                    let title = if editing_id.get().is_some() { "Edit Task" } else { "New Task" };
                    title.to_string()
                })
                on_close=move || set_modal_open.set(false)
            >
                <form on:submit=save>
                    <div class="form-group">
                        <label>"Title"</label>
                        <input type="text" required
                            prop:value=move || title.get()
                            on:input=move |ev| set_title.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="form-group">
                        <label>"Description"</label>
                        <textarea
                            prop:value=move || description.get()
                            on:input=move |ev| set_description.set(event_target_value(&ev))
                        ></textarea>
                    </div>
                    <div class="form-row">
                        <div class="form-group">
                            <label>"Project"</label>
                            <select required
                                prop:value=move || project_sel.get()
                                on:change=move |ev| set_project_sel.set(event_target_value(&ev))
                            >
                                <option value="">"Select..."</option>
                                {move || projects.get().into_iter().map(|p| view! {
                                    <option value=p.project_id.to_string()>{p.project_name}</option>
                                }).collect_view()}
                            </select>
                        </div>
                        <div class="form-group">
                            <label>"Assignee"</label>
                            <select required
                                prop:value=move || employee_sel.get()
                                on:change=move |ev| set_employee_sel.set(event_target_value(&ev))
                            >
                                <option value="">"Select..."</option>
                                {move || employees.get().into_iter().map(|e| view! {
                                    <option value=e.employee_id.to_string()>{e.full_name()}</option>
                                }).collect_view()}
                            </select>
                        </div>
                    </div>
                    <div class="form-group">
                        <label>"Priority"</label>
                        <select
                            prop:value=move || priority.get()
                            on:change=move |ev| set_priority.set(event_target_value(&ev))
                        >
                            <option value="High">"High"</option>
                            <option value="Medium">"Medium"</option>
                            <option value="Low">"Low"</option>
                        </select>
                    </div>
                    <div class="form-row">
                        <div class="form-group">
                            <label>"Start date"</label>
                            <input type="date" required
                                prop:value=move || start_date.get()
                                on:input=move |ev| set_start_date.set(event_target_value(&ev))
                            />
                        </div>
                        <div class="form-group">
                            <label>"Due date"</label>
                            <input type="date" required
                                prop:value=move || due_date.get()
                                on:input=move |ev| set_due_date.set(event_target_value(&ev))
                            />
                        </div>
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
