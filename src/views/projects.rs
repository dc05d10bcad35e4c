//! Projects table and edit modal.

use leptos::*;
use web_sys::SubmitEvent;

use crate::api::{self, ProjectPayload};
use crate::components::{use_notices, Modal, StatusBadge};
use crate::models::{Project, Status};
use crate::utils::log_trace::log_info;
use crate::utils::{date_input_value, format_date, matches_filter};
use crate::{AppContext, Tab};

#[component]
pub fn ProjectsView() -> impl IntoView {
    let notices = use_notices();
    let ctx = use_context::<AppContext>().expect("AppContext not found");

    let (rows, set_rows) = create_signal(Vec::<Project>::new());
    let (filter, set_filter) = create_signal(String::new());

    // Modal form state. An empty editing id means create mode.
    let (modal_open, set_modal_open) = create_signal(false);
    let (editing_id, set_editing_id) = create_signal(None::<i64>);
    let (name, set_name) = create_signal(String::new());
    let (description, set_description) = create_signal(String::new());
    let (start_date, set_start_date) = create_signal(String::new());
    let (end_date, set_end_date) = create_signal(String::new());
    let (status, set_status) = create_signal(Status::Planned.label().to_string());
    let (saving, set_saving) = create_signal(false);

    let load = move || {
        spawn_local(async move {
            match api::list_projects().await {
                Ok(list) => set_rows.set(list),
                Err(_) => notices.error("Failed to load projects"),
            }
        })
    };

    create_effect(move |_| load());

    let add = move |_| {
        set_editing_id.set(None);
        set_name.set(String::new());
        set_description.set(String::new());
        set_start_date.set(String::new());
        set_end_date.set(String::new());
        set_status.set(Status::Planned.label().to_string());
        set_modal_open.set(true);
    };

    let edit = move |id: i64| {
        spawn_local(async move {
            match api::get_project(id).await {
                Ok(p) => {
                    set_editing_id.set(Some(p.project_id));
                    set_name.set(p.project_name);
                    set_description.set(p.description.unwrap_or_default());
                    set_start_date.set(date_input_value(&p.start_date).to_string());
                    set_end_date.set(
                        p.end_date
                            .as_deref()
                            .map(date_input_value)
                            .unwrap_or_default()
                            .to_string(),
                    );
                    set_status.set(p.status.label().to_string());
                    set_modal_open.set(true);
                }
                Err(_) => notices.error("Failed to load the project"),
            }
        })
    };

    let save = move |ev: SubmitEvent| {
        ev.prevent_default();
        if saving.get_untracked() {
            return;
        }
        let end = end_date.get_untracked();
        let payload = ProjectPayload {
            project_id: editing_id.get_untracked(),
            project_name: name.get_untracked(),
            description: description.get_untracked(),
            start_date: start_date.get_untracked(),
            end_date: if end.is_empty() { None } else { Some(end) },
            status: Status::from(status.get_untracked()),
        };
        set_saving.set(true);
        spawn_local(async move {
            match api::save_project(&payload).await {
                Ok(result) if result.success => {
                    log_info("ui", "project saved");
                    notices.success(result.message_or("Project saved"));
                    set_modal_open.set(false);
                    load();
                }
                // Logical failure: keep the modal open for correction.
                Ok(result) => notices.error(result.message_or("The operation failed")),
                Err(_) => notices.error("An error occurred"),
            }
            set_saving.set(false);
        });
    };

    let remove = move |id: i64| {
        let confirmed = web_sys::window()
            .and_then(|w| w.confirm_with_message("Delete this project?").ok())
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        spawn_local(async move {
            match api::delete_project(id).await {
                Ok(result) if result.success => {
                    notices.success(result.message_or("Project deleted"));
                    load();
                }
                Ok(result) => notices.error(result.message_or("Delete failed")),
                Err(_) => notices.error("An error occurred"),
            }
        })
    };

    // Jump to the tasks view filtered to this project.
    let show_tasks = move |id: i64| {
        ctx.task_project_filter.set(Some(id));
        ctx.tab.set(Tab::Tasks);
    };

    view! {
        <div class="resource-view">
            <div class="view-header">
                <h2>"Projects"</h2>
                <div class="view-actions">
                    <input type="text" class="filter-input" placeholder="Filter projects..."
                        prop:value=move || filter.get()
                        on:input=move |ev| set_filter.set(event_target_value(&ev))
                    />
                    <button class="btn-primary" on:click=add>"+ New Project"</button>
                </div>
            </div>

            <table class="data-table">
                <thead>
                    <tr>
                        <th>"ID"</th>
                        <th>"Name"</th>
                        <th>"Description"</th>
                        <th>"Start"</th>
                        <th>"End"</th>
                        <th>"Status"</th>
                        <th>"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        let rows = rows.get();
                        if rows.is_empty() {
                            view! {
                                <tr>
                                    <td colspan="7" class="empty-state">"No projects yet"</td>
                                </tr>
                            }.into_view()
                        } else {
                            rows.into_iter().map(|p| {
                                let row_text = format!(
                                    "{} {} {} {}",
                                    p.project_id,
                                    p.project_name,
                                    p.description.clone().unwrap_or_default(),
                                    p.status.label(),
                                );
                                let id = p.project_id;
                                view! {
                                    <tr class:hidden=move || !matches_filter(&filter.get(), &row_text)>
                                        <td><strong>{p.project_id}</strong></td>
                                        <td><strong>{p.project_name.clone()}</strong></td>
                                        <td>{p.description.clone().unwrap_or_else(|| "-".to_string())}</td>
                                        <td>{format_date(Some(&p.start_date))}</td>
                                        <td>{format_date(p.end_date.as_deref())}</td>
                                        <td><StatusBadge status=p.status.clone() /></td>
                                        <td>
                                            <button class="btn-primary btn-sm" on:click=move |_| show_tasks(id)>"Tasks"</button>
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
                    let title = if editing_id.get().is_some() { "Edit Project" } else { "New Project" };
                    title.to_string()
                })
                on_close=move || set_modal_open.set(false)
            >
                <form on:submit=save>
                    <div class="form-group">
                        <label>"Name"</label>
                        <input type="text" required
                            prop:value=move || name.get()
                            on:input=move |ev| set_name.set(event_target_value(&ev))
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
                            <label>"Start date"</label>
                            <input type="date" required
                                prop:value=move || start_date.get()
                                on:input=move |ev| set_start_date.set(event_target_value(&ev))
                            />
                        </div>
                        <div class="form-group">
                            <label>"End date"</label>
                            <input type="date"
                                prop:value=move || end_date.get()
                                on:input=move |ev| set_end_date.set(event_target_value(&ev))
                            />
                        </div>
                    </div>
                    <div class="form-group">
                        <label>"Status"</label>
                        <select
                            prop:value=move || status.get()
                            on:change=move |ev| set_status.set(event_target_value(&ev))
                        >
                            <option value="Active">"Active"</option>
                            <option value="In-Progress">"In-Progress"</option>
                            <option value="Completed">"Completed"</option>
                            <option value="Planned">"Planned"</option>
                        </select>
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
