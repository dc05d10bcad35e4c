use leptos::*;

mod api;
mod components;
mod models;
mod utils;
mod views;

use components::{provide_notices, NoticeArea};
use utils::log_trace::log_info;
use views::{EmployeesView, ProjectsView, TasksView};

// ============================================
// App shell (tab navigation)
// ============================================

#[derive(Clone, Copy, PartialEq)]
pub enum Tab {
    Projects,
    Tasks,
    Employees,
}

/// Cross-view state: the active tab plus the project id the tasks view
/// is filtered to, so a project row can jump straight to its tasks.
#[derive(Clone, Copy)]
pub struct AppContext {
    pub tab: RwSignal<Tab>,
    pub task_project_filter: RwSignal<Option<i64>>,
}

#[component]
fn App() -> impl IntoView {
    provide_notices();
    let ctx = AppContext {
        tab: create_rw_signal(Tab::Projects),
        task_project_filter: create_rw_signal(None),
    };
    provide_context(ctx);

    view! {
        <div class="app">
            <header class="app-header">
                <h1>"Project Tracker"</h1>
                <nav class="tabs">
                    <button
                        class=move || if ctx.tab.get() == Tab::Projects { "active" } else { "" }
                        on:click=move |_| ctx.tab.set(Tab::Projects)
                    >
                        "Projects"
                    </button>
                    <button
                        class=move || if ctx.tab.get() == Tab::Tasks { "active" } else { "" }
                        on:click=move |_| ctx.tab.set(Tab::Tasks)
                    >
                        "Tasks"
                    </button>
                    <button
                        class=move || if ctx.tab.get() == Tab::Employees { "active" } else { "" }
                        on:click=move |_| ctx.tab.set(Tab::Employees)
                    >
                        "Employees"
                    </button>
                </nav>
            </header>

            <main class="main-content">
                <NoticeArea />
                {move || match ctx.tab.get() {
                    Tab::Projects => view! { <ProjectsView /> }.into_view(),
                    Tab::Tasks => view! { <TasksView /> }.into_view(),
                    Tab::Employees => view! { <EmployeesView /> }.into_view(),
                }}
            </main>
        </div>
    }
}

fn main() {
    console_error_panic_hook::set_once();
    log_info("ui", "application started");
    mount_to_body(App);
}
