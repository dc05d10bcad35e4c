//! Resource views: one list/edit controller per entity.

pub mod employees;
pub mod projects;
pub mod tasks;

pub use employees::EmployeesView;
pub use projects::ProjectsView;
pub use tasks::TasksView;
