//! Shared UI components.

pub mod badge;
pub mod modal;
pub mod notices;

pub use badge::{PriorityBadge, StatusBadge};
pub use modal::Modal;
pub use notices::{provide_notices, use_notices, NoticeArea, Notices};
