//! Transient toast notifications.
//!
//! A context-held queue rendered at the top of the main content area.
//! Each notice dismisses itself after five seconds.

use gloo::timers::future::TimeoutFuture;
use leptos::*;

const NOTICE_TTL_MS: u32 = 5000;

#[derive(Clone, Copy, PartialEq)]
pub enum NoticeKind {
    Success,
    Error,
}

impl NoticeKind {
    fn class(self) -> &'static str {
        match self {
            NoticeKind::Success => "success",
            NoticeKind::Error => "error",
        }
    }

    fn icon(self) -> &'static str {
        match self {
            NoticeKind::Success => "✓",
            NoticeKind::Error => "✗",
        }
    }
}

#[derive(Clone, PartialEq)]
pub struct Notice {
    id: u64,
    kind: NoticeKind,
    text: String,
}

#[derive(Clone, Copy)]
pub struct Notices {
    items: RwSignal<Vec<Notice>>,
    next_id: RwSignal<u64>,
}

impl Notices {
    fn new() -> Self {
        Notices {
            items: create_rw_signal(Vec::new()),
            next_id: create_rw_signal(0),
        }
    }

    fn push(&self, kind: NoticeKind, text: String) {
        let id = self.next_id.get_untracked() + 1;
        self.next_id.set(id);
        self.items
            .update(|items| insert_newest_first(items, Notice { id, kind, text }));

        let items = self.items;
        spawn_local(async move {
            TimeoutFuture::new(NOTICE_TTL_MS).await;
            items.update(|items| items.retain(|n| n.id != id));
        });
    }

    pub fn success(&self, text: impl Into<String>) {
        self.push(NoticeKind::Success, text.into());
    }

    pub fn error(&self, text: impl Into<String>) {
        self.push(NoticeKind::Error, text.into());
    }
}

// The newest notice renders on top, above older ones still on screen.
fn insert_newest_first(items: &mut Vec<Notice>, notice: Notice) {
    items.insert(0, notice);
}

pub fn provide_notices() -> Notices {
    let notices = Notices::new();
    provide_context(notices);
    notices
}

pub fn use_notices() -> Notices {
    use_context::<Notices>().expect("Notices context not found")
}

#[component]
pub fn NoticeArea() -> impl IntoView {
    let notices = use_notices();

    view! {
        <div class="notice-area">
            {move || notices.items.get().into_iter().map(|n| view! {
                <div class=format!("alert {}", n.kind.class())>
                    <span class="alert-icon">{n.kind.icon()}</span>
                    <span>{n.text}</span>
                </div>
            }).collect_view()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlapping_notices_stack_newest_first() {
        let mut items = Vec::new();
        insert_newest_first(
            &mut items,
            Notice {
                id: 1,
                kind: NoticeKind::Success,
                text: "first".to_string(),
            },
        );
        insert_newest_first(
            &mut items,
            Notice {
                id: 2,
                kind: NoticeKind::Error,
                text: "second".to_string(),
            },
        );
        let texts: Vec<&str> = items.iter().map(|n| n.text.as_str()).collect();
        assert_eq!(texts, vec!["second", "first"]);
    }
}
