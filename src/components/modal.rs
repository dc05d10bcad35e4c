//! Modal overlay used by the create/edit forms.

use leptos::*;

/// Renders its children in a centered overlay while `open` is true.
/// Clicking the backdrop or the close button closes it; clicks inside
/// the panel do not propagate out.
#[component]
pub fn Modal<F>(
    open: ReadSignal<bool>,
    #[prop(into)] title: Signal<String>,
    on_close: F,
    children: ChildrenFn,
) -> impl IntoView
where
    F: Fn() + 'static + Clone,
{
    view! {
        {move || {
            let on_close = on_close.clone();
            let children = children.clone();
            open.get().then(move || {
                let on_backdrop = on_close.clone();
                view! {
                    <div class="modal show" on:click=move |_| on_backdrop()>
                        <div class="modal-content" on:click=move |ev| ev.stop_propagation()>
                            <div class="modal-header">
                                <h3>{title.get()}</h3>
                                <button type="button" class="modal-close" on:click=move |_| on_close()>
                                    "✕"
                                </button>
                            </div>
                            {children()}
                        </div>
                    </div>
                }
            })
        }}
    }
}
