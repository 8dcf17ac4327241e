//! Delete Confirm Button Component
//!
//! Inline delete confirmation button with confirm/cancel actions.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use crate::context::AppContext;

/// Slot for the running disarm timer. Starting a new timer drops the old
/// one, and dropping a `Timeout` cancels it.
struct DisarmTimer<H>(Option<H>);

impl<H> DisarmTimer<H> {
    const fn idle() -> Self {
        Self(None)
    }

    fn start(&mut self, handle: H) {
        self.0 = Some(handle);
    }

    fn cancel(&mut self) {
        self.0 = None;
    }

    #[cfg(test)]
    fn is_running(&self) -> bool {
        self.0.is_some()
    }
}

/// Inline delete confirmation button
///
/// Shows a × button initially. When clicked, shows "Delete?" with ✓/✗ buttons.
/// The confirmation disarms itself after the configured delay.
///
/// # Arguments
/// * `button_class` - CSS class for the initial delete button
/// * `on_confirm` - Callback to execute when user confirms deletion
#[component]
pub fn DeleteConfirmButton(
    #[prop(into)] button_class: String,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let (confirm_delete, set_confirm_delete) = signal(false);
    let timer = StoredValue::new_local(DisarmTimer::<Timeout>::idle());

    let arm = move |ev: web_sys::MouseEvent| {
        ev.stop_propagation();
        set_confirm_delete.set(true);
        let handle = Timeout::new(ctx.delete_confirm_ms(), move || {
            let _ = set_confirm_delete.try_set(false);
        });
        timer.update_value(|t| t.start(handle));
    };

    view! {
        <Show when=move || !confirm_delete.get()>
            <button class=button_class.clone() title="Delete" on:click=arm>
                "×"
            </button>
        </Show>
        <Show when=move || confirm_delete.get()>
            <span class="delete-confirm">
                <span class="delete-confirm-text">"Delete?"</span>
                <button
                    class="confirm-btn"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        timer.update_value(DisarmTimer::cancel);
                        on_confirm.run(());
                    }
                >
                    "✓"
                </button>
                <button
                    class="cancel-btn"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        timer.update_value(DisarmTimer::cancel);
                        set_confirm_delete.set(false);
                    }
                >
                    "✗"
                </button>
            </span>
        </Show>
    }
}
