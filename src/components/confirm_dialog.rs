//! Confirm Dialog Component
//!
//! Modal confirmation with confirm/cancel actions. Shown only while the
//! caller holds a pending target, so the dialog can never appear without one.

use leptos::prelude::*;

/// Modal confirmation dialog
#[component]
pub fn ConfirmDialog(
    #[prop(into)] title: String,
    #[prop(into)] message: String,
    #[prop(into)] confirm_label: String,
    #[prop(into)] on_confirm: Callback<()>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="dialog-overlay">
            <div class="dialog">
                <h3 class="dialog-title">{title}</h3>
                <p class="dialog-message">{message}</p>
                <div class="dialog-actions">
                    <button
                        class="cancel-btn"
                        on:click=move |_| on_cancel.run(())
                    >
                        "Cancel"
                    </button>
                    <button
                        class="confirm-btn danger"
                        on:click=move |_| on_confirm.run(())
                    >
                        {confirm_label}
                    </button>
                </div>
            </div>
        </div>
    }
}
