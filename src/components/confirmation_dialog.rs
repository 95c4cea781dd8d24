//! Confirmation Dialog Component
//!
//! Row delete trigger with a confirm/cancel dialog.

use carousel_list::CarouselApi;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_app_context;

/// Trash button for one row.
///
/// Confirming deletes the record remotely and then calls `on_complete` with
/// its id, whether or not the delete succeeded.
#[component]
pub fn ConfirmationDialog(
    item_id: i64,
    #[prop(into)] on_complete: Callback<i64>,
) -> impl IntoView {
    let ctx = use_app_context();
    let (confirm_delete, set_confirm_delete) = signal(false);
    let (deleting, set_deleting) = signal(false);

    let confirm = move |ev: web_sys::MouseEvent| {
        ev.stop_propagation();
        set_deleting.set(true);
        let api = ctx.api();
        spawn_local(async move {
            match api.delete(item_id).await {
                Ok(()) => log::info!("[ConfirmationDialog] Deleted item {}", item_id),
                Err(e) => log::error!("[ConfirmationDialog] Error deleting item {}: {}", item_id, e),
            }
            set_deleting.set(false);
            set_confirm_delete.set(false);
            on_complete.run(item_id);
        });
    };

    view! {
        <button
            class="icon-btn delete-btn"
            title="Excluir"
            on:click=move |ev| {
                ev.stop_propagation();
                set_confirm_delete.set(true);
            }
        >
            "🗑"
        </button>
        <Show when=move || confirm_delete.get()>
            <div class="dialog-overlay" on:click=|ev| ev.stop_propagation()>
                <div class="dialog" role="alertdialog" aria-modal="true">
                    <h2 class="dialog-title">"Excluir item"</h2>
                    <p class="dialog-subtext">"Deseja realmente excluir este item?"</p>
                    <div class="dialog-footer">
                        <button class="primary-btn" disabled=move || deleting.get() on:click=confirm>
                            "Excluir"
                        </button>
                        <button
                            class="default-btn"
                            disabled=move || deleting.get()
                            on:click=move |ev| {
                                ev.stop_propagation();
                                set_confirm_delete.set(false);
                            }
                        >
                            "Cancelar"
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
