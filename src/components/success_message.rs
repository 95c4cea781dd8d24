//! Success Message Component

use leptos::prelude::*;

/// Notice shown after a refresh that followed a create, edit or delete.
/// An empty `sub_text` renders the title alone.
#[component]
pub fn SuccessMessage(
    #[prop(into)] sub_text: String,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    let body = (!sub_text.is_empty()).then(|| view! { <p class="dialog-subtext">{sub_text}</p> });

    view! {
        <div class="dialog-overlay">
            <div class="dialog" role="dialog" aria-modal="true">
                <h2 class="dialog-title">"Sucesso"</h2>
                {body}
                <div class="dialog-footer">
                    <button class="primary-btn" on:click=move |_| on_close.run(())>
                        "OK"
                    </button>
                </div>
            </div>
        </div>
    }
}
