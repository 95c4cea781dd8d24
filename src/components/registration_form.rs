//! Registration Form Component
//!
//! Header button that registers a new carousel entry.

use carousel_list::{CarouselApi, CarouselDraft};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::CarouselItemForm;
use crate::context::use_app_context;

/// Opens an empty form; on save POSTs the entry, closes, then calls
/// `on_complete` whatever the outcome.
#[component]
pub fn RegistrationForm(#[prop(into)] on_complete: Callback<()>) -> impl IntoView {
    let ctx = use_app_context();
    let (open, set_open) = signal(false);
    let (saving, set_saving) = signal(false);

    let save = Callback::new(move |draft: CarouselDraft| {
        set_saving.set(true);
        let api = ctx.api();
        spawn_local(async move {
            match api.create(&draft).await {
                Ok(created) => log::info!("[RegistrationForm] Registered item {}", created.id),
                Err(e) => log::error!("[RegistrationForm] Error registering item: {}", e),
            }
            set_saving.set(false);
            set_open.set(false);
            on_complete.run(());
        });
    });

    view! {
        <button class="primary-btn" on:click=move |_| set_open.set(true)>
            "Nova imagem"
        </button>
        <Show when=move || open.get()>
            <CarouselItemForm
                heading="Cadastrar imagem"
                initial=CarouselDraft::default()
                submitting=saving
                on_submit=save
                on_cancel=move |_| set_open.set(false)
            />
        </Show>
    }
}
