//! Edit Form Component

use carousel_list::{CarouselApi, CarouselDraft, CarouselItem};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::CarouselItemForm;
use crate::context::use_app_context;

/// Row edit trigger. Saves with a PUT, then calls `on_complete` either way.
#[component]
pub fn EditForm(item: CarouselItem, #[prop(into)] on_complete: Callback<()>) -> impl IntoView {
    let ctx = use_app_context();
    let (open, set_open) = signal(false);
    let (saving, set_saving) = signal(false);
    let item_id = item.id;
    let initial = item.to_draft();

    let save = Callback::new(move |draft: CarouselDraft| {
        set_saving.set(true);
        let api = ctx.api();
        spawn_local(async move {
            if let Err(e) = api.update(item_id, &draft).await {
                log::error!("[EditForm] Error updating item {}: {}", item_id, e);
            }
            set_saving.set(false);
            set_open.set(false);
            on_complete.run(());
        });
    });

    view! {
        <button
            class="icon-btn edit-btn"
            title="Editar"
            on:click=move |ev| {
                ev.stop_propagation();
                set_open.set(true);
            }
        >
            "✎"
        </button>
        <Show when=move || open.get()>
            <CarouselItemForm
                heading="Editar imagem"
                initial=initial.clone()
                submitting=saving
                on_submit=save
                on_cancel=move |_| set_open.set(false)
            />
        </Show>
    }
}
