//! Carousel Item Form Component
//!
//! Modal form shared by registration and edit.

use carousel_list::CarouselDraft;
use leptos::prelude::*;

/// Order field text to a number. Anything unparsable becomes 0; there is no validation.
fn parse_order(text: &str) -> i64 {
    text.trim().parse().unwrap_or_default()
}

/// Modal with the five editable fields, prefilled from `initial`.
#[component]
pub fn CarouselItemForm(
    #[prop(into)] heading: String,
    initial: CarouselDraft,
    #[prop(into)] submitting: Signal<bool>,
    #[prop(into)] on_submit: Callback<CarouselDraft>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    let order = RwSignal::new(initial.order.to_string());
    let title = RwSignal::new(initial.title);
    let description = RwSignal::new(initial.description);
    let image = RwSignal::new(initial.image);
    let link = RwSignal::new(initial.link);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        on_submit.run(CarouselDraft {
            order: parse_order(&order.get()),
            title: title.get(),
            description: description.get(),
            image: image.get(),
            link: link.get(),
        });
    };

    let text_fields = [
        ("Título", title),
        ("Descrição", description),
        ("URL Arquivo", image),
        ("URL Direcionamento", link),
    ];

    view! {
        <div class="dialog-overlay" on:click=|ev| ev.stop_propagation()>
            <form class="dialog item-form" on:submit=submit>
                <h2 class="dialog-title">{heading}</h2>
                <label class="form-field">
                    <span>"Ordem"</span>
                    <input
                        type="number"
                        prop:value=move || order.get()
                        on:input=move |ev| order.set(event_target_value(&ev))
                    />
                </label>
                {text_fields
                    .into_iter()
                    .map(|(label, field)| {
                        view! {
                            <label class="form-field">
                                <span>{label}</span>
                                <input
                                    type="text"
                                    prop:value=move || field.get()
                                    on:input=move |ev| field.set(event_target_value(&ev))
                                />
                            </label>
                        }
                    })
                    .collect_view()}
                <div class="dialog-footer">
                    <button type="submit" class="primary-btn" disabled=move || submitting.get()>
                        "Salvar"
                    </button>
                    <button type="button" class="default-btn" on:click=move |_| on_cancel.run(())>
                        "Cancelar"
                    </button>
                </div>
            </form>
        </div>
    }
}
