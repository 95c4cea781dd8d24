//! Carousel List View
//!
//! Registration page body: header with the registration form, the sortable
//! table of entries and the success notice.
//!
//! The list is a snapshot of the last applied fetch. Create, edit and delete
//! never patch it locally; their collaborators call back and the list
//! re-fetches the whole collection.

use carousel_list::{
    default_columns, CarouselItem, CarouselSource, ColumnDescriptor, ColumnKind, ListState,
    ListViewConfig, Operation, Refresh, RefreshTickets,
};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::column_header::width_style;
use crate::components::{ColumnHeader, ConfirmationDialog, EditForm, RegistrationForm, SuccessMessage};
use crate::context::use_app_context;

#[component]
pub fn CarouselListView(config: ListViewConfig) -> impl IntoView {
    let ctx = use_app_context();
    let state = RwSignal::new(ListState::new(config));
    // Outside the signal: taking a ticket must not re-render the table.
    let tickets = StoredValue::new(RefreshTickets::default());

    // Issue a fetch and fold its result back in. Results from older fetches
    // are dropped by the state; a disposed view just ignores the result.
    let refresh = move |kind: Refresh| {
        let Some(ticket) = tickets.try_update_value(|t| t.issue()) else {
            return;
        };
        let api = ctx.api();
        spawn_local(async move {
            let result = api.list().await;
            if let Some(outcome) = state.try_update(|s| s.apply(ticket, kind, result)) {
                log::debug!("[ListView] Refresh finished: {:?}", outcome);
            }
        });
    };

    // Initial load
    Effect::new(move |_| refresh(Refresh::Mount));

    // Collaborator callbacks
    let update_list_after_deletion = Callback::new(move |deleted_id: i64| {
        refresh(Refresh::Deletion(deleted_id));
    });
    let update_list_after_edit = Callback::new(move |()| {
        let r = state.with_untracked(|s| Refresh::for_operation(Operation::Edit, s.config()));
        refresh(r);
    });
    let update_list_after_register = Callback::new(move |()| {
        let r = state.with_untracked(|s| Refresh::for_operation(Operation::Create, s.config()));
        refresh(r);
    });

    let on_header_click = Callback::new(move |column_key: &'static str| {
        state.update(|s| {
            s.on_column_header_click(column_key);
        });
    });
    let dismiss = Callback::new(move |()| state.update(|s| s.dismiss_notification()));

    let item_count = move || state.with(|s| s.items().len());
    let notice = move || state.with(|s| s.notification().current().map(str::to_string));
    // Cell layout is static; only the header flags change.
    let layout = StoredValue::new(default_columns());

    view! {
        <div class="container">
            <div class="header-form">
                <div><span class="page-title">"Cadastro de imagens"</span></div>
                <div><RegistrationForm on_complete=update_list_after_register /></div>
            </div>

            <div class="table-wrapper">
                <div class="control-wrapper">
                    <span class="sr-only" aria-live="polite">
                        {move || format!("Number of items: {}.", item_count())}
                    </span>
                    <table class="details-list compact">
                        <thead>
                            <tr>
                                <For
                                    each=move || state.with(|s| s.columns().to_vec())
                                    key=|c| (c.key, c.is_sorted, c.is_sorted_descending)
                                    children=move |column| view! {
                                        <ColumnHeader column=column on_click=on_header_click />
                                    }
                                />
                            </tr>
                        </thead>
                        <tbody>
                            <For
                                each=move || state.with(|s| s.items().to_vec())
                                key=|item| item.clone()
                                children=move |item| view! {
                                    <CarouselRow
                                        item=item
                                        columns=layout.get_value()
                                        state=state
                                        on_deleted=update_list_after_deletion
                                        on_edited=update_list_after_edit
                                    />
                                }
                            />
                        </tbody>
                    </table>
                    <Show when=move || state.with(|s| s.is_loaded() && s.items().is_empty())>
                        <p class="empty-list">"Nenhuma imagem cadastrada."</p>
                    </Show>
                </div>
            </div>

            {move || notice().map(|message| view! {
                <SuccessMessage sub_text=message on_close=dismiss />
            })}
        </div>
    }
}

/// One table row. Clicking the row toggles its selection; the action cells
/// keep their clicks to themselves.
#[component]
fn CarouselRow(
    item: CarouselItem,
    columns: Vec<ColumnDescriptor>,
    state: RwSignal<ListState>,
    on_deleted: Callback<i64>,
    on_edited: Callback<()>,
) -> impl IntoView {
    let row_key = item.key.clone();
    let is_selected = {
        let key = row_key.clone();
        move || state.with(|s| s.selection().is_selected(&key))
    };

    let cells = columns
        .iter()
        .map(|column| {
            let style = width_style(column);
            match column.kind {
                ColumnKind::Data(field) => view! {
                    <td class="details-cell" style=style>{field.display(&item)}</td>
                }
                .into_any(),
                ColumnKind::DeleteAction => view! {
                    <td class="details-cell action-cell" style=style on:click=|ev| ev.stop_propagation()>
                        <ConfirmationDialog item_id=item.id on_complete=on_deleted />
                    </td>
                }
                .into_any(),
                ColumnKind::EditAction => view! {
                    <td class="details-cell action-cell" style=style on:click=|ev| ev.stop_propagation()>
                        <EditForm item=item.clone() on_complete=on_edited />
                    </td>
                }
                .into_any(),
            }
        })
        .collect_view();

    view! {
        <tr
            class="details-row"
            class:selected=is_selected
            on:click=move |_| state.update(|s| s.toggle_selection(&row_key))
        >
            {cells}
        </tr>
    }
}
