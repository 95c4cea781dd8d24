//! Column Header Component

use carousel_list::ColumnDescriptor;
use leptos::prelude::*;

/// Inline width bounds for a header or cell of `column`.
pub fn width_style(column: &ColumnDescriptor) -> String {
    format!("min-width: {}px; max-width: {}px;", column.min_width, column.max_width)
}

/// One `<th>`. Only sortable columns react to clicks.
#[component]
pub fn ColumnHeader(
    column: ColumnDescriptor,
    #[prop(into)] on_click: Callback<&'static str>,
) -> impl IntoView {
    let key = column.key;
    let sortable = column.sortable;
    let aria_sort = match (column.is_sorted, column.is_sorted_descending) {
        (false, _) => "none",
        (true, false) => "ascending",
        (true, true) => "descending",
    };
    let indicator = match (column.is_sorted, column.is_sorted_descending) {
        (false, _) => "",
        (true, false) => " ▲",
        (true, true) => " ▼",
    };

    view! {
        <th
            class="column-header"
            class:sortable=sortable
            class:resizable=column.resizable
            style=width_style(&column)
            aria-sort=aria_sort
            title=column.aria_sort_label().unwrap_or_default()
            on:click=move |_| {
                if sortable {
                    on_click.run(key);
                }
            }
        >
            {column.name}
            <span class="sort-indicator">{indicator}</span>
        </th>
    }
}
