//! Column Configuration
//!
//! Static description of the list's columns. Only the sort flags change
//! after construction.

use crate::sorter::SortField;

/// Key of the `order` column, the one sorted on mount.
pub const ORDER_COLUMN_KEY: &str = "column1";

/// What a column shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    /// A record field.
    Data(SortField),
    /// Row delete trigger.
    DeleteAction,
    /// Row edit trigger.
    EditAction,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnDescriptor {
    pub key: &'static str,
    pub name: &'static str,
    pub kind: ColumnKind,
    pub min_width: u16,
    pub max_width: u16,
    pub resizable: bool,
    /// Whether a header click re-sorts by this column.
    pub sortable: bool,
    pub is_sorted: bool,
    pub is_sorted_descending: bool,
}

impl ColumnDescriptor {
    fn data(key: &'static str, name: &'static str, field: SortField, min_width: u16, max_width: u16) -> Self {
        Self {
            key,
            name,
            kind: ColumnKind::Data(field),
            min_width,
            max_width,
            resizable: true,
            sortable: false,
            is_sorted: false,
            is_sorted_descending: false,
        }
    }

    fn action(key: &'static str, kind: ColumnKind) -> Self {
        Self {
            key,
            name: "",
            kind,
            min_width: 16,
            max_width: 16,
            resizable: false,
            sortable: false,
            is_sorted: false,
            is_sorted_descending: false,
        }
    }

    /// Field this column sorts and displays, if it is a data column.
    pub fn field(&self) -> Option<SortField> {
        match self.kind {
            ColumnKind::Data(field) => Some(field),
            _ => None,
        }
    }

    pub fn aria_sort_label(&self) -> Option<&'static str> {
        match (self.is_sorted, self.is_sorted_descending) {
            (false, _) => None,
            (true, false) => Some("Sorted A to Z"),
            (true, true) => Some("Sorted Z to A"),
        }
    }
}

/// Five data columns followed by the delete and edit action columns.
pub fn default_columns() -> Vec<ColumnDescriptor> {
    let mut order = ColumnDescriptor::data(ORDER_COLUMN_KEY, "ID", SortField::Order, 20, 40);
    order.sortable = true;
    order.is_sorted = true;

    vec![
        order,
        ColumnDescriptor::data("column2", "Title", SortField::Title, 195, 300),
        ColumnDescriptor::data("column3", "Description", SortField::Description, 195, 300),
        ColumnDescriptor::data("column4", "URL Arquivo", SortField::Image, 195, 300),
        ColumnDescriptor::data("column5", "URL Direcionamento", SortField::Link, 195, 300),
        ColumnDescriptor::action("deleteIcon", ColumnKind::DeleteAction),
        ColumnDescriptor::action("editIcon", ColumnKind::EditAction),
    ]
}

/// Flip the clicked column and clear the others.
///
/// Returns the field and direction to sort by, or `None` when the click is
/// ignored (unknown key or a column without a header handler).
pub(crate) fn toggle_sort(columns: &mut [ColumnDescriptor], key: &str) -> Option<(SortField, bool)> {
    let clicked = columns.iter().position(|c| c.key == key && c.sortable)?;
    let field = columns[clicked].field()?;

    for (index, column) in columns.iter_mut().enumerate() {
        if index == clicked {
            column.is_sorted_descending = !column.is_sorted_descending;
            column.is_sorted = true;
        } else {
            column.is_sorted = false;
            column.is_sorted_descending = true;
        }
    }
    Some((field, columns[clicked].is_sorted_descending))
}

/// Back to the mount-time flags: `order` ascending, everything else unsorted.
pub(crate) fn reset_sort(columns: &mut [ColumnDescriptor]) {
    for column in columns.iter_mut() {
        column.is_sorted = column.key == ORDER_COLUMN_KEY;
        column.is_sorted_descending = false;
    }
}
