//! Sorter
//!
//! Ordering helpers for the held collection.

use std::cmp::Ordering;

use crate::record::CarouselItem;

/// Data field a column can sort by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortField {
    Order,
    Title,
    Description,
    Image,
    Link,
}

impl SortField {
    /// Compare two records on this field, ascending.
    pub fn compare(self, a: &CarouselItem, b: &CarouselItem) -> Ordering {
        match self {
            SortField::Order => a.order.cmp(&b.order),
            SortField::Title => a.title.cmp(&b.title),
            SortField::Description => a.description.cmp(&b.description),
            SortField::Image => a.image.cmp(&b.image),
            SortField::Link => a.link.cmp(&b.link),
        }
    }

    /// Cell text for this field.
    pub fn display(self, item: &CarouselItem) -> String {
        match self {
            SortField::Order => item.order.to_string(),
            SortField::Title => item.title.clone(),
            SortField::Description => item.description.clone(),
            SortField::Image => item.image.clone(),
            SortField::Link => item.link.clone(),
        }
    }
}

/// Return a sorted copy of `items`.
///
/// Equal keys have no defined relative order. The sort is unstable on
/// purpose: callers must not depend on how ties come out.
pub fn copy_and_sort(items: &[CarouselItem], field: SortField, descending: bool) -> Vec<CarouselItem> {
    let mut sorted = items.to_vec();
    sorted.sort_unstable_by(|a, b| {
        if descending {
            field.compare(b, a)
        } else {
            field.compare(a, b)
        }
    });
    sorted
}

/// Ascending by `order`, as every fetch path lays the list out.
pub fn sort_by_order(items: &mut [CarouselItem]) {
    items.sort_by_key(|item| item.order);
}
