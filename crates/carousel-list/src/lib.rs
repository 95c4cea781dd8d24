//! Carousel List
//!
//! Headless state for the carousel administration list: fetching, sorting,
//! capping and re-fetching the remote collection, plus the column, selection
//! and notification bookkeeping the list view renders.
//!
//! Nothing in here depends on a UI framework. The Leptos frontend keeps a
//! [`ListState`] inside a signal and issues [`RefreshTicket`]s from a
//! [`RefreshTickets`] held beside it.

mod columns;
mod config;
mod error;
mod notification;
mod record;
mod selection;
mod sorter;
mod source;
mod state;

#[cfg(test)]
mod controller;
#[cfg(test)]
mod testing;

pub use columns::{default_columns, ColumnDescriptor, ColumnKind};
pub use config::{ListViewConfig, MessageProvider, Operation, SelectionMode};
pub use error::{FetchError, FetchResult};
pub use notification::NotificationState;
pub use record::{CarouselDraft, CarouselItem};
pub use selection::SelectionTracker;
pub use sorter::SortField;
pub use source::{CarouselApi, CarouselSource};
pub use state::{ApplyOutcome, ListState, Refresh, RefreshTicket, RefreshTickets};
