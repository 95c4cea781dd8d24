//! List State
//!
//! The list view's held collection plus its column, selection and notice
//! bookkeeping. Fetching happens elsewhere: a caller takes a
//! [`RefreshTicket`] from its [`RefreshTickets`], awaits the source, and
//! hands the result back through [`ListState::apply`]. Issuing a ticket
//! does not touch the state.
//!
//! Every applied fetch replaces the whole collection. Nothing is patched
//! locally.

use log::{debug, error, info};

use crate::columns::{self, default_columns, ColumnDescriptor};
use crate::config::{ListViewConfig, Operation};
use crate::error::FetchResult;
use crate::notification::NotificationState;
use crate::record::CarouselItem;
use crate::selection::SelectionTracker;
use crate::sorter::{copy_and_sort, sort_by_order};

/// Issue number of a fetch. Later fetches get larger tickets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RefreshTicket(u64);

/// Hands out increasing [`RefreshTicket`]s. Kept apart from [`ListState`]
/// so starting a fetch leaves the rendered state alone.
#[derive(Debug, Default)]
pub struct RefreshTickets {
    last: u64,
}

impl RefreshTickets {
    /// Reserve a ticket for a fetch about to be issued.
    pub fn issue(&mut self) -> RefreshTicket {
        self.last += 1;
        RefreshTicket(self.last)
    }
}

/// Why a fetch was issued; decides how its result is applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Refresh {
    /// First load. Silent on failure.
    Mount,
    /// After a delete of this id. The id is filtered out even if the store still returns it.
    Deletion(i64),
    /// After a create or edit, with the notice to show.
    Mutation(String),
}

impl Refresh {
    /// Refresh for a collaborator operation, with its configured message.
    pub fn for_operation(op: Operation, config: &ListViewConfig) -> Self {
        Refresh::Mutation(config.messages.message_for(op).to_string())
    }
}

/// What [`ListState::apply`] did with a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyOutcome {
    /// The collection was replaced.
    Replaced,
    /// The fetch failed; the collection was kept.
    Failed,
    /// A newer fetch was already applied; the result was dropped.
    Stale,
}

#[derive(Debug, Clone)]
pub struct ListState {
    config: ListViewConfig,
    items: Vec<CarouselItem>,
    columns: Vec<ColumnDescriptor>,
    selection: SelectionTracker,
    notification: NotificationState,
    applied_ticket: Option<RefreshTicket>,
}

impl ListState {
    pub fn new(config: ListViewConfig) -> Self {
        let selection = SelectionTracker::new(config.selection_mode);
        Self {
            config,
            items: Vec::new(),
            columns: default_columns(),
            selection,
            notification: NotificationState::default(),
            applied_ticket: None,
        }
    }

    pub fn config(&self) -> &ListViewConfig {
        &self.config
    }

    pub fn items(&self) -> &[CarouselItem] {
        &self.items
    }

    pub fn columns(&self) -> &[ColumnDescriptor] {
        &self.columns
    }

    pub fn selection(&self) -> &SelectionTracker {
        &self.selection
    }

    pub fn notification(&self) -> &NotificationState {
        &self.notification
    }

    /// Whether any fetch has been applied yet.
    pub fn is_loaded(&self) -> bool {
        self.applied_ticket.is_some()
    }

    /// Fold a finished fetch into the state.
    ///
    /// Results older than the last applied fetch are dropped whole, including
    /// their notice, so a slow early response cannot overwrite a newer snapshot.
    pub fn apply(
        &mut self,
        ticket: RefreshTicket,
        refresh: Refresh,
        result: FetchResult<Vec<CarouselItem>>,
    ) -> ApplyOutcome {
        if self.applied_ticket.is_some_and(|applied| ticket < applied) {
            debug!("[ListState] dropping stale {refresh:?} result (ticket {})", ticket.0);
            return ApplyOutcome::Stale;
        }

        let mut items = match result {
            Ok(items) => items,
            Err(err) => {
                error!("[ListState] error fetching carousel data for {refresh:?}: {err}");
                // Mount failures stay silent; post-mutation failures re-show the last notice.
                if refresh != Refresh::Mount {
                    self.notification.show_generic();
                }
                return ApplyOutcome::Failed;
            }
        };

        if let Refresh::Deletion(deleted_id) = refresh {
            items.retain(|item| item.id != deleted_id);
        }
        sort_by_order(&mut items);

        let cap = match refresh {
            Refresh::Mount => self.config.max_items,
            _ if self.config.cap_refreshes => self.config.max_items,
            _ => None,
        };
        if let Some(max) = cap {
            items.truncate(max);
        }

        info!("[ListState] loaded {} carousel items ({refresh:?})", items.len());
        self.items = items;
        self.applied_ticket = Some(ticket);
        columns::reset_sort(&mut self.columns);
        self.selection.retain_present(&self.items);

        match refresh {
            Refresh::Mount => {}
            Refresh::Deletion(_) => {
                let message = self.config.messages.message_for(Operation::Delete).to_string();
                self.notification.show(message);
            }
            Refresh::Mutation(message) => self.notification.show(message),
        }
        ApplyOutcome::Replaced
    }

    /// Header click. Re-sorts the held items in memory, no fetch.
    ///
    /// Returns `false` when the column does not sort.
    pub fn on_column_header_click(&mut self, column_key: &str) -> bool {
        let Some((field, descending)) = columns::toggle_sort(&mut self.columns, column_key) else {
            return false;
        };
        self.items = copy_and_sort(&self.items, field, descending);
        true
    }

    pub fn toggle_selection(&mut self, key: &str) {
        self.selection.toggle(key);
    }

    pub fn dismiss_notification(&mut self) {
        self.notification.dismiss();
    }
}
