//! List Controller
//!
//! Test driver running a [`ListState`] against a [`CarouselSource`] the way
//! the list view does around its signal: ticket, fetch, apply.

use crate::config::{ListViewConfig, Operation};
use crate::source::CarouselSource;
use crate::state::{ApplyOutcome, ListState, Refresh, RefreshTickets};

pub struct ListController<S> {
    source: S,
    state: ListState,
    tickets: RefreshTickets,
}

impl<S: CarouselSource> ListController<S> {
    pub fn new(source: S, config: ListViewConfig) -> Self {
        Self {
            source,
            state: ListState::new(config),
            tickets: RefreshTickets::default(),
        }
    }

    pub fn state(&self) -> &ListState {
        &self.state
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Initial load: sorted by order, capped, no notice.
    pub async fn mount(&mut self) -> ApplyOutcome {
        self.refresh(Refresh::Mount).await
    }

    /// Completion callback of the delete dialog.
    pub async fn after_delete(&mut self, deleted_id: i64) -> ApplyOutcome {
        self.refresh(Refresh::Deletion(deleted_id)).await
    }

    /// Completion callback of the registration and edit forms.
    pub async fn after_mutation(&mut self, message: impl Into<String>) -> ApplyOutcome {
        self.refresh(Refresh::Mutation(message.into())).await
    }

    /// Like [`after_mutation`](Self::after_mutation), with the configured message for `op`.
    ///
    /// `Operation::Delete` only borrows the delete notice here; use
    /// [`after_delete`](Self::after_delete) to filter the id out.
    pub async fn after_operation(&mut self, op: Operation) -> ApplyOutcome {
        let refresh = Refresh::for_operation(op, self.state.config());
        self.refresh(refresh).await
    }

    pub async fn refresh(&mut self, refresh: Refresh) -> ApplyOutcome {
        let ticket = self.tickets.issue();
        let result = self.source.list().await;
        self.state.apply(ticket, refresh, result)
    }

    pub fn on_column_header_click(&mut self, column_key: &str) -> bool {
        self.state.on_column_header_click(column_key)
    }

    pub fn toggle_selection(&mut self, key: &str) {
        self.state.toggle_selection(key);
    }

    pub fn dismiss_notification(&mut self) {
        self.state.dismiss_notification();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::columns::ORDER_COLUMN_KEY;
    use crate::error::FetchError;
    use crate::testing::{item, reversed_items, ScriptedSource};

    fn controller() -> ListController<ScriptedSource> {
        ListController::new(ScriptedSource::new(), ListViewConfig::registration())
    }

    fn orders<S: CarouselSource>(c: &ListController<S>) -> Vec<i64> {
        c.state().items().iter().map(|i| i.order).collect()
    }

    #[tokio::test]
    async fn test_mount_shows_first_twenty_by_order() {
        let mut c = controller();
        c.source().push_ok(reversed_items(30));

        assert_eq!(c.mount().await, ApplyOutcome::Replaced);

        assert_eq!(c.state().items().len(), 20);
        assert_eq!(orders(&c), (0..20).collect::<Vec<i64>>());
        assert!(!c.state().notification().visible);
    }

    #[tokio::test]
    async fn test_header_click_makes_no_request() {
        let mut c = controller();
        c.source().push_ok(vec![item(1, 1), item(2, 3), item(3, 2)]);
        c.mount().await;
        assert_eq!(c.source().calls(), 1);

        assert!(c.on_column_header_click(ORDER_COLUMN_KEY));

        assert_eq!(orders(&c), vec![3, 2, 1]);
        assert_eq!(c.source().calls(), 1);
    }

    #[tokio::test]
    async fn test_delete_callback_removes_id() {
        let mut c = controller();
        c.source().push_ok(vec![item(1, 0), item(2, 1), item(3, 2)]);
        c.mount().await;

        // Remote has caught up.
        c.source().push_ok(vec![item(1, 0), item(3, 2)]);
        c.after_delete(2).await;
        assert!(c.state().items().iter().all(|i| i.id != 2));

        // Remote lags and still returns the deleted record.
        c.source().push_ok(vec![item(1, 0), item(3, 2)]);
        c.after_delete(3).await;
        assert!(c.state().items().iter().all(|i| i.id != 3));
        assert_eq!(c.state().items().len(), 1);
        assert_eq!(c.state().notification().current(), Some("Item excluído"));
    }

    #[tokio::test]
    async fn test_mutation_callback_sets_exact_message() {
        let mut c = controller();
        c.source().push_ok(vec![item(1, 0)]);
        c.mount().await;

        c.source().push_ok(vec![item(1, 0), item(2, 1)]);
        c.after_mutation("Imagem cadastrada").await;

        let notice = c.state().notification();
        assert!(notice.visible);
        assert_eq!(notice.message, "Imagem cadastrada");
        assert_eq!(c.state().items().len(), 2);
    }

    #[tokio::test]
    async fn test_mutation_failure_keeps_items() {
        let mut c = controller();
        c.source().push_ok(vec![item(1, 0), item(2, 1)]);
        c.mount().await;
        let before = c.state().items().to_vec();

        c.source().push_err(FetchError::Status(503));
        assert_eq!(c.after_mutation("Imagem editada").await, ApplyOutcome::Failed);

        assert_eq!(c.state().items(), before.as_slice());
        assert!(c.state().notification().visible);
    }

    #[tokio::test]
    async fn test_failed_refresh_reshows_last_message() {
        let mut c = controller();
        c.source().push_ok(vec![item(1, 0)]);
        c.mount().await;
        c.source().push_ok(vec![item(1, 0), item(2, 1)]);
        c.after_mutation("Imagem cadastrada").await;
        c.dismiss_notification();

        c.source().push_err(FetchError::Status(500));
        assert_eq!(c.after_delete(1).await, ApplyOutcome::Failed);

        let notice = c.state().notification();
        assert!(notice.visible);
        assert_eq!(notice.current(), Some("Imagem cadastrada"));
        assert_eq!(c.state().items().len(), 2);
    }

    #[tokio::test]
    async fn test_mount_failure_leaves_list_empty() {
        let mut c = controller();
        c.source().push_err(FetchError::Request("unreachable".into()));

        assert_eq!(c.mount().await, ApplyOutcome::Failed);
        assert!(c.state().items().is_empty());
        assert!(!c.state().notification().visible);
    }

    #[tokio::test]
    async fn test_after_operation_uses_configured_message() {
        let mut c = controller();
        c.source().push_ok(vec![item(1, 0)]);

        c.after_operation(Operation::Edit).await;

        assert_eq!(c.state().notification().current(), Some("Imagem editada"));
    }

    #[tokio::test]
    async fn test_dismiss_twice() {
        let mut c = controller();
        c.source().push_ok(vec![]);
        c.after_mutation("ok").await;

        c.dismiss_notification();
        assert!(!c.state().notification().visible);
        c.dismiss_notification();
        assert!(!c.state().notification().visible);
        assert_eq!(c.state().notification().message, "ok");
    }
}
