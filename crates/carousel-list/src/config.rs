//! List View Configuration
//!
//! Everything that used to differ between the two copies of the list page,
//! gathered into one value.

/// Records kept after the mount fetch on the registration page.
pub const DEFAULT_MAX_ITEMS: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionMode {
    #[default]
    None,
    Single,
    Multiple,
}

/// Collaborator operation that ends in a refresh.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Create,
    Edit,
    Delete,
}

/// Notice text shown after each operation's refresh.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageProvider {
    pub created: String,
    pub edited: String,
    pub deleted: String,
}

impl Default for MessageProvider {
    fn default() -> Self {
        Self {
            created: "Imagem cadastrada".to_string(),
            edited: "Imagem editada".to_string(),
            deleted: "Item excluído".to_string(),
        }
    }
}

impl MessageProvider {
    pub fn message_for(&self, op: Operation) -> &str {
        match op {
            Operation::Create => &self.created,
            Operation::Edit => &self.edited,
            Operation::Delete => &self.deleted,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ListViewConfig {
    /// Cap applied to the mount fetch, after sorting.
    pub max_items: Option<usize>,
    /// Also cap the post-create/edit/delete refreshes.
    pub cap_refreshes: bool,
    pub selection_mode: SelectionMode,
    pub messages: MessageProvider,
}

impl ListViewConfig {
    /// The image registration page: first 20 by order, multi-select rows.
    pub fn registration() -> Self {
        Self {
            max_items: Some(DEFAULT_MAX_ITEMS),
            cap_refreshes: false,
            selection_mode: SelectionMode::Multiple,
            messages: MessageProvider::default(),
        }
    }
}
