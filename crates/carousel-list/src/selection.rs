//! Row Selection
//!
//! UI bookkeeping only; selection never changes the data.

use crate::config::SelectionMode;
use crate::record::CarouselItem;

/// Selected row keys, in the order they were selected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionTracker {
    mode: SelectionMode,
    selected: Vec<String>,
}

impl SelectionTracker {
    pub fn new(mode: SelectionMode) -> Self {
        Self {
            mode,
            selected: Vec::new(),
        }
    }

    /// Flip one row. In single mode selecting a row drops the previous one.
    pub fn toggle(&mut self, key: &str) {
        match self.mode {
            SelectionMode::None => {}
            SelectionMode::Single => {
                if self.is_selected(key) {
                    self.selected.clear();
                } else {
                    self.selected = vec![key.to_string()];
                }
            }
            SelectionMode::Multiple => {
                if let Some(pos) = self.selected.iter().position(|k| k == key) {
                    self.selected.remove(pos);
                } else {
                    self.selected.push(key.to_string());
                }
            }
        }
    }

    pub fn is_selected(&self, key: &str) -> bool {
        self.selected.iter().any(|k| k == key)
    }

    pub fn selected_keys(&self) -> &[String] {
        &self.selected
    }

    /// Forget keys whose rows are gone after a refresh.
    pub fn retain_present(&mut self, items: &[CarouselItem]) {
        self.selected.retain(|key| items.iter().any(|item| &item.key == key));
    }
}
