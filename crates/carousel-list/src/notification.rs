//! Notification State
//!
//! The transient notice shown after a refresh that followed a mutation.

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotificationState {
    pub visible: bool,
    pub message: String,
}

impl NotificationState {
    /// Show the notice with a specific message.
    pub fn show(&mut self, message: impl Into<String>) {
        self.visible = true;
        self.message = message.into();
    }

    /// Show the notice again with whatever message it last carried.
    pub fn show_generic(&mut self) {
        self.visible = true;
    }

    /// Hide the notice. The message stays but is not observable until the next show.
    pub fn dismiss(&mut self) {
        self.visible = false;
    }

    /// Message to render, `None` while hidden.
    pub fn current(&self) -> Option<&str> {
        self.visible.then_some(self.message.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_and_dismiss() {
        let mut notice = NotificationState::default();
        assert_eq!(notice.current(), None);

        notice.show("Imagem cadastrada");
        assert_eq!(notice.current(), Some("Imagem cadastrada"));

        notice.dismiss();
        assert!(!notice.visible);
        assert_eq!(notice.current(), None);
        assert_eq!(notice.message, "Imagem cadastrada");
    }

    #[test]
    fn test_dismiss_is_idempotent() {
        let mut notice = NotificationState::default();
        notice.show("x");
        notice.dismiss();
        let after_first = notice.clone();
        notice.dismiss();
        assert_eq!(notice, after_first);
    }

    #[test]
    fn test_generic_keeps_previous_message() {
        let mut notice = NotificationState::default();
        notice.show("Item excluído");
        notice.dismiss();
        notice.show_generic();
        assert_eq!(notice.current(), Some("Item excluído"));
    }

    #[test]
    fn test_generic_before_any_message_is_empty() {
        let mut notice = NotificationState::default();
        notice.show_generic();
        assert_eq!(notice.current(), Some(""));
    }
}
