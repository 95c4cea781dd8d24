//! UI Components
//!
//! The carousel list and the form/dialog collaborators around it.

mod carousel_list_view;
mod column_header;
mod confirmation_dialog;
mod edit_form;
mod item_form;
mod registration_form;
mod success_message;

pub use carousel_list_view::CarouselListView;
pub use column_header::ColumnHeader;
pub use confirmation_dialog::ConfirmationDialog;
pub use edit_form::EditForm;
pub use item_form::CarouselItemForm;
pub use registration_form::RegistrationForm;
pub use success_message::SuccessMessage;
