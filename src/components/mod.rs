//! UI Components
//!
//! Leptos components for the note list, forms and error banner.

mod login_form;
mod note_form;
mod note_item;
mod notification_banner;
mod user_bar;

pub use login_form::LoginForm;
pub use note_form::NoteForm;
pub use note_item::NoteItem;
pub use notification_banner::NotificationBanner;
pub use user_bar::UserBar;
