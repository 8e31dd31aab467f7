//! UI Components
//!
//! Reusable Leptos components.

mod delete_confirm_button;
mod todo_list;
mod todo_row;
mod toolbar;

pub use delete_confirm_button::DeleteConfirmButton;
pub use todo_list::TodoList;
pub use todo_row::TodoRow;
pub use toolbar::Toolbar;
