//! Application Context
//!
//! Shared view-model handle provided via Leptos Context API.

use remote_collection::{HttpApi, ListViewModel};

/// Concrete view-model type used by the app
pub type TodoVm = ListViewModel<HttpApi>;

/// App-wide handles provided via context
#[derive(Clone)]
pub struct AppContext {
    /// Shared list view-model
    pub vm: TodoVm,
}

impl AppContext {
    pub fn new(vm: TodoVm) -> Self {
        Self { vm }
    }
}
