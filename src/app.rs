//! Todo Frontend App
//!
//! Main application component: builds the view-model, runs the one-shot
//! initial load, and lays out toolbar, list, and count footer.

use leptos::prelude::*;
use leptos::task::spawn_local;

use remote_collection::{HttpApi, ListViewModel};

use crate::components::{TodoList, Toolbar};
use crate::context::AppContext;

/// Base address of the remote collection service
const BASE_URL: &str = "https://jsonplaceholder.typicode.com";

#[component]
pub fn App() -> impl IntoView {
    let vm = ListViewModel::new(HttpApi::new(BASE_URL));
    let todos = vm.todos();

    // Provide the view-model to all children
    provide_context(AppContext::new(vm.clone()));

    // Initial load, exactly once; a failed load is retried from the list view
    Effect::new(move |_| {
        let vm = vm.clone();
        spawn_local(async move {
            match vm.load().await {
                Ok(count) => {
                    web_sys::console::log_1(&format!("[APP] Loaded {} todos", count).into())
                }
                Err(err) => {
                    web_sys::console::error_1(&format!("[APP] Load failed: {}", err).into())
                }
            }
        });
    });

    view! {
        <div class="app-layout">
            <main class="main-content">
                <h1>"Todos"</h1>

                <Toolbar />

                <TodoList />

                <p class="item-count">{move || format!("{} todos", todos.get().len())}</p>
            </main>
        </div>
    }
}
