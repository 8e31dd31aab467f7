//! Todo List Component
//!
//! Renders the collection according to its load state: a loading notice,
//! a retryable failure notice, or the keyed list of rows.

use leptos::prelude::*;
use leptos::task::spawn_local;

use remote_collection::LoadState;

use crate::components::TodoRow;
use crate::context::AppContext;

#[component]
pub fn TodoList() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let state = ctx.vm.state();
    let todos = ctx.vm.todos();
    let retry_vm = ctx.vm.clone();

    view! {
        <div class="todo-list">
            {move || match state.get() {
                LoadState::Uninitialized | LoadState::Loading => {
                    view! { <div class="loading">"Loading..."</div> }.into_any()
                }
                LoadState::Failed(message) => {
                    let vm = retry_vm.clone();
                    view! {
                        <div class="load-error">
                            <span>{format!("Failed to load: {}", message)}</span>
                            <button on:click=move |_| {
                                let vm = vm.clone();
                                spawn_local(async move {
                                    if let Err(err) = vm.load().await {
                                        web_sys::console::error_1(
                                            &format!("[LIST] Retry failed: {}", err).into(),
                                        );
                                    }
                                });
                            }>"Retry"</button>
                        </div>
                    }
                    .into_any()
                }
                LoadState::Ready => {
                    let todos = todos.clone();
                    view! {
                        <ul class="todos">
                            <For
                                each=move || todos.get()
                                // Key on id + completed so a toggle re-renders the row
                                // while a debounced title save does not recreate the
                                // input mid-typing
                                key=|todo| (todo.id, todo.completed)
                                children=move |todo| view! { <TodoRow todo=todo /> }
                            />
                        </ul>
                    }
                    .into_any()
                }
            }}
        </div>
    }
}
