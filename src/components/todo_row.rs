//! Todo Row Component
//!
//! A single todo: completion checkbox, title input, delete confirmation.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use remote_collection::Todo;

use crate::components::DeleteConfirmButton;
use crate::context::AppContext;

/// A single todo row in the list
#[component]
pub fn TodoRow(todo: Todo) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let id = todo.id;
    let completed = todo.completed;
    let title = todo.title.clone();

    let toggle_vm = ctx.vm.clone();
    let title_vm = ctx.vm.clone();
    let delete_vm = ctx.vm.clone();

    view! {
        <li class=move || if completed { "todo-row completed" } else { "todo-row" }>
            // Checkbox
            <input
                type="checkbox"
                checked=completed
                on:change=move |_| {
                    let vm = toggle_vm.clone();
                    spawn_local(async move {
                        if let Err(err) = vm.toggle_completed(id).await {
                            web_sys::console::error_1(&format!("[ROW] Toggle {}: {}", id, err).into());
                        }
                    });
                }
            />

            // Title: uncontrolled, the element keeps the keystrokes; the
            // collection entry only updates when the debounced save fires
            <input
                type="text"
                class="todo-title"
                value=title
                on:input=move |ev| {
                    let target = ev.target().unwrap();
                    let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                    let value = input.value();
                    let vm = title_vm.clone();
                    spawn_local(async move {
                        if let Err(err) = vm.change_title(id, value).await {
                            web_sys::console::error_1(&format!("[ROW] Retitle {}: {}", id, err).into());
                        }
                    });
                }
            />

            // Delete button with inline confirmation
            <DeleteConfirmButton
                button_class="delete-btn"
                on_confirm=Callback::new(move |_| {
                    let vm = delete_vm.clone();
                    spawn_local(async move {
                        if let Err(err) = vm.delete(id).await {
                            web_sys::console::error_1(&format!("[ROW] Delete {}: {}", id, err).into());
                        }
                    });
                })
            />
        </li>
    }
}
