//! Toolbar Component
//!
//! Create and stress-test actions for the list.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::AppContext;

/// How many synthetic todos the stress-test button inserts
const BULK_INSERT_COUNT: u32 = 10_000;

#[component]
pub fn Toolbar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let create_vm = ctx.vm.clone();
    let bulk_vm = ctx.vm.clone();

    view! {
        <div class="toolbar">
            <button on:click=move |_| {
                let vm = create_vm.clone();
                spawn_local(async move {
                    match vm.create().await {
                        Ok(todo) => {
                            web_sys::console::log_1(&format!("[TOOLBAR] Created todo {}", todo.id).into())
                        }
                        Err(err) => {
                            web_sys::console::error_1(&format!("[TOOLBAR] Create: {}", err).into())
                        }
                    }
                });
            }>"Create New To Do"</button>

            <button on:click=move |_| {
                if let Err(err) = bulk_vm.bulk_insert_synthetic(BULK_INSERT_COUNT) {
                    web_sys::console::error_1(&format!("[TOOLBAR] Bulk insert: {}", err).into());
                }
            }>"Add 10,000 To Dos"</button>
        </div>
    }
}
