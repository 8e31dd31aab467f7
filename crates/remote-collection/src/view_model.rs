//! List View-Model
//!
//! Bridges user intent to immediate local state and eventual remote
//! persistence. The collection lives in a reference-counted signal and is
//! only ever replaced wholesale, so the UI observes optimistic updates the
//! moment they apply, before the matching network call resolves.
//!
//! Update discipline, kept deliberately uneven:
//! - toggle and delete apply locally first, then persist (optimistic)
//! - create and title edits persist first, then apply locally (pessimistic)
//! - title edits are additionally debounced behind a 500 ms quiet window

use std::sync::atomic::{AtomicU32, AtomicU64, Ordering};
use std::sync::Arc;

use leptos::prelude::*;

use crate::api::TodoApi;
use crate::error::{CollectionError, CollectionResult};
use crate::list;
use crate::todo::Todo;

/// Quiet window for title edits
const TITLE_DEBOUNCE_MS: u32 = 500;

/// Load lifecycle of the collection.
///
/// `Ready` is terminal; mutations are only valid there. `Failed` keeps the
/// load retryable instead of hanging the view on a dead fetch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoadState {
    Uninitialized,
    Loading,
    Ready,
    Failed(String),
}

/// Outcome of a debounced title edit
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TitleSave {
    /// The quiet window elapsed; the edit was persisted and applied
    Saved,
    /// A newer edit arrived inside the window; this one did nothing
    Superseded,
}

/// View-model over a remote todo collection.
///
/// Clones share the same state; hand clones to event handlers freely.
#[derive(Clone)]
pub struct ListViewModel<A> {
    api: A,
    state: ArcRwSignal<LoadState>,
    todos: ArcRwSignal<Vec<Todo>>,
    /// Current title-edit generation; a pending edit only fires if it is
    /// still the newest when its quiet window elapses
    title_generation: Arc<AtomicU64>,
    /// Next id for locally fabricated todos, disjoint from server ids
    next_synthetic_id: Arc<AtomicU32>,
}

impl<A: TodoApi> ListViewModel<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            state: ArcRwSignal::new(LoadState::Uninitialized),
            todos: ArcRwSignal::new(Vec::new()),
            title_generation: Arc::new(AtomicU64::new(0)),
            next_synthetic_id: Arc::new(AtomicU32::new(list::SYNTHETIC_ID_BASE)),
        }
    }

    /// Load lifecycle, for state-gated rendering
    pub fn state(&self) -> ArcReadSignal<LoadState> {
        self.state.read_only()
    }

    /// The collection, single source of visual truth
    pub fn todos(&self) -> ArcReadSignal<Vec<Todo>> {
        self.todos.read_only()
    }

    fn ensure_ready(&self) -> CollectionResult<()> {
        match self.state.get_untracked() {
            LoadState::Ready => Ok(()),
            LoadState::Uninitialized => Err(CollectionError::InvalidState("collection not loaded yet")),
            LoadState::Loading => Err(CollectionError::InvalidState("load in progress")),
            LoadState::Failed(_) => Err(CollectionError::InvalidState("load failed; retry the load first")),
        }
    }

    /// Fetch the full collection and replace local state with it, in the
    /// order received. Valid from `Uninitialized` and, as a retry, from
    /// `Failed`; the collection is never re-fetched once `Ready`.
    pub async fn load(&self) -> CollectionResult<usize> {
        match self.state.get_untracked() {
            LoadState::Uninitialized | LoadState::Failed(_) => {}
            LoadState::Loading => return Err(CollectionError::InvalidState("load already in progress")),
            LoadState::Ready => return Err(CollectionError::InvalidState("collection already loaded")),
        }
        self.state.set(LoadState::Loading);

        match self.api.list().await {
            Ok(todos) => {
                let count = todos.len();
                self.todos.set(todos);
                self.state.set(LoadState::Ready);
                Ok(count)
            }
            Err(err) => {
                log::warn!("load failed: {}", err);
                self.state.set(LoadState::Failed(err.to_string()));
                Err(err)
            }
        }
    }

    /// Flip the completion flag of `id` locally, then persist it.
    ///
    /// The local flip is visible before the request is sent and is kept
    /// even if the request fails; the response body is never reconciled.
    pub async fn toggle_completed(&self, id: u32) -> CollectionResult<()> {
        self.ensure_ready()?;
        let (next, completed) = list::toggled(&self.todos.get_untracked(), id)
            .ok_or(CollectionError::NotFound(id))?;
        self.todos.set(next);

        self.api.set_completed(id, completed).await
    }

    /// Create an empty todo on the server, then prepend it locally with
    /// the server-assigned id. Nothing is applied until the request
    /// resolves; a failure adds nothing.
    pub async fn create(&self) -> CollectionResult<Todo> {
        self.ensure_ready()?;
        let created = self.api.create("").await?;

        let todo = Todo::new(created.id, "");
        self.todos
            .set(list::prepended(&self.todos.get_untracked(), todo.clone()));
        Ok(todo)
    }

    /// Debounced title edit.
    ///
    /// Each call supersedes any pending one. The surviving call waits out
    /// the quiet window, then persists the title and applies it locally.
    /// If the todo was removed while the edit was pending this fails with
    /// `NotFound` and never reinserts it.
    pub async fn change_title(&self, id: u32, title: String) -> CollectionResult<TitleSave> {
        self.ensure_ready()?;
        let generation = self.title_generation.fetch_add(1, Ordering::Relaxed) + 1;

        debounce_delay(TITLE_DEBOUNCE_MS).await;
        if self.title_generation.load(Ordering::Relaxed) != generation {
            return Ok(TitleSave::Superseded);
        }

        if !list::contains(&self.todos.get_untracked(), id) {
            return Err(CollectionError::NotFound(id));
        }
        self.api.set_title(id, &title).await?;

        // The todo may have been deleted while the request was in flight
        let next = list::retitled(&self.todos.get_untracked(), id, &title)
            .ok_or(CollectionError::NotFound(id))?;
        self.todos.set(next);
        Ok(TitleSave::Saved)
    }

    /// Remove `id` locally, then issue the delete.
    ///
    /// The removal is optimistic; a failed request surfaces as an error
    /// but the todo is not restored.
    pub async fn delete(&self, id: u32) -> CollectionResult<()> {
        self.ensure_ready()?;
        let next =
            list::without(&self.todos.get_untracked(), id).ok_or(CollectionError::NotFound(id))?;
        self.todos.set(next);

        self.api.delete(id).await
    }

    /// Prepend `count` locally fabricated todos for render stress testing.
    /// Synchronous; issues no network calls. Ids come from a monotone
    /// counter so repeated batches never collide with each other or with
    /// server-assigned ids.
    pub fn bulk_insert_synthetic(&self, count: u32) -> CollectionResult<()> {
        self.ensure_ready()?;
        let first_id = self.next_synthetic_id.fetch_add(count, Ordering::Relaxed);
        let batch = list::synthetic_batch(first_id, count);
        self.todos
            .set(list::prepended_batch(&self.todos.get_untracked(), batch));
        log::debug!("inserted {} synthetic todos from id {}", count, first_id);
        Ok(())
    }
}

async fn debounce_delay(ms: u32) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::TimeoutFuture::new(ms).await;

    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(std::time::Duration::from_millis(u64::from(ms))).await;
}
