//! Remote API
//!
//! The seam between the view-model and the remote collection resource.
//! `TodoApi` abstracts the wire so tests can substitute a scripted mock;
//! `HttpApi` is the real reqwest-backed implementation.

use async_trait::async_trait;
use serde::Serialize;

use crate::error::{CollectionError, CollectionResult};
use crate::todo::{Created, Todo};

// ========================
// Request Bodies
// ========================

/// Partial-update / create body carrying only a title
#[derive(Serialize)]
struct TitleBody<'a> {
    title: &'a str,
}

/// Partial-update body carrying only a completion flag
#[derive(Serialize)]
struct CompletedBody {
    completed: bool,
}

// ========================
// Trait
// ========================

/// Remote operations on the todo collection.
///
/// `?Send` because the browser target's futures are not `Send`; the
/// view-model never leaves the UI thread anyway.
#[async_trait(?Send)]
pub trait TodoApi {
    /// Fetch the full collection
    async fn list(&self) -> CollectionResult<Vec<Todo>>;

    /// Create a todo with the given title; only the assigned id is returned
    async fn create(&self, title: &str) -> CollectionResult<Created>;

    /// Persist a new completion flag
    async fn set_completed(&self, id: u32, completed: bool) -> CollectionResult<()>;

    /// Persist a new title
    async fn set_title(&self, id: u32, title: &str) -> CollectionResult<()>;

    /// Delete a todo
    async fn delete(&self, id: u32) -> CollectionResult<()>;
}

// ========================
// HTTP Implementation
// ========================

impl From<reqwest::Error> for CollectionError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => CollectionError::Remote(status.as_u16()),
            None => CollectionError::Network(err.to_string()),
        }
    }
}

/// reqwest client for a jsonplaceholder-style `/todos` resource
#[derive(Clone)]
pub struct HttpApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpApi {
    /// Client against the resource at `base_url` (no trailing slash needed)
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    fn todos_url(&self) -> String {
        format!("{}/todos", self.base_url)
    }

    fn todo_url(&self, id: u32) -> String {
        format!("{}/todos/{}", self.base_url, id)
    }
}

#[async_trait(?Send)]
impl TodoApi for HttpApi {
    async fn list(&self) -> CollectionResult<Vec<Todo>> {
        let response = self
            .client
            .get(self.todos_url())
            .send()
            .await?
            .error_for_status()?;
        Ok(response.json().await?)
    }

    async fn create(&self, title: &str) -> CollectionResult<Created> {
        let response = self
            .client
            .post(self.todos_url())
            .json(&TitleBody { title })
            .send()
            .await?
            .error_for_status()?;
        Ok(response.json().await?)
    }

    async fn set_completed(&self, id: u32, completed: bool) -> CollectionResult<()> {
        self.client
            .patch(self.todo_url(id))
            .json(&CompletedBody { completed })
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }

    async fn set_title(&self, id: u32, title: &str) -> CollectionResult<()> {
        self.client
            .patch(self.todo_url(id))
            .json(&TitleBody { title })
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }

    async fn delete(&self, id: u32) -> CollectionResult<()> {
        self.client
            .delete(self.todo_url(id))
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}
