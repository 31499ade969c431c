//! Application controller: load, edit, save and delete job posts.
//!
//! # Design
//! `App` owns the whole UI state (`AppState`), the API handle, the
//! confirmation seam and the notification banner. Nothing is global: a front
//! end holds one `App`, feeds it input and renders `App::view`.
//!
//! Every operation catches its own failure, logs it and turns it into an
//! error banner, leaving the previous state in place. The list is never
//! patched locally; it is re-read in full after each successful mutation.
//!
//! Operations take `&mut self`, so one controller cannot run two of them at
//! once. `loading` is still tracked for renderers that disable actions while
//! a request is in flight.

use async_trait::async_trait;
use tracing::{debug, error, info};

use crate::client::JobPostApi;
use crate::error::ApiError;
use crate::form::{FormField, FormState};
use crate::http::Transport;
use crate::id::generate_id;
use crate::notification::{Notification, Notifier};
use crate::types::JobPost;
use crate::view::{self, AppView};

pub const DELETE_PROMPT: &str = "Are you sure you want to delete this job post?";

/// Asks the user to approve a destructive action.
#[async_trait]
pub trait Confirm: Send + Sync {
    async fn confirm(&self, prompt: &str) -> bool;
}

/// Which form, if any, is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Creating,
    Editing,
}

#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub job_posts: Vec<JobPost>,
    pub loading: bool,
    pub show_add_form: bool,
    /// The record being edited; `None` while creating or idle.
    pub editing_job: Option<JobPost>,
    pub form: FormState,
}

impl AppState {
    pub fn phase(&self) -> Phase {
        match (self.show_add_form, &self.editing_job) {
            (false, _) => Phase::Idle,
            (true, None) => Phase::Creating,
            (true, Some(_)) => Phase::Editing,
        }
    }
}

pub struct App<T, C> {
    api: JobPostApi<T>,
    confirm: C,
    state: AppState,
    notifier: Notifier,
}

impl<T: Transport, C: Confirm> App<T, C> {
    pub fn new(api: JobPostApi<T>, confirm: C) -> Self {
        Self {
            api,
            confirm,
            state: AppState::default(),
            notifier: Notifier::default(),
        }
    }

    pub fn with_notifier(mut self, notifier: Notifier) -> Self {
        self.notifier = notifier;
        self
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn api(&self) -> &JobPostApi<T> {
        &self.api
    }

    pub fn notification(&self) -> Notification {
        self.notifier.current()
    }

    pub fn view(&self) -> AppView {
        view::render(&self.state, &self.notifier.current())
    }

    /// Initial load.
    pub async fn mount(&mut self) {
        self.load_job_posts().await;
    }

    /// Replace the list with a fresh copy from the backend. On failure the
    /// old list is kept.
    pub async fn load_job_posts(&mut self) {
        self.state.loading = true;
        self.reload().await;
        self.state.loading = false;
    }

    pub fn open_create_form(&mut self) {
        self.state.editing_job = None;
        self.state.form.reset();
        self.state.show_add_form = true;
    }

    pub fn open_edit_form(&mut self, record: &JobPost) {
        self.state.editing_job = Some(record.clone());
        self.state.form.begin_edit(record);
        self.state.show_add_form = true;
    }

    /// Open the edit form for the listed record with `id`. Returns `false`
    /// when no such record is loaded.
    pub fn edit_by_id(&mut self, id: &str) -> bool {
        let Some(record) = self.state.job_posts.iter().find(|job| job.id == id).cloned() else {
            return false;
        };
        self.open_edit_form(&record);
        true
    }

    pub fn handle_input(&mut self, field: FormField, value: impl Into<String>) {
        self.state.form.set(field, value);
    }

    /// Close any open form, discarding its contents.
    pub fn cancel_form(&mut self) {
        self.state.show_add_form = false;
        self.state.editing_job = None;
        self.state.form.reset();
    }

    /// Submit the open form as a create or an update.
    ///
    /// On success the list is reloaded and the form closed. On failure the
    /// form stays open with its contents so the user can retry.
    pub async fn save_job(&mut self) {
        if !self.state.show_add_form {
            debug!("save requested with no open form");
            return;
        }
        self.state.loading = true;
        match self.submit().await {
            Ok(message) => {
                self.notifier.success(message);
                self.reload().await;
                self.cancel_form();
            }
            Err(e) => {
                error!(error = %e, "failed to save job post");
                self.notifier.error(format!("Failed to save job post: {e}"));
            }
        }
        self.state.loading = false;
    }

    /// Delete the record with `id` after the user confirms. A declined
    /// confirmation changes nothing and sends nothing.
    pub async fn delete_job(&mut self, id: &str) {
        if !self.confirm.confirm(DELETE_PROMPT).await {
            debug!(id, "delete declined");
            return;
        }
        self.state.loading = true;
        match self.api.delete(id).await {
            Ok(()) => {
                info!(id, "job post deleted");
                self.notifier.success("Job post deleted successfully!");
                self.reload().await;
            }
            Err(e) => {
                error!(id, error = %e, "failed to delete job post");
                self.notifier.error(format!("Failed to delete job post: {e}"));
            }
        }
        self.state.loading = false;
    }

    pub fn dismiss_notification(&mut self) {
        self.notifier.hide();
    }

    async fn submit(&self) -> Result<&'static str, ApiError> {
        let mut payload = self.state.form.prepare_submission();
        match &self.state.editing_job {
            Some(job) => {
                self.api.update(&job.id, &payload).await?;
                info!(id = %job.id, "job post updated");
                Ok("Job post updated successfully!")
            }
            None => {
                payload.id = generate_id();
                self.api.create(&payload).await?;
                info!(id = %payload.id, "job post created");
                Ok("Job post created successfully!")
            }
        }
    }

    async fn reload(&mut self) {
        match self.api.list_all().await {
            Ok(posts) => {
                debug!(count = posts.len(), "job posts loaded");
                self.state.job_posts = posts;
            }
            Err(e) => {
                error!(error = %e, "failed to load job posts");
                self.notifier.error(format!("Failed to load job posts: {e}"));
            }
        }
    }
}
