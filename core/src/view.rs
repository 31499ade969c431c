//! Plain-data view model rendered from `AppState`.
//!
//! A front end draws an `AppView` however it likes; nothing here knows about
//! terminals or markup.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::controller::{AppState, Phase};
use crate::form::FormField;
use crate::notification::Notification;

/// Characters of description shown per list row.
pub const DESCRIPTION_PREVIEW_LEN: usize = 150;

const DISPLAY_FORMAT: &str = "%b %-d, %Y, %I:%M %p";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppView {
    pub rows: Vec<JobRow>,
    pub form: Option<FormView>,
    pub notification: Option<Notification>,
    /// Mirrors `AppState::loading`. Controller operations hold `&mut App`
    /// until they finish, so this is only ever true for a renderer that
    /// observes the state from outside the call, such as a UI sharing it
    /// across tasks.
    pub busy: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobRow {
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    pub deadline: String,
    pub description: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormView {
    pub mode: FormMode,
    pub fields: Vec<(FormField, String)>,
}

pub fn render(state: &AppState, notification: &Notification) -> AppView {
    let rows = state
        .job_posts
        .iter()
        .map(|job| JobRow {
            id: job.id.clone(),
            title: job.title.clone(),
            company: job.company.name.clone(),
            location: location_label(&job.location.address, &job.location.location_type),
            deadline: format_date(&job.deadline),
            description: truncate_text(&job.description, DESCRIPTION_PREVIEW_LEN),
        })
        .collect();

    let mode = match state.phase() {
        Phase::Idle => None,
        Phase::Creating => Some(FormMode::Create),
        Phase::Editing => Some(FormMode::Edit),
    };
    let form = mode.map(|mode| FormView {
        mode,
        fields: FormField::ALL
            .into_iter()
            .map(|field| (field, state.form.get(field).to_string()))
            .collect(),
    });

    AppView {
        rows,
        form,
        notification: notification.show.then(|| notification.clone()),
        busy: state.loading,
    }
}

fn location_label(address: &str, location_type: &str) -> String {
    match (address.is_empty(), location_type.is_empty()) {
        (true, true) => String::new(),
        (false, true) => address.to_string(),
        (true, false) => location_type.to_string(),
        (false, false) => format!("{address} ({location_type})"),
    }
}

/// Human-readable form of a date-like string, e.g. `Dec 31, 2024, 11:59 PM`.
///
/// Empty input renders as `N/A`; input that does not parse is returned as is.
pub fn format_date(value: &str) -> String {
    let value = value.trim();
    if value.is_empty() {
        return "N/A".to_string();
    }
    match parse_date(value) {
        Some(dt) => dt.format(DISPLAY_FORMAT).to_string(),
        None => value.to_string(),
    }
}

fn parse_date(value: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.naive_local());
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, fmt) {
            return Some(dt);
        }
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// First `max_chars` characters of `text`, with `...` appended when cut.
pub fn truncate_text(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}
