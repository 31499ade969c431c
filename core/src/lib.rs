//! Client core for managing job posts against a REST backend.
//!
//! # Overview
//! Lists, creates, edits and deletes job posts. The API client builds
//! `HttpRequest` values and parses `HttpResponse` values without touching the
//! network (host-does-IO pattern); a `Transport` supplied by the front end
//! performs the round trip.
//!
//! # Design
//! - `codec` converts multi-line form text to array fields and back.
//! - `client` splits each operation into `build_*` / `parse_*`; `JobPostApi`
//!   joins them over a `Transport`.
//! - `form` holds the record being edited plus the shadow text of its arrays.
//! - `controller::App` owns all UI state and turns every failure into a
//!   notification instead of an error.
//! - `view` renders state into plain data for whatever draws it.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod codec;
pub mod controller;
pub mod error;
pub mod form;
pub mod http;
pub mod id;
pub mod notification;
pub mod types;
pub mod view;

pub use client::{JobPostApi, JobPostClient};
pub use controller::{App, AppState, Confirm, Phase};
pub use error::{ApiError, TransportError};
pub use form::{FormField, FormState};
pub use http::{HttpMethod, HttpRequest, HttpResponse, Transport};
pub use notification::{Notification, NotificationKind, Notifier};
pub use types::{Company, JobPost, Language, Location, Requirement};
pub use view::AppView;
