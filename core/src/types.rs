//! Domain DTOs for the job post API.
//!
//! # Design
//! These types mirror the mock-server's schema but are defined independently.
//! Integration tests catch any schema drift between the two crates.
//!
//! Every array field is `#[serde(default)]`, so a record missing one decodes
//! to an empty `Vec`, never to an error. `JobPost::default()` is the canonical
//! empty form shape.

use serde::{Deserialize, Serialize};

/// Level assigned to a language line that does not name one.
pub const DEFAULT_LANGUAGE_LEVEL: &str = "Beginner";

/// A single job post as stored by the backend.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct JobPost {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    /// Creation timestamp assigned by the backend. Carried through edits
    /// untouched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<String>,
    #[serde(default)]
    pub deadline: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub company: Company,
    #[serde(default)]
    pub location: Location,
    #[serde(default)]
    pub requirements: Vec<Requirement>,
    #[serde(default)]
    pub languages: Vec<Language>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Company {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub benefits: Vec<String>,
    #[serde(default)]
    pub commitments: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Location {
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub location_type: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Requirement {
    #[serde(default)]
    pub name: String,
}

/// A language requirement, e.g. `Rust` at `Advanced`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Language {
    #[serde(default)]
    pub name: String,
    #[serde(default = "default_level")]
    pub level: String,
}

impl Language {
    pub fn new(name: impl Into<String>, level: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            level: level.into(),
        }
    }
}

fn default_level() -> String {
    DEFAULT_LANGUAGE_LEVEL.to_string()
}
