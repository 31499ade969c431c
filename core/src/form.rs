//! Editable working copy of a job post.
//!
//! # Design
//! Scalar fields are written straight into `data`. The four array fields are
//! edited as multi-line text instead (the shadow text), and while a form is
//! open that text is the only live copy: `data`'s arrays go stale after
//! `begin_edit` and are overwritten from the text in `prepare_submission`.
//! Input arrives through `set`, which replaces implicit two-way binding with
//! an explicit field/value event.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::codec;
use crate::types::JobPost;

/// Every user-editable field of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Title,
    Deadline,
    Description,
    CompanyName,
    CompanyDescription,
    LocationAddress,
    LocationType,
    Benefits,
    Commitments,
    Requirements,
    Languages,
}

impl FormField {
    pub const ALL: [FormField; 11] = [
        FormField::Title,
        FormField::Deadline,
        FormField::Description,
        FormField::CompanyName,
        FormField::CompanyDescription,
        FormField::LocationAddress,
        FormField::LocationType,
        FormField::Benefits,
        FormField::Commitments,
        FormField::Requirements,
        FormField::Languages,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            FormField::Title => "title",
            FormField::Deadline => "deadline",
            FormField::Description => "description",
            FormField::CompanyName => "company",
            FormField::CompanyDescription => "company_description",
            FormField::LocationAddress => "address",
            FormField::LocationType => "location_type",
            FormField::Benefits => "benefits",
            FormField::Commitments => "commitments",
            FormField::Requirements => "requirements",
            FormField::Languages => "languages",
        }
    }

    /// Whether the field is edited as one-entry-per-line text.
    pub fn is_multiline(&self) -> bool {
        matches!(
            self,
            FormField::Benefits | FormField::Commitments | FormField::Requirements | FormField::Languages
        )
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Error)]
#[error("unknown form field: {0}")]
pub struct UnknownField(pub String);

impl FromStr for FormField {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FormField::ALL
            .into_iter()
            .find(|field| field.name() == s)
            .ok_or_else(|| UnknownField(s.to_string()))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    data: JobPost,
    benefits_text: String,
    commitments_text: String,
    requirements_text: String,
    languages_text: String,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Back to the canonical empty shape with all shadow text cleared.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Load `record` for editing.
    ///
    /// The record is cloned, so edits never reach the list entry it came from.
    pub fn begin_edit(&mut self, record: &JobPost) {
        self.data = record.clone();
        self.benefits_text = codec::join_lines(&self.data.company.benefits);
        self.commitments_text = codec::join_lines(&self.data.company.commitments);
        self.requirements_text = codec::join_requirements(&self.data.requirements);
        self.languages_text = codec::join_languages(&self.data.languages);
    }

    /// The payload to submit: a copy of `data` with its arrays decoded from
    /// the shadow text.
    pub fn prepare_submission(&self) -> JobPost {
        let mut payload = self.data.clone();
        payload.company.benefits = codec::parse_lines(Some(&self.benefits_text));
        payload.company.commitments = codec::parse_lines(Some(&self.commitments_text));
        payload.requirements = codec::parse_requirement_lines(Some(&self.requirements_text));
        payload.languages = codec::parse_language_lines(Some(&self.languages_text));
        payload
    }

    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        let value = value.into();
        match field {
            FormField::Title => self.data.title = value,
            FormField::Deadline => self.data.deadline = value,
            FormField::Description => self.data.description = value,
            FormField::CompanyName => self.data.company.name = value,
            FormField::CompanyDescription => self.data.company.description = value,
            FormField::LocationAddress => self.data.location.address = value,
            FormField::LocationType => self.data.location.location_type = value,
            FormField::Benefits => self.benefits_text = value,
            FormField::Commitments => self.commitments_text = value,
            FormField::Requirements => self.requirements_text = value,
            FormField::Languages => self.languages_text = value,
        }
    }

    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Title => &self.data.title,
            FormField::Deadline => &self.data.deadline,
            FormField::Description => &self.data.description,
            FormField::CompanyName => &self.data.company.name,
            FormField::CompanyDescription => &self.data.company.description,
            FormField::LocationAddress => &self.data.location.address,
            FormField::LocationType => &self.data.location.location_type,
            FormField::Benefits => &self.benefits_text,
            FormField::Commitments => &self.commitments_text,
            FormField::Requirements => &self.requirements_text,
            FormField::Languages => &self.languages_text,
        }
    }

    pub fn data(&self) -> &JobPost {
        &self.data
    }
}
