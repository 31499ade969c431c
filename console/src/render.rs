//! Plain-text drawing of the core view model.

use std::fmt::Write;

use jobpost_core::view::{FormMode, FormView, JobRow};
use jobpost_core::AppView;

pub fn render(view: &AppView) -> String {
    let mut out = String::new();
    if let Some(banner) = &view.notification {
        let _ = writeln!(out, "[{}] {}", banner.kind, banner.message);
    }
    match &view.form {
        Some(form) => render_form(&mut out, form),
        None => render_rows(&mut out, &view.rows),
    }
    out
}

fn render_rows(out: &mut String, rows: &[JobRow]) {
    if rows.is_empty() {
        out.push_str("No job posts yet. Use `new` to create one.\n");
        return;
    }
    let _ = writeln!(out, "Job posts ({}):", rows.len());
    for row in rows {
        let _ = write!(out, "  {}  {}", row.id, row.title);
        if !row.company.is_empty() {
            let _ = write!(out, " @ {}", row.company);
        }
        if !row.location.is_empty() {
            let _ = write!(out, " | {}", row.location);
        }
        let _ = writeln!(out, " | deadline: {}", row.deadline);
        if !row.description.is_empty() {
            let _ = writeln!(out, "      {}", row.description);
        }
    }
}

fn render_form(out: &mut String, form: &FormView) {
    out.push_str(match form.mode {
        FormMode::Create => "-- New job post --\n",
        FormMode::Edit => "-- Editing job post --\n",
    });
    for (field, value) in &form.fields {
        if field.is_multiline() {
            let _ = writeln!(out, "  {field}:");
            for line in value.lines() {
                let _ = writeln!(out, "    {line}");
            }
        } else {
            let _ = writeln!(out, "  {field}: {value}");
        }
    }
    out.push_str("(`save` to submit, `cancel` to discard)\n");
}
