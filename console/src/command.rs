//! Console command grammar.

use jobpost_core::form::UnknownField;
use jobpost_core::FormField;
use thiserror::Error;

pub const HELP: &str = "\
commands:
  list                 reload and show all job posts
  new                  open an empty form
  edit <id>            open the form for a listed job post
  set <field> <value>  set a form field; use \\n for line breaks
  show                 show the open form
  save                 create or update from the open form
  cancel               close the form without saving
  delete <id>          delete a job post (asks first)
  dismiss              hide the notification
  help                 this text
  quit                 exit
fields: title deadline description company company_description address
        location_type benefits commitments requirements languages
multi-line fields take one entry per line; languages are `name,level`";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    List,
    New,
    Edit(String),
    Set(FormField, String),
    Show,
    Save,
    Cancel,
    Delete(String),
    Dismiss,
    Help,
    Quit,
}

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("empty command")]
    Empty,
    #[error("unknown command: {0} (try `help`)")]
    Unknown(String),
    #[error("missing {0}")]
    MissingArgument(&'static str),
    #[error(transparent)]
    Field(#[from] UnknownField),
}

pub fn parse(line: &str) -> Result<Command, CommandError> {
    let line = line.trim();
    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim_start()),
        None => (line, ""),
    };
    let cmd = match verb {
        "" => return Err(CommandError::Empty),
        "list" | "ls" => Command::List,
        "new" => Command::New,
        "edit" => Command::Edit(required(rest, "id")?),
        "set" => {
            let (field, value) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
            if field.is_empty() {
                return Err(CommandError::MissingArgument("field"));
            }
            Command::Set(field.parse()?, unescape(value.trim_start()))
        }
        "show" => Command::Show,
        "save" => Command::Save,
        "cancel" => Command::Cancel,
        "delete" | "rm" => Command::Delete(required(rest, "id")?),
        "dismiss" => Command::Dismiss,
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        other => return Err(CommandError::Unknown(other.to_string())),
    };
    Ok(cmd)
}

fn required(arg: &str, what: &'static str) -> Result<String, CommandError> {
    let arg = arg.trim();
    if arg.is_empty() {
        return Err(CommandError::MissingArgument(what));
    }
    Ok(arg.to_string())
}

/// Expand `\n` to a line break and `\\` to a backslash.
fn unescape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut chars = value.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('\\') => out.push('\\'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_bare_verbs() {
        assert_eq!(parse("list").unwrap(), Command::List);
        assert_eq!(parse("  save  ").unwrap(), Command::Save);
        assert_eq!(parse("q").unwrap(), Command::Quit);
    }

    #[test]
    fn parses_id_arguments() {
        assert_eq!(parse("edit abc-1").unwrap(), Command::Edit("abc-1".to_string()));
        assert_eq!(parse("delete  abc-1 ").unwrap(), Command::Delete("abc-1".to_string()));
        assert!(matches!(parse("edit"), Err(CommandError::MissingArgument("id"))));
    }

    #[test]
    fn set_keeps_inner_spaces_and_expands_newlines() {
        assert_eq!(
            parse("set title Senior Rust  Engineer").unwrap(),
            Command::Set(FormField::Title, "Senior Rust  Engineer".to_string())
        );
        assert_eq!(
            parse(r"set languages Rust,Expert\nGo").unwrap(),
            Command::Set(FormField::Languages, "Rust,Expert\nGo".to_string())
        );
    }

    #[test]
    fn set_without_value_clears() {
        assert_eq!(
            parse("set benefits").unwrap(),
            Command::Set(FormField::Benefits, String::new())
        );
    }

    #[test]
    fn set_rejects_unknown_fields() {
        assert!(matches!(parse("set salary 100"), Err(CommandError::Field(_))));
        assert!(matches!(parse("set"), Err(CommandError::MissingArgument("field"))));
    }

    #[test]
    fn unknown_and_empty() {
        assert!(matches!(parse("   "), Err(CommandError::Empty)));
        assert!(matches!(parse("frobnicate"), Err(CommandError::Unknown(_))));
    }

    #[test]
    fn unescape_edge_cases() {
        assert_eq!(unescape(r"a\\nb"), r"a\nb");
        assert_eq!(unescape(r"tab\t"), r"tab\t");
        assert_eq!(unescape("end\\"), "end\\");
    }
}
