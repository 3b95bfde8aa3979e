//! Text command parsing and dispatch.
//!
//! Input is case-folded as a whole before parsing, so names are stored and
//! looked up in lowercase.

mod handler;

pub use handler::{CommandHandler, Reply};

use crate::error::{BookError, BookResult};

/// A parsed user command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Hello,
    Add { name: String, phone: String },
    Change { name: String, phone: String },
    Phone { name: String },
    Search { query: String },
    Show,
    Birthday { name: String, date: Option<String> },
    Delete { name: String },
    Rename { old: String, new: String },
    Exit,
    /// Empty input
    Empty,
    /// Unrecognized first word
    Unknown(String),
}

impl Command {
    /// Parse one line of input.
    ///
    /// Known commands with the wrong number of arguments produce a
    /// [`BookError::Usage`] naming the expected form.
    pub fn parse(input: &str) -> BookResult<Self> {
        let input = input.trim().to_lowercase();
        let words: Vec<&str> = input.split_whitespace().collect();

        let Some((&first, args)) = words.split_first() else {
            return Ok(Self::Empty);
        };

        let command = match first {
            "hello" => Self::Hello,
            "add" => {
                let [name, phone] = exact::<2>(args, "add <name> <phone>")?;
                Self::Add { name, phone }
            }
            "change" => {
                let [name, phone] = exact::<2>(args, "change <name> <phone>")?;
                Self::Change { name, phone }
            }
            "phone" => {
                let [name] = exact::<1>(args, "phone <name>")?;
                Self::Phone { name }
            }
            "search" => {
                let query = input
                    .split_once(char::is_whitespace)
                    .map(|(_, rest)| rest.trim())
                    .unwrap_or_default();
                if query.is_empty() {
                    return Err(usage("search <query>"));
                }
                Self::Search {
                    query: query.to_string(),
                }
            }
            "show" => Self::Show,
            "birthday" => match args {
                [name] => Self::Birthday {
                    name: name.to_string(),
                    date: None,
                },
                [name, date] => Self::Birthday {
                    name: name.to_string(),
                    date: Some(date.to_string()),
                },
                _ => return Err(usage("birthday <name> [YYYY-MM-DD]")),
            },
            "delete" => {
                let [name] = exact::<1>(args, "delete <name>")?;
                Self::Delete { name }
            }
            "rename" => {
                let [old, new] = exact::<2>(args, "rename <old> <new>")?;
                Self::Rename { old, new }
            }
            "close" | "exit" | "good" | "bye" => Self::Exit,
            other => Self::Unknown(other.to_string()),
        };

        Ok(command)
    }
}

fn usage(form: &str) -> BookError {
    BookError::Usage(format!(
        "Invalid command. Please try again. Use '{}'",
        form
    ))
}

fn exact<const N: usize>(args: &[&str], form: &str) -> BookResult<[String; N]> {
    let owned: Vec<String> = args.iter().map(|a| a.to_string()).collect();
    owned.try_into().map_err(|_| usage(form))
}
