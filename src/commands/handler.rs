use super::Command;
use crate::error::BookResult;
use crate::models::Record;
use crate::services::ContactService;
use tracing::{debug, warn};

/// Outcome of processing one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Text to show the user
    Message(String),
    /// The session should end
    Exit,
}

/// Maps text commands onto a contact service.
///
/// Every error is turned into a message; nothing escapes
/// [`CommandHandler::process_input`].
pub struct CommandHandler<S: ContactService> {
    service: S,
    page_size: usize,
}

impl<S: ContactService> CommandHandler<S> {
    pub fn new(service: S, page_size: usize) -> Self {
        Self {
            service,
            page_size: page_size.max(1),
        }
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    /// Parse and execute one line of input.
    pub fn process_input(&mut self, input: &str) -> Reply {
        let outcome = Command::parse(input).and_then(|command| {
            debug!(?command, "Dispatching command");
            self.execute(command)
        });

        match outcome {
            Ok(reply) => reply,
            Err(e) => {
                warn!("Command failed: {}", e);
                Reply::Message(e.to_string())
            }
        }
    }

    fn execute(&mut self, command: Command) -> BookResult<Reply> {
        let message = match command {
            Command::Hello => "How can I help you?".to_string(),
            Command::Add { name, phone } => {
                self.service.add_contact(&name, &phone)?;
                format!("Contact {} added with phone {}", name, phone)
            }
            Command::Change { name, phone } => {
                self.service.change_contact(&name, &phone)?;
                format!("Phone number for {} changed to {}", name, phone)
            }
            Command::Phone { name } => {
                let phone = self.service.get_phone(&name)?;
                format!("The phone number for {} is {}", name, phone)
            }
            Command::Search { query } => {
                let matches = self.service.search(&query);
                if matches.is_empty() {
                    "No matching contacts found".to_string()
                } else {
                    listing("Matching contacts:", matches)
                }
            }
            Command::Show => self.show_all(),
            Command::Birthday {
                name,
                date: Some(date),
            } => {
                self.service.set_birthday(&name, &date)?;
                format!("Birthday for {} set to {}", name, date)
            }
            Command::Birthday { name, date: None } => {
                match self.service.days_to_birthday(&name)? {
                    Some(0) => format!("Today is {}'s birthday!", name),
                    Some(days) => format!("{} days until {}'s birthday", days, name),
                    None => format!("No birthday set for {}", name),
                }
            }
            Command::Delete { name } => {
                if self.service.delete_contact(&name)? {
                    format!("Contact {} deleted", name)
                } else {
                    format!("Contact {} not found, nothing deleted", name)
                }
            }
            Command::Rename { old, new } => {
                self.service.rename_contact(&old, &new)?;
                format!("Contact {} renamed to {}", old, new)
            }
            Command::Exit => return Ok(Reply::Exit),
            Command::Empty => "Invalid command. Please try again.".to_string(),
            Command::Unknown(_) => "Invalid command".to_string(),
        };

        Ok(Reply::Message(message))
    }

    fn show_all(&self) -> String {
        let book = self.service.book();
        if book.is_empty() {
            return "No contacts found".to_string();
        }

        let paged = book.len() > self.page_size;
        let mut lines = vec!["All contacts:".to_string()];

        for (index, page) in book.iterator(self.page_size).enumerate() {
            if paged {
                lines.push(format!("Page {}:", index + 1));
            }
            lines.extend(page.iter().map(|record| record.to_string()));
        }

        lines.join("\n").trim_end().to_string()
    }
}

fn listing(header: &str, records: Vec<&Record>) -> String {
    let mut lines = vec![header.to_string()];
    lines.extend(records.iter().map(|record| record.to_string()));
    lines.join("\n").trim_end().to_string()
}
