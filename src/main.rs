//! Contact Book - Main entry point
//!
//! Runs the interactive command loop over stdin/stdout. Logs go to stderr
//! so they never mix with command output.

use anyhow::Result;
use contact_book::{CommandHandler, Config, ContactServiceImpl, JsonFileRepository, Reply};
use std::io::{self, BufRead, Write};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            init_logging("error");
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    init_logging(&config.log_level);
    info!("Using data file {}", config.data_file.display());

    let repository = JsonFileRepository::new(config.data_file.clone());
    let service = ContactServiceImpl::open(Box::new(repository));
    let mut handler = CommandHandler::new(service, config.page_size);

    run_loop(&mut handler, io::stdin().lock(), io::stdout().lock())?;

    info!("Contact book session ended");
    Ok(())
}

/// Initialize logging (stderr only to keep stdout for command replies).
fn init_logging(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run_loop(
    handler: &mut CommandHandler<ContactServiceImpl>,
    mut input: impl BufRead,
    mut output: impl Write,
) -> Result<()> {
    let mut line = String::new();

    loop {
        write!(output, "Enter command: ")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            // EOF ends the session like an exit command
            writeln!(output)?;
            break;
        }

        match handler.process_input(&line) {
            Reply::Message(message) => writeln!(output, "{}", message)?,
            Reply::Exit => break,
        }
    }

    writeln!(output, "Good bye!")?;
    Ok(())
}
