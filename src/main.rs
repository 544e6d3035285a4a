use std::io;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use duckoverflow::api::{fetch_stackoverflow_questions, new_client};
use duckoverflow::app::App;
use duckoverflow::constants::{DEFAULT_LOG_FILTER, LOG_ENV, RESPONSE_LIMIT};
use duckoverflow::ui::{prompt_query, run_app, terminal_width};

/// Exit status when the HTTP client cannot be created (-1 as a process status).
const CLIENT_INIT_FAILURE: u8 = 255;

#[derive(Debug, Parser)]
#[command(version, about = "Tell the duck what's wrong and it will ask Stack Overflow")]
struct Cli {
    /// Search terms, quoted as one argument: duck "int argc". Prompts for them when omitted.
    query: Option<String>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_ansi(false)
        .with_env_filter(
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {:?}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let client = match new_client() {
        Ok(client) => client,
        Err(err) => {
            eprintln!("{}", err);
            return Ok(ExitCode::from(CLIENT_INIT_FAILURE));
        }
    };

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut stdout = io::stdout();

    let query = match cli.query.filter(|q| !q.trim().is_empty()) {
        Some(query) => query,
        None => match prompt_query(&mut input, &mut stdout)? {
            Some(query) => query,
            None => return Ok(ExitCode::SUCCESS),
        },
    };

    let questions = fetch_stackoverflow_questions(&client, &query, RESPONSE_LIMIT)
        .with_context(|| format!("searching for {:?}", query))?;
    tracing::debug!(count = questions.len(), "Loaded questions");

    let app = App::new(questions, query);
    run_app(input, &mut stdout, app, terminal_width())?;

    Ok(ExitCode::SUCCESS)
}
