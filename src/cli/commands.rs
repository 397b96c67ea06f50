use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use tracing::{error, info, warn};

use crate::backend::{AnswerBackend, FixtureBackend, HttpBackend};
use crate::config::AppConfig;
use crate::conversation::{ConversationStats, HistoryStore};
use crate::logging;
use crate::models::AnswerMode;
use crate::render::{LineBuffer, render_record, text::format_lines};
use crate::session::ChatSession;
use crate::tui::run_interactive;

#[derive(Parser)]
#[command(name = "docs-assistant")]
#[command(version = "0.1.0")]
#[command(about = "Search and ask questions about internal documents", long_about = None)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Answer from a JSON fixture file instead of the HTTP backend
    #[arg(long, global = true)]
    pub fixture: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Open the interactive chat screen
    Chat {
        /// Mode selected at startup
        #[arg(long, value_enum, default_value_t = AnswerMode::DocumentSearch)]
        mode: AnswerMode,
    },
    /// Ask one question and print the answer
    Ask {
        query: String,
        #[arg(long, value_enum, default_value_t = AnswerMode::DocumentSearch)]
        mode: AnswerMode,
    },
    /// Print the saved conversation
    History,
    /// Show statistics about the saved conversation
    Stats,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let Some(command) = &cli.command else {
        println!("Use --help for usage information");
        return Ok(());
    };

    let config = AppConfig::load(cli.config.as_deref())?;
    init_logging(&config);
    info!("application started");

    match command {
        Commands::Chat { mode } => {
            let session = open_session(&cli, &config)?;
            run_interactive(session, *mode)?;
        }
        Commands::Ask { query, mode } => ask(&cli, &config, query, *mode)?,
        Commands::History => show_history(&config)?,
        Commands::Stats => show_stats(&config)?,
    }

    Ok(())
}

/// Logging is best effort: a read-only data dir must not block answering
fn init_logging(config: &AppConfig) {
    let result = config.log_path().and_then(|path| logging::init(&path));
    if let Err(e) = result {
        eprintln!("Warning: logging disabled: {:#}", e);
    }
}

fn build_backend(fixture: Option<&Path>, config: &AppConfig) -> Result<Box<dyn AnswerBackend>> {
    let backend: Box<dyn AnswerBackend> = match fixture {
        Some(path) => Box::new(FixtureBackend::from_file(path, config.backend.clone())?),
        None => Box::new(HttpBackend::new(config.backend.clone())?),
    };
    Ok(backend)
}

fn open_session(cli: &Cli, config: &AppConfig) -> Result<ChatSession<Box<dyn AnswerBackend>>> {
    let store = HistoryStore::new(config.history_path()?);
    let log = store.load().context(config.messages.render_error.clone())?;
    let backend = build_backend(cli.fixture.as_deref(), config)?;

    Ok(ChatSession::new(backend, log, config.messages.clone()).with_store(store))
}

fn ask(cli: &Cli, config: &AppConfig, query: &str, mode: AnswerMode) -> Result<()> {
    let mut session = open_session(cli, config)?;
    let messages = session.messages().clone();

    let record = match session.submit(query, mode) {
        Ok(record) => record,
        Err(e) => {
            error!(error = %e, "ask failed");
            eprintln!("{}", e.user_message(&messages));
            bail!(e);
        }
    };

    let mut buffer = LineBuffer::new();
    render_record(record, &mut buffer)?;

    let mut stdout = io::stdout().lock();
    for line in format_lines(buffer.lines()) {
        writeln!(stdout, "{}", line)?;
    }
    Ok(())
}

fn show_history(config: &AppConfig) -> Result<()> {
    let store = HistoryStore::new(config.history_path()?);
    let log = store.load()?;

    if log.is_empty() {
        println!("No conversation history");
        return Ok(());
    }

    let mut stdout = io::stdout().lock();
    crate::render::write_transcript(log.turns(), &mut stdout).inspect_err(|e| {
        warn!(error = %format!("{:#}", e), "history replay failed");
    })
}

fn show_stats(config: &AppConfig) -> Result<()> {
    let path = config.history_path()?;
    let log = HistoryStore::new(&path).load()?;
    let stats = ConversationStats::from_turns(log.turns());

    println!("{} History Statistics", config.messages.app_name);
    println!("================================");
    println!("Total turns: {}", stats.total_turns);
    println!("  User turns: {}", stats.user_turns);
    println!("  Assistant turns: {}", stats.assistant_turns);
    println!("    Document search: {}", stats.search_answers);
    println!("      No match: {}", stats.no_match_answers);
    println!("    Inquiry: {}", stats.inquiry_answers);
    println!();
    println!("History file: {}", path.display());

    if let Some(oldest) = log.turns().first() {
        println!("Oldest turn: {}", oldest.timestamp().format("%Y-%m-%d %H:%M:%S"));
    }
    if let Some(newest) = log.turns().last() {
        println!("Newest turn: {}", newest.timestamp().format("%Y-%m-%d %H:%M:%S"));
    }

    Ok(())
}
