use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use crossterm::{
    cursor::Show,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{
    io,
    path::{Path, PathBuf},
};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use taskcard::{render_card, ui, Board, TaskId};

#[derive(Parser, Debug)]
#[command(name = "taskcard", version, about = "Render task cards as HTML or preview them in the terminal")]
struct Cli {
    /// Log filter; RUST_LOG takes precedence when set.
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "warn", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print cards as HTML, one per line
    Render {
        /// JSON file holding an array of tasks
        file: PathBuf,
        /// Only render the task with this identifier
        #[arg(long)]
        id: Option<String>,
    },
    /// Browse cards in the terminal
    Browse {
        /// JSON file holding an array of tasks
        file: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level)?;

    match cli.command {
        Command::Render { file, id } => render(&file, id.as_deref()),
        Command::Browse { file } => browse(&file),
    }
}

fn init_tracing(log_level: &str) -> Result<()> {
    let env = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter = log_filter(env.as_deref(), log_level)?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init()
        .map_err(|err| anyhow!(err))
        .context("initialize tracing subscriber")
}

/// A set but malformed `RUST_LOG` is an error, not a silent fallback.
fn log_filter(env: Option<&str>, log_level: &str) -> Result<EnvFilter> {
    match env {
        Some(directives) => EnvFilter::try_new(directives)
            .with_context(|| format!("invalid {} '{directives}'", EnvFilter::DEFAULT_ENV)),
        None => EnvFilter::try_new(log_level).context("invalid log level"),
    }
}

/// Leaves raw mode and the alternate screen when dropped, on every exit path.
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        let guard = TerminalGuard;
        execute!(io::stdout(), EnterAlternateScreen)?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, Show);
    }
}

fn render(file: &Path, id: Option<&str>) -> Result<()> {
    let board = Board::load(file).context("load tasks")?;

    match id {
        Some(id) => {
            let task = board
                .find(&TaskId::new(id))
                .with_context(|| format!("no task with id '{id}' in {}", file.display()))?;
            println!("{}", render_card(task));
        }
        None => {
            for task in board.tasks() {
                debug!(id = %task.id, "rendering card");
                println!("{}", render_card(task));
            }
        }
    }
    Ok(())
}

fn browse(file: &Path) -> Result<()> {
    let mut board = Board::load(file).context("load tasks")?;

    let _guard = TerminalGuard::enter().context("enter terminal preview")?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    info!(task_count = board.tasks().len(), "starting preview");
    ui::run_app(&mut terminal, &mut board).context("terminal preview")
}
