use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use connect_four_ai::ai::{SearchAgent, TieBreak};
use connect_four_ai::config::AppConfig;
use connect_four_ai::session::GameSession;
use connect_four_ai::ui::{headless, App};

/// Play Connect Four against a fixed-depth search opponent.
#[derive(Parser)]
#[command(name = "connect-four", about = "Play Connect Four against the computer")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "connect-four.toml")]
    config: PathBuf,

    /// Override search depth in half-moves
    #[arg(long)]
    ply: Option<usize>,

    /// Override the tie-break policy
    #[arg(long, value_enum)]
    tie_break: Option<TieBreak>,

    /// Seed the random tie-break for reproducible games
    #[arg(long)]
    seed: Option<u64>,

    /// Override board width
    #[arg(long)]
    width: Option<usize>,

    /// Override board height
    #[arg(long)]
    height: Option<usize>,

    /// Play over stdin/stdout instead of the full-screen UI
    #[arg(long)]
    headless: bool,

    /// Print the default configuration as TOML and exit
    #[arg(long)]
    print_config: bool,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    if cli.print_config {
        print!("{}", AppConfig::default_toml());
        return Ok(());
    }

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(ply) = cli.ply {
        config.agent.ply = ply;
    }
    if let Some(tie_break) = cli.tie_break {
        config.agent.tie_break = tie_break;
    }
    if cli.seed.is_some() {
        config.agent.seed = cli.seed;
    }
    if let Some(width) = cli.width {
        config.board.width = width;
    }
    if let Some(height) = cli.height {
        config.board.height = height;
    }
    config.validate().context("invalid settings")?;

    let agent = SearchAgent::from_config(&config.agent);
    let mut session = GameSession::new(config.board.width, config.board.height, agent)
        .context("starting game")?;

    if cli.headless {
        let stdin = io::stdin();
        let mut stdout = io::stdout();
        headless::run(&mut session, stdin.lock(), &mut stdout)?;
        return Ok(());
    }

    run_tui(App::new(session))?;
    Ok(())
}

fn run_tui(mut app: App) -> io::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = app.run(&mut terminal);

    // Restore terminal — always runs, even on error
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    res
}
