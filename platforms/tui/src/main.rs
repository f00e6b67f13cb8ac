mod app;

use action::Action;
use app::App;
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use hanoi::{Game, TowerId, DEFAULT_DISKS};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::sync::Mutex;
use std::{env, error::Error, fs::OpenOptions, io, time::Duration};
use tracing_subscriber::EnvFilter;

/// The Tower of Hanoi puzzle with a Terminal User Interface.
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
#[clap(after_help = "EXAMPLES:
  hanoi-tui
  HANOI_LOG=hanoi.log RUST_LOG=debug hanoi-tui 5")]
struct Cli {
    /// Number of Disks per Tower.
    #[clap(default_value_t = DEFAULT_DISKS)]
    disks: u32,
}

/// Represents the state of the application loop.
#[derive(PartialEq)]
enum AppState {
    Running,
    ShouldQuit,
}

/// A wrapper around the terminal to ensure it's restored on drop.
struct Tui {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
}

impl Tui {
    /// Creates a new TUI.
    fn new() -> io::Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        Ok(Self { terminal })
    }
}

impl Drop for Tui {
    fn drop(&mut self) {
        // Restore the terminal to its original state.
        // The results are ignored as we can't do much about errors during drop.
        let _ = disable_raw_mode();
        let _ = execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        );
        let _ = self.terminal.show_cursor();
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    // Create the game before initializing the TUI so a bad disk count is reported on
    // stderr instead of inside the alternate screen.
    let game = match Game::new(cli.disks) {
        Ok(game) => game,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    init_logging()?;

    // Initialize the TUI. The `Tui` struct will handle cleanup on drop.
    let mut tui = Tui::new()?;

    run_app(&mut tui.terminal, App::new(game))?;

    Ok(())
}

/// Sends logs to the file named by `HANOI_LOG`. Without it nothing is logged, since the
/// terminal belongs to the UI.
fn init_logging() -> io::Result<()> {
    let Some(path) = env::var_os("HANOI_LOG") else {
        return Ok(());
    };

    let file = OpenOptions::new().create(true).append(true).open(path)?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(true)
        .compact()
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();

    Ok(())
}

/// Runs the main application loop.
fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| app.render(f))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press
                    && handle_key_event(&mut app, key) == AppState::ShouldQuit
                {
                    return Ok(());
                }
            }
        }
    }
}

/// Handles key events and updates the application state.
fn handle_key_event(app: &mut App, key: KeyEvent) -> AppState {
    if let Some(action) = app.keymap.get(&key).copied() {
        match action {
            Action::Quit => return AppState::ShouldQuit,
            Action::Reset => app.reset_game(),
            Action::TowerOne => app.select_tower(TowerId::One),
            Action::TowerTwo => app.select_tower(TowerId::Two),
            Action::TowerThree => app.select_tower(TowerId::Three),
            Action::Cancel => app.cancel_selection(),
            Action::ToggleHelp => app.toggle_help(),
        }
    }
    AppState::Running
}
