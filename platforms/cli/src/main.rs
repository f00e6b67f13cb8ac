mod console;

use clap::Parser;
use console::Console;
use hanoi::{Game, ScriptLoader, DEFAULT_DISKS};
use std::error::Error;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// A console version of the Tower of Hanoi puzzle.
#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
#[clap(after_help = "EXAMPLES:
  hanoi-cli --disks 4
  hanoi-cli --disks 3 --script solve.moves --json")]
struct Cli {
    /// Number of Disks per Tower. Asked for interactively when omitted
    #[clap(short, long)]
    disks: Option<u32>,

    /// Print the instructions instead of asking whether to show them
    #[clap(short, long)]
    instructions: bool,

    /// Replay a move script (one move per line, e.g. `1 -> 3`) instead of prompting
    #[clap(short, long)]
    script: Option<PathBuf>,

    /// With --script, print the final state as JSON instead of the board
    #[clap(short, long, requires = "script")]
    json: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .with_writer(io::stderr)
        .init();

    let mut console = Console::new(io::stdin().lock(), io::stdout().lock());

    if let Some(path) = &cli.script {
        let moves = ScriptLoader::load_script(path)?;
        let mut game = Game::new(cli.disks.unwrap_or(DEFAULT_DISKS))?;

        console.replay(&mut game, moves)?;

        if cli.json {
            println!("{}", serde_json::to_string_pretty(&game.snapshot())?);
        } else {
            console.print_board(&game)?;
            console.print_summary(&game)?;
        }
        return Ok(());
    }

    let game = match cli.disks {
        Some(disks) => Some(Game::new(disks)?),
        None => console.ask_game()?,
    };
    let Some(mut game) = game else {
        return Ok(());
    };

    if cli.instructions {
        console.print_instructions()?;
    } else {
        console.offer_instructions()?;
    }

    console.play(&mut game)?;

    Ok(())
}
