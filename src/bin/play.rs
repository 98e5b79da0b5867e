use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;

use cfour_engine::ai::Difficulty;
use cfour_engine::config::{GameSettings, Mode};
use cfour_engine::game::{Cell, GameStatus, Player};
use cfour_engine::session::{GameSession, Snapshot};

/// Play Connect Four in the terminal, against a friend or the AI.
#[derive(Parser)]
#[command(name = "play", about = "Play Connect Four in the terminal")]
struct Cli {
    /// Path to TOML settings file
    #[arg(long, default_value = "cfour.toml")]
    config: PathBuf,

    /// Override mode: pvp or pva
    #[arg(long)]
    mode: Option<String>,

    /// Override difficulty: easy or medium
    #[arg(long)]
    difficulty: Option<String>,

    /// Override the side the human plays in pva: red or yellow
    #[arg(long)]
    play_as: Option<String>,

    /// Override number of board rows
    #[arg(long)]
    rows: Option<usize>,

    /// Override number of board columns
    #[arg(long)]
    cols: Option<usize>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut settings = GameSettings::load_or_default(&cli.config)
        .with_context(|| format!("loading settings from {}", cli.config.display()))?;

    if let Some(mode) = &cli.mode {
        settings.mode = match mode.as_str() {
            "pvp" => Mode::Pvp,
            "pva" => Mode::Pva,
            other => bail!("unknown mode '{}' (expected 'pvp' or 'pva')", other),
        };
    }
    if let Some(difficulty) = &cli.difficulty {
        settings.difficulty = match difficulty.as_str() {
            "easy" => Difficulty::Easy,
            "medium" => Difficulty::Medium,
            other => bail!("unknown difficulty '{}' (expected 'easy' or 'medium')", other),
        };
    }
    if let Some(side) = &cli.play_as {
        settings.play_as = match side.as_str() {
            "red" => Player::Red,
            "yellow" => Player::Yellow,
            other => bail!("unknown side '{}' (expected 'red' or 'yellow')", other),
        };
    }
    if let Some(rows) = cli.rows {
        settings.rows = rows;
    }
    if let Some(cols) = cli.cols {
        settings.cols = cols;
    }

    let mut session = GameSession::new(settings);
    run(&mut session)
}

fn run(session: &mut GameSession) -> Result<()> {
    println!("Connect Four — columns are numbered from 1. Red moves first.");

    loop {
        let snapshot = session.snapshot();
        print_board(&snapshot);

        match &snapshot.status {
            GameStatus::Won { winner, .. } => {
                println!("{} wins!", display_name(session, *winner));
                print_score(session);
            }
            GameStatus::Draw => {
                println!("It's a draw.");
                print_score(session);
            }
            GameStatus::InProgress => {
                if !session.is_human_turn() {
                    let (col, _) = session.ai_move()?;
                    println!("AI plays column {}.", col + 1);
                    continue;
                }
                println!(
                    "{} ({}) to move.",
                    display_name(session, snapshot.current_player),
                    snapshot.current_player.name()
                );
            }
        }

        print!("Enter a column, or 'u' undo, 'r' redo, 'n' new game, 'q' quit: ");
        io::stdout().flush()?;

        let mut input = String::new();
        if io::stdin().read_line(&mut input)? == 0 {
            break; // EOF
        }

        match input.trim() {
            "q" => break,
            "n" => {
                session.new_game();
            }
            "u" => {
                if let Err(e) = session.undo() {
                    println!("{e}");
                }
            }
            "r" => {
                if let Err(e) = session.redo() {
                    println!("{e}");
                }
            }
            raw => match raw.parse::<usize>() {
                Ok(n) if n >= 1 => {
                    if let Err(e) = session.human_drop(n - 1) {
                        println!("{e}");
                    }
                }
                _ => println!("Unrecognized input '{raw}'."),
            },
        }
    }

    Ok(())
}

fn print_board(snapshot: &Snapshot) {
    println!();
    for col in 0..snapshot.cols {
        print!("{:>2} ", col + 1);
    }
    println!();
    for row in &snapshot.grid {
        for cell in row {
            let glyph = match cell {
                Cell::Empty => ".",
                Cell::Red => "R",
                Cell::Yellow => "Y",
            };
            print!("{glyph:>2} ");
        }
        println!();
    }
    println!();
}

fn print_score(session: &mut GameSession) {
    let score = session.score();
    println!(
        "Score — {}: {}, {}: {}, draws: {}",
        score.red_name, score.wins_red, score.yellow_name, score.wins_yellow, score.draws
    );
}

fn display_name(session: &GameSession, player: Player) -> String {
    match player {
        Player::Red => session.settings().red_name.clone(),
        Player::Yellow => session.settings().yellow_name.clone(),
    }
}
