//! Terminal front end: play against the minimax engine or another person by
//! typing moves such as `e2e4`.

use std::error::Error;
use std::io::{self, BufRead, Write};

use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use minimax_chess::engines::engine_minimax::Difficulty;
use minimax_chess::session::game_session::{GameMode, GameSession, MoveReport, SessionConfig};
use minimax_chess::utils::algebraic::algebraic_to_position;
use minimax_chess::utils::long_algebraic::long_algebraic_to_move;
use minimax_chess::utils::render_game_state::render_game_state;
use minimax_chess::{Color, GameState, GameStatus};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ModeArg {
    /// Two people share the terminal
    Pvp,
    /// One person against the engine
    Pvc,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum SideArg {
    White,
    Black,
}

#[derive(Parser, Debug)]
#[command(name = "minimax-chess", about = "Play chess against a minimax engine")]
struct Args {
    #[arg(long, value_enum, default_value_t = ModeArg::Pvp)]
    mode: ModeArg,

    /// easy, medium or hard (search depth 1, 2 or 3)
    #[arg(long, default_value = "easy")]
    difficulty: Difficulty,

    /// Side played by the person in pvc mode
    #[arg(long, value_enum, default_value_t = SideArg::White)]
    side: SideArg,

    /// Start from this position instead of the standard one
    #[arg(long)]
    fen: Option<String>,
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let config = SessionConfig {
        mode: match args.mode {
            ModeArg::Pvp => GameMode::PlayerVsPlayer,
            ModeArg::Pvc => GameMode::PlayerVsComputer,
        },
        difficulty: args.difficulty,
        human_side: match args.side {
            SideArg::White => Color::White,
            SideArg::Black => Color::Black,
        },
    };
    let state = match &args.fen {
        Some(fen) => GameState::from_fen(fen)?,
        None => GameState::new_game(),
    };
    let mut session = GameSession::from_state(config, state);

    println!("Commands: <from><to> (e.g. e2e4), moves <square>, fen, quit");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        println!("\n{}", render_game_state(session.state()));

        if let Some(text) = session.result_text() {
            println!("{text}");
            break;
        }
        if session.status() == GameStatus::Check {
            println!("{} is in check.", session.state().side_to_move);
        }

        if session.is_computer_turn() {
            if let Some(report) = session.play_computer_turn()? {
                print_report("Computer", &report);
            }
            continue;
        }

        print!("{} to move> ", session.state().side_to_move);
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        let mut words = line.split_whitespace();

        match (words.next(), words.next()) {
            (None, _) => {}
            (Some("quit" | "exit"), _) => break,
            (Some("fen"), _) => println!("{}", session.state().get_fen()),
            (Some("moves"), Some(square)) => match algebraic_to_position(square) {
                Ok(position) => {
                    let targets: Vec<String> = session
                        .select_square(position)
                        .iter()
                        .map(ToString::to_string)
                        .collect();
                    println!("{square}: {}", targets.join(" "));
                }
                Err(err) => println!("{err}"),
            },
            (Some(text), _) => match long_algebraic_to_move(text) {
                Ok(mv) => match session.play_move(mv.from, mv.to) {
                    Ok(report) => print_report("You", &report),
                    Err(err) => println!("{err}"),
                },
                Err(err) => println!("{err}"),
            },
        }
    }

    Ok(())
}

fn print_report(who: &str, report: &MoveReport) {
    let suffix = if report.capture { " (capture)" } else { "" };
    println!("{who} played {}{suffix}", report.mv);
}
