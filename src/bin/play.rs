use std::io::{self, Write};

use clap::Parser;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use tictacargo::{apply_move, go_to_move, is_terminal, status, GameState, GameStatus, Snapshot};

#[derive(Debug, Parser)]
#[command(name = "play", about = "Tic-tac-toe engine terminal driver")]
struct Args {
    /// Scripted cell sequence, comma-separated (e.g. "4,0,8,2,6"); replays it and exits
    #[arg(long)]
    moves: Option<String>,

    /// Print the final snapshot and status as JSON (scripted mode)
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Serialize)]
struct FinalPosition {
    snapshot: Snapshot,
    status: GameStatus,
}

fn parse_moves(s: &str) -> Result<Vec<u8>, String> {
    s.split(',')
        .map(str::trim)
        .filter(|tok| !tok.is_empty())
        .map(|tok| {
            tok.parse::<u8>()
                .map_err(|e| format!("invalid cell '{tok}': {e}"))
        })
        .collect()
}

fn print_position(state: &GameState) {
    println!("{}", state.current().board);
    println!("{}", status(state));
}

fn print_history(state: &GameState) {
    for label in state.move_labels() {
        println!("  {label}");
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let mut state = GameState::new();

    if let Some(script) = args.moves.as_deref() {
        for cell in parse_moves(script)? {
            state = apply_move(&state, cell).map_err(|e| format!("move {cell} rejected: {e}"))?;
        }
        if args.json {
            let out = FinalPosition {
                snapshot: *state.current(),
                status: status(&state),
            };
            println!("{}", serde_json::to_string_pretty(&out)?);
        } else {
            print_position(&state);
            print_history(&state);
        }
        return Ok(());
    }

    println!("Cells are numbered 0..=8, row-major.");
    println!("Commands: <cell> to play, 'goto <n>' to jump, 'list' for the move history, 'quit'.");
    print_position(&state);

    let stdin = io::stdin();
    let mut input = String::new();
    loop {
        print!("> ");
        io::stdout().flush()?;
        input.clear();
        if stdin.read_line(&mut input)? == 0 {
            break;
        }
        let line = input.trim();
        match line {
            "" => {}
            "quit" | "q" => break,
            "list" => print_history(&state),
            _ => {
                if let Some(rest) = line.strip_prefix("goto ") {
                    match rest.trim().parse::<usize>() {
                        Ok(n) => match go_to_move(&state, n) {
                            Ok(ns) => {
                                state = ns;
                                print_position(&state);
                            }
                            Err(e) => eprintln!("{e}"),
                        },
                        Err(e) => eprintln!("invalid move number '{}': {e}", rest.trim()),
                    }
                } else {
                    match line.parse::<u8>() {
                        Ok(cell) => match apply_move(&state, cell) {
                            Ok(ns) => {
                                state = ns;
                                print_position(&state);
                                if is_terminal(&state) {
                                    println!("(time travel with 'goto <n>' is still available)");
                                }
                            }
                            Err(e) => eprintln!("{e}"),
                        },
                        Err(_) => eprintln!("unrecognized command '{line}'"),
                    }
                }
            }
        }
    }

    Ok(())
}
