//! A small front-end around the evaluator: feed it FEN strings, get scores.

use anyhow::Context;
use chess::board::Board;
use clap::Parser;
use colored::Colorize;
use nimloth::evaluate::{evaluate, game_phase};
use nimloth::thread::Thread;

const STARTPOS: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

#[derive(Parser)]
#[command(name = "nimloth", about = "Statically evaluate chess positions")]
struct Args {
    /// FEN strings to evaluate; defaults to the starting position
    fens: Vec<String>,

    /// Print the board along with the score
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let fens = if args.fens.is_empty() {
        vec![STARTPOS.to_string()]
    } else {
        args.fens
    };

    let mut thread = Thread::new();

    for fen in fens {
        let board: Board = fen
            .parse()
            .with_context(|| format!("failed to parse FEN '{fen}'"))?;

        if args.verbose {
            println!("{board}");
        }

        let score = evaluate(&mut thread, &board);
        let phase = game_phase(&board);

        println!(
            "{} {:>5} {} (phase {phase}/256, {} to move)",
            "eval".bright_blue(),
            score,
            "cp".bright_black(),
            board.current,
        );
    }

    Ok(())
}
