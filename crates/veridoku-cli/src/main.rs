//! Command-line Sudoku board verifier.
//!
//! Reads a board from a text file and prints whether it is a valid
//! solved Sudoku. The process exits with 0 for a valid board, 1 for an
//! invalid board, and 2 when the file cannot be read or parsed.

use std::fs;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use veridoku_core::{Board, verify};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Path to the board file: 9 rows of 9 characters, `1`-`9` for
    /// digits and `0` for empty cells.
    #[arg(value_name = "FILE")]
    board: PathBuf,
}

fn main() {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();

    let text = match fs::read_to_string(&args.board) {
        Ok(text) => text,
        Err(err) => {
            eprintln!("cannot read {}: {err}", args.board.display());
            process::exit(2);
        }
    };

    let board = match text.parse::<Board>() {
        Ok(board) => board,
        Err(err) => {
            eprintln!("malformed board in {}: {err}", args.board.display());
            process::exit(2);
        }
    };

    log::debug!("verifying board from {}", args.board.display());
    match verify::first_violation(&board) {
        None => println!("Sudoku board is valid"),
        Some(house) => {
            log::debug!("first incomplete house: {house}");
            println!("Sudoku board is invalid");
            process::exit(1);
        }
    }
}
