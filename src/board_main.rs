// Boggle – A word-finding board game
// Copyright (C) 2026  Boggle contributors
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <http://www.gnu.org/licenses/>.

mod dice;
mod board;
mod graph;
mod daily;

use std::process::ExitCode;
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use board::Board;
use graph::Graph;

/// Prints a randomly generated board
#[derive(Parser)]
#[command(name = "generate-board")]
struct Cli {
    /// Seed for the random number generator
    #[arg(short, long, conflicts_with = "daily")]
    seed: Option<u64>,
    /// Generate the board of the day
    #[arg(short, long)]
    daily: bool,
    /// Print the adjacency graph as JSON instead of the letters
    #[arg(short, long)]
    json: bool,
}

fn generate(cli: &Cli) -> Board {
    let seed = if cli.daily {
        Some(daily::today_seed())
    } else {
        cli.seed
    };

    match seed {
        Some(seed) => Board::generate(&mut StdRng::seed_from_u64(seed)),
        None => Board::generate(&mut rand::thread_rng()),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let board = generate(&cli);

    if cli.json {
        match serde_json::to_string_pretty(&Graph::new(&board)) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("{}", e);
                return ExitCode::FAILURE;
            },
        }
    } else {
        println!("{}", board);
    }

    ExitCode::SUCCESS
}
