/*
cli_options.rs

Copyright 2025 The Cubeword Authors

This file is part of Cubeword.

Cubeword is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Cubeword is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Cubeword. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Process command-line options.
//!
//! Without any option, Cubeword hides a list of fruits and vegetables in a 10x10x10 grid, and
//! then writes the grid to `grid.txt` and the locations of the words to `locations.txt`.
//!
//! # Examples
//!
//! Generate a 6x6x6 puzzle from a word file, and also save it in JSON format:
//!
//! ```text
//! $ cubeword -w words.txt -x 6 -y 6 -z 6 -j puzzle.json
//! ```
//!
//! Search the words in an existing grid file:
//!
//! ```text
//! $ cubeword -w words.txt --solve grid.txt -l locations.txt
//! ```
//!
//! Export again the grid and the locations of a puzzle saved in JSON format:
//!
//! ```text
//! $ cubeword --load puzzle.json -g grid.txt -l locations.txt --print
//! ```
//!
//! Generate the same puzzle again, and print some statistics:
//!
//! ```text
//! $ cubeword -s 2025 --summary
//!
//!       iterations = 1
//!       placements = 187
//!         duration = 0.41s
//!      words found = 40/40
//!          created = Fri Oct 17 10:20:41 2025
//! ```

use clap::Parser;
use log::{debug, error, warn};
use std::env;
use std::error::Error;
use std::path::{Path, PathBuf};

use crate::export;
use crate::generator::grid::Grid;
use crate::generator::maker::PuzzleMaker;
use crate::generator::word_list;
use crate::puzzle::Puzzle;
use crate::saver::puzzle::SaverPuzzle;
use crate::solver;

/// Generate and solve 3D word search puzzles.
#[derive(Parser, Debug)]
#[command(about, long_about = None, version)]
struct Args {
    /// File with the words to hide, one word per line (default: fruits and vegetables)
    #[arg(short, long, value_name = "FILE")]
    words: Option<PathBuf>,

    /// Size of the grid along the first axis
    #[arg(short = 'x', long, default_value_t = 10, allow_negative_numbers = true)]
    size_x: i64,

    /// Size of the grid along the second axis
    #[arg(short = 'y', long, default_value_t = 10, allow_negative_numbers = true)]
    size_y: i64,

    /// Size of the grid along the third axis
    #[arg(short = 'z', long, default_value_t = 10, allow_negative_numbers = true)]
    size_z: i64,

    /// Output file for the grid
    #[arg(short, long, value_name = "FILE", default_value = "grid.txt")]
    grid: PathBuf,

    /// Output file for the word locations
    #[arg(short, long, value_name = "FILE", default_value = "locations.txt")]
    locations: PathBuf,

    /// Seed for the random number generator, to generate the same puzzle again
    #[arg(short, long)]
    seed: Option<u64>,

    /// Also save the puzzle and its solution in JSON format
    #[arg(short, long, value_name = "FILE")]
    json: Option<PathBuf>,

    /// Search the words in an existing grid file instead of generating a grid
    #[arg(long, value_name = "GRID_FILE")]
    solve: Option<PathBuf>,

    /// Restore a puzzle saved in JSON format instead of generating a grid
    #[arg(long, value_name = "JSON_FILE", conflicts_with_all = ["solve", "words", "seed"])]
    load: Option<PathBuf>,

    /// Print the grid
    #[arg(short, long, default_value_t = false)]
    print: bool,

    /// Print some statistics after generating the grid
    #[arg(long, default_value_t = false)]
    summary: bool,

    /// Enable debug messages
    #[arg(short, long, default_value_t = false)]
    debug: bool,
}

/// Read a puzzle previously saved with the `--json` option.
fn restore_puzzle(path: &Path) -> Result<Puzzle, Box<dyn Error>> {
    let saver: SaverPuzzle = SaverPuzzle::new(path.to_path_buf());
    match saver.get_puzzle()? {
        Some(puzzle) => Ok(puzzle),
        None => Err(format!("{path:?} does not exist").into()),
    }
}

/// Parse and process command-line options, and return the exit code.
pub fn parse() -> u8 {
    let args: Args = Args::parse();

    if args.debug {
        unsafe {
            env::set_var("RUST_LOG", "debug");
        }
    }
    env_logger::init();
    debug!("Options: {args:?}");

    let mut maker: PuzzleMaker<_> = match args.seed {
        Some(seed) => PuzzleMaker::from_seed(seed),
        None => PuzzleMaker::from_os_rng(),
    };
    let puzzle: Puzzle = if let Some(path) = &args.load {
        match restore_puzzle(path) {
            Ok(p) => p,
            Err(e) => {
                error!("Cannot restore the puzzle from {path:?}: {e}");
                return 1;
            }
        }
    } else {
        //
        // Retrieve the words
        //
        let words: Vec<String> = match &args.words {
            Some(path) => match word_list::load(path) {
                Ok(w) => w,
                Err(e) => {
                    error!("Cannot read the word file {path:?}: {e}");
                    return 1;
                }
            },
            None => word_list::DEMO_WORDS.iter().map(|w| w.to_string()).collect(),
        };

        //
        // Import or generate the grid
        //
        let grid: Option<Grid> = match &args.solve {
            Some(path) => match export::import_grid(path) {
                Ok(g) => Some(g),
                Err(e) => {
                    error!("Cannot read the grid file {path:?}: {e}");
                    return 1;
                }
            },
            None => match maker.make(&words, args.size_x, args.size_y, args.size_z) {
                Ok(g) => Some(g),
                Err(e) => {
                    error!(
                        "Cannot generate a {}x{}x{} puzzle: {e}",
                        args.size_x, args.size_y, args.size_z
                    );
                    None
                }
            },
        };

        let Some(grid) = grid else {
            // Best effort: the locations file still reports that no word was found
            let locations = solver::search_for_all(None, &words);
            if let Err(e) = export::export_locations(&locations, &args.locations) {
                error!("Cannot write {:?}: {e}", args.locations);
            }
            return 1;
        };

        Puzzle::new(words, grid)
    };

    for word in puzzle.missing_words() {
        warn!("{word:?} is not in the grid");
    }

    if args.print {
        println!("{}", puzzle.grid);
    }

    //
    // Export the puzzle
    //
    if let Err(e) = export::export_grid(&puzzle.grid, &args.grid) {
        error!("Cannot write {:?}: {e}", args.grid);
    }
    if let Err(e) = export::export_locations(&puzzle.locations, &args.locations) {
        error!("Cannot write {:?}: {e}", args.locations);
    }
    if let Some(path) = &args.json {
        let saver: SaverPuzzle = SaverPuzzle::new(path.clone());
        if let Err(e) = saver.save_puzzle(&puzzle) {
            error!("Cannot save the puzzle to {path:?}: {e}");
        }
    }

    // Print some stats
    if args.summary {
        if args.solve.is_none() && args.load.is_none() {
            println!(
                "
      iterations = {}
      placements = {}
        duration = {}s",
                maker.iteration, maker.placements, maker.duration
            );
        }
        println!(
            "     words found = {}/{}
         created = {}",
            puzzle.num_found(),
            puzzle.words.len(),
            puzzle.created_display()
        );
    }
    0
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_command_definition() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_defaults_run_the_demonstration() {
        let args = Args::try_parse_from(["cubeword"]).unwrap();
        assert!(args.words.is_none());
        assert_eq!((args.size_x, args.size_y, args.size_z), (10, 10, 10));
        assert_eq!(args.grid, PathBuf::from("grid.txt"));
        assert_eq!(args.locations, PathBuf::from("locations.txt"));
        assert!(args.solve.is_none() && args.json.is_none() && args.seed.is_none());
    }

    #[test]
    fn test_negative_size_is_accepted_by_the_parser() {
        let args = Args::try_parse_from(["cubeword", "-x", "-1", "-s", "3", "--summary"]).unwrap();
        assert_eq!(args.size_x, -1);
        assert_eq!(args.seed, Some(3));
        assert!(args.summary);
    }

    #[test]
    fn test_load_conflicts_with_generation_options() {
        let args = Args::try_parse_from(["cubeword", "--load", "p.json", "-g", "g.txt"]).unwrap();
        assert_eq!(args.load, Some(PathBuf::from("p.json")));
        assert!(Args::try_parse_from(["cubeword", "--load", "p.json", "--solve", "g.txt"]).is_err());
        assert!(Args::try_parse_from(["cubeword", "--load", "p.json", "-w", "w.txt"]).is_err());
    }

    #[test]
    fn test_restore_puzzle() {
        let path = std::env::temp_dir().join(format!("cubeword-cli-{}.json", std::process::id()));
        let _ = std::fs::remove_file(&path);
        assert!(restore_puzzle(&path).is_err());

        let words: Vec<String> = vec!["cube".to_string(), "word".to_string()];
        let grid = PuzzleMaker::from_seed(12).make(&words, 4, 4, 4).unwrap();
        let puzzle = Puzzle::new(words, grid);
        SaverPuzzle::new(path.clone()).save_puzzle(&puzzle).unwrap();
        let restored = restore_puzzle(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(restored, puzzle);
    }
}
