/*
puzzle.rs

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

//! A generated puzzle with its solution.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::time::SystemTime;

use crate::generator::grid::Grid;
use crate::generator::position::Position;
use crate::solver;

/// Puzzle and its solution.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Puzzle {
    /// Words to find, as requested by the user.
    pub words: Vec<String>,

    /// Grid of letters.
    pub grid: Grid,

    /// Letter positions of each word, in the same order as [`Puzzle::words`].
    /// None when the word is not in the grid.
    pub locations: Vec<Option<Vec<Position>>>,

    /// Creation timestamp.
    pub created: SystemTime,
}

impl Puzzle {
    /// Create a [`Puzzle`] object and solve it.
    pub fn new(words: Vec<String>, grid: Grid) -> Self {
        let locations: Vec<Option<Vec<Position>>> = solver::search_for_all(Some(&grid), &words);
        Self {
            words,
            grid,
            locations,
            created: SystemTime::now(),
        }
    }

    /// Return the number of words found in the grid.
    pub fn num_found(&self) -> usize {
        self.locations.iter().flatten().count()
    }

    /// Return the words that are not in the grid.
    pub fn missing_words(&self) -> Vec<&str> {
        self.words
            .iter()
            .zip(&self.locations)
            .filter(|(_, l)| l.is_none())
            .map(|(w, _)| w.as_str())
            .collect()
    }

    /// Return the creation date in the local time zone, formatted for display.
    pub fn created_display(&self) -> String {
        let dt: DateTime<Local> = DateTime::from(self.created);
        format!("{}", dt.format("%c"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_solves_the_puzzle() {
        let grid = Grid::from_rows(vec![vec![
            vec!['c', 'a', 't'],
            vec!['o', 'x', 'o'],
            vec!['w', 'y', 'z'],
        ]])
        .unwrap();
        let puzzle = Puzzle::new(
            vec!["cat".to_string(), "dog".to_string(), "cow".to_string()],
            grid,
        );
        assert_eq!(puzzle.num_found(), 2);
        assert_eq!(puzzle.missing_words(), vec!["dog"]);
        assert_eq!(
            puzzle.locations[2],
            Some(vec![
                Position::new(0, 0, 0),
                Position::new(0, 1, 0),
                Position::new(0, 2, 0)
            ])
        );
        assert!(!puzzle.created_display().is_empty());
    }
}
