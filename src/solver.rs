/*
solver.rs

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

//! Find words in a grid.
//!
//! A word is found when its letters follow a straight line in one of the 26 directions
//! ([`Direction::ALL`]).
//! The cells are scanned in the row, column, aisle order, and for each cell the directions are
//! tried in the [`Direction::ALL`] order, so the result is always the same for a given grid.
//!
//! The generator also uses [`has_all`] to verify that inserting a word did not break the words
//! already in the grid.

use crate::generator::grid::Grid;
use crate::generator::position::{Direction, Placement, Position};

/// Whether the word reads from the given position in the given direction.
///
/// An empty word always matches.
pub fn check_line(grid: &Grid, position: Position, direction: Direction, word: &str) -> bool {
    for (i, letter) in word.chars().enumerate() {
        match position.offset(direction, i).and_then(|p| grid.get(&p)) {
            Some(c) if c == letter => (),
            _ => return false,
        }
    }
    true
}

/// Return the placement of the word if it starts at the given position, in any direction.
pub fn check_at<'a>(grid: &Grid, position: Position, word: &'a str) -> Option<Placement<'a>> {
    Direction::ALL
        .iter()
        .find(|&&direction| check_line(grid, position, direction, word))
        .map(|&direction| Placement::new(word, position, direction))
}

/// Return the positions of the letters of the word in the grid, or None if the word is not found.
///
/// An empty word is never found.
pub fn search(grid: &Grid, word: &str) -> Option<Vec<Position>> {
    if word.is_empty() {
        return None;
    }
    grid.positions()
        .find_map(|position| check_at(grid, position, word))
        .and_then(|placement| placement.positions())
}

/// Search for each word of the list.
///
/// The returned vector has one entry per word, in the same order.
/// When the grid is missing, because the puzzle could not be generated for example, no word is
/// found.
pub fn search_for_all<S: AsRef<str>>(
    grid: Option<&Grid>,
    words: &[S],
) -> Vec<Option<Vec<Position>>> {
    words
        .iter()
        .map(|word| grid.and_then(|g| search(g, word.as_ref())))
        .collect()
}

/// Whether all the words are in the grid.
pub fn has_all<S: AsRef<str>>(grid: &Grid, words: &[S]) -> bool {
    words.iter().all(|word| search(grid, word.as_ref()).is_some())
}
