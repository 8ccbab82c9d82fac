/*
grid.rs

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

//! Three-dimensional grid of letters.
//!
//! The grid stores its cells in a flat vector, in the row, column, aisle order: all the cells of
//! the first layer (`row == 0`) come first, and inside a layer the aisle index varies fastest.
//!
//! A [`Grid`] object is never modified once it has been returned to the caller.
//! Operations that need to write letters, such as
//! [`crate::generator::placement::place_word`], work on a clone.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;

use super::position::Position;

/// Type of errors when building a grid from external data.
#[derive(Debug, PartialEq)]
pub enum GridError {
    /// The nested rows do not all have the same length.
    Ragged,

    /// The number of letters does not match the grid dimensions.
    WrongLetterCount { expected: usize, found: usize },

    /// The grid dimensions are too large.
    Overflow,

    /// The first line of a grid file does not contain three sizes.
    InvalidHeader(String),

    /// The number of layer lines in a grid file does not match the first dimension.
    WrongLineCount { expected: usize, found: usize },

    /// A letter in a grid file is not a single character.
    InvalidToken(String),
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GridError::Ragged => write!(f, "the grid rows do not have the same length"),
            GridError::WrongLetterCount { expected, found } => {
                write!(f, "expected {expected} letters but found {found}")
            }
            GridError::Overflow => write!(f, "the grid dimensions are too large"),
            GridError::InvalidHeader(line) => write!(f, "invalid grid header: {line:?}"),
            GridError::WrongLineCount { expected, found } => {
                write!(f, "expected {expected} layer lines but found {found}")
            }
            GridError::InvalidToken(token) => write!(f, "invalid letter: {token:?}"),
        }
    }
}

impl Error for GridError {}

/// Largest number of cells that a grid can hold in memory.
pub const MAX_VOLUME: usize = isize::MAX as usize / size_of::<char>();

/// Return the number of cells in a grid of the given size, or None if the grid would be too large.
pub fn checked_volume(size_x: usize, size_y: usize, size_z: usize) -> Option<usize> {
    size_x
        .checked_mul(size_y)?
        .checked_mul(size_z)
        .filter(|&volume| volume <= MAX_VOLUME)
}

/// Serialized form of a [`Grid`]: the dimensions and all the letters in one string.
#[derive(Serialize, Deserialize)]
struct GridRecord {
    size: [usize; 3],
    letters: String,
}

/// Grid of letters.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(try_from = "GridRecord", into = "GridRecord")]
pub struct Grid {
    size_x: usize,
    size_y: usize,
    size_z: usize,
    cells: Vec<char>,
}

impl TryFrom<GridRecord> for Grid {
    type Error = GridError;

    fn try_from(record: GridRecord) -> Result<Self, Self::Error> {
        let [size_x, size_y, size_z] = record.size;
        Grid::from_letters(size_x, size_y, size_z, record.letters.chars().collect())
    }
}

impl From<Grid> for GridRecord {
    fn from(grid: Grid) -> Self {
        GridRecord {
            size: [grid.size_x, grid.size_y, grid.size_z],
            letters: grid.cells.into_iter().collect(),
        }
    }
}

impl Grid {
    /// Create a grid where every cell holds an independent, uniformly chosen lowercase letter.
    ///
    /// Any size is accepted, including zero.
    pub fn random<R: Rng + ?Sized>(
        size_x: usize,
        size_y: usize,
        size_z: usize,
        rng: &mut R,
    ) -> Self {
        let volume: usize = size_x.saturating_mul(size_y).saturating_mul(size_z);
        let cells: Vec<char> = (0..volume)
            .map(|_| rng.random_range(b'a'..=b'z') as char)
            .collect();
        Self {
            size_x,
            size_y,
            size_z,
            cells,
        }
    }

    /// Create a grid from its letters, in the row, column, aisle order.
    pub fn from_letters(
        size_x: usize,
        size_y: usize,
        size_z: usize,
        cells: Vec<char>,
    ) -> Result<Self, GridError> {
        let expected: usize = checked_volume(size_x, size_y, size_z).ok_or(GridError::Overflow)?;
        if cells.len() != expected {
            return Err(GridError::WrongLetterCount {
                expected,
                found: cells.len(),
            });
        }
        Ok(Self {
            size_x,
            size_y,
            size_z,
            cells,
        })
    }

    /// Create a grid from nested rows: `rows[row][column][aisle]`.
    ///
    /// # Errors
    ///
    /// Return [`GridError::Ragged`] if the rows or the columns do not all have the same length.
    pub fn from_rows(rows: Vec<Vec<Vec<char>>>) -> Result<Self, GridError> {
        let size_x: usize = rows.len();
        let size_y: usize = rows.first().map_or(0, |r| r.len());
        let size_z: usize = rows
            .first()
            .and_then(|r| r.first())
            .map_or(0, |c| c.len());

        let mut cells: Vec<char> = Vec::with_capacity(
            checked_volume(size_x, size_y, size_z).ok_or(GridError::Overflow)?,
        );
        for row in rows {
            if row.len() != size_y {
                return Err(GridError::Ragged);
            }
            for column in row {
                if column.len() != size_z {
                    return Err(GridError::Ragged);
                }
                cells.extend(column);
            }
        }
        Ok(Self {
            size_x,
            size_y,
            size_z,
            cells,
        })
    }

    /// Return the dimensions of the grid.
    pub fn size(&self) -> (usize, usize, usize) {
        (self.size_x, self.size_y, self.size_z)
    }

    /// Number of cells.
    pub fn volume(&self) -> usize {
        self.cells.len()
    }

    /// Whether the grid has no cell (at least one dimension is zero).
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether the position is inside the grid.
    pub fn contains(&self, position: &Position) -> bool {
        position.row < self.size_x && position.column < self.size_y && position.aisle < self.size_z
    }

    fn index(&self, position: &Position) -> usize {
        (position.row * self.size_y + position.column) * self.size_z + position.aisle
    }

    /// Return the letter at the given position, or None if the position is outside the grid.
    pub fn get(&self, position: &Position) -> Option<char> {
        if self.contains(position) {
            Some(self.cells[self.index(position)])
        } else {
            None
        }
    }

    /// Overwrite the letter at the given position.
    ///
    /// The position must be inside the grid.
    pub(super) fn set(&mut self, position: &Position, letter: char) {
        let i: usize = self.index(position);
        self.cells[i] = letter;
    }

    /// Return all the letters of the given layer (first-axis index), in the column, aisle order.
    pub fn layer(&self, row: usize) -> &[char] {
        let len: usize = self.size_y * self.size_z;
        let start: usize = (row * len).min(self.cells.len());
        let end: usize = (start + len).min(self.cells.len());
        &self.cells[start..end]
    }

    /// Iterate over all the positions, in the row, column, aisle order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.size_x).flat_map(move |row| {
            (0..self.size_y).flat_map(move |column| {
                (0..self.size_z).map(move |aisle| Position::new(row, column, aisle))
            })
        })
    }

    /// Whether every cell holds an alphabetic character.
    pub fn is_alphabetic(&self) -> bool {
        self.cells.iter().all(|c| c.is_alphabetic())
    }
}

/// Display the grid one layer at a time, with a blank line between the layers.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in 0..self.size_x {
            if row > 0 {
                writeln!(f)?;
            }
            for column in self.layer(row).chunks(self.size_z.max(1)) {
                let line: Vec<String> = column.iter().map(|c| c.to_string()).collect();
                writeln!(f, "{}", line.join(" "))?;
            }
        }
        Ok(())
    }
}
