/*
maker.rs

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

//! Generate a random puzzle that contains a list of words.
//!
//! Words are inserted one at a time, at a random position and in a random direction.
//! Inserting a word can overwrite the letters of the words already in the grid, so after each
//! insertion all the words inserted so far are searched again.
//! If a word cannot be inserted after [`MAX_TRIES`] attempts, then the whole grid is restarted
//! from the same random base grid, up to [`MAX_TRIES`] times.

use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::error::Error;
use std::fmt;
use std::time::Instant;

use super::grid::{self, Grid};
use super::placement::place_word;
use super::position::Placement;
use super::word_list;
use crate::solver;

/// Maximum number of attempts for inserting a word, and for building the whole grid.
pub const MAX_TRIES: usize = 100;

/// Type of errors.
#[derive(Debug, PartialEq)]
pub enum GenerateError {
    /// A dimension is negative or too large.
    InvalidDimension,

    /// The longest word is longer than the largest dimension of the grid.
    WordTooLong,

    /// The words could not be inserted before the number of attempts was exhausted.
    /// It is not possible to know if the puzzle has no solution or if a solution was missed.
    PlacementFailed,
}

impl fmt::Display for GenerateError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GenerateError::InvalidDimension => write!(f, "invalid grid dimension"),
            GenerateError::WordTooLong => write!(f, "a word is longer than the grid"),
            GenerateError::PlacementFailed => {
                write!(f, "cannot place the words after {MAX_TRIES} attempts")
            }
        }
    }
}

impl Error for GenerateError {}

/// [`PuzzleMaker`] object.
pub struct PuzzleMaker<R: Rng> {
    /// Source of all the random decisions.
    rng: R,

    /// Number of whole-grid attempts it took to generate the last puzzle.
    pub iteration: usize,

    /// Number of word placements tried while generating the last puzzle.
    pub placements: usize,

    /// Duration in seconds it took to generate the last puzzle.
    pub duration: f32,

    /// Time when the generation started. Used to compute the [`PuzzleMaker::duration`].
    start: Instant,
}

impl PuzzleMaker<StdRng> {
    /// Create the object with a reproducible random number generator.
    pub fn from_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    /// Create the object with a random number generator seeded by the operating system.
    pub fn from_os_rng() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }
}

impl<R: Rng> PuzzleMaker<R> {
    /// Create the object.
    pub fn with_rng(rng: R) -> Self {
        Self {
            rng,
            iteration: 0,
            placements: 0,
            duration: 0.0,
            start: Instant::now(),
        }
    }

    /// Return a grid filled with random letters.
    pub fn make_random(&mut self, size_x: usize, size_y: usize, size_z: usize) -> Grid {
        Grid::random(size_x, size_y, size_z, &mut self.rng)
    }

    /// Generate and return a grid of the given size that contains all the words.
    ///
    /// Empty words are ignored. Without any word, a grid of random letters is returned.
    /// See [`PuzzleMaker::make_from`] for the errors.
    pub fn make<S: AsRef<str>>(
        &mut self,
        words: &[S],
        size_x: i64,
        size_y: i64,
        size_z: i64,
    ) -> Result<Grid, GenerateError> {
        self.make_from(Some(words.iter().map(Some)), size_x, size_y, size_z)
    }

    /// Generate and return a grid of the given size from a list that might be missing, or that
    /// might contain missing words.
    ///
    /// Missing and empty words are ignored. Without any word, a grid of random letters is
    /// returned.
    ///
    /// # Errors
    ///
    /// The method returns an error if a dimension is negative or too large, if the longest word
    /// cannot fit in any dimension, or if the words could not be placed after [`MAX_TRIES`]
    /// attempts.
    pub fn make_from<I, S>(
        &mut self,
        words: Option<I>,
        size_x: i64,
        size_y: i64,
        size_z: i64,
    ) -> Result<Grid, GenerateError>
    where
        I: IntoIterator<Item = Option<S>>,
        S: AsRef<str>,
    {
        self.iteration = 0;
        self.placements = 0;
        self.duration = 0.0;
        self.start = Instant::now();

        let words: Vec<String> = word_list::sanitize(words);
        let size_x: usize = Self::dimension(size_x)?;
        let size_y: usize = Self::dimension(size_y)?;
        let size_z: usize = Self::dimension(size_z)?;
        if grid::checked_volume(size_x, size_y, size_z).is_none() {
            return Err(GenerateError::InvalidDimension);
        }

        if words.is_empty() {
            debug!("No word: random grid {size_x}x{size_y}x{size_z}");
            return Ok(self.make_random(size_x, size_y, size_z));
        }

        let longest: usize = word_list::longest(&words);
        if longest > size_x.max(size_y).max(size_z) {
            debug!("The longest word ({longest} letters) does not fit in {size_x}x{size_y}x{size_z}");
            return Err(GenerateError::WordTooLong);
        }

        let base: Grid = self.make_random(size_x, size_y, size_z);
        let mut res: Result<Grid, GenerateError> = Err(GenerateError::PlacementFailed);
        while self.iteration < MAX_TRIES {
            self.iteration += 1;
            debug!("== Building the grid (iteration {})", self.iteration);
            res = self.try_make(&base, &words);
            if res.is_ok() {
                break;
            }
        }

        self.duration = self.start.elapsed().as_secs_f32();
        info!(
            "{} words, iterations = {}  placements = {}  duration = {}s",
            words.len(),
            self.iteration,
            self.placements,
            self.duration
        );
        res
    }

    /// Convert a dimension provided by the caller.
    fn dimension(size: i64) -> Result<usize, GenerateError> {
        let size: u32 = u32::try_from(size).map_err(|_| GenerateError::InvalidDimension)?;
        usize::try_from(size).map_err(|_| GenerateError::InvalidDimension)
    }

    /// Insert all the words, in order, into a copy of the given grid.
    ///
    /// # Errors
    ///
    /// Return [`GenerateError::PlacementFailed`] as soon as a word cannot be inserted.
    pub fn try_make<S: AsRef<str>>(
        &mut self,
        grid: &Grid,
        words: &[S],
    ) -> Result<Grid, GenerateError> {
        let mut new_grid: Grid = grid.clone();
        for (i, word) in words.iter().enumerate() {
            new_grid = self.try_word(&new_grid, word.as_ref(), &words[..=i])?;
        }
        Ok(new_grid)
    }

    /// Insert a word at a random position and in a random direction into a copy of the grid.
    ///
    /// `placed` lists the words that must still be in the grid after the insertion, including the
    /// inserted word.
    ///
    /// # Errors
    ///
    /// Return [`GenerateError::PlacementFailed`] if no insertion keeps all the words in `placed`
    /// after [`MAX_TRIES`] attempts.
    pub fn try_word<S: AsRef<str>>(
        &mut self,
        grid: &Grid,
        word: &str,
        placed: &[S],
    ) -> Result<Grid, GenerateError> {
        if word.is_empty() {
            return Ok(grid.clone());
        }
        if grid.is_empty() {
            debug!("    No cell for {word:?}");
            return Err(GenerateError::PlacementFailed);
        }

        let (size_x, size_y, size_z) = grid.size();
        for _ in 0..MAX_TRIES {
            self.placements += 1;
            let placement: Placement =
                Placement::random(word, size_x, size_y, size_z, &mut self.rng);
            let Some(candidate) = place_word(grid, &placement) else {
                continue;
            };
            if solver::has_all(&candidate, placed) {
                debug!(
                    "    {word:?} placed at {} direction {:?}",
                    placement.anchor, placement.direction
                );
                return Ok(candidate);
            }
        }
        debug!("    Back: cannot place {word:?}");
        Err(GenerateError::PlacementFailed)
    }
}
