/*
generator.rs

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

//! Generate random word search puzzles.
//!
//! A puzzle is a [`grid::Grid`] object, a 3D array of letters.
//! The words are hidden along straight lines, described by [`position::Placement`] objects.
//!
//! To generate a puzzle, create a [`maker::PuzzleMaker`] object and use its
//! [`maker::PuzzleMaker::make`] method.
//! The method inserts the words one at a time with [`placement::place_word`], and verifies with
//! [`crate::solver`] that the previous words are still in the grid.
//! If it takes too many attempts to place the words, then the method returns an error.
//!
//! The [`word_list`] module cleans up the list of words before generating the puzzle.

pub mod grid;
pub mod maker;
pub mod placement;
pub mod position;
pub mod word_list;
