/*
lib.rs

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

//! Generate and solve 3D word search puzzles.
//!
//! The [`generator`] module builds a grid of random letters that hides a list of words along
//! straight lines in any of the 26 directions of the 3D grid.
//! The [`solver`] module finds the words back, and is also used by the generator to verify that
//! inserting a word did not break the words already in the grid.

pub mod cli_options;
pub mod export;
pub mod generator;
pub mod puzzle;
pub mod saver;
pub mod solver;

pub use generator::grid::Grid;
pub use generator::maker::{GenerateError, PuzzleMaker};
pub use generator::position::{Direction, Placement, Position};
pub use puzzle::Puzzle;
