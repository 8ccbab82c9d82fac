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

//! Save and restore a generated puzzle.
//!
//! The saved object is a serialization of the [`Puzzle`] object in JSON format by using
//! [`serde`].

use log::debug;
use std::error::Error;
use std::fs::File;
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::PathBuf;

use crate::puzzle::Puzzle;

/// Object to save and restore a puzzle.
pub struct SaverPuzzle {
    /// Path to the save file.
    save_file: PathBuf,
}

impl SaverPuzzle {
    /// Create a [`SaverPuzzle`] object.
    ///
    /// The provided [`PathBuf`] is the path to the JSON file.
    pub fn new(save_file: PathBuf) -> Self {
        debug!("Puzzle file: {save_file:?}");
        Self { save_file }
    }

    /// Retrieve the [`Puzzle`] object from the save file.
    ///
    /// Return the [`Puzzle`] object or None if the file does not exist.
    pub fn get_puzzle(&self) -> Result<Option<Puzzle>, Box<dyn Error>> {
        let file: File;
        match File::open(&self.save_file) {
            Ok(f) => file = f,
            Err(error) => match error.kind() {
                ErrorKind::NotFound => return Ok(None),
                _ => return Err(Box::new(error)),
            },
        }
        let reader: BufReader<File> = BufReader::new(file);
        let puzzle: Puzzle = serde_json::from_reader(reader)?;
        Ok(Some(puzzle))
    }

    /// Save the provided [`Puzzle`] object.
    pub fn save_puzzle(&self, puzzle: &Puzzle) -> Result<(), Box<dyn Error>> {
        let file: File = File::create(&self.save_file)?;
        let mut writer: BufWriter<File> = BufWriter::new(file);

        serde_json::to_writer(&mut writer, puzzle)?;
        writer.flush()?;
        Ok(())
    }
}
