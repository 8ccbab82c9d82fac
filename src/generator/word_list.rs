/*
word_list.rs

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

//! Word lists.

use log::debug;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Words used when no word file is provided on the command line.
pub const DEMO_WORDS: [&str; 40] = [
    "apple",
    "orange",
    "pear",
    "peach",
    "durian",
    "lemon",
    "lime",
    "jackfruit",
    "plum",
    "grape",
    "apricot",
    "blueberry",
    "tangerine",
    "coconut",
    "mango",
    "lychee",
    "guava",
    "strawberry",
    "kiwi",
    "kumquat",
    "persimmon",
    "papaya",
    "longan",
    "eggplant",
    "cucumber",
    "tomato",
    "zucchini",
    "olive",
    "pea",
    "pumpkin",
    "cherry",
    "date",
    "nectarine",
    "breadfruit",
    "sapodilla",
    "rowan",
    "quince",
    "toyon",
    "sorb",
    "medlar",
];

/// Remove the missing and the empty words from the list.
///
/// A missing list is treated as an empty list.
pub fn sanitize<I, S>(words: Option<I>) -> Vec<String>
where
    I: IntoIterator<Item = Option<S>>,
    S: AsRef<str>,
{
    let Some(words) = words else {
        return Vec::new();
    };
    words
        .into_iter()
        .flatten()
        .filter(|w| !w.as_ref().is_empty())
        .map(|w| w.as_ref().to_string())
        .collect()
}

/// Return the number of letters in the longest word, or 0 for an empty list.
pub fn longest<S: AsRef<str>>(words: &[S]) -> usize {
    words
        .iter()
        .map(|w| w.as_ref().chars().count())
        .max()
        .unwrap_or(0)
}

/// Read a word file, one word per line.
///
/// Leading and trailing spaces are removed, and the blank lines are skipped.
pub fn load<P: AsRef<Path>>(path: P) -> std::io::Result<Vec<String>> {
    let file: File = File::open(path.as_ref())?;
    let mut words: Vec<String> = Vec::new();
    for line in BufReader::new(file).lines() {
        let line: String = line?;
        let word: &str = line.trim();
        if !word.is_empty() {
            words.push(word.to_string());
        }
    }
    debug!("Loaded {} words from {:?}", words.len(), path.as_ref());
    Ok(words)
}
