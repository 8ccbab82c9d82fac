/*
export.rs

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

//! Export grids and word locations to text files, and import grids back.
//!
//! # Grid file
//!
//! The first line gives the three dimensions.
//! Then, each line lists all the letters of a layer (first axis), each letter followed by a
//! space:
//!
//! ```text
//! 2 2 3
//! a b c d f e
//! g h i j k l
//! ```
//!
//! # Locations file
//!
//! The first line gives the number of words found in the grid.
//! Then, for each found word, a line gives the number of letters and the next line lists the
//! `row column aisle` coordinates of each letter:
//!
//! ```text
//! 1
//! 2
//! 0 0 1 0 1 2
//! ```

use log::debug;
use std::error::Error;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use crate::generator::grid::{Grid, GridError};
use crate::generator::position::Position;

/// Write the grid in the grid file format.
pub fn write_grid<W: Write>(grid: &Grid, writer: &mut W) -> std::io::Result<()> {
    let (size_x, size_y, size_z) = grid.size();
    writeln!(writer, "{size_x} {size_y} {size_z}")?;
    for row in 0..size_x {
        for letter in grid.layer(row) {
            write!(writer, "{letter} ")?;
        }
        writeln!(writer)?;
    }
    Ok(())
}

/// Write the grid to the given file.
pub fn export_grid<P: AsRef<Path>>(grid: &Grid, path: P) -> std::io::Result<()> {
    debug!("Exporting the grid to {:?}", path.as_ref());
    let file: File = File::create(path)?;
    let mut writer: BufWriter<File> = BufWriter::new(file);

    write_grid(grid, &mut writer)?;
    writer.flush()
}

/// Write the locations of the found words in the locations file format.
///
/// The words that were not found (`None`) are skipped.
pub fn write_locations<W: Write>(
    locations: &[Option<Vec<Position>>],
    writer: &mut W,
) -> std::io::Result<()> {
    let found: Vec<&Vec<Position>> = locations.iter().flatten().collect();
    writeln!(writer, "{}", found.len())?;
    for positions in found {
        writeln!(writer, "{}", positions.len())?;
        for position in positions {
            for coordinate in position.to_array() {
                write!(writer, "{coordinate} ")?;
            }
        }
        writeln!(writer)?;
    }
    Ok(())
}

/// Write the locations of the found words to the given file.
pub fn export_locations<P: AsRef<Path>>(
    locations: &[Option<Vec<Position>>],
    path: P,
) -> std::io::Result<()> {
    debug!("Exporting the locations to {:?}", path.as_ref());
    let file: File = File::create(path)?;
    let mut writer: BufWriter<File> = BufWriter::new(file);

    write_locations(locations, &mut writer)?;
    writer.flush()
}

/// Parse a grid in the grid file format.
pub fn read_grid<R: BufRead>(reader: R) -> Result<Grid, Box<dyn Error>> {
    let mut lines = reader.lines();

    let header: String = lines.next().transpose()?.unwrap_or_default();
    let sizes: Vec<usize> = header
        .split_whitespace()
        .map(|s| s.parse::<usize>())
        .collect::<Result<Vec<usize>, _>>()
        .map_err(|_| GridError::InvalidHeader(header.clone()))?;
    let [size_x, size_y, size_z] = sizes[..] else {
        return Err(Box::new(GridError::InvalidHeader(header)));
    };

    let per_line: usize = size_y.checked_mul(size_z).ok_or(GridError::Overflow)?;
    let mut letters: Vec<char> = Vec::new();
    let mut num_lines: usize = 0;
    for line in lines {
        let line: String = line?;
        if num_lines >= size_x {
            if line.trim().is_empty() {
                continue;
            }
            num_lines += 1;
            continue;
        }
        num_lines += 1;
        let start: usize = letters.len();
        for token in line.split_whitespace() {
            let mut chars = token.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => letters.push(c),
                _ => return Err(Box::new(GridError::InvalidToken(token.to_string()))),
            }
        }
        if letters.len() - start != per_line {
            return Err(Box::new(GridError::WrongLetterCount {
                expected: per_line,
                found: letters.len() - start,
            }));
        }
    }
    if num_lines != size_x {
        return Err(Box::new(GridError::WrongLineCount {
            expected: size_x,
            found: num_lines,
        }));
    }
    Ok(Grid::from_letters(size_x, size_y, size_z, letters)?)
}

/// Read a grid from the given file.
pub fn import_grid<P: AsRef<Path>>(path: P) -> Result<Grid, Box<dyn Error>> {
    debug!("Importing the grid from {:?}", path.as_ref());
    let file: File = File::open(path)?;
    read_grid(BufReader::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Grid {
        Grid::from_rows(vec![
            vec![vec!['a', 'b', 'c'], vec!['d', 'f', 'e']],
            vec![vec!['g', 'h', 'i'], vec!['j', 'k', 'l']],
        ])
        .unwrap()
    }

    #[test]
    fn test_write_grid() {
        let mut out: Vec<u8> = Vec::new();
        write_grid(&sample(), &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "2 2 3\na b c d f e \ng h i j k l \n"
        );
    }

    #[test]
    fn test_write_empty_grid() {
        let mut out: Vec<u8> = Vec::new();
        let grid = Grid::from_letters(0, 0, 0, Vec::new()).unwrap();
        write_grid(&grid, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "0 0 0\n");
    }

    #[test]
    fn test_write_locations_skips_missing_words() {
        let locations = vec![
            Some(vec![Position::new(0, 0, 1), Position::new(0, 1, 2)]),
            None,
            Some(vec![Position::new(2, 1, 0)]),
        ];
        let mut out: Vec<u8> = Vec::new();
        write_locations(&locations, &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "2\n2\n0 0 1 0 1 2 \n1\n2 1 0 \n"
        );
    }

    #[test]
    fn test_write_no_location() {
        let mut out: Vec<u8> = Vec::new();
        write_locations(&[None, None], &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "0\n");
    }

    #[test]
    fn test_read_back_written_grid() {
        let grid = sample();
        let mut out: Vec<u8> = Vec::new();
        write_grid(&grid, &mut out).unwrap();
        assert_eq!(read_grid(out.as_slice()).unwrap(), grid);

        let empty = Grid::from_letters(2, 0, 5, Vec::new()).unwrap();
        let mut out: Vec<u8> = Vec::new();
        write_grid(&empty, &mut out).unwrap();
        assert_eq!(read_grid(out.as_slice()).unwrap(), empty);
    }

    #[test]
    fn test_read_grid_errors() {
        assert!(read_grid("".as_bytes()).is_err());
        assert!(read_grid("2 2\na b c d\n".as_bytes()).is_err());
        assert!(read_grid("1 1 x\na\n".as_bytes()).is_err());
        assert!(read_grid("2 1 2\na b\n".as_bytes()).is_err());
        assert!(read_grid("1 1 2\na b\nc d\n".as_bytes()).is_err());
        assert!(read_grid("1 1 2\nab c\n".as_bytes()).is_err());
        assert!(read_grid("1 1 2\na b c\n".as_bytes()).is_err());
        assert!(read_grid("1 1 2\na b\n\n".as_bytes()).is_ok());
    }

    #[test]
    fn test_read_grid_checks_each_layer() {
        let error = read_grid("2 1 2\na b c\nd\n".as_bytes()).unwrap_err();
        assert_eq!(
            error.downcast_ref::<GridError>(),
            Some(&GridError::WrongLetterCount {
                expected: 2,
                found: 3
            })
        );
        let error = read_grid("2 1 2\na b\nc\n".as_bytes()).unwrap_err();
        assert_eq!(
            error.downcast_ref::<GridError>(),
            Some(&GridError::WrongLetterCount {
                expected: 2,
                found: 1
            })
        );
    }

    #[test]
    fn test_export_and_import_file() {
        let path = std::env::temp_dir().join(format!("cubeword-grid-{}.txt", std::process::id()));
        let grid = sample();
        export_grid(&grid, &path).unwrap();
        let back = import_grid(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(back, grid);
    }

    #[test]
    fn test_export_to_missing_directory() {
        assert!(export_grid(&sample(), "/nonexistent/cubeword/grid.txt").is_err());
        assert!(export_locations(&[], "/nonexistent/cubeword/locations.txt").is_err());
    }
}
