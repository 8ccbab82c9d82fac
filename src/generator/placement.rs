/*
placement.rs

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

//! Write a word into a grid.

use super::grid::Grid;
use super::position::{Placement, Position};

/// Return a copy of the grid with the word written along the placement line.
///
/// Return None if a letter would fall outside the grid. The existing letters are not inspected:
/// the word can overwrite letters that belong to other words. The caller is responsible for
/// verifying that the previous words are still present.
pub fn place_word(grid: &Grid, placement: &Placement) -> Option<Grid> {
    let positions: Vec<Position> = placement.positions()?;
    if !positions.iter().all(|p| grid.contains(p)) {
        return None;
    }

    let mut new_grid: Grid = grid.clone();
    for (position, letter) in positions.iter().zip(placement.word.chars()) {
        new_grid.set(position, letter);
    }
    Some(new_grid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::position::Direction;

    fn blank(size_x: usize, size_y: usize, size_z: usize) -> Grid {
        Grid::from_letters(size_x, size_y, size_z, vec!['.'; size_x * size_y * size_z]).unwrap()
    }

    #[test]
    fn test_place_word_writes_only_the_line() {
        let grid = blank(3, 3, 3);
        let placement = Placement::new(
            "cat",
            Position::new(2, 0, 1),
            Direction::new(-1, 1, 0).unwrap(),
        );
        let new_grid = place_word(&grid, &placement).unwrap();

        assert_eq!(new_grid.get(&Position::new(2, 0, 1)), Some('c'));
        assert_eq!(new_grid.get(&Position::new(1, 1, 1)), Some('a'));
        assert_eq!(new_grid.get(&Position::new(0, 2, 1)), Some('t'));
        let others = new_grid
            .positions()
            .filter(|p| new_grid.get(p) == Some('.'))
            .count();
        assert_eq!(others, 24);

        // The source grid is untouched
        assert!(grid.positions().all(|p| grid.get(&p) == Some('.')));
    }

    #[test]
    fn test_place_word_out_of_bounds() {
        let grid = blank(1, 1, 4);
        let d = Direction::new(0, 0, 1).unwrap();
        assert!(place_word(&grid, &Placement::new("java", Position::new(0, 0, 1), d)).is_none());
        assert!(place_word(&grid, &Placement::new("java", Position::new(0, 0, 0), d)).is_some());
        assert!(
            place_word(&grid, &Placement::new("java", Position::new(0, 0, 2), d.reversed()))
                .is_none()
        );
    }

    #[test]
    fn test_place_word_overwrites_blindly() {
        let grid = blank(1, 1, 3);
        let d = Direction::new(0, 0, 1).unwrap();
        let grid = place_word(&grid, &Placement::new("abc", Position::new(0, 0, 0), d)).unwrap();
        let grid = place_word(&grid, &Placement::new("xy", Position::new(0, 0, 1), d)).unwrap();
        assert_eq!(grid.layer(0), &['a', 'x', 'y']);
    }
}
