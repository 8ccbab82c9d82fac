/*
position.rs

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

//! Cell positions, directions, and word placements in the 3D grid.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Position of a cell in the grid.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Position {
    /// Index along the first axis.
    pub row: usize,

    /// Index along the second axis.
    pub column: usize,

    /// Index along the third axis.
    pub aisle: usize,
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {}, {})", self.row, self.column, self.aisle)
    }
}

impl Position {
    /// Create a [`Position`] object.
    pub fn new(row: usize, column: usize, aisle: usize) -> Self {
        Self { row, column, aisle }
    }

    /// Return a random position inside a grid of the given size.
    ///
    /// All three sizes must be greater than zero.
    pub fn random<R: Rng + ?Sized>(
        size_x: usize,
        size_y: usize,
        size_z: usize,
        rng: &mut R,
    ) -> Self {
        Self {
            row: rng.random_range(0..size_x),
            column: rng.random_range(0..size_y),
            aisle: rng.random_range(0..size_z),
        }
    }

    /// Return the position reached after moving `distance` steps in the given direction.
    ///
    /// Return None when a coordinate would become negative. The upper bounds are not verified
    /// here because they depend on the grid.
    pub fn offset(&self, direction: Direction, distance: usize) -> Option<Self> {
        let distance: isize = isize::try_from(distance).ok()?;
        Some(Self {
            row: self
                .row
                .checked_add_signed(direction.dx as isize * distance)?,
            column: self
                .column
                .checked_add_signed(direction.dy as isize * distance)?,
            aisle: self
                .aisle
                .checked_add_signed(direction.dz as isize * distance)?,
        })
    }

    /// Return the coordinates as an array, in the `row`, `column`, `aisle` order.
    pub fn to_array(self) -> [usize; 3] {
        [self.row, self.column, self.aisle]
    }
}

/// Direction of a word in the grid.
///
/// Each component is -1, 0, or 1. The zero vector is never part of [`Direction::ALL`].
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Direction {
    pub dx: i8,
    pub dy: i8,
    pub dz: i8,
}

impl Direction {
    /// The 26 non-zero directions, in the `dx`, `dy`, `dz` lexicographic order.
    pub const ALL: [Direction; 26] = {
        let mut all: [Direction; 26] = [Direction {
            dx: 0,
            dy: 0,
            dz: 0,
        }; 26];
        let mut i: usize = 0;
        let mut dx: i8 = -1;
        while dx <= 1 {
            let mut dy: i8 = -1;
            while dy <= 1 {
                let mut dz: i8 = -1;
                while dz <= 1 {
                    if dx != 0 || dy != 0 || dz != 0 {
                        all[i] = Direction { dx, dy, dz };
                        i += 1;
                    }
                    dz += 1;
                }
                dy += 1;
            }
            dx += 1;
        }
        all
    };

    /// Create a [`Direction`] object.
    ///
    /// Return None if a component is not -1, 0, or 1, or for the zero vector.
    pub fn new(dx: i8, dy: i8, dz: i8) -> Option<Self> {
        let valid = |c: i8| (-1..=1).contains(&c);
        if !valid(dx) || !valid(dy) || !valid(dz) || (dx == 0 && dy == 0 && dz == 0) {
            return None;
        }
        Some(Self { dx, dy, dz })
    }

    /// Return a direction chosen uniformly among the 26 non-zero directions.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }

    /// Return the direction pointing the opposite way.
    pub fn reversed(&self) -> Self {
        Self {
            dx: -self.dx,
            dy: -self.dy,
            dz: -self.dz,
        }
    }
}

/// Where and how a word sits in the grid.
#[derive(Debug, Clone, PartialEq)]
pub struct Placement<'a> {
    /// The word.
    pub word: &'a str,

    /// Position of the first letter.
    pub anchor: Position,

    /// Direction from one letter to the next.
    pub direction: Direction,
}

impl<'a> Placement<'a> {
    /// Create a [`Placement`] object.
    pub fn new(word: &'a str, anchor: Position, direction: Direction) -> Self {
        Self {
            word,
            anchor,
            direction,
        }
    }

    /// Return a placement with a random anchor and direction.
    pub fn random<R: Rng + ?Sized>(
        word: &'a str,
        size_x: usize,
        size_y: usize,
        size_z: usize,
        rng: &mut R,
    ) -> Self {
        Self {
            word,
            anchor: Position::random(size_x, size_y, size_z, rng),
            direction: Direction::random(rng),
        }
    }

    /// Return the position of each letter of the word, or None if a position has a negative
    /// coordinate.
    pub fn positions(&self) -> Option<Vec<Position>> {
        (0..self.word.chars().count())
            .map(|i| self.anchor.offset(self.direction, i))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    #[test]
    fn test_all_directions_are_distinct_and_non_zero() {
        let set: HashSet<Direction> = Direction::ALL.iter().copied().collect();
        assert_eq!(set.len(), 26);
        assert!(!set.iter().any(|d| d.dx == 0 && d.dy == 0 && d.dz == 0));
        assert_eq!(Direction::ALL[0], Direction::new(-1, -1, -1).unwrap());
        assert_eq!(Direction::ALL[25], Direction::new(1, 1, 1).unwrap());
    }

    #[test]
    fn test_direction_new_rejects_invalid_components() {
        assert!(Direction::new(0, 0, 0).is_none());
        assert!(Direction::new(2, 0, 0).is_none());
        assert!(Direction::new(0, -2, 1).is_none());
        assert_eq!(
            Direction::new(1, 0, -1).unwrap().reversed(),
            Direction::new(-1, 0, 1).unwrap()
        );
    }

    #[test]
    fn test_offset() {
        let p = Position::new(1, 1, 0);
        let d = Direction::new(1, -1, 1).unwrap();
        assert_eq!(p.offset(d, 0), Some(p));
        assert_eq!(p.offset(d, 1), Some(Position::new(2, 0, 1)));
        assert_eq!(p.offset(d, 2), None);
    }

    #[test]
    fn test_placement_positions() {
        let placement = Placement::new(
            "cat",
            Position::new(0, 2, 1),
            Direction::new(1, -1, 0).unwrap(),
        );
        assert_eq!(
            placement.positions(),
            Some(vec![
                Position::new(0, 2, 1),
                Position::new(1, 1, 1),
                Position::new(2, 0, 1),
            ])
        );

        let placement = Placement::new("cat", Position::new(0, 0, 0), Direction::ALL[0]);
        assert_eq!(placement.positions(), None);
    }

    #[test]
    fn test_random_position_is_in_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let p = Position::random(2, 3, 1, &mut rng);
            assert!(p.row < 2 && p.column < 3 && p.aisle == 0);
        }
    }
}
