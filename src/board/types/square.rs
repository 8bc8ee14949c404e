//! Square types and utilities.
//!
//! Squares are addressed row-major from White's side of the table looking
//! down: row 0 is rank 8, row 7 is rank 1, file 0 is the a-file. Every label
//! conversion goes through this module so the two forms never drift apart.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::{GameError, SquareError};

/// A square on the chess board, represented as (row, file).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Square {
    row: usize,
    file: usize,
}

impl Square {
    pub const A1: Square = Square::at(7, 0);
    pub const B1: Square = Square::at(7, 1);
    pub const C1: Square = Square::at(7, 2);
    pub const D1: Square = Square::at(7, 3);
    pub const E1: Square = Square::at(7, 4);
    pub const F1: Square = Square::at(7, 5);
    pub const G1: Square = Square::at(7, 6);
    pub const H1: Square = Square::at(7, 7);
    pub const E2: Square = Square::at(6, 4);
    pub const E4: Square = Square::at(4, 4);
    pub const E5: Square = Square::at(3, 4);
    pub const E7: Square = Square::at(1, 4);
    pub const A8: Square = Square::at(0, 0);
    pub const B8: Square = Square::at(0, 1);
    pub const C8: Square = Square::at(0, 2);
    pub const D8: Square = Square::at(0, 3);
    pub const E8: Square = Square::at(0, 4);
    pub const F8: Square = Square::at(0, 5);
    pub const G8: Square = Square::at(0, 6);
    pub const H8: Square = Square::at(0, 7);

    /// Create a new square with bounds checking
    pub fn new(row: usize, file: usize) -> Result<Self, GameError> {
        if row < 8 && file < 8 {
            Ok(Square { row, file })
        } else {
            Err(GameError::OutOfRange {
                row: row as isize,
                file: file as isize,
            })
        }
    }

    /// Unchecked constructor for coordinates already known to be on the board
    #[inline]
    pub(crate) const fn at(row: usize, file: usize) -> Self {
        Square { row, file }
    }

    /// Row index (0 = rank 8, 7 = rank 1)
    #[inline]
    #[must_use]
    pub const fn row(self) -> usize {
        self.row
    }

    /// File index (0 = file a)
    #[inline]
    #[must_use]
    pub const fn file(self) -> usize {
        self.file
    }

    /// Rank number as printed on the board (1-8)
    #[inline]
    #[must_use]
    pub const fn rank(self) -> usize {
        8 - self.row
    }

    /// Row-major index (a8 = 0, h8 = 7, ..., h1 = 63)
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.row * 8 + self.file
    }

    /// Create a square from a row-major index (0-63)
    #[inline]
    #[must_use]
    pub const fn from_index(idx: usize) -> Self {
        Square::at(idx / 8, idx % 8)
    }

    /// Step by a (row, file) delta, or `None` when it leaves the board
    #[inline]
    #[must_use]
    pub fn offset(self, d_row: isize, d_file: isize) -> Option<Square> {
        let row = self.row as isize + d_row;
        let file = self.file as isize + d_file;
        if (0..8).contains(&row) && (0..8).contains(&file) {
            Some(Square::at(row as usize, file as usize))
        } else {
            None
        }
    }

    /// Light squares (h1, a8, ...) have an even row + file sum
    #[inline]
    #[must_use]
    pub const fn is_light(self) -> bool {
        (self.row + self.file) % 2 == 0
    }

    /// All 64 squares in row-major order, starting at a8
    pub fn all() -> impl Iterator<Item = Square> {
        (0..64).map(Square::from_index)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (self.file as u8 + b'a') as char, self.rank())
    }
}

impl TryFrom<(isize, isize)> for Square {
    type Error = GameError;

    fn try_from((row, file): (isize, isize)) -> Result<Self, Self::Error> {
        if (0..8).contains(&row) && (0..8).contains(&file) {
            Ok(Square::at(row as usize, file as usize))
        } else {
            Err(GameError::OutOfRange { row, file })
        }
    }
}

impl FromStr for Square {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return Err(SquareError::InvalidNotation {
                notation: s.to_string(),
            });
        }

        let file = match bytes[0] {
            b'a'..=b'h' => (bytes[0] - b'a') as usize,
            _ => {
                return Err(SquareError::InvalidNotation {
                    notation: s.to_string(),
                })
            }
        };

        let row = match bytes[1] {
            b'1'..=b'8' => 8 - (bytes[1] - b'0') as usize,
            _ => {
                return Err(SquareError::InvalidNotation {
                    notation: s.to_string(),
                })
            }
        };

        Ok(Square::at(row, file))
    }
}
