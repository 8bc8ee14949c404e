//! Error types for board and game operations.

use std::fmt;

use super::Square;

/// Failures reported by board and game commands.
///
/// None of these are fatal: a rejected command leaves the game untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Square coordinates outside the 8x8 grid
    OutOfRange { row: isize, file: isize },
    /// Move is not in the legal set for the current position
    IllegalMove { from: Square, to: Square },
    /// Undo requested with nothing to undo
    EmptyHistory,
    /// Command issued after the game reached a terminal status
    GameOver,
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::OutOfRange { row, file } => {
                write!(f, "Square ({row}, {file}) is outside the board")
            }
            GameError::IllegalMove { from, to } => {
                write!(f, "Illegal move {from}{to}")
            }
            GameError::EmptyHistory => write!(f, "No moves to undo"),
            GameError::GameOver => write!(f, "The game is over"),
        }
    }
}

impl std::error::Error for GameError {}

/// Error type for square label parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Label is not a file letter a-h followed by a rank digit 1-8
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// Error type for long-algebraic move text ("e2e4", "e7e8q")
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveParseError {
    /// Move string has invalid length (must be 4-5 characters)
    InvalidLength { len: usize },
    /// Invalid square notation in move
    InvalidSquare { notation: String },
    /// Invalid promotion piece
    InvalidPromotion { char: char },
}

impl fmt::Display for MoveParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveParseError::InvalidLength { len } => {
                write!(f, "Move must be 4-5 characters, found {len}")
            }
            MoveParseError::InvalidSquare { notation } => {
                write!(f, "Invalid square notation in '{notation}'")
            }
            MoveParseError::InvalidPromotion { char } => {
                write!(f, "Invalid promotion piece '{char}'")
            }
        }
    }
}

impl std::error::Error for MoveParseError {}

impl From<SquareError> for MoveParseError {
    fn from(e: SquareError) -> Self {
        match e {
            SquareError::InvalidNotation { notation } => MoveParseError::InvalidSquare { notation },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range_mentions_coordinates() {
        let err = GameError::OutOfRange { row: 8, file: -1 };
        assert!(err.to_string().contains('8'));
        assert!(err.to_string().contains("-1"));
    }

    #[test]
    fn test_illegal_move_uses_square_names() {
        let err = GameError::IllegalMove {
            from: Square::E2,
            to: Square::E5,
        };
        assert!(err.to_string().contains("e2e5"));
    }

    #[test]
    fn test_square_error_invalid_notation() {
        let err = SquareError::InvalidNotation {
            notation: "z9".to_string(),
        };
        assert!(err.to_string().contains("z9"));
    }

    #[test]
    fn test_move_error_invalid_length() {
        let err = MoveParseError::InvalidLength { len: 3 };
        assert!(err.to_string().contains('3'));
    }

    #[test]
    fn test_square_error_converts_to_move_error() {
        let err: MoveParseError = SquareError::InvalidNotation {
            notation: "i1".to_string(),
        }
        .into();
        assert_eq!(
            err,
            MoveParseError::InvalidSquare {
                notation: "i1".to_string()
            }
        );
    }
}
