//! Move text: long algebraic input ("e2e4", "e7e8q") and history lines.

use std::fmt;
use std::str::FromStr;

use crate::board::{GameError, Move, MoveParseError, PieceKind, Square};

/// A move as typed by a player, before it is checked against the position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveText {
    pub from: Square,
    pub to: Square,
    pub promotion: Option<PieceKind>,
}

impl FromStr for MoveText {
    type Err = MoveParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if !s.is_ascii() || !(4..=5).contains(&s.len()) {
            return Err(MoveParseError::InvalidLength {
                len: s.chars().count(),
            });
        }

        let from: Square = s[0..2].parse()?;
        let to: Square = s[2..4].parse()?;

        let promotion = match s[4..].chars().next() {
            None => None,
            Some(c) => match PieceKind::from_char(c) {
                Some(kind) if kind.is_promotion_target() => Some(kind),
                _ => return Err(MoveParseError::InvalidPromotion { char: c }),
            },
        };

        Ok(MoveText {
            from,
            to,
            promotion,
        })
    }
}

/// Move text that could not be played: either it does not parse, or it
/// parses to a move the position rejects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveTextError {
    Parse(MoveParseError),
    Rejected(GameError),
}

impl fmt::Display for MoveTextError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveTextError::Parse(e) => write!(f, "{e}"),
            MoveTextError::Rejected(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for MoveTextError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MoveTextError::Parse(e) => Some(e),
            MoveTextError::Rejected(e) => Some(e),
        }
    }
}

impl From<MoveParseError> for MoveTextError {
    fn from(e: MoveParseError) -> Self {
        MoveTextError::Parse(e)
    }
}

impl From<GameError> for MoveTextError {
    fn from(e: GameError) -> Self {
        MoveTextError::Rejected(e)
    }
}

/// Numbered history lines, one per ply: `"1. e2 → e4"`.
#[must_use]
pub fn format_history<'a>(moves: impl IntoIterator<Item = &'a Move>) -> Vec<String> {
    moves
        .into_iter()
        .enumerate()
        .map(|(i, mv)| format!("{}. {} → {}", i + 1, mv.from, mv.to))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_and_promotion() {
        let plain: MoveText = "e2e4".parse().unwrap();
        assert_eq!(plain.from, Square::E2);
        assert_eq!(plain.to, Square::E4);
        assert_eq!(plain.promotion, None);

        let promo: MoveText = "e7e8n".parse().unwrap();
        assert_eq!(promo.promotion, Some(PieceKind::Knight));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "e2e".parse::<MoveText>(),
            Err(MoveParseError::InvalidLength { len: 3 })
        );
        assert_eq!(
            "e2z4".parse::<MoveText>(),
            Err(MoveParseError::InvalidSquare {
                notation: "z4".to_string()
            })
        );
        assert_eq!(
            "e7e8k".parse::<MoveText>(),
            Err(MoveParseError::InvalidPromotion { char: 'k' })
        );
    }
}
