use std::fmt;

use super::{Color, Piece, PieceKind, Square};

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// 8x8 grid of optional pieces, indexed `[row][file]`.
///
/// Pure data: the only mutation path is [`Board::set`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    squares: [[Option<Piece>; 8]; 8],
}

impl Board {
    /// Standard starting position
    #[must_use]
    pub fn new() -> Self {
        let mut board = Board::empty();
        for (file, kind) in BACK_RANK.iter().enumerate() {
            board.set(Square::at(0, file), Some(Piece::new(Color::Black, *kind)));
            board.set(Square::at(1, file), Some(Piece::new(Color::Black, PieceKind::Pawn)));
            board.set(Square::at(6, file), Some(Piece::new(Color::White, PieceKind::Pawn)));
            board.set(Square::at(7, file), Some(Piece::new(Color::White, *kind)));
        }
        board
    }

    #[must_use]
    pub fn empty() -> Self {
        Board {
            squares: [[None; 8]; 8],
        }
    }

    #[inline]
    #[must_use]
    pub fn get(&self, sq: Square) -> Option<Piece> {
        self.squares[sq.row()][sq.file()]
    }

    #[inline]
    pub fn set(&mut self, sq: Square, piece: Option<Piece>) {
        self.squares[sq.row()][sq.file()] = piece;
    }

    #[inline]
    #[must_use]
    pub fn is_occupied(&self, sq: Square) -> bool {
        self.get(sq).is_some()
    }

    #[inline]
    #[must_use]
    pub fn is_occupied_by_color(&self, sq: Square, color: Color) -> bool {
        matches!(self.get(sq), Some(p) if p.color == color)
    }

    /// Remove and return whatever stands on `sq`
    #[inline]
    pub(crate) fn take(&mut self, sq: Square) -> Option<Piece> {
        self.squares[sq.row()][sq.file()].take()
    }

    /// Every occupied square with its piece, in row-major order
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| self.get(sq).map(|p| (sq, p)))
    }

    /// Occupied squares of one color, in row-major order
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.pieces().filter(move |(_, p)| p.color == color)
    }

    #[must_use]
    pub fn find_king(&self, color: Color) -> Option<Square> {
        self.pieces_of(color)
            .find(|(_, p)| p.kind == PieceKind::King)
            .map(|(sq, _)| sq)
    }

    /// Neither side can possibly deliver mate: bare kings, a single minor
    /// piece, or bishops that all stand on one square colour.
    #[must_use]
    pub fn is_insufficient_material(&self) -> bool {
        let mut knights = 0;
        let mut light_bishops = 0;
        let mut dark_bishops = 0;

        for (sq, piece) in self.pieces() {
            match piece.kind {
                PieceKind::Pawn | PieceKind::Rook | PieceKind::Queen => return false,
                PieceKind::Knight => knights += 1,
                PieceKind::Bishop if sq.is_light() => light_bishops += 1,
                PieceKind::Bishop => dark_bishops += 1,
                PieceKind::King => {}
            }
        }

        let total_minors = knights + light_bishops + dark_bishops;
        if total_minors <= 1 {
            return true;
        }

        knights == 0 && (light_bishops == 0 || dark_bishops == 0)
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

/// Text diagram from White's point of view, rank 8 at the top.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..8 {
            write!(f, "{} ", 8 - row)?;
            for file in 0..8 {
                let ch = self.get(Square::at(row, file)).map_or('.', Piece::to_char);
                write!(f, " {ch}")?;
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}
