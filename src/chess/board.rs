//! Square-centric ("mailbox") board: an 8x8 grid of optional pieces.
//!
//! The board only stores pieces and provides mutation primitives. It does not
//! know whose turn it is and does not validate moves: the move generator
//! ([`crate::chess::movegen`]) is the only producer of destinations and
//! [`Board::apply_move`] trusts it.

use std::fmt::{self, Write};

use anyhow::bail;

use crate::chess::core::{
    MoveAttributes,
    OutOfRangeError,
    Piece,
    PieceKind,
    Player,
    Square,
    BOARD_WIDTH,
};

const BACK_RANK: [PieceKind; BOARD_WIDTH as usize] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Piece placement on the board. Exactly one piece occupies a square or the
/// square is empty.
#[derive(Copy, Clone, PartialEq, Eq)]
pub struct Board {
    squares: [[Option<Piece>; BOARD_WIDTH as usize]; BOARD_WIDTH as usize],
}

impl Board {
    /// Creates the starting position of the standard chess variant.
    ///
    /// ```
    /// use hotseat::chess::board::Board;
    ///
    /// assert_eq!(
    ///     Board::starting().to_string(),
    ///     "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR"
    /// );
    /// ```
    #[must_use]
    pub fn starting() -> Self {
        let mut board = Self::empty();
        for (row, owner) in [(0, Player::Black), (7, Player::White)] {
            for (col, kind) in BACK_RANK.iter().enumerate() {
                board.squares[row][col] = Some(Piece::new(owner, *kind));
            }
        }
        for owner in [Player::White, Player::Black] {
            let row = owner.pawns_starting_row() as usize;
            board.squares[row] = [Some(Piece::new(owner, PieceKind::Pawn)); BOARD_WIDTH as usize];
        }
        board
    }

    /// Board without any pieces.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            squares: [[None; BOARD_WIDTH as usize]; BOARD_WIDTH as usize],
        }
    }

    /// Returns the piece on the square, if any.
    #[must_use]
    pub const fn at(&self, square: Square) -> Option<Piece> {
        self.squares[square.row() as usize][square.col() as usize]
    }

    /// Returns the piece at raw coordinates.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfRangeError`] if either coordinate is outside
    /// `0..BOARD_WIDTH`.
    pub fn get(&self, row: i32, col: i32) -> Result<Option<Piece>, OutOfRangeError> {
        Ok(self.at(Square::new(row, col)?))
    }

    /// Puts the piece on the square, replacing whatever was there.
    pub fn place(&mut self, square: Square, piece: Piece) {
        self.squares[square.row() as usize][square.col() as usize] = Some(piece);
    }

    /// Clears the square and returns the piece that occupied it.
    pub fn remove(&mut self, square: Square) -> Option<Piece> {
        self.squares[square.row() as usize][square.col() as usize].take()
    }

    /// Moves the piece from one square to another, capturing whatever was on
    /// the target square. A pawn reaching the farthest row is promoted to a
    /// queen in place.
    ///
    /// The move is not validated: `to` is expected to be produced by
    /// [`crate::chess::movegen::generate_moves`] for the piece on `from`.
    /// Moving from an empty square does nothing.
    pub fn apply_move(&mut self, from: Square, to: Square) -> MoveAttributes {
        debug_assert!(self.at(from).is_some(), "can't move from empty square {from}");
        let Some(mut piece) = self.remove(from) else {
            return MoveAttributes::QUIET;
        };
        let mut attributes = MoveAttributes::QUIET;
        if let Some(captured) = self.remove(to) {
            debug_assert_ne!(captured.owner, piece.owner, "can't capture own piece on {to}");
            attributes |= MoveAttributes::CAPTURE;
        }
        if piece.kind == PieceKind::Pawn {
            if from.row().abs_diff(to.row()) == 2 {
                attributes |= MoveAttributes::DOUBLE_PAWN_PUSH;
            }
            if to.row() == piece.owner.promotion_row() {
                piece.kind = PieceKind::Queen;
                attributes |= MoveAttributes::PROMOTION;
            }
        }
        self.place(to, piece);
        attributes
    }

    /// Iterates over pieces of the player in row-major order.
    pub fn pieces(&self, player: Player) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::iter().filter_map(move |square| match self.at(square) {
            Some(piece) if piece.owner == player => Some((square, piece)),
            _ => None,
        })
    }

    /// Total number of pieces on the board.
    #[must_use]
    pub fn num_pieces(&self) -> usize {
        self.squares.iter().flatten().flatten().count()
    }

    /// Returns a printable diagram of the board with rank and file labels.
    #[must_use]
    pub const fn diagram(&self, figurines: bool) -> Diagram<'_> {
        Diagram {
            board: self,
            figurines,
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::starting()
    }
}

impl TryFrom<&str> for Board {
    type Error = anyhow::Error;

    /// Parses the piece placement field of [Forsyth-Edwards Notation]: ranks
    /// from 8 to 1 separated by '/', digits for runs of empty squares.
    ///
    /// [Forsyth-Edwards Notation]: https://www.chessprogramming.org/Forsyth-Edwards_Notation
    fn try_from(placement: &str) -> anyhow::Result<Self> {
        let placement = placement.trim();
        let mut result = Self::empty();
        let mut rows = 0;
        for (row, rank_fen) in placement.split('/').enumerate() {
            if row >= BOARD_WIDTH as usize {
                bail!("incorrect placement: expected 8 ranks, got {placement}");
            }
            let mut col: usize = 0;
            for symbol in rank_fen.chars() {
                match symbol {
                    '0' => bail!("increment can not be 0"),
                    '1'..='8' => {
                        col += (symbol as u8 - b'0') as usize;
                    },
                    _ => {
                        if col >= BOARD_WIDTH as usize {
                            bail!("file exceeded {BOARD_WIDTH} in rank '{rank_fen}'");
                        }
                        result.squares[row][col] = Some(Piece::try_from(symbol)?);
                        col += 1;
                    },
                }
            }
            if col != BOARD_WIDTH as usize {
                bail!("rank should have {BOARD_WIDTH} squares, got {col} in '{rank_fen}'");
            }
            rows += 1;
        }
        if rows != BOARD_WIDTH as usize {
            bail!("incorrect placement: expected 8 ranks, got {placement}");
        }
        Ok(result)
    }
}

impl fmt::Display for Board {
    /// Prints board representation in FEN format.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, rank) in self.squares.iter().enumerate() {
            let mut empty_squares = 0i32;
            for square in rank {
                if let Some(piece) = square {
                    if empty_squares != 0 {
                        write!(f, "{empty_squares}")?;
                        empty_squares = 0;
                    }
                    write!(f, "{piece}")?;
                } else {
                    empty_squares += 1;
                }
            }
            if empty_squares != 0 {
                write!(f, "{empty_squares}")?;
            }
            if row != BOARD_WIDTH as usize - 1 {
                const RANK_SEPARATOR: char = '/';
                write!(f, "{RANK_SEPARATOR}")?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Board {
    /// Dumps the board in a simple format ('.' for empty square, FEN algebraic
    /// symbol for piece).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, rank) in self.squares.iter().enumerate() {
            for (col, square) in rank.iter().enumerate() {
                match square {
                    Some(piece) => write!(f, "{piece}"),
                    None => f.write_char('.'),
                }?;
                if col != BOARD_WIDTH as usize - 1 {
                    write!(f, "{SQUARE_SEPARATOR}")?;
                }
            }
            if row != BOARD_WIDTH as usize - 1 {
                write!(f, "{LINE_SEPARATOR}")?;
            }
        }
        Ok(())
    }
}

/// Board with rank numbers on the left and file letters at the bottom.
pub struct Diagram<'a> {
    board: &'a Board,
    figurines: bool,
}

impl fmt::Display for Diagram<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, rank) in self.board.squares.iter().enumerate() {
            write!(f, "{}", BOARD_WIDTH as usize - row)?;
            for square in rank {
                write!(f, "{SQUARE_SEPARATOR}")?;
                match square {
                    Some(piece) if self.figurines => f.write_char(piece.figurine()),
                    Some(piece) => write!(f, "{piece}"),
                    None => f.write_char('.'),
                }?;
            }
            write!(f, "{LINE_SEPARATOR}")?;
        }
        write!(f, " {SQUARE_SEPARATOR}a b c d e f g h")
    }
}

const LINE_SEPARATOR: &str = "\n";
const SQUARE_SEPARATOR: &str = " ";
