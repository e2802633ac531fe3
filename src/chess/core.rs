//! Chess primitives commonly used within [`crate::chess`].

use std::fmt::{self, Write};
use std::ops::Not;

use anyhow::bail;
use itertools::Itertools;

#[allow(missing_docs)]
pub const BOARD_WIDTH: u8 = 8;
#[allow(missing_docs)]
pub const BOARD_SIZE: u8 = BOARD_WIDTH * BOARD_WIDTH;

/// A coordinate outside of `0..BOARD_WIDTH` was passed where a square was
/// expected. Coordinates are never clamped: producing one is a contract
/// violation of the caller.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("square coordinates should be within 0..BOARD_WIDTH, got ({row}, {col})")]
pub struct OutOfRangeError {
    #[allow(missing_docs)]
    pub row: i32,
    #[allow(missing_docs)]
    pub col: i32,
}

/// A (row, column) pair on the board, both within `0..BOARD_WIDTH`.
///
/// Row 0 is Black's back rank (rank 8) and row 7 is White's back rank (rank
/// 1). Column 0 is file `a`:
///
/// ```
/// use hotseat::chess::core::Square;
///
/// let e2 = Square::try_from("e2").unwrap();
/// assert_eq!((e2.row(), e2.col()), (6, 4));
/// assert_eq!(e2, Square::new(6, 4).unwrap());
/// assert_eq!(e2.to_string(), "e2");
/// ```
///
/// Square is a compact representation using only two bytes.
///
/// ```
/// use hotseat::chess::core::Square;
///
/// assert_eq!(std::mem::size_of::<Square>(), 2);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    /// Connects row and column to form a full square.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfRangeError`] if either coordinate is outside
    /// `0..BOARD_WIDTH`.
    pub fn new(row: i32, col: i32) -> Result<Self, OutOfRangeError> {
        match (u8::try_from(row), u8::try_from(col)) {
            (Ok(r), Ok(c)) if r < BOARD_WIDTH && c < BOARD_WIDTH => Ok(Self { row: r, col: c }),
            _ => Err(OutOfRangeError { row, col }),
        }
    }

    /// Returns the row (0 is the rank 8, 7 is the rank 1).
    #[must_use]
    pub const fn row(self) -> u8 {
        self.row
    }

    /// Returns the column (0 is file `a`).
    #[must_use]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Returns the square `(row + d_row, col + d_col)` or `None` if it falls
    /// off the board.
    #[must_use]
    pub fn offset(self, d_row: i32, d_col: i32) -> Option<Self> {
        Self::new(i32::from(self.row) + d_row, i32::from(self.col) + d_col).ok()
    }

    /// Moves the square one step in given direction.
    #[must_use]
    pub fn shift(self, direction: Direction) -> Option<Self> {
        let (d_row, d_col) = direction.delta();
        self.offset(d_row, d_col)
    }

    /// All squares of the board in row-major order (a8, b8, ..., h1).
    pub fn iter() -> impl Iterator<Item = Self> {
        (0..BOARD_WIDTH)
            .cartesian_product(0..BOARD_WIDTH)
            .map(|(row, col)| Self { row, col })
    }
}

impl TryFrom<&str> for Square {
    type Error = anyhow::Error;

    /// Parses a square in algebraic notation (e.g. "e4").
    fn try_from(square: &str) -> anyhow::Result<Self> {
        let Some((file, rank)) = square.chars().collect_tuple() else {
            bail!(
                "square should be two-char, got {square} with {} chars",
                square.chars().count()
            );
        };
        let col = match file {
            'a'..='h' => i32::from(file as u8 - b'a'),
            _ => bail!("file should be within 'a'..='h', got '{file}'"),
        };
        let row = match rank {
            '1'..='8' => i32::from(b'8' - rank as u8),
            _ => bail!("rank should be within '1'..='8', got '{rank}'"),
        };
        Ok(Self::new(row, col)?)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char((b'a' + self.col) as char)?;
        f.write_char((b'8' - self.row) as char)
    }
}

/// A standard game of chess is played between two players: White (having the
/// advantage of the first turn) and Black.
#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Player {
    White,
    Black,
}

impl Player {
    /// "Flips" the color.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Self::White => Self::Black,
            Self::Black => Self::White,
        }
    }

    /// Pawns of the player advance in this direction.
    #[must_use]
    pub const fn push_direction(self) -> Direction {
        match self {
            Self::White => Direction::Up,
            Self::Black => Direction::Down,
        }
    }

    /// The row pawns start from and may advance two squares from.
    #[must_use]
    pub const fn pawns_starting_row(self) -> u8 {
        match self {
            Self::White => 6,
            Self::Black => 1,
        }
    }

    /// The row a pawn of this player is promoted on: the opponent's back
    /// rank.
    #[must_use]
    pub const fn promotion_row(self) -> u8 {
        match self {
            Self::White => 0,
            Self::Black => BOARD_WIDTH - 1,
        }
    }

    /// Human-readable name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::White => "White",
            Self::Black => "Black",
        }
    }
}

impl Not for Player {
    type Output = Self;

    fn not(self) -> Self::Output {
        self.opponent()
    }
}

impl TryFrom<&str> for Player {
    type Error = anyhow::Error;

    fn try_from(player: &str) -> anyhow::Result<Self> {
        match player {
            "w" => Ok(Self::White),
            "b" => Ok(Self::Black),
            _ => bail!("player should be 'w' or 'b', got '{player}'"),
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char(match &self {
            Self::White => 'w',
            Self::Black => 'b',
        })
    }
}

/// Standard [chess pieces].
///
/// [chess pieces]: https://en.wikipedia.org/wiki/Chess_piece
#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PieceKind {
    King,
    Queen,
    Rook,
    Bishop,
    Knight,
    Pawn,
}

impl PieceKind {
    /// Rooks, bishops and queens move along rays until blocked.
    #[must_use]
    pub const fn is_sliding(self) -> bool {
        matches!(self, Self::Queen | Self::Rook | Self::Bishop)
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char(match &self {
            Self::King => 'k',
            Self::Queen => 'q',
            Self::Rook => 'r',
            Self::Bishop => 'b',
            Self::Knight => 'n',
            Self::Pawn => 'p',
        })
    }
}

/// Represents a specific piece owned by a player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Piece {
    #[allow(missing_docs)]
    pub owner: Player,
    #[allow(missing_docs)]
    pub kind: PieceKind,
}

impl Piece {
    #[allow(missing_docs)]
    #[must_use]
    pub const fn new(owner: Player, kind: PieceKind) -> Self {
        Self { owner, kind }
    }

    /// Unicode chess symbol of the piece.
    #[must_use]
    pub const fn figurine(self) -> char {
        match (self.owner, self.kind) {
            (Player::White, PieceKind::King) => '♔',
            (Player::White, PieceKind::Queen) => '♕',
            (Player::White, PieceKind::Rook) => '♖',
            (Player::White, PieceKind::Bishop) => '♗',
            (Player::White, PieceKind::Knight) => '♘',
            (Player::White, PieceKind::Pawn) => '♙',
            (Player::Black, PieceKind::King) => '♚',
            (Player::Black, PieceKind::Queen) => '♛',
            (Player::Black, PieceKind::Rook) => '♜',
            (Player::Black, PieceKind::Bishop) => '♝',
            (Player::Black, PieceKind::Knight) => '♞',
            (Player::Black, PieceKind::Pawn) => '♟',
        }
    }
}

impl TryFrom<char> for Piece {
    type Error = anyhow::Error;

    /// Parses a FEN piece symbol: uppercase for White, lowercase for Black.
    fn try_from(symbol: char) -> anyhow::Result<Self> {
        let owner = if symbol.is_ascii_uppercase() {
            Player::White
        } else {
            Player::Black
        };
        let kind = match symbol.to_ascii_lowercase() {
            'k' => PieceKind::King,
            'q' => PieceKind::Queen,
            'r' => PieceKind::Rook,
            'b' => PieceKind::Bishop,
            'n' => PieceKind::Knight,
            'p' => PieceKind::Pawn,
            _ => bail!("piece symbol should be within \"KQRBNPkqrbnp\", got '{symbol}'"),
        };
        Ok(Self { owner, kind })
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = self.kind.to_string();
        match self.owner {
            // White player: uppercase symbols.
            Player::White => f.write_str(&symbol.to_ascii_uppercase()),
            // Black player: lowercase symbols.
            Player::Black => f.write_str(&symbol),
        }
    }
}

/// Directions on the board from a perspective of White player: "up" is
/// towards Black's back rank (decreasing row).
#[allow(missing_docs)]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    Right,
    Left,
    Down,
    Up,
    DownRight,
    DownLeft,
    UpRight,
    UpLeft,
}

impl Direction {
    /// Rook directions.
    pub const ORTHOGONAL: [Self; 4] = [Self::Right, Self::Left, Self::Down, Self::Up];
    /// Bishop directions.
    pub const DIAGONAL: [Self; 4] = [Self::DownRight, Self::DownLeft, Self::UpRight, Self::UpLeft];
    /// Queen and king directions.
    pub const ALL: [Self; 8] = [
        Self::Right,
        Self::Left,
        Self::Down,
        Self::Up,
        Self::DownRight,
        Self::DownLeft,
        Self::UpRight,
        Self::UpLeft,
    ];

    /// The `(row, column)` step.
    #[must_use]
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Self::Right => (0, 1),
            Self::Left => (0, -1),
            Self::Down => (1, 0),
            Self::Up => (-1, 0),
            Self::DownRight => (1, 1),
            Self::DownLeft => (1, -1),
            Self::UpRight => (-1, 1),
            Self::UpLeft => (-1, -1),
        }
    }
}

/// Knight jumps as `(row, column)` offsets.
pub const KNIGHT_JUMPS: [(i32, i32); 8] = [
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
];

/// A piece going from one square to another. The move representation matches
/// the UCI one without the promotion suffix (promotion is always to a
/// queen).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Move {
    #[allow(missing_docs)]
    pub from: Square,
    #[allow(missing_docs)]
    pub to: Square,
}

impl Move {
    #[allow(missing_docs)]
    #[must_use]
    pub const fn new(from: Square, to: Square) -> Self {
        Self { from, to }
    }
}

impl TryFrom<&str> for Move {
    type Error = anyhow::Error;

    /// Parses a move in "e2e4" format.
    fn try_from(input: &str) -> anyhow::Result<Self> {
        if input.len() != 4 || !input.is_ascii() {
            bail!("move should be four ASCII chars, got '{input}'");
        }
        Ok(Self {
            from: Square::try_from(&input[..2])?,
            to: Square::try_from(&input[2..])?,
        })
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

bitflags::bitflags! {
    /// What happened on the board when a move was applied.
    ///
    /// | Bit | Meaning |
    /// | --- | ------- |
    /// | -   | Quiet move |
    /// | 0   | Capture |
    /// | 1   | Double pawn push |
    /// | 2   | Promotion (always to a queen) |
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct MoveAttributes: u8 {
        /// Moves that do not change the material balance.
        const QUIET = 0;
        /// The destination held an opponent piece.
        const CAPTURE = 0b0001;
        /// Pawn advancement by 2 squares from its starting row.
        const DOUBLE_PAWN_PUSH = 0b0010;
        /// Pawn reached the farthest row and became a queen.
        const PROMOTION = 0b0100;
    }
}

impl fmt::Display for MoveAttributes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("quiet");
        }
        let names = [
            (Self::CAPTURE, "capture"),
            (Self::DOUBLE_PAWN_PUSH, "double pawn push"),
            (Self::PROMOTION, "promotion"),
        ];
        write!(
            f,
            "{}",
            names
                .iter()
                .filter(|(flag, _)| self.contains(*flag))
                .map(|(_, name)| name)
                .join(", ")
        )
    }
}
