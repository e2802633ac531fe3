//! Move generation: maps a piece, its square and a read-only board to the
//! squares the piece may move to under the movement geometry of each piece.
//!
//! King safety is not considered (there is no check, checkmate or pins), nor
//! are castling and en passant. Destinations are always on the board and never
//! hold a piece of the mover's color.
//!
//! The order of the produced squares is deterministic: directions are visited
//! in the order of the corresponding tables ([`Direction::ORTHOGONAL`],
//! [`Direction::DIAGONAL`], [`KNIGHT_JUMPS`]) and rays are walked from the
//! nearest square outwards.

use arrayvec::ArrayVec;

use crate::chess::board::Board;
use crate::chess::core::{Direction, Move, Piece, PieceKind, Player, Square, KNIGHT_JUMPS};

/// A queen in the center of an empty board has the most destinations.
pub const MAX_DESTINATIONS: usize = 27;

/// Destinations of a single piece, stored on the stack.
pub type MoveList = ArrayVec<Square, MAX_DESTINATIONS>;

/// Produces the destinations of `piece` standing on `from`.
///
/// ```
/// use hotseat::chess::board::Board;
/// use hotseat::chess::core::Square;
/// use hotseat::chess::movegen::generate_moves;
///
/// let board = Board::starting();
/// let from = Square::try_from("g1").unwrap();
/// let knight = board.at(from).unwrap();
/// let destinations: Vec<String> = generate_moves(knight, from, &board)
///     .iter()
///     .map(ToString::to_string)
///     .collect();
/// assert_eq!(destinations, ["h3", "f3"]);
/// ```
#[must_use]
pub fn generate_moves(piece: Piece, from: Square, board: &Board) -> MoveList {
    let mut destinations = MoveList::new();
    let owner = piece.owner;
    match piece.kind {
        PieceKind::King => {
            leap(&mut destinations, owner, from, board, Direction::ALL.map(Direction::delta));
        },
        // Sliding pieces.
        PieceKind::Queen => slide(&mut destinations, owner, from, board, &Direction::ALL),
        PieceKind::Rook => slide(&mut destinations, owner, from, board, &Direction::ORTHOGONAL),
        PieceKind::Bishop => slide(&mut destinations, owner, from, board, &Direction::DIAGONAL),
        PieceKind::Knight => leap(&mut destinations, owner, from, board, KNIGHT_JUMPS),
        PieceKind::Pawn => pawn(&mut destinations, owner, from, board),
    }
    destinations
}

/// Same as [`generate_moves`] for a piece given by its FEN symbol. Unknown
/// symbols produce no destinations.
#[must_use]
pub fn moves_for_symbol(symbol: char, from: Square, board: &Board) -> MoveList {
    match Piece::try_from(symbol) {
        Ok(piece) => generate_moves(piece, from, board),
        Err(e) => {
            log::trace!("no moves for unrecognized piece on {from}: {e}");
            MoveList::new()
        },
    }
}

/// Collects moves of all pieces of the player, in row-major order of the
/// origin squares.
#[must_use]
pub fn generate_all_moves(board: &Board, player: Player) -> Vec<Move> {
    board
        .pieces(player)
        .flat_map(|(from, piece)| {
            generate_moves(piece, from, board)
                .into_iter()
                .map(move |to| Move::new(from, to))
        })
        .collect()
}

/// Counts leaf nodes of the move tree of given depth, players alternating
/// from `player`. Since kings can be captured and there is no notion of
/// check, this only matches the standard [perft] numbers while no king is
/// attacked.
///
/// [perft]: https://www.chessprogramming.org/Perft
#[must_use]
pub fn perft(board: &Board, player: Player, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }
    let moves = generate_all_moves(board, player);
    if depth == 1 {
        return moves.len() as u64;
    }
    moves
        .iter()
        .map(|m| {
            let mut next = *board;
            let _ = next.apply_move(m.from, m.to);
            perft(&next, player.opponent(), depth - 1)
        })
        .sum()
}

fn is_available(board: &Board, owner: Player, square: Square) -> bool {
    board.at(square).map_or(true, |piece| piece.owner != owner)
}

/// Walks each ray until it leaves the board or hits a piece. An opponent piece
/// is included (capture), our own piece is not.
fn slide(
    destinations: &mut MoveList,
    owner: Player,
    from: Square,
    board: &Board,
    directions: &[Direction],
) {
    for &direction in directions {
        let mut current = from;
        while let Some(to) = current.shift(direction) {
            match board.at(to) {
                None => destinations.push(to),
                Some(piece) => {
                    if piece.owner != owner {
                        destinations.push(to);
                    }
                    break;
                },
            }
            current = to;
        }
    }
}

/// Single-step moves to fixed offsets (knight and king).
fn leap(
    destinations: &mut MoveList,
    owner: Player,
    from: Square,
    board: &Board,
    offsets: impl IntoIterator<Item = (i32, i32)>,
) {
    destinations.extend(
        offsets
            .into_iter()
            .filter_map(|(d_row, d_col)| from.offset(d_row, d_col))
            .filter(|&to| is_available(board, owner, to)),
    );
}

fn pawn(destinations: &mut MoveList, owner: Player, from: Square, board: &Board) {
    let (forward, _) = owner.push_direction().delta();
    if let Some(single_push) = from.offset(forward, 0) {
        if board.at(single_push).is_none() {
            destinations.push(single_push);
            // The second square is bounds-checked like any other.
            if from.row() == owner.pawns_starting_row() {
                if let Some(double_push) = single_push.offset(forward, 0) {
                    if board.at(double_push).is_none() {
                        destinations.push(double_push);
                    }
                }
            }
        }
    }
    for side in [-1, 1] {
        if let Some(to) = from.offset(forward, side) {
            if board.at(to).is_some_and(|piece| piece.owner != owner) {
                destinations.push(to);
            }
        }
    }
}
