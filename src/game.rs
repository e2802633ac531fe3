//! Turn-based game of two local players: the board, whose turn it is and the
//! piece currently selected.
//!
//! A move is made in two clicks. The first click selects a piece of the
//! active player and computes its destinations, the second one either moves the
//! piece to one of them, switches to another piece of the active player or
//! cancels the selection:
//!
//! ```text
//!          click(own piece)                click(destination)
//!   Idle ------------------> Selecting ----------------------> Idle (turn passes)
//!    ^                        |  ^  |
//!    |    click(elsewhere)    |  |  | click(another own piece)
//!    +------------------------+  +--+
//! ```

use std::fmt;

use anyhow::{bail, ensure};

use crate::chess::board::Board;
use crate::chess::core::{MoveAttributes, Player, Square};
use crate::chess::movegen::{self, MoveList};

/// Selection state of the game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Selection {
    /// No piece is selected.
    Idle,
    /// A piece of the active player is selected and its destinations are
    /// known.
    Selecting {
        #[allow(missing_docs)]
        from: Square,
        #[allow(missing_docs)]
        destinations: MoveList,
    },
}

/// Outcome of a [`GameState::click`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    /// A piece of the active player on the square is now selected.
    Selected(Square),
    /// The selected piece moved and the turn passed to the opponent.
    Moved {
        #[allow(missing_docs)]
        from: Square,
        #[allow(missing_docs)]
        to: Square,
        #[allow(missing_docs)]
        attributes: MoveAttributes,
    },
    /// The selection was dropped.
    Cancelled,
    /// Nothing was selected and the click did not select anything either.
    Ignored,
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Selected(square) => write!(f, "selected {square}"),
            Self::Moved {
                from,
                to,
                attributes,
            } => write!(f, "moved {from}{to} ({attributes})"),
            Self::Cancelled => write!(f, "cancelled"),
            Self::Ignored => write!(f, "ignored"),
        }
    }
}

/// State of the game owned by the presentation layer.
#[derive(Clone, Debug)]
pub struct GameState {
    board: Board,
    active: Player,
    selection: Selection,
}

impl GameState {
    /// Starting position, White to move, nothing selected.
    #[must_use]
    pub fn new() -> Self {
        Self::from_board(Board::starting(), Player::White)
    }

    /// Arbitrary position with given player to move.
    #[must_use]
    pub const fn from_board(board: Board, active: Player) -> Self {
        Self {
            board,
            active,
            selection: Selection::Idle,
        }
    }

    /// Resets the game to the starting position.
    pub fn restart(&mut self) {
        log::debug!("restarting the game");
        *self = Self::new();
    }

    #[allow(missing_docs)]
    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// The player to move.
    #[must_use]
    pub const fn active(&self) -> Player {
        self.active
    }

    #[allow(missing_docs)]
    #[must_use]
    pub const fn selection(&self) -> &Selection {
        &self.selection
    }

    /// The square of the selected piece, if any.
    #[must_use]
    pub const fn selected(&self) -> Option<Square> {
        match &self.selection {
            Selection::Idle => None,
            Selection::Selecting { from, .. } => Some(*from),
        }
    }

    /// Destinations of the selected piece; empty when nothing is selected.
    #[must_use]
    pub fn legal_moves(&self) -> &[Square] {
        match &self.selection {
            Selection::Idle => &[],
            Selection::Selecting { destinations, .. } => destinations.as_slice(),
        }
    }

    /// Selects the piece on the square if it belongs to the active player.
    /// Returns whether the selection happened; otherwise the selection is left
    /// untouched.
    pub fn select(&mut self, square: Square) -> bool {
        match self.board.at(square) {
            Some(piece) if piece.owner == self.active => {
                let destinations = movegen::generate_moves(piece, square, &self.board);
                log::debug!(
                    "selected {square} with {} destination(s)",
                    destinations.len()
                );
                self.selection = Selection::Selecting {
                    from: square,
                    destinations,
                };
                true
            },
            _ => false,
        }
    }

    /// Processes a click on the square.
    pub fn click(&mut self, square: Square) -> Transition {
        let transition = match std::mem::replace(&mut self.selection, Selection::Idle) {
            Selection::Idle => {
                if self.select(square) {
                    Transition::Selected(square)
                } else {
                    Transition::Ignored
                }
            },
            Selection::Selecting { from, destinations } => {
                if destinations.contains(&square) {
                    let attributes = self.board.apply_move(from, square);
                    self.active = self.active.opponent();
                    log::debug!("{from}{square} ({attributes}), {} to move", self.active.name());
                    Transition::Moved {
                        from,
                        to: square,
                        attributes,
                    }
                } else if self.select(square) {
                    Transition::Selected(square)
                } else {
                    Transition::Cancelled
                }
            },
        };
        log::trace!("click on {square}: {transition}");
        transition
    }

    /// Plays the move as two consecutive clicks. The selection is dropped
    /// regardless of the result.
    ///
    /// # Errors
    ///
    /// Returns an error if `from` does not hold a piece of the active player or
    /// `to` is not among its destinations. The board is not changed then.
    pub fn play(&mut self, from: Square, to: Square) -> anyhow::Result<MoveAttributes> {
        self.selection = Selection::Idle;
        ensure!(
            self.select(from),
            "{from} should hold a piece of the player to move ({})",
            self.active.name()
        );
        match self.click(to) {
            Transition::Moved { attributes, .. } => Ok(attributes),
            _ => {
                self.selection = Selection::Idle;
                bail!("{to} is not a legal destination for the piece on {from}")
            },
        }
    }

    /// Turn indicator as shown to the players.
    #[must_use]
    pub fn status(&self) -> String {
        format!("{}'s Turn", self.active.name())
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::chess::core::{Piece, PieceKind};

    fn square(input: &str) -> Square {
        Square::try_from(input).unwrap()
    }

    #[test]
    fn new_game() {
        let game = GameState::new();
        assert_eq!(game.active(), Player::White);
        assert_eq!(game.selection(), &Selection::Idle);
        assert!(game.legal_moves().is_empty());
        assert_eq!(game.status(), "White's Turn");
        assert_eq!(game.board(), &Board::starting());
    }

    #[test]
    fn select_own_piece_only() {
        let mut game = GameState::new();
        assert!(!game.select(square("e7")));
        assert!(!game.select(square("e4")));
        assert_eq!(game.selected(), None);
        assert!(game.select(square("e2")));
        assert_eq!(game.selected(), Some(square("e2")));
        assert_eq!(game.legal_moves(), &[square("e3"), square("e4")]);
    }

    #[test]
    fn two_clicks_move() {
        let mut game = GameState::new();
        assert_eq!(game.click(square("d2")), Transition::Selected(square("d2")));
        assert_eq!(
            game.click(square("d4")),
            Transition::Moved {
                from: square("d2"),
                to: square("d4"),
                attributes: MoveAttributes::DOUBLE_PAWN_PUSH,
            }
        );
        assert_eq!(game.active(), Player::Black);
        assert_eq!(game.status(), "Black's Turn");
        assert_eq!(game.selection(), &Selection::Idle);
        assert_eq!(game.board().at(square("d2")), None);
        assert_eq!(
            game.board().at(square("d4")),
            Some(Piece::new(Player::White, PieceKind::Pawn))
        );
    }

    #[test]
    fn clicks_on_opponent_or_empty_are_ignored() {
        let mut game = GameState::new();
        assert_eq!(game.click(square("d7")), Transition::Ignored);
        assert_eq!(game.click(square("d5")), Transition::Ignored);
        assert_eq!(game.active(), Player::White);
    }

    #[test]
    fn reselect_and_cancel() {
        let mut game = GameState::new();
        assert_eq!(game.click(square("b1")), Transition::Selected(square("b1")));
        assert_eq!(game.click(square("g1")), Transition::Selected(square("g1")));
        assert_eq!(game.legal_moves(), &[square("h3"), square("f3")]);
        // Not a destination of the knight on g1.
        assert_eq!(game.click(square("e5")), Transition::Cancelled);
        assert_eq!(game.selection(), &Selection::Idle);
        // Clicking the selected piece again keeps it selected.
        let _ = game.click(square("g1"));
        assert_eq!(game.click(square("g1")), Transition::Selected(square("g1")));
        assert_eq!(game.click(square("g3")), Transition::Cancelled);
        assert_eq!(game.board(), &Board::starting());
        assert_eq!(game.active(), Player::White);
    }

    #[test]
    fn play() {
        let mut game = GameState::new();
        assert_eq!(
            game.play(square("g1"), square("f3")).unwrap(),
            MoveAttributes::QUIET
        );
        assert_eq!(
            game.play(square("g1"), square("f3"))
                .unwrap_err()
                .to_string(),
            "g1 should hold a piece of the player to move (Black)"
        );
        assert_eq!(
            game.play(square("e7"), square("e4"))
                .unwrap_err()
                .to_string(),
            "e4 is not a legal destination for the piece on e7"
        );
        assert_eq!(game.selection(), &Selection::Idle);
        assert_eq!(game.active(), Player::Black);
        assert!(game.play(square("e7"), square("e5")).is_ok());
        assert_eq!(game.active(), Player::White);
    }

    #[test]
    fn restart() {
        let mut game = GameState::new();
        let _ = game.play(square("e2"), square("e4")).unwrap();
        let _ = game.click(square("e7"));
        game.restart();
        assert_eq!(game.board(), &Board::starting());
        assert_eq!(game.active(), Player::White);
        assert_eq!(game.selected(), None);
    }
}
