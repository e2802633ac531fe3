use hotseat::chess::board::Board;
use hotseat::chess::core::{MoveAttributes, Piece, PieceKind, Player, Square};
use hotseat::game::{GameState, Selection, Transition};
use pretty_assertions::assert_eq;

fn at(row: i32, col: i32) -> Square {
    Square::new(row, col).unwrap()
}

#[test]
fn two_click_move() {
    let mut game = GameState::new();
    assert_eq!(game.selection(), &Selection::Idle);
    assert_eq!(game.status(), "White's Turn");

    assert_eq!(game.click(at(6, 3)), Transition::Selected(at(6, 3)));
    assert_eq!(game.legal_moves(), &[at(5, 3), at(4, 3)]);
    assert_eq!(
        game.click(at(4, 3)),
        Transition::Moved {
            from: at(6, 3),
            to: at(4, 3),
            attributes: MoveAttributes::DOUBLE_PAWN_PUSH,
        }
    );

    assert_eq!(game.board().at(at(6, 3)), None);
    assert_eq!(
        game.board().at(at(4, 3)),
        Some(Piece::new(Player::White, PieceKind::Pawn))
    );
    assert_eq!(game.active(), Player::Black);
    assert_eq!(game.status(), "Black's Turn");
    assert_eq!(game.selection(), &Selection::Idle);
    assert!(game.legal_moves().is_empty());
}

#[test]
fn opponent_pieces_can_not_be_selected() {
    let mut game = GameState::new();
    let before = *game.board();
    assert_eq!(game.click(at(1, 4)), Transition::Ignored);
    assert_eq!(game.click(at(4, 4)), Transition::Ignored);
    assert_eq!(game.selection(), &Selection::Idle);
    assert_eq!(game.board(), &before);
    assert_eq!(game.active(), Player::White);
}

#[test]
fn switching_and_cancelling_selection() {
    let mut game = GameState::new();
    assert_eq!(game.click(at(7, 1)), Transition::Selected(at(7, 1)));
    assert_eq!(game.legal_moves(), &[at(5, 2), at(5, 0)]);
    // Another own piece takes over the selection.
    assert_eq!(game.click(at(6, 7)), Transition::Selected(at(6, 7)));
    assert_eq!(game.selected(), Some(at(6, 7)));
    // An empty square which is not a destination drops it.
    assert_eq!(game.click(at(3, 0)), Transition::Cancelled);
    assert_eq!(game.selected(), None);
    // A blocked piece can still be selected.
    assert_eq!(game.click(at(7, 0)), Transition::Selected(at(7, 0)));
    assert!(game.legal_moves().is_empty());
    assert_eq!(game.click(at(1, 0)), Transition::Cancelled);
    assert_eq!(game.board(), &Board::starting());
    assert_eq!(game.active(), Player::White);
}

#[test]
fn turns_alternate() {
    let mut game = GameState::new();
    for (from, to, player) in [
        ("e2", "e4", Player::Black),
        ("e7", "e5", Player::White),
        ("g1", "f3", Player::Black),
        ("b8", "c6", Player::White),
    ] {
        let (from, to) = (
            Square::try_from(from).unwrap(),
            Square::try_from(to).unwrap(),
        );
        assert_eq!(game.click(from), Transition::Selected(from));
        assert!(matches!(game.click(to), Transition::Moved { .. }));
        assert_eq!(game.active(), player);
    }
    assert_eq!(
        game.board().to_string(),
        "r1bqkbnr/pppp1ppp/2n5/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R"
    );
}

#[test]
fn capture_and_promotion() {
    let board = Board::try_from("3r4/2P5/8/8/8/8/8/8").unwrap();
    let mut game = GameState::from_board(board, Player::White);
    assert_eq!(game.click(at(1, 2)), Transition::Selected(at(1, 2)));
    assert_eq!(game.legal_moves(), &[at(0, 2), at(0, 3)]);
    assert_eq!(
        game.click(at(0, 3)),
        Transition::Moved {
            from: at(1, 2),
            to: at(0, 3),
            attributes: MoveAttributes::CAPTURE | MoveAttributes::PROMOTION,
        }
    );
    assert_eq!(
        game.board().at(at(0, 3)),
        Some(Piece::new(Player::White, PieceKind::Queen))
    );
    assert_eq!(game.board().num_pieces(), 1);
    assert_eq!(game.active(), Player::Black);
}

#[test]
fn rejected_moves_keep_the_board() {
    let mut game = GameState::new();
    let e2 = at(6, 4);
    assert!(game.play(e2, at(3, 4)).is_err());
    assert!(game.play(at(1, 4), at(3, 4)).is_err());
    assert!(game.play(at(4, 4), at(3, 4)).is_err());
    assert_eq!(game.board(), &Board::starting());
    assert_eq!(game.selection(), &Selection::Idle);
    assert_eq!(
        game.play(e2, at(5, 4)).unwrap(),
        MoveAttributes::QUIET
    );
    assert_eq!(game.active(), Player::Black);
}

#[test]
fn restart() {
    let mut game = GameState::new();
    let _ = game.play(at(6, 4), at(4, 4)).unwrap();
    assert_eq!(game.click(at(1, 4)), Transition::Selected(at(1, 4)));
    game.restart();
    assert_eq!(game.board(), &Board::starting());
    assert_eq!(game.active(), Player::White);
    assert_eq!(game.selection(), &Selection::Idle);
}
