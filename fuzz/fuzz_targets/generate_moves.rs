#![no_main]
use hotseat::chess::board::Board;
use hotseat::chess::core::{PieceKind, Player, Square};
use hotseat::chess::movegen::generate_moves;
use itertools::Itertools;
use libfuzzer_sys::fuzz_target;
use pretty_assertions::assert_eq;
use shakmaty::attacks;
use shakmaty::fen::Fen;
use shakmaty::Bitboard;

fn to_shakmaty(square: Square) -> shakmaty::Square {
    shakmaty::Square::new(u32::from(7 - square.row()) * 8 + u32::from(square.col()))
}

fuzz_target!(|data: &[u8]| {
    let Ok(input) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(board) = Board::try_from(input) else {
        return;
    };
    let setup: Fen = format!("{board} w - - 0 1")
        .parse()
        .expect("parsed placements should be accepted by shakmaty");
    let reference = setup.as_setup().board.clone();
    let occupied: Bitboard = reference.occupied();
    for player in [Player::White, Player::Black] {
        for (from, piece) in board.pieces(player) {
            if piece.kind == PieceKind::Pawn {
                continue;
            }
            let sq = to_shakmaty(from);
            let attacked = match piece.kind {
                PieceKind::King => attacks::king_attacks(sq),
                PieceKind::Queen => attacks::queen_attacks(sq, occupied),
                PieceKind::Rook => attacks::rook_attacks(sq, occupied),
                PieceKind::Bishop => attacks::bishop_attacks(sq, occupied),
                PieceKind::Knight => attacks::knight_attacks(sq),
                PieceKind::Pawn => unreachable!(),
            };
            let own = reference.by_color(match player {
                Player::White => shakmaty::Color::White,
                Player::Black => shakmaty::Color::Black,
            });
            assert_eq!(
                generate_moves(piece, from, &board)
                    .iter()
                    .map(|&to| to_shakmaty(to))
                    .sorted()
                    .collect_vec(),
                (attacked & !own).into_iter().sorted().collect_vec()
            );
        }
    }
});
