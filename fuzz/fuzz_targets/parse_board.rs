#![no_main]
use hotseat::chess::board::Board;
use libfuzzer_sys::fuzz_target;
use pretty_assertions::assert_eq;

fuzz_target!(|data: &[u8]| {
    let Ok(input) = std::str::from_utf8(data) else {
        return;
    };
    if let Ok(board) = Board::try_from(input) {
        // Printing the board back yields a placement that parses to the same
        // board.
        let printed = board.to_string();
        assert_eq!(Board::try_from(printed.as_str()).ok(), Some(board));
    }
});
