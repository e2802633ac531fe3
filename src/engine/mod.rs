//! The engine is the presentation layer of the board: it owns the
//! [`GameState`], reads commands from the input stream, feeds clicks into the
//! selection state machine and renders the results to the output stream.
//!
//! [`Engine::run`] is the "main loop" which executes commands until `quit` is
//! sent or the input is exhausted.

use std::io::{BufRead, Write};

use itertools::Itertools;

use crate::chess::board::Board;
use crate::chess::core::Square;
use crate::chess::movegen;
use crate::engine::command::Command;
use crate::game::{GameState, Transition};

mod command;

/// Largest depth accepted by the `perft` command.
const MAX_PERFT_DEPTH: u8 = 5;

/// Connects the game with the players through I/O.
pub struct Engine<'a, R: BufRead, W: Write> {
    game: GameState,
    figurines: bool,
    input: &'a mut R,
    output: &'a mut W,
}

impl<'a, R: BufRead, W: Write> Engine<'a, R, W> {
    /// Creates a new instance of the engine with starting position and provided
    /// I/O.
    #[must_use]
    pub fn new(input: &'a mut R, output: &'a mut W) -> Self {
        Self {
            game: GameState::new(),
            figurines: false,
            input,
            output,
        }
    }

    /// Renders pieces as Unicode figurines instead of FEN letters.
    #[must_use]
    pub const fn with_figurines(mut self, figurines: bool) -> Self {
        self.figurines = figurines;
        self
    }

    /// Continuously reads the input stream and executes commands until "quit"
    /// is sent or the input ends.
    ///
    /// Malformed or unsupported commands are reported with an `info string`
    /// line and skipped.
    ///
    /// # Errors
    ///
    /// Propagates errors of reading the input or writing the output.
    pub fn run(&mut self) -> anyhow::Result<()> {
        self.handle_board()?;
        loop {
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                break;
            }
            if line.trim().is_empty() {
                continue;
            }
            log::trace!("command: {}", line.trim_end());
            match Command::parse(&line) {
                Command::Click(square) => self.handle_click(square)?,
                Command::Moves(square) => self.handle_moves(square)?,
                Command::Move(m) => self.handle_move(m.from, m.to)?,
                Command::Board => self.handle_board()?,
                Command::Fen => {
                    writeln!(self.output, "{} {}", self.game.board(), self.game.active())?;
                },
                Command::SetPosition { placement, active } => {
                    match Board::try_from(placement.as_str()) {
                        Ok(board) => {
                            self.game = GameState::from_board(board, active);
                            self.handle_board()?;
                        },
                        Err(e) => writeln!(self.output, "info string Invalid position: {e}")?,
                    }
                },
                Command::NewGame => {
                    self.game.restart();
                    self.handle_board()?;
                },
                Command::Perft { depth } if depth > MAX_PERFT_DEPTH => {
                    writeln!(
                        self.output,
                        "info string perft depth should be at most {MAX_PERFT_DEPTH}, got {depth}"
                    )?;
                },
                Command::Perft { depth } => {
                    let nodes = movegen::perft(self.game.board(), self.game.active(), depth);
                    writeln!(self.output, "perft {depth}: {nodes}")?;
                },
                Command::Quit => break,
                Command::Unknown(command) => {
                    writeln!(self.output, "info string Unsupported command: {command}")?;
                },
            }
            self.output.flush()?;
        }
        Ok(())
    }

    /// Prints the board and whose turn it is.
    fn handle_board(&mut self) -> anyhow::Result<()> {
        writeln!(self.output, "{}", self.game.board().diagram(self.figurines))?;
        writeln!(self.output, "{}", self.game.status())?;
        Ok(())
    }

    fn handle_click(&mut self, square: Square) -> anyhow::Result<()> {
        let transition = self.game.click(square);
        match transition {
            Transition::Selected(_) => {
                writeln!(
                    self.output,
                    "{transition}: {}",
                    format_destinations(self.game.legal_moves())
                )?;
            },
            Transition::Moved { .. } => {
                writeln!(self.output, "{transition}")?;
                self.handle_board()?;
            },
            Transition::Cancelled | Transition::Ignored => writeln!(self.output, "{transition}")?,
        }
        Ok(())
    }

    /// Lists destinations of any piece, regardless of whose turn it is.
    fn handle_moves(&mut self, square: Square) -> anyhow::Result<()> {
        match self.game.board().at(square) {
            Some(piece) => {
                let destinations = movegen::generate_moves(piece, square, self.game.board());
                writeln!(
                    self.output,
                    "moves {square}: {}",
                    format_destinations(&destinations)
                )?;
            },
            None => writeln!(self.output, "info string No piece on {square}")?,
        }
        Ok(())
    }

    fn handle_move(&mut self, from: Square, to: Square) -> anyhow::Result<()> {
        match self.game.play(from, to) {
            Ok(attributes) => {
                writeln!(self.output, "moved {from}{to} ({attributes})")?;
                self.handle_board()?;
            },
            Err(e) => writeln!(self.output, "info string Illegal move: {e}")?,
        }
        Ok(())
    }
}

fn format_destinations(destinations: &[Square]) -> String {
    if destinations.is_empty() {
        "-".to_string()
    } else {
        destinations.iter().join(" ")
    }
}
