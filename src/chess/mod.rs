//! Implementation of the chess board, its pieces and their movement rules.

pub mod board;
pub mod core;
pub mod movegen;
