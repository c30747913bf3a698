//! Flat board views for rendering layers.
//!
//! Renderers get strings only and never see [`Piece`] values.

use crate::{board::Board, config::ExportConfig, position::Position, types::Piece};

/// One entry per square in [`Position::all`] order: the empty marker, or
/// `team{separator}letter` such as `white-p`.
pub fn export_board(board: &Board, config: &ExportConfig) -> Vec<String> {
    Position::all()
        .iter()
        .map(|&pos| match board.piece_at(pos) {
            Some(pc) => team_qualified(pc, config),
            None => config.empty_marker.clone(),
        })
        .collect()
}

fn team_qualified(piece: Piece, config: &ExportConfig) -> String {
    format!("{}{}{}", piece.team.name(), config.separator, piece.letter())
}

/// Single-character symbols, one per square, `.` when empty.
pub fn board_symbols(board: &Board) -> Vec<char> {
    Position::all()
        .iter()
        .map(|&pos| board.piece_at(pos).map_or('.', Piece::symbol))
        .collect()
}

#[cfg(test)]
#[path = "export_tests.rs"]
mod export_tests;
