use std::collections::{BTreeMap, BTreeSet};

use tracing::debug;

use crate::{
    error::{ChessError, ChessResult},
    position::Position,
    types::*,
};

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Occupancy of the 64 squares. The only mutation is [`Board::apply_move`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Board {
    cells: BTreeMap<Position, Piece>,
}

impl Board {
    pub fn empty() -> Self {
        Self::default()
    }

    /// The standard 32-piece starting layout.
    pub fn standard() -> Self {
        let mut cells = BTreeMap::new();
        for (i, &kind) in BACK_RANK.iter().enumerate() {
            let file = i as i32 + 1;
            for (team, back, pawns) in [(Team::White, 1, 2), (Team::Black, 8, 7)] {
                if let (Ok(back_sq), Ok(pawn_sq)) =
                    (Position::of(file, back), Position::of(file, pawns))
                {
                    cells.insert(back_sq, Piece::new(team, kind));
                    cells.insert(pawn_sq, Piece::new(team, PieceKind::Pawn));
                }
            }
        }
        Self { cells }
    }

    /// Build a board from explicit cells. A later entry for the same square wins.
    pub fn from_cells(cells: impl IntoIterator<Item = (Position, Piece)>) -> Self {
        Self {
            cells: cells.into_iter().collect(),
        }
    }

    /// Parse an 8-line diagram, rank 8 first, using piece symbols and `.` for
    /// empty squares. Whitespace inside a line is ignored.
    pub fn from_diagram(text: &str) -> ChessResult<Self> {
        let rows: Vec<Vec<char>> = text
            .lines()
            .map(|l| l.chars().filter(|c| !c.is_whitespace()).collect::<Vec<_>>())
            .filter(|row| !row.is_empty())
            .collect();
        if rows.len() != 8 || rows.iter().any(|row| row.len() != 8) {
            return Err(ChessError::InvalidNotation(text.to_string()));
        }

        let mut cells = BTreeMap::new();
        for (row_idx, row) in rows.iter().enumerate() {
            let rank = 8 - row_idx as i32;
            for (file_idx, &ch) in row.iter().enumerate() {
                if ch == '.' {
                    continue;
                }
                let team = if ch.is_ascii_uppercase() {
                    Team::Black
                } else {
                    Team::White
                };
                let kind = match ch.to_ascii_lowercase() {
                    'p' => PieceKind::Pawn,
                    'n' => PieceKind::Knight,
                    'b' => PieceKind::Bishop,
                    'r' => PieceKind::Rook,
                    'q' => PieceKind::Queen,
                    'k' => PieceKind::King,
                    _ => return Err(ChessError::InvalidNotation(ch.to_string())),
                };
                cells.insert(Position::of(file_idx as i32 + 1, rank)?, Piece::new(team, kind));
            }
        }
        Ok(Self { cells })
    }

    pub fn piece_at(&self, pos: Position) -> Option<Piece> {
        self.cells.get(&pos).copied()
    }

    pub fn cells(&self) -> &BTreeMap<Position, Piece> {
        &self.cells
    }

    pub fn occupied_positions(&self) -> BTreeSet<Position> {
        self.cells.keys().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Check a move without applying it. Turn ownership is the caller's job.
    pub fn validate_move(&self, from: Position, to: Position) -> ChessResult<Piece> {
        let piece = self
            .piece_at(from)
            .ok_or_else(|| ChessError::IllegalMove(format!("no piece on {from}")))?;
        if !piece.reachable_targets(from, self).contains(&to) {
            return Err(ChessError::IllegalMove(format!(
                "{} {:?} on {from} cannot reach {to}",
                piece.team.name(),
                piece.kind
            )));
        }
        Ok(piece)
    }

    /// Move the piece on `from` to `to`, returning whatever was captured.
    ///
    /// On error the board is untouched.
    pub fn apply_move(&mut self, from: Position, to: Position) -> ChessResult<Option<Piece>> {
        let piece = self.validate_move(from, to)?;
        self.cells.remove(&from);
        let captured = self.cells.insert(to, piece);
        debug!(%from, %to, ?piece, ?captured, "move applied");
        Ok(captured)
    }

    pub fn has_king(&self, team: Team) -> bool {
        self.cells
            .values()
            .any(|pc| pc.team == team && pc.is_king())
    }

    /// Material total for `team`; pawns sharing a file with a friendly pawn
    /// count [`DOUBLED_PAWN_SCORE`] each.
    pub fn score_of(&self, team: Team) -> f64 {
        let mut pawns_per_file = [0u32; 8];
        let mut score = 0.0;
        for (pos, pc) in &self.cells {
            if pc.team != team {
                continue;
            }
            if pc.is_pawn() {
                pawns_per_file[pos.file() as usize - 1] += 1;
            } else {
                score += pc.base_score();
            }
        }
        for count in pawns_per_file {
            score += match count {
                0 => 0.0,
                1 => PieceKind::Pawn.base_score(),
                n => n as f64 * DOUBLED_PAWN_SCORE,
            };
        }
        score
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
