//! The persisted shape of a game: phase, identifier and full cell mapping.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::{
    error::{ChessError, ChessResult},
    game::{Game, Phase},
    position::Position,
    types::*,
};

/// One occupied square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellRecord {
    pub position: Position,
    pub team: Team,
    pub kind: PieceKind,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub game_id: String,
    pub phase: Phase,
    pub cells: Vec<CellRecord>,
}

impl GameSnapshot {
    pub fn to_json(&self) -> ChessResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| ChessError::InvalidSnapshot(e.to_string()))
    }

    pub fn from_json(text: &str) -> ChessResult<Self> {
        serde_json::from_str(text).map_err(|e| ChessError::InvalidSnapshot(e.to_string()))
    }
}

impl Game {
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            game_id: self.id().to_string(),
            phase: self.phase(),
            cells: self
                .board()
                .cells()
                .iter()
                .map(|(&position, pc)| CellRecord {
                    position,
                    team: pc.team,
                    kind: pc.kind,
                })
                .collect(),
        }
    }

    /// Rebuild a game from a snapshot. Two records for one square are rejected.
    pub fn from_snapshot(snapshot: &GameSnapshot) -> ChessResult<Self> {
        let mut seen = BTreeSet::new();
        for cell in &snapshot.cells {
            if !seen.insert(cell.position) {
                return Err(ChessError::InvalidSnapshot(format!(
                    "square {} appears more than once",
                    cell.position
                )));
            }
        }
        Ok(Game::restore(
            snapshot.phase,
            snapshot.game_id.clone(),
            snapshot
                .cells
                .iter()
                .map(|c| (c.position, Piece::new(c.team, c.kind))),
        ))
    }
}
