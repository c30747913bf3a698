//! Storage boundary. The engine never knows whether a save inserts or updates.

use std::collections::HashMap;

use tracing::debug;

use crate::{error::ChessResult, snapshot::GameSnapshot};

pub trait GameStore {
    /// Create or replace the stored state for `snapshot.game_id`.
    fn upsert(&mut self, snapshot: GameSnapshot) -> ChessResult<()>;
}

/// In-process store keyed by game id; the last write wins.
#[derive(Debug, Default)]
pub struct MemoryStore {
    games: HashMap<String, GameSnapshot>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, game_id: &str) -> Option<&GameSnapshot> {
        self.games.get(game_id)
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }
}

impl GameStore for MemoryStore {
    fn upsert(&mut self, snapshot: GameSnapshot) -> ChessResult<()> {
        let replaced = self
            .games
            .insert(snapshot.game_id.clone(), snapshot)
            .is_some();
        debug!(replaced, "snapshot stored");
        Ok(())
    }
}
