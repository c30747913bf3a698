//! Material totals and the winner derived from them.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{board::Board, types::Team};

/// Material score of both teams at one moment.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Scores {
    pub white: f64,
    pub black: f64,
}

impl Scores {
    pub fn from_board(board: &Board) -> Self {
        Self {
            white: board.score_of(Team::White),
            black: board.score_of(Team::Black),
        }
    }

    pub fn of(&self, team: Team) -> f64 {
        match team {
            Team::White => self.white,
            Team::Black => self.black,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Team, f64)> + '_ {
        Team::ALL.into_iter().map(move |team| (team, self.of(team)))
    }

    pub fn to_map(&self) -> BTreeMap<Team, f64> {
        self.iter().collect()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Winner(Team),
    Draw,
}

impl Verdict {
    /// A team without its king has lost outright; otherwise the higher
    /// material score wins and equal scores are a draw.
    pub fn decide(board: &Board) -> Self {
        match (board.has_king(Team::White), board.has_king(Team::Black)) {
            (true, false) => return Verdict::Winner(Team::White),
            (false, true) => return Verdict::Winner(Team::Black),
            _ => {}
        }
        let scores = Scores::from_board(board);
        if scores.white > scores.black {
            Verdict::Winner(Team::White)
        } else if scores.black > scores.white {
            Verdict::Winner(Team::Black)
        } else {
            Verdict::Draw
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Verdict::Winner(team) => team.name(),
            Verdict::Draw => "draw",
        }
    }
}
