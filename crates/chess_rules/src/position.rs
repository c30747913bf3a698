use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ChessError, ChessResult};

/// A square on the 8x8 board, 1-based: file 1 = 'a', rank 1 = white's back rank.
///
/// Ordering follows board-reading order: rank 8 first, and within a rank
/// file 'a' to 'h'. Only enumeration depends on it, never the rules.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Position {
    file: u8,
    rank: u8,
}

static ALL_POSITIONS: [Position; 64] = build_all();

const fn build_all() -> [Position; 64] {
    let mut out = [Position { file: 1, rank: 1 }; 64];
    let mut i = 0;
    while i < 64 {
        out[i] = Position {
            file: (i % 8) as u8 + 1,
            rank: 8 - (i / 8) as u8,
        };
        i += 1;
    }
    out
}

impl Position {
    pub fn of(file: i32, rank: i32) -> ChessResult<Self> {
        if (1..=8).contains(&file) && (1..=8).contains(&rank) {
            Ok(Self {
                file: file as u8,
                rank: rank as u8,
            })
        } else {
            Err(ChessError::InvalidCoordinate { file, rank })
        }
    }

    /// All 64 squares in the crate's total order.
    pub fn all() -> &'static [Position; 64] {
        &ALL_POSITIONS
    }

    pub fn file(self) -> u8 {
        self.file
    }
    pub fn rank(self) -> u8 {
        self.rank
    }

    /// The square `df` files and `dr` ranks away, if it is on the board.
    pub fn offset(self, df: i8, dr: i8) -> Option<Position> {
        Position::of(
            self.file as i32 + df as i32,
            self.rank as i32 + dr as i32,
        )
        .ok()
    }

    pub fn file_delta(self, other: Position) -> i8 {
        self.file as i8 - other.file as i8
    }
    pub fn rank_delta(self, other: Position) -> i8 {
        self.rank as i8 - other.rank as i8
    }
    pub fn absolute_file_delta(self, other: Position) -> u8 {
        self.file_delta(other).unsigned_abs()
    }
    pub fn absolute_rank_delta(self, other: Position) -> u8 {
        self.rank_delta(other).unsigned_abs()
    }
}

impl Ord for Position {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .rank
            .cmp(&self.rank)
            .then_with(|| self.file.cmp(&other.file))
    }
}

impl PartialOrd for Position {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = (b'a' + self.file - 1) as char;
        let rank = (b'0' + self.rank) as char;
        write!(f, "{file}{rank}")
    }
}

impl FromStr for Position {
    type Err = ChessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let b = s.as_bytes();
        if b.len() != 2 {
            return Err(ChessError::InvalidNotation(s.to_string()));
        }
        let f = b[0].to_ascii_lowercase();
        let r = b[1];
        if !(b'a'..=b'h').contains(&f) || !(b'1'..=b'8').contains(&r) {
            return Err(ChessError::InvalidNotation(s.to_string()));
        }
        Position::of((f - b'a' + 1) as i32, (r - b'0') as i32)
    }
}

impl TryFrom<String> for Position {
    type Error = ChessError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Position> for String {
    fn from(pos: Position) -> Self {
        pos.to_string()
    }
}

#[cfg(test)]
#[path = "position_tests.rs"]
mod position_tests;
