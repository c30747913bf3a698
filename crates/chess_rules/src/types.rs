use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Team {
    White,
    Black,
}
impl Team {
    pub const ALL: [Team; 2] = [Team::White, Team::Black];

    pub fn other(self) -> Team {
        match self {
            Team::White => Team::Black,
            Team::Black => Team::White,
        }
    }
    pub fn idx(self) -> usize {
        match self {
            Team::White => 0,
            Team::Black => 1,
        }
    }
    pub fn name(self) -> &'static str {
        match self {
            Team::White => "white",
            Team::Black => "black",
        }
    }
    /// Rank step a pawn of this team advances by.
    pub fn forward(self) -> i8 {
        match self {
            Team::White => 1,
            Team::Black => -1,
        }
    }
    /// Rank the team's pawns start on (1-based).
    pub fn pawn_rank(self) -> u8 {
        match self {
            Team::White => 2,
            Team::Black => 7,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}
impl PieceKind {
    pub fn letter(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }

    /// Material value before the doubled-pawn adjustment.
    pub fn base_score(self) -> f64 {
        match self {
            PieceKind::Pawn => 1.0,
            PieceKind::Knight => 2.5,
            PieceKind::Bishop => 3.0,
            PieceKind::Rook => 5.0,
            PieceKind::Queen => 9.0,
            PieceKind::King => 0.0,
        }
    }
}

/// Value of a pawn that shares its file with another pawn of the same team.
pub const DOUBLED_PAWN_SCORE: f64 = 0.5;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub team: Team,
    pub kind: PieceKind,
}
impl Piece {
    pub fn new(team: Team, kind: PieceKind) -> Self {
        Self { team, kind }
    }

    /// Single-character symbol: black pieces upper-case, white lower-case.
    pub fn symbol(self) -> char {
        match self.team {
            Team::White => self.kind.letter(),
            Team::Black => self.kind.letter().to_ascii_uppercase(),
        }
    }

    pub fn letter(self) -> char {
        self.kind.letter()
    }

    pub fn base_score(self) -> f64 {
        self.kind.base_score()
    }

    pub fn is_king(self) -> bool {
        self.kind == PieceKind::King
    }

    pub fn is_pawn(self) -> bool {
        self.kind == PieceKind::Pawn
    }
}
