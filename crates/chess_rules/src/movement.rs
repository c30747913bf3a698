use std::collections::BTreeSet;

use crate::{board::Board, position::Position, types::*};

const KNIGHT_DELTAS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (-1, 2),
    (-2, 1),
    (1, -2),
    (2, -1),
    (-1, -2),
    (-2, -1),
];

const KING_DELTAS: [(i8, i8); 8] = [
    (1, 1),
    (1, 0),
    (1, -1),
    (0, 1),
    (0, -1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
];

const DIAGONALS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
const ORTHOGONALS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

impl Piece {
    /// Squares this piece could move to from `from` on `board`.
    ///
    /// Turn ownership and king safety are not considered.
    pub fn reachable_targets(self, from: Position, board: &Board) -> BTreeSet<Position> {
        reachable_targets(self, from, board)
    }
}

pub fn reachable_targets(piece: Piece, from: Position, board: &Board) -> BTreeSet<Position> {
    let mut out = BTreeSet::new();
    match piece.kind {
        PieceKind::Pawn => gen_pawn(board, from, piece.team, &mut out),
        PieceKind::Knight => gen_steps(board, from, piece.team, &KNIGHT_DELTAS, &mut out),
        PieceKind::Bishop => gen_slider(board, from, piece.team, &DIAGONALS, &mut out),
        PieceKind::Rook => gen_slider(board, from, piece.team, &ORTHOGONALS, &mut out),
        PieceKind::Queen => {
            gen_slider(board, from, piece.team, &DIAGONALS, &mut out);
            gen_slider(board, from, piece.team, &ORTHOGONALS, &mut out);
        }
        PieceKind::King => gen_steps(board, from, piece.team, &KING_DELTAS, &mut out),
    }
    out
}

fn gen_pawn(board: &Board, from: Position, team: Team, out: &mut BTreeSet<Position>) {
    let dir = team.forward();

    // forward 1, then forward 2 from the start rank through an empty square
    if let Some(one) = from.offset(0, dir)
        && board.piece_at(one).is_none()
    {
        out.insert(one);
        if from.rank() == team.pawn_rank()
            && let Some(two) = from.offset(0, 2 * dir)
            && board.piece_at(two).is_none()
        {
            out.insert(two);
        }
    }

    // diagonal squares are capture-only
    for df in [-1, 1] {
        if let Some(to) = from.offset(df, dir)
            && let Some(target) = board.piece_at(to)
            && target.team != team
        {
            out.insert(to);
        }
    }
}

fn gen_steps(
    board: &Board,
    from: Position,
    team: Team,
    deltas: &[(i8, i8)],
    out: &mut BTreeSet<Position>,
) {
    for &(df, dr) in deltas {
        if let Some(to) = from.offset(df, dr) {
            match board.piece_at(to) {
                None => {
                    out.insert(to);
                }
                Some(pc) if pc.team != team => {
                    out.insert(to);
                }
                _ => {}
            }
        }
    }
}

fn gen_slider(
    board: &Board,
    from: Position,
    team: Team,
    dirs: &[(i8, i8)],
    out: &mut BTreeSet<Position>,
) {
    for &(df, dr) in dirs {
        let mut cur = from;
        while let Some(to) = cur.offset(df, dr) {
            match board.piece_at(to) {
                None => {
                    out.insert(to);
                }
                Some(pc) if pc.team != team => {
                    out.insert(to);
                    break;
                }
                _ => break,
            }
            cur = to;
        }
    }
}

#[cfg(test)]
#[path = "movement_tests.rs"]
mod movement_tests;
