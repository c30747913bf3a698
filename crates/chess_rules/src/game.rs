//! Game phases and the command-driven transition table.
//!
//! | phase        | command | next phase                                      |
//! |--------------|---------|-------------------------------------------------|
//! | not started  | start   | white to move, fresh standard board             |
//! | team to move | move    | other team to move, or finished on king capture |
//! | team to move | end     | finished                                        |
//! | any          | status  | unchanged                                       |
//!
//! Every other pairing is rejected with [`ChessError::IllegalCommand`].

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::{
    board::Board,
    command::Command,
    config::ExportConfig,
    error::{ChessError, ChessResult},
    export::export_board,
    position::Position,
    score::{Scores, Verdict},
    types::*,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    NotStarted,
    Turn(Team),
    Finished,
}

impl Phase {
    pub fn team_to_move(self) -> Option<Team> {
        match self {
            Phase::Turn(team) => Some(team),
            _ => None,
        }
    }

    pub fn is_finished(self) -> bool {
        self == Phase::Finished
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::NotStarted => f.write_str("not started"),
            Phase::Turn(team) => write!(f, "{} to move", team.name()),
            Phase::Finished => f.write_str("finished"),
        }
    }
}

fn illegal_command(command: &Command, phase: Phase) -> ChessError {
    ChessError::IllegalCommand {
        command: command.name().to_string(),
        phase: phase.to_string(),
    }
}

/// Apply one command to a phase and board without touching either.
///
/// Returns the next phase and the board that goes with it.
pub fn transition(phase: Phase, command: &Command, board: &Board) -> ChessResult<(Phase, Board)> {
    match (phase, command) {
        (_, Command::Status) => Ok((phase, board.clone())),
        (Phase::NotStarted, Command::Start) => Ok((Phase::Turn(Team::White), Board::standard())),
        (Phase::Turn(team), &Command::Move { from, to }) => {
            let (next, captured) = play_move(team, board, from, to)?;
            let phase = if captured.is_some_and(Piece::is_king) {
                Phase::Finished
            } else {
                Phase::Turn(team.other())
            };
            Ok((phase, next))
        }
        (Phase::Turn(_), Command::End) => Ok((Phase::Finished, board.clone())),
        _ => Err(illegal_command(command, phase)),
    }
}

fn play_move(
    team: Team,
    board: &Board,
    from: Position,
    to: Position,
) -> ChessResult<(Board, Option<Piece>)> {
    match board.piece_at(from) {
        None => return Err(ChessError::IllegalMove(format!("no piece on {from}"))),
        Some(pc) if pc.team != team => {
            return Err(ChessError::IllegalMove(format!(
                "the piece on {from} belongs to {}, it is {}'s turn",
                pc.team.name(),
                team.name()
            )));
        }
        Some(_) => {}
    }
    let mut next = board.clone();
    let captured = next.apply_move(from, to)?;
    Ok((next, captured))
}

/// What an accepted command did.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Outcome {
    Started,
    Moved { captured: Option<Piece> },
    Ended,
    Status(Scores),
}

/// One game: an identifier, its phase and its board.
#[derive(Clone, Debug, PartialEq)]
pub struct Game {
    id: String,
    phase: Phase,
    board: Board,
}

impl Game {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            phase: Phase::NotStarted,
            board: Board::standard(),
        }
    }

    /// Rebuild a game from stored state, skipping the standard setup.
    pub fn restore(
        phase: Phase,
        id: impl Into<String>,
        cells: impl IntoIterator<Item = (Position, Piece)>,
    ) -> Self {
        Self {
            id: id.into(),
            phase,
            board: Board::from_cells(cells),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }
    pub fn phase(&self) -> Phase {
        self.phase
    }
    pub fn board(&self) -> &Board {
        &self.board
    }
    pub fn is_finished(&self) -> bool {
        self.phase.is_finished()
    }

    pub fn scores(&self) -> Scores {
        Scores::from_board(&self.board)
    }

    pub fn verdict(&self) -> Verdict {
        Verdict::decide(&self.board)
    }

    pub fn export(&self, config: &ExportConfig) -> Vec<String> {
        export_board(&self.board, config)
    }

    /// Run a command. On error the game is exactly as it was.
    pub fn execute(&mut self, command: Command) -> ChessResult<Outcome> {
        let captured = match command {
            Command::Move { to, .. } => self.board.piece_at(to),
            _ => None,
        };
        let (phase, board) = match transition(self.phase, &command, &self.board) {
            Ok(next) => next,
            Err(err) => {
                debug!(game = %self.id, %command, phase = %self.phase, %err, "command rejected");
                return Err(err);
            }
        };

        if command != Command::Status {
            debug!(game = %self.id, %command, from = %self.phase, to = %phase, "transition");
        }
        self.phase = phase;
        self.board = board;

        Ok(match command {
            Command::Start => Outcome::Started,
            Command::Move { .. } => {
                if phase.is_finished() {
                    info!(
                        game = %self.id,
                        reason = "king captured",
                        winner = self.verdict().name(),
                        "game finished"
                    );
                }
                Outcome::Moved { captured }
            }
            Command::End => {
                info!(
                    game = %self.id,
                    reason = "end requested",
                    winner = self.verdict().name(),
                    "game finished"
                );
                Outcome::Ended
            }
            Command::Status => Outcome::Status(self.scores()),
        })
    }
}

#[cfg(test)]
#[path = "game_tests.rs"]
mod game_tests;
