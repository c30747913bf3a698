use std::fmt;

use serde::{Deserialize, Serialize};

use crate::position::Position;

/// A structured instruction for [`crate::Game::execute`].
///
/// Turning raw text into a `Command` is left to the caller.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "lowercase")]
pub enum Command {
    Start,
    Move { from: Position, to: Position },
    End,
    Status,
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::Start => "start",
            Command::Move { .. } => "move",
            Command::End => "end",
            Command::Status => "status",
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Move { from, to } => write!(f, "move {from} {to}"),
            other => f.write_str(other.name()),
        }
    }
}
