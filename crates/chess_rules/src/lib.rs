pub mod board;
pub mod command;
pub mod config;
pub mod error;
pub mod export;
pub mod game;
pub mod movement;
pub mod position;
pub mod score;
pub mod snapshot;
pub mod store;
pub mod types;

// Rules engine surface; rendering, text parsing and I/O live with the caller
pub use board::*;
pub use command::*;
pub use config::*;
pub use error::*;
pub use export::*;
pub use game::*;
pub use movement::reachable_targets;
pub use position::*;
pub use score::*;
pub use snapshot::*;
pub use store::*;
pub use types::*;
