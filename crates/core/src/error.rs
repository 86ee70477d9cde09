use thiserror::Error;

use crate::types::GameStatus;

/// A rejected engine call. The state it was called on is left untouched.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineError {
    #[error("throws are only accepted while playing (status is {0})")]
    NotPlaying(GameStatus),
    #[error("a throw scores between 0 and 12 points, got {0}")]
    PointsOutOfRange(u8),
    #[error("there is no throw to undo")]
    NothingToUndo,
}
