//! History entries and the pre-throw snapshots that make undo exact.

use crate::types::{TeamId, ThrowNote};

/// Mutable fields of one team, as they were before a throw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TeamSnapshot {
    pub score: u8,
    pub faults: u8,
    pub thrower_index: usize,
}

/// Everything a throw can change, captured before it is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TurnSnapshot {
    pub team_a: TeamSnapshot,
    pub team_b: TeamSnapshot,
    pub turn: TeamId,
}

impl TurnSnapshot {
    pub fn team(&self, id: TeamId) -> &TeamSnapshot {
        match id {
            TeamId::A => &self.team_a,
            TeamId::B => &self.team_b,
        }
    }
}

/// One resolved throw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameLog {
    /// 1-based position in the history.
    pub id: u32,
    pub round: u32,
    pub team_id: TeamId,
    pub team_name: String,
    pub thrower_name: String,
    /// Raw value thrown, 0 for a miss.
    pub points: u8,
    pub score_after: u8,
    pub note: Option<ThrowNote>,
    /// Milliseconds since the Unix epoch.
    pub timestamp_ms: u64,
    pub snapshot: TurnSnapshot,
}

impl GameLog {
    pub fn is_miss(&self) -> bool {
        self.points == 0
    }

    /// Points as printed on score sheets: `X` for a miss.
    pub fn points_label(&self) -> String {
        if self.is_miss() {
            "X".to_string()
        } else {
            self.points.to_string()
        }
    }
}
