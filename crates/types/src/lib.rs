//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (match engine, terminal rendering, report export).
//!
//! # Rule Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TARGET_SCORE` | 50 | Exact score that wins the match |
//! | `BUST_RESET_SCORE` | 25 | Score after overshooting the target |
//! | `MAX_PINS` | 12 | Highest value a single throw can score |
//! | `MAX_FAULTS` | 3 | Consecutive misses that eliminate a team |
//!
//! # Examples
//!
//! ```
//! use molkky_types::{MatchAction, TeamId, TARGET_SCORE};
//!
//! assert_eq!(TeamId::A.other(), TeamId::B);
//! assert_eq!(TeamId::from_str("b"), Some(TeamId::B));
//!
//! assert_eq!(MatchAction::from_str("undo"), Some(MatchAction::Undo));
//! assert_eq!(TARGET_SCORE, 50);
//! ```

use std::fmt;

/// Exact score a team must reach to win.
pub const TARGET_SCORE: u8 = 50;

/// Score a team falls back to when a throw takes it past [`TARGET_SCORE`].
pub const BUST_RESET_SCORE: u8 = 25;

/// Highest value a single throw can score (one pin knocked down alone).
pub const MAX_PINS: u8 = 12;

/// Consecutive misses after which a team is eliminated.
pub const MAX_FAULTS: u8 = 3;

/// Team identity. A match always has exactly two teams.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TeamId {
    A,
    B,
}

impl TeamId {
    /// The opposing team.
    pub fn other(self) -> Self {
        match self {
            TeamId::A => TeamId::B,
            TeamId::B => TeamId::A,
        }
    }

    /// Parse a team id (case-insensitive, surrounding whitespace ignored).
    ///
    /// ```
    /// use molkky_types::TeamId;
    ///
    /// assert_eq!(TeamId::from_str(" A "), Some(TeamId::A));
    /// assert_eq!(TeamId::from_str("c"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "a" => Some(TeamId::A),
            "b" => Some(TeamId::B),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TeamId::A => "A",
            TeamId::B => "B",
        }
    }
}

impl fmt::Display for TeamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lifecycle of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameStatus {
    /// Rosters are being entered; no throws accepted.
    #[default]
    Setup,
    /// Throws and undo are accepted.
    Playing,
    /// A winner has been decided. Undo reopens play.
    Finished,
}

impl GameStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameStatus::Setup => "SETUP",
            GameStatus::Playing => "PLAYING",
            GameStatus::Finished => "FINISHED",
        }
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Annotation attached to a history entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ThrowNote {
    /// The throw scored zero.
    Miss,
    /// The throw took the score past the target; it fell back to 25.
    Bust,
}

impl ThrowNote {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThrowNote::Miss => "Miss",
            ThrowNote::Bust => "Over 50 -> 25",
        }
    }
}

impl fmt::Display for ThrowNote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why a match ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WinReason {
    /// The winner hit exactly [`TARGET_SCORE`].
    ReachedTarget,
    /// The loser missed [`MAX_FAULTS`] times in a row.
    OpponentEliminated,
}

impl WinReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            WinReason::ReachedTarget => "reached exactly 50",
            WinReason::OpponentEliminated => "opponent missed three times in a row",
        }
    }
}

impl fmt::Display for WinReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Host-level actions, produced by key mapping and by scripted input.
///
/// Point selection is staged host-side; only [`MatchAction::Confirm`] reaches
/// the engine as a throw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchAction {
    /// A digit key (0-9) for the pending point selection.
    Digit(u8),
    /// Raise the pending selection by one.
    NextPoints,
    /// Lower the pending selection by one.
    PrevPoints,
    /// Drop the pending selection.
    ClearSelection,
    /// Submit the pending selection as a throw (or start the match on setup).
    Confirm,
    /// Revert the most recent throw.
    Undo,
    /// Choose which team throws first (setup only).
    ChooseStarter(TeamId),
    ToggleHistory,
    ToggleReport,
    ExportReport,
    /// Abandon the match and go back to setup.
    Restart,
    /// Append a character to the focused setup field.
    TypeChar(char),
    /// Remove the last character of the focused setup field.
    DeleteChar,
    /// Move focus to the next setup field.
    NextField,
    PrevField,
}

impl MatchAction {
    /// Parse an action name (for scripted input).
    ///
    /// ```
    /// use molkky_types::{MatchAction, TeamId};
    ///
    /// assert_eq!(MatchAction::from_str("confirm"), Some(MatchAction::Confirm));
    /// assert_eq!(MatchAction::from_str("starterB"), Some(MatchAction::ChooseStarter(TeamId::B)));
    /// assert_eq!(MatchAction::from_str("7"), Some(MatchAction::Digit(7)));
    /// assert_eq!(MatchAction::from_str("bogus"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        let lower = s.trim().to_lowercase();
        if lower.len() == 1 {
            if let Some(d) = lower.chars().next().and_then(|c| c.to_digit(10)) {
                return Some(MatchAction::Digit(d as u8));
            }
        }
        match lower.as_str() {
            "next" => Some(MatchAction::NextPoints),
            "prev" => Some(MatchAction::PrevPoints),
            "clear" => Some(MatchAction::ClearSelection),
            "confirm" => Some(MatchAction::Confirm),
            "undo" => Some(MatchAction::Undo),
            "startera" => Some(MatchAction::ChooseStarter(TeamId::A)),
            "starterb" => Some(MatchAction::ChooseStarter(TeamId::B)),
            "history" => Some(MatchAction::ToggleHistory),
            "report" => Some(MatchAction::ToggleReport),
            "export" => Some(MatchAction::ExportReport),
            "restart" => Some(MatchAction::Restart),
            "delete" => Some(MatchAction::DeleteChar),
            "nextfield" => Some(MatchAction::NextField),
            "prevfield" => Some(MatchAction::PrevField),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MatchAction::Digit(_) => "digit",
            MatchAction::NextPoints => "next",
            MatchAction::PrevPoints => "prev",
            MatchAction::ClearSelection => "clear",
            MatchAction::Confirm => "confirm",
            MatchAction::Undo => "undo",
            MatchAction::ChooseStarter(TeamId::A) => "starterA",
            MatchAction::ChooseStarter(TeamId::B) => "starterB",
            MatchAction::ToggleHistory => "history",
            MatchAction::ToggleReport => "report",
            MatchAction::ExportReport => "export",
            MatchAction::Restart => "restart",
            MatchAction::TypeChar(_) => "type",
            MatchAction::DeleteChar => "delete",
            MatchAction::NextField => "nextField",
            MatchAction::PrevField => "prevField",
        }
    }
}
