//! Report document - a read-only view of a match, ready for printing or export.
//!
//! All fields are plain strings and numbers so the JSON export is stable
//! regardless of how the engine's types evolve.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::core::{GameLog, GameState, Team};
use crate::types::TeamId;

/// Full match report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchReport {
    pub generated_at: NaiveDateTime,
    /// `SETUP`, `PLAYING` or `FINISHED`.
    pub status: String,
    pub round: u32,
    pub starting_team: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub winner: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub win_reason: Option<String>,
    pub teams: [TeamSummary; 2],
    pub rows: Vec<RoundRow>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamSummary {
    pub id: String,
    pub name: String,
    pub roster: Vec<String>,
    pub score: u8,
    pub faults: u8,
    pub eliminated: bool,
    pub winner: bool,
}

/// One line of the side-by-side table: a round with at most one throw per team.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundRow {
    pub round: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub a: Option<ReportCell>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub b: Option<ReportCell>,
}

impl RoundRow {
    pub fn cell(&self, id: TeamId) -> Option<&ReportCell> {
        match id {
            TeamId::A => self.a.as_ref(),
            TeamId::B => self.b.as_ref(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportCell {
    pub thrower: String,
    /// Points as printed: `X` for a miss.
    pub points: String,
    pub score_after: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl From<&GameLog> for ReportCell {
    fn from(log: &GameLog) -> Self {
        Self {
            thrower: log.thrower_name.clone(),
            points: log.points_label(),
            score_after: log.score_after,
            note: log.note.map(|n| n.as_str().to_string()),
        }
    }
}

impl MatchReport {
    pub fn from_state(state: &GameState, generated_at: NaiveDateTime) -> Self {
        let winner = state.winner();
        let summary = |team: &Team| TeamSummary {
            id: team.id().as_str().to_string(),
            name: team.name().to_string(),
            roster: team.roster().to_vec(),
            score: team.score(),
            faults: team.faults(),
            eliminated: team.is_eliminated(),
            winner: winner == Some(team.id()),
        };

        Self {
            generated_at,
            status: state.status().as_str().to_string(),
            round: state.round(),
            starting_team: state.starting_team().as_str().to_string(),
            winner: winner.map(|id| state.team(id).name().to_string()),
            win_reason: state.win_reason().map(|r| r.as_str().to_string()),
            teams: [summary(state.team_a()), summary(state.team_b())],
            rows: round_rows(state.history()),
        }
    }

    pub fn team(&self, id: TeamId) -> &TeamSummary {
        match id {
            TeamId::A => &self.teams[0],
            TeamId::B => &self.teams[1],
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Rows for rounds `1..=max_round`. Each cell is the first entry logged for
/// that team in that round; rounds a team did not throw in stay empty.
pub fn round_rows(history: &[GameLog]) -> Vec<RoundRow> {
    let max_round = history.iter().map(|l| l.round).max().unwrap_or(0);
    let find = |round: u32, team: TeamId| {
        history
            .iter()
            .find(|l| l.round == round && l.team_id == team)
            .map(ReportCell::from)
    };

    (1..=max_round)
        .map(|round| RoundRow {
            round,
            a: find(round, TeamId::A),
            b: find(round, TeamId::B),
        })
        .collect()
}
