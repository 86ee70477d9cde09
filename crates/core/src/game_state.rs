//! Game state module - the match state machine
//!
//! Every transition takes `&self` and returns a new [`GameState`]; the host
//! keeps exactly one current value and replaces it after each call. Rejected
//! calls return an [`EngineError`] and leave the caller's value as it was.

use std::time::{SystemTime, UNIX_EPOCH};

use tracing::{debug, info};

use crate::error::EngineError;
use crate::scoring::{resolve_throw, ThrowResult};
use crate::setup::MatchSetup;
use crate::snapshot::{GameLog, TurnSnapshot};
use crate::team::Team;
use crate::types::{GameStatus, TeamId, WinReason, MAX_PINS};

/// Complete match state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    status: GameStatus,
    team_a: Team,
    team_b: Team,
    current_turn: TeamId,
    /// Team that threw first; the round advances each time play returns to it.
    starting_team: TeamId,
    round: u32,
    history: Vec<GameLog>,
    winner: Option<TeamId>,
    win_reason: Option<WinReason>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Fresh state in setup, with empty rosters.
    pub fn new() -> Self {
        Self {
            status: GameStatus::Setup,
            team_a: Team::empty(TeamId::A),
            team_b: Team::empty(TeamId::B),
            current_turn: TeamId::A,
            starting_team: TeamId::A,
            round: 1,
            history: Vec::new(),
            winner: None,
            win_reason: None,
        }
    }

    /// Start a match from a setup.
    ///
    /// The setup is sanitized first, so blank names and empty rosters are
    /// replaced by placeholders rather than producing an unplayable team.
    pub fn start_match(setup: &MatchSetup) -> Self {
        let setup = setup.sanitized();
        info!(
            team_a = %setup.team_a.name,
            team_b = %setup.team_b.name,
            starting = %setup.starting_team,
            "match started"
        );

        Self {
            status: GameStatus::Playing,
            team_a: Team::from_setup(TeamId::A, &setup.team_a),
            team_b: Team::from_setup(TeamId::B, &setup.team_b),
            current_turn: setup.starting_team,
            starting_team: setup.starting_team,
            round: 1,
            history: Vec::new(),
            winner: None,
            win_reason: None,
        }
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_playing(&self) -> bool {
        self.status == GameStatus::Playing
    }

    pub fn is_finished(&self) -> bool {
        self.status == GameStatus::Finished
    }

    pub fn team(&self, id: TeamId) -> &Team {
        match id {
            TeamId::A => &self.team_a,
            TeamId::B => &self.team_b,
        }
    }

    fn team_mut(&mut self, id: TeamId) -> &mut Team {
        match id {
            TeamId::A => &mut self.team_a,
            TeamId::B => &mut self.team_b,
        }
    }

    pub fn team_a(&self) -> &Team {
        &self.team_a
    }

    pub fn team_b(&self) -> &Team {
        &self.team_b
    }

    pub fn current_turn(&self) -> TeamId {
        self.current_turn
    }

    pub fn current_team(&self) -> &Team {
        self.team(self.current_turn)
    }

    pub fn starting_team(&self) -> TeamId {
        self.starting_team
    }

    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn history(&self) -> &[GameLog] {
        &self.history
    }

    pub fn last_log(&self) -> Option<&GameLog> {
        self.history.last()
    }

    pub fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }

    pub fn winner(&self) -> Option<TeamId> {
        self.winner
    }

    pub fn winning_team(&self) -> Option<&Team> {
        self.winner.map(|id| self.team(id))
    }

    pub fn win_reason(&self) -> Option<WinReason> {
        self.win_reason
    }

    /// Names and rosters currently held, as a setup (used to prefill the
    /// setup screen after a reset).
    pub fn setup(&self) -> MatchSetup {
        MatchSetup {
            team_a: self.team_a.setup(),
            team_b: self.team_b.setup(),
            starting_team: self.starting_team,
        }
    }

    /// The fields a throw can change, as they are now.
    pub fn snapshot(&self) -> TurnSnapshot {
        TurnSnapshot {
            team_a: self.team_a.snapshot(),
            team_b: self.team_b.snapshot(),
            turn: self.current_turn,
        }
    }

    /// Resolve a throw by the team whose turn it is, timestamped now.
    pub fn apply_throw(&self, points: u8) -> Result<Self, EngineError> {
        self.apply_throw_at(points, now_ms())
    }

    /// Resolve a throw with an explicit log timestamp (milliseconds since the
    /// Unix epoch).
    pub fn apply_throw_at(&self, points: u8, timestamp_ms: u64) -> Result<Self, EngineError> {
        if self.status != GameStatus::Playing {
            debug!(status = %self.status, points, "throw rejected");
            return Err(EngineError::NotPlaying(self.status));
        }
        if points > MAX_PINS {
            debug!(points, "throw rejected");
            return Err(EngineError::PointsOutOfRange(points));
        }

        let acting = self.current_turn;
        let snapshot = self.snapshot();
        let team = self.team(acting);
        let outcome = resolve_throw(team.score(), team.faults(), points);

        let log = GameLog {
            id: self.history.len() as u32 + 1,
            round: self.round,
            team_id: acting,
            team_name: team.name().to_string(),
            thrower_name: team.current_thrower().unwrap_or_default().to_string(),
            points,
            score_after: outcome.score,
            note: outcome.note,
            timestamp_ms,
            snapshot,
        };

        let mut next = self.clone();
        {
            let team = next.team_mut(acting);
            team.record(
                outcome.score,
                outcome.faults,
                outcome.result == ThrowResult::Eliminated,
            );
            team.advance_thrower();
        }
        let had_history = !next.history.is_empty();
        next.history.push(log);

        match outcome.result {
            ThrowResult::Continue => {
                next.current_turn = acting.other();
                if had_history && next.current_turn == next.starting_team {
                    next.round += 1;
                }
            }
            ThrowResult::Won => next.finish(acting, WinReason::ReachedTarget),
            ThrowResult::Eliminated => next.finish(acting.other(), WinReason::OpponentEliminated),
        }

        debug!(
            team = %acting,
            points,
            score = outcome.score,
            faults = outcome.faults,
            note = ?outcome.note,
            round = next.round,
            "throw resolved"
        );
        Ok(next)
    }

    /// Turn and round stay on the deciding throw. A win by the team that
    /// threw second is reported in the round it was thrown in; the turn is
    /// not flipped and the round is not advanced past it.
    fn finish(&mut self, winner: TeamId, reason: WinReason) {
        self.status = GameStatus::Finished;
        self.winner = Some(winner);
        self.win_reason = Some(reason);
        info!(winner = %winner, reason = %reason, round = self.round, "match finished");
    }

    /// Revert the most recent throw from its snapshot.
    pub fn undo(&self) -> Result<Self, EngineError> {
        let Some(last) = self.history.last() else {
            debug!("undo rejected: empty history");
            return Err(EngineError::NothingToUndo);
        };

        let mut next = self.clone();
        next.team_a.restore(&last.snapshot.team_a);
        next.team_b.restore(&last.snapshot.team_b);
        next.current_turn = last.snapshot.turn;
        next.round = last.round;
        next.winner = None;
        next.win_reason = None;
        next.status = GameStatus::Playing;
        next.history.pop();

        debug!(undone = last.id, team = %last.team_id, points = last.points, "throw undone");
        Ok(next)
    }

    /// Abandon the match. Names and rosters are kept for the setup screen;
    /// scores, history and the result are discarded.
    pub fn reset_to_setup(&self) -> Self {
        info!(throws = self.history.len(), "match reset to setup");
        let mut next = Self::new();
        next.team_a = Team::from_setup(TeamId::A, &self.team_a.setup());
        next.team_b = Team::from_setup(TeamId::B, &self.team_b.setup());
        next.current_turn = self.starting_team;
        next.starting_team = self.starting_team;
        next
    }
}

fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ThrowNote;

    fn solo_match() -> GameState {
        let setup = MatchSetup::new(
            "Alpha",
            vec!["Al".to_string()],
            "Beta",
            vec!["Bo".to_string()],
            TeamId::A,
        );
        GameState::start_match(&setup)
    }

    fn throws(state: &GameState, points: &[u8]) -> GameState {
        points.iter().fold(state.clone(), |s, &p| {
            s.apply_throw_at(p, 0).expect("throw accepted")
        })
    }

    #[test]
    fn test_new_state_is_setup() {
        let state = GameState::new();
        assert_eq!(state.status(), GameStatus::Setup);
        assert!(state.team_a().roster().is_empty());
        assert_eq!(state.round(), 1);
        assert!(!state.can_undo());
    }

    #[test]
    fn test_start_match_fresh_values() {
        let state = solo_match();
        assert_eq!(state.status(), GameStatus::Playing);
        assert_eq!(state.current_turn(), TeamId::A);
        assert_eq!(state.round(), 1);
        for id in [TeamId::A, TeamId::B] {
            let t = state.team(id);
            assert_eq!(t.score(), 0);
            assert_eq!(t.faults(), 0);
            assert_eq!(t.thrower_index(), 0);
            assert!(!t.is_eliminated());
        }
        assert!(state.winner().is_none());
        assert!(state.win_reason().is_none());
    }

    #[test]
    fn test_start_match_with_empty_roster_uses_placeholder() {
        let setup = MatchSetup::new("", vec![], "Beta", vec!["Bo".to_string()], TeamId::B);
        let state = GameState::start_match(&setup);
        assert_eq!(state.team_a().name(), "Team A");
        assert_eq!(state.team_a().roster(), &["Captain A".to_string()]);

        // Team A can throw without a division by zero on the thrower index.
        let state = throws(&state, &[3, 4]);
        assert_eq!(state.team_a().thrower_index(), 0);
        assert_eq!(state.history()[1].thrower_name, "Captain A");
    }

    #[test]
    fn test_throw_before_start_is_rejected() {
        let state = GameState::new();
        assert_eq!(
            state.apply_throw(5),
            Err(EngineError::NotPlaying(GameStatus::Setup))
        );
    }

    #[test]
    fn test_out_of_range_throw_is_rejected() {
        let state = solo_match();
        assert_eq!(state.apply_throw(13), Err(EngineError::PointsOutOfRange(13)));
        assert_eq!(state, solo_match());
    }

    #[test]
    fn test_throw_after_finish_is_rejected() {
        let state = throws(&solo_match(), &[12, 1, 12, 1, 12, 1, 12, 1, 2]);
        assert!(state.is_finished());
        assert_eq!(
            state.apply_throw(1),
            Err(EngineError::NotPlaying(GameStatus::Finished))
        );
    }

    #[test]
    fn test_log_entry_contents() {
        let state = throws(&solo_match(), &[7]);
        let log = state.last_log().unwrap();
        assert_eq!(log.id, 1);
        assert_eq!(log.round, 1);
        assert_eq!(log.team_id, TeamId::A);
        assert_eq!(log.team_name, "Alpha");
        assert_eq!(log.thrower_name, "Al");
        assert_eq!(log.points, 7);
        assert_eq!(log.score_after, 7);
        assert_eq!(log.note, None);
        assert_eq!(log.snapshot.turn, TeamId::A);
        assert_eq!(log.snapshot.team_a.score, 0);
    }

    #[test]
    fn test_miss_annotated() {
        let state = throws(&solo_match(), &[0]);
        assert_eq!(state.last_log().unwrap().note, Some(ThrowNote::Miss));
        assert_eq!(state.team_a().faults(), 1);
        assert_eq!(state.current_turn(), TeamId::B);
    }

    #[test]
    fn test_other_team_untouched_by_throw() {
        let state = throws(&solo_match(), &[5, 0]);
        let before_b = state.team_b().clone();
        let state = throws(&state, &[6]);
        assert_eq!(state.team_b(), &before_b);
    }

    #[test]
    fn test_round_never_advances_on_first_throw_when_b_starts() {
        let setup = MatchSetup {
            starting_team: TeamId::B,
            ..MatchSetup::default()
        };
        let state = GameState::start_match(&setup);
        let state = throws(&state, &[4]);
        assert_eq!(state.current_turn(), TeamId::A);
        assert_eq!(state.round(), 1);

        let state = throws(&state, &[4]);
        assert_eq!(state.current_turn(), TeamId::B);
        assert_eq!(state.round(), 2);
    }

    #[test]
    fn test_finishing_throw_keeps_turn_and_round() {
        // B reaches 50 with the second throw of round 5.
        let state = throws(&solo_match(), &[12, 12, 12, 12, 12, 12, 1, 12, 1, 2]);
        assert!(state.is_finished());
        assert_eq!(state.winner(), Some(TeamId::B));
        assert_eq!(state.current_turn(), TeamId::B);
        assert_eq!(state.round(), 5);
        assert_eq!(state.last_log().unwrap().round, 5);
    }

    #[test]
    fn test_elimination_advances_thrower_index() {
        let setup = MatchSetup::new(
            "Alpha",
            vec!["Al".to_string(), "Ari".to_string()],
            "Beta",
            vec!["Bo".to_string()],
            TeamId::A,
        );
        let state = GameState::start_match(&setup);
        // A: miss, miss, miss (index 0 -> 1 -> 0 -> 1).
        let state = throws(&state, &[0, 3, 0, 3, 0]);
        assert!(state.team_a().is_eliminated());
        assert_eq!(state.team_a().thrower_index(), 1);
        assert_eq!(state.winner(), Some(TeamId::B));
    }

    #[test]
    fn test_undo_on_empty_history_is_rejected() {
        let state = solo_match();
        assert_eq!(state.undo(), Err(EngineError::NothingToUndo));
    }

    #[test]
    fn test_undo_reopens_finished_match() {
        let state = throws(&solo_match(), &[0, 1, 0, 1, 0]);
        assert!(state.is_finished());
        assert!(state.team_a().is_eliminated());

        let state = state.undo().unwrap();
        assert_eq!(state.status(), GameStatus::Playing);
        assert!(!state.team_a().is_eliminated());
        assert_eq!(state.team_a().faults(), 2);
        assert_eq!(state.current_turn(), TeamId::A);
        assert!(state.winner().is_none());
        assert!(state.win_reason().is_none());
    }

    #[test]
    fn test_reset_keeps_names_and_clears_progress() {
        let state = throws(&solo_match(), &[12, 12]);
        let reset = state.reset_to_setup();
        assert_eq!(reset.status(), GameStatus::Setup);
        assert!(reset.history().is_empty());
        assert_eq!(reset.team_a().score(), 0);
        assert_eq!(reset.team_a().name(), "Alpha");
        assert_eq!(reset.setup().team_b.roster, vec!["Bo".to_string()]);
        assert_eq!(reset.round(), 1);
    }
}
