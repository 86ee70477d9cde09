//! Team record owned by the match engine.

use crate::setup::TeamSetup;
use crate::snapshot::TeamSnapshot;
use crate::types::TeamId;

/// One side of the match.
///
/// Fields are only mutated by [`crate::GameState`] transitions; hosts read them
/// through the accessors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Team {
    id: TeamId,
    name: String,
    roster: Vec<String>,
    thrower_index: usize,
    score: u8,
    /// Consecutive misses since the last non-zero throw.
    faults: u8,
    eliminated: bool,
}

impl Team {
    /// Team with an empty roster, as held while in setup.
    pub fn empty(id: TeamId) -> Self {
        Self {
            id,
            name: String::new(),
            roster: Vec::new(),
            thrower_index: 0,
            score: 0,
            faults: 0,
            eliminated: false,
        }
    }

    /// Fresh team at the start of a match. The setup is expected to be
    /// sanitized (non-empty roster).
    pub fn from_setup(id: TeamId, setup: &TeamSetup) -> Self {
        Self {
            name: setup.name.clone(),
            roster: setup.roster.clone(),
            ..Self::empty(id)
        }
    }

    pub fn id(&self) -> TeamId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn roster(&self) -> &[String] {
        &self.roster
    }

    pub fn thrower_index(&self) -> usize {
        self.thrower_index
    }

    /// Thrower due next, `None` only for an empty (setup) roster.
    pub fn current_thrower(&self) -> Option<&str> {
        self.roster.get(self.thrower_index).map(String::as_str)
    }

    pub fn score(&self) -> u8 {
        self.score
    }

    pub fn faults(&self) -> u8 {
        self.faults
    }

    pub fn is_eliminated(&self) -> bool {
        self.eliminated
    }

    pub fn setup(&self) -> TeamSetup {
        TeamSetup::new(self.name.clone(), self.roster.clone())
    }

    pub(crate) fn snapshot(&self) -> TeamSnapshot {
        TeamSnapshot {
            score: self.score,
            faults: self.faults,
            thrower_index: self.thrower_index,
        }
    }

    /// Restore the mutable fields from a snapshot. Elimination is always
    /// cleared since a snapshot is taken while the team is still live.
    pub(crate) fn restore(&mut self, snap: &TeamSnapshot) {
        self.score = snap.score;
        self.faults = snap.faults;
        self.thrower_index = snap.thrower_index;
        self.eliminated = false;
    }

    pub(crate) fn record(&mut self, score: u8, faults: u8, eliminated: bool) {
        self.score = score;
        self.faults = faults;
        self.eliminated = eliminated;
    }

    /// Hand the turn to the next thrower in the roster.
    pub(crate) fn advance_thrower(&mut self) {
        if self.roster.is_empty() {
            self.thrower_index = 0;
            return;
        }
        self.thrower_index = (self.thrower_index + 1) % self.roster.len();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn team(roster: &[&str]) -> Team {
        let setup = TeamSetup::new("T", roster.iter().map(|s| s.to_string()).collect());
        Team::from_setup(TeamId::A, &setup)
    }

    #[test]
    fn test_single_thrower_roster_never_rotates() {
        let mut t = team(&["Al"]);
        for _ in 0..5 {
            t.advance_thrower();
            assert_eq!(t.thrower_index(), 0);
            assert_eq!(t.current_thrower(), Some("Al"));
        }
    }

    #[test]
    fn test_thrower_index_wraps() {
        let mut t = team(&["Al", "Bo", "Cy"]);
        let seen: Vec<usize> = (0..6)
            .map(|_| {
                t.advance_thrower();
                t.thrower_index()
            })
            .collect();
        assert_eq!(seen, vec![1, 2, 0, 1, 2, 0]);
    }

    #[test]
    fn test_empty_roster_does_not_panic() {
        let mut t = Team::empty(TeamId::B);
        t.advance_thrower();
        assert_eq!(t.thrower_index(), 0);
        assert_eq!(t.current_thrower(), None);
    }

    #[test]
    fn test_restore_clears_elimination() {
        let mut t = team(&["Al"]);
        let before = t.snapshot();
        t.record(0, 3, true);
        assert!(t.is_eliminated());

        t.restore(&before);
        assert!(!t.is_eliminated());
        assert_eq!(t.faults(), 0);
    }
}
