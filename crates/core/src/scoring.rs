//! Scoring module - Mölkky throw resolution rules
//!
//! Rules:
//! - A miss (0 points) adds a fault; the third consecutive fault eliminates the team.
//! - Any non-zero throw clears the fault counter and adds its points.
//! - Landing exactly on 50 wins; going past 50 drops the score back to 25.

use crate::types::{ThrowNote, BUST_RESET_SCORE, MAX_FAULTS, TARGET_SCORE};

/// What a throw does to the match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThrowResult {
    /// Play continues.
    Continue,
    /// The throwing team reached the target exactly.
    Won,
    /// The throwing team hit the fault limit; the opponent wins.
    Eliminated,
}

/// Resolution of a single throw for the acting team.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThrowOutcome {
    pub score: u8,
    pub faults: u8,
    pub note: Option<ThrowNote>,
    pub result: ThrowResult,
}

/// Add points to a score, applying the bust rule.
///
/// Returns the new score and whether the throw busted.
pub fn add_points(score: u8, points: u8) -> (u8, bool) {
    let total = score as u16 + points as u16;
    if total > TARGET_SCORE as u16 {
        (BUST_RESET_SCORE, true)
    } else {
        (total as u8, false)
    }
}

/// Resolve a throw against the acting team's score and fault counter.
///
/// `points` is assumed to be in range; range checks belong to the caller.
pub fn resolve_throw(score: u8, faults: u8, points: u8) -> ThrowOutcome {
    if points == 0 {
        let faults = faults.saturating_add(1);
        let result = if faults >= MAX_FAULTS {
            ThrowResult::Eliminated
        } else {
            ThrowResult::Continue
        };
        return ThrowOutcome {
            score,
            faults,
            note: Some(ThrowNote::Miss),
            result,
        };
    }

    let (score, busted) = add_points(score, points);
    let result = if score == TARGET_SCORE {
        ThrowResult::Won
    } else {
        ThrowResult::Continue
    };

    ThrowOutcome {
        score,
        faults: 0,
        note: busted.then_some(ThrowNote::Bust),
        result,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::MAX_PINS;

    #[test]
    fn test_add_points_all_cases() {
        for s in 0..TARGET_SCORE {
            for p in 1..=MAX_PINS {
                let (score, busted) = add_points(s, p);
                let total = s + p;
                if total < TARGET_SCORE {
                    assert_eq!((score, busted), (total, false));
                } else if total == TARGET_SCORE {
                    assert_eq!((score, busted), (TARGET_SCORE, false));
                } else {
                    assert_eq!((score, busted), (BUST_RESET_SCORE, true));
                }
            }
        }
    }

    #[test]
    fn test_exact_target_wins() {
        let out = resolve_throw(38, 2, 12);
        assert_eq!(out.score, 50);
        assert_eq!(out.faults, 0);
        assert_eq!(out.note, None);
        assert_eq!(out.result, ThrowResult::Won);
    }

    #[test]
    fn test_bust_is_never_a_win() {
        // 49 + 1 would win; 49 + 2 busts even though it was one point away.
        let out = resolve_throw(49, 0, 2);
        assert_eq!(out.score, 25);
        assert_eq!(out.note, Some(ThrowNote::Bust));
        assert_eq!(out.result, ThrowResult::Continue);
    }

    #[test]
    fn test_miss_counts_fault_and_keeps_score() {
        let out = resolve_throw(17, 0, 0);
        assert_eq!(out.score, 17);
        assert_eq!(out.faults, 1);
        assert_eq!(out.note, Some(ThrowNote::Miss));
        assert_eq!(out.result, ThrowResult::Continue);
    }

    #[test]
    fn test_third_miss_eliminates() {
        let out = resolve_throw(30, 2, 0);
        assert_eq!(out.faults, 3);
        assert_eq!(out.result, ThrowResult::Eliminated);
    }

    #[test]
    fn test_score_resets_fault_counter() {
        let out = resolve_throw(10, 2, 1);
        assert_eq!(out.faults, 0);
        assert_eq!(out.score, 11);
    }
}
