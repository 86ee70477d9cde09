//! Match report - printable score sheet and JSON export
//!
//! The report is built from a [`GameState`](crate::core::GameState) without
//! mutating it. It mirrors the paper sheet used at Mölkky tournaments:
//!
//! 1. **Header**: date and time the sheet was produced
//! 2. **Summary**: each team's name, roster, final score and the result
//! 3. **Table**: one row per round, one column group per team
//!    (thrower, points with `X` for a miss, running total)
//! 4. **Signatures**: referee and both captains
//!
//! # Export formats
//!
//! - **text**: the printable sheet ([`MatchReport::render_text`])
//! - **json**: the [`MatchReport`] document via serde
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use molkky_core::{GameState, MatchSetup};
//! use molkky_report::MatchReport;
//!
//! let game = GameState::start_match(&MatchSetup::default());
//! let game = game.apply_throw(9).unwrap();
//!
//! let at = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap().and_hms_opt(12, 0, 0).unwrap();
//! let report = MatchReport::from_state(&game, at);
//! assert_eq!(report.rows.len(), 1);
//! assert!(report.render_text().contains("Referee signature"));
//! ```

pub mod document;
pub mod export;
pub mod sheet;

pub use molkky_core as core;
pub use molkky_types as types;

pub use document::{round_rows, MatchReport, ReportCell, RoundRow, TeamSummary};
pub use export::{ReportError, ReportFormat};
