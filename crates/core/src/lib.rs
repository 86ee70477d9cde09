//! Core match logic - pure, deterministic, and testable
//!
//! This crate contains the Mölkky scoring rules and the match state machine.
//! It has no dependencies on terminal, file or clock-driven I/O apart from the
//! log timestamp, which callers can supply explicitly.
//!
//! # Module Structure
//!
//! - [`game_state`]: the match state machine (start, throw, undo, reset)
//! - [`scoring`]: throw resolution (faults, bust, exact-50 win)
//! - [`setup`]: roster parsing, placeholder substitution and the setup form
//! - [`snapshot`]: history entries and the pre-throw snapshots used by undo
//! - [`team`]: per-team record
//!
//! # Rules
//!
//! - A throw scores 0 to 12 points; 0 is a miss.
//! - Three consecutive misses eliminate a team and hand the win to the opponent.
//! - Reaching exactly 50 wins. Going over 50 drops the score to 25.
//! - A round is one full cycle back to the team that threw first.
//!
//! # Example
//!
//! ```
//! use molkky_core::{GameState, MatchSetup};
//! use molkky_types::{GameStatus, TeamId};
//!
//! let setup = MatchSetup::from_raw("Tigers", "Aino\nEero", "Dragons", "Mikko", TeamId::A);
//! let game = GameState::start_match(&setup);
//!
//! let game = game.apply_throw(10).unwrap();
//! let game = game.apply_throw(7).unwrap();
//! assert_eq!(game.round(), 2);
//! assert_eq!(game.current_turn(), TeamId::A);
//!
//! let game = game.undo().unwrap();
//! assert_eq!(game.round(), 1);
//! assert_eq!(game.current_turn(), TeamId::B);
//! assert_eq!(game.status(), GameStatus::Playing);
//! ```

pub mod error;
pub mod game_state;
pub mod scoring;
pub mod setup;
pub mod snapshot;
pub mod team;

pub use molkky_types as types;

// Re-export commonly used types for convenience
pub use error::EngineError;
pub use game_state::GameState;
pub use scoring::{resolve_throw, ThrowOutcome, ThrowResult};
pub use setup::{parse_roster, MatchSetup, SetupDraft, SetupField, TeamSetup};
pub use snapshot::{GameLog, TeamSnapshot, TurnSnapshot};
pub use team::Team;
