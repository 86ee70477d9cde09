//! Terminal input module (host-facing).
//!
//! Maps `crossterm` key events into [`crate::types::MatchAction`] and keeps the
//! pending point selection that the host submits on confirm. Nothing in here
//! talks to the match engine.

pub mod map;
pub mod selector;

pub use molkky_types as types;

pub use map::{
    handle_key_event, handle_setup_key_event, map_key, should_quit, should_quit_in, InputMode,
};
pub use selector::PointSelector;
