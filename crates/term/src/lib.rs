//! Terminal rendering for the scoreboard.
//!
//! Renders into a plain framebuffer instead of using widget libraries, then
//! flushes only the changed cells to the terminal. `match_view` is pure and
//! is what the tests exercise; `renderer` owns the real terminal.

pub mod fb;
pub mod match_view;
pub mod renderer;

pub use molkky_core as core;
pub use molkky_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use match_view::{HostView, MatchView, Overlay, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
