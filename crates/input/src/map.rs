//! Key mapping from terminal events to match actions.
//!
//! The setup screen is a text form, so it gets its own map: printable keys
//! are typed into the focused field there instead of triggering commands.

use crate::types::{GameStatus, MatchAction, TeamId};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Which key map applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    Setup,
    #[default]
    Match,
}

impl InputMode {
    pub fn for_status(status: GameStatus) -> Self {
        match status {
            GameStatus::Setup => InputMode::Setup,
            GameStatus::Playing | GameStatus::Finished => InputMode::Match,
        }
    }
}

/// Map keyboard input to match actions.
pub fn handle_key_event(key: KeyEvent) -> Option<MatchAction> {
    match key.code {
        // Point selection
        KeyCode::Char(c @ '0'..='9') => c.to_digit(10).map(|d| MatchAction::Digit(d as u8)),
        KeyCode::Right | KeyCode::Up | KeyCode::Char('+') => Some(MatchAction::NextPoints),
        KeyCode::Left | KeyCode::Down | KeyCode::Char('-') => Some(MatchAction::PrevPoints),
        KeyCode::Backspace | KeyCode::Esc => Some(MatchAction::ClearSelection),

        // Submit
        KeyCode::Enter | KeyCode::Char(' ') => Some(MatchAction::Confirm),

        // Match control
        KeyCode::Char('u') | KeyCode::Char('U') => Some(MatchAction::Undo),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(MatchAction::Restart),

        // Panels
        KeyCode::Char('h') | KeyCode::Char('H') => Some(MatchAction::ToggleHistory),
        KeyCode::Char('p') | KeyCode::Char('P') => Some(MatchAction::ToggleReport),
        KeyCode::Char('e') | KeyCode::Char('E') => Some(MatchAction::ExportReport),

        _ => None,
    }
}

/// Map keyboard input on the setup form.
pub fn handle_setup_key_event(key: KeyEvent) -> Option<MatchAction> {
    if key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
        return None;
    }
    match key.code {
        KeyCode::Tab | KeyCode::Down => Some(MatchAction::NextField),
        KeyCode::BackTab | KeyCode::Up => Some(MatchAction::PrevField),
        KeyCode::Left => Some(MatchAction::ChooseStarter(TeamId::A)),
        KeyCode::Right => Some(MatchAction::ChooseStarter(TeamId::B)),
        KeyCode::Backspace => Some(MatchAction::DeleteChar),
        KeyCode::Enter => Some(MatchAction::Confirm),
        KeyCode::Char(c) => Some(MatchAction::TypeChar(c)),
        _ => None,
    }
}

/// Dispatch on the current mode.
pub fn map_key(mode: InputMode, key: KeyEvent) -> Option<MatchAction> {
    match mode {
        InputMode::Setup => handle_setup_key_event(key),
        InputMode::Match => handle_key_event(key),
    }
}

/// Check if key should quit the application.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q')) || is_ctrl_c(key)
}

/// On the setup form `q` is a letter, so only Esc and Ctrl-C quit.
pub fn should_quit_in(mode: InputMode, key: KeyEvent) -> bool {
    match mode {
        InputMode::Setup => key.code == KeyCode::Esc || is_ctrl_c(key),
        InputMode::Match => should_quit(key),
    }
}

fn is_ctrl_c(key: KeyEvent) -> bool {
    key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
}
