//! MatchView: maps `core::GameState` plus host-side state into a framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{GameState, SetupDraft, SetupField, Team};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{GameStatus, TeamId, MAX_FAULTS, MAX_PINS, TARGET_SCORE};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Panel drawn over the scoreboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Overlay {
    #[default]
    None,
    History,
    Report,
}

/// Host-side state that is not part of the match.
#[derive(Debug, Clone, Copy, Default)]
pub struct HostView<'a> {
    /// Pending point selection, not yet submitted.
    pub selected: Option<u8>,
    pub overlay: Overlay,
    /// One-line status shown at the bottom (export path, rejected input).
    pub message: Option<&'a str>,
    /// Pre-rendered report, shown by [`Overlay::Report`].
    pub report_text: Option<&'a str>,
    /// Form being edited on the setup screen. Falls back to the state's own setup.
    pub draft: Option<&'a SetupDraft>,
}

const BLACK: Rgb = Rgb::new(0, 0, 0);
const TEXT: Rgb = Rgb::new(220, 220, 220);
const MUTED: Rgb = Rgb::new(120, 125, 140);
const HEADER_BG: Rgb = Rgb::new(15, 23, 42);
const PANEL_BG: Rgb = Rgb::new(30, 30, 40);
const ACTIVE_BG: Rgb = Rgb::new(45, 48, 62);
const FAULT_RED: Rgb = Rgb::new(239, 68, 68);
const GOLD: Rgb = Rgb::new(250, 204, 21);

const KEYPAD_H: u16 = 4;
const BIG_DIGIT_H: u16 = 5;

/// 3x5 block glyphs for the big score.
const BIG_DIGITS: [[&str; 5]; 10] = [
    ["███", "█ █", "█ █", "█ █", "███"],
    [" █ ", "██ ", " █ ", " █ ", "███"],
    ["███", "  █", "███", "█  ", "███"],
    ["███", "  █", "███", "  █", "███"],
    ["█ █", "█ █", "███", "  █", "  █"],
    ["███", "█  ", "███", "  █", "███"],
    ["███", "█  ", "███", "█ █", "███"],
    ["███", "  █", "  █", "  █", "  █"],
    ["███", "█ █", "███", "█ █", "███"],
    ["███", "█ █", "███", "  █", "███"],
];

fn team_color(id: TeamId) -> Rgb {
    match id {
        TeamId::A => Rgb::new(16, 185, 129),
        TeamId::B => Rgb::new(59, 130, 246),
    }
}

/// A lightweight terminal view of the match.
#[derive(Debug, Clone, Copy)]
pub struct MatchView {
    /// Draw scores with block glyphs when the panel is tall enough.
    big_digits: bool,
}

impl Default for MatchView {
    fn default() -> Self {
        Self { big_digits: true }
    }
}

impl MatchView {
    pub fn new(big_digits: bool) -> Self {
        Self { big_digits }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, state: &GameState, host: &HostView, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(state, host, viewport, &mut fb);
        fb
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(
        &self,
        state: &GameState,
        host: &HostView,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::plain(TEXT, BLACK).into_cell(' '));
        if viewport.width < 20 || viewport.height < 6 {
            fb.put_str(0, 0, "Too small", CellStyle::plain(TEXT, BLACK));
            return;
        }

        self.draw_header(fb, state, viewport);

        if state.status() == GameStatus::Setup {
            self.draw_setup(fb, state, host.draft, viewport);
        } else {
            let panel_h = self.draw_scoreboard(fb, state, viewport);
            if state.is_finished() {
                self.draw_winner_banner(fb, state, viewport, 2 + panel_h);
            } else {
                self.draw_keypad(fb, state, host, viewport, 2 + panel_h);
            }
        }

        match host.overlay {
            Overlay::None => {}
            Overlay::History => self.draw_history(fb, state, viewport),
            Overlay::Report => self.draw_report(fb, host.report_text.unwrap_or(""), viewport),
        }

        if let Some(msg) = host.message {
            let y = viewport.height - 1;
            fb.fill_rect(0, y, viewport.width, 1, ' ', CellStyle::plain(TEXT, BLACK));
            fb.put_str(1, y, msg, CellStyle::plain(GOLD, BLACK));
        }
    }

    fn draw_header(&self, fb: &mut FrameBuffer, state: &GameState, viewport: Viewport) {
        let style = CellStyle::plain(TEXT, HEADER_BG);
        fb.fill_rect(0, 0, viewport.width, 1, ' ', style);
        fb.put_str(1, 0, "MÖLKKY MASTER", style.bold());

        let right = match state.status() {
            GameStatus::Setup => "SETUP".to_string(),
            GameStatus::Playing => format!("ROUND {}", state.round()),
            GameStatus::Finished => format!("ROUND {} · FINAL", state.round()),
        };
        let len = right.chars().count() as u16;
        fb.put_str(viewport.width.saturating_sub(len + 1), 0, &right, style);
    }

    fn draw_setup(
        &self,
        fb: &mut FrameBuffer,
        state: &GameState,
        draft: Option<&SetupDraft>,
        viewport: Viewport,
    ) {
        let fallback;
        let draft = match draft {
            Some(draft) => draft,
            None => {
                fallback = SetupDraft::from_setup(&state.setup());
                &fallback
            }
        };
        let preview = draft.to_setup().sanitized();
        let label = CellStyle::plain(TEXT, BLACK).bold();
        let value = CellStyle::plain(TEXT, BLACK);
        let muted = CellStyle::plain(MUTED, BLACK);
        let focused = CellStyle::plain(BLACK, GOLD);

        let col_w = viewport.width / 2;
        let field_w = col_w.saturating_sub(12);
        let list_end = viewport.height.saturating_sub(4);
        for (i, id) in [TeamId::A, TeamId::B].into_iter().enumerate() {
            let x = 2 + col_w * i as u16;
            let mut y = 2;
            fb.put_str_max(
                x,
                y,
                &format!("TEAM {id}"),
                col_w - 3,
                CellStyle::plain(team_color(id), BLACK).bold(),
            );
            y += 1;

            for field in SetupField::ALL.into_iter().filter(|f| f.team() == id) {
                let active = draft.focus() == field;
                fb.put_str(x, y, &format!("{:<8}", field.label()), label);
                let text = draft.field(field);
                // Keep the tail (and the cursor) visible while typing.
                let shown: String = if active {
                    let skip = (text.chars().count() + 1).saturating_sub(field_w as usize);
                    text.chars().skip(skip).chain(['_']).collect()
                } else {
                    text.to_string()
                };
                let style = if active { focused } else { value };
                fb.fill_rect(x + 8, y, field_w, 1, ' ', style);
                fb.put_str_max(x + 8, y, &shown, field_w, style);
                y += 1;
            }
            y += 1;

            let team = preview.team(id);
            if let Some(captain) = team.captain() {
                fb.put_str_max(x, y, &format!("Captain: {captain}"), col_w - 3, muted);
            }
            y += 1;
            for (n, name) in team.roster.iter().enumerate() {
                if y >= list_end {
                    break;
                }
                fb.put_str_max(x, y, &format!("{}. {name}", n + 1), col_w - 3, value);
                y += 1;
            }
        }

        let y = list_end;
        let starter = preview.team(preview.starting_team);
        fb.put_str(2, y, "First to throw: ", label);
        fb.put_str(
            18,
            y,
            &format!("[{}] {}", preview.starting_team, starter.name),
            CellStyle::plain(team_color(preview.starting_team), BLACK).bold(),
        );
        fb.put_str(
            2,
            y + 1,
            "Tab next field · ←/→ starter · Enter start match · Esc quit",
            muted,
        );
    }

    /// Returns the panel height used.
    fn draw_scoreboard(&self, fb: &mut FrameBuffer, state: &GameState, viewport: Viewport) -> u16 {
        let panel_h = viewport
            .height
            .saturating_sub(2 + KEYPAD_H + 1)
            .clamp(6, 15);
        let panel_w = viewport.width / 2;
        for (i, id) in [TeamId::A, TeamId::B].into_iter().enumerate() {
            let active = state.is_playing() && state.current_turn() == id;
            let x = panel_w * i as u16;
            self.draw_team_panel(fb, state.team(id), active, x, 1, panel_w, panel_h + 1);
        }
        panel_h
    }

    #[allow(clippy::too_many_arguments)]
    fn draw_team_panel(
        &self,
        fb: &mut FrameBuffer,
        team: &Team,
        active: bool,
        x: u16,
        y: u16,
        w: u16,
        h: u16,
    ) {
        let bg = if active { ACTIVE_BG } else { PANEL_BG };
        let accent = team_color(team.id());
        let border = if active {
            CellStyle::plain(accent, bg).bold()
        } else {
            CellStyle::plain(MUTED, bg).dim()
        };
        let text = CellStyle::plain(TEXT, bg);
        let muted = CellStyle::plain(MUTED, bg);

        fb.fill_rect(x, y, w, h, ' ', text);
        fb.draw_box(x, y, w, h, border);

        let inner_x = x + 1;
        let inner_w = w.saturating_sub(2);
        let mut cy = y + 1;

        fb.put_str_centered(inner_x, cy, inner_w, team.name(), CellStyle::plain(accent, bg).bold());
        cy += 1;

        let thrower = team.current_thrower().unwrap_or("-");
        if active {
            fb.put_str_centered(inner_x, cy, inner_w, &format!("▶ {thrower}"), text.bold());
        } else {
            fb.put_str_centered(inner_x, cy, inner_w, &format!("next: {thrower}"), muted);
        }
        cy += 2;

        // Rows left for score, target, lamps and badge.
        let remaining = (y + h).saturating_sub(cy + 1);
        let score_style = if active {
            CellStyle::plain(accent, bg).bold()
        } else {
            muted
        };
        if self.big_digits && remaining >= BIG_DIGIT_H + 3 {
            self.draw_big_number(fb, inner_x, cy, inner_w, team.score(), score_style);
            cy += BIG_DIGIT_H;
        } else {
            fb.put_str_centered(inner_x, cy, inner_w, &team.score().to_string(), score_style);
            cy += 1;
        }

        fb.put_str_centered(inner_x, cy, inner_w, &format!("Target: {TARGET_SCORE}"), muted);
        cy += 1;

        let lamps: Vec<&str> = (1..=MAX_FAULTS)
            .map(|i| if i <= team.faults() { "●" } else { "○" })
            .collect();
        let lamp_style = if team.faults() > 0 {
            CellStyle::plain(FAULT_RED, bg).bold()
        } else {
            muted
        };
        fb.put_str_centered(inner_x, cy, inner_w, &lamps.join(" "), lamp_style);
        cy += 1;

        let badge = if team.is_eliminated() {
            Some(("ELIMINATED", CellStyle::plain(FAULT_RED, bg).bold()))
        } else if active && team.faults() + 1 == MAX_FAULTS {
            Some(("On the brink", CellStyle::plain(FAULT_RED, bg).bold()))
        } else if active {
            Some(("Throwing", CellStyle::plain(accent, bg)))
        } else {
            None
        };
        if let Some((label, style)) = badge {
            if cy < y + h - 1 {
                fb.put_str_centered(inner_x, cy, inner_w, label, style);
            }
        }
    }

    fn draw_big_number(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, n: u8, style: CellStyle) {
        let digits: Vec<usize> = n
            .to_string()
            .chars()
            .filter_map(|c| c.to_digit(10))
            .map(|d| d as usize)
            .collect();
        let total_w = digits.len() as u16 * 4 - 1;
        let start = x + w.saturating_sub(total_w) / 2;
        for (i, &d) in digits.iter().enumerate() {
            for (row, line) in BIG_DIGITS[d].iter().enumerate() {
                let gx = start + i as u16 * 4;
                for (col, ch) in line.chars().enumerate() {
                    if ch != ' ' {
                        fb.put_char(gx + col as u16, y + row as u16, ch, style);
                    }
                }
            }
        }
    }

    fn draw_keypad(&self, fb: &mut FrameBuffer, state: &GameState, host: &HostView, viewport: Viewport, y: u16) {
        let normal = CellStyle::plain(TEXT, BLACK);
        let muted = CellStyle::plain(MUTED, BLACK);
        let miss = CellStyle::plain(FAULT_RED, BLACK);
        let selected = CellStyle::plain(BLACK, GOLD).bold();

        let mut x = 1;
        for p in 0..=MAX_PINS {
            let label = format!("[{p}]");
            let style = if host.selected == Some(p) {
                selected
            } else if p == 0 {
                miss
            } else {
                normal
            };
            x = fb.put_str(x, y, &label, style) + 1;
        }

        let pending = match host.selected {
            Some(0) => "Selected: miss".to_string(),
            Some(p) => format!("Selected: {p}"),
            None => "Selected: -".to_string(),
        };
        fb.put_str(1, y + 1, &pending, normal.bold());

        let mut hx = 1;
        let hints: [(&str, bool); 6] = [
            ("Enter confirm", state.is_playing() && host.selected.is_some()),
            ("u undo", state.can_undo()),
            ("h history", true),
            ("p report", true),
            ("e export", true),
            ("r restart", true),
        ];
        for (hint, enabled) in hints {
            let style = if enabled { normal } else { muted.dim() };
            hx = fb.put_str(hx, y + 2, hint, style);
            hx = fb.put_str(hx, y + 2, " · ", muted);
        }
        fb.put_str(hx, y + 2, "q quit", normal);

        if y + 3 < viewport.height {
            let turn = state.current_team();
            let line = if state.is_playing() {
                format!("{} to throw: {}", turn.name(), turn.current_thrower().unwrap_or("-"))
            } else {
                String::new()
            };
            fb.put_str(1, y + 3, &line, muted);
        }
    }

    /// Takes the place of the keypad once the match is decided.
    fn draw_winner_banner(&self, fb: &mut FrameBuffer, state: &GameState, viewport: Viewport, y: u16) {
        let Some(winner) = state.winning_team() else {
            return;
        };
        let reason = state.win_reason().map(|r| r.as_str()).unwrap_or("match over");

        let w = viewport.width.saturating_sub(4).min(48);
        let h = 6;
        let x = (viewport.width - w) / 2;
        let y = y.min(viewport.height.saturating_sub(h + 1));
        let bg = Rgb::new(20, 20, 28);
        let border = CellStyle::plain(GOLD, bg).bold();

        fb.fill_rect(x, y, w, h, ' ', CellStyle::plain(TEXT, bg));
        fb.draw_box(x, y, w, h, border);
        fb.put_str_centered(x + 1, y + 1, w - 2, "WINNER", border);
        fb.put_str_centered(
            x + 1,
            y + 2,
            w - 2,
            winner.name(),
            CellStyle::plain(team_color(winner.id()), bg).bold(),
        );
        fb.put_str_centered(x + 1, y + 3, w - 2, reason, CellStyle::plain(TEXT, bg));
        fb.put_str_centered(
            x + 1,
            y + 4,
            w - 2,
            "u undo · p report · r new match",
            CellStyle::plain(MUTED, bg),
        );
    }

    /// Reverse-chronological throw list.
    fn draw_history(&self, fb: &mut FrameBuffer, state: &GameState, viewport: Viewport) {
        let (x, y, w, h) = overlay_rect(viewport);
        let bg = Rgb::new(20, 20, 28);
        let text = CellStyle::plain(TEXT, bg);
        let muted = CellStyle::plain(MUTED, bg);

        fb.fill_rect(x, y, w, h, ' ', text);
        fb.draw_box(x, y, w, h, text.bold());
        fb.put_str(x + 2, y, " HISTORY (newest first) · h close ", text.bold());

        let inner_w = w.saturating_sub(4);
        let header = format!("{:>3} {:>3}  {:<12} {:<12} {:>3} {:>5}  {}", "#", "Rnd", "Team", "Thrower", "Pts", "Total", "Note");
        fb.put_str_max(x + 2, y + 1, &header, inner_w, muted);

        if state.history().is_empty() {
            fb.put_str(x + 2, y + 3, "No throws yet", muted);
            return;
        }

        let mut cy = y + 2;
        for log in state.history().iter().rev() {
            if cy >= y + h - 1 {
                break;
            }
            let line = format!(
                "{:>3} {:>3}  {:<12} {:<12} {:>3} {:>5}  {}",
                log.id,
                log.round,
                truncate(&log.team_name, 12),
                truncate(&log.thrower_name, 12),
                log.points_label(),
                log.score_after,
                log.note.map(|n| n.as_str()).unwrap_or("")
            );
            let style = if log.is_miss() {
                CellStyle::plain(FAULT_RED, bg)
            } else {
                CellStyle::plain(team_color(log.team_id), bg)
            };
            fb.put_str_max(x + 2, cy, &line, inner_w, style);
            cy += 1;
        }
    }

    fn draw_report(&self, fb: &mut FrameBuffer, report: &str, viewport: Viewport) {
        let (x, y, w, h) = overlay_rect(viewport);
        let bg = Rgb::new(245, 245, 240);
        let ink = CellStyle::plain(Rgb::new(20, 20, 20), bg);

        fb.fill_rect(x, y, w, h, ' ', ink);
        fb.draw_box(x, y, w, h, ink);
        fb.put_str(x + 2, y, " REPORT · e export · p close ", ink.bold());

        for (i, line) in report.lines().enumerate() {
            let cy = y + 1 + i as u16;
            if cy >= y + h - 1 {
                break;
            }
            fb.put_str_max(x + 2, cy, line, w.saturating_sub(4), ink);
        }
    }
}

fn overlay_rect(viewport: Viewport) -> (u16, u16, u16, u16) {
    let x = 2.min(viewport.width / 10);
    let y = 1;
    let w = viewport.width - 2 * x;
    let h = viewport.height.saturating_sub(2);
    (x, y, w, h)
}

fn truncate(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::MatchSetup;

    fn started() -> GameState {
        GameState::start_match(&MatchSetup::default())
    }

    #[test]
    fn big_digits_are_three_wide() {
        for glyph in BIG_DIGITS {
            for row in glyph {
                assert_eq!(row.chars().count(), 3);
            }
        }
    }

    #[test]
    fn tiny_viewport_does_not_panic() {
        let fb = MatchView::default().render(&started(), &HostView::default(), Viewport::new(10, 3));
        assert_eq!(fb.row_text(0).trim_end(), "Too small");
    }

    #[test]
    fn overlay_rect_fits_viewport() {
        let (x, y, w, h) = overlay_rect(Viewport::new(80, 24));
        assert!(x + w <= 80);
        assert!(y + h <= 24);
    }

    #[test]
    fn selected_points_are_highlighted() {
        let host = HostView {
            selected: Some(12),
            ..HostView::default()
        };
        let fb = MatchView::default().render(&started(), &host, Viewport::new(80, 24));
        assert!(fb.to_text().contains("Selected: 12"));
    }
}
