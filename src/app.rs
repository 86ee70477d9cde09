//! Host state for the terminal scoreboard.
//!
//! Owns the single `GameState` and replaces it on every accepted transition.
//! Rejected engine calls leave the match untouched and only set a message.

use std::path::PathBuf;

use chrono::{Local, NaiveDateTime};
use tracing::{debug, info, warn};

use crate::config::HostConfig;
use crate::core::{GameState, MatchSetup, SetupDraft};
use crate::input::PointSelector;
use crate::report::{MatchReport, ReportFormat};
use crate::term::{HostView, Overlay};
use crate::types::{GameStatus, MatchAction};

pub struct App {
    draft: SetupDraft,
    state: GameState,
    selector: PointSelector,
    overlay: Overlay,
    report_text: Option<String>,
    message: Option<String>,
    /// Set by a first `Restart` while throws are recorded.
    restart_pending: bool,
    report_dir: PathBuf,
    clock: fn() -> NaiveDateTime,
}

fn local_now() -> NaiveDateTime {
    Local::now().naive_local()
}

impl App {
    pub fn new(config: &HostConfig) -> Self {
        Self {
            draft: SetupDraft::from_setup(&config.setup),
            state: GameState::new(),
            selector: PointSelector::new(),
            overlay: Overlay::None,
            report_text: None,
            message: None,
            restart_pending: false,
            report_dir: config.report_dir.clone(),
            clock: local_now,
        }
    }

    /// Replace the wall clock used for report timestamps.
    pub fn with_clock(mut self, clock: fn() -> NaiveDateTime) -> Self {
        self.clock = clock;
        self
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// The setup form as it would start a match now.
    pub fn setup(&self) -> MatchSetup {
        self.draft.to_setup()
    }

    pub fn draft(&self) -> &SetupDraft {
        &self.draft
    }

    pub fn restart_pending(&self) -> bool {
        self.restart_pending
    }

    pub fn selected(&self) -> Option<u8> {
        self.selector.selected()
    }

    pub fn overlay(&self) -> Overlay {
        self.overlay
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Borrowed view of host-side state for the renderer.
    pub fn host_view(&self) -> HostView<'_> {
        HostView {
            selected: self.selector.selected(),
            overlay: self.overlay,
            message: self.message.as_deref(),
            report_text: self.report_text.as_deref(),
            draft: Some(&self.draft),
        }
    }

    pub fn report(&self) -> MatchReport {
        MatchReport::from_state(&self.state, (self.clock)())
    }

    pub fn handle(&mut self, action: MatchAction) {
        self.message = None;
        let restart_armed = std::mem::take(&mut self.restart_pending);
        match self.state.status() {
            GameStatus::Setup => self.handle_setup(action),
            GameStatus::Playing | GameStatus::Finished => self.handle_match(action, restart_armed),
        }
        if self.overlay == Overlay::Report {
            self.report_text = Some(self.report().render_text());
        }
    }

    fn handle_setup(&mut self, action: MatchAction) {
        match action {
            MatchAction::ChooseStarter(id) => self.draft.choose_starter(id),
            MatchAction::TypeChar(ch) => self.draft.push_char(ch),
            MatchAction::DeleteChar => self.draft.pop_char(),
            MatchAction::NextField => self.draft.focus_next(),
            MatchAction::PrevField => self.draft.focus_prev(),
            MatchAction::Confirm => {
                self.state = GameState::start_match(&self.draft.to_setup());
                self.selector.clear();
                self.overlay = Overlay::None;
            }
            _ => {}
        }
    }

    fn handle_match(&mut self, action: MatchAction, restart_armed: bool) {
        if self.state.is_playing() && self.selector.handle(action) {
            return;
        }

        match action {
            MatchAction::Confirm => self.confirm(),
            MatchAction::Undo => match self.state.undo() {
                Ok(next) => {
                    self.state = next;
                    self.selector.clear();
                }
                Err(err) => self.reject(err),
            },
            MatchAction::ToggleHistory => self.toggle(Overlay::History),
            MatchAction::ToggleReport => self.toggle(Overlay::Report),
            MatchAction::ExportReport => self.export(),
            MatchAction::Restart if !restart_armed && self.state.can_undo() => {
                self.restart_pending = true;
                self.message = Some("Press r again to abandon the match".to_string());
            }
            MatchAction::Restart => {
                self.state = self.state.reset_to_setup();
                self.draft = SetupDraft::from_setup(&self.state.setup());
                self.selector.clear();
                self.overlay = Overlay::None;
                self.report_text = None;
            }
            _ => {}
        }
    }

    fn confirm(&mut self) {
        let Some(points) = self.selector.take() else {
            self.message = Some("Select points first".to_string());
            return;
        };
        match self.state.apply_throw(points) {
            Ok(next) => {
                self.state = next;
                if let Some(log) = self.state.last_log() {
                    if let Some(note) = log.note {
                        self.message = Some(format!("{}: {}", log.team_name, note.as_str()));
                    }
                }
            }
            Err(err) => self.reject(err),
        }
    }

    fn reject(&mut self, err: impl std::fmt::Display) {
        debug!(%err, "action rejected");
        self.message = Some(err.to_string());
    }

    fn toggle(&mut self, overlay: Overlay) {
        self.overlay = if self.overlay == overlay {
            Overlay::None
        } else {
            overlay
        };
        if self.overlay != Overlay::Report {
            self.report_text = None;
        }
    }

    fn export(&mut self) {
        let report = self.report();
        let mut written = Vec::new();
        for format in [ReportFormat::Text, ReportFormat::Json] {
            match report.write_to(&self.report_dir, format) {
                Ok(path) => written.push(path),
                Err(err) => {
                    warn!(%err, "report export failed");
                    self.message = Some(format!("Export failed: {err}"));
                    return;
                }
            }
        }
        info!(files = written.len(), "match report exported");
        self.message = written
            .first()
            .map(|p| format!("Report saved to {}", p.display()));
    }
}
