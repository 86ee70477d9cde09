//! Terminal scoreboard (default binary).
//!
//! Blocking crossterm event loop: every key press is one discrete action, so
//! there is no tick. Renders through the framebuffer renderer.

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use tracing::info;

use molkky_master::app::App;
use molkky_master::config::HostConfig;
use molkky_master::input::{map_key, should_quit_in, InputMode};
use molkky_master::logging::{init_tracing, LogTarget};
use molkky_master::term::{FrameBuffer, MatchView, TerminalRenderer, Viewport};

fn main() -> Result<()> {
    let config = HostConfig::from_env();
    init_tracing(LogTarget::file_or_off(config.log_path.clone()))?;
    info!(report_dir = %config.report_dir.display(), "starting scoreboard");

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, App::new(&config));

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, mut app: App) -> Result<()> {
    let view = MatchView::default();
    let mut fb = FrameBuffer::new(0, 0);

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(app.state(), &app.host_view(), Viewport::new(w, h), &mut fb);
        term.present(&fb)?;

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                let mode = InputMode::for_status(app.state().status());
                if should_quit_in(mode, key) {
                    info!("quit requested");
                    return Ok(());
                }
                if let Some(action) = map_key(mode, key) {
                    app.handle(action);
                }
            }
            Event::Resize(_, _) => term.invalidate(),
            _ => {}
        }
    }
}
