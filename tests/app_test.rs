//! Drives the scoreboard host the way the key loop does.

use chrono::{NaiveDate, NaiveDateTime};
use molkky_master::app::App;
use molkky_master::config::HostConfig;
use molkky_master::term::Overlay;
use molkky_master::types::{GameStatus, MatchAction, TeamId};

fn fixed_clock() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 10, 19)
        .unwrap()
        .and_hms_opt(9, 30, 0)
        .unwrap()
}

fn app_with_dir(dir: &std::path::Path) -> App {
    let config = HostConfig {
        report_dir: dir.to_path_buf(),
        ..HostConfig::default()
    };
    App::new(&config).with_clock(fixed_clock)
}

fn throw(app: &mut App, points: u8) {
    if points >= 10 {
        app.handle(MatchAction::Digit(1));
        app.handle(MatchAction::Digit(points - 10));
    } else {
        app.handle(MatchAction::Digit(points));
    }
    app.handle(MatchAction::Confirm);
}

#[test]
fn full_match_through_host() {
    let mut app = app_with_dir(&std::env::temp_dir());
    assert_eq!(app.state().status(), GameStatus::Setup);
    app.handle(MatchAction::Digit(5));
    assert_eq!(app.selected(), None);

    app.handle(MatchAction::Confirm);
    for p in [12, 1, 12, 1, 12, 1, 2, 1, 12] {
        throw(&mut app, p);
    }
    assert!(app.state().is_finished());
    assert_eq!(app.state().winner(), Some(TeamId::A));

    // Selection is ignored after the match is decided.
    app.handle(MatchAction::Digit(3));
    assert_eq!(app.selected(), None);

    app.handle(MatchAction::Undo);
    assert!(app.state().is_playing());
    assert_eq!(app.state().team_a().score(), 38);
}

#[test]
fn bust_sets_message() {
    let mut app = app_with_dir(&std::env::temp_dir());
    app.handle(MatchAction::Confirm);
    for p in [12, 1, 12, 1, 12, 1, 12, 1, 5] {
        throw(&mut app, p);
    }
    assert_eq!(app.state().team_a().score(), 25);
    assert_eq!(app.message(), Some("Team A: Over 50 -> 25"));
}

#[test]
fn history_toggle() {
    let mut app = app_with_dir(&std::env::temp_dir());
    app.handle(MatchAction::Confirm);
    app.handle(MatchAction::ToggleHistory);
    assert_eq!(app.overlay(), Overlay::History);
    app.handle(MatchAction::ToggleReport);
    assert_eq!(app.overlay(), Overlay::Report);
    app.handle(MatchAction::ToggleReport);
    assert_eq!(app.overlay(), Overlay::None);
}

#[test]
fn export_writes_text_and_json() {
    let dir = std::env::temp_dir().join(format!("molkky-app-test-{}", std::process::id()));
    let mut app = app_with_dir(&dir);
    app.handle(MatchAction::Confirm);
    throw(&mut app, 7);
    app.handle(MatchAction::ExportReport);

    let text = dir.join("molkky-report-20261019-093000.txt");
    let json = dir.join("molkky-report-20261019-093000.json");
    assert!(text.exists());
    assert!(json.exists());
    assert!(app.message().unwrap_or("").starts_with("Report saved to"));

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn typed_setup_starts_match_with_it() {
    let mut app = app_with_dir(&std::env::temp_dir());

    // Clear the default name and roster of team A, then type new ones.
    for _ in 0..20 {
        app.handle(MatchAction::DeleteChar);
    }
    for ch in "Owls".chars() {
        app.handle(MatchAction::TypeChar(ch));
    }
    app.handle(MatchAction::NextField);
    for _ in 0..40 {
        app.handle(MatchAction::DeleteChar);
    }
    for ch in "Aino, Eero,Sanna".chars() {
        app.handle(MatchAction::TypeChar(ch));
    }
    app.handle(MatchAction::ChooseStarter(TeamId::B));
    app.handle(MatchAction::Confirm);

    let state = app.state();
    assert!(state.is_playing());
    assert_eq!(state.team_a().name(), "Owls");
    assert_eq!(state.team_a().roster().to_vec(), vec!["Aino", "Eero", "Sanna"]);
    assert_eq!(state.team_b().name(), "Team B");
    assert_eq!(state.current_turn(), TeamId::B);
}

#[test]
fn single_restart_keeps_match() {
    let mut app = app_with_dir(&std::env::temp_dir());
    app.handle(MatchAction::Confirm);
    for p in [4, 6, 8, 2] {
        throw(&mut app, p);
    }
    app.handle(MatchAction::Restart);
    assert!(app.state().is_playing());
    assert_eq!(app.state().history().len(), 4);
    assert!(app.state().can_undo());

    app.handle(MatchAction::Restart);
    assert_eq!(app.state().status(), GameStatus::Setup);
    assert_eq!(app.setup().team_a.name, "Team A");
}
