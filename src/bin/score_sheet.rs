//! Replay a list of throws and print the score sheet.
//!
//! ```text
//! score-sheet [--json] [--export] <throw|undo>...
//! ```
//!
//! Integers `0`..`12` are throws for whichever team is up, `undo` takes the
//! last one back. Teams and rosters come from the `MOLKKY_*` environment.

use anyhow::Result;
use chrono::Local;
use clap::Parser;
use tracing::{debug, info, warn};

use molkky_master::config::HostConfig;
use molkky_master::core::{GameState, MatchSetup};
use molkky_master::logging::{init_tracing, LogTarget};
use molkky_master::report::{MatchReport, ReportFormat};
use molkky_master::types::MAX_PINS;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Throw(u8),
    Undo,
}

fn parse_step(s: &str) -> Result<Step, String> {
    if s.eq_ignore_ascii_case("undo") {
        return Ok(Step::Undo);
    }
    match s.parse::<u8>() {
        Ok(points) if points <= MAX_PINS => Ok(Step::Throw(points)),
        _ => Err(format!("expected 0-{MAX_PINS} or `undo`, got `{s}`")),
    }
}

#[derive(Parser, Debug)]
#[command(name = "score-sheet", version)]
#[command(about = "Replay Mölkky throws and print the score sheet", long_about = None)]
struct Cli {
    /// Print the JSON document instead of the text sheet
    #[arg(long)]
    json: bool,

    /// Also write the sheet into MOLKKY_REPORT_DIR
    #[arg(long)]
    export: bool,

    /// Throws (0-12) for whichever team is up, or `undo`
    #[arg(value_name = "STEP", value_parser = parse_step)]
    steps: Vec<Step>,
}

impl Cli {
    fn format(&self) -> ReportFormat {
        if self.json {
            ReportFormat::Json
        } else {
            ReportFormat::Text
        }
    }
}

/// Rejected steps are skipped, the same way the scoreboard ignores them.
fn replay(setup: &MatchSetup, steps: &[Step]) -> GameState {
    let mut state = GameState::start_match(setup);
    for (i, step) in steps.iter().enumerate() {
        let next = match *step {
            Step::Throw(points) => state.apply_throw(points),
            Step::Undo => state.undo(),
        };
        match next {
            Ok(next) => state = next,
            Err(err) => warn!(step = i + 1, %err, "step skipped"),
        }
    }
    debug!(throws = state.history().len(), status = %state.status(), "replay finished");
    state
}

fn main() -> Result<()> {
    init_tracing(LogTarget::Stderr)?;
    let config = HostConfig::from_env();
    let cli = Cli::parse();

    let state = replay(&config.setup, &cli.steps);
    let report = MatchReport::from_state(&state, Local::now().naive_local());

    if cli.export {
        let path = report.write_to(&config.report_dir, cli.format())?;
        info!(path = %path.display(), "score sheet written");
    }
    println!("{}", report.render(cli.format())?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;
    use molkky_master::types::TeamId;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("score-sheet").chain(args.iter().copied()))
    }

    #[test]
    fn cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_throws_and_flags() {
        let cli = parse(&["--json", "7", "undo", "12"]).unwrap();
        assert_eq!(cli.format(), ReportFormat::Json);
        assert!(!cli.export);
        assert_eq!(cli.steps, vec![Step::Throw(7), Step::Undo, Step::Throw(12)]);
    }

    #[test]
    fn text_is_default_format() {
        let cli = parse(&["--export", "3"]).unwrap();
        assert_eq!(cli.format(), ReportFormat::Text);
        assert!(cli.export);
    }

    #[test]
    fn help_and_version_are_available() {
        assert_eq!(parse(&["--help"]).unwrap_err().kind(), ErrorKind::DisplayHelp);
        assert_eq!(parse(&["--version"]).unwrap_err().kind(), ErrorKind::DisplayVersion);
    }

    #[test]
    fn rejects_unknown_tokens() {
        assert!(parse(&["seven"]).is_err());
        assert!(parse(&["13"]).is_err());
        assert!(parse(&["--format=json"]).is_err());
    }

    #[test]
    fn replay_skips_rejected_steps() {
        let steps = [Step::Undo, Step::Throw(8), Step::Throw(4)];
        let state = replay(&MatchSetup::default(), &steps);
        assert_eq!(state.history().len(), 2);
        assert_eq!(state.team(TeamId::A).score(), 8);
        assert_eq!(state.team(TeamId::B).score(), 4);
    }
}
