//! Printable score sheet.

use std::fmt;

use crate::document::{MatchReport, ReportCell, TeamSummary};
use crate::types::TeamId;

const THROWER_W: usize = 14;
const POINTS_W: usize = 4;
const TOTAL_W: usize = 5;
/// Thrower + points + total, with the two separating spaces.
const COLUMN_W: usize = THROWER_W + 1 + POINTS_W + 1 + TOTAL_W;
const SIGNATURE_LINE: &str = "_________________";

/// Truncate or pad to exactly `width` characters.
fn fit(s: &str, width: usize) -> String {
    let truncated: String = s.chars().take(width).collect();
    format!("{truncated:<width$}")
}

fn cell_text(cell: Option<&ReportCell>) -> String {
    match cell {
        Some(c) => format!(
            "{} {:>pw$} {:>tw$}",
            fit(&c.thrower, THROWER_W),
            c.points,
            c.score_after,
            pw = POINTS_W,
            tw = TOTAL_W
        ),
        None => format!("{:<COLUMN_W$}", fit("-", THROWER_W)),
    }
}

fn summary_line(team: &TeamSummary) -> String {
    let mut line = format!("[{}] {}: {}", team.id, team.name, team.score);
    if team.winner {
        line.push_str("  WINNER");
    }
    if team.eliminated {
        line.push_str("  (eliminated)");
    }
    line
}

impl MatchReport {
    /// Render the report as a plain-text sheet with a signature block.
    pub fn render_text(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for MatchReport {
    fn fmt(&self, out: &mut fmt::Formatter<'_>) -> fmt::Result {
        let a = self.team(TeamId::A);
        let b = self.team(TeamId::B);

        writeln!(out, "MÖLKKY MATCH REPORT")?;
        writeln!(
            out,
            "Date: {}    Time: {}",
            self.generated_at.format("%Y-%m-%d"),
            self.generated_at.format("%H:%M:%S")
        )?;
        writeln!(out)?;

        for team in [a, b] {
            writeln!(out, "{}", summary_line(team))?;
            writeln!(out, "    Roster: {}", team.roster.join(", "))?;
        }
        match (&self.winner, &self.win_reason) {
            (Some(winner), Some(reason)) => writeln!(out, "Result: {winner} won ({reason})")?,
            _ => writeln!(out, "Result: in progress (round {})", self.round)?,
        }
        writeln!(out)?;

        writeln!(
            out,
            "Rnd | {} || {}",
            fit(&a.name, COLUMN_W),
            fit(&b.name, COLUMN_W)
        )?;
        let header = format!(
            "{} {:>pw$} {:>tw$}",
            fit("Thrower", THROWER_W),
            "Pts",
            "Total",
            pw = POINTS_W,
            tw = TOTAL_W
        );
        writeln!(out, "    | {header} || {header}")?;
        writeln!(out, "{}", "-".repeat(4 + 2 + COLUMN_W + 4 + COLUMN_W))?;

        if self.rows.is_empty() {
            writeln!(out, "No throws recorded yet")?;
        }
        for row in &self.rows {
            writeln!(
                out,
                "{:>3} | {} || {}",
                row.round,
                cell_text(row.a.as_ref()),
                cell_text(row.b.as_ref())
            )?;
        }
        writeln!(out)?;

        writeln!(out, "Referee signature: {SIGNATURE_LINE}")?;
        writeln!(
            out,
            "Captain confirmation: {SIGNATURE_LINE} / {SIGNATURE_LINE}"
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_pads_and_truncates() {
        assert_eq!(fit("Al", 4), "Al  ");
        assert_eq!(fit("Alexandra", 4), "Alex");
        assert_eq!(fit("Äiti", 3), "Äit");
    }

    #[test]
    fn test_empty_cell_is_column_wide() {
        assert_eq!(cell_text(None).chars().count(), COLUMN_W);
    }

    #[test]
    fn test_filled_cell_is_column_wide() {
        let cell = ReportCell {
            thrower: "Aino".to_string(),
            points: "X".to_string(),
            score_after: 12,
            note: None,
        };
        let text = cell_text(Some(&cell));
        assert_eq!(text.chars().count(), COLUMN_W);
        assert!(text.starts_with("Aino"));
        assert!(text.ends_with("   12"));
    }
}
