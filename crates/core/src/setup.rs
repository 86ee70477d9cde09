//! Match setup: team names, rosters and the starting team.
//!
//! Raw roster text comes from the host (one name per line, or comma separated).
//! Everything here sanitizes toward a playable match: blank names and empty
//! rosters are replaced by placeholders instead of being rejected.

use crate::types::TeamId;

/// Split raw roster text into thrower names.
///
/// Names are separated by newlines or commas; surrounding whitespace is
/// trimmed and blank entries are dropped.
///
/// ```
/// use molkky_core::setup::parse_roster;
///
/// assert_eq!(parse_roster("Aino\n  Eero ,\n\nMikko"), vec!["Aino", "Eero", "Mikko"]);
/// assert!(parse_roster(" \n , ").is_empty());
/// ```
pub fn parse_roster(text: &str) -> Vec<String> {
    text.split(['\n', ','])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Name shown when a team name is left blank.
pub fn placeholder_team_name(id: TeamId) -> String {
    format!("Team {id}")
}

/// Single thrower used when a roster is empty.
pub fn placeholder_captain(id: TeamId) -> String {
    format!("Captain {id}")
}

/// One team's setup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamSetup {
    pub name: String,
    pub roster: Vec<String>,
}

impl TeamSetup {
    pub fn new(name: impl Into<String>, roster: Vec<String>) -> Self {
        Self {
            name: name.into(),
            roster,
        }
    }

    /// First roster entry, if any.
    pub fn captain(&self) -> Option<&str> {
        self.roster.first().map(String::as_str)
    }

    /// Trimmed copy with placeholders for a blank name or an empty roster.
    pub fn sanitized(&self, id: TeamId) -> Self {
        let name = self.name.trim();
        let name = if name.is_empty() {
            placeholder_team_name(id)
        } else {
            name.to_string()
        };

        let mut roster: Vec<String> = self
            .roster
            .iter()
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();
        if roster.is_empty() {
            roster.push(placeholder_captain(id));
        }

        Self { name, roster }
    }
}

/// Everything needed to start a match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchSetup {
    pub team_a: TeamSetup,
    pub team_b: TeamSetup,
    pub starting_team: TeamId,
}

impl Default for MatchSetup {
    fn default() -> Self {
        Self {
            team_a: TeamSetup::new(
                "Team A",
                vec!["Captain A".to_string(), "Player 2".to_string()],
            ),
            team_b: TeamSetup::new(
                "Team B",
                vec!["Captain B".to_string(), "Player 4".to_string()],
            ),
            starting_team: TeamId::A,
        }
    }
}

impl MatchSetup {
    pub fn new(
        name_a: impl Into<String>,
        roster_a: Vec<String>,
        name_b: impl Into<String>,
        roster_b: Vec<String>,
        starting_team: TeamId,
    ) -> Self {
        Self {
            team_a: TeamSetup::new(name_a, roster_a),
            team_b: TeamSetup::new(name_b, roster_b),
            starting_team,
        }
    }

    /// Build a setup from raw roster text (see [`parse_roster`]).
    pub fn from_raw(
        name_a: &str,
        roster_a: &str,
        name_b: &str,
        roster_b: &str,
        starting_team: TeamId,
    ) -> Self {
        Self::new(
            name_a,
            parse_roster(roster_a),
            name_b,
            parse_roster(roster_b),
            starting_team,
        )
    }

    pub fn team(&self, id: TeamId) -> &TeamSetup {
        match id {
            TeamId::A => &self.team_a,
            TeamId::B => &self.team_b,
        }
    }

    pub fn choose_starter(&mut self, id: TeamId) {
        self.starting_team = id;
    }

    pub fn sanitized(&self) -> Self {
        Self {
            team_a: self.team_a.sanitized(TeamId::A),
            team_b: self.team_b.sanitized(TeamId::B),
            starting_team: self.starting_team,
        }
    }
}

/// Longest team name accepted by the setup form.
pub const MAX_NAME_LEN: usize = 24;

/// Editable field on the setup form, in focus order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SetupField {
    #[default]
    NameA,
    RosterA,
    NameB,
    RosterB,
}

impl SetupField {
    pub const ALL: [SetupField; 4] = [
        SetupField::NameA,
        SetupField::RosterA,
        SetupField::NameB,
        SetupField::RosterB,
    ];

    pub fn team(self) -> TeamId {
        match self {
            SetupField::NameA | SetupField::RosterA => TeamId::A,
            SetupField::NameB | SetupField::RosterB => TeamId::B,
        }
    }

    pub fn is_roster(self) -> bool {
        matches!(self, SetupField::RosterA | SetupField::RosterB)
    }

    pub fn label(self) -> &'static str {
        if self.is_roster() {
            "Roster"
        } else {
            "Name"
        }
    }

    pub fn next(self) -> Self {
        let i = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Self::ALL[(i + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        let i = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Self::ALL[(i + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Raw text of the setup form while it is being edited.
///
/// Rosters are kept as typed (comma separated) and only parsed by
/// [`SetupDraft::to_setup`], so a half-typed name is never dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetupDraft {
    name_a: String,
    roster_a: String,
    name_b: String,
    roster_b: String,
    starting_team: TeamId,
    focus: SetupField,
}

impl Default for SetupDraft {
    fn default() -> Self {
        Self::from_setup(&MatchSetup::default())
    }
}

impl SetupDraft {
    pub fn from_setup(setup: &MatchSetup) -> Self {
        Self {
            name_a: setup.team_a.name.clone(),
            roster_a: setup.team_a.roster.join(", "),
            name_b: setup.team_b.name.clone(),
            roster_b: setup.team_b.roster.join(", "),
            starting_team: setup.starting_team,
            focus: SetupField::default(),
        }
    }

    pub fn focus(&self) -> SetupField {
        self.focus
    }

    pub fn starting_team(&self) -> TeamId {
        self.starting_team
    }

    pub fn field(&self, field: SetupField) -> &str {
        match field {
            SetupField::NameA => &self.name_a,
            SetupField::RosterA => &self.roster_a,
            SetupField::NameB => &self.name_b,
            SetupField::RosterB => &self.roster_b,
        }
    }

    fn field_mut(&mut self, field: SetupField) -> &mut String {
        match field {
            SetupField::NameA => &mut self.name_a,
            SetupField::RosterA => &mut self.roster_a,
            SetupField::NameB => &mut self.name_b,
            SetupField::RosterB => &mut self.roster_b,
        }
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    /// Append to the focused field. Control characters are ignored and names
    /// stop at [`MAX_NAME_LEN`].
    pub fn push_char(&mut self, ch: char) {
        if ch.is_control() {
            return;
        }
        let focus = self.focus;
        let text = self.field_mut(focus);
        if !focus.is_roster() && text.chars().count() >= MAX_NAME_LEN {
            return;
        }
        text.push(ch);
    }

    pub fn pop_char(&mut self) {
        let focus = self.focus;
        self.field_mut(focus).pop();
    }

    pub fn choose_starter(&mut self, id: TeamId) {
        self.starting_team = id;
    }

    /// Parse the form. Not sanitized; `start_match` does that.
    pub fn to_setup(&self) -> MatchSetup {
        MatchSetup::from_raw(
            &self.name_a,
            &self.roster_a,
            &self.name_b,
            &self.roster_b,
            self.starting_team,
        )
    }
}
