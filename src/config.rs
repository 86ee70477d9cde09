//! Host configuration read from the environment.

use std::env;
use std::path::PathBuf;

use crate::core::MatchSetup;
use crate::types::TeamId;

/// Settings shared by the terminal app and the score sheet CLI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    /// Initial setup; rosters are comma or newline separated in the env.
    pub setup: MatchSetup,
    pub report_dir: PathBuf,
    pub log_path: Option<PathBuf>,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            setup: MatchSetup::default(),
            report_dir: PathBuf::from("."),
            log_path: None,
        }
    }
}

impl HostConfig {
    /// Create from `MOLKKY_*` environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`HostConfig::from_env`] with an explicit variable source.
    /// Missing or unparseable values fall back to the defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        let defaults = MatchSetup::default();
        let starting_team = get("MOLKKY_STARTING_TEAM")
            .and_then(|s| TeamId::from_str(&s))
            .unwrap_or(defaults.starting_team);

        let team = |name_key: &str, roster_key: &str, id: TeamId| {
            let fallback = defaults.team(id);
            let name = get(name_key).unwrap_or_else(|| fallback.name.clone());
            let roster = get(roster_key)
                .map(|s| crate::core::parse_roster(&s))
                .filter(|r| !r.is_empty())
                .unwrap_or_else(|| fallback.roster.clone());
            (name, roster)
        };
        let (name_a, roster_a) = team("MOLKKY_TEAM_A", "MOLKKY_ROSTER_A", TeamId::A);
        let (name_b, roster_b) = team("MOLKKY_TEAM_B", "MOLKKY_ROSTER_B", TeamId::B);

        let report_dir = get("MOLKKY_REPORT_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."));
        let log_path = get("MOLKKY_LOG_PATH").map(PathBuf::from);

        Self {
            setup: MatchSetup::new(name_a, roster_a, name_b, roster_b, starting_team),
            report_dir,
            log_path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> HostConfig {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        HostConfig::from_lookup(|k| map.get(k).cloned())
    }

    #[test]
    fn empty_environment_gives_defaults() {
        assert_eq!(config(&[]), HostConfig::default());
    }

    #[test]
    fn teams_and_rosters_are_read() {
        let cfg = config(&[
            ("MOLKKY_TEAM_A", "Pine Cones"),
            ("MOLKKY_ROSTER_A", "Aino, Eero\nSanna"),
            ("MOLKKY_TEAM_B", "Birches"),
            ("MOLKKY_ROSTER_B", "Kalle"),
            ("MOLKKY_STARTING_TEAM", "b"),
        ]);
        assert_eq!(cfg.setup.team_a.name, "Pine Cones");
        assert_eq!(cfg.setup.team_a.roster, vec!["Aino", "Eero", "Sanna"]);
        assert_eq!(cfg.setup.team_b.roster, vec!["Kalle"]);
        assert_eq!(cfg.setup.starting_team, TeamId::B);
    }

    #[test]
    fn bad_values_fall_back() {
        let cfg = config(&[
            ("MOLKKY_STARTING_TEAM", "C"),
            ("MOLKKY_ROSTER_A", " , ,"),
            ("MOLKKY_REPORT_DIR", "   "),
            ("MOLKKY_LOG_PATH", ""),
        ]);
        assert_eq!(cfg.setup.starting_team, TeamId::A);
        assert_eq!(cfg.setup.team_a.roster, MatchSetup::default().team_a.roster);
        assert_eq!(cfg.report_dir, PathBuf::from("."));
        assert_eq!(cfg.log_path, None);
    }

    #[test]
    fn paths_are_read() {
        let cfg = config(&[
            ("MOLKKY_REPORT_DIR", "/tmp/reports"),
            ("MOLKKY_LOG_PATH", "/tmp/molkky.log"),
        ]);
        assert_eq!(cfg.report_dir, PathBuf::from("/tmp/reports"));
        assert_eq!(cfg.log_path, Some(PathBuf::from("/tmp/molkky.log")));
    }
}
