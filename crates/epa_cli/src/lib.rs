//! Report runner behind the `epa` binary.
//!
//! Loads a JSON dataset into an [`InMemoryStore`], resolves configuration
//! and locale, then renders one report as JSON.

use std::path::Path;

use anyhow::{Context, Result};
use epa_core::{
    get_coach_summary, get_match_dashboard, get_player_match_profile, AnalyticsConfig,
    AnalyticsError, InMemoryStore, Localizer,
};
use uuid::Uuid;

/// Everything a report needs.
pub struct ReportContext {
    pub store: InMemoryStore,
    pub config: AnalyticsConfig,
    pub localizer: Localizer,
}

impl ReportContext {
    /// Config file wins over environment; an explicit locale wins over both.
    pub fn load(dataset: &Path, config: Option<&Path>, locale: Option<&str>) -> Result<Self> {
        let store = InMemoryStore::from_path(dataset)
            .with_context(|| format!("Failed to load dataset {}", dataset.display()))?;

        let mut config = match config {
            Some(path) => AnalyticsConfig::from_yaml_file(path)
                .with_context(|| format!("Failed to load config {}", path.display()))?,
            None => AnalyticsConfig::from_env_or_default(),
        };
        if let Some(locale) = locale {
            config.locale = locale.to_string();
        }

        let localizer = Localizer::for_locale(&config.locale)
            .with_context(|| format!("Failed to set up locale {}", config.locale))?;

        tracing::debug!(locale = localizer.locale(), "report context ready");

        Ok(Self { store, config, localizer })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Report {
    CoachSummary { team_id: Uuid, match_ids: Vec<Uuid> },
    PlayerProfile { match_id: Uuid, player_id: Uuid },
    MatchDashboard { match_id: Uuid },
}

pub fn run_report(ctx: &ReportContext, report: &Report) -> Result<serde_json::Value> {
    let value = match report {
        Report::CoachSummary { team_id, match_ids } => {
            let ids = (!match_ids.is_empty()).then_some(match_ids.as_slice());
            let summary = get_coach_summary(&ctx.store, *team_id, ids, &ctx.config, &ctx.localizer)?;
            serde_json::to_value(summary)?
        }
        Report::PlayerProfile { match_id, player_id } => {
            let profile = get_player_match_profile(&ctx.store, *match_id, *player_id, &ctx.localizer)?;
            serde_json::to_value(profile)?
        }
        Report::MatchDashboard { match_id } => {
            let dashboard = get_match_dashboard(&ctx.store, *match_id, &ctx.config, &ctx.localizer)?;
            serde_json::to_value(dashboard)?
        }
    };
    Ok(value)
}

pub fn schemas_json() -> Result<serde_json::Value> {
    Ok(serde_json::to_value(epa_core::schema::output_schemas())?)
}

/// Process exit status for a failed run.
///
/// - `1`: invalid data or configuration, or a non-analytics failure
/// - `3`: unknown ids or missing files; retrying with other arguments may work
pub fn exit_code(err: &anyhow::Error) -> u8 {
    let recoverable = err
        .chain()
        .find_map(|cause| cause.downcast_ref::<AnalyticsError>())
        .is_some_and(AnalyticsError::is_recoverable);

    if recoverable {
        3
    } else {
        1
    }
}

/// Pretty JSON to `out`, or stdout when `None`.
pub fn write_json(value: &serde_json::Value, out: Option<&Path>) -> Result<()> {
    let rendered = serde_json::to_string_pretty(value)?;
    match out {
        Some(path) => std::fs::write(path, rendered)
            .with_context(|| format!("Failed to write {}", path.display()))?,
        None => println!("{}", rendered),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn dataset_file(team_id: Uuid, match_id: Uuid) -> tempfile::NamedTempFile {
        let json = serde_json::json!({
            "teams": [{"id": team_id, "name": "Home"}],
            "matches": [{"id": match_id, "kickoff_time": "2025-03-01T15:00:00Z", "status": "finished"}],
            "participants": [{"match_id": match_id, "team_id": team_id, "side": "home"}],
            "events": [
                {"id": Uuid::new_v4(), "match_id": match_id, "team_id": team_id, "event_type": "goal"},
                {"id": Uuid::new_v4(), "match_id": match_id, "team_id": team_id, "event_type": "pass", "x": 55.0}
            ]
        });
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{}", json).unwrap();
        file
    }

    #[test]
    fn test_coach_summary_report() {
        let (team_id, match_id) = (Uuid::new_v4(), Uuid::new_v4());
        let file = dataset_file(team_id, match_id);
        let ctx = ReportContext::load(file.path(), None, Some("en-US")).unwrap();

        let value = run_report(&ctx, &Report::CoachSummary { team_id, match_ids: vec![] }).unwrap();
        assert_eq!(value["meta"]["matches_count"], 1);
        assert_eq!(value["snapshot"]["form"], serde_json::json!(["W"]));
    }

    #[test]
    fn test_dashboard_report_and_output_file() {
        let (team_id, match_id) = (Uuid::new_v4(), Uuid::new_v4());
        let file = dataset_file(team_id, match_id);
        let ctx = ReportContext::load(file.path(), None, None).unwrap();

        let value = run_report(&ctx, &Report::MatchDashboard { match_id }).unwrap();
        assert_eq!(value["teams"][team_id.to_string()]["possession"], 100.0);

        let out = tempfile::NamedTempFile::new().unwrap();
        write_json(&value, Some(out.path())).unwrap();
        let written: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(out.path()).unwrap()).unwrap();
        assert_eq!(written, value);
    }

    #[test]
    fn test_missing_player_is_an_error() {
        let (team_id, match_id) = (Uuid::new_v4(), Uuid::new_v4());
        let file = dataset_file(team_id, match_id);
        let ctx = ReportContext::load(file.path(), None, None).unwrap();

        let report = Report::PlayerProfile { match_id, player_id: Uuid::new_v4() };
        let err = run_report(&ctx, &report).unwrap_err();
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn test_exit_codes() {
        let (team_id, match_id) = (Uuid::new_v4(), Uuid::new_v4());
        let file = dataset_file(team_id, match_id);
        let ctx = ReportContext::load(file.path(), None, None).unwrap();

        let unknown_match = Report::MatchDashboard { match_id: Uuid::new_v4() };
        let err = run_report(&ctx, &unknown_match).unwrap_err();
        assert_eq!(exit_code(&err), 3, "unknown id");

        let mut bad = tempfile::NamedTempFile::new().unwrap();
        let json = serde_json::json!({
            "events": [{"id": Uuid::new_v4(), "match_id": match_id, "team_id": team_id,
                        "event_type": "pass", "x": 150.0}]
        });
        write!(bad, "{}", json).unwrap();
        let err = ReportContext::load(bad.path(), None, None).err().unwrap();
        assert_eq!(exit_code(&err), 1, "invalid dataset");

        assert_eq!(exit_code(&anyhow::anyhow!("plain failure")), 1);
    }

    #[test]
    fn test_missing_dataset_has_context() {
        let err = ReportContext::load(Path::new("/nonexistent/dataset.json"), None, None)
            .err()
            .unwrap();
        assert!(err.to_string().contains("Failed to load dataset"));
    }

    #[test]
    fn test_schemas_json() {
        let value = schemas_json().unwrap();
        assert!(value.get("coach_summary").is_some());
        assert!(value.get("player_match_profile").is_some());
    }
}
