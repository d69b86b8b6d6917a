//! JSON Schemas of the produced payloads.

use std::collections::BTreeMap;

use schemars::schema::RootSchema;
use schemars::schema_for;

use crate::coach_summary::CoachSummary;
use crate::dashboard::MatchDashboard;
use crate::player_profile::PlayerMatchProfile;

/// Payload name -> schema.
pub fn output_schemas() -> BTreeMap<&'static str, RootSchema> {
    BTreeMap::from([
        ("coach_summary", schema_for!(CoachSummary)),
        ("player_match_profile", schema_for!(PlayerMatchProfile)),
        ("match_dashboard", schema_for!(MatchDashboard)),
    ])
}
