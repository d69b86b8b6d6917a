//! # Event Store
//!
//! Read-only access to the records the analytics consume. Services take any
//! [`EventStore`]; [`InMemoryStore`] serves a [`Dataset`] loaded from JSON.
//!
//! ## Dataset format
//!
//! ```json
//! {
//!   "teams": [{"id": "...", "name": "..."}],
//!   "players": [{"id": "...", "first_name": "...", "last_name": "...", "primary_position": "MF"}],
//!   "matches": [{"id": "...", "kickoff_time": "2025-03-01T15:00:00Z", "status": "finished"}],
//!   "participants": [{"match_id": "...", "team_id": "...", "side": "home"}],
//!   "events": [{"id": "...", "match_id": "...", "team_id": "...", "event_type": "pass"}],
//!   "appearances": [{"player_id": "...", "match_id": "...", "team_id": "...", "minutes_played": 90}]
//! }
//! ```
//!
//! Every section is optional. Events keep file order as their creation order.

use std::collections::{BTreeSet, HashMap};
use std::path::Path;

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::error::{AnalyticsError, Result};
use crate::models::{Appearance, Event, Match, MatchParticipant, Player, Team};

// ============================================================================
// Collaborator seam
// ============================================================================

pub trait EventStore {
    fn match_by_id(&self, match_id: Uuid) -> Option<Match>;

    fn team(&self, team_id: Uuid) -> Option<Team>;

    /// Matches the team took part in, any order.
    fn team_matches(&self, team_id: Uuid) -> Vec<Match>;

    /// Events of the given matches in timeline order.
    fn events_for_matches(&self, match_ids: &[Uuid]) -> Vec<Event>;

    fn appearances_for_matches(&self, match_ids: &[Uuid]) -> Vec<Appearance>;

    fn appearance(&self, match_id: Uuid, player_id: Uuid) -> Option<Appearance>;

    fn player(&self, player_id: Uuid) -> Option<Player>;

    fn players(&self, player_ids: &[Uuid]) -> Vec<Player>;

    fn participants(&self, match_id: Uuid) -> Vec<MatchParticipant>;
}

// ============================================================================
// Dataset
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Dataset {
    pub teams: Vec<Team>,
    pub players: Vec<Player>,
    pub matches: Vec<Match>,
    pub participants: Vec<MatchParticipant>,
    pub events: Vec<Event>,
    pub appearances: Vec<Appearance>,
}

impl Dataset {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let dataset: Dataset = serde_json::from_str(json)?;
        dataset.validate_all()?;
        Ok(dataset)
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let dataset = Self::from_json_str(&content)?;
        tracing::debug!(
            path = %path.display(),
            matches = dataset.matches.len(),
            events = dataset.events.len(),
            appearances = dataset.appearances.len(),
            "dataset loaded"
        );
        Ok(dataset)
    }

    /// Reject out-of-range event fields and duplicate appearances.
    pub fn validate_all(&self) -> Result<()> {
        for event in &self.events {
            event.validate().map_err(|err| {
                AnalyticsError::InvalidInput(format!("event {}: {}", event.id, err))
            })?;
        }

        let mut seen = BTreeSet::new();
        for appearance in &self.appearances {
            if !seen.insert((appearance.player_id, appearance.match_id)) {
                return Err(AnalyticsError::InvalidInput(format!(
                    "duplicate appearance for player {} in match {}",
                    appearance.player_id, appearance.match_id
                )));
            }
        }

        Ok(())
    }
}

// ============================================================================
// In-memory store
// ============================================================================

pub struct InMemoryStore {
    dataset: Dataset,
    matches_by_id: HashMap<Uuid, usize>,
    players_by_id: HashMap<Uuid, usize>,
}

impl InMemoryStore {
    pub fn new(dataset: Dataset) -> Self {
        let matches_by_id = dataset.matches.iter().enumerate().map(|(i, m)| (m.id, i)).collect();
        let players_by_id = dataset.players.iter().enumerate().map(|(i, p)| (p.id, i)).collect();
        Self { dataset, matches_by_id, players_by_id }
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        Ok(Self::new(Dataset::from_path(path)?))
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }
}

impl EventStore for InMemoryStore {
    fn match_by_id(&self, match_id: Uuid) -> Option<Match> {
        self.matches_by_id.get(&match_id).map(|&i| self.dataset.matches[i].clone())
    }

    fn team(&self, team_id: Uuid) -> Option<Team> {
        self.dataset.teams.iter().find(|t| t.id == team_id).cloned()
    }

    fn team_matches(&self, team_id: Uuid) -> Vec<Match> {
        let ids: BTreeSet<Uuid> = self
            .dataset
            .participants
            .iter()
            .filter(|p| p.team_id == team_id)
            .map(|p| p.match_id)
            .collect();
        ids.into_iter().filter_map(|id| self.match_by_id(id)).collect()
    }

    fn events_for_matches(&self, match_ids: &[Uuid]) -> Vec<Event> {
        let mut events: Vec<Event> = self
            .dataset
            .events
            .iter()
            .filter(|e| match_ids.contains(&e.match_id))
            .cloned()
            .collect();
        // Stable: file order settles full ties.
        events.sort_by_key(|e| e.timeline_key());
        events
    }

    fn appearances_for_matches(&self, match_ids: &[Uuid]) -> Vec<Appearance> {
        self.dataset
            .appearances
            .iter()
            .filter(|a| match_ids.contains(&a.match_id))
            .cloned()
            .collect()
    }

    fn appearance(&self, match_id: Uuid, player_id: Uuid) -> Option<Appearance> {
        self.dataset
            .appearances
            .iter()
            .find(|a| a.match_id == match_id && a.player_id == player_id)
            .cloned()
    }

    fn player(&self, player_id: Uuid) -> Option<Player> {
        self.players_by_id.get(&player_id).map(|&i| self.dataset.players[i].clone())
    }

    fn players(&self, player_ids: &[Uuid]) -> Vec<Player> {
        player_ids.iter().filter_map(|id| self.player(*id)).collect()
    }

    fn participants(&self, match_id: Uuid) -> Vec<MatchParticipant> {
        self.dataset
            .participants
            .iter()
            .filter(|p| p.match_id == match_id)
            .cloned()
            .collect()
    }
}
