//! Fixed event lookup tables: phase, description and phase counters.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::models::EventType;

/// Coarse tactical context of an event.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Attack,
    Defence,
    Transition,
    Discipline,
    SetPiece,
    Other,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Attack => "attack",
            Phase::Defence => "defence",
            Phase::Transition => "transition",
            Phase::Discipline => "discipline",
            Phase::SetPiece => "set_piece",
            Phase::Other => "other",
        }
    }

    /// Named sub-counters tracked inside the phase.
    pub fn counters(&self) -> &'static [PhaseCounter] {
        match self {
            Phase::Attack => ATTACK_COUNTERS,
            Phase::Defence => DEFENCE_COUNTERS,
            Phase::Transition => TRANSITION_COUNTERS,
            Phase::Discipline => DISCIPLINE_COUNTERS,
            Phase::SetPiece => SET_PIECE_COUNTERS,
            Phase::Other => &[],
        }
    }
}

pub fn phase_of(event_type: EventType) -> Phase {
    match event_type {
        EventType::Pass | EventType::Shot | EventType::Goal | EventType::Assist => Phase::Attack,
        EventType::Tackle | EventType::Interception | EventType::Clearance => Phase::Defence,
        EventType::Turnover => Phase::Transition,
        EventType::Card | EventType::YellowCard | EventType::RedCard => Phase::Discipline,
        EventType::Corner | EventType::FreeKick | EventType::Penalty => Phase::SetPiece,
        _ => Phase::Other,
    }
}

pub const DEFAULT_DESCRIPTION: &str = "Match action";

pub fn description_of(event_type: EventType) -> &'static str {
    match event_type {
        EventType::Pass => "Short pass in build-up phase",
        EventType::Shot => "Shot attempt",
        EventType::Goal => "Goal scored",
        EventType::Assist => "Assist provided",
        EventType::Tackle => "Defensive tackle",
        EventType::Interception => "Interception",
        EventType::YellowCard => "Yellow card received",
        EventType::RedCard => "Red card received",
        _ => DEFAULT_DESCRIPTION,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseCounter {
    pub name: &'static str,
    pub event_types: &'static [EventType],
}

impl PhaseCounter {
    pub fn matches(&self, event_type: EventType) -> bool {
        self.event_types.contains(&event_type)
    }
}

const ATTACK_COUNTERS: &[PhaseCounter] = &[
    PhaseCounter { name: "passes", event_types: &[EventType::Pass] },
    PhaseCounter { name: "shots", event_types: &[EventType::Shot] },
    PhaseCounter { name: "goals", event_types: &[EventType::Goal] },
    PhaseCounter { name: "assists", event_types: &[EventType::Assist] },
];

const DEFENCE_COUNTERS: &[PhaseCounter] = &[
    PhaseCounter { name: "tackles", event_types: &[EventType::Tackle] },
    PhaseCounter { name: "interceptions", event_types: &[EventType::Interception] },
    PhaseCounter { name: "clearances", event_types: &[EventType::Clearance] },
];

const TRANSITION_COUNTERS: &[PhaseCounter] =
    &[PhaseCounter { name: "turnovers", event_types: &[EventType::Turnover] }];

const DISCIPLINE_COUNTERS: &[PhaseCounter] = &[PhaseCounter {
    name: "cards",
    event_types: &[EventType::YellowCard, EventType::RedCard, EventType::Card],
}];

const SET_PIECE_COUNTERS: &[PhaseCounter] = &[PhaseCounter {
    name: "set_piece_actions",
    event_types: &[EventType::Corner, EventType::FreeKick, EventType::Penalty],
}];

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: &[EventType] = &[
        EventType::Pass,
        EventType::Shot,
        EventType::Goal,
        EventType::Assist,
        EventType::Turnover,
        EventType::Recovery,
        EventType::Tackle,
        EventType::Interception,
        EventType::Clearance,
        EventType::Duel,
        EventType::Foul,
        EventType::Pressure,
        EventType::Card,
        EventType::YellowCard,
        EventType::RedCard,
        EventType::Corner,
        EventType::FreeKick,
        EventType::Penalty,
        EventType::Other,
    ];

    #[test]
    fn test_phase_table() {
        assert_eq!(phase_of(EventType::Goal), Phase::Attack);
        assert_eq!(phase_of(EventType::Clearance), Phase::Defence);
        assert_eq!(phase_of(EventType::Turnover), Phase::Transition);
        assert_eq!(phase_of(EventType::RedCard), Phase::Discipline);
        assert_eq!(phase_of(EventType::Card), Phase::Discipline);
        assert_eq!(phase_of(EventType::FreeKick), Phase::SetPiece);
        assert_eq!(phase_of(EventType::Duel), Phase::Other);
        assert_eq!(phase_of(EventType::Foul), Phase::Other);
    }

    #[test]
    fn test_descriptions_default() {
        assert_eq!(description_of(EventType::Pass), "Short pass in build-up phase");
        assert_eq!(description_of(EventType::Corner), DEFAULT_DESCRIPTION);
        assert_eq!(description_of(EventType::Other), "Match action");
    }

    #[test]
    fn test_every_counter_type_belongs_to_its_phase() {
        for event_type in ALL {
            let phase = phase_of(*event_type);
            for counter in phase.counters() {
                for counted in counter.event_types {
                    assert_eq!(phase_of(*counted), phase, "{} counted outside its phase", counted);
                }
            }
        }
    }

    #[test]
    fn test_other_has_no_counters() {
        assert!(Phase::Other.counters().is_empty());
        assert_eq!(Phase::SetPiece.as_str(), "set_piece");
        assert_eq!(serde_json::to_string(&Phase::SetPiece).unwrap(), "\"set_piece\"");
    }
}
