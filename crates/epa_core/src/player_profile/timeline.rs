use schemars::JsonSchema;
use serde::Serialize;

use crate::models::{sort_timeline, Event, EventType};
use crate::player_profile::tables::{description_of, phase_of, Phase};

const MS_PER_MINUTE: u64 = 60_000;

#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct TimelineEntry {
    /// 1-indexed match minute, `None` without a timestamp
    pub minute: Option<u32>,
    #[serde(rename = "type")]
    pub event_type: EventType,
    pub phase: Phase,
    pub description: String,
}

impl TimelineEntry {
    pub fn from_event(event: &Event) -> Self {
        Self {
            minute: event.timestamp_ms.map(|ms| (ms / MS_PER_MINUTE) as u32 + 1),
            event_type: event.event_type,
            phase: phase_of(event.event_type),
            description: description_of(event.event_type).to_string(),
        }
    }
}

/// Timeline of the player's events, ordered by timestamp then creation order.
pub fn build_timeline(events: &[&Event]) -> Vec<TimelineEntry> {
    let mut ordered = events.to_vec();
    sort_timeline(&mut ordered);
    ordered.into_iter().map(TimelineEntry::from_event).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_minute_is_one_indexed() {
        let (m, t) = (Uuid::new_v4(), Uuid::new_v4());
        assert_eq!(TimelineEntry::from_event(&Event::new(m, t, EventType::Pass).at_ms(0)).minute, Some(1));
        assert_eq!(
            TimelineEntry::from_event(&Event::new(m, t, EventType::Pass).at_ms(59_999)).minute,
            Some(1)
        );
        assert_eq!(
            TimelineEntry::from_event(&Event::new(m, t, EventType::Pass).at_ms(60_000)).minute,
            Some(2)
        );
        assert_eq!(TimelineEntry::from_event(&Event::new(m, t, EventType::Pass)).minute, None);
    }

    #[test]
    fn test_timeline_order_and_tags() {
        let (m, t) = (Uuid::new_v4(), Uuid::new_v4());
        let events = vec![
            Event::new(m, t, EventType::YellowCard).at_ms(3_600_000),
            Event::new(m, t, EventType::Shot).at_ms(120_000).with_sequence(5),
            Event::new(m, t, EventType::Pass).at_ms(120_000).with_sequence(4),
            Event::new(m, t, EventType::Duel),
        ];
        let refs: Vec<&Event> = events.iter().collect();

        let timeline = build_timeline(&refs);
        let types: Vec<EventType> = timeline.iter().map(|e| e.event_type).collect();
        assert_eq!(
            types,
            vec![EventType::Pass, EventType::Shot, EventType::YellowCard, EventType::Duel]
        );
        assert_eq!(timeline[2].minute, Some(61));
        assert_eq!(timeline[2].phase, Phase::Discipline);
        assert_eq!(timeline[3].description, "Match action");

        let json = serde_json::to_value(&timeline[0]).unwrap();
        assert_eq!(json["type"], "pass");
        assert_eq!(json["phase"], "attack");
        assert_eq!(json["minute"], 3);
    }
}
