//! Records supplied by the event store. Read-only to the analytics core.

pub mod event;
pub mod fixture;
pub mod roster;

pub use event::{sort_timeline, Event, EventType, Outcome};
pub use fixture::{Match, MatchParticipant, MatchStatus, Side};
pub use roster::{Appearance, Player, Position, Team};
