//! Runner movement log.
//!
//! Each play records one [`BaserunningEvent`] per runner that moves, the
//! batter included. The log is descriptive only: the state machine writes it
//! but never reads it back. Play text and box-score lines are rebuilt from it.

use serde::Serialize;

use crate::baserunning::Base;
use crate::player::PlayerId;

/// Where a moving runner started.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Origin {
    /// The batter, coming from the plate.
    Bench,
    /// First base.
    First,
    /// Second base.
    Second,
    /// Third base.
    Third,
}

/// Where a moving runner ended up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Destination {
    /// First base.
    First,
    /// Second base.
    Second,
    /// Third base.
    Third,
    /// Crossed the plate (a run).
    Home,
    /// Retired.
    Dugout,
}

impl From<Base> for Origin {
    fn from(base: Base) -> Self {
        match base {
            Base::First => Origin::First,
            Base::Second => Origin::Second,
            Base::Third => Origin::Third,
        }
    }
}

impl From<Base> for Destination {
    fn from(base: Base) -> Self {
        match base {
            Base::First => Destination::First,
            Base::Second => Destination::Second,
            Base::Third => Destination::Third,
        }
    }
}

/// One runner movement.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct BaserunningEvent {
    /// Who moved.
    pub runner: PlayerId,
    /// Where they started.
    pub from: Origin,
    /// Where they ended up.
    pub to: Destination,
}

impl BaserunningEvent {
    /// Whether this movement is a run.
    #[must_use]
    pub fn is_run(&self) -> bool {
        self.to == Destination::Home
    }

    /// Whether this movement is the runner being retired.
    #[must_use]
    pub fn is_out(&self) -> bool {
        self.to == Destination::Dugout
    }
}

/// Append-only accumulator of movements for a single transition.
#[derive(Debug, Clone, Default)]
pub struct AdvancementRecorder {
    events: Vec<BaserunningEvent>,
}

impl AdvancementRecorder {
    /// An empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a movement.
    pub fn record(&mut self, runner: PlayerId, from: Origin, to: Destination) {
        self.events.push(BaserunningEvent { runner, from, to });
    }

    /// Movements recorded so far, oldest first.
    #[must_use]
    pub fn events(&self) -> &[BaserunningEvent] {
        &self.events
    }

    /// Consume the recorder, yielding its movements.
    #[must_use]
    pub fn into_events(self) -> Vec<BaserunningEvent> {
        self.events
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recorder_preserves_order() {
        let mut recorder = AdvancementRecorder::new();
        recorder.record(PlayerId::from("a"), Origin::Third, Destination::Home);
        recorder.record(PlayerId::from("b"), Origin::Bench, Destination::First);

        let events = recorder.into_events();
        assert_eq!(events.len(), 2);
        assert!(events[0].is_run());
        assert_eq!(events[1].runner, PlayerId::from("b"));
        assert!(!events[1].is_out());
    }

    #[test]
    fn test_base_conversions() {
        assert_eq!(Origin::from(Base::Second), Origin::Second);
        assert_eq!(Destination::from(Base::Third), Destination::Third);
    }
}
