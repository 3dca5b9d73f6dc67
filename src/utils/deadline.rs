//! Wall-clock deadline handed to move selection.
//!
//! Advisory only: generation and move application never consult it.

use chrono::{DateTime, TimeDelta, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deadline {
    at: DateTime<Utc>,
}

impl Deadline {
    pub fn at(at: DateTime<Utc>) -> Self {
        Self { at }
    }

    /// A deadline `budget` from now.
    pub fn after(budget: TimeDelta) -> Self {
        Self::at(Utc::now() + budget)
    }

    /// Time left before the deadline; negative once it has passed.
    pub fn time_until(&self) -> TimeDelta {
        self.at.signed_duration_since(Utc::now())
    }

    pub fn is_expired(&self) -> bool {
        self.time_until() <= TimeDelta::zero()
    }
}

#[cfg(test)]
mod tests {
    use super::Deadline;
    use chrono::{TimeDelta, Utc};

    #[test]
    fn future_deadline_has_time_left() {
        let deadline = Deadline::after(TimeDelta::seconds(60));
        let left = deadline.time_until();
        assert!(left > TimeDelta::seconds(50));
        assert!(left <= TimeDelta::seconds(60));
        assert!(!deadline.is_expired());
    }

    #[test]
    fn past_deadline_is_negative_and_expired() {
        let deadline = Deadline::at(Utc::now() - TimeDelta::seconds(5));
        assert!(deadline.time_until() < TimeDelta::zero());
        assert!(deadline.is_expired());
    }
}
