use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Activities keyed by their unique name.
pub type Catalog = BTreeMap<String, Activity>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    pub max_participants: usize,
    /// Student emails in signup order.
    pub participants: Vec<String>,
}

impl Activity {
    pub fn new(
        description: impl Into<String>,
        schedule: impl Into<String>,
        max_participants: usize,
    ) -> Self {
        Self {
            description: description.into(),
            schedule: schedule.into(),
            max_participants,
            participants: Vec::new(),
        }
    }

    pub fn with_participants<I, S>(mut self, participants: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.participants = participants.into_iter().map(Into::into).collect();
        self
    }

    pub fn is_registered(&self, email: &str) -> bool {
        self.participants.iter().any(|p| p == email)
    }

    pub fn is_full(&self) -> bool {
        self.participants.len() >= self.max_participants
    }

    pub fn spots_left(&self) -> usize {
        self.max_participants.saturating_sub(self.participants.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_without_name() {
        let activity = Activity::new("Board games", "Fridays", 4)
            .with_participants(["a@mergington.edu"]);

        let json = serde_json::to_value(&activity).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "description": "Board games",
                "schedule": "Fridays",
                "max_participants": 4,
                "participants": ["a@mergington.edu"],
            })
        );
    }

    #[test]
    fn test_capacity_helpers() {
        let activity = Activity::new("Duo", "Mondays", 2).with_participants(["a@x.edu"]);
        assert!(!activity.is_full());
        assert_eq!(activity.spots_left(), 1);
        assert!(activity.is_registered("a@x.edu"));
        assert!(!activity.is_registered("b@x.edu"));

        let full = activity.with_participants(["a@x.edu", "b@x.edu"]);
        assert!(full.is_full());
        assert_eq!(full.spots_left(), 0);
    }
}
