//! In-memory activity roster.
//!
//! The whole catalog sits behind one lock. Signup and unregister hold the
//! write lock across the check and the mutation, so both invariants
//! (no duplicate emails, roster never above capacity) hold between calls.

use std::collections::HashSet;

use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::models::{seed_catalog, Activity, Catalog};

pub mod error;

pub use error::{CatalogError, ErrorKind, RosterError};

pub struct ActivityStore {
    activities: RwLock<Catalog>,
}

impl ActivityStore {
    pub fn new(catalog: Catalog) -> Result<Self, CatalogError> {
        validate_catalog(&catalog)?;
        Ok(Self {
            activities: RwLock::new(catalog),
        })
    }

    pub fn seeded() -> Result<Self, CatalogError> {
        Self::new(seed_catalog())
    }

    /// Snapshot of every activity and its roster.
    pub async fn list_activities(&self) -> Catalog {
        self.activities.read().await.clone()
    }

    pub async fn activity(&self, name: &str) -> Option<Activity> {
        self.activities.read().await.get(name).cloned()
    }

    pub async fn signup(&self, activity_name: &str, email: &str) -> Result<(), RosterError> {
        let mut activities = self.activities.write().await;
        let activity = activities
            .get_mut(activity_name)
            .ok_or(RosterError::ActivityNotFound)?;

        if activity.is_registered(email) {
            return Err(RosterError::AlreadySignedUp);
        }
        if activity.is_full() {
            return Err(RosterError::ActivityFull);
        }

        activity.participants.push(email.to_string());
        info!(
            activity = %activity_name,
            email = %email,
            spots_left = activity.spots_left(),
            "Student signed up"
        );
        Ok(())
    }

    pub async fn unregister(&self, activity_name: &str, email: &str) -> Result<(), RosterError> {
        let mut activities = self.activities.write().await;
        let activity = activities
            .get_mut(activity_name)
            .ok_or(RosterError::ActivityNotFound)?;

        let position = activity
            .participants
            .iter()
            .position(|p| p == email)
            .ok_or(RosterError::NotRegistered)?;

        activity.participants.remove(position);
        info!(activity = %activity_name, email = %email, "Student unregistered");
        debug!(remaining = activity.participants.len(), "Roster updated");
        Ok(())
    }
}

fn validate_catalog(catalog: &Catalog) -> Result<(), CatalogError> {
    for (name, activity) in catalog {
        if activity.max_participants == 0 {
            return Err(CatalogError::ZeroCapacity {
                activity: name.clone(),
            });
        }
        if activity.participants.len() > activity.max_participants {
            return Err(CatalogError::OverCapacity {
                activity: name.clone(),
                participants: activity.participants.len(),
                max_participants: activity.max_participants,
            });
        }

        let mut seen = HashSet::new();
        if let Some(email) = activity.participants.iter().find(|p| !seen.insert(p.as_str())) {
            return Err(CatalogError::DuplicateParticipant {
                activity: name.clone(),
                email: email.clone(),
            });
        }
    }
    Ok(())
}
