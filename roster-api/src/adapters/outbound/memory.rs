//! In-memory roster storage.
//!
//! State lives for the lifetime of the process and is rebuilt from the seed
//! activities on every start.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::{ports::outbound::RosterRepository, seed_activities, Roster, RosterError};

#[derive(Clone, Default)]
pub struct InMemoryRosterRepository {
    roster: Arc<RwLock<Roster>>,
}

impl InMemoryRosterRepository {
    pub fn new(roster: Roster) -> Self {
        Self {
            roster: Arc::new(RwLock::new(roster)),
        }
    }

    /// A repository holding the seed activities.
    pub fn seeded() -> Result<Self, RosterError> {
        let roster = Roster::from_activities(seed_activities()?)?;
        Ok(Self::new(roster))
    }
}

#[async_trait]
impl RosterRepository for InMemoryRosterRepository {
    async fn snapshot(&self) -> Roster {
        self.roster.read().await.clone()
    }

    async fn add_participant(&self, activity_name: &str, email: &str) -> Result<(), RosterError> {
        let mut roster = self.roster.write().await;
        roster.signup(activity_name, email)
    }

    async fn remove_participant(
        &self,
        activity_name: &str,
        email: &str,
    ) -> Result<(), RosterError> {
        let mut roster = self.roster.write().await;
        roster.remove_participant(activity_name, email)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::Activity;

    #[tokio::test]
    async fn clones_share_the_same_roster() {
        let repository = InMemoryRosterRepository::seeded().unwrap();
        let other = repository.clone();

        repository
            .add_participant("Chess Club", "new@mergington.edu")
            .await
            .unwrap();

        let roster = other.snapshot().await;
        assert!(roster
            .get("Chess Club")
            .unwrap()
            .has_participant("new@mergington.edu"));
    }

    #[tokio::test]
    async fn failed_write_does_not_mutate() {
        let roster = Roster::from_activities([Activity::new("Art Club", "Paint", "Mondays", 5)
            .with_participants(["ada@mergington.edu"])
            .unwrap()])
        .unwrap();
        let repository = InMemoryRosterRepository::new(roster.clone());

        let result = repository
            .remove_participant("Art Club", "bob@mergington.edu")
            .await;

        assert_eq!(result, Err(RosterError::ParticipantNotFound));
        assert_eq!(repository.snapshot().await, roster);
    }
}
