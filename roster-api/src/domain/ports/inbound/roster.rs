use async_trait::async_trait;

use crate::domain::{Roster, RosterError};

#[async_trait]
pub trait RosterService: Send + Sync + 'static {
    /// A snapshot of every activity and its participants.
    async fn list_activities(&self) -> Roster;

    async fn signup(&self, activity_name: &str, email: &str) -> Result<(), RosterError>;

    async fn remove_participant(&self, activity_name: &str, email: &str)
        -> Result<(), RosterError>;
}
