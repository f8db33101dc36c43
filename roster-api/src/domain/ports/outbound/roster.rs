use async_trait::async_trait;

use crate::domain::{Roster, RosterError};

/// Storage for the roster.
///
/// Each write runs its checks and its mutation as one critical section, so
/// two concurrent signups of the same email cannot both succeed.
#[async_trait]
pub trait RosterRepository: Send + Sync + 'static {
    async fn snapshot(&self) -> Roster;

    async fn add_participant(&self, activity_name: &str, email: &str) -> Result<(), RosterError>;

    async fn remove_participant(&self, activity_name: &str, email: &str)
        -> Result<(), RosterError>;
}
