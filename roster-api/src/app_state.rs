use std::sync::Arc;

use crate::{
    adapters::outbound::memory::InMemoryRosterRepository,
    domain::{ports::inbound::RosterService, services::RosterServiceImpl, RosterError},
};

#[derive(Clone)]
pub struct AppState {
    pub roster_service: Arc<dyn RosterService>,
}

impl AppState {
    pub fn new(roster_service: Arc<dyn RosterService>) -> Self {
        Self { roster_service }
    }

    /// State backed by a fresh in-memory roster holding the seed activities.
    pub fn seeded() -> Result<Self, RosterError> {
        let repository = InMemoryRosterRepository::seeded()?;
        let service = RosterServiceImpl::new(Arc::new(repository));
        Ok(Self::new(Arc::new(service)))
    }
}
