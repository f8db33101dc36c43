use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{
    ports::{inbound::RosterService, outbound::RosterRepository},
    Roster, RosterError,
};

pub struct RosterServiceImpl<R> {
    repository: Arc<R>,
}

impl<R> RosterServiceImpl<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R: RosterRepository> RosterService for RosterServiceImpl<R> {
    async fn list_activities(&self) -> Roster {
        self.repository.snapshot().await
    }

    async fn signup(&self, activity_name: &str, email: &str) -> Result<(), RosterError> {
        match self.repository.add_participant(activity_name, email).await {
            Ok(()) => {
                tracing::info!("Signed up {} for {}", email, activity_name);
                Ok(())
            }
            Err(err) => {
                tracing::debug!("Signup of {} for {} rejected: {}", email, activity_name, err);
                Err(err)
            }
        }
    }

    async fn remove_participant(
        &self,
        activity_name: &str,
        email: &str,
    ) -> Result<(), RosterError> {
        match self.repository.remove_participant(activity_name, email).await {
            Ok(()) => {
                tracing::info!("Unregistered {} from {}", email, activity_name);
                Ok(())
            }
            Err(err) => {
                tracing::debug!(
                    "Removal of {} from {} rejected: {}",
                    email,
                    activity_name,
                    err
                );
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::outbound::memory::InMemoryRosterRepository;

    fn service() -> RosterServiceImpl<InMemoryRosterRepository> {
        let repository = InMemoryRosterRepository::seeded().unwrap();
        RosterServiceImpl::new(Arc::new(repository))
    }

    #[tokio::test]
    async fn list_activities_includes_seeded_activities() {
        let roster = service().list_activities().await;

        let names: Vec<_> = roster.activities().map(|a| a.name.as_str()).collect();
        assert!(names.contains(&"Chess Club"));
        assert!(names.contains(&"Programming Class"));
        assert!(names.contains(&"Gym Class"));
    }

    #[tokio::test]
    async fn signup_is_visible_in_later_listings() {
        let service = service();

        service
            .signup("Programming Class", "newstudent@mergington.edu")
            .await
            .unwrap();

        let roster = service.list_activities().await;
        assert!(roster
            .get("Programming Class")
            .unwrap()
            .has_participant("newstudent@mergington.edu"));
    }

    #[tokio::test]
    async fn signup_errors_are_reported() {
        let service = service();

        assert_eq!(
            service.signup("Chess Club", "michael@mergington.edu").await,
            Err(RosterError::DuplicateSignup)
        );
        assert_eq!(
            service.signup("Nonexistent Club", "test@mergington.edu").await,
            Err(RosterError::ActivityNotFound)
        );
    }

    #[tokio::test]
    async fn listing_is_a_snapshot() {
        let service = service();
        let before = service.list_activities().await;

        service
            .remove_participant("Chess Club", "michael@mergington.edu")
            .await
            .unwrap();

        assert!(before
            .get("Chess Club")
            .unwrap()
            .has_participant("michael@mergington.edu"));
    }

    #[tokio::test]
    async fn removal_then_repeat_is_not_found() {
        let service = service();

        service
            .remove_participant("Chess Club", "michael@mergington.edu")
            .await
            .unwrap();

        assert_eq!(
            service
                .remove_participant("Chess Club", "michael@mergington.edu")
                .await,
            Err(RosterError::ParticipantNotFound)
        );
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_duplicate_signups_admit_one() {
        let service = Arc::new(service());

        let handles: Vec<_> = (0..16)
            .map(|_| {
                let service = Arc::clone(&service);
                tokio::spawn(async move {
                    service
                        .signup("Gym Class", "racer@mergington.edu")
                        .await
                        .is_ok()
                })
            })
            .collect();

        let mut admitted = 0;
        for handle in handles {
            if handle.await.unwrap() {
                admitted += 1;
            }
        }

        assert_eq!(admitted, 1);
        let roster = service.list_activities().await;
        let participants = roster.get("Gym Class").unwrap().participants();
        assert_eq!(
            participants
                .iter()
                .filter(|p| *p == "racer@mergington.edu")
                .count(),
            1
        );
    }
}
