use std::collections::HashSet;

use crate::domain::RosterError;

/// An extracurricular activity and the emails signed up for it.
///
/// Participants keep signup order. Capacity is descriptive only and is never
/// enforced against the participant count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Activity {
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    participants: Vec<String>,
}

impl Activity {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        schedule: impl Into<String>,
        max_participants: u32,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            schedule: schedule.into(),
            max_participants,
            participants: Vec::new(),
        }
    }

    /// Attach an initial participant list, rejecting repeated emails.
    pub fn with_participants<I, S>(mut self, participants: I) -> Result<Self, RosterError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let participants: Vec<String> = participants.into_iter().map(Into::into).collect();

        let mut seen = HashSet::new();
        if let Some(duplicate) = participants.iter().find(|email| !seen.insert(email.as_str())) {
            return Err(RosterError::invalid_seed(format!(
                "'{duplicate}' appears more than once in '{}'",
                self.name
            )));
        }

        self.participants = participants;
        Ok(self)
    }

    pub fn participants(&self) -> &[String] {
        &self.participants
    }

    pub fn has_participant(&self, email: &str) -> bool {
        self.participants.iter().any(|p| p == email)
    }

    pub(crate) fn add_participant(&mut self, email: &str) -> Result<(), RosterError> {
        if self.has_participant(email) {
            return Err(RosterError::DuplicateSignup);
        }
        self.participants.push(email.to_string());
        Ok(())
    }

    pub(crate) fn remove_participant(&mut self, email: &str) -> Result<(), RosterError> {
        let position = self
            .participants
            .iter()
            .position(|p| p == email)
            .ok_or(RosterError::ParticipantNotFound)?;
        self.participants.remove(position);
        Ok(())
    }
}
