use std::collections::BTreeMap;

use super::{models::Activity, RosterError};

/// All activities, keyed by their unique name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    activities: BTreeMap<String, Activity>,
}

impl Roster {
    /// Build a roster, rejecting blank or repeated activity names.
    pub fn from_activities(
        activities: impl IntoIterator<Item = Activity>,
    ) -> Result<Self, RosterError> {
        let mut roster = Self::default();

        for activity in activities {
            if activity.name.trim().is_empty() {
                return Err(RosterError::invalid_seed("activity name must not be blank"));
            }
            if roster.activities.contains_key(&activity.name) {
                return Err(RosterError::invalid_seed(format!(
                    "activity '{}' is defined more than once",
                    activity.name
                )));
            }
            roster.activities.insert(activity.name.clone(), activity);
        }

        Ok(roster)
    }

    pub fn activities(&self) -> impl Iterator<Item = &Activity> {
        self.activities.values()
    }

    pub fn get(&self, name: &str) -> Option<&Activity> {
        self.activities.get(name)
    }

    /// Append `email` to the activity's participants.
    ///
    /// An unknown activity is reported before a duplicate signup.
    pub fn signup(&mut self, activity_name: &str, email: &str) -> Result<(), RosterError> {
        self.activities
            .get_mut(activity_name)
            .ok_or(RosterError::ActivityNotFound)?
            .add_participant(email)
    }

    /// Remove `email` from the activity's participants.
    ///
    /// An unknown activity is reported before a missing participant.
    pub fn remove_participant(
        &mut self,
        activity_name: &str,
        email: &str,
    ) -> Result<(), RosterError> {
        self.activities
            .get_mut(activity_name)
            .ok_or(RosterError::ActivityNotFound)?
            .remove_participant(email)
    }
}
