//! HTTP response types for the activity endpoints.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::domain::{models::Activity, Roster};

/// Activity details as listed by `GET /activities`.
#[derive(Debug, Serialize)]
pub struct ActivityResponse {
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    pub participants: Vec<String>,
}

impl From<&Activity> for ActivityResponse {
    fn from(activity: &Activity) -> Self {
        Self {
            description: activity.description.clone(),
            schedule: activity.schedule.clone(),
            max_participants: activity.max_participants,
            participants: activity.participants().to_vec(),
        }
    }
}

/// Activities keyed by name.
pub type ActivitiesResponse = BTreeMap<String, ActivityResponse>;

pub fn activities_response(roster: &Roster) -> ActivitiesResponse {
    roster
        .activities()
        .map(|activity| (activity.name.clone(), ActivityResponse::from(activity)))
        .collect()
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn signed_up(email: &str, activity_name: &str) -> Self {
        Self {
            message: format!("Signed up {email} for {activity_name}"),
        }
    }

    pub fn unregistered(email: &str, activity_name: &str) -> Self {
        Self {
            message: format!("Unregistered {email} from {activity_name}"),
        }
    }
}
