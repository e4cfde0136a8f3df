//! Plain view models for the activity cards, kept apart from the Yew markup
//! so the numbers on screen can be checked without a browser.

use crate::model::{Activity, ActivityList};

pub const SELECT_PLACEHOLDER: &str = "-- Select an activity --";
pub const NO_PARTICIPANTS: &str = "No participants yet.";
pub const LOAD_FAILED: &str = "Failed to load activities. Please try again later.";
pub const LOADING: &str = "Loading activities...";

#[derive(Debug, Clone, PartialEq)]
pub struct ParticipantRow {
    pub activity: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ParticipantRows {
    /// One placeholder row, no unregister control.
    Empty,
    Listed(Vec<ParticipantRow>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct CardView {
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub spots_left: i64,
    pub participant_count: usize,
    pub rows: ParticipantRows,
}

impl CardView {
    pub fn availability(&self) -> String {
        format!("{} spots left", self.spots_left)
    }

    pub fn participants_title(&self) -> String {
        format!("Participants ({})", self.participant_count)
    }
}

pub fn card_view(name: &str, activity: &Activity) -> CardView {
    let rows = if activity.participants.is_empty() {
        ParticipantRows::Empty
    } else {
        ParticipantRows::Listed(
            activity
                .participants
                .iter()
                .map(|email| ParticipantRow {
                    activity: name.to_string(),
                    email: email.clone(),
                })
                .collect(),
        )
    };

    CardView {
        name: name.to_string(),
        description: activity.description.clone(),
        schedule: activity.schedule.clone(),
        spots_left: activity.spots_left(),
        participant_count: activity.participants.len(),
        rows,
    }
}

pub fn card_views(list: &ActivityList) -> Vec<CardView> {
    list.iter().map(|(name, a)| card_view(name, a)).collect()
}

/// Options for the activity select, placeholder first with an empty value.
pub fn select_options(list: &ActivityList) -> Vec<(String, String)> {
    std::iter::once((String::new(), SELECT_PLACEHOLDER.to_string()))
        .chain(list.names().map(|n| (n.to_string(), n.to_string())))
        .collect()
}
