use std::fmt;

use chrono::{DateTime, Duration, FixedOffset, Timelike};
use serde::{Deserialize, Serialize};

use crate::serde::deserialize_timestamp;

/// Backend identifier of a meeting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MeetingId(pub i64);

impl fmt::Display for MeetingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Backend identifier of a user profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub i64);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Preparation status of a meeting for the current user.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MeetingStatus {
    Done,
    InProgress,
    Todo,
    #[default]
    #[serde(other)]
    Unknown,
}

impl MeetingStatus {
    /// Returns the wire name of this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            MeetingStatus::Done => "done",
            MeetingStatus::InProgress => "in_progress",
            MeetingStatus::Todo => "todo",
            MeetingStatus::Unknown => "unknown",
        }
    }
}

impl fmt::Display for MeetingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A user profile that can prepare meetings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub username: String,
}

impl User {
    pub fn new(id: UserId, username: impl Into<String>) -> Self {
        Self {
            id,
            username: username.into(),
        }
    }
}

/// A scheduled meeting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meeting {
    pub id: MeetingId,
    pub title: String,
    /// Start of the meeting, with the offset it was scheduled in.
    #[serde(deserialize_with = "deserialize_timestamp")]
    pub date: DateTime<FixedOffset>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<MeetingStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meeting_type: Option<String>,
}

impl Meeting {
    /// Creates a new meeting with no status or description.
    pub fn new(id: MeetingId, title: impl Into<String>, date: DateTime<FixedOffset>) -> Self {
        Self {
            id,
            title: title.into(),
            date,
            status: None,
            description: None,
            meeting_type: None,
        }
    }

    /// Sets the preparation status.
    pub fn with_status(mut self, status: MeetingStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Sets the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the meeting type.
    pub fn with_meeting_type(mut self, meeting_type: impl Into<String>) -> Self {
        self.meeting_type = Some(meeting_type.into());
        self
    }

    /// Returns the status, treating a missing one as unknown.
    pub fn status_or_unknown(&self) -> MeetingStatus {
        self.status.unwrap_or_default()
    }
}

/// A meeting together with its participants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeetingDetails {
    #[serde(flatten)]
    pub meeting: Meeting,
    #[serde(default)]
    pub users: Vec<User>,
}

impl MeetingDetails {
    pub fn new(meeting: Meeting, users: Vec<User>) -> Self {
        Self { meeting, users }
    }
}

/// Fields of a meeting that has not been scheduled on the backend yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewMeeting {
    pub title: String,
    pub description: Option<String>,
    pub date: DateTime<FixedOffset>,
    /// Free-form category; the backend requires it, so it may be empty.
    #[serde(default)]
    pub meeting_type: String,
}

impl NewMeeting {
    pub fn new(title: impl Into<String>, date: DateTime<FixedOffset>) -> Self {
        Self {
            title: title.into(),
            description: None,
            date,
            meeting_type: String::new(),
        }
    }

    /// Sets the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the meeting type.
    pub fn with_meeting_type(mut self, meeting_type: impl Into<String>) -> Self {
        self.meeting_type = meeting_type.into();
        self
    }

    /// Builds the stored meeting once the backend has assigned an id.
    pub fn into_meeting(self, id: MeetingId) -> Meeting {
        let mut meeting = Meeting::new(id, self.title, self.date);
        meeting.description = self.description;
        if !self.meeting_type.is_empty() {
            meeting.meeting_type = Some(self.meeting_type);
        }
        meeting
    }
}

/// Start of the hour after `now`, the default slot for a new meeting.
pub fn next_full_hour(now: DateTime<FixedOffset>) -> DateTime<FixedOffset> {
    let into_hour = Duration::seconds(i64::from(now.minute() * 60 + now.second()))
        + Duration::nanoseconds(i64::from(now.nanosecond()));
    now - into_hour + Duration::hours(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meeting_from_backend_json() {
        let json = r#"{
            "id": 7,
            "title": "Quarterly review",
            "description": null,
            "date": "2024-06-03T09:30:00",
            "meeting_type": "review"
        }"#;
        let meeting: Meeting = serde_json::from_str(json).unwrap();

        assert_eq!(meeting.id, MeetingId(7));
        assert_eq!(meeting.title, "Quarterly review");
        assert_eq!(meeting.date.hour(), 9);
        assert_eq!(meeting.description, None);
        assert_eq!(meeting.meeting_type.as_deref(), Some("review"));
        assert_eq!(meeting.status, None);
        assert_eq!(meeting.status_or_unknown(), MeetingStatus::Unknown);
    }

    #[test]
    fn test_meeting_invalid_date_is_error() {
        let json = r#"{"id": 1, "title": "Broken", "date": "soon"}"#;
        let result: Result<Meeting, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_meeting_status_wire_names() {
        let status: MeetingStatus = serde_json::from_str(r#""in_progress""#).unwrap();
        assert_eq!(status, MeetingStatus::InProgress);
        assert_eq!(
            serde_json::to_string(&MeetingStatus::Done).unwrap(),
            r#""done""#
        );
    }

    #[test]
    fn test_meeting_status_unrecognized_is_unknown() {
        let status: MeetingStatus = serde_json::from_str(r#""archived""#).unwrap();
        assert_eq!(status, MeetingStatus::Unknown);
    }

    #[test]
    fn test_meeting_details_flattened() {
        let json = r#"{
            "id": 3,
            "title": "Standup",
            "date": "2024-06-03T09:00:00Z",
            "users": [{"id": 2, "username": "ada"}]
        }"#;
        let details: MeetingDetails = serde_json::from_str(json).unwrap();

        assert_eq!(details.meeting.id, MeetingId(3));
        assert_eq!(details.users, vec![User::new(UserId(2), "ada")]);
    }

    #[test]
    fn test_ids_display() {
        assert_eq!(MeetingId(42).to_string(), "42");
        assert_eq!(UserId(2).to_string(), "2");
    }

    #[test]
    fn test_new_meeting_wire_shape() {
        let date = DateTime::parse_from_rfc3339("2024-06-03T10:00:00+02:00").unwrap();
        let new = NewMeeting::new("Kickoff", date).with_description("Scope");

        let json = serde_json::to_value(&new).unwrap();

        assert_eq!(json["title"], "Kickoff");
        assert_eq!(json["description"], "Scope");
        assert_eq!(json["date"], "2024-06-03T10:00:00+02:00");
        assert_eq!(json["meeting_type"], "");
    }

    #[test]
    fn test_new_meeting_into_meeting() {
        let date = DateTime::parse_from_rfc3339("2024-06-03T10:00:00Z").unwrap();

        let untyped = NewMeeting::new("Kickoff", date).into_meeting(MeetingId(4));
        assert_eq!(untyped.id, MeetingId(4));
        assert_eq!(untyped.meeting_type, None);
        assert_eq!(untyped.status, None);

        let typed = NewMeeting::new("Kickoff", date)
            .with_meeting_type("planning")
            .into_meeting(MeetingId(5));
        assert_eq!(typed.meeting_type.as_deref(), Some("planning"));
    }

    #[test]
    fn test_next_full_hour() {
        let now = DateTime::parse_from_rfc3339("2024-06-03T09:41:27.123+02:00").unwrap();
        assert_eq!(
            next_full_hour(now),
            DateTime::parse_from_rfc3339("2024-06-03T10:00:00+02:00").unwrap()
        );

        let late = DateTime::parse_from_rfc3339("2024-12-31T23:00:00Z").unwrap();
        assert_eq!(
            next_full_hour(late),
            DateTime::parse_from_rfc3339("2025-01-01T00:00:00Z").unwrap()
        );
    }
}
