//! Pretty output formatting.

use meetprep_core::agenda::{self, AgendaItem, NoteState};
use meetprep_core::conversation::{Author, Conversation};
use meetprep_core::meeting::{Meeting, MeetingDetails, User, UserId, WeekBuckets};

/// Placeholder for fields the backend left empty.
const MISSING: &str = "...";

/// Format user profiles, marking the selected one with `*`.
pub fn format_users(users: &[User], selected: UserId) -> String {
    if users.is_empty() {
        return "No users found.".to_string();
    }

    let mut output = format!("USERS ({})\n", users.len());
    output.push_str(&"-".repeat(40));
    for user in users {
        let marker = if user.id == selected { "*" } else { " " };
        output.push_str(&format!("\n{} [{}] {}", marker, user.id, user.username));
    }
    output
}

/// Format a meeting as a single list line.
pub fn format_meeting_line(meeting: &Meeting) -> String {
    let mut line = format!(
        "[{}] {} {}",
        meeting.id,
        meeting.date.format("%H:%M"),
        meeting.title
    );
    if let Some(status) = meeting.status {
        line.push_str(&format!(" ({})", status));
    }
    line
}

/// Format meetings grouped by calendar week ("KW") and day.
pub fn format_week_buckets(buckets: &WeekBuckets) -> String {
    if buckets.is_empty() {
        return "No meetings found.".to_string();
    }

    let mut output = format!("MEETINGS ({})", buckets.meeting_count());
    for week in buckets {
        output.push_str(&format!("\n\nKW {}\n", week.week));
        output.push_str(&"-".repeat(40));
        for day in &week.days {
            output.push_str(&format!("\n  {}", day.name()));
            for meeting in &day.meetings {
                output.push_str(&format!("\n    {}", format_meeting_line(meeting)));
            }
        }
    }
    output
}

/// Format a meeting with its participants.
pub fn format_meeting_details(details: &MeetingDetails) -> String {
    let meeting = &details.meeting;
    let mut output = format!(
        "{}\n  ID: {}\n  Date: {}\n  Status: {}\n  Type: {}\n  Description: {}",
        meeting.title,
        meeting.id,
        meeting.date.format("%Y-%m-%d %H:%M %:z"),
        meeting.status_or_unknown(),
        meeting.meeting_type.as_deref().unwrap_or(MISSING),
        meeting.description.as_deref().unwrap_or(MISSING),
    );
    if details.users.is_empty() {
        output.push_str("\n  Users: none");
    } else {
        let names: Vec<&str> = details.users.iter().map(|u| u.username.as_str()).collect();
        output.push_str(&format!("\n  Users: {}", names.join(", ")));
    }
    output
}

/// Format a conversation: messages in time order, then the agenda.
pub fn format_conversation(conversation: &Conversation) -> String {
    let mut output = format!(
        "CONVERSATION (meeting {}, user {})\n",
        conversation.meeting_id, conversation.user_id
    );
    output.push_str(&"-".repeat(40));

    let messages = conversation.messages_chronological();
    if messages.is_empty() {
        output.push_str("\nNo messages yet.");
    }
    for message in messages {
        let author = match message.author {
            Author::User => "you",
            Author::Assistant => "assistant",
            Author::Other => "other",
        };
        output.push_str(&format!(
            "\n[{}] {}: {}",
            message.timestamp.format("%H:%M"),
            author,
            message.message
        ));
    }

    if !conversation.meeting_agenda.is_empty() {
        output.push_str("\n\n");
        output.push_str(&format_agenda(&conversation.meeting_agenda, false));
    }
    output
}

/// Format an agenda as meeting notes.
///
/// The next open item is marked with `>`; completed items with `x`.
pub fn format_agenda(items: &[AgendaItem], hide_done: bool) -> String {
    if items.is_empty() {
        return "No agenda items.".to_string();
    }

    let states = agenda::note_states(items);
    let shown = agenda::visible(items, hide_done);
    let open = items.iter().filter(|item| !item.completed).count();

    let mut output = format!("AGENDA ({} of {} open)\n", open, items.len());
    output.push_str(&"-".repeat(40));
    if shown.is_empty() {
        output.push_str("\nAll items done.");
    }
    for (index, item) in shown {
        let marker = match states[index] {
            NoteState::Next => ">",
            NoteState::Open => " ",
            NoteState::Done => "x",
        };
        output.push_str(&format!("\n{} {:>2}. {}", marker, index, item.agenda_item));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;
    use meetprep_core::meeting::{bucketize, MeetingId, MeetingStatus};

    fn meeting(id: i64, title: &str, at: &str) -> Meeting {
        Meeting::new(
            MeetingId(id),
            title,
            DateTime::parse_from_rfc3339(at).unwrap(),
        )
    }

    #[test]
    fn test_format_users_marks_selected() {
        let users = vec![User::new(UserId(1), "ada"), User::new(UserId(2), "grace")];

        let output = format_users(&users, UserId(2));

        assert!(output.starts_with("USERS (2)"));
        assert!(output.contains("\n  [1] ada"));
        assert!(output.contains("\n* [2] grace"));
        assert_eq!(format_users(&[], UserId(2)), "No users found.");
    }

    #[test]
    fn test_format_week_buckets_empty() {
        assert_eq!(format_week_buckets(&bucketize(&[])), "No meetings found.");
    }

    #[test]
    fn test_format_week_buckets() {
        let meetings = vec![
            meeting(2, "Planning", "2024-12-30T10:00:00Z").with_status(MeetingStatus::Todo),
            meeting(1, "Standup", "2024-12-27T09:00:00Z"),
        ];

        let output = format_week_buckets(&bucketize(&meetings));

        assert!(output.starts_with("MEETINGS (2)"));
        let kw52 = output.find("KW 52").unwrap();
        let kw1 = output.find("KW 1\n").unwrap();
        assert!(kw52 < kw1);
        assert!(output.contains("  Friday\n    [1] 09:00 Standup"));
        assert!(output.contains("  Monday\n    [2] 10:00 Planning (todo)"));
    }

    #[test]
    fn test_format_meeting_details_placeholders() {
        let details = MeetingDetails::new(
            meeting(4, "Sync", "2024-06-03T09:00:00Z"),
            vec![User::new(UserId(2), "ada"), User::new(UserId(3), "grace")],
        );

        let output = format_meeting_details(&details);

        assert!(output.contains("Description: ..."));
        assert!(output.contains("Status: unknown"));
        assert!(output.contains("Users: ada, grace"));
    }

    #[test]
    fn test_format_agenda_markers() {
        let items = vec![
            AgendaItem::new("Welcome").done(),
            AgendaItem::new("Budget"),
            AgendaItem::new("Hiring"),
        ];

        let output = format_agenda(&items, false);
        assert!(output.starts_with("AGENDA (2 of 3 open)"));
        assert!(output.contains("x  0. Welcome"));
        assert!(output.contains(">  1. Budget"));
        assert!(output.contains("   2. Hiring"));

        let hidden = format_agenda(&items, true);
        assert!(!hidden.contains("Welcome"));
    }

    #[test]
    fn test_format_agenda_all_done_hidden() {
        let items = vec![AgendaItem::new("Only").done()];
        assert!(format_agenda(&items, true).ends_with("All items done."));
    }
}
