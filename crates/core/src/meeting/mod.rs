mod types;
mod week;

pub use types::{
    next_full_hour, Meeting, MeetingDetails, MeetingId, MeetingStatus, NewMeeting, User, UserId,
};
pub use week::{
    bucketize, bucketize_in, day_name, iso_week_number, iso_week_year, DayBucket, WeekBucket,
    WeekBuckets,
};
