use chrono::{DateTime, Datelike, Duration, NaiveDate, TimeZone, Weekday};
use serde::Serialize;

use super::types::Meeting;

/// Meetings of one weekday within a week bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayBucket {
    #[serde(serialize_with = "serialize_weekday")]
    pub weekday: Weekday,
    pub meetings: Vec<Meeting>,
}

impl DayBucket {
    /// Full English name of this bucket's weekday.
    pub fn name(&self) -> &'static str {
        day_name(self.weekday)
    }
}

/// Meetings of one ISO week, grouped by weekday in first-seen order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeekBucket {
    pub week: u32,
    pub days: Vec<DayBucket>,
}

impl WeekBucket {
    /// Returns the bucket for the given weekday, if any meeting falls on it.
    pub fn get(&self, weekday: Weekday) -> Option<&DayBucket> {
        self.days.iter().find(|day| day.weekday == weekday)
    }

    /// Returns the number of meetings in this week.
    pub fn meeting_count(&self) -> usize {
        self.days.iter().map(|day| day.meetings.len()).sum()
    }
}

/// Meetings grouped by ISO week number, then by weekday.
///
/// Weeks iterate in the order they were first encountered after
/// [`bucketize`] sorts its input by date. The key is the week number alone,
/// so the same week of a later year joins the earlier bucket.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct WeekBuckets {
    weeks: Vec<WeekBucket>,
}

impl WeekBuckets {
    pub fn is_empty(&self) -> bool {
        self.weeks.is_empty()
    }

    /// Returns the number of distinct weeks.
    pub fn len(&self) -> usize {
        self.weeks.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, WeekBucket> {
        self.weeks.iter()
    }

    /// Returns the bucket for the given ISO week number.
    pub fn get(&self, week: u32) -> Option<&WeekBucket> {
        self.weeks.iter().find(|bucket| bucket.week == week)
    }

    /// Returns the total number of meetings across all weeks.
    pub fn meeting_count(&self) -> usize {
        self.weeks.iter().map(WeekBucket::meeting_count).sum()
    }

    fn push(&mut self, week: u32, weekday: Weekday, meeting: Meeting) {
        let bucket = match self.weeks.iter().position(|b| b.week == week) {
            Some(index) => &mut self.weeks[index],
            None => {
                self.weeks.push(WeekBucket {
                    week,
                    days: Vec::new(),
                });
                let last = self.weeks.len() - 1;
                &mut self.weeks[last]
            }
        };

        match bucket.days.iter_mut().find(|day| day.weekday == weekday) {
            Some(day) => day.meetings.push(meeting),
            None => bucket.days.push(DayBucket {
                weekday,
                meetings: vec![meeting],
            }),
        }
    }
}

impl<'a> IntoIterator for &'a WeekBuckets {
    type Item = &'a WeekBucket;
    type IntoIter = std::slice::Iter<'a, WeekBucket>;

    fn into_iter(self) -> Self::IntoIter {
        self.weeks.iter()
    }
}

impl IntoIterator for WeekBuckets {
    type Item = WeekBucket;
    type IntoIter = std::vec::IntoIter<WeekBucket>;

    fn into_iter(self) -> Self::IntoIter {
        self.weeks.into_iter()
    }
}

/// Returns the Thursday of the ISO week containing `date`.
///
/// ISO 8601 assigns a week to the year its Thursday falls in. `None` when
/// that Thursday lies outside the representable date range.
fn iso_thursday(date: NaiveDate) -> Option<NaiveDate> {
    let weekday = date.weekday().number_from_monday() as i64;
    date.checked_add_signed(Duration::days(4 - weekday))
}

/// Returns the ISO-8601 week number (1-53) of the given date.
pub fn iso_week_number(date: NaiveDate) -> u32 {
    match iso_thursday(date) {
        // Day-of-year is 1-based, so this is ceil(((thursday - jan1) + 1) / 7).
        Some(thursday) => thursday.ordinal().div_ceil(7),
        None => date.iso_week().week(),
    }
}

/// Returns the ISO week-numbering year of the given date.
pub fn iso_week_year(date: NaiveDate) -> i32 {
    match iso_thursday(date) {
        Some(thursday) => thursday.year(),
        None => date.iso_week().year(),
    }
}

/// Returns the full English name of a weekday.
pub fn day_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

fn serialize_weekday<S>(weekday: &Weekday, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_str(day_name(*weekday))
}

fn group(mut meetings: Vec<Meeting>, local_date: impl Fn(&Meeting) -> NaiveDate) -> WeekBuckets {
    // Stable: meetings at the same instant keep their input order.
    meetings.sort_by_key(|meeting| meeting.date);

    let mut buckets = WeekBuckets::default();
    for meeting in meetings {
        let date = local_date(&meeting);
        buckets.push(iso_week_number(date), date.weekday(), meeting);
    }
    buckets
}

/// Groups meetings by ISO week and weekday.
///
/// Calendar dates are read in each meeting's own offset.
pub fn bucketize(meetings: &[Meeting]) -> WeekBuckets {
    group(meetings.to_vec(), |meeting| meeting.date.date_naive())
}

/// Groups meetings by ISO week and weekday, reading calendar dates in `tz`.
pub fn bucketize_in<Tz: TimeZone>(meetings: &[Meeting], tz: &Tz) -> WeekBuckets {
    group(meetings.to_vec(), |meeting| local_date_in(&meeting.date, tz))
}

fn local_date_in<Tz: TimeZone, Src: TimeZone>(date: &DateTime<Src>, tz: &Tz) -> NaiveDate {
    date.with_timezone(tz).date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::meeting::MeetingId;
    use chrono::{FixedOffset, Utc};

    fn make_date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn at(year: i32, month: u32, day: u32, hour: u32) -> DateTime<FixedOffset> {
        make_date(year, month, day)
            .and_hms_opt(hour, 0, 0)
            .unwrap()
            .and_utc()
            .fixed_offset()
    }

    fn meeting(id: i64, title: &str, date: DateTime<FixedOffset>) -> Meeting {
        Meeting::new(MeetingId(id), title, date)
    }

    #[test]
    fn test_iso_week_year_boundaries() {
        // Dec 30 2024 is a Monday in week 1 of 2025.
        assert_eq!(iso_week_number(make_date(2024, 12, 30)), 1);
        assert_eq!(iso_week_year(make_date(2024, 12, 30)), 2025);

        // Jan 1 2023 is a Sunday in week 52 of 2022.
        assert_eq!(iso_week_number(make_date(2023, 1, 1)), 52);
        assert_eq!(iso_week_year(make_date(2023, 1, 1)), 2022);

        // 2020 has 53 weeks.
        assert_eq!(iso_week_number(make_date(2020, 12, 31)), 53);
        assert_eq!(iso_week_number(make_date(2021, 1, 3)), 53);
        assert_eq!(iso_week_number(make_date(2021, 1, 4)), 1);
    }

    #[test]
    fn test_iso_week_matches_chrono() {
        let mut date = make_date(2015, 1, 1);
        let end = make_date(2030, 12, 31);
        while date <= end {
            let expected = date.iso_week();
            assert_eq!(iso_week_number(date), expected.week(), "week of {date}");
            assert_eq!(iso_week_year(date), expected.year(), "year of {date}");
            date += Duration::days(1);
        }
    }

    #[test]
    fn test_iso_week_at_date_range_limits() {
        for date in [
            NaiveDate::MIN,
            NaiveDate::MIN + Duration::days(3),
            NaiveDate::MAX,
            NaiveDate::MAX - Duration::days(3),
        ] {
            let expected = date.iso_week();
            assert_eq!(iso_week_number(date), expected.week(), "week of {date}");
            assert_eq!(iso_week_year(date), expected.year(), "year of {date}");
        }
    }

    #[test]
    fn test_day_name() {
        assert_eq!(day_name(Weekday::Mon), "Monday");
        assert_eq!(day_name(Weekday::Sun), "Sunday");
    }

    #[test]
    fn test_bucketize_empty() {
        let buckets = bucketize(&[]);
        assert!(buckets.is_empty());
        assert_eq!(buckets.len(), 0);
        assert_eq!(buckets.meeting_count(), 0);
    }

    #[test]
    fn test_bucketize_same_monday_sorted_by_time() {
        // 2024-06-03 is a Monday.
        let meetings = vec![
            meeting(1, "Lunch", at(2024, 6, 3, 12)),
            meeting(2, "Standup", at(2024, 6, 3, 9)),
            meeting(3, "Retro", at(2024, 6, 3, 16)),
        ];

        let buckets = bucketize(&meetings);

        assert_eq!(buckets.len(), 1);
        let week = buckets.get(23).unwrap();
        assert_eq!(week.days.len(), 1);
        let monday = week.get(Weekday::Mon).unwrap();
        assert_eq!(monday.name(), "Monday");
        let titles: Vec<&str> = monday.meetings.iter().map(|m| m.title.as_str()).collect();
        assert_eq!(titles, vec!["Standup", "Lunch", "Retro"]);
    }

    #[test]
    fn test_bucketize_across_year_boundary() {
        let meetings = vec![
            meeting(1, "New year", at(2025, 1, 2, 10)),
            meeting(2, "Year end", at(2024, 12, 30, 10)),
            meeting(3, "Before", at(2024, 12, 27, 10)),
        ];

        let buckets = bucketize(&meetings);

        let weeks: Vec<u32> = buckets.iter().map(|b| b.week).collect();
        assert_eq!(weeks, vec![52, 1]);

        let week_one = buckets.get(1).unwrap();
        let days: Vec<&str> = week_one.days.iter().map(DayBucket::name).collect();
        assert_eq!(days, vec!["Monday", "Thursday"]);
        assert_eq!(week_one.meeting_count(), 2);
    }

    #[test]
    fn test_bucketize_new_years_day_in_previous_week() {
        let meetings = vec![
            meeting(1, "Hangover brunch", at(2023, 1, 1, 11)),
            meeting(2, "Kickoff", at(2023, 1, 2, 9)),
        ];

        let buckets = bucketize(&meetings);

        let weeks: Vec<u32> = buckets.iter().map(|b| b.week).collect();
        assert_eq!(weeks, vec![52, 1]);
        assert!(buckets.get(52).unwrap().get(Weekday::Sun).is_some());
    }

    #[test]
    fn test_bucketize_merges_same_week_number_of_different_years() {
        // 2024-01-03 and 2025-01-01 are both Wednesdays of ISO week 1.
        let meetings = vec![
            meeting(1, "Next year", at(2025, 1, 1, 10)),
            meeting(2, "Summer", at(2024, 6, 3, 10)),
            meeting(3, "This year", at(2024, 1, 3, 10)),
        ];

        let buckets = bucketize(&meetings);

        // The merged week stays where 2024's week 1 first appeared.
        let weeks: Vec<u32> = buckets.iter().map(|b| b.week).collect();
        assert_eq!(weeks, vec![1, 23]);

        let week_one = buckets.get(1).unwrap();
        assert_eq!(week_one.days.len(), 1);
        let wednesday = week_one.get(Weekday::Wed).unwrap();
        let titles: Vec<&str> = wednesday.meetings.iter().map(|m| m.title.as_str()).collect();
        assert_eq!(titles, vec!["This year", "Next year"]);
        assert_eq!(buckets.meeting_count(), 3);
    }

    #[test]
    fn test_bucketize_days_in_first_seen_order() {
        let meetings = vec![
            meeting(1, "Fri", at(2024, 6, 7, 9)),
            meeting(2, "Tue", at(2024, 6, 4, 9)),
            meeting(3, "Tue late", at(2024, 6, 4, 18)),
            meeting(4, "Next Mon", at(2024, 6, 10, 9)),
        ];

        let buckets = bucketize(&meetings);

        assert_eq!(buckets.len(), 2);
        let first = buckets.iter().next().unwrap();
        let days: Vec<Weekday> = first.days.iter().map(|d| d.weekday).collect();
        assert_eq!(days, vec![Weekday::Tue, Weekday::Fri]);
        assert_eq!(buckets.meeting_count(), 4);
    }

    #[test]
    fn test_bucketize_equal_times_keep_input_order() {
        let meetings = vec![
            meeting(1, "First", at(2024, 6, 3, 9)),
            meeting(2, "Second", at(2024, 6, 3, 9)),
        ];

        let buckets = bucketize(&meetings);
        let ids: Vec<MeetingId> = buckets.get(23).unwrap().days[0]
            .meetings
            .iter()
            .map(|m| m.id)
            .collect();
        assert_eq!(ids, vec![MeetingId(1), MeetingId(2)]);
    }

    #[test]
    fn test_bucketize_uses_meeting_offset() {
        // Sunday 23:30 in UTC-5 is Monday 04:30 UTC.
        let offset = FixedOffset::west_opt(5 * 3600).unwrap();
        let date = offset.with_ymd_and_hms(2024, 6, 9, 23, 30, 0).unwrap();
        let meetings = vec![meeting(1, "Late call", date)];

        let own = bucketize(&meetings);
        assert!(own.get(23).unwrap().get(Weekday::Sun).is_some());

        let utc = bucketize_in(&meetings, &Utc);
        assert!(utc.get(24).unwrap().get(Weekday::Mon).is_some());
    }

    #[test]
    fn test_bucketize_does_not_touch_input() {
        let meetings = vec![
            meeting(1, "Later", at(2024, 6, 4, 9)),
            meeting(2, "Earlier", at(2024, 6, 3, 9)),
        ];
        let before = meetings.clone();

        let _ = bucketize(&meetings);

        assert_eq!(meetings, before);
    }

    #[test]
    fn test_week_buckets_serialize_with_day_names() {
        let meetings = vec![meeting(1, "Standup", at(2024, 6, 3, 9))];
        let json = serde_json::to_value(bucketize(&meetings)).unwrap();

        assert_eq!(json[0]["week"], 23);
        assert_eq!(json[0]["days"][0]["weekday"], "Monday");
        assert_eq!(json[0]["days"][0]["meetings"][0]["title"], "Standup");
    }
}
