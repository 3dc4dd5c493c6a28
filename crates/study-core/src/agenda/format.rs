//! Agenda display formatting
//!
//! Renders schedule fields the way clients present them: 12-hour clock
//! times, long calendar dates, and weekday lists joined with "and".

use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};

use crate::entities::{Meeting, MeetingSchedule};

/// Render a time on the 12-hour clock, e.g. `14:05` -> `2:05pm`
pub fn format_time_12h(time: NaiveTime) -> String {
    let (is_pm, hour) = time.hour12();
    let suffix = if is_pm { "pm" } else { "am" };
    format!("{}:{:02}{}", hour, time.minute(), suffix)
}

/// Render a date as `Month D, YYYY`, e.g. `January 5, 2024`
pub fn format_date_long(date: NaiveDate) -> String {
    format!("{} {}, {}", date.format("%B"), date.day(), date.year())
}

/// Join names with commas and a final "and": `Monday, Wednesday and Friday`
pub fn join_names(names: &[&str]) -> String {
    match names {
        [] => String::new(),
        [only] => (*only).to_string(),
        [init @ .., last] => format!("{} and {}", init.join(", "), last),
    }
}

/// One-line schedule summary for a meeting card
pub fn schedule_summary(meeting: &Meeting) -> String {
    let times = format!(
        "{} - {}",
        format_time_12h(meeting.start_time),
        format_time_12h(meeting.end_time)
    );
    match &meeting.schedule {
        MeetingSchedule::OneTime { date } => {
            format!("{} \u{b7} {}", format_date_long(*date), times)
        }
        MeetingSchedule::Recurring { end_date, days, .. } => {
            format!(
                "{} \u{b7} {} (until {})",
                join_names(&days.names()),
                times,
                format_date_long(*end_date)
            )
        }
    }
}
