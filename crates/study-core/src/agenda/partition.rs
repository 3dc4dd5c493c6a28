//! Agenda partition - split meetings into upcoming and past
//!
//! A meeting counts as upcoming through its final calendar date: a one-time
//! meeting on today's date, or a recurrence ending today, can still be
//! attended and therefore sorts with the upcoming set.

use chrono::NaiveDate;
use std::cmp::Ordering;

use crate::entities::Meeting;

/// Which half of the agenda a meeting belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeFrame {
    Upcoming,
    Past,
}

impl TimeFrame {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Upcoming => "upcoming",
            Self::Past => "past",
        }
    }
}

/// Error when parsing a time frame from a query string
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("invalid time frame, expected 'upcoming' or 'past'")]
pub struct TimeFrameParseError;

impl std::str::FromStr for TimeFrame {
    type Err = TimeFrameParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "upcoming" => Ok(Self::Upcoming),
            "past" => Ok(Self::Past),
            _ => Err(TimeFrameParseError),
        }
    }
}

/// Classify a meeting relative to the given day
pub fn classify(meeting: &Meeting, today: NaiveDate) -> TimeFrame {
    if meeting.schedule.last_date() >= today {
        TimeFrame::Upcoming
    } else {
        TimeFrame::Past
    }
}

/// Meetings split into upcoming and past, each in agenda order
#[derive(Debug, Clone)]
pub struct AgendaView {
    pub upcoming: Vec<Meeting>,
    pub past: Vec<Meeting>,
}

/// Partition meetings around `today` and sort each half
pub fn partition(meetings: Vec<Meeting>, today: NaiveDate) -> AgendaView {
    let (mut upcoming, mut past): (Vec<Meeting>, Vec<Meeting>) = meetings
        .into_iter()
        .partition(|m| classify(m, today) == TimeFrame::Upcoming);
    upcoming.sort_by(agenda_order);
    past.sort_by(agenda_order);
    AgendaView { upcoming, past }
}

// Recurring meetings sort before one-time meetings; within each shape the
// first calendar date ascends, with ids breaking ties deterministically.
fn agenda_order(a: &Meeting, b: &Meeting) -> Ordering {
    b.schedule
        .is_recurring()
        .cmp(&a.schedule.is_recurring())
        .then_with(|| a.schedule.first_date().cmp(&b.schedule.first_date()))
        .then_with(|| a.id.cmp(&b.id))
}
