//! Meeting entity - a scheduled session belonging to a study group
//!
//! A meeting is either a one-time session on a single calendar date, or a
//! recurring session that repeats on a weekday set between a start and end
//! date. The two shapes are mutually exclusive and carry only their own
//! fields, so an ill-formed mix (a recurring meeting with no end date, a
//! one-time meeting with a weekday set) cannot be represented.

use chrono::{DateTime, Datelike, NaiveDate, NaiveTime, Utc};

use crate::error::DomainError;
use crate::value_objects::{Id, RecurrenceDays};

/// When a meeting takes place on the calendar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeetingSchedule {
    /// Single session on one date
    OneTime { date: NaiveDate },
    /// Repeats on `days` every week from `start_date` through `end_date`
    Recurring {
        start_date: NaiveDate,
        end_date: NaiveDate,
        days: RecurrenceDays,
    },
}

impl MeetingSchedule {
    #[inline]
    pub fn is_recurring(&self) -> bool {
        matches!(self, Self::Recurring { .. })
    }

    /// First calendar date the meeting can occur
    pub fn first_date(&self) -> NaiveDate {
        match self {
            Self::OneTime { date } => *date,
            Self::Recurring { start_date, .. } => *start_date,
        }
    }

    /// Last calendar date the meeting can occur
    pub fn last_date(&self) -> NaiveDate {
        match self {
            Self::OneTime { date } => *date,
            Self::Recurring { end_date, .. } => *end_date,
        }
    }

    /// Whether the meeting has a session on the given date
    pub fn occurs_on(&self, date: NaiveDate) -> bool {
        match self {
            Self::OneTime { date: d } => *d == date,
            Self::Recurring {
                start_date,
                end_date,
                days,
            } => *start_date <= date && date <= *end_date && days.contains_weekday(date.weekday()),
        }
    }

    /// Check the shape invariants
    pub fn validate(&self) -> Result<(), DomainError> {
        match self {
            Self::OneTime { .. } => Ok(()),
            Self::Recurring {
                start_date,
                end_date,
                days,
            } => {
                if end_date < start_date {
                    return Err(DomainError::ValidationError(
                        "recurrence end date must not be before start date".to_string(),
                    ));
                }
                if days.is_empty() {
                    return Err(DomainError::ValidationError(
                        "recurring meetings need at least one weekday".to_string(),
                    ));
                }
                Ok(())
            }
        }
    }
}

/// Meeting entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Meeting {
    pub id: Id,
    pub group_id: Id,
    pub name: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub schedule: MeetingSchedule,
    pub created_by: Id,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Meeting {
    /// Whether the caller may edit or delete this meeting
    /// (the meeting creator and the group owner may)
    #[inline]
    pub fn can_modify(&self, caller_id: Id, group_owner_id: Id) -> bool {
        self.created_by == caller_id || caller_id == group_owner_id
    }
}

/// Fields for inserting a meeting; the group and creator are supplied by the
/// caller and the database assigns the id
#[derive(Debug, Clone)]
pub struct NewMeeting {
    pub name: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub schedule: MeetingSchedule,
    /// Existing tag ids to associate in the creation transaction
    pub tag_ids: Vec<Id>,
}

impl NewMeeting {
    /// Check time ordering and schedule shape
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.end_time <= self.start_time {
            return Err(DomainError::ValidationError(
                "meeting end time must be after start time".to_string(),
            ));
        }
        self.schedule.validate()
    }
}
