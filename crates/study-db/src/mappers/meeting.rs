//! Meeting entity <-> model mapper
//!
//! The schedule enum maps to sibling nullable columns. Reading back is
//! fallible: a row that violates the shape invariant (which the table check
//! constraint should prevent) surfaces as a database error instead of a
//! half-formed entity.

use chrono::NaiveDate;
use study_core::entities::{Meeting, MeetingSchedule};
use study_core::error::DomainError;
use study_core::value_objects::{Id, RecurrenceDays};

use crate::models::MeetingModel;

/// Schedule enum flattened to column values for database binds
#[derive(Debug, Clone, Copy)]
pub struct ScheduleColumns {
    pub is_recurring: bool,
    pub meeting_date: Option<NaiveDate>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub recurrence_days: Option<i16>,
}

impl ScheduleColumns {
    pub fn new(schedule: &MeetingSchedule) -> Self {
        match schedule {
            MeetingSchedule::OneTime { date } => Self {
                is_recurring: false,
                meeting_date: Some(*date),
                start_date: None,
                end_date: None,
                recurrence_days: None,
            },
            MeetingSchedule::Recurring {
                start_date,
                end_date,
                days,
            } => Self {
                is_recurring: true,
                meeting_date: None,
                start_date: Some(*start_date),
                end_date: Some(*end_date),
                recurrence_days: Some(i16::from(days.bits())),
            },
        }
    }
}

fn malformed_schedule(id: i64) -> DomainError {
    DomainError::DatabaseError(format!("meeting {id} has inconsistent schedule columns"))
}

fn schedule_from_columns(model: &MeetingModel) -> Result<MeetingSchedule, DomainError> {
    if model.is_recurring {
        match (model.start_date, model.end_date, model.recurrence_days) {
            (Some(start_date), Some(end_date), Some(bits)) => {
                let days = u8::try_from(bits)
                    .ok()
                    .and_then(RecurrenceDays::from_bits)
                    .ok_or_else(|| malformed_schedule(model.id))?;
                Ok(MeetingSchedule::Recurring {
                    start_date,
                    end_date,
                    days,
                })
            }
            _ => Err(malformed_schedule(model.id)),
        }
    } else {
        model
            .meeting_date
            .map(|date| MeetingSchedule::OneTime { date })
            .ok_or_else(|| malformed_schedule(model.id))
    }
}

/// Convert MeetingModel to Meeting entity, reassembling the schedule enum
impl TryFrom<MeetingModel> for Meeting {
    type Error = DomainError;

    fn try_from(model: MeetingModel) -> Result<Self, Self::Error> {
        let schedule = schedule_from_columns(&model)?;
        Ok(Meeting {
            id: Id::new(model.id),
            group_id: Id::new(model.group_id),
            name: model.name,
            description: model.description,
            location: model.location,
            start_time: model.start_time,
            end_time: model.end_time,
            schedule,
            created_by: Id::new(model.created_by),
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}
