//! Agenda view-model - pure scheduling logic shared by the API and clients

pub mod format;
pub mod partition;

pub use format::{format_date_long, format_time_12h, join_names, schedule_summary};
pub use partition::{classify, partition, AgendaView, TimeFrame, TimeFrameParseError};
