//! Recurrence day set - which weekdays a recurring meeting repeats on
//!
//! Stored as a 7-bit set, one bit per weekday. Over the wire the set travels
//! as an array of numeric day codes (0 = Sunday .. 6 = Saturday), matching
//! what calendar clients send.

use bitflags::bitflags;
use serde::de::{SeqAccess, Visitor};
use serde::ser::SerializeSeq;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

bitflags! {
    /// Set of weekdays a recurring meeting occurs on
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct RecurrenceDays: u8 {
        /// Day code 0
        const SUNDAY = 1 << 0;
        /// Day code 1
        const MONDAY = 1 << 1;
        /// Day code 2
        const TUESDAY = 1 << 2;
        /// Day code 3
        const WEDNESDAY = 1 << 3;
        /// Day code 4
        const THURSDAY = 1 << 4;
        /// Day code 5
        const FRIDAY = 1 << 5;
        /// Day code 6
        const SATURDAY = 1 << 6;

        /// Monday through Friday
        const WEEKDAYS = Self::MONDAY.bits()
            | Self::TUESDAY.bits()
            | Self::WEDNESDAY.bits()
            | Self::THURSDAY.bits()
            | Self::FRIDAY.bits();

        /// Saturday and Sunday
        const WEEKEND = Self::SATURDAY.bits() | Self::SUNDAY.bits();
    }
}

/// Weekday names indexed by day code (0 = Sunday)
pub const DAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// Error for day codes outside 0..=6
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("invalid day code {0}, expected 0-6")]
pub struct DayCodeError(pub u8);

impl RecurrenceDays {
    /// Single day from its numeric code (0 = Sunday .. 6 = Saturday)
    pub fn from_code(code: u8) -> Result<Self, DayCodeError> {
        if code > 6 {
            return Err(DayCodeError(code));
        }
        Ok(Self::from_bits_truncate(1 << code))
    }

    /// Build a set from numeric codes; duplicates collapse
    pub fn from_codes(codes: &[u8]) -> Result<Self, DayCodeError> {
        let mut days = Self::empty();
        for &code in codes {
            days |= Self::from_code(code)?;
        }
        Ok(days)
    }

    /// Numeric codes in ascending order
    pub fn codes(&self) -> Vec<u8> {
        (0u8..7).filter(|code| self.bits() & (1 << code) != 0).collect()
    }

    /// Weekday names in ascending code order
    pub fn names(&self) -> Vec<&'static str> {
        self.codes().into_iter().map(|code| DAY_NAMES[code as usize]).collect()
    }

    /// Number of days in the set
    pub fn day_count(&self) -> u32 {
        self.bits().count_ones()
    }

    /// Whether the set contains the given calendar weekday
    pub fn contains_weekday(&self, weekday: chrono::Weekday) -> bool {
        let code = weekday.num_days_from_sunday() as u8;
        self.bits() & (1 << code) != 0
    }
}

// Serialize as an array of day codes for JSON
impl Serialize for RecurrenceDays {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let codes = self.codes();
        let mut seq = serializer.serialize_seq(Some(codes.len()))?;
        for code in codes {
            seq.serialize_element(&code)?;
        }
        seq.end()
    }
}

// Deserialize from an array of day codes
impl<'de> Deserialize<'de> for RecurrenceDays {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de;

        struct DaysVisitor;

        impl<'de> Visitor<'de> for DaysVisitor {
            type Value = RecurrenceDays;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("an array of day codes between 0 and 6")
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<RecurrenceDays, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let mut days = RecurrenceDays::empty();
                while let Some(code) = seq.next_element::<u8>()? {
                    days |= RecurrenceDays::from_code(code)
                        .map_err(|e| de::Error::custom(e.to_string()))?;
                }
                Ok(days)
            }
        }

        deserializer.deserialize_seq(DaysVisitor)
    }
}
