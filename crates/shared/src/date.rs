use time::{Date, Duration, OffsetDateTime, macros::format_description};

use crate::Result;

/// Inclusive range of whole UTC days.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayRange {
    pub start: Date,
    pub end: Date,
}

impl DayRange {
    pub fn new(start: Date, end: Date) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, day: Date) -> bool {
        day >= self.start && day <= self.end
    }

    /// Seven consecutive days starting at `start`, cut short at [`Date::MAX`].
    pub fn week_from(start: Date) -> Self {
        Self {
            start,
            end: start.checked_add(Duration::days(6)).unwrap_or(Date::MAX),
        }
    }

    pub fn days(&self) -> impl Iterator<Item = Date> {
        let end = self.end;
        std::iter::successors(Some(self.start), move |day| {
            day.next_day().filter(|next| *next <= end)
        })
        .take_while(move |day| *day <= end)
    }
}

pub fn today() -> Date {
    OffsetDateTime::now_utc().date()
}

/// Parses a wire `YYYY-MM-DD` string as a UTC calendar day.
pub fn parse_day(value: &str) -> Result<Date> {
    Ok(Date::parse(
        value.trim(),
        format_description!("[year]-[month]-[day]"),
    )?)
}

pub fn format_day(day: Date) -> String {
    format!(
        "{:04}-{:02}-{:02}",
        day.year(),
        u8::from(day.month()),
        day.day()
    )
}

/// Monday..Sunday week containing `day`.
pub fn monday_week(day: Date) -> DayRange {
    let start = day
        .checked_sub(Duration::days(day.weekday().number_days_from_monday().into()))
        .unwrap_or(Date::MIN);
    DayRange::week_from(start)
}

/// Sunday..Saturday week containing `day`.
pub fn sunday_week(day: Date) -> DayRange {
    let start = day
        .checked_sub(Duration::days(day.weekday().number_days_from_sunday().into()))
        .unwrap_or(Date::MIN);
    DayRange::week_from(start)
}

/// Serde adapter writing a [`Date`] as `YYYY-MM-DD`.
pub mod day {
    use serde::{Deserialize, Deserializer, Serializer, de::Error};
    use time::Date;

    pub fn serialize<S: Serializer>(value: &Date, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::format_day(*value))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Date, D::Error> {
        let value = String::deserialize(deserializer)?;
        super::parse_day(&value).map_err(D::Error::custom)
    }
}

pub mod option_day {
    use serde::{Deserialize, Deserializer, Serializer, de::Error};
    use time::Date;

    pub fn serialize<S: Serializer>(value: &Option<Date>, serializer: S) -> Result<S::Ok, S::Error> {
        match value {
            Some(day) => serializer.serialize_some(&super::format_day(*day)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<Date>, D::Error> {
        match Option::<String>::deserialize(deserializer)? {
            Some(value) => super::parse_day(&value).map(Some).map_err(D::Error::custom),
            None => Ok(None),
        }
    }
}
