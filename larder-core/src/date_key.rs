//! Canonical day keys for the meal plan document.
//!
//! A [`DateKey`] identifies one calendar day and is rendered as `YYYY-MM-DD`.
//! There are two ways to derive one:
//!
//! - [`DateKey::from_date`] takes a calendar date as-is.
//! - [`DateKey::from_instant`] normalizes a zoned instant to UTC first and
//!   takes the UTC calendar date. This matches documents written by clients
//!   that key days off the UTC date of a timestamp. Close to midnight in a
//!   zone offset from UTC, the resulting key is the neighbouring day.
//!
//! Only years 0000 through 9999 have a `YYYY-MM-DD` form. Use
//! [`DateKey::try_from_date`] before storing a date from outside input.

use chrono::{DateTime, Datelike, NaiveDate, TimeZone, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

const KEY_FORMAT: &str = "%Y-%m-%d";
const KEY_YEARS: std::ops::RangeInclusive<i32> = 0..=9999;

/// A calendar day key in `YYYY-MM-DD` form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DateKey(NaiveDate);

impl DateKey {
    /// Key for a calendar date.
    pub fn from_date(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Key for a calendar date whose year fits the four-digit form.
    pub fn try_from_date(date: NaiveDate) -> Result<Self, String> {
        if Self::is_storable(date) {
            Ok(Self(date))
        } else {
            Err(format!(
                "Date {} is out of range. Years must be 0000 to 9999.",
                date
            ))
        }
    }

    /// Whether the key for `date` can be written and parsed back.
    pub fn is_storable(date: NaiveDate) -> bool {
        KEY_YEARS.contains(&date.year())
    }

    /// Key for the UTC calendar date of an instant.
    pub fn from_instant<Tz: TimeZone>(instant: &DateTime<Tz>) -> Self {
        Self(instant.with_timezone(&Utc).date_naive())
    }

    /// The calendar date this key names.
    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

impl From<NaiveDate> for DateKey {
    fn from(date: NaiveDate) -> Self {
        Self::from_date(date)
    }
}

impl fmt::Display for DateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(KEY_FORMAT))
    }
}

impl FromStr for DateKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // chrono accepts signs and unpadded fields; keys are always
        // four-digit years with zero-padded month and day
        let shape_ok = s.len() == 10
            && s.bytes().enumerate().all(|(i, b)| match i {
                4 | 7 => b == b'-',
                _ => b.is_ascii_digit(),
            });
        if !shape_ok {
            return Err(format!("Invalid date key '{}'. Use YYYY-MM-DD.", s));
        }
        NaiveDate::parse_from_str(s, KEY_FORMAT)
            .map(Self)
            .map_err(|_| format!("Invalid date key '{}'. Use YYYY-MM-DD.", s))
    }
}

impl Serialize for DateKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for DateKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
