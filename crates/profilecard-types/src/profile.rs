//! The user record returned by the random-user API.
//!
//! Only the fields the card displays are typed. Everything else the API sends
//! is kept in the `extra` maps, so a profile serializes back to the record it
//! was decoded from.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: PersonName,
    pub login: Login,
    pub email: String,
    pub phone: String,
    pub location: Location,
    pub dob: DateOfBirth,
    pub picture: Picture,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl UserProfile {
    /// "Ada Lovelace"
    pub fn full_name(&self) -> String {
        format!("{} {}", self.name.first, self.name.last)
    }

    /// "@username"
    pub fn handle(&self) -> String {
        format!("@{}", self.login.username)
    }

    /// "City, Country"
    pub fn place(&self) -> String {
        format!("{}, {}", self.location.city, self.location.country)
    }

    pub fn born_on(&self) -> NaiveDate {
        self.dob.date.date_naive()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonName {
    pub first: String,
    pub last: String,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Login {
    pub username: String,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub city: String,
    pub country: String,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DateOfBirth {
    pub date: Timestamp,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Picture {
    /// URL of the large portrait
    pub large: String,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// An ISO-8601 timestamp that remembers its original spelling.
///
/// Accepts RFC 3339, a date-time without offset, or a bare date. Anything
/// else makes the whole record malformed. Encoding writes the original
/// string back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timestamp {
    raw: String,
    date: NaiveDate,
}

impl Timestamp {
    pub fn parse(raw: impl Into<String>) -> Result<Self, chrono::ParseError> {
        let raw = raw.into();
        let date = match DateTime::parse_from_rfc3339(&raw) {
            Ok(value) => value.date_naive(),
            Err(rfc3339_err) => NaiveDateTime::parse_from_str(&raw, "%Y-%m-%dT%H:%M:%S%.f")
                .map(|value| value.date())
                .or_else(|_| NaiveDate::parse_from_str(&raw, "%Y-%m-%d"))
                .map_err(|_| rfc3339_err)?,
        };
        Ok(Self { raw, date })
    }

    /// Calendar date as written, ignoring any offset.
    pub fn date_naive(&self) -> NaiveDate {
        self.date
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.raw)
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Timestamp::parse(raw).map_err(serde::de::Error::custom)
    }
}
