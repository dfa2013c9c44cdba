use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Sentinel used in datasets for hospitals that never close
pub const ALWAYS_OPEN_SENTINEL: &str = "24/7";

/// Geographic coordinate pair, serialized as `[lat, lon]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Position {
    pub lat: f64,
    pub lon: f64,
}

impl Position {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Finite and within the WGS84 latitude/longitude ranges
    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lon.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lon)
    }
}

impl From<[f64; 2]> for Position {
    fn from([lat, lon]: [f64; 2]) -> Self {
        Self { lat, lon }
    }
}

impl From<Position> for [f64; 2] {
    fn from(p: Position) -> Self {
        [p.lat, p.lon]
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4}, {:.4}", self.lat, self.lon)
    }
}

/// Day identifier used as the key of a weekly schedule.
/// Declaration order is the display order (holiday last).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
    Holiday,
}

impl Day {
    pub const ALL: [Day; 8] = [
        Day::Monday,
        Day::Tuesday,
        Day::Wednesday,
        Day::Thursday,
        Day::Friday,
        Day::Saturday,
        Day::Sunday,
        Day::Holiday,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Day::Monday => "monday",
            Day::Tuesday => "tuesday",
            Day::Wednesday => "wednesday",
            Day::Thursday => "thursday",
            Day::Friday => "friday",
            Day::Saturday => "saturday",
            Day::Sunday => "sunday",
            Day::Holiday => "holiday",
        }
    }

    pub fn korean_label(&self) -> &'static str {
        match self {
            Day::Monday => "월요일",
            Day::Tuesday => "화요일",
            Day::Wednesday => "수요일",
            Day::Thursday => "목요일",
            Day::Friday => "금요일",
            Day::Saturday => "토요일",
            Day::Sunday => "일요일",
            Day::Holiday => "공휴일",
        }
    }

    /// Parse an English key, a Korean label, or a one-syllable Korean abbreviation
    pub fn parse(s: &str) -> Option<Day> {
        let s = s.trim();
        Day::ALL.into_iter().find(|day| {
            day.key().eq_ignore_ascii_case(s)
                || day.korean_label() == s
                || day.korean_label().chars().next().map(String::from).as_deref() == Some(s)
        })
    }
}

/// Opening interval for a single day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperatingInterval {
    pub start: String,
    pub end: String,
    /// Free-text qualifier such as a recurrence rule ("1, 3 째주")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Operating hours: either a per-day schedule or continuous availability.
///
/// `AlwaysOpen` is serialized as the `"24/7"` string and is never treated
/// as a day-keyed mapping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "HoursRepr", into = "HoursRepr")]
pub enum Hours {
    Scheduled(BTreeMap<Day, OperatingInterval>),
    AlwaysOpen,
}

impl Hours {
    pub fn is_always_open(&self) -> bool {
        matches!(self, Hours::AlwaysOpen)
    }

    /// Declared days in display order; empty for `AlwaysOpen`
    pub fn schedule(&self) -> Option<&BTreeMap<Day, OperatingInterval>> {
        match self {
            Hours::Scheduled(days) => Some(days),
            Hours::AlwaysOpen => None,
        }
    }
}

impl Default for Hours {
    fn default() -> Self {
        Hours::Scheduled(BTreeMap::new())
    }
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum HoursRepr {
    Sentinel(String),
    Days(BTreeMap<Day, OperatingInterval>),
}

impl TryFrom<HoursRepr> for Hours {
    type Error = String;

    fn try_from(repr: HoursRepr) -> Result<Self, Self::Error> {
        match repr {
            HoursRepr::Sentinel(s) if s == ALWAYS_OPEN_SENTINEL => Ok(Hours::AlwaysOpen),
            HoursRepr::Sentinel(s) => Err(format!(
                "unrecognized hours value '{}', expected '{}' or a day map",
                s, ALWAYS_OPEN_SENTINEL
            )),
            HoursRepr::Days(days) => Ok(Hours::Scheduled(days)),
        }
    }
}

impl From<Hours> for HoursRepr {
    fn from(hours: Hours) -> Self {
        match hours {
            Hours::AlwaysOpen => HoursRepr::Sentinel(ALWAYS_OPEN_SENTINEL.to_string()),
            Hours::Scheduled(days) => HoursRepr::Days(days),
        }
    }
}

/// A children's emergency hospital in the canonical schema
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hospital {
    pub name: String,
    pub position: Position,
    pub region: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default)]
    pub hours: Hours,
    #[serde(default)]
    pub specialties: Vec<String>,
    /// Empty means "no declared resources"
    #[serde(default)]
    pub resources: Vec<String>,
}

impl Hospital {
    pub fn has_specialty(&self, value: &str) -> bool {
        self.specialties.iter().any(|s| s == value)
    }

    pub fn has_resource(&self, value: &str) -> bool {
        self.resources.iter().any(|r| r == value)
    }
}
