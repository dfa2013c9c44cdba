//! Normalization of raw hospital records into the canonical schema.
//!
//! Dataset revisions have used Latin-script keys, Hangul keys, a `"24/7"`
//! string or a day map for hours, and both a missing field and `[]` for
//! "no resources". All of that is decided here, once, so the query engine
//! only ever sees [`Hospital`].

use crate::error::{DataDefect, LoadError};
use crate::models::{Day, Hospital, Hours, OperatingInterval, Position, ALWAYS_OPEN_SENTINEL};
use crate::schema_validation::check_record_shape;
use regex::Regex;
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::sync::OnceLock;
use tracing::{info, warn};

const NAME_KEYS: &[&str] = &["name", "이름", "병원명"];
const POSITION_KEYS: &[&str] = &["position", "위치", "coordinates"];
const LAT_KEYS: &[&str] = &["lat", "latitude", "위도"];
const LON_KEYS: &[&str] = &["lon", "lng", "longitude", "경도"];
const REGION_KEYS: &[&str] = &["region", "지역"];
const TYPE_KEYS: &[&str] = &["type", "종류", "유형"];
const ADDRESS_KEYS: &[&str] = &["address", "주소"];
const PHONE_KEYS: &[&str] = &["phone", "전화번호", "전화"];
const WEBSITE_KEYS: &[&str] = &["website", "홈페이지"];
const HOURS_KEYS: &[&str] = &["hours", "운영시간", "진료시간"];
const SPECIALTY_KEYS: &[&str] = &["specialties", "진료과목"];
const RESOURCE_KEYS: &[&str] = &["resources", "의료자원"];

/// Region assigned when neither a region nor an address is present
pub const UNKNOWN_REGION: &str = "기타";

/// Hospitals that survived ingestion plus every defect found on the way
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub hospitals: Vec<Hospital>,
    pub defects: Vec<DataDefect>,
}

impl Dataset {
    pub fn skipped_count(&self) -> usize {
        self.defects.iter().filter(|d| d.skipped()).count()
    }
}

/// Parse a JSON document and normalize every record in it
pub fn parse_dataset(text: &str) -> Result<Dataset, LoadError> {
    let document: Value = serde_json::from_str(text)?;
    ingest_document(&document)
}

/// Accepts either a bare array of records or `{"hospitals": [...]}`
pub fn ingest_document(document: &Value) -> Result<Dataset, LoadError> {
    let records = match document {
        Value::Array(records) => records,
        Value::Object(fields) => fields
            .get("hospitals")
            .and_then(Value::as_array)
            .ok_or(LoadError::NotAList)?,
        _ => return Err(LoadError::NotAList),
    };

    Ok(ingest_records(records))
}

/// Normalize records one by one; a bad record never aborts the batch
pub fn ingest_records(records: &[Value]) -> Dataset {
    let mut hospitals = Vec::with_capacity(records.len());
    let mut defects = Vec::new();

    for (idx, record) in records.iter().enumerate() {
        if let Some(hospital) = normalize_record(idx + 1, record, &mut defects) {
            hospitals.push(hospital);
        }
    }

    for defect in &defects {
        warn!(skipped = defect.skipped(), "{}", defect);
    }

    let dataset = Dataset { hospitals, defects };
    info!(
        loaded = dataset.hospitals.len(),
        skipped = dataset.skipped_count(),
        "Dataset ingested"
    );
    dataset
}

/// Normalize a single record. `index` is 1-based and only used in defects.
/// Returns `None` when the record lacks a name or a usable position.
pub fn normalize_record(
    index: usize,
    record: &Value,
    defects: &mut Vec<DataDefect>,
) -> Option<Hospital> {
    let Some(fields) = record.as_object() else {
        defects.push(DataDefect::NotAnObject { index });
        return None;
    };

    let Some(name) = first_str(fields, NAME_KEYS)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
    else {
        defects.push(DataDefect::MissingName { index });
        return None;
    };

    let Some(position) = read_position(fields).filter(Position::is_valid) else {
        defects.push(DataDefect::MissingPosition { index, name });
        return None;
    };

    let mut notes = check_record_shape(record).err().unwrap_or_default();

    let address = text_field(fields, ADDRESS_KEYS);
    let region = first_str(fields, REGION_KEYS)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .or_else(|| region_from_address(&address))
        .unwrap_or_else(|| UNKNOWN_REGION.to_string());

    let hours = match first_value(fields, HOURS_KEYS) {
        Some(value) => read_hours(value, &mut notes),
        None => Hours::default(),
    };

    let hospital = Hospital {
        position,
        region,
        kind: text_field(fields, TYPE_KEYS),
        address,
        phone: text_field(fields, PHONE_KEYS),
        website: first_str(fields, WEBSITE_KEYS)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from),
        hours,
        specialties: read_facet_list(first_value(fields, SPECIALTY_KEYS)),
        resources: read_facet_list(first_value(fields, RESOURCE_KEYS)),
        name,
    };

    defects.extend(notes.into_iter().map(|detail| DataDefect::Suspect {
        index,
        name: hospital.name.clone(),
        detail,
    }));

    Some(hospital)
}

/// First non-null value among the alias keys
fn first_value<'a>(fields: &'a Map<String, Value>, keys: &[&str]) -> Option<&'a Value> {
    keys.iter()
        .filter_map(|key| fields.get(*key))
        .find(|value| !value.is_null())
}

fn first_str<'a>(fields: &'a Map<String, Value>, keys: &[&str]) -> Option<&'a str> {
    first_value(fields, keys).and_then(Value::as_str)
}

fn text_field(fields: &Map<String, Value>, keys: &[&str]) -> String {
    first_str(fields, keys).unwrap_or_default().trim().to_string()
}

fn first_number(fields: &Map<String, Value>, keys: &[&str]) -> Option<f64> {
    first_value(fields, keys).and_then(Value::as_f64)
}

fn read_position(fields: &Map<String, Value>) -> Option<Position> {
    match first_value(fields, POSITION_KEYS) {
        Some(Value::Array(pair)) if pair.len() == 2 => {
            Some(Position::new(pair[0].as_f64()?, pair[1].as_f64()?))
        }
        Some(Value::Object(coords)) => Some(Position::new(
            first_number(coords, LAT_KEYS)?,
            first_number(coords, LON_KEYS)?,
        )),
        Some(_) => None,
        None => Some(Position::new(
            first_number(fields, LAT_KEYS)?,
            first_number(fields, LON_KEYS)?,
        )),
    }
}

/// Korean addresses lead with the province or metropolitan city
fn region_from_address(address: &str) -> Option<String> {
    address.split_whitespace().next().map(String::from)
}

/// A string or a list of strings; empty and non-string entries are dropped,
/// duplicates collapse to their first occurrence. Values are not trimmed or
/// case-folded: facets compare by exact equality.
fn read_facet_list(value: Option<&Value>) -> Vec<String> {
    let candidates: Vec<&str> = match value {
        Some(Value::String(s)) => vec![s.as_str()],
        Some(Value::Array(entries)) => entries.iter().filter_map(Value::as_str).collect(),
        _ => Vec::new(),
    };

    let mut values: Vec<String> = Vec::with_capacity(candidates.len());
    for candidate in candidates {
        if !candidate.is_empty() && !values.iter().any(|v| v == candidate) {
            values.push(candidate.to_string());
        }
    }
    values
}

fn time_of_day_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^([01]?\d|2[0-4]):[0-5]\d$").expect("valid time pattern"))
}

fn read_hours(value: &Value, notes: &mut Vec<String>) -> Hours {
    match value {
        Value::String(s) if is_always_open(s) => Hours::AlwaysOpen,
        Value::String(s) => {
            notes.push(format!("unrecognized hours '{}'", s));
            Hours::default()
        }
        Value::Object(days) => {
            let mut schedule = BTreeMap::new();
            for (key, interval) in days {
                let Some(day) = Day::parse(key) else {
                    notes.push(format!("unknown day '{}' in hours", key));
                    continue;
                };
                match read_interval(interval) {
                    Some(interval) => {
                        for time in [&interval.start, &interval.end] {
                            if !time_of_day_pattern().is_match(time) {
                                notes.push(format!("{}: unparseable time '{}'", day.key(), time));
                            }
                        }
                        schedule.insert(day, interval);
                    }
                    None => notes.push(format!("{}: interval needs 'start' and 'end'", day.key())),
                }
            }
            Hours::Scheduled(schedule)
        }
        _ => {
            notes.push("hours must be a day map or '24/7'".to_string());
            Hours::default()
        }
    }
}

fn is_always_open(s: &str) -> bool {
    let s = s.trim();
    s == ALWAYS_OPEN_SENTINEL || s == "24시간"
}

fn read_interval(value: &Value) -> Option<OperatingInterval> {
    let fields = value.as_object()?;
    let start = fields.get("start")?.as_str()?.trim().to_string();
    let end = fields.get("end")?.as_str()?.trim().to_string();
    let note = fields
        .get("note")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from);

    Some(OperatingInterval { start, end, note })
}
