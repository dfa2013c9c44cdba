use serde_json::{json, Value};
use std::sync::OnceLock;

/// Validate data against JSON Schema
/// Returns Ok(()) if valid, Err with list of validation errors if invalid
pub fn validate_against_schema(schema: &Value, data: &Value) -> Result<(), Vec<String>> {
    let compiled = jsonschema::validator_for(schema)
        .map_err(|e| vec![format!("Schema compilation error: {}", e)])?;

    match compiled.validate(data) {
        Ok(()) => Ok(()),
        Err(error) => {
            let path_str = error.instance_path.to_string();
            let location = if path_str.is_empty() {
                "root".to_string()
            } else {
                path_str
            };
            Err(vec![format!("{} at {}", error, location)])
        }
    }
}

/// Schema for a single raw hospital record.
/// Covers both the Latin-key and Hangul-key field names; no field is
/// required here because missing name/position is decided during ingestion.
pub fn record_schema() -> &'static Value {
    static SCHEMA: OnceLock<Value> = OnceLock::new();
    SCHEMA.get_or_init(|| {
        let text = json!({"type": "string"});
        let facet_list = json!({
            "anyOf": [
                {"type": "string"},
                {"type": "array", "items": {"type": "string"}},
                {"type": "null"}
            ]
        });
        let position = json!({
            "anyOf": [
                {"type": "array", "items": {"type": "number"}, "minItems": 2, "maxItems": 2},
                {"type": "object"}
            ]
        });
        let hours = json!({"anyOf": [{"type": "string"}, {"type": "object"}]});

        json!({
            "$schema": "http://json-schema.org/draft-07/schema#",
            "type": "object",
            "properties": {
                "name": {"type": "string", "minLength": 1},
                "이름": {"type": "string", "minLength": 1},
                "병원명": {"type": "string", "minLength": 1},
                "position": position.clone(),
                "위치": position.clone(),
                "coordinates": position.clone(),
                "region": text.clone(),
                "지역": text.clone(),
                "type": text.clone(),
                "address": text.clone(),
                "주소": text.clone(),
                "phone": text.clone(),
                "전화번호": text.clone(),
                "website": text.clone(),
                "홈페이지": text.clone(),
                "hours": hours.clone(),
                "운영시간": hours.clone(),
                "진료시간": hours.clone(),
                "specialties": facet_list.clone(),
                "진료과목": facet_list.clone(),
                "resources": facet_list.clone(),
                "의료자원": facet_list.clone()
            }
        })
    })
}

/// Check one raw record against `record_schema`
pub fn check_record_shape(record: &Value) -> Result<(), Vec<String>> {
    validate_against_schema(record_schema(), record)
}
