//! Data models and structures
//!
//! Defines the core data structures for itineraries, cities, consultation
//! leads, and process-wide configuration.

use crate::{Error, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

/// A validated trip plan returned by the generation adapter.
///
/// Instances are created fresh on every successful generation call and
/// owned by the caller; nothing is shared across requests.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Itinerary {
    pub title: String,
    /// Ordered day entries. Order is meaningful and expected to match the
    /// `day` field ascending, but out-of-order input is kept verbatim.
    pub days: Vec<DayPlan>,
    pub tips: Vec<String>,
}

/// One day's entry within an itinerary.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DayPlan {
    pub day: u32,
    pub activity: String,
    pub description: String,
}

impl Itinerary {
    /// Parse and validate a raw model payload into a typed itinerary.
    ///
    /// The payload is untrusted: the model may emit data inconsistent with
    /// the schema it was asked for. Invalid JSON fails with
    /// [`Error::MalformedPayload`]; a structural problem fails with
    /// [`Error::SchemaViolation`] naming the first offending field. There
    /// is no partial result.
    pub fn from_payload(text: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(text).map_err(Error::MalformedPayload)?;
        Self::from_value(&value)
    }

    fn from_value(value: &Value) -> Result<Self> {
        let root = value
            .as_object()
            .ok_or_else(|| schema_violation("$", "expected a JSON object"))?;

        let title = require_string(root, "title")?;
        if title.is_empty() {
            return Err(schema_violation("title", "must be a non-empty string"));
        }

        let days_value = root
            .get("days")
            .ok_or_else(|| schema_violation("days", "missing required field"))?;
        let day_entries = days_value
            .as_array()
            .ok_or_else(|| schema_violation("days", "expected an array"))?;

        // An empty days array is a valid degenerate itinerary.
        let mut days = Vec::with_capacity(day_entries.len());
        for (index, entry) in day_entries.iter().enumerate() {
            days.push(DayPlan::from_value(entry, index)?);
        }

        let tips_value = root
            .get("tips")
            .ok_or_else(|| schema_violation("tips", "missing required field"))?;
        let tip_entries = tips_value
            .as_array()
            .ok_or_else(|| schema_violation("tips", "expected an array"))?;

        let mut tips = Vec::with_capacity(tip_entries.len());
        for (index, tip) in tip_entries.iter().enumerate() {
            let tip = tip.as_str().ok_or_else(|| {
                schema_violation(&format!("tips[{}]", index), "expected a string")
            })?;
            tips.push(tip.to_string());
        }

        Ok(Self { title, days, tips })
    }
}

impl DayPlan {
    fn from_value(value: &Value, index: usize) -> Result<Self> {
        let field = |name: &str| format!("days[{}].{}", index, name);

        let entry = value
            .as_object()
            .ok_or_else(|| schema_violation(&format!("days[{}]", index), "expected an object"))?;

        let day_value = entry
            .get("day")
            .ok_or_else(|| schema_violation(&field("day"), "missing required field"))?;
        // Fractional and negative day numbers are type violations.
        let day = day_value
            .as_u64()
            .and_then(|day| u32::try_from(day).ok())
            .ok_or_else(|| schema_violation(&field("day"), "expected a non-negative integer"))?;

        let activity = require_string_at(entry, "activity", &field("activity"))?;
        let description = require_string_at(entry, "description", &field("description"))?;

        Ok(Self {
            day,
            activity,
            description,
        })
    }
}

fn schema_violation(field: &str, problem: &str) -> Error {
    Error::SchemaViolation(format!("{}: {}", field, problem))
}

fn require_string(object: &Map<String, Value>, field: &str) -> Result<String> {
    require_string_at(object, field, field)
}

fn require_string_at(object: &Map<String, Value>, field: &str, path: &str) -> Result<String> {
    let value = object
        .get(field)
        .ok_or_else(|| schema_violation(path, "missing required field"))?;
    let text = value
        .as_str()
        .ok_or_else(|| schema_violation(path, "expected a string"))?;
    Ok(text.to_string())
}

/// A curated city entry shown in the landing gallery.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct City {
    pub id: String,
    pub name: String,
    #[serde(rename = "engName")]
    pub eng_name: String,
    pub image: String,
    pub description: String,
    pub color: String,
}

/// Consultation request captured from the contact form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lead {
    pub name: String,
    pub phone: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kakao: Option<String>,
}

/// Acknowledgement returned for an accepted consultation lead.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeadReceipt {
    pub id: Uuid,
    pub name: String,
    pub received_at: DateTime<Utc>,
}

// Configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: String,
    pub model: String,
}

pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        Ok(Self {
            gemini_api_key: std::env::var("GEMINI_API_KEY")
                .map_err(|_| Error::Generic("GEMINI_API_KEY not set".to_string()))?,
            model: std::env::var("TRAVEL_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
        })
    }
}
