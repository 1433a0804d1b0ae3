use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::check_in::CheckIn;

/// The single persisted unit: today's day key and its check-ins, in
/// insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayRecord {
    /// Day key (`YYYY-MM-DD`). A payload without it never matches today.
    #[serde(default)]
    pub date: String,

    #[serde(default)]
    pub records: Vec<CheckIn>,
}

impl DayRecord {
    pub fn empty(date: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            records: Vec::new(),
        }
    }

    /// Decode a stored payload.
    ///
    /// Only invalid JSON or a non-object document is an error. A missing or
    /// non-string `date` becomes an empty key (never today's); a missing,
    /// `null` or malformed `records` becomes an empty list.
    pub fn from_payload(raw: &str) -> Result<Self, serde_json::Error> {
        let value: Value = serde_json::from_str(raw)?;
        let mut map: Map<String, Value> = serde_json::from_value(value)?;

        let date = map
            .get("date")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();

        let records = map
            .remove("records")
            .and_then(|v| serde_json::from_value::<Vec<CheckIn>>(v).ok())
            .unwrap_or_default();

        Ok(Self { date, records })
    }
}

/// Borrowed view used when writing the slot, so persisting never clones
/// the record list.
#[derive(Debug, Serialize)]
pub(crate) struct DayRecordRef<'a> {
    pub date: &'a str,
    pub records: &'a [CheckIn],
}
