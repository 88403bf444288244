use std::time::Duration;

use serde_json::Value;
use time::{OffsetDateTime, format_description::well_known::Rfc3339};

use crate::error::{EngineError, invalid_encoding};

/// Date interval scoping a history deletion. Decoded from the transport shape
/// `{ "startDate": <RFC3339>, "duration": <milliseconds> }`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryInterval {
    pub start: OffsetDateTime,
    pub duration: Duration,
}

impl HistoryInterval {
    pub fn decode(record: &Value) -> Result<Self, EngineError> {
        let start_text = record
            .get("startDate")
            .and_then(Value::as_str)
            .ok_or_else(|| invalid_encoding("interval record is missing 'startDate'"))?;
        let start = OffsetDateTime::parse(start_text, &Rfc3339)
            .map_err(|err| invalid_encoding(format!("invalid interval start date: {err}")))?;

        let duration_ms = match record.get("duration") {
            Some(Value::Number(number)) => number.as_f64(),
            Some(Value::String(text)) => text.parse::<f64>().ok(),
            _ => None,
        }
        .filter(|ms| ms.is_finite() && *ms >= 0.0)
        .ok_or_else(|| invalid_encoding("interval record is missing a valid 'duration'"))?;

        Ok(Self {
            start,
            duration: Duration::from_millis(duration_ms as u64),
        })
    }

    pub fn end(&self) -> OffsetDateTime {
        self.start + self.duration
    }
}
