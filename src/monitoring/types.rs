use std::str::FromStr;

use time::Time;

use crate::error::{EngineError, invalid_encoding};

/// Wall-clock time of day, parsed from "HH:MM".
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TimeOfDay(pub Time);

impl FromStr for TimeOfDay {
    type Err = EngineError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let (hour_text, minute_text) = input
            .split_once(':')
            .ok_or_else(|| invalid_encoding(format!("invalid time of day '{input}'")))?;
        let hour: u8 = hour_text
            .parse()
            .map_err(|_| invalid_encoding(format!("invalid time of day '{input}'")))?;
        let minute: u8 = minute_text
            .parse()
            .map_err(|_| invalid_encoding(format!("invalid time of day '{input}'")))?;
        let time = Time::from_hms(hour, minute, 0)
            .map_err(|_| invalid_encoding(format!("invalid time of day '{input}'")))?;
        Ok(Self(time))
    }
}

/// Daily-recurring interval handed to the platform scheduler. The engine
/// constructs it per call and keeps no reference afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonitoringWindow {
    pub start: TimeOfDay,
    pub end: TimeOfDay,
}

impl MonitoringWindow {
    pub fn daily(start: TimeOfDay, end: TimeOfDay) -> Self {
        Self { start, end }
    }
}
