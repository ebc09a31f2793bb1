use regex_lite::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

static ZONE_CODE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\s*(?:zone\s*)?([0-9]+)\s*[ab]?(?:\s*(?:-|to)\s*([0-9]+)\s*[ab]?)?")
        .expect("zone code pattern is valid")
});

const MIN_ZONE: u8 = 1;
const MAX_ZONE: u8 = 13;

/// Day shift per hardiness-zone step between a cultivar's optimal range and
/// the zone it is grown in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ZoneTuning {
    pub days_per_zone: u32,
    pub max_offset_days: u32,
}

impl Default for ZoneTuning {
    fn default() -> Self {
        Self {
            days_per_zone: 7,
            max_offset_days: 28,
        }
    }
}

/// Inclusive range of USDA hardiness zone numbers; subzone letters are dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZoneRange {
    pub min: u8,
    pub max: u8,
}

impl ZoneRange {
    /// Parses "5", "5a", "Zone 6b", "5-9" or "4a to 8b".
    pub fn parse(code: &str) -> Option<Self> {
        let caps = ZONE_CODE.captures(code)?;
        let first = parse_zone_number(caps.get(1)?.as_str())?;
        let second = match caps.get(2) {
            Some(m) => parse_zone_number(m.as_str())?,
            None => first,
        };
        Some(Self {
            min: first.min(second),
            max: first.max(second),
        })
    }

    pub fn contains(&self, zone: u8) -> bool {
        (self.min..=self.max).contains(&zone)
    }
}

fn parse_zone_number(s: &str) -> Option<u8> {
    s.parse::<u8>()
        .ok()
        .filter(|n| (MIN_ZONE..=MAX_ZONE).contains(n))
}

/// Leading zone number of a single zone code. A range yields its lower bound.
pub fn zone_number(code: &str) -> Option<u8> {
    ZoneRange::parse(code).map(|range| range.min)
}

/// Signed day offset for growing a cultivar outside its optimal zones.
///
/// Colder than the cultivar's minimum delays maturity; warmer than its
/// maximum brings it forward. Each zone step is worth
/// `tuning.days_per_zone`, capped at `tuning.max_offset_days` either way.
/// Missing or unparseable zones give no adjustment.
pub fn offset_days(zone: Option<&str>, reference_zone: Option<&str>, tuning: &ZoneTuning) -> i32 {
    let (Some(zone), Some(reference)) = (zone, reference_zone) else {
        return 0;
    };

    let Some(optimal) = ZoneRange::parse(zone) else {
        tracing::debug!(zone, "Unparseable cultivar zone, no adjustment");
        return 0;
    };
    let Some(actual) = zone_number(reference) else {
        tracing::debug!(zone = reference, "Unparseable grow zone, no adjustment");
        return 0;
    };

    let steps = if optimal.contains(actual) {
        0
    } else if actual < optimal.min {
        i64::from(optimal.min - actual)
    } else {
        -i64::from(actual - optimal.max)
    };

    let cap = i64::from(tuning.max_offset_days);
    let offset = (steps * i64::from(tuning.days_per_zone)).clamp(-cap, cap);
    // cap is at most u32::MAX, so the clamped value may still exceed i32
    offset.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}
