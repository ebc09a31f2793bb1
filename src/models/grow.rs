use super::{GrowthDurationInterval, HarvestStatus, HarvestWindow};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The primitive fields of a grow record that harvest timing depends on.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrowInput {
    /// Cultivar growing-days text as imported, e.g. "75-85".
    pub growing_days: Option<String>,
    /// Cultivar optimal hardiness zone or range, e.g. "5-9".
    pub cultivar_zone: Option<String>,
    /// Hardiness zone the grow is actually in.
    pub grow_zone: Option<String>,
    pub planted: Option<NaiveDate>,
}

impl GrowInput {
    pub fn new(growing_days: impl Into<String>) -> Self {
        Self {
            growing_days: Some(growing_days.into()),
            ..Self::default()
        }
    }

    pub fn with_cultivar_zone(mut self, zone: impl Into<String>) -> Self {
        self.cultivar_zone = Some(zone.into());
        self
    }

    pub fn with_grow_zone(mut self, zone: impl Into<String>) -> Self {
        self.grow_zone = Some(zone.into());
        self
    }

    pub fn planted_on(mut self, date: NaiveDate) -> Self {
        self.planted = Some(date);
        self
    }
}

/// Everything a grow tile or detail screen shows about harvest timing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HarvestEstimate {
    pub duration: GrowthDurationInterval,
    pub zone_offset: i32,
    pub window: Option<HarvestWindow>,
    pub days_until: Option<i64>,
    pub status: HarvestStatus,
}
