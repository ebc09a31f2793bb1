use super::StatusKind;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub const WEEKS_PER_YEAR: usize = 52;

/// Harvest suitability for one week of the season's heat map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HarvestCalendarBand {
    pub week_index: u8,
    pub week_start: NaiveDate,
    pub status: StatusKind,
}
