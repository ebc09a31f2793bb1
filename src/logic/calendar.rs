use super::proximity::ProximityPolicy;
use super::window::harvest_window;
use crate::models::{
    GrowthDurationInterval, HarvestCalendarBand, HarvestWindow, StatusKind, WEEKS_PER_YEAR,
};
use chrono::{Datelike, Duration, NaiveDate};

/// First day of week `week` (0-based) of the year that `year_start` opens.
pub fn week_start(year_start: NaiveDate, week: usize) -> NaiveDate {
    year_start + Duration::days(7 * week as i64)
}

/// Moves a planting date onto the same month and day of `year`.
///
/// February 29 lands on February 28 in non-leap years.
pub fn anchor_to_year(planted: NaiveDate, year: i32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, planted.month(), planted.day())
        .or_else(|| NaiveDate::from_ymd_opt(year, planted.month(), 28))
}

/// Week-by-week harvest suitability for the season containing `today`.
///
/// The grow is drawn as if planted this season on the same day of the year,
/// and each week's first day is classified as though it were "today".
/// An unknown duration yields 52 `Unknown` bands.
pub fn build_calendar(
    planted: NaiveDate,
    duration: GrowthDurationInterval,
    zone_offset: i32,
    today: NaiveDate,
    policy: &ProximityPolicy,
) -> Vec<HarvestCalendarBand> {
    let window = anchor_to_year(planted, today.year())
        .and_then(|anchored| harvest_window(anchored, duration, zone_offset));

    tracing::trace!(year = today.year(), ?window, "Building harvest calendar");

    calendar_for_window(window.as_ref(), today, policy)
}

/// Classifies every week of the year containing `today` against `window`.
pub fn calendar_for_window(
    window: Option<&HarvestWindow>,
    today: NaiveDate,
    policy: &ProximityPolicy,
) -> Vec<HarvestCalendarBand> {
    let year_start = today - Duration::days(i64::from(today.ordinal0()));

    (0..WEEKS_PER_YEAR)
        .map(|week| {
            let start = week_start(year_start, week);
            HarvestCalendarBand {
                week_index: week as u8,
                week_start: start,
                status: policy.classify(window, start),
            }
        })
        .collect()
}

/// Calendar with every band `Unknown`, for grows missing a planted date.
pub fn unknown_calendar(today: NaiveDate) -> Vec<HarvestCalendarBand> {
    calendar_for_window(None, today, &ProximityPolicy::default())
}

/// The harvestable weeks of a calendar, for "best weeks" summaries.
pub fn harvestable_weeks(bands: &[HarvestCalendarBand]) -> Vec<u8> {
    bands
        .iter()
        .filter(|b| b.status.is_harvestable())
        .map(|b| b.week_index)
        .collect()
}

pub fn all_unknown(bands: &[HarvestCalendarBand]) -> bool {
    bands.iter().all(|b| b.status == StatusKind::Unknown)
}
