use crate::models::{GrowthDurationInterval, HarvestWindow};
use chrono::{Days, NaiveDate};

/// Projects a duration interval and zone offset onto the calendar.
///
/// Returns `None` when the duration is unknown or the dates fall outside the
/// representable calendar. Day counts are calendar days, so daylight-saving
/// changes never shift a date. A negative offset larger than the day count
/// puts the date before planting.
pub fn harvest_window(
    planted: NaiveDate,
    duration: GrowthDurationInterval,
    zone_offset: i32,
) -> Option<HarvestWindow> {
    if duration.is_unknown() {
        return None;
    }

    let early = add_adjusted_days(planted, duration.early_days(), zone_offset);
    let late = add_adjusted_days(planted, duration.late_days(), zone_offset);

    match (early, late) {
        (Some(early), Some(late)) => Some(HarvestWindow::new(early, late)),
        _ => {
            tracing::debug!(
                %planted,
                %duration,
                zone_offset,
                "Harvest window outside calendar range"
            );
            None
        }
    }
}

fn add_adjusted_days(planted: NaiveDate, days: u32, zone_offset: i32) -> Option<NaiveDate> {
    let adjusted = i64::from(days) + i64::from(zone_offset);
    if adjusted >= 0 {
        planted.checked_add_days(Days::new(adjusted.unsigned_abs()))
    } else {
        planted.checked_sub_days(Days::new(adjusted.unsigned_abs()))
    }
}
