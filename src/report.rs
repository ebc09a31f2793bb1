use crate::logic::calendar::{all_unknown, harvestable_weeks};
use crate::logic::HarvestEstimator;
use crate::models::{GrowInput, HarvestCalendarBand, HarvestEstimate, StatusKind};
use chrono::Datelike;
use std::fmt::Write;

const MISSING_DATA: &str = "requires cultivar growing days and a planted date";

fn month_initial(month: u32) -> char {
    match month {
        1 => 'J',
        2 => 'F',
        3 => 'M',
        4 => 'A',
        5 => 'M',
        6 => 'J',
        7 => 'J',
        8 => 'A',
        9 => 'S',
        10 => 'O',
        11 => 'N',
        12 => 'D',
        _ => ' ',
    }
}

pub fn render_estimate(grow: &GrowInput, estimate: &HarvestEstimate) -> String {
    let mut out = String::new();

    let _ = writeln!(
        out,
        "Growing days: {} ({})",
        estimate.duration,
        grow.growing_days.as_deref().unwrap_or("-")
    );
    if estimate.zone_offset != 0 {
        let _ = writeln!(out, "Zone offset:  {:+} days", estimate.zone_offset);
    }
    if let Some(planted) = grow.planted {
        let _ = writeln!(out, "Planted:      {}", planted.format("%b %d, %Y"));
    }

    match &estimate.window {
        Some(window) => {
            let _ = writeln!(out, "Harvest:      {} ({} days)", window, window.len_days());
            let _ = writeln!(
                out,
                "Status:       {} ({})",
                estimate.status.kind, estimate.status.label
            );
        }
        None => {
            let _ = writeln!(out, "Harvest:      unknown, {}", MISSING_DATA);
        }
    }

    out
}

/// Effective tuning of an estimator, for `fieldbook check`.
pub fn render_tuning(estimator: &HarvestEstimator) -> String {
    let zone = estimator.zone_tuning();
    let policy = estimator.policy();

    let mut out = String::new();
    let _ = writeln!(
        out,
        "  Zone adjustment: {} days per zone, capped at {} days",
        zone.days_per_zone, zone.max_offset_days
    );
    let _ = writeln!(
        out,
        "  Harvest tiers:   approaching {}d, good {}d, fair {}d",
        policy.approaching_days, policy.good_days, policy.fair_days
    );
    out
}

/// One row of month initials, one row of status glyphs, and a legend.
pub fn render_calendar(bands: &[HarvestCalendarBand]) -> String {
    if all_unknown(bands) {
        return format!("No harvest calendar: {}\n", MISSING_DATA);
    }

    let mut months = String::with_capacity(bands.len());
    let mut previous_month = None;
    for band in bands {
        let month = band.week_start.month();
        if previous_month != Some(month) {
            months.push(month_initial(month));
        } else {
            months.push(' ');
        }
        previous_month = Some(month);
    }

    let cells: String = bands.iter().map(|b| b.status.glyph()).collect();

    let year = bands
        .first()
        .map(|b| b.week_start.year().to_string())
        .unwrap_or_default();

    let mut out = String::new();
    let _ = writeln!(out, "Harvest calendar {}", year);
    let _ = writeln!(out, "  {}", months.trim_end());
    let _ = writeln!(out, "  {}", cells);
    let _ = writeln!(out);

    let legend: Vec<String> = StatusKind::ALL
        .iter()
        .filter(|kind| **kind != StatusKind::Unknown)
        .map(|kind| format!("{} {}", kind.glyph(), kind.as_str()))
        .collect();
    let _ = writeln!(out, "  {}", legend.join("  "));

    let weeks = harvestable_weeks(bands);
    match (weeks.first(), weeks.last()) {
        (Some(first), Some(last)) => {
            let _ = writeln!(out, "  Harvest weeks: {}-{}", first + 1, last + 1);
        }
        _ => {
            let _ = writeln!(out, "  No harvest weeks this season");
        }
    }

    out
}
