use super::calendar::{build_calendar, unknown_calendar};
use super::duration::{DigitRunParser, DurationParser};
use super::proximity::ProximityPolicy;
use super::window::harvest_window;
use super::zone::{offset_days, ZoneTuning};
use crate::models::{GrowInput, HarvestCalendarBand, HarvestEstimate, HarvestStatus};
use chrono::NaiveDate;
use std::sync::Arc;

/// Harvest timing for grow records: estimate, days-until and calendar data.
///
/// Holds only tuning; every call recomputes from the grow's current fields.
#[derive(Clone)]
pub struct HarvestEstimator {
    parser: Arc<dyn DurationParser>,
    zone_tuning: ZoneTuning,
    policy: ProximityPolicy,
}

impl HarvestEstimator {
    pub fn new(zone_tuning: ZoneTuning, policy: ProximityPolicy) -> Self {
        Self {
            parser: Arc::new(DigitRunParser),
            zone_tuning,
            policy,
        }
    }

    /// Swaps the growing-days heuristic.
    pub fn with_parser(mut self, parser: impl DurationParser + 'static) -> Self {
        self.parser = Arc::new(parser);
        self
    }

    pub fn zone_tuning(&self) -> &ZoneTuning {
        &self.zone_tuning
    }

    pub fn policy(&self) -> &ProximityPolicy {
        &self.policy
    }

    pub fn estimate(&self, grow: &GrowInput, today: NaiveDate) -> HarvestEstimate {
        let duration = self.parser.parse(grow.growing_days.as_deref());
        let zone_offset = self.zone_offset(grow);

        let Some(planted) = grow.planted else {
            return HarvestEstimate {
                duration,
                zone_offset,
                window: None,
                days_until: None,
                status: HarvestStatus::unknown(),
            };
        };

        let window = harvest_window(planted, duration, zone_offset);
        let status = self.policy.status(window.as_ref(), today);
        let days_until = super::proximity::days_until_harvest(window.as_ref(), today);

        HarvestEstimate {
            duration,
            zone_offset,
            window,
            days_until,
            status,
        }
    }

    pub fn days_until(&self, grow: &GrowInput, today: NaiveDate) -> Option<i64> {
        self.estimate(grow, today).days_until
    }

    pub fn calendar(&self, grow: &GrowInput, today: NaiveDate) -> Vec<HarvestCalendarBand> {
        let Some(planted) = grow.planted else {
            return unknown_calendar(today);
        };

        let duration = self.parser.parse(grow.growing_days.as_deref());
        build_calendar(planted, duration, self.zone_offset(grow), today, &self.policy)
    }

    fn zone_offset(&self, grow: &GrowInput) -> i32 {
        offset_days(
            grow.cultivar_zone.as_deref(),
            grow.grow_zone.as_deref(),
            &self.zone_tuning,
        )
    }
}

impl Default for HarvestEstimator {
    fn default() -> Self {
        Self::new(ZoneTuning::default(), ProximityPolicy::default())
    }
}

impl std::fmt::Debug for HarvestEstimator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HarvestEstimator")
            .field("zone_tuning", &self.zone_tuning)
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}
