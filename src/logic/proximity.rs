use crate::models::{HarvestStatus, HarvestWindow, StatusKind};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Tier boundaries around a harvest window, in days.
///
/// - Approaching: `[early - approaching_days, early)`
/// - Best: `[early, late]`
/// - Good: `(late, late + good_days]`
/// - Fair: `(late + good_days, late + fair_days]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProximityPolicy {
    pub approaching_days: u32,
    pub good_days: u32,
    pub fair_days: u32,
}

impl Default for ProximityPolicy {
    fn default() -> Self {
        Self {
            approaching_days: 14,
            good_days: 7,
            fair_days: 21,
        }
    }
}

impl ProximityPolicy {
    pub fn classify(&self, window: Option<&HarvestWindow>, today: NaiveDate) -> StatusKind {
        let Some(window) = window else {
            return StatusKind::Unknown;
        };

        let since_early = (today - window.early_date()).num_days();
        let since_late = (today - window.late_date()).num_days();

        if since_early < -i64::from(self.approaching_days) {
            StatusKind::TooEarly
        } else if since_early < 0 {
            StatusKind::Approaching
        } else if since_late <= 0 {
            StatusKind::Best
        } else if since_late <= i64::from(self.good_days) {
            StatusKind::Good
        } else if since_late <= i64::from(self.fair_days) {
            StatusKind::Fair
        } else {
            StatusKind::Overdue
        }
    }

    pub fn status(&self, window: Option<&HarvestWindow>, today: NaiveDate) -> HarvestStatus {
        HarvestStatus::new(
            self.classify(window, today),
            days_until_harvest(window, today),
        )
    }
}

/// Whole days from `today` to the start of the window; negative once it opens.
pub fn days_until_harvest(window: Option<&HarvestWindow>, today: NaiveDate) -> Option<i64> {
    window.map(|w| (w.early_date() - today).num_days())
}

/// Classifies `today` against the window using the default tiers.
pub fn classify(window: Option<&HarvestWindow>, today: NaiveDate) -> StatusKind {
    ProximityPolicy::default().classify(window, today)
}

pub fn harvest_status(window: Option<&HarvestWindow>, today: NaiveDate) -> HarvestStatus {
    ProximityPolicy::default().status(window, today)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn march_window() -> HarvestWindow {
        HarvestWindow::new(date(2024, 3, 16), date(2024, 3, 26))
    }

    #[test]
    fn no_window_is_unknown() {
        assert_eq!(classify(None, date(2024, 3, 20)), StatusKind::Unknown);
        assert_eq!(days_until_harvest(None, date(2024, 3, 20)), None);
        assert_eq!(harvest_status(None, date(2024, 3, 20)).label, "Unknown");
    }

    #[test]
    fn tier_boundaries() {
        let w = march_window();
        let cases = [
            (date(2024, 3, 1), StatusKind::TooEarly),
            (date(2024, 3, 2), StatusKind::Approaching),
            (date(2024, 3, 15), StatusKind::Approaching),
            (date(2024, 3, 16), StatusKind::Best),
            (date(2024, 3, 26), StatusKind::Best),
            (date(2024, 3, 27), StatusKind::Good),
            (date(2024, 4, 2), StatusKind::Good),
            (date(2024, 4, 3), StatusKind::Fair),
            (date(2024, 4, 16), StatusKind::Fair),
            (date(2024, 4, 17), StatusKind::Overdue),
        ];
        for (today, expected) in cases {
            assert_eq!(classify(Some(&w), today), expected, "today = {}", today);
        }
    }

    #[test]
    fn days_until_counts_to_window_start() {
        let w = march_window();
        assert_eq!(days_until_harvest(Some(&w), date(2024, 3, 1)), Some(15));
        assert_eq!(days_until_harvest(Some(&w), date(2024, 3, 16)), Some(0));
        assert_eq!(days_until_harvest(Some(&w), date(2024, 3, 20)), Some(-4));
    }

    #[test]
    fn labels_follow_status() {
        let w = march_window();
        assert_eq!(harvest_status(Some(&w), date(2024, 3, 1)).label, "15 days");
        assert_eq!(harvest_status(Some(&w), date(2024, 3, 10)).label, "6 days");
        assert_eq!(harvest_status(Some(&w), date(2024, 3, 16)).label, "Ready!");
        assert_eq!(harvest_status(Some(&w), date(2024, 3, 20)).label, "Ready!");
        assert_eq!(harvest_status(Some(&w), date(2024, 3, 29)).label, "13 days");
        assert_eq!(harvest_status(Some(&w), date(2024, 6, 1)).label, "Overdue");
    }

    #[test]
    fn custom_policy_moves_boundaries() {
        let policy = ProximityPolicy {
            approaching_days: 3,
            good_days: 1,
            fair_days: 2,
        };
        let w = march_window();
        assert_eq!(policy.classify(Some(&w), date(2024, 3, 12)), StatusKind::TooEarly);
        assert_eq!(policy.classify(Some(&w), date(2024, 3, 13)), StatusKind::Approaching);
        assert_eq!(policy.classify(Some(&w), date(2024, 3, 27)), StatusKind::Good);
        assert_eq!(policy.classify(Some(&w), date(2024, 3, 28)), StatusKind::Fair);
        assert_eq!(policy.classify(Some(&w), date(2024, 3, 29)), StatusKind::Overdue);
    }

    #[test]
    fn zero_day_is_best() {
        let w = HarvestWindow::new(date(2024, 7, 7), date(2024, 7, 7));
        assert_eq!(days_until_harvest(Some(&w), date(2024, 7, 7)), Some(0));
        assert_eq!(classify(Some(&w), date(2024, 7, 7)), StatusKind::Best);
    }

    proptest! {
        #[test]
        fn classification_never_regresses(
            length in 0i64..60,
            start in -120i64..0,
            steps in proptest::collection::vec(0i64..10, 1..40),
        ) {
            let early = date(2024, 6, 1);
            let w = HarvestWindow::new(early, early + chrono::Duration::days(length));
            let mut today = early + chrono::Duration::days(start);
            let mut previous = classify(Some(&w), today);
            for step in steps {
                today += chrono::Duration::days(step);
                let current = classify(Some(&w), today);
                prop_assert!(current >= previous, "{:?} after {:?}", current, previous);
                previous = current;
            }
        }
    }
}
