use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Calendar-day range in which harvest is expected to be viable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HarvestWindow {
    early_date: NaiveDate,
    late_date: NaiveDate,
}

impl HarvestWindow {
    /// Builds a window, collapsing an inverted range onto `early`.
    pub fn new(early: NaiveDate, late: NaiveDate) -> Self {
        Self {
            early_date: early,
            late_date: late.max(early),
        }
    }

    pub fn early_date(&self) -> NaiveDate {
        self.early_date
    }

    pub fn late_date(&self) -> NaiveDate {
        self.late_date
    }

    /// Window length in days, inclusive of both ends.
    pub fn len_days(&self) -> i64 {
        (self.late_date - self.early_date).num_days() + 1
    }
}

impl std::fmt::Display for HarvestWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.early_date == self.late_date {
            write!(f, "{}", self.early_date.format("%b %d, %Y"))
        } else {
            write!(
                f,
                "{} - {}",
                self.early_date.format("%b %d"),
                self.late_date.format("%b %d, %Y")
            )
        }
    }
}
