use serde::{Deserialize, Serialize};

/// Days from planting to harvest under reference conditions.
///
/// `(0, 0)` is the unknown sentinel: it means the growing-days text could not
/// be interpreted, never "ready on the day of planting".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GrowthDurationInterval {
    early_days: u32,
    late_days: u32,
}

impl GrowthDurationInterval {
    pub const UNKNOWN: Self = Self {
        early_days: 0,
        late_days: 0,
    };

    /// Builds an interval from two day counts, in either order.
    pub fn new(a: u32, b: u32) -> Self {
        Self {
            early_days: a.min(b),
            late_days: a.max(b),
        }
    }

    pub fn single(days: u32) -> Self {
        Self::new(days, days)
    }

    pub fn early_days(&self) -> u32 {
        self.early_days
    }

    pub fn late_days(&self) -> u32 {
        self.late_days
    }

    pub fn is_unknown(&self) -> bool {
        *self == Self::UNKNOWN
    }
}

impl std::fmt::Display for GrowthDurationInterval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_unknown() {
            write!(f, "unknown")
        } else if self.early_days == self.late_days {
            write!(f, "{} days", self.early_days)
        } else {
            write!(f, "{}-{} days", self.early_days, self.late_days)
        }
    }
}
