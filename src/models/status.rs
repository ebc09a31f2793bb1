use serde::{Deserialize, Serialize};

/// Harvest suitability tier, ordered from earliest to latest in a season.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum StatusKind {
    Unknown,
    TooEarly,
    Approaching,
    Best,
    Good,
    Fair,
    Overdue,
}

impl StatusKind {
    pub const ALL: [StatusKind; 7] = [
        StatusKind::TooEarly,
        StatusKind::Approaching,
        StatusKind::Best,
        StatusKind::Good,
        StatusKind::Fair,
        StatusKind::Overdue,
        StatusKind::Unknown,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StatusKind::Unknown => "Unknown",
            StatusKind::TooEarly => "Too Early",
            StatusKind::Approaching => "Approaching",
            StatusKind::Best => "Best",
            StatusKind::Good => "Good",
            StatusKind::Fair => "Fair",
            StatusKind::Overdue => "Overdue",
        }
    }

    /// Single-cell marker used by the text heat map.
    pub fn glyph(&self) -> char {
        match self {
            StatusKind::Unknown => '?',
            StatusKind::TooEarly => '.',
            StatusKind::Approaching => '-',
            StatusKind::Best => '#',
            StatusKind::Good => '+',
            StatusKind::Fair => '~',
            StatusKind::Overdue => 'x',
        }
    }

    pub fn is_harvestable(&self) -> bool {
        matches!(self, StatusKind::Best | StatusKind::Good | StatusKind::Fair)
    }
}

impl std::fmt::Display for StatusKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A classified harvest status together with the text shown on grow tiles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HarvestStatus {
    pub kind: StatusKind,
    pub label: String,
}

impl HarvestStatus {
    pub fn unknown() -> Self {
        Self::new(StatusKind::Unknown, None)
    }

    /// Pairs a status with its display label.
    ///
    /// Inside the best window the count is clamped to zero and shown as
    /// "Ready!"; any other known status shows the absolute day count.
    /// The count always runs from the window's start, so for `Good` and
    /// `Fair` it is days since the window opened, not a countdown.
    pub fn new(kind: StatusKind, days_until: Option<i64>) -> Self {
        let label = match (kind, days_until) {
            (StatusKind::Best, _) => "Ready!".to_string(),
            (StatusKind::Overdue, _) => "Overdue".to_string(),
            (StatusKind::Unknown, _) | (_, None) => "Unknown".to_string(),
            (_, Some(days)) => format!("{} days", days.unsigned_abs()),
        };
        Self { kind, label }
    }
}

impl std::fmt::Display for HarvestStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn season_order() {
        assert!(StatusKind::TooEarly < StatusKind::Approaching);
        assert!(StatusKind::Approaching < StatusKind::Best);
        assert!(StatusKind::Best < StatusKind::Good);
        assert!(StatusKind::Good < StatusKind::Fair);
        assert!(StatusKind::Fair < StatusKind::Overdue);
    }

    #[test]
    fn labels() {
        assert_eq!(HarvestStatus::new(StatusKind::Best, Some(-4)).label, "Ready!");
        assert_eq!(HarvestStatus::new(StatusKind::Best, Some(0)).label, "Ready!");
        assert_eq!(HarvestStatus::new(StatusKind::Overdue, Some(-60)).label, "Overdue");
        assert_eq!(HarvestStatus::new(StatusKind::TooEarly, Some(57)).label, "57 days");
        assert_eq!(HarvestStatus::new(StatusKind::Good, Some(-13)).label, "13 days");
        assert_eq!(HarvestStatus::unknown().label, "Unknown");
        assert_eq!(HarvestStatus::unknown().kind, StatusKind::Unknown);
    }

    #[test]
    fn harvestable_tiers() {
        assert!(StatusKind::Best.is_harvestable());
        assert!(StatusKind::Fair.is_harvestable());
        assert!(!StatusKind::Approaching.is_harvestable());
        assert!(!StatusKind::Overdue.is_harvestable());
        assert!(!StatusKind::Unknown.is_harvestable());
    }
}
