use crate::models::GrowthDurationInterval;
use regex_lite::Regex;
use std::sync::LazyLock;

static DIGIT_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+").expect("digit run pattern is valid"));

/// Turns a cultivar's free-text growing-days field into a day interval.
///
/// Implementations must be total: text they cannot interpret maps to
/// [`GrowthDurationInterval::UNKNOWN`].
pub trait DurationParser: Send + Sync {
    fn parse(&self, text: Option<&str>) -> GrowthDurationInterval;
}

/// Reads the first two runs of decimal digits as `early` and `late`.
///
/// - no digits: unknown
/// - one run `n`: `(n, n)`
/// - two or more runs: the first two, swapped if reversed ("85-75")
///
/// Numbers are not disambiguated: a year in free text ("best sown 2024,
/// 60 days") is read as a day count. Runs too large for `u32` saturate and
/// later fail window arithmetic, which also reads as unknown.
#[derive(Debug, Clone, Copy, Default)]
pub struct DigitRunParser;

impl DurationParser for DigitRunParser {
    fn parse(&self, text: Option<&str>) -> GrowthDurationInterval {
        let Some(text) = text else {
            return GrowthDurationInterval::UNKNOWN;
        };

        let mut runs = DIGIT_RUN
            .find_iter(text)
            .map(|m| m.as_str().parse::<u32>().unwrap_or(u32::MAX));

        match (runs.next(), runs.next()) {
            (None, _) => {
                tracing::debug!(text, "No day count in growing days text");
                GrowthDurationInterval::UNKNOWN
            }
            (Some(n), None) => GrowthDurationInterval::single(n),
            (Some(a), Some(b)) => {
                if a > b {
                    tracing::debug!(text, early = b, late = a, "Reversed growing days range");
                }
                GrowthDurationInterval::new(a, b)
            }
        }
    }
}

/// Parses growing-days text with the default [`DigitRunParser`].
pub fn parse_growing_days(text: Option<&str>) -> GrowthDurationInterval {
    DigitRunParser.parse(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn parsed(text: &str) -> (u32, u32) {
        let interval = parse_growing_days(Some(text));
        (interval.early_days(), interval.late_days())
    }

    #[test]
    fn range() {
        assert_eq!(parsed("75-85"), (75, 85));
        assert_eq!(parsed("75 - 85 days"), (75, 85));
        assert_eq!(parsed("75 to 85"), (75, 85));
    }

    #[test]
    fn single_value() {
        assert_eq!(parsed("60"), (60, 60));
        assert_eq!(parsed("approx. 90 days"), (90, 90));
    }

    #[test]
    fn reversed_range_is_swapped() {
        assert_eq!(parsed("85-75"), (75, 85));
    }

    #[test]
    fn extra_runs_are_ignored() {
        assert_eq!(parsed("60-70 (up to 100 in cool weather)"), (60, 70));
    }

    #[test]
    fn unknown_inputs() {
        assert!(parse_growing_days(None).is_unknown());
        assert!(parse_growing_days(Some("")).is_unknown());
        assert!(parse_growing_days(Some("N/A")).is_unknown());
        assert!(parse_growing_days(Some("   ")).is_unknown());
    }

    #[test]
    fn embedded_year_is_not_filtered() {
        assert_eq!(parsed("2024 trial: 60 days"), (60, 2024));
    }

    #[test]
    fn oversized_run_saturates() {
        assert_eq!(parsed("99999999999"), (u32::MAX, u32::MAX));
    }

    proptest! {
        #[test]
        fn one_run_yields_point_interval(n in 0u32..100_000, prefix in "[a-z ]{0,6}", suffix in "[a-z .]{0,6}") {
            let text = format!("{}{}{}", prefix, n, suffix);
            prop_assert_eq!(parsed(&text), (n, n));
        }

        #[test]
        fn two_runs_yield_ordered_interval(a in 0u32..100_000, b in 0u32..100_000, sep in "[-/ a-z]{1,4}") {
            let text = format!("{}{}{}", a, sep, b);
            prop_assert_eq!(parsed(&text), (a.min(b), a.max(b)));
        }

        #[test]
        fn text_without_digits_is_unknown(text in "[^0-9]{0,20}") {
            prop_assert!(parse_growing_days(Some(&text)).is_unknown());
        }
    }
}
