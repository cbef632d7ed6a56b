//! # Gestational Timeline
//!
//! Pure date arithmetic behind every week-dependent screen: converting between the
//! LMP and the due date, the current week and trimester, progress towards term, and
//! the size-comparison record for a week.
//!
//! Nothing in here reads the clock or touches storage. "Today" and the reference
//! table are always passed in, so every result is reproducible.
//!
//! ## Module Organization
//!
//! - **dates**: calendar-day difference and offset
//! - **anchor**: LMP/due-date conversion and the [`GestationAnchor`] type
//! - **week**: current week, days into the week, trimester
//! - **progress**: percentage of term and weeks remaining
//! - **development**: nearest-week lookup into the reference table
//! - **reference_data**: the built-in reference table

pub mod anchor;
pub mod dates;
pub mod development;
pub mod progress;
pub mod reference_data;
pub mod week;

pub use anchor::*;
pub use dates::*;
pub use development::*;
pub use progress::*;
pub use week::*;

use chrono::NaiveDate;
use shared::{DevelopmentRecord, Trimester};

/// All derived values for one anchor on one day
#[derive(Debug, Clone, PartialEq)]
pub struct Timeline {
    pub anchor: GestationAnchor,
    pub today: NaiveDate,
    pub week: u32,
    pub days_into_week: u32,
    pub trimester: Trimester,
    pub progress: Progress,
    pub development: DevelopmentRecord,
}

impl Timeline {
    pub fn compute(
        anchor: GestationAnchor,
        today: NaiveDate,
        table: &DevelopmentTable,
        comparison_floor: u32,
    ) -> Self {
        let week = current_week(&anchor, today);

        Self {
            anchor,
            today,
            week,
            days_into_week: days_into_week(&anchor, today),
            trimester: trimester_for_week(week),
            progress: Progress::from_week(week),
            development: resolve(week, table, comparison_floor),
        }
    }

    pub fn lmp(&self) -> NaiveDate {
        self.anchor.lmp()
    }

    pub fn due_date(&self) -> NaiveDate {
        self.anchor.due_date()
    }

    /// Calendar days until the due date, negative once it has passed
    pub fn days_until_due(&self) -> i64 {
        days_between(self.today, self.due_date())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_compute_third_trimester_day() {
        let table = reference_data::builtin_table();
        let timeline = Timeline::compute(
            GestationAnchor::Lmp(date(2024, 1, 1)),
            date(2024, 9, 1),
            &table,
            DEFAULT_COMPARISON_FLOOR,
        );

        assert_eq!(timeline.week, 34);
        assert_eq!(timeline.days_into_week, 6);
        assert_eq!(timeline.trimester, Trimester::Third);
        assert_eq!(timeline.progress.percentage, 85.0);
        assert_eq!(timeline.progress.weeks_remaining, 6);
        assert_eq!(timeline.development.week, 34);
        assert_eq!(timeline.due_date(), date(2024, 10, 7));
        assert_eq!(timeline.days_until_due(), 36);
    }

    #[test]
    fn test_compute_before_lmp() {
        let table = reference_data::builtin_table();
        let timeline = Timeline::compute(
            GestationAnchor::DueDate(date(2025, 10, 7)),
            date(2024, 12, 1),
            &table,
            DEFAULT_COMPARISON_FLOOR,
        );

        assert_eq!(timeline.week, 0);
        assert_eq!(timeline.trimester, Trimester::First);
        assert_eq!(timeline.progress.weeks_remaining, 40);
        assert_eq!(timeline.development, too_early_record());
        assert_eq!(timeline.lmp(), date(2024, 12, 31));
    }

    #[test]
    fn test_compute_past_due_date() {
        let table = reference_data::builtin_table();
        let timeline = Timeline::compute(
            GestationAnchor::Lmp(date(2024, 1, 1)),
            date(2024, 10, 21),
            &table,
            DEFAULT_COMPARISON_FLOOR,
        );

        assert_eq!(timeline.week, 42);
        assert!(timeline.progress.is_term_reached());
        assert_eq!(timeline.days_until_due(), -14);
        assert_eq!(timeline.development.week, 40);
    }
}
