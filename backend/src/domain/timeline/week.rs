//! Gestational week and trimester derivation.

use chrono::NaiveDate;
use shared::Trimester;

use super::anchor::GestationAnchor;
use super::dates::days_between;

/// Last week that still counts as the first trimester
pub const FIRST_TRIMESTER_LAST_WEEK: u32 = 12;

/// Last week that still counts as the second trimester
pub const SECOND_TRIMESTER_LAST_WEEK: u32 = 28;

/// Days elapsed since the LMP, clamped to zero before it
fn days_since_lmp(anchor: &GestationAnchor, today: NaiveDate) -> u32 {
    let diff = days_between(anchor.lmp(), today);
    u32::try_from(diff.max(0)).unwrap_or(u32::MAX)
}

/// Whole weeks elapsed since the LMP. A `today` before the LMP yields week 0.
pub fn current_week(anchor: &GestationAnchor, today: NaiveDate) -> u32 {
    days_since_lmp(anchor, today) / 7
}

/// Days past the last completed week, i.e. the `N` in "week W + N days".
pub fn days_into_week(anchor: &GestationAnchor, today: NaiveDate) -> u32 {
    days_since_lmp(anchor, today) % 7
}

pub fn trimester_for_week(week: u32) -> Trimester {
    match week {
        0..=FIRST_TRIMESTER_LAST_WEEK => Trimester::First,
        w if w <= SECOND_TRIMESTER_LAST_WEEK => Trimester::Second,
        _ => Trimester::Third,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::timeline::dates::add_days;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_week_ten_in_first_trimester() {
        let anchor = GestationAnchor::Lmp(date(2024, 1, 1));
        let today = date(2024, 3, 11);

        let week = current_week(&anchor, today);
        assert_eq!(week, 10);
        assert_eq!(days_into_week(&anchor, today), 0);
        assert_eq!(trimester_for_week(week), Trimester::First);
    }

    #[test]
    fn test_week_thirty_four_in_third_trimester() {
        let anchor = GestationAnchor::Lmp(date(2024, 1, 1));
        let today = date(2024, 9, 1);

        let week = current_week(&anchor, today);
        assert_eq!(week, 34);
        assert_eq!(days_into_week(&anchor, today), 6);
        assert_eq!(trimester_for_week(week), Trimester::Third);
    }

    #[test]
    fn test_due_date_anchor_matches_lmp_anchor() {
        let by_lmp = GestationAnchor::Lmp(date(2024, 1, 1));
        let by_due = GestationAnchor::DueDate(date(2024, 10, 7));

        for offset in [0, 1, 69, 70, 200, 280, 300] {
            let today = add_days(date(2024, 1, 1), offset);
            assert_eq!(current_week(&by_lmp, today), current_week(&by_due, today));
        }
    }

    #[test]
    fn test_today_before_lmp_clamps_to_zero() {
        let anchor = GestationAnchor::Lmp(date(2024, 1, 1));
        assert_eq!(current_week(&anchor, date(2023, 12, 31)), 0);
        assert_eq!(current_week(&anchor, date(2023, 1, 1)), 0);
        assert_eq!(days_into_week(&anchor, date(2023, 12, 25)), 0);

        // Due date so far out that the derived LMP is still ahead of today
        let far_due = GestationAnchor::DueDate(date(2025, 6, 1));
        assert_eq!(current_week(&far_due, date(2024, 1, 1)), 0);
    }

    #[test]
    fn test_week_is_non_decreasing_as_today_advances() {
        let anchor = GestationAnchor::DueDate(date(2024, 10, 7));
        let mut previous = 0;
        let mut today = date(2023, 12, 1);
        while today <= date(2024, 12, 31) {
            let week = current_week(&anchor, today);
            assert!(week >= previous, "week went backwards on {}", today);
            previous = week;
            today = add_days(today, 1);
        }
    }

    #[test]
    fn test_week_boundary_uses_floor() {
        let anchor = GestationAnchor::Lmp(date(2024, 1, 1));
        assert_eq!(current_week(&anchor, date(2024, 1, 7)), 0);
        assert_eq!(current_week(&anchor, date(2024, 1, 8)), 1);
    }

    #[test]
    fn test_trimester_boundaries() {
        assert_eq!(trimester_for_week(0), Trimester::First);
        assert_eq!(trimester_for_week(12), Trimester::First);
        assert_eq!(trimester_for_week(13), Trimester::Second);
        assert_eq!(trimester_for_week(28), Trimester::Second);
        assert_eq!(trimester_for_week(29), Trimester::Third);
        assert_eq!(trimester_for_week(45), Trimester::Third);
    }
}
