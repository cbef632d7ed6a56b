//! Progress towards term, as shown by the dashboard progress ring.

use super::anchor::TERM_WEEKS;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Progress {
    /// Completion of the term, 0.0 to 100.0
    pub percentage: f64,
    /// Whole weeks left until week 40; 0 once term is reached
    pub weeks_remaining: u32,
}

impl Progress {
    pub fn from_week(week: u32) -> Self {
        let percentage = (f64::from(week) / f64::from(TERM_WEEKS) * 100.0).min(100.0);
        let weeks_remaining = TERM_WEEKS.saturating_sub(week);

        Self {
            percentage,
            weeks_remaining,
        }
    }

    /// True exactly when the countdown has run out
    pub fn is_term_reached(&self) -> bool {
        self.weeks_remaining == 0
    }

    /// Text shown under the progress ring
    pub fn status_message(&self) -> String {
        match self.weeks_remaining {
            0 => "Your baby has arrived!".to_string(),
            1 => "1 week to go".to_string(),
            n => format!("{} weeks to go", n),
        }
    }
}
