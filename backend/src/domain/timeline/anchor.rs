//! LMP / due-date conversion under the fixed 280-day term.

use chrono::NaiveDate;
use shared::AnchorKind;

use super::dates::add_days;

/// Length of a full-term pregnancy counted from the LMP
pub const GESTATION_DAYS: i64 = 280;

/// Full term expressed in weeks
pub const TERM_WEEKS: u32 = 40;

pub fn due_date_from_lmp(lmp: NaiveDate) -> NaiveDate {
    add_days(lmp, GESTATION_DAYS)
}

pub fn lmp_from_due_date(due: NaiveDate) -> NaiveDate {
    add_days(due, -GESTATION_DAYS)
}

/// The single authoritative date of a pregnancy.
///
/// Only the entered date is held; the other one is derived on demand so the two
/// can never disagree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestationAnchor {
    Lmp(NaiveDate),
    DueDate(NaiveDate),
}

impl GestationAnchor {
    pub fn from_parts(kind: AnchorKind, date: NaiveDate) -> Self {
        match kind {
            AnchorKind::Lmp => GestationAnchor::Lmp(date),
            AnchorKind::DueDate => GestationAnchor::DueDate(date),
        }
    }

    pub fn kind(&self) -> AnchorKind {
        match self {
            GestationAnchor::Lmp(_) => AnchorKind::Lmp,
            GestationAnchor::DueDate(_) => AnchorKind::DueDate,
        }
    }

    /// The date the user actually entered
    pub fn date(&self) -> NaiveDate {
        match *self {
            GestationAnchor::Lmp(date) | GestationAnchor::DueDate(date) => date,
        }
    }

    pub fn lmp(&self) -> NaiveDate {
        match *self {
            GestationAnchor::Lmp(lmp) => lmp,
            GestationAnchor::DueDate(due) => lmp_from_due_date(due),
        }
    }

    pub fn due_date(&self) -> NaiveDate {
        match *self {
            GestationAnchor::Lmp(lmp) => due_date_from_lmp(lmp),
            GestationAnchor::DueDate(due) => due,
        }
    }
}
