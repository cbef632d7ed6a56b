use chrono::{DateTime, Utc};
use shared::Pregnancy;
use uuid::Uuid;

use crate::domain::timeline::GestationAnchor;

#[derive(Debug, Clone, PartialEq)]
pub struct DomainPregnancy {
    pub id: String,
    pub user_id: String,
    pub anchor: GestationAnchor,
    pub pre_pregnancy_weight_kg: Option<f64>,
    pub current_weight_kg: Option<f64>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl DomainPregnancy {
    pub fn generate_id(now: DateTime<Utc>) -> String {
        Pregnancy::generate_id(now.timestamp_millis().max(0) as u64, Uuid::new_v4())
    }

    /// Weight gained (or lost) since before the pregnancy, when both weights are known
    pub fn weight_change_kg(&self) -> Option<f64> {
        match (self.pre_pregnancy_weight_kg, self.current_weight_kg) {
            (Some(before), Some(now)) => Some(now - before),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PregnancyError {
    #[error("User ID cannot be empty")]
    EmptyUserId,
    #[error("Either an LMP date or a due date is required")]
    MissingAnchor,
    #[error("Provide either an LMP date or a due date, not both")]
    ConflictingAnchors,
    #[error("Invalid date '{0}': dates must be in YYYY-MM-DD format")]
    InvalidDate(String),
    #[error("LMP date {0} is in the future")]
    LmpInFuture(String),
    #[error("LMP date {0} is too long ago for an ongoing pregnancy")]
    AnchorTooOld(String),
    #[error("Weight must be greater than 0 and at most 500 kg, got {0}")]
    InvalidWeight(f64),
    #[error("User already has an active pregnancy")]
    ActivePregnancyAlreadyExists,
    #[error("Pregnancy not found: {0}")]
    NotFound(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone};

    fn pregnancy(pre: Option<f64>, current: Option<f64>) -> DomainPregnancy {
        let now = Utc.with_ymd_and_hms(2024, 3, 11, 9, 0, 0).unwrap();
        DomainPregnancy {
            id: DomainPregnancy::generate_id(now),
            user_id: "user-1".to_string(),
            anchor: GestationAnchor::Lmp(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()),
            pre_pregnancy_weight_kg: pre,
            current_weight_kg: current,
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_generate_id_embeds_creation_time() {
        let p = pregnancy(None, None);
        assert_eq!(Pregnancy::parse_id(&p.id).unwrap(), p.created_at.timestamp_millis() as u64);
    }

    #[test]
    fn test_generate_id_is_unique_within_a_millisecond() {
        let now = Utc::now();
        assert_ne!(DomainPregnancy::generate_id(now), DomainPregnancy::generate_id(now));
    }

    #[test]
    fn test_weight_change() {
        assert_eq!(pregnancy(Some(60.0), Some(65.5)).weight_change_kg(), Some(5.5));
        assert_eq!(pregnancy(Some(60.0), None).weight_change_kg(), None);
        assert_eq!(pregnancy(None, Some(65.5)).weight_change_kg(), None);
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            PregnancyError::InvalidDate("2024-13-01".to_string()).to_string(),
            "Invalid date '2024-13-01': dates must be in YYYY-MM-DD format"
        );
        assert_eq!(
            PregnancyError::NotFound("pregnancy::1::a".to_string()).to_string(),
            "Pregnancy not found: pregnancy::1::a"
        );
    }
}
