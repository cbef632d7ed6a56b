use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Which date a pregnancy is anchored on. The other date is always derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnchorKind {
    /// Last menstrual period
    Lmp,
    /// Estimated date of delivery
    DueDate,
}

impl AnchorKind {
    /// Stable storage representation
    pub fn as_str(&self) -> &'static str {
        match self {
            AnchorKind::Lmp => "lmp",
            AnchorKind::DueDate => "due_date",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "lmp" => Some(AnchorKind::Lmp),
            "due_date" => Some(AnchorKind::DueDate),
            _ => None,
        }
    }
}

/// Coarse pregnancy phase used for content selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trimester {
    First,
    Second,
    Third,
}

impl fmt::Display for Trimester {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Trimester::First => write!(f, "First trimester"),
            Trimester::Second => write!(f, "Second trimester"),
            Trimester::Third => write!(f, "Third trimester"),
        }
    }
}

/// A pregnancy profile as exchanged with the frontend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pregnancy {
    pub id: String,
    /// Owner of this profile
    pub user_id: String,
    /// Which of the two dates below was entered by the user
    pub anchor: AnchorKind,
    pub lmp_date: String, // ISO 8601 date format (YYYY-MM-DD)
    pub due_date: String, // ISO 8601 date format (YYYY-MM-DD)
    pub pre_pregnancy_weight_kg: Option<f64>,
    pub current_weight_kg: Option<f64>,
    pub is_active: bool,
    pub created_at: String, // RFC 3339 timestamp
    pub updated_at: String, // RFC 3339 timestamp
}

/// Request for creating a new pregnancy. Exactly one of `lmp_date` / `due_date` must be set.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CreatePregnancyRequest {
    #[serde(default)]
    pub lmp_date: Option<String>,
    #[serde(default)]
    pub due_date: Option<String>,
    #[serde(default)]
    pub pre_pregnancy_weight_kg: Option<f64>,
    #[serde(default)]
    pub current_weight_kg: Option<f64>,
}

/// Request for updating an existing pregnancy. Omitted fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct UpdatePregnancyRequest {
    #[serde(default)]
    pub lmp_date: Option<String>,
    #[serde(default)]
    pub due_date: Option<String>,
    #[serde(default)]
    pub pre_pregnancy_weight_kg: Option<f64>,
    #[serde(default)]
    pub current_weight_kg: Option<f64>,
}

/// Response after creating or changing a pregnancy
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PregnancyResponse {
    pub pregnancy: Pregnancy,
    pub success_message: String,
}

/// Response containing all pregnancies of a user
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PregnancyListResponse {
    pub pregnancies: Vec<Pregnancy>,
}

/// Response containing the active pregnancy of a user, if any
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ActivePregnancyResponse {
    pub active_pregnancy: Option<Pregnancy>,
}

/// Week-indexed fetal development reference entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DevelopmentRecord {
    pub week: u32,
    /// Produce item the baby is compared to, e.g. "Lime"
    pub size_comparison: String,
    pub length_cm: f64,
    pub weight_g: f64,
    /// Image reference for the comparison item
    pub image: String,
    pub milestones: Vec<String>,
}

/// Response containing the full development reference table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DevelopmentTableResponse {
    pub records: Vec<DevelopmentRecord>,
}

/// Everything the dashboard needs to render the week-dependent widgets
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineSummary {
    /// Set when the summary was computed for a stored pregnancy
    pub pregnancy_id: Option<String>,
    pub lmp_date: String,
    pub due_date: String,
    /// The date the summary was computed for
    pub today: String,
    pub week: u32,
    /// Days past the last completed week (0-6)
    pub days_into_week: u32,
    pub trimester: Trimester,
    /// Completion of the 40-week term, 0-100
    pub percentage: f64,
    pub weeks_remaining: u32,
    /// Negative once the due date has passed
    pub days_until_due: i64,
    pub is_term_reached: bool,
    pub status_message: String,
    pub development: DevelopmentRecord,
    /// Current weight minus pre-pregnancy weight, when both are known
    pub weight_change_kg: Option<f64>,
}

/// Error type for pregnancy ID parsing
#[derive(Debug, Clone, PartialEq)]
pub enum PregnancyIdError {
    InvalidFormat,
    InvalidTimestamp,
}

impl fmt::Display for PregnancyIdError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PregnancyIdError::InvalidFormat => write!(f, "Invalid pregnancy ID format"),
            PregnancyIdError::InvalidTimestamp => write!(f, "Invalid timestamp in pregnancy ID"),
        }
    }
}

impl std::error::Error for PregnancyIdError {}

impl Pregnancy {
    /// Generate a pregnancy ID: "pregnancy::<epoch_millis>::<nonce>"
    ///
    /// The nonce keeps IDs unique when a user re-creates a profile within the same millisecond.
    pub fn generate_id(epoch_millis: u64, nonce: Uuid) -> String {
        format!("pregnancy::{}::{}", epoch_millis, nonce.simple())
    }

    /// Parse a pregnancy ID to extract its creation timestamp
    pub fn parse_id(id: &str) -> Result<u64, PregnancyIdError> {
        let parts: Vec<&str> = id.split("::").collect();
        if parts.len() != 3 || parts[0] != "pregnancy" || parts[2].is_empty() {
            return Err(PregnancyIdError::InvalidFormat);
        }

        parts[1]
            .parse::<u64>()
            .map_err(|_| PregnancyIdError::InvalidTimestamp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_pregnancy_id() {
        let nonce = Uuid::nil();
        let id = Pregnancy::generate_id(1702516122000, nonce);
        assert_eq!(id, "pregnancy::1702516122000::00000000000000000000000000000000");
    }

    #[test]
    fn test_parse_pregnancy_id() {
        let id = Pregnancy::generate_id(1702516122000, Uuid::new_v4());
        assert_eq!(Pregnancy::parse_id(&id).unwrap(), 1702516122000);

        assert_eq!(
            Pregnancy::parse_id("child::1702516122000"),
            Err(PregnancyIdError::InvalidFormat)
        );
        assert_eq!(
            Pregnancy::parse_id("pregnancy::not_a_number::abc"),
            Err(PregnancyIdError::InvalidTimestamp)
        );
        assert_eq!(
            Pregnancy::parse_id("pregnancy::1702516122000::"),
            Err(PregnancyIdError::InvalidFormat)
        );
    }

    #[test]
    fn test_anchor_kind_round_trips_through_storage_string() {
        for kind in [AnchorKind::Lmp, AnchorKind::DueDate] {
            assert_eq!(AnchorKind::parse(kind.as_str()), Some(kind));
        }
        assert_eq!(AnchorKind::parse("conception"), None);
    }

    #[test]
    fn test_enums_serialize_as_snake_case() {
        assert_eq!(serde_json::to_string(&AnchorKind::DueDate).unwrap(), "\"due_date\"");
        assert_eq!(serde_json::to_string(&Trimester::Second).unwrap(), "\"second\"");
    }

    #[test]
    fn test_create_request_accepts_missing_fields() {
        let request: CreatePregnancyRequest =
            serde_json::from_str(r#"{"lmp_date":"2024-01-01"}"#).unwrap();
        assert_eq!(request.lmp_date.as_deref(), Some("2024-01-01"));
        assert!(request.due_date.is_none());
        assert!(request.pre_pregnancy_weight_kg.is_none());
    }
}
