use anyhow::Result;
use chrono::{NaiveDate, Utc};
use std::sync::Arc;
use tracing::{info, warn};

use crate::domain::clock::Clock;
use crate::domain::models::pregnancy::{DomainPregnancy, PregnancyError};
use crate::domain::timeline::{days_between, GestationAnchor};
use crate::storage::traits::PregnancyStorage;
use shared::{CreatePregnancyRequest, UpdatePregnancyRequest};

/// Oldest LMP accepted for a pregnancy that is still being tracked (44 weeks)
pub const MAX_TRACKED_DAYS: i64 = 44 * 7;

/// Upper bound for any recorded body weight
pub const MAX_WEIGHT_KG: f64 = 500.0;

/// Service for managing pregnancy profiles
#[derive(Clone)]
pub struct PregnancyService {
    storage: Arc<dyn PregnancyStorage>,
    clock: Arc<dyn Clock>,
}

impl PregnancyService {
    pub fn new(storage: Arc<dyn PregnancyStorage>, clock: Arc<dyn Clock>) -> Self {
        Self { storage, clock }
    }

    /// Create a new active pregnancy for `user_id`
    pub async fn create_pregnancy(
        &self,
        user_id: &str,
        request: CreatePregnancyRequest,
    ) -> Result<DomainPregnancy> {
        info!("Creating pregnancy for user {}: {:?}", user_id, request);

        let user_id = normalize_user_id(user_id)?;

        let anchor = parse_anchor(request.lmp_date.as_deref(), request.due_date.as_deref())?
            .ok_or(PregnancyError::MissingAnchor)?;
        self.validate_anchor(&anchor)?;
        validate_weight(request.pre_pregnancy_weight_kg)?;
        validate_weight(request.current_weight_kg)?;

        if self.storage.get_active_pregnancy(user_id).await?.is_some() {
            warn!("User {} already has an active pregnancy", user_id);
            return Err(PregnancyError::ActivePregnancyAlreadyExists.into());
        }

        let now = Utc::now();
        let pregnancy = DomainPregnancy {
            id: DomainPregnancy::generate_id(now),
            user_id: user_id.to_string(),
            anchor,
            pre_pregnancy_weight_kg: request.pre_pregnancy_weight_kg,
            current_weight_kg: request.current_weight_kg,
            is_active: true,
            created_at: now,
            updated_at: now,
        };

        self.storage.store_pregnancy(&pregnancy).await?;

        info!("Created pregnancy {} for user {}", pregnancy.id, pregnancy.user_id);
        Ok(pregnancy)
    }

    /// Get a pregnancy by ID
    pub async fn get_pregnancy(&self, pregnancy_id: &str) -> Result<Option<DomainPregnancy>> {
        info!("Getting pregnancy: {}", pregnancy_id);

        let pregnancy = self.storage.get_pregnancy(pregnancy_id).await?;
        if pregnancy.is_none() {
            warn!("Pregnancy not found: {}", pregnancy_id);
        }

        Ok(pregnancy)
    }

    pub async fn get_active_pregnancy(&self, user_id: &str) -> Result<Option<DomainPregnancy>> {
        info!("Getting active pregnancy for user {}", user_id);
        self.storage.get_active_pregnancy(normalize_user_id(user_id)?).await
    }

    /// All pregnancies of a user, newest first
    pub async fn list_pregnancies(&self, user_id: &str) -> Result<Vec<DomainPregnancy>> {
        let pregnancies = self.storage.list_pregnancies(normalize_user_id(user_id)?).await?;
        info!("Found {} pregnancies for user {}", pregnancies.len(), user_id);
        Ok(pregnancies)
    }

    /// Replace the anchor date and/or weights of a pregnancy
    pub async fn update_pregnancy(
        &self,
        pregnancy_id: &str,
        request: UpdatePregnancyRequest,
    ) -> Result<DomainPregnancy> {
        info!("Updating pregnancy {}: {:?}", pregnancy_id, request);

        let mut pregnancy = self.require_pregnancy(pregnancy_id).await?;

        if let Some(anchor) =
            parse_anchor(request.lmp_date.as_deref(), request.due_date.as_deref())?
        {
            self.validate_anchor(&anchor)?;
            pregnancy.anchor = anchor;
        }
        if let Some(weight) = request.pre_pregnancy_weight_kg {
            validate_weight(Some(weight))?;
            pregnancy.pre_pregnancy_weight_kg = Some(weight);
        }
        if let Some(weight) = request.current_weight_kg {
            validate_weight(Some(weight))?;
            pregnancy.current_weight_kg = Some(weight);
        }

        pregnancy.updated_at = Utc::now();
        self.storage.update_pregnancy(&pregnancy).await?;

        info!("Updated pregnancy {}", pregnancy.id);
        Ok(pregnancy)
    }

    /// Mark a pregnancy inactive. Profiles are never deleted.
    pub async fn deactivate_pregnancy(&self, pregnancy_id: &str) -> Result<DomainPregnancy> {
        info!("Deactivating pregnancy {}", pregnancy_id);

        let mut pregnancy = self.require_pregnancy(pregnancy_id).await?;
        if !pregnancy.is_active {
            info!("Pregnancy {} is already inactive", pregnancy_id);
            return Ok(pregnancy);
        }

        pregnancy.is_active = false;
        pregnancy.updated_at = Utc::now();
        self.storage.update_pregnancy(&pregnancy).await?;

        Ok(pregnancy)
    }

    async fn require_pregnancy(&self, pregnancy_id: &str) -> Result<DomainPregnancy> {
        self.storage
            .get_pregnancy(pregnancy_id)
            .await?
            .ok_or_else(|| PregnancyError::NotFound(pregnancy_id.to_string()).into())
    }

    /// Reject LMPs in the future and pregnancies that would be far past term already
    fn validate_anchor(&self, anchor: &GestationAnchor) -> Result<(), PregnancyError> {
        let today = self.clock.today();
        let lmp = anchor.lmp();
        let elapsed = days_between(lmp, today);

        if elapsed < 0 {
            return Err(PregnancyError::LmpInFuture(format_date(lmp)));
        }
        if elapsed > MAX_TRACKED_DAYS {
            return Err(PregnancyError::AnchorTooOld(format_date(lmp)));
        }
        Ok(())
    }
}

/// User ids are stored and looked up without surrounding whitespace
fn normalize_user_id(user_id: &str) -> Result<&str, PregnancyError> {
    let trimmed = user_id.trim();
    if trimmed.is_empty() {
        return Err(PregnancyError::EmptyUserId);
    }
    Ok(trimmed)
}

/// Build an anchor from the optional request dates; `None` when neither is given
fn parse_anchor(
    lmp_date: Option<&str>,
    due_date: Option<&str>,
) -> Result<Option<GestationAnchor>, PregnancyError> {
    match (lmp_date, due_date) {
        (Some(_), Some(_)) => Err(PregnancyError::ConflictingAnchors),
        (Some(lmp), None) => Ok(Some(GestationAnchor::Lmp(parse_date(lmp)?))),
        (None, Some(due)) => Ok(Some(GestationAnchor::DueDate(parse_date(due)?))),
        (None, None) => Ok(None),
    }
}

/// Parse a `YYYY-MM-DD` date
pub fn parse_date(value: &str) -> Result<NaiveDate, PregnancyError> {
    let trimmed = value.trim();
    if trimmed.len() != 10 {
        return Err(PregnancyError::InvalidDate(value.to_string()));
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .map_err(|_| PregnancyError::InvalidDate(value.to_string()))
}

pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

fn validate_weight(weight: Option<f64>) -> Result<(), PregnancyError> {
    match weight {
        Some(kg) if !(kg > 0.0 && kg <= MAX_WEIGHT_KG) => Err(PregnancyError::InvalidWeight(kg)),
        _ => Ok(()),
    }
}
