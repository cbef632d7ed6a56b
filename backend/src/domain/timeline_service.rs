use anyhow::Result;
use chrono::NaiveDate;
use std::sync::Arc;
use tracing::info;

use crate::domain::clock::Clock;
use crate::domain::development_service::DevelopmentService;
use crate::domain::models::pregnancy::DomainPregnancy;
use crate::domain::pregnancy_service::PregnancyService;
use crate::domain::timeline::{GestationAnchor, Timeline};

/// A computed timeline, together with the stored pregnancy it belongs to
#[derive(Debug, Clone, PartialEq)]
pub struct TimelineReport {
    pub pregnancy: Option<DomainPregnancy>,
    pub timeline: Timeline,
}

/// Produces dashboard timelines: week, trimester, progress and size comparison
#[derive(Clone)]
pub struct TimelineService {
    pregnancy_service: PregnancyService,
    development_service: DevelopmentService,
    clock: Arc<dyn Clock>,
}

impl TimelineService {
    pub fn new(
        pregnancy_service: PregnancyService,
        development_service: DevelopmentService,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            pregnancy_service,
            development_service,
            clock,
        }
    }

    /// Timeline for an arbitrary anchor. `today` defaults to the service clock.
    pub async fn timeline_for_anchor(
        &self,
        anchor: GestationAnchor,
        today: Option<NaiveDate>,
    ) -> Result<TimelineReport> {
        let timeline = self.compute(anchor, today).await?;
        Ok(TimelineReport {
            pregnancy: None,
            timeline,
        })
    }

    /// Timeline of the user's active pregnancy, `None` if there is no active one
    pub async fn timeline_for_user(
        &self,
        user_id: &str,
        today: Option<NaiveDate>,
    ) -> Result<Option<TimelineReport>> {
        let Some(pregnancy) = self.pregnancy_service.get_active_pregnancy(user_id).await? else {
            info!("No active pregnancy for user {}", user_id);
            return Ok(None);
        };

        let timeline = self.compute(pregnancy.anchor, today).await?;
        info!(
            "Timeline for pregnancy {}: week {} ({})",
            pregnancy.id, timeline.week, timeline.trimester
        );

        Ok(Some(TimelineReport {
            pregnancy: Some(pregnancy),
            timeline,
        }))
    }

    async fn compute(&self, anchor: GestationAnchor, today: Option<NaiveDate>) -> Result<Timeline> {
        let today = today.unwrap_or_else(|| self.clock.today());
        let table = self.development_service.table().await?;
        Ok(Timeline::compute(
            anchor,
            today,
            &table,
            self.development_service.comparison_floor(),
        ))
    }
}
