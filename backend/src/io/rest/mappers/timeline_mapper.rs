use crate::domain::pregnancy_service::format_date;
use crate::domain::TimelineReport;
use shared::TimelineSummary;

/// Mapper from computed timelines to the dashboard DTO.
pub struct TimelineMapper;

impl TimelineMapper {
    pub fn to_dto(report: TimelineReport) -> TimelineSummary {
        let TimelineReport { pregnancy, timeline } = report;

        TimelineSummary {
            pregnancy_id: pregnancy.as_ref().map(|p| p.id.clone()),
            lmp_date: format_date(timeline.lmp()),
            due_date: format_date(timeline.due_date()),
            today: format_date(timeline.today),
            week: timeline.week,
            days_into_week: timeline.days_into_week,
            trimester: timeline.trimester,
            percentage: timeline.progress.percentage,
            weeks_remaining: timeline.progress.weeks_remaining,
            days_until_due: timeline.days_until_due(),
            is_term_reached: timeline.progress.is_term_reached(),
            status_message: timeline.progress.status_message(),
            weight_change_kg: pregnancy.as_ref().and_then(|p| p.weight_change_kg()),
            development: timeline.development,
        }
    }
}
