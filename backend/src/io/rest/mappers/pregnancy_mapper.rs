use crate::domain::models::pregnancy::DomainPregnancy;
use crate::domain::pregnancy_service::format_date;
use shared::{ActivePregnancyResponse, Pregnancy, PregnancyListResponse, PregnancyResponse};

/// Mapper from domain pregnancies to the shared DTOs.
pub struct PregnancyMapper;

impl PregnancyMapper {
    pub fn to_dto(domain: DomainPregnancy) -> Pregnancy {
        Pregnancy {
            anchor: domain.anchor.kind(),
            lmp_date: format_date(domain.anchor.lmp()),
            due_date: format_date(domain.anchor.due_date()),
            pre_pregnancy_weight_kg: domain.pre_pregnancy_weight_kg,
            current_weight_kg: domain.current_weight_kg,
            is_active: domain.is_active,
            created_at: domain.created_at.to_rfc3339(),
            updated_at: domain.updated_at.to_rfc3339(),
            id: domain.id,
            user_id: domain.user_id,
        }
    }

    pub fn to_response_dto(domain: DomainPregnancy, message: &str) -> PregnancyResponse {
        PregnancyResponse {
            pregnancy: Self::to_dto(domain),
            success_message: message.to_string(),
        }
    }

    pub fn to_list_dto(domain: Vec<DomainPregnancy>) -> PregnancyListResponse {
        PregnancyListResponse {
            pregnancies: domain.into_iter().map(Self::to_dto).collect(),
        }
    }

    pub fn to_active_dto(domain: Option<DomainPregnancy>) -> ActivePregnancyResponse {
        ActivePregnancyResponse {
            active_pregnancy: domain.map(Self::to_dto),
        }
    }
}
