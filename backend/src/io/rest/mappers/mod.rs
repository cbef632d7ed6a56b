pub mod pregnancy_mapper;
pub mod timeline_mapper;

pub use pregnancy_mapper::PregnancyMapper;
pub use timeline_mapper::TimelineMapper;
