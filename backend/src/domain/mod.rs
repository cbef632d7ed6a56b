//! # Domain Module
//!
//! Business logic for the pregnancy tracker, independent of HTTP and of the
//! storage backend.
//!
//! ## Module Organization
//!
//! - **timeline**: the pure gestational timeline engine (dates, week, trimester,
//!   progress, development lookup)
//! - **pregnancy_service**: creating, updating and deactivating pregnancy profiles
//! - **timeline_service**: timelines for stored pregnancies or ad-hoc anchors
//! - **development_service**: the development reference table and its seeding
//! - **clock**: where "today" comes from
//! - **models**: domain entities and domain errors
//!
//! ## Business Rules
//!
//! - A pregnancy is anchored on either its LMP or its due date, never both
//! - A user has at most one active pregnancy; old ones are deactivated, not deleted
//! - The LMP may not lie in the future, nor more than 44 weeks in the past
//! - Weeks before the LMP count as week 0; progress stops at 100% at week 40

pub mod clock;
pub mod development_service;
pub mod models;
pub mod pregnancy_service;
pub mod timeline;
pub mod timeline_service;

pub use clock::{Clock, FixedClock, SystemClock};
pub use development_service::DevelopmentService;
pub use pregnancy_service::PregnancyService;
pub use timeline_service::{TimelineReport, TimelineService};
