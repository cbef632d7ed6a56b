// Repository modules
pub mod development_repository;
pub mod pregnancy_repository;

// Re-export repository types
pub use development_repository::DevelopmentRepository;
pub use pregnancy_repository::PregnancyRepository;
