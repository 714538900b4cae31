// Repository traits (ports)
// Implemented by infrastructure adapters

pub mod errors;
pub mod planning_repository;
pub mod team_repository;

pub use errors::RepositoryError;
pub use planning_repository::PlanningRepository;
pub use team_repository::TeamRepository;
