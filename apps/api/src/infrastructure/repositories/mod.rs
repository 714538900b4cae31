// Repository implementations (data access layer)
// Adapters that implement domain repository interfaces

pub mod in_memory;
pub mod postgres_planning_repository;
pub mod postgres_team_repository;

pub use in_memory::InMemoryStore;
pub use postgres_planning_repository::PostgresPlanningRepository;
pub use postgres_team_repository::PostgresTeamRepository;
