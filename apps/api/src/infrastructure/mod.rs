// Infrastructure layer module
// Database adapters and the change-notification pump
// Follows Hexagonal Architecture

pub mod database;
pub mod repositories;
