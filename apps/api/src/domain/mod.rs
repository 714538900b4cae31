// Domain layer module exports
// Records are plain data; persistence and change notification live behind
// the repository traits

pub mod planning;
pub mod repositories;
pub mod team;
pub mod user;
