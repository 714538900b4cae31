// Team domain module
// Contains the team record, its membership rows, and member roles

#![allow(clippy::module_inception)]

pub mod member;
pub mod team;
pub mod value_objects;

// Re-export main types for convenience
pub use member::TeamMember;
pub use team::Team;
pub use value_objects::MemberRole;
