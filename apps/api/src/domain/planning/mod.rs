// Planning records owned by a team: events and their guests, vendors,
// tasks and shared documents

pub mod budget;
pub mod document;
pub mod event;
pub mod guest;
pub mod task;
pub mod vendor;

pub use budget::BudgetSummary;
pub use document::TeamDocument;
pub use event::TeamEvent;
pub use guest::{Guest, RsvpStatus};
pub use task::{TaskStatus, TeamTask};
pub use vendor::TeamVendor;
