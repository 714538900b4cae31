// Real-time change notification
//
// Row changes on team-scoped tables are announced by a database trigger,
// pumped into an in-process hub, and fanned out to per-(table, team)
// subscribers.

pub mod feed;
pub mod listener;

pub use feed::{ChangeEvent, ChangeFeed, ChangeOp, ChangeTable, Subscription};
pub use listener::spawn_change_listener;
