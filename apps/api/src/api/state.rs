use std::sync::Arc;

use crate::chat::ChatModel;
use crate::config::AuthConfig;
use crate::domain::repositories::{PlanningRepository, TeamRepository};
use crate::realtime::ChangeFeed;

/// Shared handler state
///
/// Everything behind a trait object so tests can swap the managed services
/// for in-process stand-ins.
#[derive(Clone)]
pub struct AppState {
    pub auth: Arc<AuthConfig>,
    pub teams: Arc<dyn TeamRepository>,
    pub planning: Arc<dyn PlanningRepository>,
    pub chat: Arc<dyn ChatModel>,
    pub changes: Arc<ChangeFeed>,
}
