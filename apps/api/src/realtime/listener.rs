use std::sync::Arc;
use std::time::Duration;

use sqlx::postgres::{PgListener, PgPool};
use tokio::task::JoinHandle;
use tracing::{debug, error, info, warn};

use super::feed::{ChangeEvent, ChangeFeed};

/// Notification channel the `notify_team_change` trigger publishes on
pub const CHANGE_CHANNEL: &str = "team_changes";

const RECONNECT_DELAY: Duration = Duration::from_secs(5);

/// Starts the background task that forwards database notifications into
/// the feed
///
/// The task runs for the life of the process and reconnects after
/// failures.
pub fn spawn_change_listener(pool: PgPool, feed: Arc<ChangeFeed>) -> JoinHandle<()> {
    tokio::spawn(async move {
        loop {
            if let Err(e) = pump(&pool, &feed).await {
                error!(error = %e, "change listener failed; reconnecting");
            }
            tokio::time::sleep(RECONNECT_DELAY).await;
        }
    })
}

async fn pump(pool: &PgPool, feed: &ChangeFeed) -> Result<(), sqlx::Error> {
    let mut listener = PgListener::connect_with(pool).await?;
    listener.listen(CHANGE_CHANNEL).await?;
    info!(channel = CHANGE_CHANNEL, "listening for row changes");

    loop {
        let notification = listener.recv().await?;
        match parse_payload(notification.payload()) {
            Some(event) => {
                let delivered = feed.publish(event);
                debug!(delivered, "change forwarded");
            }
            None => warn!(payload = notification.payload(), "unparsable change payload"),
        }
    }
}

/// Parses a trigger payload; malformed payloads are dropped
pub fn parse_payload(payload: &str) -> Option<ChangeEvent> {
    serde_json::from_str(payload).ok()
}
