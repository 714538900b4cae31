use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::{Arc, Mutex, MutexGuard};

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;
use tracing::{debug, warn};
use uuid::Uuid;

const DEFAULT_CAPACITY: usize = 64;

/// Tables whose row changes are published per team
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeTable {
    TeamMembers,
    TeamEvents,
    TeamVendors,
    TeamTasks,
    TeamDocuments,
    Guests,
}

impl ChangeTable {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeTable::TeamMembers => "team_members",
            ChangeTable::TeamEvents => "team_events",
            ChangeTable::TeamVendors => "team_vendors",
            ChangeTable::TeamTasks => "team_tasks",
            ChangeTable::TeamDocuments => "team_documents",
            ChangeTable::Guests => "guests",
        }
    }
}

impl fmt::Display for ChangeTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChangeTable {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "team_members" => Ok(ChangeTable::TeamMembers),
            "team_events" => Ok(ChangeTable::TeamEvents),
            "team_vendors" => Ok(ChangeTable::TeamVendors),
            "team_tasks" => Ok(ChangeTable::TeamTasks),
            "team_documents" => Ok(ChangeTable::TeamDocuments),
            "guests" => Ok(ChangeTable::Guests),
            other => Err(format!("Unknown table: {other}")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ChangeOp {
    Insert,
    Update,
    Delete,
}

/// One row change, as emitted by the database trigger
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChangeEvent {
    pub table: ChangeTable,
    pub team_id: Uuid,
    pub op: ChangeOp,
    /// New row for inserts and updates, old row for deletes. Rows too large
    /// for a notification arrive as `{"id": ...}` only.
    pub record: serde_json::Value,
}

type ChannelKey = (ChangeTable, Uuid);

/// Fan-out hub with one broadcast channel per (table, team) pair
///
/// Channels are created by the first subscriber and removed when the last
/// subscriber drops its [`Subscription`].
pub struct ChangeFeed {
    channels: Mutex<HashMap<ChannelKey, broadcast::Sender<ChangeEvent>>>,
    capacity: usize,
}

impl ChangeFeed {
    pub fn new() -> Arc<Self> {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates a hub whose channels buffer `capacity` events per subscriber
    pub fn with_capacity(capacity: usize) -> Arc<Self> {
        Arc::new(Self {
            channels: Mutex::new(HashMap::new()),
            capacity: capacity.max(1),
        })
    }

    /// Registers a listener for one table of one team
    pub fn subscribe(self: &Arc<Self>, table: ChangeTable, team_id: Uuid) -> Subscription {
        let key = (table, team_id);
        let rx = self
            .lock()
            .entry(key)
            .or_insert_with(|| broadcast::channel(self.capacity).0)
            .subscribe();

        debug!(%table, %team_id, "change subscription opened");

        Subscription {
            key,
            rx,
            feed: Arc::clone(self),
        }
    }

    /// Delivers an event to the pair's subscribers
    ///
    /// Returns the number of subscribers reached; zero when nobody listens.
    pub fn publish(&self, event: ChangeEvent) -> usize {
        let channels = self.lock();
        match channels.get(&(event.table, event.team_id)) {
            Some(tx) => tx.send(event).unwrap_or(0),
            None => 0,
        }
    }

    /// Number of (table, team) pairs with at least one subscriber
    pub fn active_channels(&self) -> usize {
        self.lock().len()
    }

    fn release(&self, key: &ChannelKey) {
        let mut channels = self.lock();
        // the departing receiver is still alive while this runs
        if channels
            .get(key)
            .is_some_and(|tx| tx.receiver_count() <= 1)
        {
            channels.remove(key);
            debug!(table = %key.0, team_id = %key.1, "change channel closed");
        }
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<ChannelKey, broadcast::Sender<ChangeEvent>>> {
        self.channels
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

/// A live registration on the [`ChangeFeed`]; dropping it unsubscribes
pub struct Subscription {
    key: ChannelKey,
    rx: broadcast::Receiver<ChangeEvent>,
    feed: Arc<ChangeFeed>,
}

impl Subscription {
    /// Waits for the next change
    ///
    /// Events missed because this subscriber fell behind are skipped.
    /// Returns `None` once the channel is gone.
    pub async fn recv(&mut self) -> Option<ChangeEvent> {
        loop {
            match self.rx.recv().await {
                Ok(event) => return Some(event),
                Err(broadcast::error::RecvError::Lagged(skipped)) => {
                    warn!(table = %self.key.0, team_id = %self.key.1, skipped, "subscriber lagged");
                }
                Err(broadcast::error::RecvError::Closed) => return None,
            }
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.feed.release(&self.key);
    }
}
