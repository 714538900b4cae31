use axum::{
    extract::{Path, State},
    response::sse::{Event, KeepAlive, Sse},
};
use futures_util::stream::{self, Stream};
use uuid::Uuid;

use super::member_team;
use crate::api::errors::ApiError;
use crate::api::middleware::AuthSession;
use crate::api::state::AppState;
use crate::realtime::ChangeTable;

/// Stream row changes of one table for one team
///
/// GET /api/teams/:id/changes/:table
///
/// The subscription lives as long as the response; a client disconnect
/// drops it and unsubscribes.
pub async fn subscribe_changes(
    State(state): State<AppState>,
    AuthSession(session): AuthSession,
    Path((team_id, table)): Path<(Uuid, String)>,
) -> Result<Sse<impl Stream<Item = Result<Event, axum::Error>>>, ApiError> {
    let table: ChangeTable = table.parse().map_err(ApiError::bad_request)?;
    member_team(&state, &session, team_id).await?;

    let subscription = state.changes.subscribe(table, team_id);

    let events = stream::unfold(subscription, |mut subscription| async move {
        let change = subscription.recv().await?;
        Some((Event::default().event("change").json_data(&change), subscription))
    });

    Ok(Sse::new(events).keep_alive(KeepAlive::default()))
}
