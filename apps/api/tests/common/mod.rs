//! Shared fixtures for HTTP-level tests
#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use axum::{body::Body, http::Request, Router};
use planner_api::api::{self, AppState};
use planner_api::auth::jwt::create_token;
use planner_api::auth::PublicRoutes;
use planner_api::chat::{ChatError, ChatEvent, ChatMessage, ChatModel};
use planner_api::config::AuthConfig;
use planner_api::domain::repositories::{PlanningRepository, TeamRepository};
use planner_api::domain::team::Team;
use planner_api::domain::user::Email;
use planner_api::infrastructure::repositories::InMemoryStore;
use planner_api::realtime::ChangeFeed;
use serde_json::Value;
use tokio::sync::mpsc;

pub const TEST_SECRET: &str = "integration-test-secret";

/// Chat model that replays a fixed script
pub struct ScriptedChat(pub Vec<ChatEvent>);

#[async_trait]
impl ChatModel for ScriptedChat {
    async fn stream_chat(
        &self,
        _messages: Vec<ChatMessage>,
        tx: mpsc::Sender<ChatEvent>,
    ) -> Result<(), ChatError> {
        for event in self.0.clone() {
            if tx.send(event).await.is_err() {
                break;
            }
        }
        Ok(())
    }
}

/// Chat model whose requests never start
pub struct UnreachableChat;

#[async_trait]
impl ChatModel for UnreachableChat {
    async fn stream_chat(
        &self,
        _messages: Vec<ChatMessage>,
        _tx: mpsc::Sender<ChatEvent>,
    ) -> Result<(), ChatError> {
        Err(ChatError::Request("connection refused".into()))
    }
}

pub fn app_with_repos(
    teams: Arc<dyn TeamRepository>,
    planning: Arc<dyn PlanningRepository>,
    chat: Arc<dyn ChatModel>,
) -> Router {
    let state = AppState {
        auth: Arc::new(AuthConfig {
            jwt_secret: TEST_SECRET.to_string(),
            issuer: None,
            public_routes: PublicRoutes::default(),
        }),
        teams,
        planning,
        chat,
        changes: ChangeFeed::new(),
    };
    api::router(state)
}

pub fn app_with_chat(store: Arc<InMemoryStore>, chat: Arc<dyn ChatModel>) -> Router {
    app_with_repos(store.clone(), store, chat)
}

pub fn app(store: Arc<InMemoryStore>) -> Router {
    app_with_chat(store, Arc::new(ScriptedChat(vec![ChatEvent::Done])))
}

pub fn token_for(email: &str) -> String {
    create_token("user_test", Some(email), TEST_SECRET).expect("token")
}

/// Seeds a team owned by `owner_email`
pub fn seed_team(store: &InMemoryStore, owner_email: &str) -> Team {
    let (team, owner) = Team::new(
        "Company retreat".to_string(),
        Some("Spring planning".to_string()),
        "user_owner".to_string(),
        Email::new(owner_email).expect("email"),
    )
    .expect("team");
    store.insert_team(team.clone());
    store.insert_member(owner);
    team
}

pub fn get(uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {token}"));
    }
    builder.body(Body::empty()).unwrap()
}

pub fn post_json(uri: &str, token: Option<&str>, body: &Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json");
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {token}"));
    }
    builder
        .body(Body::from(serde_json::to_string(body).unwrap()))
        .unwrap()
}

pub async fn body_json(response: axum::response::Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

pub async fn body_text(response: axum::response::Response) -> String {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(body.to_vec()).unwrap()
}
