//! Event Planner API Library
//!
//! Team, event and budget planning backend: session verification against
//! an external identity provider, PostgreSQL persistence with change
//! notification, and a streaming chat assistant.

pub mod api;
pub mod auth;
pub mod chat;
pub mod config;
pub mod demo;
pub mod domain;
pub mod infrastructure;
pub mod realtime;
