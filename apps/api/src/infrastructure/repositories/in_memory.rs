use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::planning::{Guest, TeamDocument, TeamEvent, TeamTask, TeamVendor};
use crate::domain::repositories::{PlanningRepository, RepositoryError, TeamRepository};
use crate::domain::team::{Team, TeamMember};
use crate::domain::user::Email;

/// Process-local store implementing every repository trait
///
/// Backs local development without a database and the HTTP tests. Mirrors
/// the PostgreSQL schema's constraints that handlers depend on: members
/// need an existing team, and (team, email) pairs are unique.
#[derive(Default)]
pub struct InMemoryStore {
    state: Mutex<State>,
    unavailable: AtomicBool,
}

#[derive(Default)]
struct State {
    teams: Vec<Team>,
    members: Vec<TeamMember>,
    events: Vec<TeamEvent>,
    guests: Vec<Guest>,
    vendors: Vec<TeamVendor>,
    tasks: Vec<TeamTask>,
    documents: Vec<TeamDocument>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every subsequent call fail as if the database were down
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    pub fn insert_team(&self, team: Team) {
        self.lock().teams.push(team);
    }

    pub fn insert_member(&self, member: TeamMember) {
        self.lock().members.push(member);
    }

    pub fn insert_event(&self, event: TeamEvent) {
        self.lock().events.push(event);
    }

    pub fn insert_guest(&self, guest: Guest) {
        self.lock().guests.push(guest);
    }

    pub fn insert_vendor(&self, vendor: TeamVendor) {
        self.lock().vendors.push(vendor);
    }

    pub fn insert_task(&self, task: TeamTask) {
        self.lock().tasks.push(task);
    }

    pub fn insert_document(&self, document: TeamDocument) {
        self.lock().documents.push(document);
    }

    /// Number of membership rows for one team
    pub fn member_count(&self, team_id: Uuid) -> usize {
        self.lock()
            .members
            .iter()
            .filter(|m| m.team_id == team_id)
            .count()
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn available(&self) -> Result<MutexGuard<'_, State>, RepositoryError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(RepositoryError::Database(sqlx::Error::PoolTimedOut));
        }
        Ok(self.lock())
    }
}

#[async_trait]
impl TeamRepository for InMemoryStore {
    async fn create(&self, team: &Team, owner: &TeamMember) -> Result<(), RepositoryError> {
        let mut state = self.available()?;
        state.teams.push(team.clone());
        state.members.push(owner.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Team>, RepositoryError> {
        let state = self.available()?;
        Ok(state.teams.iter().find(|t| t.id() == id).cloned())
    }

    async fn find_by_member(&self, email: &Email) -> Result<Vec<Team>, RepositoryError> {
        let state = self.available()?;
        let mut teams: Vec<Team> = state
            .teams
            .iter()
            .filter(|t| {
                state
                    .members
                    .iter()
                    .any(|m| m.team_id == t.id() && &m.email == email)
            })
            .cloned()
            .collect();
        teams.sort_by_key(|t| std::cmp::Reverse(t.created_at()));
        Ok(teams)
    }

    async fn members(&self, team_id: Uuid) -> Result<Vec<TeamMember>, RepositoryError> {
        let state = self.available()?;
        let mut members: Vec<TeamMember> = state
            .members
            .iter()
            .filter(|m| m.team_id == team_id)
            .cloned()
            .collect();
        members.sort_by_key(|m| m.joined_at);
        Ok(members)
    }

    async fn find_member(
        &self,
        team_id: Uuid,
        email: &Email,
    ) -> Result<Option<TeamMember>, RepositoryError> {
        let state = self.available()?;
        Ok(state
            .members
            .iter()
            .find(|m| m.team_id == team_id && &m.email == email)
            .cloned())
    }

    async fn add_member(&self, member: &TeamMember) -> Result<bool, RepositoryError> {
        let mut state = self.available()?;

        if !state.teams.iter().any(|t| t.id() == member.team_id) {
            return Err(RepositoryError::MissingParent {
                entity: "Team",
                id: member.team_id.to_string(),
            });
        }

        let exists = state
            .members
            .iter()
            .any(|m| m.team_id == member.team_id && m.email == member.email);
        if exists {
            return Ok(false);
        }

        state.members.push(member.clone());
        Ok(true)
    }
}

#[async_trait]
impl PlanningRepository for InMemoryStore {
    async fn events(&self, team_id: Uuid) -> Result<Vec<TeamEvent>, RepositoryError> {
        let state = self.available()?;
        let mut events: Vec<TeamEvent> = state
            .events
            .iter()
            .filter(|e| e.team_id == team_id)
            .cloned()
            .collect();
        // unscheduled events sort last
        events.sort_by(|a, b| {
            (a.starts_at.is_none(), a.starts_at, &a.name).cmp(&(
                b.starts_at.is_none(),
                b.starts_at,
                &b.name,
            ))
        });
        Ok(events)
    }

    async fn find_event(
        &self,
        team_id: Uuid,
        event_id: Uuid,
    ) -> Result<Option<TeamEvent>, RepositoryError> {
        let state = self.available()?;
        Ok(state
            .events
            .iter()
            .find(|e| e.team_id == team_id && e.id == event_id)
            .cloned())
    }

    async fn guests(&self, team_id: Uuid, event_id: Uuid) -> Result<Vec<Guest>, RepositoryError> {
        let state = self.available()?;
        let mut guests: Vec<Guest> = state
            .guests
            .iter()
            .filter(|g| g.team_id == team_id && g.event_id == event_id)
            .cloned()
            .collect();
        guests.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(guests)
    }

    async fn vendors(&self, team_id: Uuid) -> Result<Vec<TeamVendor>, RepositoryError> {
        let state = self.available()?;
        let mut vendors: Vec<TeamVendor> = state
            .vendors
            .iter()
            .filter(|v| v.team_id == team_id)
            .cloned()
            .collect();
        vendors.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(vendors)
    }

    async fn tasks(&self, team_id: Uuid) -> Result<Vec<TeamTask>, RepositoryError> {
        let state = self.available()?;
        let mut tasks: Vec<TeamTask> = state
            .tasks
            .iter()
            .filter(|t| t.team_id == team_id)
            .cloned()
            .collect();
        tasks.sort_by(|a, b| {
            (a.due_at.is_none(), a.due_at, &a.title).cmp(&(b.due_at.is_none(), b.due_at, &b.title))
        });
        Ok(tasks)
    }

    async fn documents(&self, team_id: Uuid) -> Result<Vec<TeamDocument>, RepositoryError> {
        let state = self.available()?;
        let mut documents: Vec<TeamDocument> = state
            .documents
            .iter()
            .filter(|d| d.team_id == team_id)
            .cloned()
            .collect();
        documents.sort_by_key(|d| std::cmp::Reverse(d.uploaded_at));
        Ok(documents)
    }
}
