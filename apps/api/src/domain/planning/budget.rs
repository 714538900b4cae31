use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::event::TeamEvent;
use super::vendor::TeamVendor;

/// Spend against one event's budget
///
/// # Fields
/// * `budget` - The event's budget, if set
/// * `committed` - Sum of costs of vendors booked for the event
/// * `remaining` - `budget - committed`; absent without a budget
/// * `over_budget` - True when `remaining` is negative
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetSummary {
    pub event_id: Uuid,
    pub budget: Option<Decimal>,
    pub committed: Decimal,
    pub remaining: Option<Decimal>,
    pub over_budget: bool,
    pub vendor_count: usize,
}

impl BudgetSummary {
    /// Summarizes an event's budget from the team's vendors
    ///
    /// Vendors booked for other events, or for none, are ignored. Vendors
    /// without a cost count toward `vendor_count` but add nothing.
    ///
    /// # Example
    /// ```
    /// use planner_api::domain::planning::{BudgetSummary, TeamEvent, TeamVendor};
    /// use rust_decimal::Decimal;
    /// use uuid::Uuid;
    ///
    /// let team_id = Uuid::new_v4();
    /// let event = TeamEvent {
    ///     id: Uuid::new_v4(),
    ///     team_id,
    ///     name: "Launch party".into(),
    ///     description: None,
    ///     location: None,
    ///     starts_at: None,
    ///     ends_at: None,
    ///     budget: Some(Decimal::from(1000)),
    /// };
    /// let caterer = TeamVendor {
    ///     id: Uuid::new_v4(),
    ///     team_id,
    ///     event_id: Some(event.id),
    ///     name: "Caterer".into(),
    ///     category: None,
    ///     contact_email: None,
    ///     cost: Some(Decimal::from(400)),
    /// };
    ///
    /// let summary = BudgetSummary::for_event(&event, &[caterer]);
    /// assert_eq!(summary.remaining, Some(Decimal::from(600)));
    /// ```
    pub fn for_event(event: &TeamEvent, vendors: &[TeamVendor]) -> Self {
        let booked: Vec<&TeamVendor> = vendors
            .iter()
            .filter(|vendor| vendor.event_id == Some(event.id))
            .collect();

        let committed = booked
            .iter()
            .filter_map(|vendor| vendor.cost)
            .fold(Decimal::ZERO, |total, cost| total + cost);

        let remaining = event.budget.map(|budget| budget - committed);

        Self {
            event_id: event.id,
            budget: event.budget,
            committed,
            remaining,
            over_budget: remaining.is_some_and(|r| r < Decimal::ZERO),
            vendor_count: booked.len(),
        }
    }
}
