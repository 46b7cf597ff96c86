//! Ticket domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TicketPriority {
    Low,
    #[default]
    Medium,
    High,
    Urgent,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TicketStatus {
    #[default]
    Open,
    InProgress,
    Closed,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TicketCategory {
    #[default]
    Technical,
    Feature,
    Bug,
    Support,
    Billing,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    /// Monotonic numeric id, unique within a store.
    pub id: u64,
    pub title: String,
    pub description: String,
    pub priority: TicketPriority,
    pub category: TicketCategory,
    pub status: TicketStatus,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub created_at: DateTime<Utc>,
    /// Equal to `created_at` until an update operation exists.
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub updated_at: DateTime<Utc>,
    /// Email of the session that created the ticket.
    pub created_by: String,
}

/// Input for ticket creation. Priority and category fall back to the
/// form defaults (`medium`, `technical`) when left unset.
#[derive(Debug, Clone, Default)]
pub struct TicketDraft {
    pub title: String,
    pub description: String,
    pub priority: TicketPriority,
    pub category: TicketCategory,
}

/// Filter criteria for the ticket list view. All present predicates are
/// ANDed; an absent predicate passes every ticket through.
#[derive(Debug, Clone, Default)]
pub struct TicketFilter {
    /// Case-insensitive substring match on title or description.
    pub search_term: Option<String>,
    pub status: Option<TicketStatus>,
    pub priority: Option<TicketPriority>,
}

/// Dashboard counters derived from a single list read.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TicketStats {
    pub total: usize,
    pub open: usize,
    pub in_progress: usize,
    pub closed: usize,
    /// Tickets with `high` or `urgent` priority.
    pub high_priority: usize,
}
