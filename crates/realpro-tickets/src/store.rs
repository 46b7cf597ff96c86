//! Ticket Store — owns the persisted ticket sequence.

use chrono::Utc;
use realpro_core::error::{RealProError, RealProResult};
use realpro_core::models::ticket::{
    Ticket, TicketDraft, TicketFilter, TicketPriority, TicketStats, TicketStatus,
};
use realpro_core::store::{self, KeyValueStore, StoreChange, keys};
use tokio::sync::broadcast;
use tracing::{info, warn};

/// How many tickets the dashboard shows as recent.
const RECENT_LIMIT: usize = 5;

/// Next monotonic id: one past the highest id in the stored sequence.
/// Never reuses an id and never collides under rapid creation.
fn next_id(tickets: &[Ticket]) -> u64 {
    tickets.iter().map(|t| t.id).max().map_or(1, |m| m + 1)
}

fn matches(ticket: &Ticket, criteria: &TicketFilter) -> bool {
    if let Some(term) = criteria.search_term.as_deref() {
        // An empty search box passes everything through.
        if !term.is_empty() {
            let needle = term.to_lowercase();
            let hit = ticket.title.to_lowercase().contains(&needle)
                || ticket.description.to_lowercase().contains(&needle);
            if !hit {
                return false;
            }
        }
    }
    if let Some(status) = criteria.status {
        if ticket.status != status {
            return false;
        }
    }
    if let Some(priority) = criteria.priority {
        if ticket.priority != priority {
            return false;
        }
    }
    true
}

/// Apply filter criteria to an already-loaded sequence: ANDed
/// case-insensitive substring search over title/description, exact
/// status, exact priority. Absent predicates pass through.
pub fn filter(tickets: &[Ticket], criteria: &TicketFilter) -> Vec<Ticket> {
    tickets
        .iter()
        .filter(|t| matches(t, criteria))
        .cloned()
        .collect()
}

/// Dashboard counters over an already-loaded sequence.
pub fn stats(tickets: &[Ticket]) -> TicketStats {
    TicketStats {
        total: tickets.len(),
        open: tickets
            .iter()
            .filter(|t| t.status == TicketStatus::Open)
            .count(),
        in_progress: tickets
            .iter()
            .filter(|t| t.status == TicketStatus::InProgress)
            .count(),
        closed: tickets
            .iter()
            .filter(|t| t.status == TicketStatus::Closed)
            .count(),
        high_priority: tickets
            .iter()
            .filter(|t| t.priority == TicketPriority::High || t.priority == TicketPriority::Urgent)
            .count(),
    }
}

/// The most recent tickets by creation time, at most five.
pub fn recent(tickets: &[Ticket]) -> Vec<Ticket> {
    let mut sorted = tickets.to_vec();
    sorted.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    sorted.truncate(RECENT_LIMIT);
    sorted
}

#[derive(Clone)]
pub struct TicketStore<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> TicketStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// The persisted sequence, newest first.
    ///
    /// Fails open: an absent or corrupt slot reads as empty (logged,
    /// never surfaced).
    pub async fn list(&self) -> RealProResult<Vec<Ticket>> {
        let Some(raw) = self.store.get(keys::TICKETS).await? else {
            return Ok(Vec::new());
        };
        match store::decode_document(keys::TICKETS, &raw) {
            Ok(tickets) => Ok(tickets),
            Err(error) => {
                warn!(%error, "unreadable ticket slot, treating as empty");
                Ok(Vec::new())
            }
        }
    }

    /// Validate a draft and prepend the new ticket to the sequence.
    ///
    /// New tickets start `open`; priority and category come from the
    /// draft (form defaults: `medium`, `technical`).
    pub async fn create(&self, draft: TicketDraft, created_by: &str) -> RealProResult<Ticket> {
        let title = draft.title.trim();
        if title.is_empty() {
            return Err(RealProError::validation("title", "Title is required"));
        }
        if title.chars().count() < 5 {
            return Err(RealProError::validation(
                "title",
                "Title must be at least 5 characters",
            ));
        }

        let description = draft.description.trim();
        if description.is_empty() {
            return Err(RealProError::validation(
                "description",
                "Description is required",
            ));
        }
        if description.chars().count() < 10 {
            return Err(RealProError::validation(
                "description",
                "Description must be at least 10 characters",
            ));
        }

        let mut tickets = self.list().await?;
        let now = Utc::now();
        let ticket = Ticket {
            id: next_id(&tickets),
            title: title.to_string(),
            description: description.to_string(),
            priority: draft.priority,
            category: draft.category,
            status: TicketStatus::Open,
            created_at: now,
            updated_at: now,
            created_by: created_by.to_string(),
        };

        tickets.insert(0, ticket.clone());
        self.persist(&tickets).await?;
        info!(id = ticket.id, created_by, "ticket created");
        Ok(ticket)
    }

    /// Remove a ticket by id.
    ///
    /// Idempotent: an absent id leaves the sequence untouched and emits
    /// nothing.
    pub async fn remove(&self, id: u64) -> RealProResult<()> {
        let mut tickets = self.list().await?;
        let before = tickets.len();
        tickets.retain(|t| t.id != id);
        if tickets.len() == before {
            return Ok(());
        }

        self.persist(&tickets).await?;
        info!(id, "ticket removed");
        Ok(())
    }

    /// Subscribe to change notifications. Ticket mutations arrive as
    /// events carrying the tickets slot key; a list view re-reads when
    /// one lands, so no interval refresh is needed.
    pub fn watch(&self) -> broadcast::Receiver<StoreChange> {
        self.store.subscribe()
    }

    async fn persist(&self, tickets: &[Ticket]) -> RealProResult<()> {
        let doc = store::encode_document(&tickets)?;
        self.store.set(keys::TICKETS, doc).await
    }
}
