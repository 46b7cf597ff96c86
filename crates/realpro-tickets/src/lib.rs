//! RealPro Tickets — the ticket store: list, create, remove, filter,
//! dashboard statistics, and change subscription.

mod store;

pub use store::{TicketStore, filter, recent, stats};
