//! Domain layer for cinema ticket purchasing.
//!
//! This crate provides the pure pricing and validation logic:
//! - Value objects for accounts, money, ticket types, and ticket requests
//! - The read-only pricing table
//! - Business-rule validation for the ticket requests of one purchase

pub mod error;
pub mod ticket;

pub use error::PurchaseError;
pub use ticket::{
    AccountId, MAX_TICKETS_PER_PURCHASE, Money, PricingTable, TicketType, TicketTypeRequest,
    validate_ticket_requests,
};
