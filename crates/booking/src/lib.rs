//! Purchase orchestration for cinema tickets.
//!
//! This crate wires the domain validation and pricing rules to the two
//! external collaborators: payment capture and seat reservation. One
//! purchase call validates the requests and the account, computes the
//! totals, then invokes payment and reservation exactly once each, in
//! that order.

pub mod service;
pub mod services;

pub use service::TicketService;
pub use services::{
    InMemorySeatReservationService, InMemoryTicketPaymentService, SeatReservationService,
    TicketPaymentService,
};
