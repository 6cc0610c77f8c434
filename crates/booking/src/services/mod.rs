//! External collaborator traits and in-memory implementations.

pub mod payment;
pub mod seat_reservation;

pub use payment::{InMemoryTicketPaymentService, TicketPaymentService};
pub use seat_reservation::{InMemorySeatReservationService, SeatReservationService};
