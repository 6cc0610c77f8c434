//! Purchase error types.

use thiserror::Error;

/// Errors that reject a ticket purchase.
///
/// Every failure is detected before either collaborator is invoked, so a
/// rejected purchase has no side effects. The rendered message is the
/// reason shown to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PurchaseError {
    /// The requests exceed the per-purchase ticket ceiling.
    #[error("Cannot purchase more than 25 tickets")]
    TooManyTickets,

    /// No adult ticket in the purchase.
    #[error("At least one adult ticket must be purchased")]
    AdultTicketRequired,

    /// More infants than adult laps to seat them on.
    #[error(
        "There should be at least one adult per infant. An adult should not have two or more infants on their lap"
    )]
    TooManyInfants,

    /// The account id is zero or negative.
    #[error("Account ID must be greater than zero")]
    InvalidAccountId,
}
