//! Business-rule validation for ticket requests.

use crate::error::PurchaseError;

use super::value_objects::{TicketType, TicketTypeRequest};

/// Maximum number of tickets in a single purchase.
pub const MAX_TICKETS_PER_PURCHASE: u32 = 25;

/// Validates the ticket requests of one purchase.
///
/// Rules are checked in order and the first violation is returned: the
/// per-purchase ticket ceiling, adult presence, then the infant/adult
/// ratio (one lap per adult). Succeeds with no side effects.
pub fn validate_ticket_requests(requests: &[TicketTypeRequest]) -> Result<(), PurchaseError> {
    validate_ticket_count(requests)?;
    validate_adult_is_present(requests)?;
    validate_infants_do_not_exceed_adults(requests)
}

fn validate_ticket_count(requests: &[TicketTypeRequest]) -> Result<(), PurchaseError> {
    let ticket_sum: u32 = requests.iter().map(TicketTypeRequest::no_of_tickets).sum();
    if ticket_sum > MAX_TICKETS_PER_PURCHASE {
        return Err(PurchaseError::TooManyTickets);
    }
    Ok(())
}

fn validate_adult_is_present(requests: &[TicketTypeRequest]) -> Result<(), PurchaseError> {
    let has_adult = requests
        .iter()
        .any(|request| request.ticket_type() == TicketType::Adult);
    if !has_adult {
        return Err(PurchaseError::AdultTicketRequired);
    }
    Ok(())
}

fn validate_infants_do_not_exceed_adults(
    requests: &[TicketTypeRequest],
) -> Result<(), PurchaseError> {
    // Counts are summed per type, so a purchase split across several
    // requests of the same type is not undercounted.
    let infant_tickets = total_of(requests, TicketType::Infant);
    let adult_tickets = total_of(requests, TicketType::Adult);
    if infant_tickets > adult_tickets {
        return Err(PurchaseError::TooManyInfants);
    }
    Ok(())
}

fn total_of(requests: &[TicketTypeRequest], ticket_type: TicketType) -> u32 {
    requests
        .iter()
        .filter(|request| request.ticket_type() == ticket_type)
        .map(TicketTypeRequest::no_of_tickets)
        .sum()
}
