//! Ticket purchase orchestration.

use domain::{
    AccountId, Money, PricingTable, PurchaseError, TicketTypeRequest, validate_ticket_requests,
};

use crate::services::payment::TicketPaymentService;
use crate::services::seat_reservation::SeatReservationService;

/// Orchestrates a single ticket purchase.
///
/// Validates the ticket requests and the account, computes the total cost
/// and seat count, then dispatches to the payment gateway and the seat
/// booking system, in that order, exactly once each. No compensation logic
/// exists; both collaborators are assumed to succeed once validation has
/// passed.
pub struct TicketService<P, R>
where
    P: TicketPaymentService,
    R: SeatReservationService,
{
    payment: P,
    reservation: R,
    prices: PricingTable,
}

impl<P, R> TicketService<P, R>
where
    P: TicketPaymentService,
    R: SeatReservationService,
{
    /// Creates a ticket service using the standard pricing table.
    pub fn new(payment: P, reservation: R) -> Self {
        Self::with_pricing(payment, reservation, PricingTable::standard())
    }

    /// Creates a ticket service with an explicit pricing table.
    pub fn with_pricing(payment: P, reservation: R, prices: PricingTable) -> Self {
        Self {
            payment,
            reservation,
            prices,
        }
    }

    /// Purchases tickets for an account.
    ///
    /// Ticket requests are validated before the account id; on any
    /// validation failure the error propagates to the caller and neither
    /// collaborator is invoked.
    #[tracing::instrument(skip(self, requests), fields(request_count = requests.len()))]
    pub fn purchase_tickets(
        &self,
        account_id: AccountId,
        requests: &[TicketTypeRequest],
    ) -> Result<(), PurchaseError> {
        metrics::counter!("ticket_purchases_total").increment(1);

        validate_ticket_requests(requests)?;
        if !account_id.is_valid() {
            return Err(PurchaseError::InvalidAccountId);
        }

        let total_cost = self.total_cost(requests);
        let total_seats = total_seats(requests);

        tracing::info!(%account_id, amount = %total_cost, "capturing payment");
        self.payment.make_payment(account_id, total_cost);

        tracing::info!(%account_id, seats = total_seats, "reserving seats");
        self.reservation.reserve_seat(account_id, total_seats);

        metrics::counter!("ticket_purchases_completed_total").increment(1);
        Ok(())
    }

    fn total_cost(&self, requests: &[TicketTypeRequest]) -> Money {
        requests.iter().fold(Money::zero(), |acc, request| {
            acc + self
                .prices
                .price(request.ticket_type())
                .multiply(request.no_of_tickets())
        })
    }
}

fn total_seats(requests: &[TicketTypeRequest]) -> u32 {
    requests
        .iter()
        .filter(|request| request.ticket_type().occupies_seat())
        .map(TicketTypeRequest::no_of_tickets)
        .sum()
}
