//! Seat reservation collaborator trait and in-memory implementation.

use std::sync::{Arc, RwLock};

use domain::AccountId;

/// Trait for the external seat booking system.
///
/// Like the payment gateway, the booking system is assumed to always
/// succeed; seat capacity is its concern, not this component's.
pub trait SeatReservationService: Send + Sync {
    /// Reserves seats for an account.
    fn reserve_seat(&self, account_id: AccountId, total_seats_to_allocate: u32);
}

#[derive(Debug, Default)]
struct InMemoryReservationState {
    reservations: Vec<(AccountId, u32)>,
}

/// In-memory seat reservation service for testing.
#[derive(Debug, Clone, Default)]
pub struct InMemorySeatReservationService {
    state: Arc<RwLock<InMemoryReservationState>>,
}

impl InMemorySeatReservationService {
    /// Creates a new in-memory seat reservation service.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of reservations made.
    pub fn reservation_count(&self) -> usize {
        self.state.read().unwrap().reservations.len()
    }

    /// Returns every reservation in call order.
    pub fn reservations(&self) -> Vec<(AccountId, u32)> {
        self.state.read().unwrap().reservations.clone()
    }

    /// Returns the most recent reservation, if any.
    pub fn last_reservation(&self) -> Option<(AccountId, u32)> {
        self.state.read().unwrap().reservations.last().copied()
    }
}

impl SeatReservationService for InMemorySeatReservationService {
    fn reserve_seat(&self, account_id: AccountId, total_seats_to_allocate: u32) {
        self.state
            .write()
            .unwrap()
            .reservations
            .push((account_id, total_seats_to_allocate));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_reservations_in_call_order() {
        let service = InMemorySeatReservationService::new();
        let account_id = AccountId::new(42);

        service.reserve_seat(account_id, 1);
        service.reserve_seat(account_id, 3);

        assert_eq!(service.reservation_count(), 2);
        assert_eq!(
            service.reservations(),
            vec![(account_id, 1), (account_id, 3)]
        );
        assert_eq!(service.last_reservation(), Some((account_id, 3)));
    }

    #[test]
    fn test_clones_share_state() {
        let service = InMemorySeatReservationService::new();
        let handle = service.clone();

        service.reserve_seat(AccountId::new(1), 2);

        assert_eq!(handle.reservation_count(), 1);
    }
}
