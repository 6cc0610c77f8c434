//! Payment collaborator trait and in-memory implementation.

use std::sync::{Arc, RwLock};

use domain::{AccountId, Money};

/// Trait for the external payment gateway.
///
/// The gateway is assumed to always succeed once a purchase has passed
/// validation, so there is no failure channel.
pub trait TicketPaymentService: Send + Sync {
    /// Captures a payment against an account.
    fn make_payment(&self, account_id: AccountId, amount_to_pay: Money);
}

#[derive(Debug, Default)]
struct InMemoryPaymentState {
    payments: Vec<(AccountId, Money)>,
}

/// In-memory payment service for testing.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTicketPaymentService {
    state: Arc<RwLock<InMemoryPaymentState>>,
}

impl InMemoryTicketPaymentService {
    /// Creates a new in-memory payment service.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of payments captured.
    pub fn payment_count(&self) -> usize {
        self.state.read().unwrap().payments.len()
    }

    /// Returns every captured payment in call order.
    pub fn payments(&self) -> Vec<(AccountId, Money)> {
        self.state.read().unwrap().payments.clone()
    }

    /// Returns the most recent payment, if any.
    pub fn last_payment(&self) -> Option<(AccountId, Money)> {
        self.state.read().unwrap().payments.last().copied()
    }
}

impl TicketPaymentService for InMemoryTicketPaymentService {
    fn make_payment(&self, account_id: AccountId, amount_to_pay: Money) {
        self.state
            .write()
            .unwrap()
            .payments
            .push((account_id, amount_to_pay));
    }
}
