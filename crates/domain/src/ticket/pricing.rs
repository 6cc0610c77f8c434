//! Ticket pricing.

use serde::{Deserialize, Serialize};

use super::value_objects::{Money, TicketType};

/// Read-only mapping from ticket type to unit price.
///
/// The table is fixed for the lifetime of the service that holds it; there
/// is no mutation API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingTable {
    adult: Money,
    child: Money,
    infant: Money,
}

impl PricingTable {
    /// The standard cinema prices: adults £25, children £15, infants free.
    pub fn standard() -> Self {
        Self {
            adult: Money::from_pounds(25),
            child: Money::from_pounds(15),
            infant: Money::zero(),
        }
    }

    /// Creates a pricing table with explicit unit prices.
    pub fn new(adult: Money, child: Money, infant: Money) -> Self {
        Self {
            adult,
            child,
            infant,
        }
    }

    /// Returns the unit price for a ticket type.
    pub fn price(&self, ticket_type: TicketType) -> Money {
        match ticket_type {
            TicketType::Adult => self.adult,
            TicketType::Child => self.child,
            TicketType::Infant => self.infant,
        }
    }
}

impl Default for PricingTable {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_prices() {
        let prices = PricingTable::standard();
        assert_eq!(prices.price(TicketType::Adult), Money::from_pounds(25));
        assert_eq!(prices.price(TicketType::Child), Money::from_pounds(15));
        assert!(prices.price(TicketType::Infant).is_zero());
    }

    #[test]
    fn test_default_is_standard() {
        assert_eq!(PricingTable::default(), PricingTable::standard());
    }

    #[test]
    fn test_explicit_prices() {
        let prices = PricingTable::new(
            Money::from_pounds(10),
            Money::from_pounds(5),
            Money::from_pence(50),
        );
        assert_eq!(prices.price(TicketType::Adult).pence(), 1000);
        assert_eq!(prices.price(TicketType::Child).pence(), 500);
        assert_eq!(prices.price(TicketType::Infant).pence(), 50);
    }
}
