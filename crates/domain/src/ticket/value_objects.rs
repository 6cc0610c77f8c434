//! Value objects for the ticket purchasing domain.

use serde::{Deserialize, Serialize};

/// Identifier of the account paying for a purchase.
///
/// Wraps the raw integer id to prevent mixing it up with ticket counts or
/// monetary amounts at call sites.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountId(i64);

impl AccountId {
    /// Creates an account ID from a raw integer.
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    /// Returns the underlying integer.
    pub fn get(&self) -> i64 {
        self.0
    }

    /// Returns true if the id identifies a real account.
    ///
    /// Valid account ids are strictly greater than zero.
    pub fn is_valid(&self) -> bool {
        self.0 > 0
    }
}

impl std::fmt::Display for AccountId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for AccountId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl From<AccountId> for i64 {
    fn from(id: AccountId) -> Self {
        id.0
    }
}

/// Category of a cinema ticket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TicketType {
    /// Full-price ticket, occupies a seat.
    Adult,

    /// Reduced-price ticket, occupies a seat.
    Child,

    /// Free ticket; the infant sits on an adult's lap.
    Infant,
}

impl TicketType {
    /// Returns true if a ticket of this type is allocated a seat.
    pub fn occupies_seat(&self) -> bool {
        !matches!(self, TicketType::Infant)
    }

    /// Returns the ticket type name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            TicketType::Adult => "ADULT",
            TicketType::Child => "CHILD",
            TicketType::Infant => "INFANT",
        }
    }
}

impl std::fmt::Display for TicketType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Money amount represented in pence to avoid floating point issues.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub struct Money {
    /// Amount in pence (e.g. 2500 = £25.00)
    pence: u64,
}

impl Money {
    /// Creates a new Money amount from pence.
    pub fn from_pence(pence: u64) -> Self {
        Self { pence }
    }

    /// Creates a new Money amount from a whole-pound value.
    pub fn from_pounds(pounds: u64) -> Self {
        Self {
            pence: pounds * 100,
        }
    }

    /// Returns zero money.
    pub fn zero() -> Self {
        Self { pence: 0 }
    }

    /// Returns the amount in pence.
    pub fn pence(&self) -> u64 {
        self.pence
    }

    /// Returns the pound portion (whole number).
    pub fn pounds(&self) -> u64 {
        self.pence / 100
    }

    /// Returns the pence portion (remainder after pounds).
    pub fn pence_part(&self) -> u64 {
        self.pence % 100
    }

    /// Returns true if the amount is zero.
    pub fn is_zero(&self) -> bool {
        self.pence == 0
    }

    /// Multiplies by a ticket quantity.
    pub fn multiply(&self, quantity: u32) -> Money {
        Money {
            pence: self.pence * quantity as u64,
        }
    }
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "£{}.{:02}", self.pounds(), self.pence_part())
    }
}

impl std::ops::Add for Money {
    type Output = Money;

    fn add(self, rhs: Self) -> Self::Output {
        Money {
            pence: self.pence + rhs.pence,
        }
    }
}

impl std::ops::AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        self.pence += rhs.pence;
    }
}

/// A request for a number of tickets of a single type.
///
/// Immutable once constructed; the validator and the orchestrator only read
/// it through the getters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TicketTypeRequest {
    ticket_type: TicketType,
    no_of_tickets: u32,
}

impl TicketTypeRequest {
    /// Creates a new ticket request.
    ///
    /// A sensible request carries a count of at least one; a zero count is
    /// representable and flows through validation unchanged.
    pub fn new(ticket_type: TicketType, no_of_tickets: u32) -> Self {
        Self {
            ticket_type,
            no_of_tickets,
        }
    }

    /// Returns the ticket type requested.
    pub fn ticket_type(&self) -> TicketType {
        self.ticket_type
    }

    /// Returns the number of tickets requested.
    pub fn no_of_tickets(&self) -> u32 {
        self.no_of_tickets
    }
}
