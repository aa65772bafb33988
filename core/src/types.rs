//! Domain types for ticket purchasing.
//!
//! Value objects for the purchase flow: account identifiers, the closed set of
//! ticket categories with their fixed prices, the caller-built
//! [`TicketTypeRequest`], and the [`PurchaseTotals`] produced by validation.

use crate::error::InvalidPurchaseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Maximum number of seat-occupying tickets in a single purchase.
///
/// Infant tickets are not counted against this cap (infants travel on an
/// adult's lap and occupy no seat).
pub const MAX_TICKETS_PER_PURCHASE: u32 = 20;

// ============================================================================
// Identifiers
// ============================================================================

/// Unique identifier for a purchase account.
///
/// Treated as an opaque, already-verified token. The purchase flow never
/// inspects it beyond passing it to the collaborators.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AccountId(u64);

impl AccountId {
    /// Creates an `AccountId` from a raw account number
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw account number
    #[must_use]
    pub const fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Ticket Categories and Pricing
// ============================================================================

/// The closed set of ticket categories.
///
/// Pricing is a total function over this enum, so an "unknown category" cannot
/// exist past the input boundary. Input arriving from outside the type system
/// (wire tags, user input) is guarded by the [`FromStr`] and serde
/// implementations, which reject anything but `ADULT`, `CHILD`, and `INFANT`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TicketType {
    /// Full-price ticket, occupies a seat
    Adult,
    /// Half-price ticket, occupies a seat
    Child,
    /// Free ticket, travels on an adult's lap, no seat
    Infant,
}

impl TicketType {
    /// Returns the fixed unit price for this category
    #[must_use]
    pub const fn price(self) -> Money {
        match self {
            Self::Adult => Money::from_pounds(20),
            Self::Child => Money::from_pounds(10),
            Self::Infant => Money::from_pounds(0),
        }
    }

    /// Whether tickets of this category consume a seat
    #[must_use]
    pub const fn occupies_seat(self) -> bool {
        !matches!(self, Self::Infant)
    }
}

impl FromStr for TicketType {
    type Err = InvalidPurchaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ADULT" => Ok(Self::Adult),
            "CHILD" => Ok(Self::Child),
            "INFANT" => Ok(Self::Infant),
            other => Err(InvalidPurchaseError::InvalidTicketType {
                supplied: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for TicketType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Adult => write!(f, "ADULT"),
            Self::Child => write!(f, "CHILD"),
            Self::Infant => write!(f, "INFANT"),
        }
    }
}

// ============================================================================
// Ticket Type Request
// ============================================================================

/// An immutable request for a number of tickets of one category.
///
/// The quantity deliberately admits zero and negative values: callers may
/// supply them and the validator must reject them, rather than the type
/// making the invalid state unrepresentable and silently absorbing caller
/// bugs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketTypeRequest {
    ticket_type: TicketType,
    quantity: i32,
}

impl TicketTypeRequest {
    /// Creates a new `TicketTypeRequest`
    #[must_use]
    pub const fn new(ticket_type: TicketType, quantity: i32) -> Self {
        Self {
            ticket_type,
            quantity,
        }
    }

    /// Creates a request from an untyped `(category tag, count)` pair.
    ///
    /// The boundary entry for input arriving from outside the type system;
    /// the quantity is carried as-is for the validator to judge.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidPurchaseError::InvalidTicketType`] for an unknown tag.
    pub fn parse(tag: &str, quantity: i32) -> Result<Self, InvalidPurchaseError> {
        Ok(Self::new(tag.parse()?, quantity))
    }

    /// Returns the requested ticket category
    #[must_use]
    pub const fn ticket_type(&self) -> TicketType {
        self.ticket_type
    }

    /// Returns the requested quantity as supplied by the caller
    #[must_use]
    pub const fn quantity(&self) -> i32 {
        self.quantity
    }
}

impl fmt::Display for TicketTypeRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} x{}", self.ticket_type, self.quantity)
    }
}

// ============================================================================
// Money Value Object (pence-based to avoid floating point errors)
// ============================================================================

/// Represents money in pence to avoid floating-point arithmetic errors
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Money(u64);

impl Money {
    /// The zero amount
    pub const ZERO: Self = Self(0);

    /// Creates a `Money` value from pence
    #[must_use]
    pub const fn from_pence(pence: u64) -> Self {
        Self(pence)
    }

    /// Creates a `Money` value from whole pounds
    ///
    /// # Panics
    ///
    /// Panics if the conversion would overflow (pounds * 100 > `u64::MAX`).
    /// Use `checked_from_pounds` for non-panicking conversion.
    #[must_use]
    #[allow(clippy::panic)]
    pub const fn from_pounds(pounds: u64) -> Self {
        match pounds.checked_mul(100) {
            Some(pence) => Self(pence),
            None => panic!("Money::from_pounds overflow"),
        }
    }

    /// Creates a `Money` value from whole pounds with overflow checking
    #[must_use]
    pub const fn checked_from_pounds(pounds: u64) -> Option<Self> {
        match pounds.checked_mul(100) {
            Some(pence) => Some(Self(pence)),
            None => None,
        }
    }

    /// Returns the amount in pence
    #[must_use]
    pub const fn pence(&self) -> u64 {
        self.0
    }

    /// Returns the amount in whole pounds (rounded down)
    #[must_use]
    pub const fn pounds(&self) -> u64 {
        self.0 / 100
    }

    /// Checks if the amount is zero
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Adds two money amounts with overflow checking
    #[must_use]
    pub const fn checked_add(self, other: Self) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(result) => Some(Self(result)),
            None => None,
        }
    }

    /// Adds two money amounts, saturating at the representable maximum
    #[must_use]
    pub const fn saturating_add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }

    /// Multiplies money by a quantity with overflow checking
    #[must_use]
    pub const fn checked_multiply(self, quantity: u32) -> Option<Self> {
        match self.0.checked_mul(quantity as u64) {
            Some(result) => Some(Self(result)),
            None => None,
        }
    }

    /// Multiplies money by a quantity, saturating at the representable maximum
    #[must_use]
    pub const fn saturating_multiply(self, quantity: u32) -> Self {
        Self(self.0.saturating_mul(quantity as u64))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "£{}.{:02}", self.pounds(), self.0 % 100)
    }
}

// ============================================================================
// Purchase Totals
// ============================================================================

/// The two derived totals of a validated purchase.
///
/// Produced only by [`crate::calculator::validate_and_total`] once every
/// validation rule has passed; consumed by the payment and seat-reservation
/// collaborators and then discarded.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseTotals {
    /// Total amount to charge the account
    pub total_cost: Money,
    /// Total seats to reserve (never counts Infant tickets)
    pub total_seats: u32,
}

impl fmt::Display for PurchaseTotals {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} for {} seat(s)", self.total_cost, self.total_seats)
    }
}
