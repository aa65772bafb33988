//! The single failure surface for ticket purchasing.

use crate::types::MAX_TICKETS_PER_PURCHASE;
use thiserror::Error;

/// Why a purchase attempt was rejected.
///
/// One error type covers every failure in the flow, whether raised by
/// validation or translated from a collaborator, so callers see a single
/// uniform surface. Every variant carries a human-readable reason; nothing is
/// swallowed or retried, and any failure aborts the whole purchase.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidPurchaseError {
    /// A ticket category tag from outside the type system was not one of
    /// `ADULT`, `CHILD`, `INFANT`
    #[error("invalid ticket type: {supplied}")]
    InvalidTicketType {
        /// The unrecognised tag as supplied
        supplied: String,
    },

    /// A request carried a zero or negative ticket count
    #[error("ticket count must be greater than zero (got {quantity})")]
    InvalidQuantity {
        /// The rejected count as supplied
        quantity: i32,
    },

    /// The seat-occupying tickets exceeded the per-purchase cap
    #[error("cannot purchase more than {MAX_TICKETS_PER_PURCHASE} tickets (requested {requested})")]
    TooManyTickets {
        /// Seat-occupying tickets requested
        requested: u64,
    },

    /// Child or infant tickets were requested without any adult ticket
    #[error("child and infant tickets require at least one adult ticket")]
    AdultRequired,

    /// The payment collaborator reported a failure
    #[error("payment processing failed: {reason}")]
    PaymentFailed {
        /// Reason reported by the payment collaborator
        reason: String,
    },

    /// The seat-reservation collaborator reported a failure
    #[error("seat reservation failed: {reason}")]
    ReservationFailed {
        /// Reason reported by the reservation collaborator
        reason: String,
    },
}
