//! Purchase validation and totals calculation.
//!
//! The core of the purchase flow: a pure function that enforces every
//! business rule over a batch of [`TicketTypeRequest`]s and derives the two
//! totals the collaborators consume. No side effects, no shared state;
//! calling it twice with the same input yields the same result.

use crate::error::InvalidPurchaseError;
use crate::types::{Money, PurchaseTotals, TicketType, TicketTypeRequest, MAX_TICKETS_PER_PURCHASE};

/// Validates a batch of ticket requests and derives the purchase totals.
///
/// Walks the requests once in input order, rejecting any non-positive
/// quantity, then applies the two aggregate rules: at most
/// [`MAX_TICKETS_PER_PURCHASE`] seat-occupying tickets, and child/infant
/// tickets only alongside at least one adult ticket. Per-request failures
/// surface before aggregate failures, so a malformed request is never masked
/// by an aggregate rule judged against partially-valid data.
///
/// Infant tickets are priced (at zero) and counted toward the adult
/// accompaniment rule, but consume no seat and are excluded from the cap.
///
/// An empty batch is a valid no-op purchase: it yields `£0.00` and zero
/// seats, and triggers no adult requirement.
///
/// # Errors
///
/// Returns [`InvalidPurchaseError`] when any rule is violated:
/// - [`InvalidQuantity`](InvalidPurchaseError::InvalidQuantity) for a count ≤ 0,
/// - [`TooManyTickets`](InvalidPurchaseError::TooManyTickets) when seat-occupying
///   tickets exceed the cap,
/// - [`AdultRequired`](InvalidPurchaseError::AdultRequired) for child/infant
///   tickets without an adult.
pub fn validate_and_total(
    requests: &[TicketTypeRequest],
) -> Result<PurchaseTotals, InvalidPurchaseError> {
    let mut adult_count: u64 = 0;
    let mut child_and_infant_count: u64 = 0;
    let mut total_cost = Money::ZERO;
    let mut total_seats: u64 = 0;

    for request in requests {
        // Positive quantities always fit in u32; everything else is rejected.
        let quantity = u32::try_from(request.quantity())
            .ok()
            .filter(|quantity| *quantity > 0)
            .ok_or(InvalidPurchaseError::InvalidQuantity {
                quantity: request.quantity(),
            })?;

        let ticket_type = request.ticket_type();
        match ticket_type {
            TicketType::Adult => adult_count += u64::from(quantity),
            TicketType::Child | TicketType::Infant => {
                child_and_infant_count += u64::from(quantity);
            }
        }
        if ticket_type.occupies_seat() {
            total_seats += u64::from(quantity);
        }

        // Saturation is unreachable for any batch small enough to pass the
        // seat cap, so accepted totals are always exact.
        total_cost = total_cost.saturating_add(ticket_type.price().saturating_multiply(quantity));
    }

    if total_seats > u64::from(MAX_TICKETS_PER_PURCHASE) {
        return Err(InvalidPurchaseError::TooManyTickets {
            requested: total_seats,
        });
    }

    if child_and_infant_count > 0 && adult_count == 0 {
        return Err(InvalidPurchaseError::AdultRequired);
    }

    // total_seats <= 20 here, so the narrowing conversion cannot fail.
    let total_seats = u32::try_from(total_seats).unwrap_or(MAX_TICKETS_PER_PURCHASE);

    Ok(PurchaseTotals {
        total_cost,
        total_seats,
    })
}
