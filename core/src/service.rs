//! Purchase orchestration.
//!
//! Thin sequencing around the calculator: validate, charge, reserve. Any
//! collaborator failure is translated into the same [`InvalidPurchaseError`]
//! surface validation uses, so callers handle one error kind regardless of
//! which stage failed.

use crate::calculator::validate_and_total;
use crate::error::InvalidPurchaseError;
use crate::gateway::{PaymentGateway, SeatReservationGateway};
use crate::types::{AccountId, TicketTypeRequest};
use std::sync::Arc;

/// Ticket purchase service.
///
/// Holds the two collaborator gateways and sequences a purchase:
/// validate-and-total, then pay, then reserve. Calls are strictly sequential;
/// a payment failure means the reservation gateway is never invoked, and
/// nothing is retried or compensated — the caller retries the whole purchase
/// with corrected input.
pub struct TicketService {
    payments: Arc<dyn PaymentGateway>,
    reservations: Arc<dyn SeatReservationGateway>,
}

impl TicketService {
    /// Creates a new `TicketService` over the given collaborators
    #[must_use]
    pub fn new(
        payments: Arc<dyn PaymentGateway>,
        reservations: Arc<dyn SeatReservationGateway>,
    ) -> Self {
        Self {
            payments,
            reservations,
        }
    }

    /// Purchase tickets for an account.
    ///
    /// Validates the requests, charges the computed total to the account,
    /// then reserves the computed seats. Returns nothing on success.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidPurchaseError`] if validation rejects the requests or
    /// either collaborator reports a failure; collaborator failure reasons
    /// are preserved in the error.
    pub async fn purchase_tickets(
        &self,
        account_id: AccountId,
        requests: &[TicketTypeRequest],
    ) -> Result<(), InvalidPurchaseError> {
        let totals = validate_and_total(requests)?;

        let receipt = self
            .payments
            .process_payment(account_id, totals.total_cost)
            .await
            .map_err(|e| {
                tracing::warn!(account_id = %account_id, error = %e, "Payment failed");
                InvalidPurchaseError::PaymentFailed {
                    reason: e.to_string(),
                }
            })?;

        let confirmation = self
            .reservations
            .reserve_seats(account_id, totals.total_seats)
            .await
            .map_err(|e| {
                tracing::warn!(account_id = %account_id, error = %e, "Seat reservation failed");
                InvalidPurchaseError::ReservationFailed {
                    reason: e.to_string(),
                }
            })?;

        tracing::info!(
            account_id = %account_id,
            total_cost = %totals.total_cost,
            total_seats = totals.total_seats,
            transaction_id = %receipt.transaction_id,
            booking_id = %confirmation.booking_id,
            "Purchase completed"
        );

        Ok(())
    }
}
