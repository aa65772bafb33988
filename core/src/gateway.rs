//! Collaborator gateways for payment and seat reservation.
//!
//! This module provides the two external-service interfaces the purchase flow
//! hands its totals to, together with mock implementations for development
//! and testing. In production, the mocks would be replaced with real payment
//! and seat-booking integrations.

use crate::types::{AccountId, Money};
use chrono::{DateTime, Utc};
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

/// Gateway call result
pub type GatewayResult<T> = Result<T, GatewayError>;

/// Failure reported by a collaborator.
///
/// The purchase flow never interprets a collaborator beyond success or
/// failure; the reason text is carried through to the caller verbatim.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GatewayError {
    /// The collaborator declined the request
    #[error("{reason}")]
    Declined {
        /// Reason reported by the collaborator
        reason: String,
    },
    /// The collaborator could not be reached
    #[error("service unavailable: {reason}")]
    Unavailable {
        /// Reason reported by the transport
        reason: String,
    },
}

/// Receipt returned by a successful payment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentReceipt {
    /// Gateway transaction ID
    pub transaction_id: String,
    /// Amount charged
    pub amount: Money,
    /// When the charge was processed
    pub processed_at: DateTime<Utc>,
}

/// Confirmation returned by a successful seat reservation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingConfirmation {
    /// Booking reference from the reservation service
    pub booking_id: String,
    /// Number of seats reserved
    pub seats: u32,
    /// When the seats were reserved
    pub reserved_at: DateTime<Utc>,
}

/// Payment collaborator.
///
/// Abstraction over whatever charges the buying account; the flow supplies
/// exactly the computed total cost.
pub trait PaymentGateway: Send + Sync {
    /// Charge `amount` to `account_id`
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`] if the charge fails
    fn process_payment(
        &self,
        account_id: AccountId,
        amount: Money,
    ) -> Pin<Box<dyn Future<Output = GatewayResult<PaymentReceipt>> + Send + '_>>;
}

/// Seat-reservation collaborator.
///
/// Abstraction over whatever holds seats for the buying account; the flow
/// supplies exactly the computed seat total.
pub trait SeatReservationGateway: Send + Sync {
    /// Reserve `seats` seats for `account_id`
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`] if the reservation fails
    fn reserve_seats(
        &self,
        account_id: AccountId,
        seats: u32,
    ) -> Pin<Box<dyn Future<Output = GatewayResult<BookingConfirmation>> + Send + '_>>;
}

/// Mock payment gateway (always succeeds for development)
#[derive(Clone, Debug)]
pub struct MockPaymentGateway {
    latency: Duration,
}

impl MockPaymentGateway {
    /// Creates a new mock payment gateway with no simulated latency
    #[must_use]
    pub const fn new() -> Self {
        Self {
            latency: Duration::ZERO,
        }
    }

    /// Creates a mock payment gateway with simulated network latency
    #[must_use]
    pub const fn with_latency(latency: Duration) -> Self {
        Self { latency }
    }

    /// Creates an Arc-wrapped instance for sharing
    #[must_use]
    pub fn shared() -> Arc<dyn PaymentGateway> {
        Arc::new(Self::new())
    }
}

impl Default for MockPaymentGateway {
    fn default() -> Self {
        Self::new()
    }
}

impl PaymentGateway for MockPaymentGateway {
    fn process_payment(
        &self,
        account_id: AccountId,
        amount: Money,
    ) -> Pin<Box<dyn Future<Output = GatewayResult<PaymentReceipt>> + Send + '_>> {
        let latency = self.latency;
        Box::pin(async move {
            // Simulate network delay
            tokio::time::sleep(latency).await;

            let transaction_id = format!("mock_txn_{}", uuid::Uuid::new_v4());

            tracing::info!(
                account_id = %account_id,
                amount = %amount,
                transaction_id = %transaction_id,
                "Mock payment processed successfully"
            );

            Ok(PaymentReceipt {
                transaction_id,
                amount,
                processed_at: Utc::now(),
            })
        })
    }
}

/// Mock seat-reservation gateway (always succeeds for development)
#[derive(Clone, Debug)]
pub struct MockSeatReservationGateway {
    latency: Duration,
}

impl MockSeatReservationGateway {
    /// Creates a new mock reservation gateway with no simulated latency
    #[must_use]
    pub const fn new() -> Self {
        Self {
            latency: Duration::ZERO,
        }
    }

    /// Creates a mock reservation gateway with simulated network latency
    #[must_use]
    pub const fn with_latency(latency: Duration) -> Self {
        Self { latency }
    }

    /// Creates an Arc-wrapped instance for sharing
    #[must_use]
    pub fn shared() -> Arc<dyn SeatReservationGateway> {
        Arc::new(Self::new())
    }
}

impl Default for MockSeatReservationGateway {
    fn default() -> Self {
        Self::new()
    }
}

impl SeatReservationGateway for MockSeatReservationGateway {
    fn reserve_seats(
        &self,
        account_id: AccountId,
        seats: u32,
    ) -> Pin<Box<dyn Future<Output = GatewayResult<BookingConfirmation>> + Send + '_>> {
        let latency = self.latency;
        Box::pin(async move {
            // Simulate network delay
            tokio::time::sleep(latency).await;

            let booking_id = format!("mock_booking_{}", uuid::Uuid::new_v4());

            tracing::info!(
                account_id = %account_id,
                seats = seats,
                booking_id = %booking_id,
                "Mock seats reserved successfully"
            );

            Ok(BookingConfirmation {
                booking_id,
                seats,
                reserved_at: Utc::now(),
            })
        })
    }
}
