//! # Cinema Tickets Testing
//!
//! Collaborator doubles for exercising the purchase flow without real
//! payment or seat-booking services.
//!
//! This crate provides:
//! - [`ScriptedPaymentGateway`]: records every charge and optionally fails
//!   with a scripted reason
//! - [`RecordingSeatReservationGateway`]: records every reservation and
//!   optionally fails with a scripted reason
//!
//! ## Example
//!
//! ```ignore
//! use cinema_tickets_testing::{RecordingSeatReservationGateway, ScriptedPaymentGateway};
//!
//! #[tokio::test]
//! async fn test_failed_payment_stops_the_purchase() {
//!     let payments = ScriptedPaymentGateway::failing("card declined");
//!     let reservations = RecordingSeatReservationGateway::succeeding();
//!     let service = TicketService::new(payments.clone(), reservations.clone());
//!
//!     let result = service.purchase_tickets(account, &requests).await;
//!
//!     assert!(result.is_err());
//!     assert!(reservations.calls().is_empty());
//! }
//! ```

use chrono::Utc;
use cinema_tickets_core::gateway::{
    BookingConfirmation, GatewayError, GatewayResult, PaymentGateway, PaymentReceipt,
    SeatReservationGateway,
};
use cinema_tickets_core::types::{AccountId, Money};
use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};

/// Payment double that records every charge.
///
/// Succeeds by default; [`failing`](Self::failing) scripts a declined charge
/// so tests can drive the orchestrator down its failure path. Calls are
/// recorded either way, letting tests assert on fail-fast ordering.
#[derive(Debug, Default)]
pub struct ScriptedPaymentGateway {
    failure: Option<String>,
    calls: Mutex<Vec<(AccountId, Money)>>,
}

impl ScriptedPaymentGateway {
    /// Creates a double that accepts every charge
    #[must_use]
    pub fn succeeding() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Creates a double that declines every charge with `reason`
    #[must_use]
    pub fn failing(reason: &str) -> Arc<Self> {
        Arc::new(Self {
            failure: Some(reason.to_string()),
            calls: Mutex::new(Vec::new()),
        })
    }

    /// Returns the `(account, amount)` pairs charged so far
    #[allow(clippy::expect_used)] // Test double, a poisoned lock is a test bug
    #[must_use]
    pub fn calls(&self) -> Vec<(AccountId, Money)> {
        self.calls.lock().expect("payment call log poisoned").clone()
    }

    #[allow(clippy::expect_used)] // Test double, a poisoned lock is a test bug
    fn record(&self, account_id: AccountId, amount: Money) {
        self.calls
            .lock()
            .expect("payment call log poisoned")
            .push((account_id, amount));
    }
}

impl PaymentGateway for ScriptedPaymentGateway {
    fn process_payment(
        &self,
        account_id: AccountId,
        amount: Money,
    ) -> Pin<Box<dyn Future<Output = GatewayResult<PaymentReceipt>> + Send + '_>> {
        self.record(account_id, amount);
        let failure = self.failure.clone();
        Box::pin(async move {
            match failure {
                Some(reason) => Err(GatewayError::Declined { reason }),
                None => Ok(PaymentReceipt {
                    transaction_id: format!("test_txn_{}", uuid::Uuid::new_v4()),
                    amount,
                    processed_at: Utc::now(),
                }),
            }
        })
    }
}

/// Seat-reservation double that records every reservation.
///
/// Succeeds by default; [`failing`](Self::failing) scripts a refused
/// reservation. An empty call log after a failed purchase proves the
/// orchestrator never reached the reservation stage.
#[derive(Debug, Default)]
pub struct RecordingSeatReservationGateway {
    failure: Option<String>,
    calls: Mutex<Vec<(AccountId, u32)>>,
}

impl RecordingSeatReservationGateway {
    /// Creates a double that accepts every reservation
    #[must_use]
    pub fn succeeding() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Creates a double that refuses every reservation with `reason`
    #[must_use]
    pub fn failing(reason: &str) -> Arc<Self> {
        Arc::new(Self {
            failure: Some(reason.to_string()),
            calls: Mutex::new(Vec::new()),
        })
    }

    /// Returns the `(account, seats)` pairs reserved so far
    #[allow(clippy::expect_used)] // Test double, a poisoned lock is a test bug
    #[must_use]
    pub fn calls(&self) -> Vec<(AccountId, u32)> {
        self.calls
            .lock()
            .expect("reservation call log poisoned")
            .clone()
    }

    #[allow(clippy::expect_used)] // Test double, a poisoned lock is a test bug
    fn record(&self, account_id: AccountId, seats: u32) {
        self.calls
            .lock()
            .expect("reservation call log poisoned")
            .push((account_id, seats));
    }
}

impl SeatReservationGateway for RecordingSeatReservationGateway {
    fn reserve_seats(
        &self,
        account_id: AccountId,
        seats: u32,
    ) -> Pin<Box<dyn Future<Output = GatewayResult<BookingConfirmation>> + Send + '_>> {
        self.record(account_id, seats);
        let failure = self.failure.clone();
        Box::pin(async move {
            match failure {
                Some(reason) => Err(GatewayError::Unavailable { reason }),
                None => Ok(BookingConfirmation {
                    booking_id: format!("test_booking_{}", uuid::Uuid::new_v4()),
                    seats,
                    reserved_at: Utc::now(),
                }),
            }
        })
    }
}
