//! Cinema Tickets - ticket purchase validation and orchestration
//!
//! Validates and prices a batch of ticket-purchase requests for a single
//! buying account, then hands the two derived totals to external
//! collaborators: money owed to a payment gateway, seats to a reservation
//! service.
//!
//! # Architecture
//!
//! ```text
//!                  ┌─────────────────────┐
//!  requests ─────► │   TicketService     │
//!                  │   (orchestrator)    │
//!                  └──────────┬──────────┘
//!                             │
//!              validate_and_total(requests)
//!                             │
//!              ┌──────────────┴──────────────┐
//!              ▼                             ▼
//!     ┌─────────────────┐          ┌──────────────────────┐
//!     │ PaymentGateway  │          │ SeatReservationGateway│
//!     │ (total cost)    │          │ (total seats)         │
//!     └─────────────────┘          └──────────────────────┘
//! ```
//!
//! The validator/calculator is the core: a pure function enforcing the
//! business rules (positive counts, the 20-seat cap with infants exempt, and
//! adult accompaniment for child/infant tickets). The orchestrator is thin
//! glue that sequences the two collaborator calls and translates any failure
//! into the single [`InvalidPurchaseError`] surface.
//!
//! # Usage
//!
//! ```
//! use cinema_tickets_core::{
//!     AccountId, MockPaymentGateway, MockSeatReservationGateway, TicketService, TicketType,
//!     TicketTypeRequest,
//! };
//!
//! # async fn example() -> Result<(), cinema_tickets_core::InvalidPurchaseError> {
//! let service = TicketService::new(
//!     MockPaymentGateway::shared(),
//!     MockSeatReservationGateway::shared(),
//! );
//!
//! service
//!     .purchase_tickets(
//!         AccountId::new(42),
//!         &[
//!             TicketTypeRequest::new(TicketType::Adult, 2),
//!             TicketTypeRequest::new(TicketType::Infant, 1),
//!         ],
//!     )
//!     .await
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod calculator;
pub mod config;
pub mod error;
pub mod gateway;
pub mod service;
pub mod telemetry;
pub mod types;

pub use calculator::validate_and_total;
pub use config::{Config, GatewayConfig};
pub use error::InvalidPurchaseError;
pub use gateway::{
    BookingConfirmation, GatewayError, GatewayResult, MockPaymentGateway,
    MockSeatReservationGateway, PaymentGateway, PaymentReceipt, SeatReservationGateway,
};
pub use service::TicketService;
pub use types::{
    AccountId, Money, PurchaseTotals, TicketType, TicketTypeRequest, MAX_TICKETS_PER_PURCHASE,
};
