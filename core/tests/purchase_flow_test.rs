//! Purchase orchestration integration tests.
//!
//! Exercises the full flow through `TicketService` with recording gateway
//! doubles, including the fail-fast ordering between payment and reservation.
//!
//! Run with: `cargo test --test purchase_flow_test`

#![allow(clippy::unwrap_used)]
#![allow(clippy::panic)]

use cinema_tickets_core::{
    telemetry, AccountId, Config, InvalidPurchaseError, MockPaymentGateway,
    MockSeatReservationGateway, Money, TicketService, TicketType, TicketTypeRequest,
};
use cinema_tickets_testing::{RecordingSeatReservationGateway, ScriptedPaymentGateway};
use std::sync::Arc;

fn request(ticket_type: TicketType, quantity: i32) -> TicketTypeRequest {
    TicketTypeRequest::new(ticket_type, quantity)
}

#[tokio::test]
async fn test_valid_purchase_charges_and_reserves_the_computed_totals() {
    telemetry::init_tracing("cinema_tickets_core=debug");

    let payments = ScriptedPaymentGateway::succeeding();
    let reservations = RecordingSeatReservationGateway::succeeding();
    let service = TicketService::new(payments.clone(), reservations.clone());
    let account = AccountId::new(1);

    service
        .purchase_tickets(
            account,
            &[
                request(TicketType::Adult, 1),
                request(TicketType::Child, 1),
                request(TicketType::Infant, 1),
            ],
        )
        .await
        .unwrap();

    // £20 + £10 + £0 paid; the infant takes no seat
    assert_eq!(payments.calls(), vec![(account, Money::from_pounds(30))]);
    assert_eq!(reservations.calls(), vec![(account, 2)]);
}

#[tokio::test]
async fn test_validation_failure_invokes_no_collaborator() {
    let payments = ScriptedPaymentGateway::succeeding();
    let reservations = RecordingSeatReservationGateway::succeeding();
    let service = TicketService::new(payments.clone(), reservations.clone());

    let err = service
        .purchase_tickets(
            AccountId::new(1),
            &[request(TicketType::Child, 1), request(TicketType::Infant, 1)],
        )
        .await
        .unwrap_err();

    assert_eq!(err, InvalidPurchaseError::AdultRequired);
    assert!(payments.calls().is_empty());
    assert!(reservations.calls().is_empty());
}

#[tokio::test]
async fn test_over_cap_purchase_is_rejected_before_payment() {
    let payments = ScriptedPaymentGateway::succeeding();
    let reservations = RecordingSeatReservationGateway::succeeding();
    let service = TicketService::new(payments.clone(), reservations.clone());

    let err = service
        .purchase_tickets(
            AccountId::new(1),
            &[request(TicketType::Adult, 10), request(TicketType::Child, 11)],
        )
        .await
        .unwrap_err();

    assert!(matches!(err, InvalidPurchaseError::TooManyTickets { .. }));
    assert!(payments.calls().is_empty());
}

#[tokio::test]
async fn test_payment_failure_skips_reservation() {
    let payments = ScriptedPaymentGateway::failing("card declined");
    let reservations = RecordingSeatReservationGateway::succeeding();
    let service = TicketService::new(payments.clone(), reservations.clone());

    let err = service
        .purchase_tickets(AccountId::new(2), &[request(TicketType::Adult, 1)])
        .await
        .unwrap_err();

    match err {
        InvalidPurchaseError::PaymentFailed { reason } => {
            assert!(reason.contains("card declined"));
        }
        other => panic!("expected PaymentFailed, got {other:?}"),
    }

    // Fail-fast: the reservation collaborator is never invoked
    assert_eq!(payments.calls().len(), 1);
    assert!(reservations.calls().is_empty());
}

#[tokio::test]
async fn test_reservation_failure_after_successful_payment() {
    let payments = ScriptedPaymentGateway::succeeding();
    let reservations = RecordingSeatReservationGateway::failing("venue offline");
    let service = TicketService::new(payments.clone(), reservations.clone());

    let err = service
        .purchase_tickets(AccountId::new(3), &[request(TicketType::Adult, 2)])
        .await
        .unwrap_err();

    match err {
        InvalidPurchaseError::ReservationFailed { reason } => {
            assert!(reason.contains("venue offline"));
        }
        other => panic!("expected ReservationFailed, got {other:?}"),
    }

    // No compensation: the charge stands, the purchase is abandoned whole
    assert_eq!(payments.calls(), vec![(AccountId::new(3), Money::from_pounds(40))]);
    assert_eq!(reservations.calls(), vec![(AccountId::new(3), 2)]);
}

#[tokio::test]
async fn test_purchase_through_env_configured_mock_gateways() {
    let config = Config::from_env();
    let service = TicketService::new(
        Arc::new(MockPaymentGateway::with_latency(config.payment.latency())),
        Arc::new(MockSeatReservationGateway::with_latency(
            config.reservation.latency(),
        )),
    );

    let result = service
        .purchase_tickets(AccountId::new(5), &[request(TicketType::Adult, 2)])
        .await;

    assert!(result.is_ok());
}

#[tokio::test]
async fn test_empty_purchase_passes_zero_totals_through() {
    let payments = ScriptedPaymentGateway::succeeding();
    let reservations = RecordingSeatReservationGateway::succeeding();
    let service = TicketService::new(payments.clone(), reservations.clone());
    let account = AccountId::new(4);

    service.purchase_tickets(account, &[]).await.unwrap();

    assert_eq!(payments.calls(), vec![(account, Money::ZERO)]);
    assert_eq!(reservations.calls(), vec![(account, 0)]);
}
