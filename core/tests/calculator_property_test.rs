//! Property tests for the validator/calculator.
//!
//! Checks the cost and seat formulas and the aggregate rules across generated
//! request batches rather than hand-picked examples.

#![allow(clippy::unwrap_used)]

use cinema_tickets_core::{
    validate_and_total, InvalidPurchaseError, TicketType, TicketTypeRequest,
};
use proptest::prelude::*;

fn ticket_type() -> impl Strategy<Value = TicketType> {
    prop_oneof![
        Just(TicketType::Adult),
        Just(TicketType::Child),
        Just(TicketType::Infant),
    ]
}

/// Batches that always include an adult and stay under the seat cap
fn valid_batch() -> impl Strategy<Value = Vec<TicketTypeRequest>> {
    (1..=5i32, proptest::collection::vec((ticket_type(), 1..=3i32), 0..4)).prop_map(
        |(adults, rest)| {
            let mut requests = vec![TicketTypeRequest::new(TicketType::Adult, adults)];
            requests.extend(
                rest.into_iter()
                    .map(|(ticket_type, quantity)| TicketTypeRequest::new(ticket_type, quantity)),
            );
            requests
        },
    )
}

proptest! {
    #[test]
    fn cost_is_the_sum_of_price_times_quantity(batch in valid_batch()) {
        let totals = validate_and_total(&batch).unwrap();

        let expected_pence: u64 = batch
            .iter()
            .map(|r| r.ticket_type().price().pence() * u64::try_from(r.quantity()).unwrap())
            .sum();

        prop_assert_eq!(totals.total_cost.pence(), expected_pence);
    }

    #[test]
    fn seats_count_every_non_infant_ticket(batch in valid_batch()) {
        let totals = validate_and_total(&batch).unwrap();

        let expected_seats: u64 = batch
            .iter()
            .filter(|r| r.ticket_type().occupies_seat())
            .map(|r| u64::try_from(r.quantity()).unwrap())
            .sum();

        prop_assert_eq!(u64::from(totals.total_seats), expected_seats);
    }

    #[test]
    fn accepted_batches_never_exceed_the_cap(batch in valid_batch()) {
        let totals = validate_and_total(&batch).unwrap();
        prop_assert!(totals.total_seats <= cinema_tickets_core::MAX_TICKETS_PER_PURCHASE);
    }

    #[test]
    fn any_non_positive_quantity_rejects_the_batch(
        batch in valid_batch(),
        bad_quantity in -3..=0i32,
        bad_type in ticket_type(),
    ) {
        let mut batch = batch;
        batch.push(TicketTypeRequest::new(bad_type, bad_quantity));

        let err = validate_and_total(&batch).unwrap_err();
        prop_assert_eq!(
            err,
            InvalidPurchaseError::InvalidQuantity { quantity: bad_quantity }
        );
    }

    #[test]
    fn over_cap_batches_are_rejected(extra in 1..=50i32) {
        let seats = 20 + extra;
        let err = validate_and_total(&[TicketTypeRequest::new(TicketType::Adult, seats)])
            .unwrap_err();

        prop_assert_eq!(
            err,
            InvalidPurchaseError::TooManyTickets { requested: u64::try_from(seats).unwrap() }
        );
    }
}
