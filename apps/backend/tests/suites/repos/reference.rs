use cardroom_backend::db::txn::with_txn;
use cardroom_backend::domain::{Card, CardNumber, PlayerStatus, Round, Suit};
use cardroom_backend::errors::domain::{DomainError, ValidationKind};
use cardroom_backend::repos::reference;
use cardroom_backend::AppError;
use sea_orm::{EntityTrait, PaginatorTrait};

use crate::support::build_test_state;

#[tokio::test]
async fn seeded_reference_data_is_complete() -> Result<(), AppError> {
    let state = build_test_state().await?;

    with_txn(None, &state, |txn| {
        Box::pin(async move {
            use cardroom_backend::entities::{card_numbers, card_suits, cards, rounds, statuses};

            assert_eq!(cards::Entity::find().count(txn).await?, 52);
            assert_eq!(card_numbers::Entity::find().count(txn).await?, 13);
            assert_eq!(card_suits::Entity::find().count(txn).await?, 4);
            assert_eq!(rounds::Entity::find().count(txn).await?, 5);
            assert_eq!(statuses::Entity::find().count(txn).await?, 4);

            for round in Round::ALL {
                reference::round_id(txn, round).await?;
            }
            for status in PlayerStatus::ALL {
                reference::status_id(txn, status).await?;
            }
            Ok(())
        })
    })
    .await
}

#[tokio::test]
async fn card_ids_follow_request_order() -> Result<(), AppError> {
    let state = build_test_state().await?;

    with_txn(None, &state, |txn| {
        Box::pin(async move {
            let hand = [
                Card::new(CardNumber::Ace, Suit::Spades),
                Card::new(CardNumber::Two, Suit::Spades),
                Card::new(CardNumber::Ace, Suit::Spades),
            ];
            let ids = reference::card_ids(txn, &hand).await?;
            assert_eq!(ids.len(), 3);
            assert_eq!(ids[0], ids[2]);
            assert_ne!(ids[0], ids[1]);

            assert!(reference::card_ids(txn, &[]).await?.is_empty());
            Ok(())
        })
    })
    .await
}

#[tokio::test]
async fn every_card_in_the_deck_resolves() -> Result<(), AppError> {
    let state = build_test_state().await?;

    with_txn(None, &state, |txn| {
        Box::pin(async move {
            let deck: Vec<Card> = CardNumber::ALL
                .into_iter()
                .flat_map(|n| Suit::ALL.into_iter().map(move |s| Card::new(n, s)))
                .collect();
            let mut ids = reference::card_ids(txn, &deck).await?;
            ids.sort_unstable();
            ids.dedup();
            assert_eq!(ids.len(), 52);
            Ok(())
        })
    })
    .await
}

#[test]
fn unknown_card_kind_is_a_validation_error() {
    let err = DomainError::validation(ValidationKind::UnknownCard, "x");
    assert_eq!(AppError::from(err).status().as_u16(), 400);
}
