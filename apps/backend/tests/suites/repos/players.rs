use cardroom_backend::db::txn::with_txn;
use cardroom_backend::domain::{Card, CardNumber, Round, Suit};
use cardroom_backend::errors::domain::{DomainError, ValidationKind};
use cardroom_backend::repos::attributes::{parse_attributes, PLAYER_ATTRIBUTES, PLAYER_CARDS};
use cardroom_backend::repos::merge::CardRow;
use cardroom_backend::repos::players;
use cardroom_backend::AppError;
use serde_json::json;

use crate::support::build_test_state;
use crate::support::factory::{create_game, create_member, seat};

fn card(number: &str, suit: &str) -> CardRow {
    CardRow {
        number: number.into(),
        suit: suit.into(),
    }
}

#[tokio::test]
async fn players_carry_member_fields_and_hands() -> Result<(), AppError> {
    let state = build_test_state().await?;

    with_txn(None, &state, |txn| {
        Box::pin(async move {
            let member = create_member(txn, "holder").await?;
            let game = create_game(txn, Round::Flop, vec![]).await?;
            let held = seat(
                txn,
                game,
                Some(member.id),
                vec![
                    Card::new(CardNumber::Ace, Suit::Spades),
                    Card::new(CardNumber::Eight, Suit::Hearts),
                ],
            )
            .await?;
            let empty = seat(txn, game, None, vec![]).await?;

            let list = players::list(txn, game).await?;
            assert_eq!(list.len(), 2);

            let first = &list[0];
            assert_eq!(first.parent.player_id, held);
            assert_eq!(first.parent.member_id, Some(member.id));
            assert_eq!(first.parent.member_nickname.as_deref(), Some(member.nickname.as_str()));
            assert_eq!(first.parent.member_level.as_deref(), Some("1"));
            assert_eq!(first.parent.player_status, "checked");
            assert_eq!(first.cards, vec![card("A", "spades"), card("8", "hearts")]);

            let second = &list[1];
            assert_eq!(second.parent.player_id, empty);
            assert_eq!(second.parent.member_id, None);
            assert_eq!(second.parent.member_nickname, None);
            assert!(second.cards.is_empty());
            Ok(())
        })
    })
    .await
}

#[tokio::test]
async fn find_by_id_is_scoped_to_the_game() -> Result<(), AppError> {
    let state = build_test_state().await?;

    with_txn(None, &state, |txn| {
        Box::pin(async move {
            let game = create_game(txn, Round::Blind, vec![]).await?;
            let other = create_game(txn, Round::Blind, vec![]).await?;
            let player = seat(txn, game, None, vec![]).await?;

            assert!(players::find_by_id(txn, game, player).await?.is_some());
            assert!(players::find_by_id(txn, other, player).await?.is_none());
            Ok(())
        })
    })
    .await
}

#[tokio::test]
async fn patch_status_bet_and_hand() -> Result<(), AppError> {
    let state = build_test_state().await?;

    with_txn(None, &state, |txn| {
        Box::pin(async move {
            let game = create_game(txn, Round::River, vec![]).await?;
            let player = seat(txn, game, None, vec![Card::new(CardNumber::Two, Suit::Clubs)]).await?;

            let attrs = json!({
                "playerStatus": "raised",
                "playerBet": 300,
                "playerCards": [
                    {"cardNumber": "8", "cardSuit": "spades"},
                    {"cardNumber": "9", "cardSuit": "spades"}
                ]
            });
            let changes = parse_attributes(
                attrs.as_object().expect("object"),
                &PLAYER_ATTRIBUTES,
                Some(PLAYER_CARDS),
            )?;
            assert!(players::patch(txn, player, changes).await?);

            let patched = players::find_by_id(txn, game, player).await?.expect("player");
            assert_eq!(patched.parent.player_status, "raised");
            assert_eq!(patched.parent.player_bet, "300");
            assert_eq!(patched.cards, vec![card("8", "spades"), card("9", "spades")]);

            let fold = json!({"playerStatus": "folded", "playerCards": []});
            let changes = parse_attributes(
                fold.as_object().expect("object"),
                &PLAYER_ATTRIBUTES,
                Some(PLAYER_CARDS),
            )?;
            assert!(players::patch(txn, player, changes).await?);
            let folded = players::find_by_id(txn, game, player).await?.expect("player");
            assert_eq!(folded.parent.player_status, "folded");
            assert!(folded.cards.is_empty());
            Ok(())
        })
    })
    .await
}

#[tokio::test]
async fn unknown_card_in_patch_is_rejected() -> Result<(), AppError> {
    let state = build_test_state().await?;

    with_txn(None, &state, |txn| {
        Box::pin(async move {
            let attrs = json!({"playerCards": [{"cardNumber": "1", "cardSuit": "spades"}]});
            let err = parse_attributes(
                attrs.as_object().expect("object"),
                &PLAYER_ATTRIBUTES,
                Some(PLAYER_CARDS),
            )
            .unwrap_err();
            assert!(matches!(err, DomainError::Validation(ValidationKind::UnknownCard, _)));

            let game = create_game(txn, Round::River, vec![]).await?;
            assert!(players::list(txn, game).await?.is_empty());
            Ok(())
        })
    })
    .await
}

#[tokio::test]
async fn delete_removes_only_that_player() -> Result<(), AppError> {
    let state = build_test_state().await?;

    with_txn(None, &state, |txn| {
        Box::pin(async move {
            let game = create_game(txn, Round::Turn, vec![]).await?;
            let gone = seat(txn, game, None, vec![Card::new(CardNumber::Jack, Suit::Hearts)]).await?;
            let kept = seat(txn, game, None, vec![Card::new(CardNumber::Jack, Suit::Spades)]).await?;

            assert!(players::delete(txn, game, gone).await?);
            assert!(!players::delete(txn, game, gone).await?);

            let left = players::list(txn, game).await?;
            assert_eq!(left.len(), 1);
            assert_eq!(left[0].parent.player_id, kept);
            assert_eq!(left[0].cards, vec![card("J", "spades")]);
            Ok(())
        })
    })
    .await
}
