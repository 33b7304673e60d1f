use cardroom_backend::db::txn::with_txn;
use cardroom_backend::domain::{Card, CardNumber, Round, Suit};
use cardroom_backend::repos::attributes::{parse_attributes, GAME_ATTRIBUTES, TABLE_CARDS};
use cardroom_backend::repos::games::{self, GameFilter};
use cardroom_backend::repos::merge::CardRow;
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

fn attrs(v: serde_json::Value) -> serde_json::Map<String, serde_json::Value> {
    v.as_object().cloned().unwrap_or_default()
}

#[tokio::test]
async fn list_merges_table_cards_in_deal_order() -> Result<(), AppError> {
    let state = build_test_state().await?;

    with_txn(None, &state, |txn| {
        Box::pin(async move {
            let first = create_game(
                txn,
                Round::Flop,
                vec![
                    Card::new(CardNumber::Queen, Suit::Hearts),
                    Card::new(CardNumber::Two, Suit::Clubs),
                    Card::new(CardNumber::Ten, Suit::Spades),
                ],
            )
            .await?;
            let second = create_game(txn, Round::Blind, vec![]).await?;

            let all = games::list(txn, &GameFilter::default()).await?;
            assert_eq!(all.len(), 2);

            assert_eq!(all[0].parent.game_id, first);
            assert_eq!(all[0].parent.round, "flop");
            assert_eq!(
                all[0].cards,
                vec![card("Q", "hearts"), card("2", "clubs"), card("10", "spades")]
            );

            assert_eq!(all[1].parent.game_id, second);
            assert!(all[1].cards.is_empty());
            Ok(())
        })
    })
    .await
}

#[tokio::test]
async fn round_filter_is_applied_in_sql() -> Result<(), AppError> {
    let state = build_test_state().await?;

    with_txn(None, &state, |txn| {
        Box::pin(async move {
            create_game(txn, Round::River, vec![]).await?;
            let blind = create_game(txn, Round::Blind, vec![]).await?;

            let filtered = games::list(
                txn,
                &GameFilter {
                    round: Some(Round::Blind),
                },
            )
            .await?;
            assert_eq!(filtered.len(), 1);
            assert_eq!(filtered[0].parent.game_id, blind);

            let none = games::list(
                txn,
                &GameFilter {
                    round: Some(Round::Showdown),
                },
            )
            .await?;
            assert!(none.is_empty());
            Ok(())
        })
    })
    .await
}

#[tokio::test]
async fn find_by_id_is_none_for_missing_game() -> Result<(), AppError> {
    let state = build_test_state().await?;

    with_txn(None, &state, |txn| {
        Box::pin(async move {
            assert!(games::find_by_id(txn, 9_999).await?.is_none());
            assert!(!games::exists(txn, 9_999).await?);

            let id = create_game(txn, Round::Turn, vec![Card::new(CardNumber::Ace, Suit::Clubs)])
                .await?;
            let game = games::find_by_id(txn, id).await?.expect("game");
            assert_eq!(game.cards, vec![card("A", "clubs")]);
            assert!(games::exists(txn, id).await?);
            Ok(())
        })
    })
    .await
}

#[tokio::test]
async fn patch_translates_round_and_replaces_cards() -> Result<(), AppError> {
    let state = build_test_state().await?;

    with_txn(None, &state, |txn| {
        Box::pin(async move {
            let id = create_game(txn, Round::Blind, vec![Card::new(CardNumber::Two, Suit::Spades)])
                .await?;

            let changes = parse_attributes(
                &attrs(json!({
                    "round": "river",
                    "betPool": 0,
                    "minimumBet": null,
                    "tableCards": [
                        {"cardNumber": "8", "cardSuit": "diamonds"},
                        {"cardNumber": "9", "cardSuit": "diamonds"}
                    ]
                })),
                &GAME_ATTRIBUTES,
                Some(TABLE_CARDS),
            )?;
            assert!(games::patch(txn, id, changes).await?);

            let game = games::find_by_id(txn, id).await?.expect("game");
            assert_eq!(game.parent.round, "river");
            assert_eq!(game.parent.bet_pool, "0");
            assert_eq!(game.parent.minimum_bet, "100");
            assert_eq!(game.cards, vec![card("8", "diamonds"), card("9", "diamonds")]);

            let clear =
                parse_attributes(&attrs(json!({"tableCards": []})), &GAME_ATTRIBUTES, Some(TABLE_CARDS))?;
            assert!(games::patch(txn, id, clear).await?);
            assert!(games::find_by_id(txn, id).await?.expect("game").cards.is_empty());
            Ok(())
        })
    })
    .await
}

#[tokio::test]
async fn empty_patch_is_a_successful_no_op() -> Result<(), AppError> {
    let state = build_test_state().await?;

    with_txn(None, &state, |txn| {
        Box::pin(async move {
            let changes = parse_attributes(
                &attrs(json!({"round": null, "betPool": ""})),
                &GAME_ATTRIBUTES,
                Some(TABLE_CARDS),
            )?;
            assert!(changes.is_empty());
            // No UPDATE runs, so even a missing game reports success.
            assert!(games::patch(txn, 424_242, changes).await?);
            Ok(())
        })
    })
    .await
}

#[tokio::test]
async fn games_by_member_are_the_seated_ones() -> Result<(), AppError> {
    let state = build_test_state().await?;

    with_txn(None, &state, |txn| {
        Box::pin(async move {
            let member = create_member(txn, "seated").await?;
            let playing = create_game(txn, Round::Flop, vec![]).await?;
            let other = create_game(txn, Round::Flop, vec![]).await?;
            seat(txn, playing, Some(member.id), vec![]).await?;
            seat(txn, other, None, vec![]).await?;

            let found = games::list_by_member(txn, member.id).await?;
            let ids: Vec<i64> = found.iter().map(|g| g.parent.game_id).collect();
            assert_eq!(ids, vec![playing]);
            Ok(())
        })
    })
    .await
}
