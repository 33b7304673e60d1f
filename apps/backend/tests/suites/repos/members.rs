use cardroom_backend::adapters::members_sea::MemberFilter;
use cardroom_backend::db::txn::with_txn;
use cardroom_backend::domain::{Card, CardNumber, Round, Suit};
use cardroom_backend::entities::{player_cards, players};
use cardroom_backend::errors::domain::{ConflictKind, DomainError};
use cardroom_backend::repos::attributes::{parse_attributes, MEMBER_ATTRIBUTES};
use cardroom_backend::repos::members::{self, NewMember};
use cardroom_backend::AppError;
use sea_orm::{EntityTrait, PaginatorTrait};
use serde_json::json;

use crate::support::build_test_state;
use crate::support::factory::{create_game, create_member, seat};

#[tokio::test]
async fn create_applies_level_defaults() -> Result<(), AppError> {
    let state = build_test_state().await?;

    with_txn(None, &state, |txn| {
        Box::pin(async move {
            let member = members::create(
                txn,
                NewMember {
                    nickname: "Jack".into(),
                    email: "abc@efg.com".into(),
                    level: None,
                    exp_over_level: None,
                },
            )
            .await?;
            assert!(member.id > 0);
            assert_eq!(member.level, "1");
            assert_eq!(member.exp_over_level, "0");

            let fetched = members::find_by_id(txn, member.id).await?.expect("member");
            assert_eq!(fetched, member);
            Ok(())
        })
    })
    .await
}

#[tokio::test]
async fn list_filters_are_anded() -> Result<(), AppError> {
    let state = build_test_state().await?;

    with_txn(None, &state, |txn| {
        Box::pin(async move {
            let a = create_member(txn, "a").await?;
            let b = create_member(txn, "b").await?;

            assert_eq!(members::list(txn, &MemberFilter::default()).await?.len(), 2);

            let by_nick = members::list(
                txn,
                &MemberFilter {
                    nickname: Some(a.nickname.clone()),
                    email: None,
                },
            )
            .await?;
            assert_eq!(by_nick, vec![a.clone()]);

            let mismatched = members::list(
                txn,
                &MemberFilter {
                    nickname: Some(a.nickname.clone()),
                    email: Some(b.email.clone()),
                },
            )
            .await?;
            assert!(mismatched.is_empty());
            Ok(())
        })
    })
    .await
}

#[tokio::test]
async fn existence_check() -> Result<(), AppError> {
    let state = build_test_state().await?;

    with_txn(None, &state, |txn| {
        Box::pin(async move {
            assert!(members::all_exist(txn, &[]).await?);

            let a = create_member(txn, "a").await?;
            let b = create_member(txn, "b").await?;
            assert!(members::all_exist(txn, &[a.id, b.id]).await?);
            assert!(members::all_exist(txn, &[a.id, a.id]).await?);
            assert!(!members::all_exist(txn, &[a.id, b.id + 100]).await?);
            Ok(())
        })
    })
    .await
}

#[tokio::test]
async fn duplicate_nickname_is_a_conflict() -> Result<(), AppError> {
    let state = build_test_state().await?;

    with_txn(None, &state, |txn| {
        Box::pin(async move {
            let first = create_member(txn, "dup").await?;
            let err = members::create(
                txn,
                NewMember {
                    nickname: first.nickname.clone(),
                    email: "someone-else@example.test".into(),
                    level: None,
                    exp_over_level: None,
                },
            )
            .await
            .unwrap_err();
            assert!(
                matches!(err, DomainError::Conflict(ConflictKind::UniqueNickname, _)),
                "got {err:?}"
            );
            Ok(())
        })
    })
    .await
}

#[tokio::test]
async fn patch_sets_zero_and_skips_falsy() -> Result<(), AppError> {
    let state = build_test_state().await?;

    with_txn(None, &state, |txn| {
        Box::pin(async move {
            let member = create_member(txn, "p").await?;
            let attrs = json!({
                "memberLevel": 0,
                "memberExpOverLevel": 1234,
                "memberNickname": "",
                "memberEmail": null
            });
            let changes =
                parse_attributes(attrs.as_object().expect("object"), &MEMBER_ATTRIBUTES, None)?;
            assert!(members::patch(txn, member.id, changes).await?);

            let patched = members::find_by_id(txn, member.id).await?.expect("member");
            assert_eq!(patched.level, "0");
            assert_eq!(patched.exp_over_level, "1234");
            assert_eq!(patched.nickname, member.nickname);
            assert_eq!(patched.email, member.email);
            Ok(())
        })
    })
    .await
}

#[tokio::test]
async fn delete_cascades_to_seats_and_cards() -> Result<(), AppError> {
    let state = build_test_state().await?;

    with_txn(None, &state, |txn| {
        Box::pin(async move {
            let leaving = create_member(txn, "leaving").await?;
            let staying = create_member(txn, "staying").await?;
            let game = create_game(txn, Round::Turn, vec![]).await?;
            seat(
                txn,
                game,
                Some(leaving.id),
                vec![
                    Card::new(CardNumber::King, Suit::Hearts),
                    Card::new(CardNumber::King, Suit::Spades),
                ],
            )
            .await?;
            seat(txn, game, Some(staying.id), vec![Card::new(CardNumber::Three, Suit::Clubs)])
                .await?;

            assert!(members::delete(txn, leaving.id).await?);
            assert!(members::find_by_id(txn, leaving.id).await?.is_none());
            assert_eq!(players::Entity::find().count(txn).await?, 1);
            assert_eq!(player_cards::Entity::find().count(txn).await?, 1);

            assert!(!members::delete(txn, leaving.id).await?);
            Ok(())
        })
    })
    .await
}
