use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_query::{ColumnDef, ForeignKey, ForeignKeyAction, Index, Query, Table};

#[derive(DeriveMigrationName)]
pub struct Migration;

// ----- Iden enums for tables & columns -----
#[derive(Iden)]
enum Rounds {
    Table,
    RoundId,
    Round,
}

#[derive(Iden)]
enum Statuses {
    Table,
    StatusId,
    Status,
}

#[derive(Iden)]
enum CardNumbers {
    Table,
    CardNumberId,
    CardNumber,
}

#[derive(Iden)]
enum CardSuits {
    Table,
    SuitId,
    Suit,
}

#[derive(Iden)]
enum Cards {
    Table,
    CardId,
    CardNumberId,
    CardSuitId,
}

#[derive(Iden)]
enum Games {
    Table,
    GameId,
    RoundId,
    MinimumBet,
    MaximumBet,
    BetPool,
}

#[derive(Iden)]
enum Members {
    Table,
    MemberId,
    MemberNickname,
    MemberEmail,
    MemberLevel,
    MemberExpOverLevel,
}

#[derive(Iden)]
enum Players {
    Table,
    PlayerId,
    MemberId,
    GameId,
    PlayerBet,
    StatusId,
}

#[derive(Iden)]
enum TableCards {
    Table,
    TableCardId,
    GameId,
    CardId,
}

#[derive(Iden)]
enum PlayerCards {
    Table,
    PlayerCardId,
    PlayerId,
    CardId,
}

const ROUNDS: [&str; 5] = ["blind", "flop", "turn", "river", "showdown"];
const STATUSES: [&str; 4] = ["checked", "raised", "called", "folded"];
const CARD_NUMBERS: [&str; 13] = [
    "2", "3", "4", "5", "6", "7", "8", "9", "10", "J", "Q", "K", "A",
];
const CARD_SUITS: [&str; 4] = ["spades", "hearts", "diamonds", "clubs"];

fn id_column<T: IntoIden>(col: T) -> ColumnDef {
    ColumnDef::new(col)
        .big_integer()
        .not_null()
        .primary_key()
        .auto_increment()
        .to_owned()
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // ----- reference tables -----
        manager
            .create_table(
                Table::create()
                    .table(Rounds::Table)
                    .if_not_exists()
                    .col(id_column(Rounds::RoundId))
                    .col(ColumnDef::new(Rounds::Round).string().not_null().unique_key())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Statuses::Table)
                    .if_not_exists()
                    .col(id_column(Statuses::StatusId))
                    .col(
                        ColumnDef::new(Statuses::Status)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(CardNumbers::Table)
                    .if_not_exists()
                    .col(id_column(CardNumbers::CardNumberId))
                    .col(
                        ColumnDef::new(CardNumbers::CardNumber)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(CardSuits::Table)
                    .if_not_exists()
                    .col(id_column(CardSuits::SuitId))
                    .col(ColumnDef::new(CardSuits::Suit).string().not_null().unique_key())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Cards::Table)
                    .if_not_exists()
                    .col(id_column(Cards::CardId))
                    .col(ColumnDef::new(Cards::CardNumberId).big_integer().not_null())
                    .col(ColumnDef::new(Cards::CardSuitId).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_cards_card_number")
                            .from(Cards::Table, Cards::CardNumberId)
                            .to(CardNumbers::Table, CardNumbers::CardNumberId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_cards_card_suit")
                            .from(Cards::Table, Cards::CardSuitId)
                            .to(CardSuits::Table, CardSuits::SuitId),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_cards_number_suit_unique")
                    .table(Cards::Table)
                    .col(Cards::CardNumberId)
                    .col(Cards::CardSuitId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // ----- games -----
        manager
            .create_table(
                Table::create()
                    .table(Games::Table)
                    .if_not_exists()
                    .col(id_column(Games::GameId))
                    .col(ColumnDef::new(Games::RoundId).big_integer().not_null())
                    .col(ColumnDef::new(Games::MinimumBet).string().not_null())
                    .col(ColumnDef::new(Games::MaximumBet).string().not_null())
                    .col(ColumnDef::new(Games::BetPool).string().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_games_round")
                            .from(Games::Table, Games::RoundId)
                            .to(Rounds::Table, Rounds::RoundId),
                    )
                    .to_owned(),
            )
            .await?;

        // ----- members -----
        manager
            .create_table(
                Table::create()
                    .table(Members::Table)
                    .if_not_exists()
                    .col(id_column(Members::MemberId))
                    .col(ColumnDef::new(Members::MemberNickname).string().not_null())
                    .col(ColumnDef::new(Members::MemberEmail).string().not_null())
                    .col(
                        ColumnDef::new(Members::MemberLevel)
                            .string()
                            .not_null()
                            .default("1"),
                    )
                    .col(
                        ColumnDef::new(Members::MemberExpOverLevel)
                            .string()
                            .not_null()
                            .default("0"),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_members_nickname_unique")
                    .table(Members::Table)
                    .col(Members::MemberNickname)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_members_email_unique")
                    .table(Members::Table)
                    .col(Members::MemberEmail)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // ----- players -----
        manager
            .create_table(
                Table::create()
                    .table(Players::Table)
                    .if_not_exists()
                    .col(id_column(Players::PlayerId))
                    .col(ColumnDef::new(Players::MemberId).big_integer().null())
                    .col(ColumnDef::new(Players::GameId).big_integer().not_null())
                    .col(ColumnDef::new(Players::PlayerBet).string().not_null())
                    .col(ColumnDef::new(Players::StatusId).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_players_member")
                            .from(Players::Table, Players::MemberId)
                            .to(Members::Table, Members::MemberId)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_players_game")
                            .from(Players::Table, Players::GameId)
                            .to(Games::Table, Games::GameId)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_players_status")
                            .from(Players::Table, Players::StatusId)
                            .to(Statuses::Table, Statuses::StatusId),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_players_game")
                    .table(Players::Table)
                    .col(Players::GameId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_players_member")
                    .table(Players::Table)
                    .col(Players::MemberId)
                    .to_owned(),
            )
            .await?;

        // ----- card join tables (surrogate id keeps insertion order) -----
        manager
            .create_table(
                Table::create()
                    .table(TableCards::Table)
                    .if_not_exists()
                    .col(id_column(TableCards::TableCardId))
                    .col(ColumnDef::new(TableCards::GameId).big_integer().not_null())
                    .col(ColumnDef::new(TableCards::CardId).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_table_cards_game")
                            .from(TableCards::Table, TableCards::GameId)
                            .to(Games::Table, Games::GameId)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_table_cards_card")
                            .from(TableCards::Table, TableCards::CardId)
                            .to(Cards::Table, Cards::CardId),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(PlayerCards::Table)
                    .if_not_exists()
                    .col(id_column(PlayerCards::PlayerCardId))
                    .col(ColumnDef::new(PlayerCards::PlayerId).big_integer().not_null())
                    .col(ColumnDef::new(PlayerCards::CardId).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_player_cards_player")
                            .from(PlayerCards::Table, PlayerCards::PlayerId)
                            .to(Players::Table, Players::PlayerId)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_player_cards_card")
                            .from(PlayerCards::Table, PlayerCards::CardId)
                            .to(Cards::Table, Cards::CardId),
                    )
                    .to_owned(),
            )
            .await?;

        // ----- reference data -----
        seed_labels(manager, Rounds::Table, Rounds::RoundId, Rounds::Round, &ROUNDS).await?;
        seed_labels(
            manager,
            Statuses::Table,
            Statuses::StatusId,
            Statuses::Status,
            &STATUSES,
        )
        .await?;
        seed_labels(
            manager,
            CardNumbers::Table,
            CardNumbers::CardNumberId,
            CardNumbers::CardNumber,
            &CARD_NUMBERS,
        )
        .await?;
        seed_labels(
            manager,
            CardSuits::Table,
            CardSuits::SuitId,
            CardSuits::Suit,
            &CARD_SUITS,
        )
        .await?;

        // Full deck: card_id = number_index * 4 + suit_index + 1
        let mut deck = Query::insert()
            .into_table(Cards::Table)
            .columns([Cards::CardId, Cards::CardNumberId, Cards::CardSuitId])
            .to_owned();
        for number in 0..CARD_NUMBERS.len() as i64 {
            for suit in 0..CARD_SUITS.len() as i64 {
                deck.values_panic([
                    (number * CARD_SUITS.len() as i64 + suit + 1).into(),
                    (number + 1).into(),
                    (suit + 1).into(),
                ]);
            }
        }
        manager.exec_stmt(deck).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PlayerCards::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(TableCards::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Players::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Members::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Games::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Cards::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(CardSuits::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(CardNumbers::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Statuses::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Rounds::Table).to_owned())
            .await?;
        Ok(())
    }
}

/// Insert `labels` into a two-column reference table with ids 1..=n.
async fn seed_labels<T, C>(
    manager: &SchemaManager<'_>,
    table: T,
    id_col: C,
    label_col: C,
    labels: &[&str],
) -> Result<(), DbErr>
where
    T: IntoIden + 'static,
    C: IntoIden + 'static,
{
    let mut insert = Query::insert()
        .into_table(table)
        .columns([id_col, label_col])
        .to_owned();
    for (idx, label) in labels.iter().enumerate() {
        insert.values_panic([(idx as i64 + 1).into(), (*label).into()]);
    }
    manager.exec_stmt(insert).await
}
