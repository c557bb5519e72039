//! Create `entry` table.
//!
//! The single resource of the API: a note/reminder card with two
//! user-visible timestamps.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Entry::Table)
                    .if_not_exists()
                    .col(uuid(Entry::Id).primary_key())
                    .col(string(Entry::Title).not_null())
                    .col(text(Entry::Description).not_null())
                    .col(timestamp_with_time_zone(Entry::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(Entry::ScheduledAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Entry::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Entry { Table, Id, Title, Description, CreatedAt, ScheduledAt }
