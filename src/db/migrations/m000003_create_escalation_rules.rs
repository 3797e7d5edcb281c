use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(EscalationRules::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(EscalationRules::GuildId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(EscalationRules::Threshold)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(EscalationRules::Action)
                            .string_len(16)
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(EscalationRules::GuildId)
                            .col(EscalationRules::Threshold),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(EscalationRules::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum EscalationRules {
    Table,
    GuildId,
    Threshold,
    Action,
}
