use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Clients::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Clients::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Clients::GymId).integer().not_null())
                    .col(ColumnDef::new(Clients::FirstName).string_len(100).not_null())
                    .col(ColumnDef::new(Clients::LastName).string_len(100).not_null())
                    .col(ColumnDef::new(Clients::Email).string_len(255).unique_key())
                    .col(ColumnDef::new(Clients::Phone).string_len(32).not_null())
                    .col(ColumnDef::new(Clients::BirthDate).date())
                    .col(ColumnDef::new(Clients::Gender).string_len(32))
                    .col(ColumnDef::new(Clients::Address).string_len(512))
                    .col(ColumnDef::new(Clients::JoinDate).date().not_null())
                    .col(ColumnDef::new(Clients::Notes).text())
                    .col(
                        ColumnDef::new(Clients::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(Clients::CreatedAt)
                            .timestamp()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Clients::UpdatedAt)
                            .timestamp()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_clients_gym_id")
                            .from(Clients::Table, Clients::GymId)
                            .to(Gyms::Table, Gyms::Id)
                            .on_update(ForeignKeyAction::Cascade)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_clients_gym_id")
                    .table(Clients::Table)
                    .col(Clients::GymId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Clients::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Clients {
    Table,
    Id,
    GymId,
    FirstName,
    LastName,
    Email,
    Phone,
    BirthDate,
    Gender,
    Address,
    JoinDate,
    Notes,
    IsActive,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Gyms {
    Table,
    Id,
}
