use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Gyms::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Gyms::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Gyms::Name).string_len(255).not_null())
                    .col(ColumnDef::new(Gyms::Address).string_len(512))
                    .col(ColumnDef::new(Gyms::Phone).string_len(32))
                    .col(ColumnDef::new(Gyms::Email).string_len(255))
                    .col(ColumnDef::new(Gyms::OperatingHours).string_len(255))
                    .col(
                        ColumnDef::new(Gyms::CreatedAt)
                            .timestamp()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Gyms::UpdatedAt)
                            .timestamp()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Gyms::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Gyms {
    Table,
    Id,
    Name,
    Address,
    Phone,
    Email,
    OperatingHours,
    CreatedAt,
    UpdatedAt,
}
