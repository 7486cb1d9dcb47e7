use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Products::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Products::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Products::GymId).integer().not_null())
                    .col(ColumnDef::new(Products::Name).string_len(255).not_null())
                    .col(ColumnDef::new(Products::Description).text())
                    .col(ColumnDef::new(Products::Price).double().not_null())
                    .col(ColumnDef::new(Products::Cost).double())
                    .col(
                        ColumnDef::new(Products::StockQuantity)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(Products::Category).string_len(100))
                    .col(ColumnDef::new(Products::ImageUrl).string_len(512))
                    .col(
                        ColumnDef::new(Products::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(Products::CreatedAt)
                            .timestamp()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Products::UpdatedAt)
                            .timestamp()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_products_gym_id")
                            .from(Products::Table, Products::GymId)
                            .to(Gyms::Table, Gyms::Id)
                            .on_update(ForeignKeyAction::Cascade)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ProductSales::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ProductSales::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ProductSales::ProductId).integer().not_null())
                    .col(ColumnDef::new(ProductSales::ClientId).integer())
                    .col(
                        ColumnDef::new(ProductSales::Quantity)
                            .integer()
                            .not_null()
                            .default(1),
                    )
                    .col(ColumnDef::new(ProductSales::UnitPrice).double().not_null())
                    .col(ColumnDef::new(ProductSales::TotalPrice).double().not_null())
                    .col(ColumnDef::new(ProductSales::SoldByRole).string_len(16))
                    .col(ColumnDef::new(ProductSales::SoldById).integer())
                    .col(
                        ColumnDef::new(ProductSales::SoldAt)
                            .timestamp()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_product_sales_product_id")
                            .from(ProductSales::Table, ProductSales::ProductId)
                            .to(Products::Table, Products::Id)
                            .on_update(ForeignKeyAction::Cascade)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_product_sales_client_id")
                            .from(ProductSales::Table, ProductSales::ClientId)
                            .to(Clients::Table, Clients::Id)
                            .on_update(ForeignKeyAction::Cascade)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ProductSales::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Products::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Products {
    Table,
    Id,
    GymId,
    Name,
    Description,
    Price,
    Cost,
    StockQuantity,
    Category,
    ImageUrl,
    IsActive,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum ProductSales {
    Table,
    Id,
    ProductId,
    ClientId,
    Quantity,
    UnitPrice,
    TotalPrice,
    SoldByRole,
    SoldById,
    SoldAt,
}

#[derive(DeriveIden)]
enum Gyms {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Clients {
    Table,
    Id,
}
