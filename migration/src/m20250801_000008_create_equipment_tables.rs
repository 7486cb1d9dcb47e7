use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Equipment::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Equipment::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Equipment::GymId).integer().not_null())
                    .col(ColumnDef::new(Equipment::Name).string_len(255).not_null())
                    .col(ColumnDef::new(Equipment::Category).string_len(100))
                    .col(ColumnDef::new(Equipment::PurchaseDate).date())
                    .col(ColumnDef::new(Equipment::PurchasePrice).double())
                    .col(ColumnDef::new(Equipment::Condition).string_len(32))
                    .col(
                        ColumnDef::new(Equipment::CreatedAt)
                            .timestamp()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Equipment::UpdatedAt)
                            .timestamp()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_equipment_gym_id")
                            .from(Equipment::Table, Equipment::GymId)
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
                    .table(EquipmentMaintenance::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(EquipmentMaintenance::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(EquipmentMaintenance::EquipmentId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(EquipmentMaintenance::Description)
                            .text()
                            .not_null(),
                    )
                    .col(ColumnDef::new(EquipmentMaintenance::Cost).double())
                    .col(ColumnDef::new(EquipmentMaintenance::PerformedByRole).string_len(16))
                    .col(ColumnDef::new(EquipmentMaintenance::PerformedById).integer())
                    .col(
                        ColumnDef::new(EquipmentMaintenance::PerformedAt)
                            .timestamp()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_equipment_maintenance_equipment_id")
                            .from(
                                EquipmentMaintenance::Table,
                                EquipmentMaintenance::EquipmentId,
                            )
                            .to(Equipment::Table, Equipment::Id)
                            .on_update(ForeignKeyAction::Cascade)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(EquipmentMaintenance::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Equipment::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Equipment {
    Table,
    Id,
    GymId,
    Name,
    Category,
    PurchaseDate,
    PurchasePrice,
    Condition,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum EquipmentMaintenance {
    Table,
    Id,
    EquipmentId,
    Description,
    Cost,
    PerformedByRole,
    PerformedById,
    PerformedAt,
}

#[derive(DeriveIden)]
enum Gyms {
    Table,
    Id,
}
