use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MembershipPlans::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(MembershipPlans::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(MembershipPlans::GymId).integer().not_null())
                    .col(
                        ColumnDef::new(MembershipPlans::Name)
                            .string_len(100)
                            .not_null(),
                    )
                    .col(ColumnDef::new(MembershipPlans::Description).text())
                    .col(ColumnDef::new(MembershipPlans::Price).double().not_null())
                    .col(
                        ColumnDef::new(MembershipPlans::DurationDays)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(MembershipPlans::Features).text())
                    .col(
                        ColumnDef::new(MembershipPlans::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(MembershipPlans::CreatedAt)
                            .timestamp()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(MembershipPlans::UpdatedAt)
                            .timestamp()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_membership_plans_gym_id")
                            .from(MembershipPlans::Table, MembershipPlans::GymId)
                            .to(Gyms::Table, Gyms::Id)
                            .on_update(ForeignKeyAction::Cascade)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Plan resolution during client create/update is by name
        manager
            .create_index(
                Index::create()
                    .name("idx_membership_plans_name")
                    .table(MembershipPlans::Table)
                    .col(MembershipPlans::Name)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MembershipPlans::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum MembershipPlans {
    Table,
    Id,
    GymId,
    Name,
    Description,
    Price,
    DurationDays,
    Features,
    IsActive,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Gyms {
    Table,
    Id,
}
