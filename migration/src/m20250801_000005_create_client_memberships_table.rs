use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ClientMemberships::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ClientMemberships::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ClientMemberships::ClientId)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(ClientMemberships::PlanId).integer().not_null())
                    .col(ColumnDef::new(ClientMemberships::StartDate).date().not_null())
                    .col(ColumnDef::new(ClientMemberships::EndDate).date().not_null())
                    .col(
                        ColumnDef::new(ClientMemberships::Status)
                            .string_len(16)
                            .not_null()
                            .default("active"),
                    )
                    .col(
                        ColumnDef::new(ClientMemberships::AutoRenew)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(ClientMemberships::PaymentMethod)
                            .string_len(32)
                            .not_null()
                            .default("Cash"),
                    )
                    .col(ColumnDef::new(ClientMemberships::CreatedByRole).string_len(16))
                    .col(ColumnDef::new(ClientMemberships::CreatedById).integer())
                    .col(
                        ColumnDef::new(ClientMemberships::CreatedAt)
                            .timestamp()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(ClientMemberships::UpdatedAt)
                            .timestamp()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_client_memberships_client_id")
                            .from(ClientMemberships::Table, ClientMemberships::ClientId)
                            .to(Clients::Table, Clients::Id)
                            .on_update(ForeignKeyAction::Cascade)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_client_memberships_plan_id")
                            .from(ClientMemberships::Table, ClientMemberships::PlanId)
                            .to(MembershipPlans::Table, MembershipPlans::Id)
                            .on_update(ForeignKeyAction::Cascade)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Current-membership derivation filters by client + status
        manager
            .create_index(
                Index::create()
                    .name("idx_client_memberships_client_status")
                    .table(ClientMemberships::Table)
                    .col(ClientMemberships::ClientId)
                    .col(ClientMemberships::Status)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ClientMemberships::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum ClientMemberships {
    Table,
    Id,
    ClientId,
    PlanId,
    StartDate,
    EndDate,
    Status,
    AutoRenew,
    PaymentMethod,
    CreatedByRole,
    CreatedById,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Clients {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum MembershipPlans {
    Table,
    Id,
}
