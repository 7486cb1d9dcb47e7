use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Attendance::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Attendance::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Attendance::ClientId).integer().not_null())
                    .col(
                        ColumnDef::new(Attendance::CheckedInAt)
                            .timestamp()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(ColumnDef::new(Attendance::CheckedOutAt).timestamp())
                    .col(ColumnDef::new(Attendance::RecordedByRole).string_len(16))
                    .col(ColumnDef::new(Attendance::RecordedById).integer())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_attendance_client_id")
                            .from(Attendance::Table, Attendance::ClientId)
                            .to(Clients::Table, Clients::Id)
                            .on_update(ForeignKeyAction::Cascade)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Payments::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Payments::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Payments::ClientId).integer().not_null())
                    .col(ColumnDef::new(Payments::MembershipId).integer())
                    .col(ColumnDef::new(Payments::Amount).double().not_null())
                    .col(
                        ColumnDef::new(Payments::Method)
                            .string_len(32)
                            .not_null()
                            .default("Cash"),
                    )
                    .col(ColumnDef::new(Payments::RecordedByRole).string_len(16))
                    .col(ColumnDef::new(Payments::RecordedById).integer())
                    .col(
                        ColumnDef::new(Payments::PaidAt)
                            .timestamp()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_payments_client_id")
                            .from(Payments::Table, Payments::ClientId)
                            .to(Clients::Table, Clients::Id)
                            .on_update(ForeignKeyAction::Cascade)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_payments_membership_id")
                            .from(Payments::Table, Payments::MembershipId)
                            .to(ClientMemberships::Table, ClientMemberships::Id)
                            .on_update(ForeignKeyAction::Cascade)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Events::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Events::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Events::GymId).integer().not_null())
                    .col(ColumnDef::new(Events::Title).string_len(255).not_null())
                    .col(ColumnDef::new(Events::Description).text())
                    .col(ColumnDef::new(Events::StartsAt).timestamp().not_null())
                    .col(ColumnDef::new(Events::EndsAt).timestamp())
                    .col(ColumnDef::new(Events::OrganizerRole).string_len(16))
                    .col(ColumnDef::new(Events::OrganizerId).integer())
                    .col(
                        ColumnDef::new(Events::CreatedAt)
                            .timestamp()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_events_gym_id")
                            .from(Events::Table, Events::GymId)
                            .to(Gyms::Table, Gyms::Id)
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
            .drop_table(Table::drop().table(Events::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Payments::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Attendance::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Attendance {
    Table,
    Id,
    ClientId,
    CheckedInAt,
    CheckedOutAt,
    RecordedByRole,
    RecordedById,
}

#[derive(DeriveIden)]
enum Payments {
    Table,
    Id,
    ClientId,
    MembershipId,
    Amount,
    Method,
    RecordedByRole,
    RecordedById,
    PaidAt,
}

#[derive(DeriveIden)]
enum Events {
    Table,
    Id,
    GymId,
    Title,
    Description,
    StartsAt,
    EndsAt,
    OrganizerRole,
    OrganizerId,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Clients {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum ClientMemberships {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Gyms {
    Table,
    Id,
}
