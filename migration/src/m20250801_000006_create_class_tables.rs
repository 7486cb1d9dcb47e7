use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(GymClasses::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(GymClasses::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(GymClasses::GymId).integer().not_null())
                    .col(ColumnDef::new(GymClasses::TrainerId).integer())
                    .col(ColumnDef::new(GymClasses::Name).string_len(100).not_null())
                    .col(ColumnDef::new(GymClasses::Description).text())
                    .col(ColumnDef::new(GymClasses::Capacity).integer().not_null())
                    .col(
                        ColumnDef::new(GymClasses::DurationMinutes)
                            .integer()
                            .not_null()
                            .default(60),
                    )
                    .col(ColumnDef::new(GymClasses::Color).string_len(16))
                    .col(
                        ColumnDef::new(GymClasses::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(GymClasses::CreatedAt)
                            .timestamp()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(GymClasses::UpdatedAt)
                            .timestamp()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_gym_classes_gym_id")
                            .from(GymClasses::Table, GymClasses::GymId)
                            .to(Gyms::Table, Gyms::Id)
                            .on_update(ForeignKeyAction::Cascade)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_gym_classes_trainer_id")
                            .from(GymClasses::Table, GymClasses::TrainerId)
                            .to(Trainers::Table, Trainers::Id)
                            .on_update(ForeignKeyAction::Cascade)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ClassSessions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ClassSessions::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ClassSessions::ClassId).integer().not_null())
                    .col(
                        ColumnDef::new(ClassSessions::StartsAt)
                            .timestamp()
                            .not_null(),
                    )
                    .col(ColumnDef::new(ClassSessions::EndsAt).timestamp().not_null())
                    .col(
                        ColumnDef::new(ClassSessions::CreatedAt)
                            .timestamp()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_class_sessions_class_id")
                            .from(ClassSessions::Table, ClassSessions::ClassId)
                            .to(GymClasses::Table, GymClasses::Id)
                            .on_update(ForeignKeyAction::Cascade)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ClassRegistrations::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ClassRegistrations::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ClassRegistrations::SessionId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ClassRegistrations::ClientId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ClassRegistrations::RegisteredAt)
                            .timestamp()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(ClassRegistrations::Attended)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_class_registrations_session_id")
                            .from(ClassRegistrations::Table, ClassRegistrations::SessionId)
                            .to(ClassSessions::Table, ClassSessions::Id)
                            .on_update(ForeignKeyAction::Cascade)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_class_registrations_client_id")
                            .from(ClassRegistrations::Table, ClassRegistrations::ClientId)
                            .to(Clients::Table, Clients::Id)
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
            .drop_table(Table::drop().table(ClassRegistrations::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ClassSessions::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(GymClasses::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum GymClasses {
    Table,
    Id,
    GymId,
    TrainerId,
    Name,
    Description,
    Capacity,
    DurationMinutes,
    Color,
    IsActive,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum ClassSessions {
    Table,
    Id,
    ClassId,
    StartsAt,
    EndsAt,
    CreatedAt,
}

#[derive(DeriveIden)]
enum ClassRegistrations {
    Table,
    Id,
    SessionId,
    ClientId,
    RegisteredAt,
    Attended,
}

#[derive(DeriveIden)]
enum Gyms {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Trainers {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Clients {
    Table,
    Id,
}
