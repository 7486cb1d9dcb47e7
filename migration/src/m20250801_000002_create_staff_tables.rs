use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Admins::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Admins::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Admins::GymId).integer().not_null())
                    .col(ColumnDef::new(Admins::FirstName).string_len(100).not_null())
                    .col(ColumnDef::new(Admins::LastName).string_len(100).not_null())
                    .col(
                        ColumnDef::new(Admins::Email)
                            .string_len(255)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Admins::Phone).string_len(32))
                    .col(ColumnDef::new(Admins::PasswordHash).string_len(255).not_null())
                    .col(
                        ColumnDef::new(Admins::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(ColumnDef::new(Admins::LastLoginAt).timestamp())
                    .col(
                        ColumnDef::new(Admins::CreatedAt)
                            .timestamp()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Admins::UpdatedAt)
                            .timestamp()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_admins_gym_id")
                            .from(Admins::Table, Admins::GymId)
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
                    .table(Trainers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Trainers::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Trainers::GymId).integer().not_null())
                    .col(ColumnDef::new(Trainers::FirstName).string_len(100).not_null())
                    .col(ColumnDef::new(Trainers::LastName).string_len(100).not_null())
                    .col(
                        ColumnDef::new(Trainers::Email)
                            .string_len(255)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Trainers::Phone).string_len(32))
                    .col(
                        ColumnDef::new(Trainers::PasswordHash)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Trainers::Specialization).string_len(255))
                    .col(ColumnDef::new(Trainers::Certification).string_len(255))
                    .col(ColumnDef::new(Trainers::HourlyRate).double())
                    .col(ColumnDef::new(Trainers::HireDate).date().not_null())
                    .col(
                        ColumnDef::new(Trainers::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(ColumnDef::new(Trainers::LastLoginAt).timestamp())
                    .col(
                        ColumnDef::new(Trainers::CreatedAt)
                            .timestamp()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Trainers::UpdatedAt)
                            .timestamp()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_trainers_gym_id")
                            .from(Trainers::Table, Trainers::GymId)
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
                    .table(Secretaries::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Secretaries::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Secretaries::GymId).integer().not_null())
                    .col(
                        ColumnDef::new(Secretaries::FirstName)
                            .string_len(100)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Secretaries::LastName)
                            .string_len(100)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Secretaries::Email)
                            .string_len(255)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Secretaries::Phone).string_len(32))
                    .col(
                        ColumnDef::new(Secretaries::PasswordHash)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Secretaries::ShiftSchedule).string_len(255))
                    .col(ColumnDef::new(Secretaries::HireDate).date().not_null())
                    .col(
                        ColumnDef::new(Secretaries::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(ColumnDef::new(Secretaries::LastLoginAt).timestamp())
                    .col(
                        ColumnDef::new(Secretaries::CreatedAt)
                            .timestamp()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Secretaries::UpdatedAt)
                            .timestamp()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_secretaries_gym_id")
                            .from(Secretaries::Table, Secretaries::GymId)
                            .to(Gyms::Table, Gyms::Id)
                            .on_update(ForeignKeyAction::Cascade)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Email lookups drive login and cross-table uniqueness checks
        manager
            .create_index(
                Index::create()
                    .name("idx_trainers_email")
                    .table(Trainers::Table)
                    .col(Trainers::Email)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_secretaries_email")
                    .table(Secretaries::Table)
                    .col(Secretaries::Email)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Secretaries::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Trainers::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Admins::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Admins {
    Table,
    Id,
    GymId,
    FirstName,
    LastName,
    Email,
    Phone,
    PasswordHash,
    IsActive,
    LastLoginAt,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Trainers {
    Table,
    Id,
    GymId,
    FirstName,
    LastName,
    Email,
    Phone,
    PasswordHash,
    Specialization,
    Certification,
    HourlyRate,
    HireDate,
    IsActive,
    LastLoginAt,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Secretaries {
    Table,
    Id,
    GymId,
    FirstName,
    LastName,
    Email,
    Phone,
    PasswordHash,
    ShiftSchedule,
    HireDate,
    IsActive,
    LastLoginAt,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Gyms {
    Table,
    Id,
}
