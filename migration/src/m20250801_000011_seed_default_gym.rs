use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Provision the default tenant and its owner account.
        manager
            .exec_stmt(
                Query::insert()
                    .into_table(Gyms::Table)
                    .columns([Gyms::Name, Gyms::Address, Gyms::OperatingHours])
                    .values_panic([
                        "Main Gym".into(),
                        "1 Fitness Way".into(),
                        "06:00-22:00".into(),
                    ])
                    .to_owned(),
            )
            .await?;

        // Initial credential; operators are expected to change it after first login.
        let password_hash = bcrypt::hash("changeme", bcrypt::DEFAULT_COST)
            .map_err(|e| DbErr::Custom(format!("failed to hash seed password: {e}")))?;

        manager
            .exec_stmt(
                Query::insert()
                    .into_table(Admins::Table)
                    .columns([
                        Admins::GymId,
                        Admins::FirstName,
                        Admins::LastName,
                        Admins::Email,
                        Admins::PasswordHash,
                        Admins::IsActive,
                    ])
                    .values_panic([
                        1.into(),
                        "Default".into(),
                        "Owner".into(),
                        "owner@gym.local".into(),
                        password_hash.into(),
                        true.into(),
                    ])
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Cascading FKs remove the owner with the gym.
        manager
            .exec_stmt(
                Query::delete()
                    .from_table(Gyms::Table)
                    .and_where(Expr::col(Gyms::Name).eq("Main Gym"))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Gyms {
    Table,
    Name,
    Address,
    OperatingHours,
}

#[derive(DeriveIden)]
enum Admins {
    Table,
    GymId,
    FirstName,
    LastName,
    Email,
    PasswordHash,
    IsActive,
}
