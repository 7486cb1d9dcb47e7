pub use sea_orm_migration::prelude::*;

mod m20250801_000001_create_gyms_table;
mod m20250801_000002_create_staff_tables;
mod m20250801_000003_create_clients_table;
mod m20250801_000004_create_membership_plans_table;
mod m20250801_000005_create_client_memberships_table;
mod m20250801_000006_create_class_tables;
mod m20250801_000007_create_product_tables;
mod m20250801_000008_create_equipment_tables;
mod m20250801_000009_create_tracking_tables;
mod m20250801_000010_create_access_tokens_table;
mod m20250801_000011_seed_default_gym;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250801_000001_create_gyms_table::Migration),
            Box::new(m20250801_000002_create_staff_tables::Migration),
            Box::new(m20250801_000003_create_clients_table::Migration),
            Box::new(m20250801_000004_create_membership_plans_table::Migration),
            Box::new(m20250801_000005_create_client_memberships_table::Migration),
            Box::new(m20250801_000006_create_class_tables::Migration),
            Box::new(m20250801_000007_create_product_tables::Migration),
            Box::new(m20250801_000008_create_equipment_tables::Migration),
            Box::new(m20250801_000009_create_tracking_tables::Migration),
            Box::new(m20250801_000010_create_access_tokens_table::Migration),
            Box::new(m20250801_000011_seed_default_gym::Migration),
        ]
    }
}
