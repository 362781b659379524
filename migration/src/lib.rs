pub use sea_orm_migration::prelude::*;

mod m20240101_000001_create_users_table;
mod m20240101_000002_create_user_external_logins_table;
mod m20240101_000003_create_clients_table;
mod m20240101_000004_create_properties_table;
mod m20240101_000005_create_sales_table;
mod m20240101_000006_create_sales_goals_table;
mod m20240101_000007_create_appointments_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_users_table::Migration),
            Box::new(m20240101_000002_create_user_external_logins_table::Migration),
            Box::new(m20240101_000003_create_clients_table::Migration),
            Box::new(m20240101_000004_create_properties_table::Migration),
            Box::new(m20240101_000005_create_sales_table::Migration),
            Box::new(m20240101_000006_create_sales_goals_table::Migration),
            Box::new(m20240101_000007_create_appointments_table::Migration),
        ]
    }
}
