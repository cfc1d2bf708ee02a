//! Explicit schema definitions, applied in order by [`Migrator`].

use sea_orm_migration::prelude::*;

mod m20250101_000001_create_schema;
mod m20250101_000002_create_audit_logs;
mod m20250101_000003_unique_cart_wishlist_pairs;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250101_000001_create_schema::Migration),
            Box::new(m20250101_000002_create_audit_logs::Migration),
            Box::new(m20250101_000003_unique_cart_wishlist_pairs::Migration),
        ]
    }
}
