pub mod m000001_create_guild_configs;
pub mod m000002_create_warnings;
pub mod m000003_create_escalation_rules;
pub mod m000004_create_temp_bans;

use sea_orm_migration::prelude::*;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m000001_create_guild_configs::Migration),
            Box::new(m000002_create_warnings::Migration),
            Box::new(m000003_create_escalation_rules::Migration),
            Box::new(m000004_create_temp_bans::Migration),
        ]
    }
}
