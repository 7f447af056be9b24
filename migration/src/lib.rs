pub use sea_orm_migration::prelude::*;

mod m20260105_000001_create_user_table;
mod m20260105_000002_create_faction_table;
mod m20260105_000003_create_detachment_table;
mod m20260105_000004_create_feature_cost_table;
mod m20260105_000005_create_token_ledger_table;
mod m20260105_000006_create_token_purchase_table;
mod m20260106_000007_create_army_table;
mod m20260106_000008_create_dossier_table;
mod m20260107_000009_create_mission_table;
mod m20260107_000010_create_stratagem_table;
mod m20260107_000011_create_game_session_table;
mod m20260107_000012_create_session_event_table;
mod m20260112_000013_create_dossier_version_table;
mod m20260114_000014_create_datasheet_tables;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260105_000001_create_user_table::Migration),
            Box::new(m20260105_000002_create_faction_table::Migration),
            Box::new(m20260105_000003_create_detachment_table::Migration),
            Box::new(m20260105_000004_create_feature_cost_table::Migration),
            Box::new(m20260105_000005_create_token_ledger_table::Migration),
            Box::new(m20260105_000006_create_token_purchase_table::Migration),
            Box::new(m20260106_000007_create_army_table::Migration),
            Box::new(m20260106_000008_create_dossier_table::Migration),
            Box::new(m20260107_000009_create_mission_table::Migration),
            Box::new(m20260107_000010_create_stratagem_table::Migration),
            Box::new(m20260107_000011_create_game_session_table::Migration),
            Box::new(m20260107_000012_create_session_event_table::Migration),
            Box::new(m20260112_000013_create_dossier_version_table::Migration),
            Box::new(m20260114_000014_create_datasheet_tables::Migration),
        ]
    }
}
