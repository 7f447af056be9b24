use crate::server::{
    error::{ledger::LedgerError, AppError},
    model::version::VersionSource,
    service::{
        dossier::DossierService,
        generator::fake::{FailingBriefGenerator, FixedBriefGenerator},
    },
};
use sea_orm::{EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod edit;
mod regenerate;
mod set_current;

/// Sets up a user with `balance` tokens, an army and a `brief_generation` cost of 5.
async fn setup(
    db: &sea_orm::DatabaseConnection,
    balance: i64,
) -> Result<(entity::user::Model, entity::army::Model), sea_orm::DbErr> {
    let user = factory::user::UserFactory::new(db)
        .token_balance(balance)
        .build()
        .await?;
    let (faction, detachment) = factory::helpers::create_faction_with_detachment(db).await?;
    let army = factory::army::ArmyFactory::new(db, user.id, faction.id)
        .detachment(detachment.id)
        .name("Spearhead")
        .build()
        .await?;
    factory::feature_cost::FeatureCostFactory::new(db)
        .feature_key("brief_generation")
        .cost(5)
        .build()
        .await?;

    Ok((user, army))
}
