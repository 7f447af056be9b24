use super::*;

/// Tests regenerating a brief.
///
/// Verifies that the debit is priced by `brief_regeneration` rather than
/// `brief_generation`.
///
/// Expected: generated version 2 becomes current, balance reduced by the regeneration cost
#[tokio::test]
async fn charges_regeneration_cost() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db();
    let (user, army) = setup(db, 12).await?;
    let regeneration = factory::feature_cost::FeatureCostFactory::new(db)
        .feature_key("brief_regeneration")
        .cost(3)
        .build()
        .await?;
    let generator = FixedBriefGenerator::new("## Hold the centre");
    let service = DossierService::new(db, &generator);

    let brief = service.create(user.id, army.id, None, false).await?;
    let brief = service.regenerate(user.id, brief.dossier.id).await?;

    assert_eq!(generator.calls(), 2);
    assert_eq!(brief.history.versions().len(), 2);
    let current = brief.history.current().unwrap();
    assert_eq!(current.number, 2);
    assert_eq!(current.source, VersionSource::Generated);

    let entry = entity::prelude::TokenLedger::find_by_id(current.ledger_entry_id.unwrap())
        .one(db)
        .await?
        .unwrap();
    assert_eq!(entry.delta, -3);
    assert_eq!(entry.feature_cost_id, Some(regeneration.id));

    let stored = entity::prelude::User::find_by_id(user.id).one(db).await?.unwrap();
    assert_eq!(stored.token_balance, 4);

    Ok(())
}

/// Tests regenerating a brief whose army was deleted.
///
/// Expected: Err(Conflict), no generator call and no charge
#[tokio::test]
async fn rejects_deleted_army() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db();
    let (user, army) = setup(db, 12).await?;
    factory::feature_cost::FeatureCostFactory::new(db)
        .feature_key("brief_regeneration")
        .cost(3)
        .build()
        .await?;
    let generator = FixedBriefGenerator::new("## Brief");
    let service = DossierService::new(db, &generator);

    let brief = service.create(user.id, army.id, None, false).await?;
    entity::prelude::Army::delete_by_id(army.id).exec(db).await?;

    let result = service.regenerate(user.id, brief.dossier.id).await;

    assert!(matches!(result, Err(AppError::Conflict(_))));
    assert_eq!(generator.calls(), 1);
    let stored = entity::prelude::User::find_by_id(user.id).one(db).await?.unwrap();
    assert_eq!(stored.token_balance, 7);

    Ok(())
}
