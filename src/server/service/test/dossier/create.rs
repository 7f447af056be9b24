use super::*;

/// Tests generating a brief the user can afford.
///
/// Expected: dossier with generated version 1 linked to the debit, balance reduced
#[tokio::test]
async fn charges_and_stores_first_version() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db();
    let (user, army) = setup(db, 12).await?;
    let generator = FixedBriefGenerator::new("## Deploy aggressively");

    let brief = DossierService::new(db, &generator)
        .create(user.id, army.id, None, false)
        .await?;

    assert_eq!(brief.dossier.title, "Spearhead brief");
    assert_eq!(brief.dossier.army_id, Some(army.id));
    assert_eq!(generator.calls(), 1);

    let current = brief.history.current().unwrap();
    assert_eq!(current.number, 1);
    assert_eq!(current.body, "## Deploy aggressively");
    assert_eq!(current.source, VersionSource::Generated);

    let entry = entity::prelude::TokenLedger::find_by_id(current.ledger_entry_id.unwrap())
        .one(db)
        .await?
        .unwrap();
    assert_eq!(entry.delta, -5);
    assert_eq!(entry.reference, Some(format!("dossier:{}", brief.dossier.id)));

    let stored = entity::prelude::User::find_by_id(user.id).one(db).await?.unwrap();
    assert_eq!(stored.token_balance, 7);

    Ok(())
}

/// Tests that a user who cannot pay never reaches the generator.
///
/// Expected: Err(InsufficientBalance), no generator call, no dossier
#[tokio::test]
async fn insufficient_balance_skips_generation() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db();
    let (user, army) = setup(db, 4).await?;
    let generator = FixedBriefGenerator::new("unused");

    let result = DossierService::new(db, &generator)
        .create(user.id, army.id, None, false)
        .await;

    assert!(matches!(
        result,
        Err(AppError::LedgerErr(LedgerError::InsufficientBalance { .. }))
    ));
    assert_eq!(generator.calls(), 0);
    assert_eq!(entity::prelude::Dossier::find().count(db).await?, 0);

    Ok(())
}

/// Tests that a failed generation charges nothing.
///
/// Expected: Err(GenerationFailed), balance and ledger untouched
#[tokio::test]
async fn failed_generation_charges_nothing() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db();
    let (user, army) = setup(db, 10).await?;

    let result = DossierService::new(db, &FailingBriefGenerator)
        .create(user.id, army.id, None, false)
        .await;

    assert!(matches!(result, Err(AppError::GenerationFailed(_))));

    let stored = entity::prelude::User::find_by_id(user.id).one(db).await?.unwrap();
    assert_eq!(stored.token_balance, 10);
    assert_eq!(entity::prelude::TokenLedger::find().count(db).await?, 0);
    assert_eq!(entity::prelude::Dossier::find().count(db).await?, 0);

    Ok(())
}

/// Tests generating a brief for someone else's army.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn rejects_foreign_army() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db();
    let (_, army) = setup(db, 10).await?;
    let other = factory::user::UserFactory::new(db)
        .token_balance(10)
        .build()
        .await?;
    let generator = FixedBriefGenerator::new("unused");

    let result = DossierService::new(db, &generator)
        .create(other.id, army.id, None, false)
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
    assert_eq!(generator.calls(), 0);

    Ok(())
}
