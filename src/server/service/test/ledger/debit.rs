use super::*;

/// Tests charging an affordable feature.
///
/// Expected: Ok with a linked `feature_debit` entry and the balance reduced
#[tokio::test]
async fn charges_active_cost() -> Result<(), AppError> {
    let test = TestBuilder::new().with_ledger_tables().build().await.unwrap();
    let db = test.db();

    let user = factory::user::UserFactory::new(db)
        .token_balance(10)
        .build()
        .await?;
    let cost = factory::feature_cost::FeatureCostFactory::new(db)
        .feature_key("brief_generation")
        .cost(3)
        .build()
        .await?;

    let entry = Ledger::new(db)
        .debit(user.id, "brief_generation", Some("dossier:1".to_string()))
        .await?;

    assert_eq!(entry.delta, -3);
    assert_eq!(entry.balance_after, 7);
    assert_eq!(entry.kind, LedgerKind::FeatureDebit.as_str());
    assert_eq!(entry.feature_cost_id, Some(cost.id));
    assert_eq!(entry.reference.as_deref(), Some("dossier:1"));

    let stored = entity::prelude::User::find_by_id(user.id).one(db).await?.unwrap();
    assert_eq!(stored.token_balance, 7);

    Ok(())
}

/// Tests that a debit larger than the balance is refused without side effects.
///
/// Expected: Err(InsufficientBalance), balance unchanged, no ledger entry
#[tokio::test]
async fn refuses_insufficient_balance() -> Result<(), AppError> {
    let test = TestBuilder::new().with_ledger_tables().build().await.unwrap();
    let db = test.db();

    let user = factory::user::UserFactory::new(db)
        .token_balance(2)
        .build()
        .await?;
    factory::feature_cost::FeatureCostFactory::new(db)
        .feature_key("brief_generation")
        .cost(3)
        .build()
        .await?;

    let result = Ledger::new(db).debit(user.id, "brief_generation", None).await;

    assert!(matches!(
        result,
        Err(AppError::LedgerErr(LedgerError::InsufficientBalance {
            required: 3,
            available: 2
        }))
    ));

    let stored = entity::prelude::User::find_by_id(user.id).one(db).await?.unwrap();
    assert_eq!(stored.token_balance, 2);
    assert_eq!(entity::prelude::TokenLedger::find().count(db).await?, 0);

    Ok(())
}

/// Tests that soft-deleted costs are not chargeable.
///
/// Expected: Err(UnknownFeature)
#[tokio::test]
async fn refuses_deleted_feature() -> Result<(), AppError> {
    let test = TestBuilder::new().with_ledger_tables().build().await.unwrap();
    let db = test.db();

    let user = factory::user::UserFactory::new(db)
        .token_balance(10)
        .build()
        .await?;
    factory::feature_cost::FeatureCostFactory::new(db)
        .feature_key("brief_generation")
        .deleted()
        .build()
        .await?;

    let result = Ledger::new(db).debit(user.id, "brief_generation", None).await;

    assert!(matches!(
        result,
        Err(AppError::LedgerErr(LedgerError::UnknownFeature(key))) if key == "brief_generation"
    ));

    Ok(())
}

/// Tests that a free feature still leaves an audit entry.
///
/// Expected: Ok with a zero-delta entry
#[tokio::test]
async fn records_zero_cost_debit() -> Result<(), AppError> {
    let test = TestBuilder::new().with_ledger_tables().build().await.unwrap();
    let db = test.db();

    let user = factory::create_user(db).await?;
    factory::feature_cost::FeatureCostFactory::new(db)
        .feature_key("brief_regeneration")
        .cost(0)
        .build()
        .await?;

    let entry = Ledger::new(db)
        .debit(user.id, "brief_regeneration", None)
        .await?;

    assert_eq!(entry.delta, 0);
    assert_eq!(entry.balance_after, 0);
    assert_eq!(entity::prelude::TokenLedger::find().count(db).await?, 1);

    Ok(())
}

/// Tests the affordability pre-check used before calling the generator.
///
/// Expected: Ok for an exact balance, Err(InsufficientBalance) one token short
#[tokio::test]
async fn ensure_affordable_checks_balance() -> Result<(), AppError> {
    let test = TestBuilder::new().with_ledger_tables().build().await.unwrap();
    let db = test.db();

    let rich = factory::user::UserFactory::new(db)
        .token_balance(5)
        .build()
        .await?;
    let poor = factory::user::UserFactory::new(db)
        .token_balance(4)
        .build()
        .await?;
    factory::feature_cost::FeatureCostFactory::new(db)
        .feature_key("brief_generation")
        .cost(5)
        .build()
        .await?;

    let ledger = Ledger::new(db);
    assert!(ledger.ensure_affordable(rich.id, "brief_generation").await.is_ok());
    assert!(matches!(
        ledger.ensure_affordable(poor.id, "brief_generation").await,
        Err(AppError::LedgerErr(LedgerError::InsufficientBalance { .. }))
    ));
    assert_eq!(entity::prelude::TokenLedger::find().count(db).await?, 0);

    Ok(())
}
