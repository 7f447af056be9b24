use super::*;

/// Tests that a mix of credits, debits and adjustments keeps the ledger summing to the
/// balance.
///
/// Expected: sum of deltas equals the stored balance and the last `balance_after`
#[tokio::test]
async fn ledger_sums_to_balance() -> Result<(), AppError> {
    let test = TestBuilder::new().with_ledger_tables().build().await.unwrap();
    let db = test.db();

    let user = factory::create_user(db).await?;
    factory::feature_cost::FeatureCostFactory::new(db)
        .feature_key("brief_generation")
        .cost(4)
        .build()
        .await?;

    let ledger = Ledger::new(db);
    ledger
        .credit(user.id, 10, LedgerKind::SignupGrant, None, None)
        .await?;
    ledger.debit(user.id, "brief_generation", None).await?;
    let last = ledger
        .adjust(user.id, -2, Some("Refund reversal".to_string()))
        .await?;

    let entries = entity::prelude::TokenLedger::find().all(db).await?;
    let sum: i64 = entries.iter().map(|e| e.delta).sum();
    let stored = entity::prelude::User::find_by_id(user.id).one(db).await?.unwrap();

    assert_eq!(sum, 4);
    assert_eq!(stored.token_balance, sum);
    assert_eq!(last.balance_after, sum);
    assert_eq!(last.kind, LedgerKind::AdminAdjustment.as_str());

    Ok(())
}

/// Tests that an adjustment cannot push the balance below zero.
///
/// Expected: Err(InsufficientBalance)
#[tokio::test]
async fn refuses_negative_balance() -> Result<(), AppError> {
    let test = TestBuilder::new().with_ledger_tables().build().await.unwrap();
    let db = test.db();

    let user = factory::user::UserFactory::new(db)
        .token_balance(3)
        .build()
        .await?;

    let result = Ledger::new(db).adjust(user.id, -4, None).await;

    assert!(matches!(
        result,
        Err(AppError::LedgerErr(LedgerError::InsufficientBalance {
            required: 4,
            available: 3
        }))
    ));

    Ok(())
}

/// Tests that a zero adjustment is refused.
///
/// Expected: Err(InvalidAmount(0))
#[tokio::test]
async fn rejects_zero() -> Result<(), AppError> {
    let test = TestBuilder::new().with_ledger_tables().build().await.unwrap();
    let db = test.db();

    let user = factory::create_user(db).await?;

    let result = Ledger::new(db).adjust(user.id, 0, None).await;

    assert!(matches!(
        result,
        Err(AppError::LedgerErr(LedgerError::InvalidAmount(0)))
    ));

    Ok(())
}
