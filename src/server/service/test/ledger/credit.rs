use super::*;

/// Tests crediting tokens with a kind and note.
///
/// Expected: Ok with a positive entry matching the new balance
#[tokio::test]
async fn credits_positive_amount() -> Result<(), AppError> {
    let test = TestBuilder::new().with_ledger_tables().build().await.unwrap();
    let db = test.db();

    let user = factory::create_user(db).await?;

    let entry = Ledger::new(db)
        .credit(
            user.id,
            25,
            LedgerKind::Purchase,
            Some("purchase:1".to_string()),
            Some("Package starter".to_string()),
        )
        .await?;

    assert_eq!(entry.delta, 25);
    assert_eq!(entry.balance_after, 25);
    assert_eq!(entry.kind, LedgerKind::Purchase.as_str());
    assert_eq!(entry.feature_cost_id, None);

    Ok(())
}

/// Tests that zero and negative credits are refused.
///
/// Expected: Err(InvalidAmount) for both
#[tokio::test]
async fn rejects_non_positive_amount() -> Result<(), AppError> {
    let test = TestBuilder::new().with_ledger_tables().build().await.unwrap();
    let db = test.db();

    let user = factory::create_user(db).await?;
    let ledger = Ledger::new(db);

    for amount in [0, -5] {
        let result = ledger
            .credit(user.id, amount, LedgerKind::Purchase, None, None)
            .await;
        assert!(matches!(
            result,
            Err(AppError::LedgerErr(LedgerError::InvalidAmount(a))) if a == amount
        ));
    }

    Ok(())
}

/// Tests crediting a user that does not exist.
///
/// Expected: Err(UserNotFound)
#[tokio::test]
async fn fails_for_missing_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_ledger_tables().build().await.unwrap();
    let db = test.db();

    let result = Ledger::new(db)
        .credit(404, 10, LedgerKind::SignupGrant, None, None)
        .await;

    assert!(matches!(
        result,
        Err(AppError::LedgerErr(LedgerError::UserNotFound(404)))
    ));

    Ok(())
}
