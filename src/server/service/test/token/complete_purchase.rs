use super::*;

/// Tests completing a pending purchase.
///
/// Expected: purchase completed and linked to a `purchase` credit of its tokens
#[tokio::test]
async fn credits_tokens_and_links_entry() -> Result<(), AppError> {
    let test = TestBuilder::new().with_ledger_tables().build().await.unwrap();
    let db = test.db();

    let user = factory::create_user(db).await?;
    let purchase = factory::create_token_purchase(db, user.id).await?;

    let service = TokenService::new(db);
    let completed = service.complete_purchase(purchase.id).await?;

    assert_eq!(completed.status, PurchaseStatus::Completed.as_str());
    assert_eq!(service.balance(user.id).await?, 50);

    let entry_id = completed.ledger_entry_id.unwrap();
    let entry = entity::prelude::TokenLedger::find_by_id(entry_id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(entry.delta, 50);
    assert_eq!(entry.kind, LedgerKind::Purchase.as_str());
    assert_eq!(entry.reference, Some(format!("purchase:{}", purchase.id)));

    Ok(())
}

/// Tests that a purchase can only be completed once.
///
/// Expected: Err(Conflict) and a single credit
#[tokio::test]
async fn completes_only_once() -> Result<(), AppError> {
    let test = TestBuilder::new().with_ledger_tables().build().await.unwrap();
    let db = test.db();

    let user = factory::create_user(db).await?;
    let purchase = factory::create_token_purchase(db, user.id).await?;

    let service = TokenService::new(db);
    service.complete_purchase(purchase.id).await?;
    let second = service.complete_purchase(purchase.id).await;

    assert!(matches!(second, Err(AppError::Conflict(_))));
    assert_eq!(service.balance(user.id).await?, 50);

    Ok(())
}

/// Tests completing a cancelled purchase.
///
/// Expected: Err(Conflict), nothing credited
#[tokio::test]
async fn refuses_cancelled_purchase() -> Result<(), AppError> {
    let test = TestBuilder::new().with_ledger_tables().build().await.unwrap();
    let db = test.db();

    let user = factory::create_user(db).await?;
    let purchase = factory::token_purchase::TokenPurchaseFactory::new(db, user.id)
        .status("cancelled")
        .build()
        .await?;

    let service = TokenService::new(db);
    let result = service.complete_purchase(purchase.id).await;

    assert!(matches!(result, Err(AppError::Conflict(_))));
    assert_eq!(service.balance(user.id).await?, 0);

    Ok(())
}
