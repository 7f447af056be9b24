use super::*;

/// Tests resolving a pending purchase.
///
/// Expected: Ok(true) with status and resolution time stored
#[tokio::test]
async fn resolves_pending_purchase() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_ledger_tables().build().await.unwrap();
    let db = test.db();

    let user = factory::create_user(db).await?;
    let purchase = factory::create_token_purchase(db, user.id).await?;

    let repo = TokenPurchaseRepository::new(db);
    let resolved = repo
        .resolve(purchase.id, PurchaseStatus::Cancelled, None)
        .await?;

    assert!(resolved);
    let stored = repo.find_by_id(purchase.id).await?.unwrap();
    assert_eq!(stored.status, PurchaseStatus::Cancelled.as_str());
    assert!(stored.resolved_at.is_some());

    Ok(())
}

/// Tests that a resolved purchase cannot be resolved again.
///
/// Expected: Ok(false) and status unchanged
#[tokio::test]
async fn ignores_resolved_purchase() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_ledger_tables().build().await.unwrap();
    let db = test.db();

    let user = factory::create_user(db).await?;
    let purchase = factory::token_purchase::TokenPurchaseFactory::new(db, user.id)
        .status("cancelled")
        .build()
        .await?;

    let repo = TokenPurchaseRepository::new(db);
    let resolved = repo
        .resolve(purchase.id, PurchaseStatus::Completed, None)
        .await?;

    assert!(!resolved);
    let stored = repo.find_by_id(purchase.id).await?.unwrap();
    assert_eq!(stored.status, PurchaseStatus::Cancelled.as_str());

    Ok(())
}
