use super::*;

/// Tests starting a purchase for a known package.
///
/// Expected: pending purchase with the package's tokens and price, balance untouched
#[tokio::test]
async fn creates_pending_purchase() -> Result<(), AppError> {
    let test = TestBuilder::new().with_ledger_tables().build().await.unwrap();
    let db = test.db();

    let user = factory::create_user(db).await?;

    let service = TokenService::new(db);
    let purchase = service.purchase(user.id, "standard").await?;

    assert_eq!(purchase.status, PurchaseStatus::Pending.as_str());
    assert_eq!(purchase.tokens, 120);
    assert_eq!(purchase.price_cents, 999);
    assert_eq!(service.balance(user.id).await?, 0);

    Ok(())
}

/// Tests purchasing a package that does not exist.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn rejects_unknown_package() -> Result<(), AppError> {
    let test = TestBuilder::new().with_ledger_tables().build().await.unwrap();
    let db = test.db();

    let user = factory::create_user(db).await?;

    let result = TokenService::new(db).purchase(user.id, "mega").await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests cancelling a pending purchase.
///
/// Expected: status cancelled, a second cancel conflicts
#[tokio::test]
async fn cancels_pending_purchase() -> Result<(), AppError> {
    let test = TestBuilder::new().with_ledger_tables().build().await.unwrap();
    let db = test.db();

    let user = factory::create_user(db).await?;
    let purchase = factory::create_token_purchase(db, user.id).await?;

    let service = TokenService::new(db);
    let cancelled = service.cancel_purchase(purchase.id).await?;

    assert_eq!(cancelled.status, PurchaseStatus::Cancelled.as_str());
    assert!(cancelled.resolved_at.is_some());
    assert!(matches!(
        service.cancel_purchase(purchase.id).await,
        Err(AppError::Conflict(_))
    ));

    Ok(())
}
