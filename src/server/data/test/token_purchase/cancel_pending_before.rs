use super::*;

/// Tests expiring stale pending purchases.
///
/// Verifies that only pending purchases created before the cutoff are cancelled.
///
/// Expected: Ok(1) with the recent and completed purchases untouched
#[tokio::test]
async fn cancels_only_stale_pending() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_ledger_tables().build().await.unwrap();
    let db = test.db();

    let user = factory::create_user(db).await?;
    let stale = factory::token_purchase::TokenPurchaseFactory::new(db, user.id)
        .created_at(Utc::now() - Duration::hours(30))
        .build()
        .await?;
    let recent = factory::create_token_purchase(db, user.id).await?;
    let completed = factory::token_purchase::TokenPurchaseFactory::new(db, user.id)
        .status("completed")
        .created_at(Utc::now() - Duration::hours(30))
        .build()
        .await?;

    let repo = TokenPurchaseRepository::new(db);
    let cancelled = repo
        .cancel_pending_before(Utc::now() - Duration::hours(24))
        .await?;

    assert_eq!(cancelled, 1);
    let stale = repo.find_by_id(stale.id).await?.unwrap();
    let recent = repo.find_by_id(recent.id).await?.unwrap();
    let completed = repo.find_by_id(completed.id).await?.unwrap();
    assert_eq!(stale.status, PurchaseStatus::Cancelled.as_str());
    assert_eq!(recent.status, PurchaseStatus::Pending.as_str());
    assert_eq!(completed.status, PurchaseStatus::Completed.as_str());

    Ok(())
}
