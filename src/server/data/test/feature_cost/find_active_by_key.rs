use super::*;

/// Tests resolving an active feature cost.
///
/// Expected: Ok(Some) with the stored cost
#[tokio::test]
async fn finds_active_cost() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_ledger_tables().build().await.unwrap();
    let db = test.db();

    factory::create_feature_cost(db, "brief_generation", 5).await?;

    let repo = FeatureCostRepository::new(db);
    let cost = repo.find_active_by_key("brief_generation").await?;

    assert_eq!(cost.map(|c| c.cost), Some(5));

    Ok(())
}

/// Tests that a soft-deleted cost is not resolved.
///
/// Expected: Ok(None)
#[tokio::test]
async fn ignores_deleted_cost() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_ledger_tables().build().await.unwrap();
    let db = test.db();

    factory::feature_cost::FeatureCostFactory::new(db)
        .feature_key("brief_generation")
        .deleted()
        .build()
        .await?;

    let repo = FeatureCostRepository::new(db);
    let cost = repo.find_active_by_key("brief_generation").await?;

    assert!(cost.is_none());

    Ok(())
}

/// Tests resolving a key that was deleted and re-created.
///
/// Expected: Ok(Some) with the replacement row
#[tokio::test]
async fn finds_recreated_cost() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_ledger_tables().build().await.unwrap();
    let db = test.db();

    factory::feature_cost::FeatureCostFactory::new(db)
        .feature_key("brief_generation")
        .cost(3)
        .deleted()
        .build()
        .await?;
    let replacement = factory::create_feature_cost(db, "brief_generation", 7).await?;

    let repo = FeatureCostRepository::new(db);
    let cost = repo.find_active_by_key("brief_generation").await?.unwrap();

    assert_eq!(cost.id, replacement.id);
    assert_eq!(cost.cost, 7);

    Ok(())
}
