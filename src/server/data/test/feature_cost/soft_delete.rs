use super::*;

/// Tests soft deleting a feature cost.
///
/// Verifies that the row stays in place with `deleted_at` set so ledger entries
/// referencing it remain valid.
///
/// Expected: Ok(true) and the row still readable by id
#[tokio::test]
async fn marks_row_deleted() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_ledger_tables().build().await.unwrap();
    let db = test.db();

    let cost = factory::create_feature_cost(db, "brief_generation", 5).await?;

    let repo = FeatureCostRepository::new(db);
    let deleted = repo.soft_delete(cost.id).await?;

    assert!(deleted);
    let stored = repo.find_by_id(cost.id).await?.unwrap();
    assert!(stored.deleted_at.is_some());
    assert!(!stored.is_active());

    Ok(())
}

/// Tests deleting an already deleted cost.
///
/// Expected: Ok(false)
#[tokio::test]
async fn refuses_second_delete() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_ledger_tables().build().await.unwrap();
    let db = test.db();

    let cost = factory::feature_cost::FeatureCostFactory::new(db)
        .deleted()
        .build()
        .await?;

    let repo = FeatureCostRepository::new(db);

    assert!(!repo.soft_delete(cost.id).await?);

    Ok(())
}
