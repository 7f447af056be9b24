use super::*;

/// Tests listing with and without deleted rows.
///
/// Expected: Ok with the deleted row only in the admin listing
#[tokio::test]
async fn filters_deleted_rows() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_ledger_tables().build().await.unwrap();
    let db = test.db();

    factory::create_feature_cost(db, "brief_generation", 5).await?;
    factory::feature_cost::FeatureCostFactory::new(db)
        .feature_key("old_feature")
        .deleted()
        .build()
        .await?;

    let repo = FeatureCostRepository::new(db);
    let active = repo.get_all(false).await?;
    let all = repo.get_all(true).await?;

    assert_eq!(active.len(), 1);
    assert_eq!(active[0].feature_key, "brief_generation");
    assert_eq!(all.len(), 2);

    Ok(())
}
