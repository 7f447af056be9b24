use super::*;

/// Tests that the schema allows only one active row per key.
///
/// Verifies that soft-deleted rows do not count against the key.
///
/// Expected: Err on a second active row, Ok alongside a deleted one
#[tokio::test]
async fn allows_one_active_row_per_key() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_ledger_tables().build().await.unwrap();
    let db = test.db();

    factory::feature_cost::FeatureCostFactory::new(db)
        .feature_key("brief_generation")
        .deleted()
        .build()
        .await?;
    factory::create_feature_cost(db, "brief_generation", 5).await?;

    let repo = FeatureCostRepository::new(db);
    let result = repo
        .create(CreateFeatureCostParam {
            feature_key: "brief_generation".to_string(),
            display_name: "Brief generation".to_string(),
            description: None,
            cost: 6,
        })
        .await;

    let err = result.unwrap_err();
    assert!(matches!(
        err.sql_err(),
        Some(SqlErr::UniqueConstraintViolation(_))
    ));

    Ok(())
}
