use super::*;

/// Tests pricing a key that already has an active cost.
///
/// Expected: Err(Conflict)
#[tokio::test]
async fn rejects_active_key() -> Result<(), AppError> {
    let test = TestBuilder::new().with_ledger_tables().build().await.unwrap();
    let db = test.db();
    factory::create_feature_cost(db, "brief_generation", 5).await?;

    let result = FeatureCostService::new(db)
        .create(param("brief_generation", 6))
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}

/// Tests re-pricing a key whose previous cost was soft-deleted.
///
/// Expected: Ok with a new active row, the retired row kept
#[tokio::test]
async fn reprices_deleted_key() -> Result<(), AppError> {
    let test = TestBuilder::new().with_ledger_tables().build().await.unwrap();
    let db = test.db();
    let retired = factory::feature_cost::FeatureCostFactory::new(db)
        .feature_key("brief_generation")
        .cost(3)
        .deleted()
        .build()
        .await?;

    let service = FeatureCostService::new(db);
    let cost = service.create(param("brief_generation", 6)).await?;

    assert_ne!(cost.id, retired.id);
    assert_eq!(cost.cost, 6);
    assert_eq!(service.list(false).await?.len(), 1);
    assert_eq!(service.list(true).await?.len(), 2);

    Ok(())
}

/// Tests keys outside `[a-z0-9_]+`.
///
/// Expected: Err(BadRequest) for each
#[tokio::test]
async fn rejects_malformed_key() -> Result<(), AppError> {
    let test = TestBuilder::new().with_ledger_tables().build().await.unwrap();
    let db = test.db();
    let service = FeatureCostService::new(db);

    for key in ["Brief", "brief-generation", "", "brief generation"] {
        let result = service.create(param(key, 5)).await;
        assert!(
            matches!(result, Err(AppError::BadRequest(_))),
            "key {:?} was accepted",
            key
        );
    }

    Ok(())
}
