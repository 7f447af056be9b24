use super::*;

/// Tests restoring an older version.
///
/// Expected: pointer moves to version 1, no version is added
#[tokio::test]
async fn repoints_without_copying() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db();
    let (user, army) = setup(db, 0).await?;
    let dossier = factory::create_dossier(db, user.id, army.faction_id).await?;
    let generator = FixedBriefGenerator::new("unused");
    let service = DossierService::new(db, &generator);

    service.edit(user.id, dossier.id, "First".to_string()).await?;
    service.edit(user.id, dossier.id, "Second".to_string()).await?;

    let restored = service.set_current(user.id, dossier.id, 1).await?;

    assert_eq!(restored.history.versions().len(), 2);
    assert_eq!(restored.history.current_number(), Some(1));
    assert_eq!(restored.history.current().unwrap().body, "First");

    let fetched = service.get(dossier.id, Some(user.id)).await?;
    assert_eq!(fetched.history.current_number(), Some(1));

    Ok(())
}

/// Tests selecting a version that does not exist.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn unknown_version_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db();
    let (user, army) = setup(db, 0).await?;
    let dossier = factory::create_dossier(db, user.id, army.faction_id).await?;
    let generator = FixedBriefGenerator::new("unused");

    let result = DossierService::new(db, &generator)
        .set_current(user.id, dossier.id, 3)
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
