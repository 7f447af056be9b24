use super::*;

/// Tests editing a brief that predates version history.
///
/// Expected: legacy body persisted as version 1, the edit becomes current version 2
#[tokio::test]
async fn persists_legacy_before_appending() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db();
    let (user, army) = setup(db, 0).await?;
    let dossier = factory::dossier::DossierFactory::new(db, user.id, army.faction_id)
        .army(army.id)
        .legacy_content("Old plan")
        .build()
        .await?;
    let generator = FixedBriefGenerator::new("unused");

    let brief = DossierService::new(db, &generator)
        .edit(user.id, dossier.id, "New plan".to_string())
        .await?;

    let versions = brief.history.versions();
    assert_eq!(versions.len(), 2);
    assert_eq!(versions[0].number, 1);
    assert_eq!(versions[0].body, "Old plan");
    assert_eq!(versions[0].source, VersionSource::Legacy);
    assert!(versions[0].is_persisted());
    assert_eq!(brief.history.current_number(), Some(2));
    assert_eq!(brief.history.current().unwrap().body, "New plan");
    assert_eq!(entity::prelude::TokenLedger::find().count(db).await?, 0);

    Ok(())
}

/// Tests that blank content is refused.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn rejects_empty_content() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db();
    let (user, army) = setup(db, 0).await?;
    let dossier = factory::create_dossier(db, user.id, army.faction_id).await?;
    let generator = FixedBriefGenerator::new("unused");

    let result = DossierService::new(db, &generator)
        .edit(user.id, dossier.id, "   ".to_string())
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}
