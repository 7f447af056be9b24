use super::*;

/// Tests updating a datasheet that only has a legacy profile.
///
/// Expected: legacy profile persisted as version 1, update current as version 2
#[tokio::test]
async fn persists_legacy_profile_first() -> Result<(), AppError> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db();
    let faction = factory::create_faction(db).await?;
    let datasheet = factory::datasheet::DatasheetFactory::new(db, faction.id)
        .legacy_profile(json!({ "movement": 5 }))
        .build()
        .await?;

    let updated = DatasheetService::new(db)
        .update_profile(
            datasheet.id,
            json!({ "movement": 6 }),
            Some("Balance update".to_string()),
        )
        .await?;

    let versions = updated.history.versions();
    assert_eq!(versions.len(), 2);
    assert_eq!(versions[0].source, VersionSource::Legacy);
    assert_eq!(versions[0].body["movement"], 5);
    assert!(versions[0].is_persisted());
    assert_eq!(versions[1].note.as_deref(), Some("Balance update"));
    assert_eq!(updated.history.current_number(), Some(2));

    Ok(())
}

/// Tests rolling a datasheet back to an earlier profile.
///
/// Expected: version 1 current again, history length unchanged
#[tokio::test]
async fn set_current_rolls_back() -> Result<(), AppError> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db();
    let faction = factory::create_faction(db).await?;

    let service = DatasheetService::new(db);
    let created = service
        .create(CreateDatasheetParam {
            faction_id: faction.id,
            name: "Walker".to_string(),
            role: "Vehicle".to_string(),
            keywords: vec![],
            profile: json!({ "wounds": 10 }),
        })
        .await?;
    service
        .update_profile(created.datasheet.id, json!({ "wounds": 12 }), None)
        .await?;

    let rolled_back = service.set_current(created.datasheet.id, 1).await?;

    assert_eq!(rolled_back.history.versions().len(), 2);
    assert_eq!(rolled_back.history.current().unwrap().body["wounds"], 10);
    assert!(matches!(
        service.set_current(created.datasheet.id, 9).await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}
