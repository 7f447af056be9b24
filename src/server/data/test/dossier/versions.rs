use super::*;

/// Tests reading versions back in number order.
///
/// Expected: Ok with versions sorted ascending regardless of insert order
#[tokio::test]
async fn returns_versions_in_order() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db();

    let user = factory::create_user(db).await?;
    let faction = factory::create_faction(db).await?;
    let dossier = factory::create_dossier(db, user.id, faction.id).await?;

    let repo = DossierRepository::new(db);
    repo.insert_version(dossier.id, 2, "second".into(), VersionSource::Edited, None, Utc::now())
        .await?;
    repo.insert_version(dossier.id, 1, "first".into(), VersionSource::Generated, None, Utc::now())
        .await?;

    let versions = repo.get_versions(dossier.id).await?;

    assert_eq!(versions.len(), 2);
    assert_eq!(versions[0].number, 1);
    assert_eq!(versions[0].body, "first");
    assert_eq!(versions[0].source, VersionSource::Generated);
    assert_eq!(versions[1].number, 2);

    Ok(())
}

/// Tests that deleting a dossier removes its versions.
///
/// Expected: Ok with no versions left
#[tokio::test]
async fn versions_cascade_on_delete() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db();

    let user = factory::create_user(db).await?;
    let faction = factory::create_faction(db).await?;
    let dossier = factory::create_dossier(db, user.id, faction.id).await?;
    factory::dossier::create_dossier_version(db, dossier.id, 1, "body").await?;

    let repo = DossierRepository::new(db);

    assert!(repo.delete(dossier.id).await?);
    assert!(repo.get_versions(dossier.id).await?.is_empty());

    Ok(())
}

/// Tests linking a version to a ledger entry that does not exist.
///
/// Expected: Err from the foreign key on `ledger_entry_id`
#[tokio::test]
async fn rejects_unknown_ledger_entry() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db();

    let user = factory::create_user(db).await?;
    let faction = factory::create_faction(db).await?;
    let dossier = factory::create_dossier(db, user.id, faction.id).await?;

    let repo = DossierRepository::new(db);
    let result = repo
        .insert_version(dossier.id, 1, "paid".into(), VersionSource::Generated, Some(999), Utc::now())
        .await;

    assert!(result.is_err());
    assert!(repo.get_versions(dossier.id).await?.is_empty());

    Ok(())
}
