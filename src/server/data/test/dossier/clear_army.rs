use super::*;

/// Tests detaching dossiers from an army about to be deleted.
///
/// Expected: Ok(1) and the dossier's army cleared
#[tokio::test]
async fn clears_army_reference() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db();

    let (user, faction, _, army) = factory::helpers::create_army_with_dependencies(db).await?;
    let dossier = factory::dossier::DossierFactory::new(db, user.id, faction.id)
        .army(army.id)
        .build()
        .await?;

    let repo = DossierRepository::new(db);
    let cleared = repo.clear_army(army.id).await?;

    assert_eq!(cleared, 1);
    let stored = repo.find_by_id(dossier.id).await?.unwrap();
    assert_eq!(stored.army_id, None);

    Ok(())
}
