use super::*;

/// Tests deleting a faction an army still belongs to.
///
/// Expected: Err(Conflict), faction kept
#[tokio::test]
async fn refuses_while_armies_use_it() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db();
    let user = factory::create_user(db).await?;
    let faction = factory::create_faction(db).await?;
    factory::create_army(db, user.id, faction.id).await?;

    let service = FactionService::new(db);

    assert!(matches!(
        service.delete(faction.id).await,
        Err(AppError::Conflict(_))
    ));
    service.get(faction.id).await?;

    Ok(())
}

/// Tests deleting a faction a brief still belongs to.
///
/// Expected: Err(Conflict)
#[tokio::test]
async fn refuses_while_briefs_use_it() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db();
    let user = factory::create_user(db).await?;
    let faction = factory::create_faction(db).await?;
    factory::create_dossier(db, user.id, faction.id).await?;

    let result = FactionService::new(db).delete(faction.id).await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}

/// Tests deleting an unused faction.
///
/// Expected: Ok, then NotFound on lookup
#[tokio::test]
async fn deletes_unused_faction() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db();
    let (faction, _) = factory::helpers::create_faction_with_detachment(db).await?;

    let service = FactionService::new(db);
    service.delete(faction.id).await?;

    assert!(matches!(
        service.get(faction.id).await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}
