use super::*;

/// Tests creating an army with a detachment of its own faction.
///
/// Expected: Ok with the trimmed name and the detachment set
#[tokio::test]
async fn creates_army() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db();
    let user = factory::create_user(db).await?;
    let (faction, detachment) = factory::helpers::create_faction_with_detachment(db).await?;

    let army = ArmyService::new(db)
        .create(user.id, param(faction.id, Some(detachment.id)))
        .await?;

    assert_eq!(army.name, "Spearhead");
    assert_eq!(army.user_id, user.id);
    assert_eq!(army.detachment_id, Some(detachment.id));

    Ok(())
}

/// Tests creating an army with a detachment of another faction.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn rejects_foreign_detachment() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db();
    let user = factory::create_user(db).await?;
    let faction = factory::create_faction(db).await?;
    let (_, foreign) = factory::helpers::create_faction_with_detachment(db).await?;

    let result = ArmyService::new(db)
        .create(user.id, param(faction.id, Some(foreign.id)))
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests creating an army for a faction that does not exist.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn rejects_unknown_faction() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db();
    let user = factory::create_user(db).await?;

    let result = ArmyService::new(db).create(user.id, param(999, None)).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}
