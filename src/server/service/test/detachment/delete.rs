use super::*;

/// Tests deleting a detachment an army still uses.
///
/// Expected: Err(Conflict) for the used one, Ok for its unused sibling
#[tokio::test]
async fn refuses_while_armies_use_it() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db();
    let user = factory::create_user(db).await?;
    let (faction, used) = factory::helpers::create_faction_with_detachment(db).await?;
    let unused = factory::create_detachment(db, faction.id).await?;
    factory::army::ArmyFactory::new(db, user.id, faction.id)
        .detachment(used.id)
        .build()
        .await?;

    let service = DetachmentService::new(db);

    assert!(matches!(
        service.delete(used.id).await,
        Err(AppError::Conflict(_))
    ));
    service.get(used.id).await?;

    service.delete(unused.id).await?;
    assert!(matches!(
        service.get(unused.id).await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}
