use super::*;

/// Tests deleting a mission a game session still refers to.
///
/// Expected: Err(Conflict), then Ok once nothing refers to it
#[tokio::test]
async fn refuses_while_in_use() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db();

    let user = factory::create_user(db).await?;
    let used = factory::create_mission(db).await?;
    let unused = factory::create_mission(db).await?;
    factory::game_session::GameSessionFactory::new(db, user.id)
        .mission(used.id)
        .build()
        .await?;

    let service = MissionService::new(db);

    assert!(matches!(
        service.delete(used.id).await,
        Err(AppError::Conflict(_))
    ));
    service.delete(unused.id).await?;
    assert!(matches!(
        service.get(unused.id).await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}
