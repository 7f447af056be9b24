use super::*;

/// Tests persisting session state.
///
/// Expected: Ok(true) and the new round and command points stored
#[tokio::test]
async fn saves_active_session() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db();

    let user = factory::create_user(db).await?;
    let created = factory::create_game_session(db, user.id).await?;

    let repo = GameSessionRepository::new(db);
    let mut session = repo.find_by_id(created.id).await?.unwrap();
    session.battle_round = 2;
    session.command_points += 1;

    assert!(repo.save_state(&session).await?);

    let stored = repo.find_by_id(created.id).await?.unwrap();
    assert_eq!(stored.battle_round, 2);
    assert_eq!(stored.command_points, session.command_points);

    Ok(())
}

/// Tests that a completed session is never written.
///
/// Expected: Ok(false) with the stored row unchanged
#[tokio::test]
async fn skips_completed_session() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db();

    let user = factory::create_user(db).await?;
    let created = factory::game_session::GameSessionFactory::new(db, user.id)
        .completed()
        .build()
        .await?;

    let repo = GameSessionRepository::new(db);
    let mut session = repo.find_by_id(created.id).await?.unwrap();
    assert_eq!(session.status, SessionStatus::Completed);
    session.primary_score = 30;

    assert!(!repo.save_state(&session).await?);
    assert_eq!(repo.find_by_id(created.id).await?.unwrap().primary_score, 0);

    Ok(())
}
