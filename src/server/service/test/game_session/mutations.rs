use super::*;

/// Tests advancing rounds up to the last one.
///
/// Expected: one CP per round, Err(BadRequest) after round 5
#[tokio::test]
async fn next_round_stops_at_five() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db();
    let user = factory::create_user(db).await?;
    let session = factory::game_session::GameSessionFactory::new(db, user.id)
        .battle_round(4)
        .command_points(2)
        .build()
        .await?;

    let service = GameSessionService::new(db);
    let advanced = service.next_round(user.id, session.id).await?;

    assert_eq!(advanced.battle_round, 5);
    assert_eq!(advanced.command_points, 3);
    assert!(matches!(
        service.next_round(user.id, session.id).await,
        Err(AppError::BadRequest(_))
    ));

    Ok(())
}

/// Tests secondaries validation against the fixed mission mode.
///
/// Expected: two secondaries accepted, three refused and the stored list unchanged
#[tokio::test]
async fn fixed_mode_limits_secondaries() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db();
    let user = factory::create_user(db).await?;
    let session = factory::create_game_session(db, user.id).await?;

    let service = GameSessionService::new(db);
    let updated = service
        .update_secondaries(
            user.id,
            session.id,
            vec![secondary("Assassination", 8), secondary("Bring It Down", 5)],
        )
        .await?;
    assert_eq!(updated.total_score(), 13);

    let result = service
        .update_secondaries(
            user.id,
            session.id,
            vec![
                secondary("Assassination", 8),
                secondary("Bring It Down", 5),
                secondary("Cleanse", 2),
            ],
        )
        .await;
    assert!(matches!(result, Err(AppError::BadRequest(_))));

    let stored = service.get(user.id, session.id).await?;
    assert_eq!(stored.secondaries.len(), 2);

    Ok(())
}

/// Tests that the mission mode is locked after the first battle round.
///
/// Expected: Ok in round 1, Err(BadRequest) in round 2
#[tokio::test]
async fn mission_mode_locked_after_round_one() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db();
    let user = factory::create_user(db).await?;
    let session = factory::create_game_session(db, user.id).await?;

    let service = GameSessionService::new(db);
    let switched = service
        .set_mission_mode(user.id, session.id, MissionMode::Tactical)
        .await?;
    assert_eq!(switched.mission_mode, MissionMode::Tactical);

    service.next_round(user.id, session.id).await?;
    assert!(matches!(
        service
            .set_mission_mode(user.id, session.id, MissionMode::Fixed)
            .await,
        Err(AppError::BadRequest(_))
    ));

    Ok(())
}

/// Tests command point and primary score bounds.
///
/// Expected: Err(BadRequest) below zero CP or above 50 primary
#[tokio::test]
async fn enforces_bounds() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db();
    let user = factory::create_user(db).await?;
    let session = factory::game_session::GameSessionFactory::new(db, user.id)
        .command_points(1)
        .build()
        .await?;

    let service = GameSessionService::new(db);

    assert!(matches!(
        service.adjust_command_points(user.id, session.id, -2).await,
        Err(AppError::BadRequest(_))
    ));
    let adjusted = service.adjust_command_points(user.id, session.id, -1).await?;
    assert_eq!(adjusted.command_points, 0);

    assert!(matches!(
        service.set_primary(user.id, session.id, 51).await,
        Err(AppError::BadRequest(_))
    ));
    let scored = service.set_primary(user.id, session.id, 45).await?;
    assert_eq!(scored.primary_score, 45);

    Ok(())
}

/// Tests that an ended session can't be changed and that each mutation is audited.
///
/// Expected: Err(Conflict) after ending, events in order
#[tokio::test]
async fn ended_session_is_read_only() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db();
    let user = factory::create_user(db).await?;
    let session = factory::create_game_session(db, user.id).await?;

    let service = GameSessionService::new(db);
    service.set_primary(user.id, session.id, 10).await?;
    let ended = service.end(user.id, session.id).await?;

    assert_eq!(ended.status, SessionStatus::Completed);
    assert!(ended.ended_at.is_some());
    assert!(matches!(
        service.set_primary(user.id, session.id, 20).await,
        Err(AppError::Conflict(_))
    ));
    assert!(matches!(
        service.end(user.id, session.id).await,
        Err(AppError::Conflict(_))
    ));

    let kinds: Vec<String> = service
        .events(user.id, session.id)
        .await?
        .into_iter()
        .map(|e| e.kind)
        .collect();
    assert_eq!(kinds, vec!["score_updated", "session_ended"]);

    Ok(())
}

/// Tests reading another user's session.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn hides_other_users_sessions() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db();
    let owner = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let session = factory::create_game_session(db, owner.id).await?;

    let service = GameSessionService::new(db);

    assert!(matches!(
        service.get(other.id, session.id).await,
        Err(AppError::NotFound(_))
    ));
    assert!(matches!(
        service.next_round(other.id, session.id).await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}
