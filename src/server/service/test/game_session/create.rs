use super::*;

/// Tests starting a session with an owned army and a mission.
///
/// Expected: active session in round 1 with a `session_started` event
#[tokio::test]
async fn starts_session_with_event() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db();
    let (user, _, _, army) = factory::helpers::create_army_with_dependencies(db).await?;
    let mission = factory::create_mission(db).await?;

    let service = GameSessionService::new(db);
    let session = service
        .create(CreateGameSessionParam {
            user_id: user.id,
            army_id: Some(army.id),
            mission_id: Some(mission.id),
            opponent: Some("  ".to_string()),
            mission_mode: MissionMode::Tactical,
        })
        .await?;

    assert_eq!(session.status, SessionStatus::Active);
    assert_eq!(session.battle_round, 1);
    assert_eq!(session.mission_mode, MissionMode::Tactical);
    assert_eq!(session.opponent, None);

    let events = service.events(user.id, session.id).await?;
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].kind, "session_started");
    assert_eq!(events[0].payload["mission_id"], mission.id);

    Ok(())
}

/// Tests starting a session with another user's army or an unknown mission.
///
/// Expected: Err(NotFound) for both
#[tokio::test]
async fn rejects_foreign_army_and_unknown_mission() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db();
    let (_, _, _, army) = factory::helpers::create_army_with_dependencies(db).await?;
    let other = factory::create_user(db).await?;

    let service = GameSessionService::new(db);
    let base = CreateGameSessionParam {
        user_id: other.id,
        army_id: None,
        mission_id: None,
        opponent: None,
        mission_mode: MissionMode::Fixed,
    };

    assert!(matches!(
        service
            .create(CreateGameSessionParam {
                army_id: Some(army.id),
                ..base.clone()
            })
            .await,
        Err(AppError::NotFound(_))
    ));
    assert!(matches!(
        service
            .create(CreateGameSessionParam {
                mission_id: Some(999),
                ..base
            })
            .await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}
