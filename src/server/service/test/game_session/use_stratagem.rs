use super::*;

/// Tests spending CP on the army's own and core stratagems.
///
/// Expected: CP reduced by the cost and a `stratagem_used` event recorded
#[tokio::test]
async fn spends_command_points() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db();
    let (user, _, detachment, army) = factory::helpers::create_army_with_dependencies(db).await?;
    let own = factory::stratagem::StratagemFactory::new(db)
        .detachment(detachment.id)
        .cp_cost(2)
        .build()
        .await?;
    let core = factory::create_stratagem(db).await?;
    let session = factory::game_session::GameSessionFactory::new(db, user.id)
        .army(army.id)
        .command_points(3)
        .build()
        .await?;

    let service = GameSessionService::new(db);
    service.use_stratagem(user.id, session.id, own.id).await?;
    let after = service.use_stratagem(user.id, session.id, core.id).await?;

    assert_eq!(after.command_points, 0);

    let events = service.events(user.id, session.id).await?;
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].kind, "stratagem_used");
    assert_eq!(events[0].payload["stratagem_id"], own.id);

    Ok(())
}

/// Tests using another detachment's stratagem or one the session can't afford.
///
/// Expected: Err(BadRequest) for both, CP unchanged
#[tokio::test]
async fn rejects_unavailable_or_unaffordable() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db();
    let (user, faction, _, army) = factory::helpers::create_army_with_dependencies(db).await?;
    let other_detachment = factory::create_detachment(db, faction.id).await?;
    let foreign = factory::stratagem::StratagemFactory::new(db)
        .detachment(other_detachment.id)
        .build()
        .await?;
    let expensive = factory::stratagem::StratagemFactory::new(db)
        .cp_cost(3)
        .build()
        .await?;
    let session = factory::game_session::GameSessionFactory::new(db, user.id)
        .army(army.id)
        .command_points(2)
        .build()
        .await?;

    let service = GameSessionService::new(db);

    assert!(matches!(
        service.use_stratagem(user.id, session.id, foreign.id).await,
        Err(AppError::BadRequest(_))
    ));
    assert!(matches!(
        service.use_stratagem(user.id, session.id, expensive.id).await,
        Err(AppError::BadRequest(_))
    ));
    assert_eq!(service.get(user.id, session.id).await?.command_points, 2);

    Ok(())
}

/// Tests the rules lookup for a session.
///
/// Expected: mission plus core and own-detachment stratagems only
#[tokio::test]
async fn rules_list_available_stratagems() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db();
    let (user, faction, detachment, army) =
        factory::helpers::create_army_with_dependencies(db).await?;
    let other_detachment = factory::create_detachment(db, faction.id).await?;
    let mission = factory::create_mission(db).await?;
    let own = factory::stratagem::StratagemFactory::new(db)
        .detachment(detachment.id)
        .build()
        .await?;
    let core = factory::create_stratagem(db).await?;
    factory::stratagem::StratagemFactory::new(db)
        .detachment(other_detachment.id)
        .build()
        .await?;
    let session = factory::game_session::GameSessionFactory::new(db, user.id)
        .army(army.id)
        .mission(mission.id)
        .build()
        .await?;

    let rules = GameSessionService::new(db).rules(user.id, session.id).await?;

    assert_eq!(rules.mission.map(|m| m.id), Some(mission.id));
    let ids: Vec<i32> = rules.stratagems.iter().map(|s| s.id).collect();
    assert_eq!(ids.len(), 2);
    assert!(ids.contains(&own.id));
    assert!(ids.contains(&core.id));

    Ok(())
}
