use super::*;

/// Tests the audit trail ordering.
///
/// Expected: Ok with events returned oldest first
#[tokio::test]
async fn returns_events_oldest_first() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db();

    let user = factory::create_user(db).await?;
    let session = factory::create_game_session(db, user.id).await?;

    let repo = GameSessionRepository::new(db);
    repo.insert_event(session.id, user.id, SessionEventKind::SessionStarted, json!({}))
        .await?;
    repo.insert_event(
        session.id,
        user.id,
        SessionEventKind::ScoreUpdated,
        json!({ "from": 0, "to": 10 }),
    )
    .await?;

    let events = repo.get_events(session.id).await?;

    assert_eq!(events.len(), 2);
    assert_eq!(events[0].kind, "session_started");
    assert_eq!(events[1].kind, "score_updated");
    assert_eq!(events[1].payload["to"], 10);

    Ok(())
}
