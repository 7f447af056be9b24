use super::*;

/// Tests resolving the viewer on public endpoints.
///
/// Expected: None when anonymous, Some(User) once logged in
#[tokio::test]
async fn resolves_viewer_when_logged_in() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let guard = AuthGuard::new(db, session);
    assert!(guard.optional().await?.is_none());

    let user = factory::create_user(db).await?;
    AuthSession::new(session).set_user_id(user.id).await?;

    assert_eq!(guard.optional().await?.map(|u| u.id), Some(user.id));

    Ok(())
}
