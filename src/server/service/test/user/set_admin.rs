use super::*;

/// Tests an admin revoking their own admin status.
///
/// Expected: Err(BadRequest), flag unchanged
#[tokio::test]
async fn refuses_self_revoke() -> Result<(), AppError> {
    let test = TestBuilder::new().with_ledger_tables().build().await.unwrap();
    let db = test.db();
    let admin = factory::user::create_admin(db).await?;

    let service = UserService::new(db);
    let result = service.set_admin(admin.id, admin.id, false).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
    assert!(service.get_user(admin.id).await?.unwrap().admin);

    Ok(())
}

/// Tests granting and revoking another user's admin status.
///
/// Expected: Ok with the flag set, then cleared
#[tokio::test]
async fn toggles_other_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_ledger_tables().build().await.unwrap();
    let db = test.db();
    let admin = factory::user::create_admin(db).await?;
    let user = factory::create_user(db).await?;

    let service = UserService::new(db);

    assert!(service.set_admin(admin.id, user.id, true).await?.admin);
    assert!(!service.set_admin(admin.id, user.id, false).await?.admin);

    Ok(())
}

/// Tests changing the status of a user that does not exist.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn unknown_user_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new().with_ledger_tables().build().await.unwrap();
    let db = test.db();
    let admin = factory::user::create_admin(db).await?;

    let result = UserService::new(db).set_admin(admin.id, 999, true).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
