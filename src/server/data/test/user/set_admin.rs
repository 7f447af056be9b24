use super::*;

/// Tests granting and revoking admin status.
///
/// Expected: Ok with the flag following each call
#[tokio::test]
async fn toggles_admin_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db();

    let user = factory::create_user(db).await?;
    let repo = UserRepository::new(db);

    let granted = repo.set_admin(user.id, true).await?.unwrap();
    assert!(granted.admin);

    let revoked = repo.set_admin(user.id, false).await?.unwrap();
    assert!(!revoked.admin);

    Ok(())
}

/// Tests setting admin status for a non-existent user.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db();

    let repo = UserRepository::new(db);
    let result = repo.set_admin(999, true).await?;

    assert!(result.is_none());

    Ok(())
}
