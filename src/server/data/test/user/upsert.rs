use super::*;

/// Tests creating a new user.
///
/// Verifies that the first login inserts the user with a zero balance and reports
/// the row as newly created.
///
/// Expected: Ok with `created` set and admin false
#[tokio::test]
async fn creates_new_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db();

    let repo = UserRepository::new(db);
    let result = repo
        .upsert(UpsertUserParam {
            discord_id: "123456789".to_string(),
            name: "TestUser".to_string(),
            is_admin: None,
        })
        .await?;

    assert!(result.created);
    assert_eq!(result.user.discord_id, "123456789");
    assert_eq!(result.user.name, "TestUser");
    assert_eq!(result.user.token_balance, 0);
    assert!(!result.user.admin);

    Ok(())
}

/// Tests upserting an existing user.
///
/// Verifies that a second login updates the name, keeps the balance and reports the
/// row as already existing.
///
/// Expected: Ok with `created` false and the new name stored
#[tokio::test]
async fn updates_existing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db();

    let existing = factory::user::UserFactory::new(db)
        .discord_id("42")
        .name("OldName")
        .token_balance(15)
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let result = repo
        .upsert(UpsertUserParam {
            discord_id: "42".to_string(),
            name: "NewName".to_string(),
            is_admin: None,
        })
        .await?;

    assert!(!result.created);
    assert_eq!(result.user.id, existing.id);
    assert_eq!(result.user.name, "NewName");
    assert_eq!(result.user.token_balance, 15);

    Ok(())
}

/// Tests that a plain login does not strip admin status.
///
/// Expected: Ok with admin still true
#[tokio::test]
async fn preserves_admin_without_explicit_flag() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db();

    factory::user::UserFactory::new(db)
        .discord_id("7")
        .admin(true)
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let result = repo
        .upsert(UpsertUserParam {
            discord_id: "7".to_string(),
            name: "Admin".to_string(),
            is_admin: None,
        })
        .await?;

    assert!(result.user.admin);

    Ok(())
}

/// Tests granting admin status through the login flow.
///
/// Expected: Ok with admin set on the existing row
#[tokio::test]
async fn grants_admin_when_flag_given() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db();

    factory::user::UserFactory::new(db)
        .discord_id("8")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let result = repo
        .upsert(UpsertUserParam {
            discord_id: "8".to_string(),
            name: "Promoted".to_string(),
            is_admin: Some(true),
        })
        .await?;

    assert!(result.user.admin);

    Ok(())
}
