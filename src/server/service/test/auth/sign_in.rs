use super::*;

/// Tests the first login of a Discord account.
///
/// Expected: user created with the signup grant recorded in the ledger
#[tokio::test]
async fn grants_tokens_to_new_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_ledger_tables().build().await.unwrap();
    let db = test.db();
    let http = reqwest::Client::new();
    let oauth = oauth_client();

    let user = AuthService::new(db, &http, &oauth)
        .sign_in(discord_user("111", Some("Commander")), false, 20)
        .await?;

    assert_eq!(user.name, "Commander");
    assert_eq!(user.token_balance, 20);
    assert!(!user.admin);

    let entries = entity::prelude::TokenLedger::find().all(db).await?;
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].delta, 20);
    assert_eq!(entries[0].kind, LedgerKind::SignupGrant.as_str());

    Ok(())
}

/// Tests that returning users are not granted tokens again.
///
/// Expected: balance unchanged, name refreshed, no ledger entry
#[tokio::test]
async fn returning_user_gets_no_grant() -> Result<(), AppError> {
    let test = TestBuilder::new().with_ledger_tables().build().await.unwrap();
    let db = test.db();
    let http = reqwest::Client::new();
    let oauth = oauth_client();

    factory::user::UserFactory::new(db)
        .discord_id("222")
        .token_balance(7)
        .build()
        .await?;

    let user = AuthService::new(db, &http, &oauth)
        .sign_in(discord_user("222", None), false, 20)
        .await?;

    assert_eq!(user.name, "user_222");
    assert_eq!(user.token_balance, 7);
    assert_eq!(entity::prelude::TokenLedger::find().count(db).await?, 0);

    Ok(())
}

/// Tests signing in after consuming an admin bootstrap code.
///
/// Expected: user stored as admin
#[tokio::test]
async fn sets_admin_flag() -> Result<(), AppError> {
    let test = TestBuilder::new().with_ledger_tables().build().await.unwrap();
    let db = test.db();
    let http = reqwest::Client::new();
    let oauth = oauth_client();

    let user = AuthService::new(db, &http, &oauth)
        .sign_in(discord_user("333", None), true, 0)
        .await?;

    assert!(user.admin);
    assert_eq!(entity::prelude::TokenLedger::find().count(db).await?, 0);

    Ok(())
}
