use super::*;

/// Tests crediting a balance.
///
/// Expected: Ok(Some) with the increased balance
#[tokio::test]
async fn credits_balance() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db();

    let user = factory::user::UserFactory::new(db)
        .token_balance(5)
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let balance = repo.apply_balance_delta(user.id, 10).await?;

    assert_eq!(balance, Some(15));

    Ok(())
}

/// Tests debiting the exact remaining balance.
///
/// Expected: Ok(Some(0))
#[tokio::test]
async fn debits_down_to_zero() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db();

    let user = factory::user::UserFactory::new(db)
        .token_balance(3)
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let balance = repo.apply_balance_delta(user.id, -3).await?;

    assert_eq!(balance, Some(0));

    Ok(())
}

/// Tests that a debit larger than the balance is refused at the database.
///
/// Expected: Ok(None) and the stored balance unchanged
#[tokio::test]
async fn refuses_overdraw() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db();

    let user = factory::user::UserFactory::new(db)
        .token_balance(2)
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let balance = repo.apply_balance_delta(user.id, -3).await?;

    assert_eq!(balance, None);
    let stored = repo.find_by_id(user.id).await?.unwrap();
    assert_eq!(stored.token_balance, 2);

    Ok(())
}

/// Tests applying a delta to a missing user.
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
    let balance = repo.apply_balance_delta(999, 10).await?;

    assert_eq!(balance, None);

    Ok(())
}
