use super::*;

/// Tests the admin flag carried across the OAuth redirect.
///
/// Expected: true once after being set, then false
#[tokio::test]
async fn admin_flag_is_taken_once() -> Result<(), AppError> {
    let mut test = TestBuilder::new().build().await.unwrap();
    let session = test.session().await.unwrap();

    let flow = OAuthFlowSession::new(session);
    assert!(!flow.take_admin_flag().await?);

    flow.set_admin_flag(true).await?;

    assert!(flow.take_admin_flag().await?);
    assert!(!flow.take_admin_flag().await?);

    Ok(())
}

/// Tests logging out.
///
/// Expected: user ID gone after clearing
#[tokio::test]
async fn clear_logs_user_out() -> Result<(), AppError> {
    let mut test = TestBuilder::new().build().await.unwrap();
    let session = test.session().await.unwrap();

    let auth = AuthSession::new(session);
    auth.set_user_id(7).await?;
    assert_eq!(auth.get_user_id().await?, Some(7));

    auth.clear().await;

    assert_eq!(auth.get_user_id().await?, None);

    Ok(())
}
