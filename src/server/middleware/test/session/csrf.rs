use super::*;

/// Tests that a CSRF token validates exactly once.
///
/// Expected: first validation true, replay false
#[tokio::test]
async fn token_is_single_use() -> Result<(), AppError> {
    let mut test = TestBuilder::new().build().await.unwrap();
    let session = test.session().await.unwrap();

    let csrf = CsrfSession::new(session);
    csrf.set_token("state-123".to_string()).await?;

    assert!(csrf.validate("state-123").await?);
    assert!(!csrf.validate("state-123").await?);

    Ok(())
}

/// Tests a callback whose state differs from the stored token.
///
/// Expected: false, and the token is consumed anyway
#[tokio::test]
async fn mismatched_state_fails() -> Result<(), AppError> {
    let mut test = TestBuilder::new().build().await.unwrap();
    let session = test.session().await.unwrap();

    let csrf = CsrfSession::new(session);
    csrf.set_token("expected".to_string()).await?;

    assert!(!csrf.validate("forged").await?);
    assert_eq!(csrf.take_token().await?, None);

    Ok(())
}
