//! Tests for signing in and out.

use drishti::store::fixture::{COMMANDER_EMAIL, COMMANDER_PASSWORD};

use super::*;

/// Tests login with the fixture credentials.
///
/// Expected: authenticated as `cmd-001` with no error and loading cleared
#[tokio::test]
async fn login_with_fixture_credentials() -> Result<(), TestError> {
    let mut test = TestBuilder::new().build().await?;

    test.store
        .login(&test.source, COMMANDER_EMAIL, COMMANDER_PASSWORD)
        .await;

    let auth = &test.store.auth;
    assert!(auth.is_authenticated);
    assert!(!auth.is_loading());
    assert_eq!(auth.error(), None);
    assert_eq!(auth.commander.as_ref().map(|c| c.id.as_str()), Some("cmd-001"));

    Ok(())
}

/// Tests login with a wrong password.
///
/// Expected: still signed out with "Authentication failed"
#[tokio::test]
async fn login_with_wrong_password_fails() -> Result<(), TestError> {
    let mut test = TestBuilder::new().build().await?;

    test.store.login(&test.source, COMMANDER_EMAIL, "wrong").await;

    let auth = &test.store.auth;
    assert!(!auth.is_authenticated);
    assert!(!auth.is_loading());
    assert!(auth.commander.is_none());
    assert_eq!(auth.error(), Some("Authentication failed"));

    Ok(())
}

/// Tests that a successful login clears the error left by a failed one.
///
/// Expected: error cleared once the second attempt succeeds
#[tokio::test]
async fn retry_after_failed_login_clears_error() -> Result<(), TestError> {
    let mut test = TestBuilder::new().build().await?;

    test.store.login(&test.source, "someone@drishti.com", "x").await;
    test.store
        .login(&test.source, COMMANDER_EMAIL, COMMANDER_PASSWORD)
        .await;

    assert!(test.store.auth.is_authenticated);
    assert_eq!(test.store.auth.error(), None);

    Ok(())
}

/// Tests logout after signing in.
///
/// Expected: commander cleared and signed out
#[tokio::test]
async fn logout_clears_commander() -> Result<(), TestError> {
    let mut test = TestBuilder::new().authenticated().build().await?;

    test.store.logout(&test.source).await;

    assert!(!test.store.auth.is_authenticated);
    assert!(test.store.auth.commander.is_none());

    Ok(())
}

/// Tests a rejected logout.
///
/// Expected: session kept with "Logout failed"
#[tokio::test]
async fn rejected_logout_keeps_session() -> Result<(), TestError> {
    let mut test = TestBuilder::new().authenticated().build().await?;

    test.store.logout(&FailingSource).await;

    assert!(test.store.auth.is_authenticated);
    assert_eq!(test.store.auth.error(), Some("Logout failed"));

    Ok(())
}

/// Tests storing a push notification token on the signed-in commander.
///
/// Expected: token stored on the commander
#[tokio::test]
async fn update_fcm_token_sets_commander_token() -> Result<(), TestError> {
    let mut test = TestBuilder::new().authenticated().build().await?;

    test.store.update_fcm_token(&test.source, "token-123").await;

    let token = test
        .store
        .auth
        .commander
        .as_ref()
        .and_then(|c| c.fcm_token.as_deref());
    assert_eq!(token, Some("token-123"));

    Ok(())
}
