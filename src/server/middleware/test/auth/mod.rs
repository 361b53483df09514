use super::*;

/// Tests that an empty session is rejected before any permission is checked.
///
/// Expected: Err(AuthError::UserNotInSession)
#[tokio::test]
async fn rejects_missing_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new().build().unwrap();
    let session = test.session();

    let result = AuthGuard::new(session).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInSession))
    ));

    Ok(())
}

/// Tests that any logged-in operator passes an empty permission list.
///
/// Expected: Ok(AuthenticatedUser)
#[tokio::test]
async fn empty_permission_list_grants_access() -> Result<(), AppError> {
    let mut test = TestBuilder::new().build().unwrap();
    let session = test.session();
    let user = operator(vec![], false);
    AuthSession::new(session).set_user(&user).await?;

    let returned = AuthGuard::new(session).require(&[]).await?;

    assert_eq!(returned, user);

    Ok(())
}

/// Tests that MANAGE_GUILD on the requested guild grants access.
///
/// Expected: Ok(AuthenticatedUser)
#[tokio::test]
async fn grants_manage_guild() -> Result<(), AppError> {
    let mut test = TestBuilder::new().build().unwrap();
    let session = test.session();
    AuthSession::new(session)
        .set_user(&operator(vec![guild("42", MANAGE)], false))
        .await?;

    let result = AuthGuard::new(session)
        .require(&[Permission::ManageGuild(42)])
        .await;

    assert!(result.is_ok());

    Ok(())
}

/// Tests that plain membership without MANAGE_GUILD is denied.
///
/// Expected: Err(AuthError::GuildAccessDenied) naming the user and guild
#[tokio::test]
async fn denies_member_without_manage_guild() -> Result<(), AppError> {
    let mut test = TestBuilder::new().build().unwrap();
    let session = test.session();
    AuthSession::new(session)
        .set_user(&operator(vec![guild("42", MEMBER)], false))
        .await?;

    let result = AuthGuard::new(session)
        .require(&[Permission::ManageGuild(42)])
        .await;

    match result {
        Err(AppError::AuthErr(AuthError::GuildAccessDenied { user_id, guild_id })) => {
            assert_eq!(user_id, "123456789");
            assert_eq!(guild_id, 42);
        }
        other => panic!("Expected GuildAccessDenied, got: {:?}", other),
    }

    Ok(())
}

/// Tests that owners manage guilds they belong to regardless of permissions.
///
/// Expected: Ok(AuthenticatedUser) with is_owner set
#[tokio::test]
async fn owner_bypasses_permission_bits() -> Result<(), AppError> {
    let mut test = TestBuilder::new().build().unwrap();
    let session = test.session();
    AuthSession::new(session)
        .set_user(&operator(vec![guild("42", MEMBER)], true))
        .await?;

    let user = AuthGuard::new(session)
        .require(&[Permission::ManageGuild(42)])
        .await?;

    assert!(user.is_owner);

    Ok(())
}

/// Tests that a guild the operator is not in is denied even with other permissions.
///
/// Expected: Err(AuthError::GuildAccessDenied)
#[tokio::test]
async fn denies_unknown_guild() -> Result<(), AppError> {
    let mut test = TestBuilder::new().build().unwrap();
    let session = test.session();
    AuthSession::new(session)
        .set_user(&operator(vec![guild("42", MANAGE)], true))
        .await?;

    let result = AuthGuard::new(session)
        .require(&[Permission::ManageGuild(7)])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::GuildAccessDenied { .. }))
    ));

    Ok(())
}

/// Tests that every permission in the list must hold.
///
/// Expected: Err(AuthError::GuildAccessDenied) for the second guild
#[tokio::test]
async fn fails_if_any_permission_missing() -> Result<(), AppError> {
    let mut test = TestBuilder::new().build().unwrap();
    let session = test.session();
    AuthSession::new(session)
        .set_user(&operator(
            vec![guild("42", MANAGE), guild("43", MEMBER)],
            false,
        ))
        .await?;

    let result = AuthGuard::new(session)
        .require(&[Permission::ManageGuild(42), Permission::ManageGuild(43)])
        .await;

    match result {
        Err(AppError::AuthErr(AuthError::GuildAccessDenied { guild_id, .. })) => {
            assert_eq!(guild_id, 43)
        }
        other => panic!("Expected GuildAccessDenied, got: {:?}", other),
    }

    Ok(())
}
