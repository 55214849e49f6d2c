use std::sync::Arc;

use account_service::{
    AccountService, IdentityResolver, InMemoryAccountRepository, PlaceholderIdentityResolver,
    PLACEHOLDER_IDENTITY,
};
use common::error::Error;

/// Service wired to a repository handle the test can inspect directly
fn service_with_repo() -> (AccountService, Arc<InMemoryAccountRepository>) {
    let repo = Arc::new(InMemoryAccountRepository::new());
    let service = AccountService::with_repository(repo.clone());
    (service, repo)
}

#[tokio::test]
async fn test_signup_returns_public_projection() {
    let service = AccountService::new();

    let user = service.signup("abc12345", "Secret#123").await.unwrap();

    // The projection never carries the password
    assert_eq!(user.user_id, "abc12345");
    assert_eq!(user.nickname, "abc12345");
}

#[tokio::test]
async fn test_signup_rejects_empty_credentials() {
    let service = AccountService::new();

    let result = service.signup("", "Secret#123").await;
    assert!(matches!(result, Err(Error::MissingCredentials(_))));

    let result = service.signup("abc12345", "").await;
    assert!(matches!(result, Err(Error::MissingCredentials(_))));
}

#[tokio::test]
async fn test_signup_rejects_duplicate_user_id() {
    let (service, repo) = service_with_repo();

    service.signup("abc12345", "Secret#123").await.unwrap();

    // The losing signup leaves the stored account untouched
    let result = service.signup("abc12345", "Another#1").await;
    assert!(matches!(result, Err(Error::DuplicateAccount(_))));

    assert_eq!(repo.accounts.len(), 1);
    assert_eq!(repo.accounts.get("abc12345").unwrap().password, "Secret#123");
}

#[tokio::test]
async fn test_get_user_unknown_id() {
    let service = AccountService::new();

    let result = service.get_user("zzz99999").await;
    assert!(matches!(result, Err(Error::AccountNotFound(_))));
}

#[tokio::test]
async fn test_update_user_changes_password() {
    let (service, repo) = service_with_repo();
    service.signup("abc12345", "Secret#123").await.unwrap();

    service.update_user("abc12345", Some("Fresh#456")).await.unwrap();

    assert_eq!(repo.accounts.get("abc12345").unwrap().password, "Fresh#456");
}

#[tokio::test]
async fn test_update_user_without_password_keeps_stored_value() {
    let (service, repo) = service_with_repo();
    service.signup("abc12345", "Secret#123").await.unwrap();

    // No new password still counts as a successful update
    service.update_user("abc12345", None).await.unwrap();

    assert_eq!(repo.accounts.get("abc12345").unwrap().password, "Secret#123");
}

#[tokio::test]
async fn test_update_user_unknown_id() {
    let service = AccountService::new();

    let result = service.update_user("zzz99999", Some("Fresh#456")).await;
    assert!(matches!(result, Err(Error::AccountNotFound(_))));

    // The existence check also runs when no password is supplied
    let result = service.update_user("zzz99999", None).await;
    assert!(matches!(result, Err(Error::AccountNotFound(_))));
}

#[tokio::test]
async fn test_close_account_requires_confirmation() {
    let (service, repo) = service_with_repo();
    service.signup("abc12345", "Secret#123").await.unwrap();

    // The confirmation check fires before the account is even looked up
    let result = service.close_account("abc12345", false).await;
    assert!(matches!(result, Err(Error::ConfirmationRequired(_))));
    assert_eq!(repo.accounts.len(), 1);

    let result = service.close_account("zzz99999", false).await;
    assert!(matches!(result, Err(Error::ConfirmationRequired(_))));
}

#[tokio::test]
async fn test_close_account_unknown_id() {
    let service = AccountService::new();

    let result = service.close_account("zzz99999", true).await;
    assert!(matches!(result, Err(Error::AccountNotFound(_))));
}

#[tokio::test]
async fn test_close_account_removes_and_stays_removed() {
    let (service, repo) = service_with_repo();
    service.signup("abc12345", "Secret#123").await.unwrap();

    service.close_account("abc12345", true).await.unwrap();
    assert!(repo.accounts.is_empty());

    // Closing again reports the account as gone
    let result = service.close_account("abc12345", true).await;
    assert!(matches!(result, Err(Error::AccountNotFound(_))));

    let result = service.get_user("abc12345").await;
    assert!(matches!(result, Err(Error::AccountNotFound(_))));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_signup_single_winner() {
    let (service, repo) = service_with_repo();
    let service = Arc::new(service);

    // Race several signups for the same id across worker threads
    let mut handles = Vec::new();
    for i in 0..8 {
        let service = service.clone();
        handles.push(tokio::spawn(async move {
            service.signup("abc12345", &format!("Secret#12{}", i)).await
        }));
    }

    let mut winners = 0;
    for handle in handles {
        if handle.await.unwrap().is_ok() {
            winners += 1;
        }
    }

    // Exactly one signup wins and exactly one account exists afterwards
    assert_eq!(winners, 1);
    assert_eq!(repo.accounts.len(), 1);
}

#[tokio::test]
async fn test_placeholder_resolver_yields_fixed_identity() {
    let resolver = PlaceholderIdentityResolver::new();
    assert_eq!(resolver.resolve().await.unwrap(), PLACEHOLDER_IDENTITY);

    let resolver = PlaceholderIdentityResolver::with_identity("abc12345");
    assert_eq!(resolver.resolve().await.unwrap(), "abc12345");
}
