use account_service::{AccountRepository, InMemoryAccountRepository};
use common::error::Error;
use common::model::account::Account;

#[tokio::test]
async fn test_insert_and_find() {
    let repo = InMemoryAccountRepository::new();

    // Verify basic operations
    assert!(repo.accounts.is_empty());

    // Add an account
    let account = Account::new("abc12345", "Secret#123");
    let inserted = repo.insert(account).await.unwrap();
    assert_eq!(inserted.user_id, "abc12345");

    // Check it was added
    assert_eq!(repo.accounts.len(), 1);
    assert!(repo.accounts.contains_key("abc12345"));

    let found = repo.find("abc12345").await.unwrap();
    assert_eq!(found.unwrap().password, "Secret#123");

    // Unknown ids come back empty
    let missing = repo.find("zzz99999").await.unwrap();
    assert!(missing.is_none());
}

#[tokio::test]
async fn test_insert_rejects_duplicate_user_id() {
    let repo = InMemoryAccountRepository::new();

    repo.insert(Account::new("abc12345", "Secret#123")).await.unwrap();

    // A second insert under the same id must not replace the first
    let result = repo.insert(Account::new("abc12345", "Another#1")).await;
    assert!(matches!(result, Err(Error::DuplicateAccount(_))));

    assert_eq!(repo.accounts.len(), 1);
    assert_eq!(repo.accounts.get("abc12345").unwrap().password, "Secret#123");
}

#[tokio::test]
async fn test_update_password() {
    let repo = InMemoryAccountRepository::new();
    repo.insert(Account::new("abc12345", "Secret#123")).await.unwrap();

    // Update the stored password
    let updated = repo.update_password("abc12345", "Fresh#456").await.unwrap();
    assert_eq!(updated.unwrap().password, "Fresh#456");
    assert_eq!(repo.accounts.get("abc12345").unwrap().password, "Fresh#456");

    // Updating an unknown id reports the miss
    let missing = repo.update_password("zzz99999", "Fresh#456").await.unwrap();
    assert!(missing.is_none());
}

#[tokio::test]
async fn test_remove() {
    let repo = InMemoryAccountRepository::new();
    repo.insert(Account::new("abc12345", "Secret#123")).await.unwrap();

    // Remove returns the stored account
    let removed = repo.remove("abc12345").await.unwrap();
    assert_eq!(removed.unwrap().user_id, "abc12345");
    assert!(repo.accounts.is_empty());

    // A second removal finds nothing
    let missing = repo.remove("abc12345").await.unwrap();
    assert!(missing.is_none());
}
