//! Tests for the oneshot task handle.

use kodegen_file_update::runtime::AsyncTask;
use kodegen_file_update::{Credential, CredentialSource, GitHubResult, StaticCredential};

#[tokio::test]
async fn test_blocking_credential_read_resolves() {
    let source = StaticCredential::new("ghp_blocking");
    let task: AsyncTask<GitHubResult<Credential>> = AsyncTask::spawn(move || source.credential());
    let cred = task.await.unwrap().unwrap();
    assert_eq!(cred.expose(), "ghp_blocking");
}

#[tokio::test]
async fn test_async_work_resolves() {
    let task = AsyncTask::spawn_async(async { (200u16, "{}".to_string()) });
    assert_eq!(task.await.unwrap(), (200, "{}".to_string()));
}

#[tokio::test]
async fn test_dropped_sender_is_an_error() {
    let (tx, rx) = tokio::sync::oneshot::channel::<u8>();
    drop(tx);
    assert!(AsyncTask::new(rx).await.is_err());
}

#[tokio::test]
async fn test_panicking_task_is_an_error() {
    let task = AsyncTask::spawn(|| -> u8 { panic!("prompt aborted") });
    assert!(task.await.is_err());
}
