//! Tests for async task runtime primitives.

use repo_bootstrap::runtime::AsyncTask;

#[tokio::test]
async fn test_async_task_spawn_async() {
    let task = AsyncTask::spawn_async(async { 42 });
    let result = task.await.unwrap();
    assert_eq!(result, 42);
}

#[tokio::test]
async fn test_async_task_carries_results() {
    let task: AsyncTask<Result<&str, &str>> = AsyncTask::spawn_async(async { Ok("done") });
    assert_eq!(task.await.unwrap(), Ok("done"));

    let task: AsyncTask<Result<&str, &str>> = AsyncTask::spawn_async(async { Err("boom") });
    assert_eq!(task.await.unwrap(), Err("boom"));
}

#[tokio::test]
async fn test_async_tasks_join_independently() {
    let first = AsyncTask::spawn_async(async { 1 });
    let second = AsyncTask::spawn_async(async { 2 });
    let third = AsyncTask::spawn_async(async { 3 });

    let results = futures::future::join_all(vec![first, second, third]).await;
    let values: Vec<i32> = results.into_iter().map(Result::unwrap).collect();
    assert_eq!(values, vec![1, 2, 3]);
}
