mod common;

use repo_analyzer::domain::entities::Repo;
use repo_analyzer::domain::repositories::RepoStore;
use repo_analyzer::error::AppError;
use repo_analyzer::infrastructure::persistence::SqliteRepoStore;
use sqlx::SqlitePool;
use std::sync::Arc;

fn repo(owner: &str, name: &str, stars: i64) -> Repo {
    Repo::new(
        owner.to_string(),
        name.to_string(),
        stars,
        1,
        Some("Rust".to_string()),
        format!("https://github.com/{owner}/{name}"),
        common::timestamp("2024-01-15T12:00:00Z"),
    )
}

#[sqlx::test]
async fn test_upsert_inserts_rows(pool: SqlitePool) {
    let store = SqliteRepoStore::new(Arc::new(pool.clone()));

    let written = store
        .upsert(vec![repo("alice", "r1", 10), repo("alice", "r2", 50)])
        .await
        .unwrap();

    assert_eq!(written, 2);
    assert_eq!(common::count_repos(&pool).await, 2);

    let repos = store.list_repos(Some("alice".to_string())).await.unwrap();
    let r1 = repos.iter().find(|r| r.name == "r1").unwrap();
    assert_eq!(r1, &repo("alice", "r1", 10));
}

#[sqlx::test]
async fn test_upsert_overwrites_existing_key(pool: SqlitePool) {
    let store = SqliteRepoStore::new(Arc::new(pool.clone()));

    store
        .upsert(vec![repo("alice", "r1", 10), repo("alice", "r2", 50)])
        .await
        .unwrap();

    let mut updated = repo("alice", "r1", 99);
    updated.language = None;
    updated.updated_at = common::timestamp("2024-06-01T00:00:00Z");
    store
        .upsert(vec![updated.clone(), repo("alice", "r2", 51)])
        .await
        .unwrap();

    assert_eq!(common::count_repos(&pool).await, 2);

    let repos = store.list_repos(Some("alice".to_string())).await.unwrap();
    let r1 = repos.iter().find(|r| r.name == "r1").unwrap();
    let r2 = repos.iter().find(|r| r.name == "r2").unwrap();
    assert_eq!(r1, &updated);
    assert_eq!(r2.stars, 51);
}

#[sqlx::test]
async fn test_upsert_is_idempotent(pool: SqlitePool) {
    let store = SqliteRepoStore::new(Arc::new(pool.clone()));
    let batch = vec![repo("alice", "r1", 10), repo("bob", "r3", 30)];

    store.upsert(batch.clone()).await.unwrap();
    let once = store.list_repos(None).await.unwrap();

    store.upsert(batch).await.unwrap();
    let twice = store.list_repos(None).await.unwrap();

    assert_eq!(once, twice);
    assert_eq!(common::count_repos(&pool).await, 2);
}

#[sqlx::test]
async fn test_upsert_duplicate_keys_last_write_wins(pool: SqlitePool) {
    let store = SqliteRepoStore::new(Arc::new(pool.clone()));

    let written = store
        .upsert(vec![repo("alice", "r1", 1), repo("alice", "r1", 2)])
        .await
        .unwrap();

    assert_eq!(written, 2);
    assert_eq!(common::count_repos(&pool).await, 1);

    let repos = store.list_repos(None).await.unwrap();
    assert_eq!(repos[0].stars, 2);
}

#[sqlx::test]
async fn test_upsert_empty_batch(pool: SqlitePool) {
    let store = SqliteRepoStore::new(Arc::new(pool.clone()));

    assert_eq!(store.upsert(vec![]).await.unwrap(), 0);
    assert_eq!(common::count_repos(&pool).await, 0);
}

#[sqlx::test]
async fn test_list_repos_filters_by_owner(pool: SqlitePool) {
    common::insert_repo(&pool, "alice", "r1", 10).await;
    common::insert_repo(&pool, "alice", "r2", 50).await;
    common::insert_repo(&pool, "bob", "r3", 30).await;

    let store = SqliteRepoStore::new(Arc::new(pool));

    let all = store.list_repos(None).await.unwrap();
    assert_eq!(all.len(), 3);

    let bob = store.list_repos(Some("bob".to_string())).await.unwrap();
    assert_eq!(bob.len(), 1);
    assert_eq!(bob[0].name, "r3");
    assert_eq!(bob[0].stars, 30);
}

#[sqlx::test]
async fn test_list_repos_unknown_owner_is_empty(pool: SqlitePool) {
    common::insert_repo(&pool, "alice", "r1", 10).await;

    let store = SqliteRepoStore::new(Arc::new(pool));
    let repos = store
        .list_repos(Some("nonexistent".to_string()))
        .await
        .unwrap();

    assert!(repos.is_empty());
}

#[sqlx::test]
async fn test_list_repos_most_recently_updated_first(pool: SqlitePool) {
    common::insert_repo_updated(&pool, "alice", "old", 1, "2023-01-01T00:00:00Z").await;
    common::insert_repo_updated(&pool, "alice", "new", 1, "2024-05-01T00:00:00Z").await;

    let store = SqliteRepoStore::new(Arc::new(pool));
    let repos = store.list_repos(None).await.unwrap();

    assert_eq!(repos[0].name, "new");
    assert_eq!(repos[1].name, "old");
}

#[sqlx::test]
async fn test_top_repos_sorted_and_limited(pool: SqlitePool) {
    for (name, stars) in [("a", 5), ("b", 40), ("c", 12), ("d", 40), ("e", 1)] {
        common::insert_repo(&pool, "alice", name, stars).await;
    }
    common::insert_repo(&pool, "bob", "huge", 1000).await;

    let store = SqliteRepoStore::new(Arc::new(pool));
    let top = store
        .top_repos(Some("alice".to_string()), 3)
        .await
        .unwrap();

    assert_eq!(top.len(), 3);
    assert!(top.iter().all(|r| r.owner == "alice"));
    assert!(top.windows(2).all(|w| w[0].stars >= w[1].stars));

    let names: Vec<&str> = top.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, ["b", "d", "c"]);
}

#[sqlx::test]
async fn test_top_repos_across_owners(pool: SqlitePool) {
    common::insert_repo(&pool, "alice", "r1", 10).await;
    common::insert_repo(&pool, "alice", "r2", 50).await;
    common::insert_repo(&pool, "bob", "r3", 30).await;

    let store = SqliteRepoStore::new(Arc::new(pool));
    let top = store.top_repos(None, 10).await.unwrap();

    let names: Vec<&str> = top.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, ["r2", "r3", "r1"]);
}

#[sqlx::test]
async fn test_top_repos_rejects_non_positive_limit(pool: SqlitePool) {
    let store = SqliteRepoStore::new(Arc::new(pool));

    let result = store.top_repos(None, 0).await;
    assert!(matches!(result, Err(AppError::Validation { .. })));

    let result = store.top_repos(Some("alice".to_string()), -3).await;
    assert!(matches!(result, Err(AppError::Validation { .. })));
}

#[sqlx::test]
async fn test_ping_and_count(pool: SqlitePool) {
    common::insert_repo(&pool, "alice", "r1", 10).await;
    common::insert_repo(&pool, "bob", "r3", 30).await;

    let store = SqliteRepoStore::new(Arc::new(pool));

    assert!(store.ping().await.is_ok());
    assert_eq!(store.count(None).await.unwrap(), 2);
    assert_eq!(store.count(Some("bob".to_string())).await.unwrap(), 1);
}

#[sqlx::test]
async fn test_owner_matching_ignores_case(pool: SqlitePool) {
    let store = SqliteRepoStore::new(Arc::new(pool.clone()));

    store.upsert(vec![repo("octocat", "r1", 10)]).await.unwrap();
    store.upsert(vec![repo("OctoCat", "r1", 20)]).await.unwrap();

    assert_eq!(common::count_repos(&pool).await, 1);

    let repos = store.list_repos(Some("OCTOCAT".to_string())).await.unwrap();
    assert_eq!(repos.len(), 1);
    assert_eq!(repos[0].stars, 20);

    let top = store.top_repos(Some("octoCAT".to_string()), 5).await.unwrap();
    assert_eq!(top.len(), 1);
}
