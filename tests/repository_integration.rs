//! Integration tests for the PostgreSQL repository
//!
//! These tests need a reachable PostgreSQL database in `DATABASE_URL` and
//! are ignored by default. Run them with `cargo test -- --ignored`.
//! Every test works in its own uniquely named group.

use std::time::{SystemTime, UNIX_EPOCH};

use pickup_roster::domain::group::{Group, GroupName};
use pickup_roster::domain::person::{Person, PersonName, Team};
use pickup_roster::domain::repositories::{GroupRepository, RosterRepository, StorageError};
use pickup_roster::infrastructure::repositories::PostgresRosterRepository;
use sqlx::PgPool;

/// Set up a repository on the test database
async fn setup_repository() -> PostgresRosterRepository {
    let database_url = std::env::var("DATABASE_URL")
        .expect("DATABASE_URL must be set for integration tests");

    let pool = PgPool::connect(&database_url)
        .await
        .expect("Failed to connect to test database");

    let repo = PostgresRosterRepository::new(pool);
    repo.ensure_schema().await.expect("Failed to create schema");
    repo
}

/// Create a group name no other test run uses
fn unique_group(prefix: &str) -> GroupName {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock after epoch")
        .as_nanos();
    GroupName::new(format!("{}-{}", prefix, nanos)).expect("valid group")
}

fn person(name: &str, team: Team) -> Person {
    Person::new(name, team).expect("valid person")
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn test_add_and_list_by_team() {
    let repo = setup_repository().await;
    let group = unique_group("list");

    repo.add_person(&group, &person("Ana", Team::TeamA)).await.unwrap();
    repo.add_person(&group, &person("Bruno", Team::TeamB)).await.unwrap();
    repo.add_person(&group, &person("Caio", Team::TeamA)).await.unwrap();

    let team_a = repo.list_by_group_and_team(&group, Team::TeamA).await.unwrap();
    let names: Vec<_> = team_a.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Ana", "Caio"], "insertion order is kept");

    let all = repo.list_by_group(&group).await.unwrap();
    assert_eq!(all.len(), 3);

    repo.remove_group(&group).await.unwrap();
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn test_duplicate_name_is_rejected() {
    let repo = setup_repository().await;
    let group = unique_group("dup");

    repo.add_person(&group, &person("Ana", Team::TeamA)).await.unwrap();
    let err = repo
        .add_person(&group, &person("Ana", Team::TeamB))
        .await
        .unwrap_err();

    assert!(matches!(err, StorageError::DuplicateName { .. }));
    assert_eq!(repo.list_by_group(&group).await.unwrap().len(), 1);

    repo.remove_group(&group).await.unwrap();
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn test_remove_person() {
    let repo = setup_repository().await;
    let group = unique_group("remove");

    repo.add_person(&group, &person("Ana", Team::TeamA)).await.unwrap();
    repo.remove_person(&group, &PersonName::new("Ana").unwrap())
        .await
        .unwrap();
    repo.remove_person(&group, &PersonName::new("Ghost").unwrap())
        .await
        .expect("removing an absent person is a no-op");

    assert!(repo.list_by_group(&group).await.unwrap().is_empty());

    repo.remove_group(&group).await.unwrap();
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn test_group_registry_and_cascade() {
    let repo = setup_repository().await;
    let group = Group::new(unique_group("registry").as_str()).unwrap();

    repo.create(&group).await.unwrap();
    let err = repo.create(&group).await.unwrap_err();
    assert!(matches!(err, StorageError::DuplicateGroup { .. }));

    repo.add_person(group.name(), &person("Ana", Team::TeamA))
        .await
        .unwrap();
    assert!(repo
        .list_all()
        .await
        .unwrap()
        .iter()
        .any(|g| g.name() == group.name()));

    repo.remove_group(group.name()).await.unwrap();

    assert!(!repo
        .list_all()
        .await
        .unwrap()
        .iter()
        .any(|g| g.name() == group.name()));
    assert!(repo.list_by_group(group.name()).await.unwrap().is_empty());
}
