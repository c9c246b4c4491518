//! Repository behaviour against a live PostgreSQL

mod common;

use std::collections::HashSet;

use cinedex_server::db::Repository;
use cinedex_server::models::{Actor, Character, Director, Film};
use cinedex_server::ErrorKind;

use common::{actor, character, director, film, test_pool};

#[tokio::test]
#[ignore = "requires database"]
async fn create_then_find_one_round_trips() {
    let pool = test_pool("round_trip").await;
    let repo = Repository::<Director>::new(&pool);

    let mut input = director("Denis", "Villeneuve");
    input.middle_name = Some("X".into());
    let created = repo.create(&input).await.unwrap();

    assert!(created.id > 0);
    assert_eq!(created.first_name, "Denis");
    assert_eq!(created.middle_name.as_deref(), Some("X"));

    let found = repo.find_one(&created.id.to_string()).await.unwrap();
    assert_eq!(found, created);
}

#[tokio::test]
#[ignore = "requires database"]
async fn film_round_trips() {
    let pool = test_pool("film_round_trip").await;
    let repo = Repository::<Film>::new(&pool);

    let input = Film {
        id: 0,
        title: "Dune".into(),
        directed_by: 7,
        logline: "A noble family becomes embroiled in a war for Arrakis.".into(),
        year: 2021,
    };
    let created = repo.create(&input).await.unwrap();

    assert!(created.id > 0);
    assert_eq!(created.title, input.title);
    assert_eq!(created.directed_by, 7);
    assert_eq!(created.logline, input.logline);
    assert_eq!(created.year, 2021);

    let found = repo.find_one(&created.id.to_string()).await.unwrap();
    assert_eq!(found, created);
}

#[tokio::test]
#[ignore = "requires database"]
async fn character_round_trips() {
    let pool = test_pool("character_round_trip").await;
    let repo = Repository::<Character>::new(&pool);

    for dies in [true, false] {
        let mut input = character("Duncan Idaho", 3, 11);
        input.dies_in_the_end = dies;
        let created = repo.create(&input).await.unwrap();

        assert!(created.id > 0);
        assert_eq!(created.name, "Duncan Idaho");
        assert_eq!(created.portrayed_by, 3);
        assert_eq!(created.featured_in, 11);
        assert_eq!(created.dies_in_the_end, dies);

        let found = repo.find_one(&created.id.to_string()).await.unwrap();
        assert_eq!(found, created);
    }
}

#[tokio::test]
#[ignore = "requires database"]
async fn create_ignores_submitted_id() {
    let pool = test_pool("ignores_id").await;
    let repo = Repository::<Actor>::new(&pool);

    let mut input = actor("Zendaya", "Coleman");
    input.id = 999;
    let created = repo.create(&input).await.unwrap();
    assert_ne!(created.id, 999);
}

#[tokio::test]
#[ignore = "requires database"]
async fn delete_then_find_one_is_not_found() {
    let pool = test_pool("delete_find").await;
    let repo = Repository::<Director>::new(&pool);

    let created = repo.create(&director("Denis", "Villeneuve")).await.unwrap();
    let id = created.id.to_string();

    repo.delete(&id).await.unwrap();
    assert_eq!(repo.find_one(&id).await.unwrap_err().kind(), ErrorKind::NotFound);
    assert_eq!(repo.delete(&id).await.unwrap_err().kind(), ErrorKind::NotFound);
}

#[tokio::test]
#[ignore = "requires database"]
async fn update_missing_id_is_not_found_and_changes_nothing() {
    let pool = test_pool("update_missing").await;
    let repo = Repository::<Film>::new(&pool);

    let existing = repo.create(&film("Arrival", 1, 2016)).await.unwrap();

    let mut ghost = film("Ghost", 1, 2000);
    ghost.id = existing.id + 100;
    let err = repo.update(ghost).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);

    assert_eq!(repo.find_all().await.unwrap(), vec![existing]);
}

#[tokio::test]
#[ignore = "requires database"]
async fn update_replaces_every_column() {
    let pool = test_pool("update_replace").await;
    let repo = Repository::<Director>::new(&pool);

    let mut input = director("Denis", "Villeneuve");
    input.middle_name = Some("X".into());
    let created = repo.create(&input).await.unwrap();

    let replacement = Director {
        id: created.id,
        first_name: "Christopher".into(),
        middle_name: None,
        last_name: "Nolan".into(),
    };
    let updated = repo.update(replacement.clone()).await.unwrap();
    assert_eq!(updated, replacement);

    let found = repo.find_one(&created.id.to_string()).await.unwrap();
    assert_eq!(found, replacement);
}

#[tokio::test]
#[ignore = "requires database"]
async fn find_all_on_empty_table_is_empty() {
    let pool = test_pool("empty_table").await;

    assert!(Repository::<Director>::new(&pool).find_all().await.unwrap().is_empty());
    assert!(Repository::<Character>::new(&pool).find_all().await.unwrap().is_empty());
}

#[tokio::test]
#[ignore = "requires database"]
async fn find_by_film_returns_exact_subset() {
    let pool = test_pool("by_film").await;
    let repo = Repository::<Character>::new(&pool);

    let paul = repo.create(&character("Paul", 1, 10)).await.unwrap();
    let jessica = repo.create(&character("Jessica", 2, 10)).await.unwrap();
    repo.create(&character("Louise", 3, 20)).await.unwrap();

    let mut in_dune = repo.find_by_film("10").await.unwrap();
    in_dune.sort_by_key(|c| c.id);
    assert_eq!(in_dune, vec![paul, jessica]);

    assert!(repo.find_by_film("30").await.unwrap().is_empty());
}

#[tokio::test]
#[ignore = "requires database"]
async fn store_constraint_violation_is_store_error() {
    let pool = test_pool("constraint").await;

    // Bypass validation to reach the table's CHECK constraint.
    sqlx::query("INSERT INTO films (title, directed_by, logline, year) VALUES ('x', 1, 'y', 2020)")
        .execute(&pool)
        .await
        .unwrap();
    let err: cinedex_server::Error = sqlx::query("UPDATE films SET year = 1800")
        .execute(&pool)
        .await
        .unwrap_err()
        .into();
    assert_eq!(err.kind(), ErrorKind::Store);
}

#[tokio::test]
#[ignore = "requires database"]
async fn concurrent_creates_get_distinct_ids() {
    let pool = test_pool("concurrent").await;

    let handles: Vec<_> = (0..20)
        .map(|i| {
            let pool = pool.clone();
            tokio::spawn(async move {
                Repository::<Actor>::new(&pool)
                    .create(&actor("Actor", &format!("Number{}", i)))
                    .await
                    .expect("concurrent create failed")
                    .id
            })
        })
        .collect();

    let mut ids = HashSet::new();
    for handle in handles {
        ids.insert(handle.await.expect("task panicked"));
    }
    assert_eq!(ids.len(), 20);
}
