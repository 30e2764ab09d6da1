mod common;

use skyfeed::AppError;
use skyfeed::domain::entities::NewSavedLocation;
use skyfeed::domain::repositories::LocationRepository;
use skyfeed::infrastructure::persistence::PgLocationRepository;
use sqlx::PgPool;
use std::sync::Arc;

fn saved(user_id: i64, text: &str) -> NewSavedLocation {
    NewSavedLocation {
        user_id,
        location_text: text.to_string(),
        latitude: None,
        longitude: None,
    }
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_search_prefers_prefix_matches(pool: PgPool) {
    let repo = PgLocationRepository::new(Arc::new(pool));

    for name in ["North Boulder", "Boulder, CO", "Boulder City, NV", "Denver, CO"] {
        repo.upsert_catalogue(name, None, None).await.unwrap();
    }

    let names: Vec<String> = repo
        .search("boul", 10)
        .await
        .unwrap()
        .into_iter()
        .map(|l| l.name)
        .collect();

    assert_eq!(names, vec!["Boulder, CO", "Boulder City, NV", "North Boulder"]);
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_search_treats_wildcards_literally(pool: PgPool) {
    let repo = PgLocationRepository::new(Arc::new(pool));

    repo.upsert_catalogue("Denver, CO", None, None).await.unwrap();

    assert!(repo.search("%", 10).await.unwrap().is_empty());
    assert!(repo.search("_", 10).await.unwrap().is_empty());
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_upsert_fills_missing_coordinates_only(pool: PgPool) {
    let repo = PgLocationRepository::new(Arc::new(pool));

    repo.upsert_catalogue("Golden, CO", None, None).await.unwrap();
    repo.upsert_catalogue("golden, co", Some(39.7555), Some(-105.2211))
        .await
        .unwrap();
    repo.upsert_catalogue("Golden, CO", Some(1.0), Some(2.0))
        .await
        .unwrap();

    let found = repo.search("golden", 10).await.unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].name, "Golden, CO");
    assert_eq!(found[0].latitude, Some(39.7555));
    assert_eq!(found[0].longitude, Some(-105.2211));
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_save_is_unique_per_user(pool: PgPool) {
    let alice = common::create_test_user(&pool, "alice").await;
    let bob = common::create_test_user(&pool, "bob").await;
    let repo = PgLocationRepository::new(Arc::new(pool));

    repo.save(saved(alice, "Boulder, CO")).await.unwrap();

    let duplicate = repo.save(saved(alice, "Boulder, CO")).await;
    assert!(matches!(duplicate, Err(AppError::Conflict { .. })));

    repo.save(saved(bob, "Boulder, CO")).await.unwrap();
    assert_eq!(repo.list_saved(alice).await.unwrap().len(), 1);
    assert_eq!(repo.list_saved(bob).await.unwrap().len(), 1);
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_delete_saved_is_scoped_to_owner(pool: PgPool) {
    let alice = common::create_test_user(&pool, "alice").await;
    let bob = common::create_test_user(&pool, "bob").await;
    let repo = PgLocationRepository::new(Arc::new(pool));

    let entry = repo.save(saved(alice, "Denver, CO")).await.unwrap();

    assert!(!repo.delete_saved(bob, entry.id).await.unwrap());
    assert!(repo.delete_saved(alice, entry.id).await.unwrap());
    assert!(repo.list_saved(alice).await.unwrap().is_empty());
}
