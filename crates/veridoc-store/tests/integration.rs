//! Integration tests for the `veridoc-store` data layer.
//!
//! These tests require a live Redis-compatible server. Run with:
//!
//! ```bash
//! docker run -d -p 6379:6379 redis:7
//! cargo test -p veridoc-store -- --ignored
//! ```
//!
//! All tests are marked `#[ignore]` so they are skipped during normal
//! `cargo test` runs. Every test uses a fresh owner id, so tests stay
//! isolated without flushing the instance.

// Integration tests use expect/unwrap extensively for clarity -- panicking
// on failure is the correct behavior in test code.
#![allow(
    clippy::expect_used,
    clippy::unwrap_used,
    clippy::items_after_statements,
    clippy::missing_panics_doc,
    clippy::too_many_lines,
    clippy::indexing_slicing
)]

use chrono::{DateTime, TimeZone, Utc};
use veridoc_store::{RecognitionStore, RedisPool, StoreError};
use veridoc_types::{
    AppId, DocumentId, DocumentType, OwnerId, Recognition, RecognitionId, UserId, day_floor,
};

/// Redis connection URL for the local Docker instance.
const REDIS_URL: &str = "redis://localhost:6379";

async fn connect() -> RedisPool {
    RedisPool::connect(REDIS_URL)
        .await
        .expect("Failed to connect to Redis -- is Docker running?")
}

fn utc(year: i32, month: u32, day: u32, hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, 0, 0)
        .single()
        .expect("valid test timestamp")
}

fn recognition(
    time: DateTime<Utc>,
    amount: i64,
    app_id: AppId,
    document_type: DocumentType,
    verified: bool,
) -> Recognition {
    Recognition {
        id: RecognitionId::new(),
        time,
        amount,
        user_id: UserId::new(),
        app_id,
        document_id: DocumentId::new(),
        document_type,
        verified,
    }
}

#[tokio::test]
#[ignore = "requires live Redis instance (docker run -p 6379:6379 redis:7)"]
async fn save_and_load_roundtrip() {
    let pool = connect().await;
    let store = RecognitionStore::new(&pool);
    let owner = OwnerId::new();

    let saved = recognition(
        utc(2020, 8, 17, 1),
        420,
        AppId::new(),
        DocumentType::Passport,
        true,
    );
    store
        .save_recognition(owner, &saved)
        .await
        .expect("Failed to save recognition");

    let loaded = store
        .load_recognition(saved.id)
        .await
        .expect("Failed to load recognition");
    assert_eq!(loaded, saved);
}

#[tokio::test]
#[ignore = "requires live Redis instance (docker run -p 6379:6379 redis:7)"]
async fn load_missing_recognition_is_not_found() {
    let pool = connect().await;
    let store = RecognitionStore::new(&pool);

    let result = store.load_recognition(RecognitionId::new()).await;
    assert!(matches!(result, Err(StoreError::NotFound(_))));
}

#[tokio::test]
#[ignore = "requires live Redis instance (docker run -p 6379:6379 redis:7)"]
async fn list_counts_every_save_in_time_order() {
    let pool = connect().await;
    let store = RecognitionStore::new(&pool);
    let owner = OwnerId::new();
    let app = AppId::new();

    // Save out of chronological order.
    let hours = [9, 3, 17, 11, 5];
    for hour in hours {
        let event = recognition(
            utc(2020, 8, 17, hour),
            100,
            app,
            DocumentType::IdCard,
            false,
        );
        store
            .save_recognition(owner, &event)
            .await
            .expect("Failed to save recognition");
    }

    let listed = store
        .list_recognitions(owner)
        .await
        .expect("Failed to list recognitions");
    assert_eq!(listed.len(), hours.len());
    for pair in listed.windows(2) {
        assert!(pair[0].time <= pair[1].time, "event index must be ascending");
    }
}

#[tokio::test]
#[ignore = "requires live Redis instance (docker run -p 6379:6379 redis:7)"]
async fn same_day_saves_share_one_aggregate() {
    let pool = connect().await;
    let store = RecognitionStore::new(&pool);
    let owner = OwnerId::new();
    let app = AppId::new();

    let first = recognition(utc(2020, 8, 18, 1), 200, app, DocumentType::IdCard, true);
    let second = recognition(
        utc(2020, 8, 18, 23),
        50,
        app,
        DocumentType::DriverLicense,
        false,
    );
    store
        .save_recognition(owner, &first)
        .await
        .expect("Failed to save first");
    store
        .save_recognition(owner, &second)
        .await
        .expect("Failed to save second");

    // Day-index insertion is idempotent: one bucket, not two.
    let days = store
        .list_recognition_days(owner)
        .await
        .expect("Failed to list days");
    assert_eq!(days.len(), 1);

    let day = days[0];
    assert_eq!(day.day, day_floor(first.time));
    assert_eq!(day.amount, 250);
    assert_eq!(day.success, 1);
    assert_eq!(day.failed, 1);
    assert_eq!(day.success + day.failed, 2);
}

#[tokio::test]
#[ignore = "requires live Redis instance (docker run -p 6379:6379 redis:7)"]
async fn days_list_ascending_regardless_of_save_order() {
    let pool = connect().await;
    let store = RecognitionStore::new(&pool);
    let owner = OwnerId::new();
    let app = AppId::new();

    for day in [19, 17, 18] {
        let event = recognition(
            utc(2020, 8, day, 1),
            100,
            app,
            DocumentType::ProofOfAddress,
            true,
        );
        store
            .save_recognition(owner, &event)
            .await
            .expect("Failed to save recognition");
    }

    let days = store
        .list_recognition_days(owner)
        .await
        .expect("Failed to list days");
    assert_eq!(days.len(), 3);
    assert_eq!(
        days.iter().map(|d| d.day).collect::<Vec<_>>(),
        vec![
            day_floor(utc(2020, 8, 17, 0)),
            day_floor(utc(2020, 8, 18, 0)),
            day_floor(utc(2020, 8, 19, 0)),
        ]
    );
}

#[tokio::test]
#[ignore = "requires live Redis instance (docker run -p 6379:6379 redis:7)"]
async fn two_day_aggregate_scenario() {
    let pool = connect().await;
    let store = RecognitionStore::new(&pool);
    let owner = OwnerId::new();
    let app = AppId::new();

    let events = [
        recognition(utc(2020, 8, 17, 1), 100, app, DocumentType::Passport, false),
        recognition(utc(2020, 8, 18, 1), 200, app, DocumentType::IdCard, true),
        recognition(
            utc(2020, 8, 18, 1),
            50,
            app,
            DocumentType::DriverLicense,
            false,
        ),
    ];
    for event in &events {
        store
            .save_recognition(owner, event)
            .await
            .expect("Failed to save recognition");
    }

    let days = store
        .list_recognition_days(owner)
        .await
        .expect("Failed to list days");
    assert_eq!(days.len(), 2);

    assert_eq!(days[0].day, day_floor(utc(2020, 8, 17, 0)));
    assert_eq!(days[0].amount, 100);
    assert_eq!(days[0].success, 0);
    assert_eq!(days[0].failed, 1);

    assert_eq!(days[1].day, day_floor(utc(2020, 8, 18, 0)));
    assert_eq!(days[1].amount, 250);
    assert_eq!(days[1].success, 1);
    assert_eq!(days[1].failed, 1);

    // Loading one bucket directly matches the listed aggregate.
    let loaded = store
        .load_recognition_day(owner, utc(2020, 8, 18, 13))
        .await
        .expect("Failed to load day");
    assert_eq!(loaded, days[1]);
}

#[tokio::test]
#[ignore = "requires live Redis instance (docker run -p 6379:6379 redis:7)"]
async fn empty_day_bucket_is_not_found() {
    let pool = connect().await;
    let store = RecognitionStore::new(&pool);
    let owner = OwnerId::new();

    let event = recognition(
        utc(2020, 8, 17, 1),
        100,
        AppId::new(),
        DocumentType::Passport,
        true,
    );
    store
        .save_recognition(owner, &event)
        .await
        .expect("Failed to save recognition");

    // A neighboring day with no events has no aggregate.
    let result = store.load_recognition_day(owner, utc(2020, 8, 20, 1)).await;
    assert!(matches!(result, Err(StoreError::NotFound(_))));
}

#[tokio::test]
#[ignore = "requires live Redis instance (docker run -p 6379:6379 redis:7)"]
async fn owners_do_not_share_indexes() {
    let pool = connect().await;
    let store = RecognitionStore::new(&pool);
    let owner = OwnerId::new();
    let other = OwnerId::new();

    let event = recognition(
        utc(2020, 8, 17, 1),
        100,
        AppId::new(),
        DocumentType::IdCard,
        true,
    );
    store
        .save_recognition(owner, &event)
        .await
        .expect("Failed to save recognition");

    let listed = store
        .list_recognitions(other)
        .await
        .expect("Failed to list recognitions");
    assert!(listed.is_empty());

    let days = store
        .list_recognition_days(other)
        .await
        .expect("Failed to list days");
    assert!(days.is_empty());
}
