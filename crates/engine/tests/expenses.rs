use chrono::NaiveDate;
use sea_orm::{ConnectionTrait, Statement};

use engine::{
    Category, Engine, EngineError, MEMORY_URL, export, sqlite_url,
    views::{self, Month},
};
use uuid::Uuid;

async fn engine_with_db() -> Engine {
    let engine = Engine::open(MEMORY_URL).await.unwrap();
    engine.ensure_schema().await.unwrap();
    engine
}

fn test_db_path() -> std::path::PathBuf {
    let root = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../target/test_dbs");
    std::fs::create_dir_all(&root).unwrap();
    root.join(format!("expenses_{}.db", Uuid::new_v4()))
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[tokio::test]
async fn ensure_schema_is_idempotent() {
    let engine = engine_with_db().await;
    engine.ensure_schema().await.unwrap();
    engine.ensure_schema().await.unwrap();
    assert!(engine.fetch_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn in_memory_store_keeps_its_only_connection() {
    let engine = engine_with_db().await;
    let pool = engine.database().get_sqlite_connection_pool();
    let options = pool.options();
    assert_eq!(options.get_max_connections(), 1);
    assert_eq!(options.get_min_connections(), 1);
    // no reaping: replacing the connection would drop the in-memory database
    assert_eq!(options.get_idle_timeout(), None);
    assert_eq!(options.get_max_lifetime(), None);

    engine
        .insert(date(2024, 1, 5), Category::Food, "Rice", 1, 3.0)
        .await
        .unwrap();
    tokio::time::sleep(std::time::Duration::from_millis(200)).await;
    assert_eq!(pool.size(), 1);
    assert_eq!(engine.fetch_all().await.unwrap().len(), 1);
}

#[tokio::test]
async fn insert_assigns_fresh_ids_and_computes_total() {
    let engine = engine_with_db().await;

    let first = engine
        .insert(date(2024, 1, 5), Category::Food, "Rice", 2, 50.0)
        .await
        .unwrap();
    let second = engine
        .insert(date(2024, 1, 6), Category::Bills, "  Power  ", 1, 0.0)
        .await
        .unwrap();
    assert!(second > first);

    let rows = engine.fetch_all().await.unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].id, first);
    assert_eq!(rows[0].date, "2024-01-05");
    assert_eq!(rows[0].category, "Food");
    assert_eq!(rows[0].total, 100.0);
    assert_eq!(rows[1].item, "Power");
    assert_eq!(rows[1].total, 0.0);
    assert_eq!(rows[1].category_kind(), Some(Category::Bills));
}

#[tokio::test]
async fn insert_rejects_invalid_input_without_writing() {
    let engine = engine_with_db().await;

    let err = engine
        .insert(date(2024, 1, 5), Category::Food, "   ", 1, 1.0)
        .await
        .unwrap_err();
    assert_eq!(
        err,
        EngineError::Validation("item must not be empty".to_string())
    );
    assert!(
        engine
            .insert(date(2024, 1, 5), Category::Food, "Rice", 0, 1.0)
            .await
            .unwrap_err()
            .is_validation()
    );
    assert!(
        engine
            .insert(date(2024, 1, 5), Category::Food, "Rice", 1, -1.0)
            .await
            .unwrap_err()
            .is_validation()
    );

    assert!(engine.fetch_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn delete_removes_only_the_given_id() {
    let engine = engine_with_db().await;
    let keep = engine
        .insert(date(2024, 1, 5), Category::Food, "Rice", 2, 50.0)
        .await
        .unwrap();
    let gone = engine
        .insert(date(2024, 1, 6), Category::Shopping, "Shoes", 1, 70.0)
        .await
        .unwrap();

    assert!(engine.delete(gone).await.unwrap());
    let rows = engine.fetch_all().await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].id, keep);
    assert!(rows.iter().all(|row| row.id != gone));
}

#[tokio::test]
async fn delete_of_missing_id_is_a_noop() {
    let engine = engine_with_db().await;
    engine
        .insert(date(2024, 1, 5), Category::Food, "Rice", 2, 50.0)
        .await
        .unwrap();
    let before = engine.fetch_all().await.unwrap();

    assert!(!engine.delete(9_999).await.unwrap());
    assert_eq!(engine.fetch_all().await.unwrap(), before);

    assert!(engine.delete(0).await.unwrap_err().is_validation());
    assert!(engine.delete(-3).await.unwrap_err().is_validation());
}

#[tokio::test]
async fn ids_are_not_reused_after_delete() {
    let engine = engine_with_db().await;
    let first = engine
        .insert(date(2024, 1, 5), Category::Food, "Rice", 1, 1.0)
        .await
        .unwrap();
    engine.delete(first).await.unwrap();
    let second = engine
        .insert(date(2024, 1, 5), Category::Food, "Rice", 1, 1.0)
        .await
        .unwrap();
    assert!(second > first);
}

#[tokio::test]
async fn rows_written_by_other_tools_are_read_verbatim() {
    let engine = engine_with_db().await;
    let db = engine.database();
    db.execute(Statement::from_sql_and_values(
        db.get_database_backend(),
        "INSERT INTO expenses (Date, Category, Item, Quantity, Amount, Total) VALUES (?, ?, ?, ?, ?, ?)",
        vec![
            "someday".into(),
            "Rent".into(),
            "Flat".into(),
            1i64.into(),
            500.0f64.into(),
            500.0f64.into(),
        ],
    ))
    .await
    .unwrap();
    engine
        .insert(date(2024, 3, 1), Category::Food, "Bread", 1, 2.5)
        .await
        .unwrap();

    let rows = engine.fetch_all().await.unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].category, "Rent");
    assert_eq!(rows[0].category_kind(), None);

    let by_month = views::totals_by_month(&rows);
    assert_eq!(by_month.len(), 1);
    assert_eq!(by_month[&Month::new(2024, 3)], 2.5);
    assert_eq!(views::totals_by_category(&rows)["Rent"], 500.0);
}

#[tokio::test]
async fn data_survives_reopening_the_file() {
    let path = test_db_path();
    let url = sqlite_url(&path.display().to_string());

    let engine = Engine::open(&url).await.unwrap();
    engine.ensure_schema().await.unwrap();
    let id = engine
        .insert(date(2024, 1, 5), Category::Entertainment, "Cinema", 2, 9.5)
        .await
        .unwrap();
    engine.close().await.unwrap();

    let reopened = Engine::open(&url).await.unwrap();
    reopened.ensure_schema().await.unwrap();
    let rows = reopened.fetch_all().await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].id, id);
    assert_eq!(rows[0].total, 19.0);
    reopened.close().await.unwrap();

    let _ = std::fs::remove_file(&path);
}

#[tokio::test]
async fn unopenable_store_is_storage_unavailable() {
    let path = std::env::temp_dir()
        .join(format!("missing_{}", Uuid::new_v4()))
        .join("expenses.db");
    let err = Engine::open(&sqlite_url(&path.display().to_string()))
        .await
        .unwrap_err();
    assert!(matches!(err, EngineError::StorageUnavailable(_)));
}

#[tokio::test]
async fn csv_export_matches_fetch_order() {
    let engine = engine_with_db().await;
    engine
        .insert(date(2024, 2, 1), Category::Transport, "Train", 2, 12.4)
        .await
        .unwrap();
    engine
        .insert(date(2024, 1, 1), Category::Others, "Gift, wrapped", 1, 30.0)
        .await
        .unwrap();

    let rows = engine.fetch_all().await.unwrap();
    let bytes = export::to_csv_bytes(&rows).unwrap();
    let parsed = export::read_csv(bytes.as_slice()).unwrap();
    assert_eq!(parsed, rows);
}

#[tokio::test]
async fn food_and_transport_scenario() {
    let engine = engine_with_db().await;

    let food = engine
        .insert(date(2024, 1, 5), Category::Food, "Rice", 2, 50.0)
        .await
        .unwrap();
    let rows = engine.fetch_all().await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].total, 100.0);

    engine
        .insert(date(2024, 2, 10), Category::Transport, "Bus", 1, 20.0)
        .await
        .unwrap();
    let rows = engine.fetch_all().await.unwrap();

    let by_category = views::totals_by_category(&rows);
    assert_eq!(by_category.len(), 2);
    assert_eq!(by_category["Food"], 100.0);
    assert_eq!(by_category["Transport"], 20.0);

    let by_month: Vec<(String, f64)> = views::totals_by_month(&rows)
        .into_iter()
        .map(|(month, total)| (month.to_string(), total))
        .collect();
    assert_eq!(
        by_month,
        vec![("2024-01".to_string(), 100.0), ("2024-02".to_string(), 20.0)]
    );

    assert!(views::exceeds_budget(views::grand_total(&rows), 100.0));

    engine.delete(food).await.unwrap();
    let rows = engine.fetch_all().await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].category, "Transport");
    assert_eq!(rows[0].item, "Bus");
}
