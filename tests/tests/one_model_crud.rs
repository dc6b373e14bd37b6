use nano_orm::{define_model, ModelDefinition, ModelOptions, Value};
use pretty_assertions::assert_eq;
use std::sync::Arc;
use tests::{setup, Exec, USER_TABLE};

fn user_model() -> Arc<ModelDefinition> {
    define_model("user", ["username", "email"], ModelOptions::default()).unwrap()
}

#[tokio::test]
async fn save_inserts_new_instance() {
    let (mut db, log) = setup(USER_TABLE);
    let user = user_model();

    let mut sarah = user.construct_with([("username", "Sarah")]).unwrap();
    assert_eq!(sarah.id(), 0);
    assert!(sarah.is_dirty());

    sarah.save(&mut db).await.unwrap();

    assert_eq!(sarah.id(), 1);
    assert!(!sarah.is_dirty());
    assert_eq!(sarah.get("username").unwrap(), Value::from("Sarah"));
    assert_eq!(sarah.get("email").unwrap(), Value::Null);

    assert_eq!(
        log.pop(),
        Some(Exec {
            sql: "INSERT INTO user(username,email) VALUES (?,?)".to_string(),
            params: vec![Value::from("Sarah"), Value::Null],
        })
    );
    assert!(log.is_empty());
}

#[tokio::test]
async fn save_then_load_round_trips() {
    let (mut db, _log) = setup(USER_TABLE);
    let user = user_model();

    let mut sarah = user
        .construct_with([("username", "Sarah"), ("email", "sarah@example.com")])
        .unwrap();
    sarah.save(&mut db).await.unwrap();

    let loaded = user.load(&mut db, sarah.id()).await.unwrap();

    assert_eq!(loaded.id(), sarah.id());
    assert!(!loaded.is_dirty());
    assert_eq!(loaded.to_representation(), sarah.to_representation());
}

#[tokio::test]
async fn save_twice_writes_once() {
    let (mut db, log) = setup(USER_TABLE);
    let user = user_model();

    let mut sarah = user.construct_with([("username", "Sarah")]).unwrap();
    sarah.save(&mut db).await.unwrap();
    let id = sarah.id();

    sarah.save(&mut db).await.unwrap();

    assert_eq!(log.len(), 1);
    assert_eq!(sarah.id(), id);
    assert!(!sarah.is_dirty());
}

#[tokio::test]
async fn save_updates_persisted_instance() {
    let (mut db, log) = setup(
        "CREATE TABLE user (id INTEGER PRIMARY KEY, username TEXT, email TEXT);
         INSERT INTO user (id, username, email) VALUES (7, 'admin', 'admin@example.com');",
    );
    let user = user_model();

    let mut admin = user.load(&mut db, 7).await.unwrap();
    log.clear();

    admin.set("email", "root@example.com").unwrap();
    assert!(admin.is_dirty());

    admin.save(&mut db).await.unwrap();

    assert_eq!(admin.id(), 7);
    assert!(!admin.is_dirty());
    assert_eq!(
        log.pop(),
        Some(Exec {
            sql: "UPDATE user SET username=?,email=? WHERE id=?".to_string(),
            params: vec![
                Value::from("admin"),
                Value::from("root@example.com"),
                Value::I64(7)
            ],
        })
    );

    let reloaded = user.load(&mut db, 7).await.unwrap();
    assert_eq!(reloaded.get("email").unwrap(), Value::from("root@example.com"));
}

#[tokio::test]
async fn mark_as_dirty_forces_write() {
    let (mut db, log) = setup(
        "CREATE TABLE user (id INTEGER PRIMARY KEY, username TEXT, email TEXT);
         INSERT INTO user (id, username, email) VALUES (1, 'admin', NULL);",
    );
    let user = user_model();

    let mut admin = user.load(&mut db, 1).await.unwrap();
    admin.save(&mut db).await.unwrap();
    assert_eq!(log.count_kind("UPDATE"), 0);

    admin.mark_as_dirty();
    admin.save(&mut db).await.unwrap();
    assert_eq!(log.count_kind("UPDATE"), 1);
}

#[tokio::test]
async fn create_constructs_and_saves() {
    let (mut db, log) = setup(USER_TABLE);
    let user = user_model();

    let first = user.create(&mut db, [("username", "first")]).await.unwrap();
    let second = user.create(&mut db, [("username", "second")]).await.unwrap();

    assert_eq!(first.id(), 1);
    assert_eq!(second.id(), 2);
    assert!(!second.is_dirty());
    assert_eq!(log.count_kind("INSERT"), 2);

    let loaded = user.load(&mut db, 2).await.unwrap();
    assert_eq!(loaded.get("username").unwrap(), Value::from("second"));
}

#[tokio::test]
async fn create_rejects_unknown_field_without_database_contact() {
    let (mut db, log) = setup(USER_TABLE);
    let user = user_model();

    let err = user
        .create(&mut db, [("nickname", "sar")])
        .await
        .unwrap_err();

    assert!(err.is_unknown_field());
    assert!(log.is_empty());
}

#[tokio::test]
async fn load_missing_row_is_not_found() {
    let (mut db, log) = setup(USER_TABLE);
    let user = user_model();

    let err = user.load(&mut db, 42).await.unwrap_err();

    assert!(err.is_not_found());
    assert_eq!(
        log.pop(),
        Some(Exec {
            sql: "SELECT id,username,email FROM user WHERE id=?".to_string(),
            params: vec![Value::I64(42)],
        })
    );
}

#[tokio::test]
async fn load_duplicate_rows_is_ambiguous() {
    // No primary key, so the id column is not unique
    let (mut db, _log) = setup(
        "CREATE TABLE user (id INTEGER, username TEXT, email TEXT);
         INSERT INTO user (id, username) VALUES (3, 'a'), (3, 'b');",
    );
    let user = user_model();

    let err = user.load(&mut db, 3).await.unwrap_err();
    assert!(err.is_ambiguous_result());
}

#[tokio::test]
async fn load_selects_declared_columns_only() {
    let (mut db, _log) = setup(
        "CREATE TABLE user (id INTEGER PRIMARY KEY, username TEXT, mail TEXT);
         INSERT INTO user (id, username) VALUES (1, 'a');",
    );
    let user = define_model("user", ["username"], ModelOptions::default()).unwrap();

    // The model only asks for the columns it declares, so extra table
    // columns never get in the way.
    let loaded = user.load(&mut db, 1).await.unwrap();
    assert_eq!(loaded.get("username").unwrap(), Value::from("a"));

    // A declared column the table lacks fails in the database
    let err = user_model().load(&mut db, 1).await.unwrap_err();
    assert!(err.is_driver(), "{err}");
}

#[tokio::test]
async fn to_json_after_save() {
    let (mut db, _log) = setup(USER_TABLE);
    let user = user_model();

    let sarah = user
        .create(&mut db, [("username", "Sarah"), ("email", "s@example.com")])
        .await
        .unwrap();

    assert_eq!(
        sarah.to_json().unwrap(),
        serde_json::json!({
            "id": 1,
            "username": "Sarah",
            "email": "s@example.com",
        })
    );
}
