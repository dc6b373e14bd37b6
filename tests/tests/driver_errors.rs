use nano_orm::{define_model, Error, ModelOptions, Response, Row, Value};
use tests::{setup, LoggingConnection, ScriptedConnection};

#[tokio::test]
async fn insert_into_missing_table_propagates() {
    let (mut db, log) = setup("");
    let user = define_model("user", ["username"], ModelOptions::default()).unwrap();

    let mut sarah = user.construct_with([("username", "Sarah")]).unwrap();
    let err = sarah.save(&mut db).await.unwrap_err();

    assert!(err.is_driver());
    assert_eq!(log.len(), 1);

    // A failed save leaves the instance unsaved
    assert_eq!(sarah.id(), 0);
    assert!(sarah.is_dirty());
}

#[tokio::test]
async fn insert_without_row_id_is_invalid_result() {
    let mut db = ScriptedConnection::new([Ok(Response::empty())]);
    let user = define_model("user", ["username"], ModelOptions::default()).unwrap();

    let mut sarah = user.construct_with([("username", "Sarah")]).unwrap();
    let err = sarah.save(&mut db).await.unwrap_err();

    assert!(err.is_invalid_result());
    assert_eq!(sarah.id(), 0);
}

#[tokio::test]
async fn driver_error_passes_through_unchanged() {
    let mut db = LoggingConnection::new(ScriptedConnection::new([Err(Error::driver(
        std::io::Error::other("connection reset"),
    ))]));
    let user = define_model("user", ["username"], ModelOptions::default()).unwrap();

    let err = user.load(&mut db, 1).await.unwrap_err();

    assert!(err.is_driver());
    assert_eq!(err.to_string(), "connection reset");
    assert_eq!(db.log().len(), 1);
}

#[tokio::test]
async fn non_integer_id_is_type_conversion() {
    let row: Row = [
        ("id".to_string(), Value::from("seven")),
        ("username".to_string(), Value::from("x")),
    ]
    .into_iter()
    .collect();
    let mut db = ScriptedConnection::new([Ok(Response::rows([row]))]);
    let user = define_model("user", ["username"], ModelOptions::default()).unwrap();

    let err = user.load(&mut db, 7).await.unwrap_err();
    assert!(err.is_type_conversion());
}

#[tokio::test]
async fn scripted_row_missing_column_is_incomplete() {
    let row: Row = [("id".to_string(), Value::I64(1))].into_iter().collect();
    let mut db = ScriptedConnection::new([Ok(Response::rows([row]))]);
    let user = define_model("user", ["username"], ModelOptions::default()).unwrap();

    let err = user.load(&mut db, 1).await.unwrap_err();
    assert!(err.is_incomplete_row());
    assert_eq!(
        err.to_string(),
        "cannot hydrate `user`: row is missing column `username`"
    );
}

#[tokio::test]
async fn find_reports_which_row_failed() {
    let complete: Row = [
        ("id".to_string(), Value::I64(1)),
        ("username".to_string(), Value::from("a")),
    ]
    .into_iter()
    .collect();
    let partial: Row = [("id".to_string(), Value::I64(2))].into_iter().collect();

    let mut db = ScriptedConnection::new([Ok(Response::rows([complete, partial]))]);
    let user = define_model("user", ["username"], ModelOptions::default()).unwrap();

    let err = user
        .find(&mut db, "id > ?", &[Value::I64(0)])
        .await
        .unwrap_err();

    assert!(err.is_incomplete_row());
    assert_eq!(
        err.to_string(),
        "row 1 of `user`: cannot hydrate `user`: row is missing column `username`"
    );
}
