use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};
use nano_orm::{
    define_model, FieldDescriptor, FieldSpec, FieldType, ModelDefinition, ModelOptions, Value,
};
use pretty_assertions::assert_eq;
use std::sync::Arc;
use tests::setup;

const EVENTS: &str = "
    CREATE TABLE event (id INTEGER PRIMARY KEY, name TEXT, at TEXT);
    INSERT INTO event (id, name, at) VALUES (1, 'christmas', '2010-12-25 10:00:00');
";

fn event_model() -> Arc<ModelDefinition> {
    define_model(
        "event",
        [
            FieldSpec::from("name"),
            FieldDescriptor::new("at").ty(FieldType::DateTime).into(),
        ],
        ModelOptions::default(),
    )
    .unwrap()
}

#[tokio::test]
async fn stored_text_hydrates_to_datetime() {
    let (mut db, _log) = setup(EVENTS);
    let event = event_model();

    let christmas = event.load(&mut db, 1).await.unwrap();
    let at: NaiveDateTime = christmas.get_as("at").unwrap();

    assert_eq!(at.year(), 2010);
    assert_eq!(at.month0(), 11);
    assert_eq!(at.month(), 12);
    assert_eq!(at.day(), 25);
    assert_eq!(at.hour(), 10);
    assert_eq!(at.minute(), 0);
}

#[tokio::test]
async fn save_writes_canonical_text() {
    let (mut db, log) = setup(EVENTS);
    let event = event_model();

    let mut christmas = event.load(&mut db, 1).await.unwrap();
    log.clear();

    christmas.mark_as_dirty();
    christmas.save(&mut db).await.unwrap();

    let update = log.pop().unwrap();
    assert_eq!(
        update.params,
        vec![
            Value::from("christmas"),
            Value::from("2010-12-25 10:00:00.000000"),
            Value::I64(1),
        ]
    );

    let reloaded = event.load(&mut db, 1).await.unwrap();
    assert_eq!(reloaded.get("at").unwrap(), christmas.get("at").unwrap());
}

#[tokio::test]
async fn round_trip_keeps_microseconds() {
    let (mut db, _log) = setup(EVENTS);
    let event = event_model();

    let at = NaiveDate::from_ymd_opt(2024, 2, 29)
        .unwrap()
        .and_hms_micro_opt(23, 59, 58, 123_456)
        .unwrap();

    let mut leap = event
        .construct_with([("name", Value::from("leap")), ("at", at.into())])
        .unwrap();
    leap.save(&mut db).await.unwrap();

    let loaded = event.load(&mut db, leap.id()).await.unwrap();
    assert_eq!(loaded.get_as::<NaiveDateTime>("at").unwrap(), at);
}

#[tokio::test]
async fn construct_parses_text() {
    let event = event_model();

    let party = event
        .construct_with([("at", "1999-12-31T23:59:59")])
        .unwrap();

    let expected = NaiveDate::from_ymd_opt(1999, 12, 31)
        .unwrap()
        .and_hms_opt(23, 59, 59)
        .unwrap();
    assert_eq!(party.get("at").unwrap(), Value::DateTime(expected));
}

#[tokio::test]
async fn unparseable_text_is_rejected() {
    let event = event_model();

    let err = event
        .construct_with([("at", "next tuesday")])
        .unwrap_err();
    assert!(err.is_type_conversion());

    let (mut db, _log) = setup(
        "CREATE TABLE event (id INTEGER PRIMARY KEY, name TEXT, at TEXT);
         INSERT INTO event (id, name, at) VALUES (1, 'broken', 'not a date');",
    );
    let err = event.load(&mut db, 1).await.unwrap_err();
    assert!(err.is_type_conversion());
}

#[tokio::test]
async fn stored_text_with_offset_hydrates() {
    let (mut db, _log) = setup(
        "CREATE TABLE event (id INTEGER PRIMARY KEY, name TEXT, at TEXT);
         INSERT INTO event (id, name, at) VALUES
            (1, 'utc', '2010-12-25 10:00:00+00'),
            (2, 'zulu', '2010-12-25T10:00:00Z');",
    );
    let event = event_model();

    let found = event
        .find(&mut db, "id > ? ORDER BY id", &[Value::I64(0)])
        .await
        .unwrap();

    let expected = NaiveDate::from_ymd_opt(2010, 12, 25)
        .unwrap()
        .and_hms_opt(10, 0, 0)
        .unwrap();
    for event in &found {
        assert_eq!(event.get_as::<NaiveDateTime>("at").unwrap(), expected);
    }
    assert_eq!(found.len(), 2);
}

#[tokio::test]
async fn null_datetime_stays_null() {
    let (mut db, _log) = setup(EVENTS);
    let event = event_model();

    let mut undated = event.create(&mut db, [("name", "someday")]).await.unwrap();
    assert_eq!(undated.get("at").unwrap(), Value::Null);

    let loaded = event.load(&mut db, undated.id()).await.unwrap();
    assert_eq!(loaded.get("at").unwrap(), Value::Null);

    undated.delete(&mut db).await.unwrap();
}
