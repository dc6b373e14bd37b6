use crate::{ExecLog, LoggingConnection};
use nano_orm::sqlite::Sqlite;

/// The `user` table most tests run against.
pub const USER_TABLE: &str = "
    CREATE TABLE user (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        username TEXT,
        email TEXT
    );
";

/// Opens a fresh in-memory SQLite database, runs `ddl` against it, and wraps
/// it in a logging connection. The DDL itself is not logged.
pub fn setup(ddl: &str) -> (LoggingConnection, ExecLog) {
    let mut connection = Sqlite::in_memory()
        .connect()
        .expect("failed to open in-memory database");

    connection
        .execute_batch(ddl)
        .expect("failed to create tables");

    let db = LoggingConnection::new(connection);
    let log = db.log();
    (db, log)
}
