mod value;
pub(crate) use value::Value;

use nano_orm_core::{
    async_trait,
    driver::{Response, Row},
    bail, stmt, Error, Result,
};
use rusqlite::Connection as RusqliteConnection;
use std::{
    borrow::Cow,
    path::{Path, PathBuf},
};
use url::Url;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sqlite {
    File(PathBuf),
    InMemory,
}

impl Sqlite {
    /// Create a new SQLite driver from a connection URL, either
    /// `sqlite::memory:` or `sqlite:<path>`
    pub fn new(url: impl Into<String>) -> Result<Self> {
        let url_str = url.into();
        let url = Url::parse(&url_str).map_err(Error::driver)?;

        if url.scheme() != "sqlite" {
            bail!(
                "connection URL does not have a `sqlite` scheme; url={}",
                url_str
            );
        }

        if url.path() == ":memory:" {
            Ok(Self::InMemory)
        } else {
            Ok(Self::File(PathBuf::from(url.path())))
        }
    }

    /// Create an in-memory SQLite database
    pub fn in_memory() -> Self {
        Self::InMemory
    }

    /// Open a SQLite database at the specified file path
    pub fn open<P: AsRef<Path>>(path: P) -> Self {
        Self::File(path.as_ref().to_path_buf())
    }

    pub fn url(&self) -> Cow<'_, str> {
        match self {
            Sqlite::InMemory => Cow::Borrowed("sqlite::memory:"),
            Sqlite::File(path) => Cow::Owned(format!("sqlite:{}", path.display())),
        }
    }

    /// Opens a connection. Every in-memory connection gets its own, empty
    /// database.
    pub fn connect(&self) -> Result<Connection> {
        match self {
            Sqlite::File(path) => Connection::open(path),
            Sqlite::InMemory => Connection::in_memory(),
        }
    }
}

#[derive(Debug)]
pub struct Connection {
    connection: RusqliteConnection,
}

impl Connection {
    pub fn in_memory() -> Result<Self> {
        let connection = RusqliteConnection::open_in_memory().map_err(Error::driver)?;
        Ok(Self { connection })
    }

    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = RusqliteConnection::open(path).map_err(Error::driver)?;
        Ok(Self { connection })
    }

    /// Runs one or more `;`-separated statements without parameters, e.g. to
    /// create and seed tables.
    pub fn execute_batch(&mut self, sql: &str) -> Result<()> {
        self.connection.execute_batch(sql).map_err(Error::driver)
    }
}

#[async_trait]
impl nano_orm_core::Connection for Connection {
    async fn query(&mut self, sql: &str, params: &[stmt::Value]) -> Result<Response> {
        tracing::trace!(sql, "sqlite query");

        let mut stmt = self.connection.prepare_cached(sql).map_err(Error::driver)?;

        let params = params.iter().cloned().map(Value::from).collect::<Vec<_>>();

        if stmt.column_count() == 0 {
            stmt.execute(rusqlite::params_from_iter(params.iter()))
                .map_err(Error::driver)?;

            let last_insert_id = is_insert(sql).then(|| self.connection.last_insert_rowid());

            return Ok(Response {
                rows: vec![],
                last_insert_id,
            });
        }

        let columns = stmt
            .column_names()
            .into_iter()
            .map(String::from)
            .collect::<Vec<_>>();

        let mut rows = stmt
            .query(rusqlite::params_from_iter(params.iter()))
            .map_err(Error::driver)?;

        let mut ret = vec![];

        while let Some(row) = rows.next().map_err(Error::driver)? {
            let mut record = Row::with_capacity(columns.len());

            for (index, column) in columns.iter().enumerate() {
                record.insert(column.clone(), Value::from_sql(row, index)?.into_inner());
            }

            ret.push(record);
        }

        Ok(Response::rows(ret))
    }
}

fn is_insert(sql: &str) -> bool {
    sql.trim_start()
        .get(..6)
        .is_some_and(|keyword| keyword.eq_ignore_ascii_case("insert"))
}
