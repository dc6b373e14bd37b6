mod response;
pub use response::Response;

use crate::{async_trait, stmt::Value, Result};

use indexmap::IndexMap;
use std::fmt::Debug;

/// A database row: column name to value, in the order the database returned
/// the columns.
pub type Row = IndexMap<String, Value>;

/// A live database handle.
///
/// This is the only contract the model layer needs from a database. SQL text
/// uses positional `?` placeholders, bound in order from `params`. Errors
/// raised by the implementation reach the caller unchanged.
#[async_trait]
pub trait Connection: Debug + Send {
    /// Execute a statement, returning its rows and, for inserts, the
    /// identifier the database assigned to the new row.
    async fn query(&mut self, sql: &str, params: &[Value]) -> Result<Response>;
}

#[async_trait]
impl<C: Connection + ?Sized> Connection for Box<C> {
    async fn query(&mut self, sql: &str, params: &[Value]) -> Result<Response> {
        (**self).query(sql, params).await
    }
}
