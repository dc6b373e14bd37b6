use nano_orm_core::{
    async_trait,
    driver::{Connection, Response},
    err,
    stmt::Value,
    Result,
};
use std::collections::VecDeque;

/// A connection that answers every statement with the next canned response.
///
/// Used for database responses SQLite will not produce on its own, such as
/// an insert that reports no row id.
#[derive(Debug, Default)]
pub struct ScriptedConnection {
    responses: VecDeque<Result<Response>>,
}

impl ScriptedConnection {
    pub fn new(responses: impl IntoIterator<Item = Result<Response>>) -> Self {
        Self {
            responses: responses.into_iter().collect(),
        }
    }
}

#[async_trait]
impl Connection for ScriptedConnection {
    async fn query(&mut self, sql: &str, _params: &[Value]) -> Result<Response> {
        self.responses
            .pop_front()
            .unwrap_or_else(|| Err(err!("no scripted response left for `{sql}`")))
    }
}
