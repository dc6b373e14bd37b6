use super::Instance;
use crate::ModelDefinition;

use nano_orm_core::{
    driver::{Connection, Response},
    stmt::Value,
    Error, Result,
};

use std::sync::Arc;

/// Issues one statement, tracing it first.
async fn query(db: &mut dyn Connection, sql: &str, params: &[Value]) -> Result<Response> {
    tracing::trace!(sql, ?params, "query");
    db.query(sql, params).await
}

impl ModelDefinition {
    /// Loads the instance with the given id.
    ///
    /// Fails with a not-found error if no row has that id, and with an
    /// ambiguous-result error if more than one does.
    pub async fn load(self: &Arc<Self>, db: &mut dyn Connection, id: i64) -> Result<Instance> {
        let response = query(db, &self.statements().load, &[Value::I64(id)]).await?;
        let mut rows = response.rows.into_iter();

        match (rows.next(), rows.len()) {
            (Some(row), 0) => self.hydrate(row),
            (None, _) => Err(Error::not_found(format!(
                "table={} {}={id}",
                self.table_name(),
                self.id_field_name()
            ))),
            (Some(_), rest) => Err(Error::ambiguous_result(format!(
                "table={} {}={id} matched {} rows",
                self.table_name(),
                self.id_field_name(),
                rest + 1
            ))),
        }
    }

    /// Loads every instance matching `predicate`.
    ///
    /// The predicate is appended verbatim after `WHERE `; only `params` are
    /// escaped, by the connection's parameter binding. Rows come back in
    /// database order, so ordering needs an explicit `ORDER BY`.
    pub async fn find(
        self: &Arc<Self>,
        db: &mut dyn Connection,
        predicate: &str,
        params: &[Value],
    ) -> Result<Vec<Instance>> {
        let sql = self.statements().find(predicate);
        let response = query(db, &sql, params).await?;
        self.hydrate_response(response)
    }

    /// Constructs an instance with the given values and saves it.
    pub async fn create<I, K, V>(
        self: &Arc<Self>,
        db: &mut dyn Connection,
        values: I,
    ) -> Result<Instance>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<Value>,
    {
        let mut instance = self.construct_with(values)?;
        instance.save(db).await?;
        Ok(instance)
    }

    /// Deletes the row with the given id, whether or not it is loaded.
    ///
    /// Like [`Instance::delete`], this does not check that a row was removed.
    pub async fn delete_by_id(&self, db: &mut dyn Connection, id: i64) -> Result<()> {
        query(db, &self.statements().delete, &[Value::I64(id)]).await?;
        Ok(())
    }
}

impl Instance {
    /// Writes the instance to the database.
    ///
    /// A clean instance is left alone without contacting the database. An
    /// unsaved instance (id 0) is inserted and takes the id the database
    /// assigns; any other instance is updated in place. Either way it is
    /// clean afterwards. Field values are never changed.
    pub async fn save(&mut self, db: &mut dyn Connection) -> Result<&mut Self> {
        if !self.dirty {
            return Ok(self);
        }

        let mut params = self.external_values();

        if self.id == 0 {
            let response = query(db, &self.model.statements().insert, &params).await?;

            let Some(id) = response.last_insert_id else {
                return Err(Error::invalid_result(format!(
                    "insert into `{}` did not report the new row id",
                    self.model.table_name()
                )));
            };

            tracing::debug!(table = self.model.table_name(), id, "inserted");
            self.id = id;
        } else {
            params.push(Value::I64(self.id));
            query(db, &self.model.statements().update, &params).await?;
        }

        self.dirty = false;
        Ok(self)
    }

    /// Deletes the instance's row.
    ///
    /// An unsaved instance is left alone without contacting the database.
    /// Otherwise the instance reverts to unsaved (id 0, dirty), so saving it
    /// again inserts a new row. The number of rows actually deleted is not
    /// checked.
    pub async fn delete(&mut self, db: &mut dyn Connection) -> Result<&mut Self> {
        if self.id == 0 {
            return Ok(self);
        }

        query(db, &self.model.statements().delete, &[Value::I64(self.id)]).await?;

        tracing::debug!(table = self.model.table_name(), id = self.id, "deleted");
        self.id = 0;
        self.dirty = true;
        Ok(self)
    }
}
