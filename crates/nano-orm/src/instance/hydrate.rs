use super::Instance;
use crate::ModelDefinition;

use nano_orm_core::{
    driver::{Response, Row},
    err, Error, Result,
};

use std::sync::Arc;

impl ModelDefinition {
    /// Builds a clean instance from a database row.
    ///
    /// The row must hold the id column and every declared column; other
    /// columns are ignored, so a model may wrap part of a wider table.
    pub fn hydrate(self: &Arc<Self>, mut row: Row) -> Result<Instance> {
        let id = row
            .swap_remove(self.id_field_name())
            .ok_or_else(|| Error::incomplete_row(self.table_name(), self.id_field_name()))?;
        let id = i64::try_from(id)?;

        let mut values = Vec::with_capacity(self.num_fields());

        for (index, field) in self.fields().enumerate() {
            let value = row
                .swap_remove(field.name.as_str())
                .ok_or_else(|| Error::incomplete_row(self.table_name(), &field.name))?;

            values.push(self.mapper(index).from_external(value)?);
        }

        Ok(Instance {
            model: self.clone(),
            id,
            values,
            dirty: false,
        })
    }

    /// Hydrates every row, in order. Any failing row fails the whole batch,
    /// with the position of the offending row added as context.
    pub fn hydrate_many(self: &Arc<Self>, rows: impl IntoIterator<Item = Row>) -> Result<Vec<Instance>> {
        rows.into_iter()
            .enumerate()
            .map(|(index, row)| {
                self.hydrate(row)
                    .map_err(|cause| cause.context(err!("row {index} of `{}`", self.table_name())))
            })
            .collect()
    }

    /// Hydrates the rows of a raw database response.
    pub fn hydrate_response(self: &Arc<Self>, response: Response) -> Result<Vec<Instance>> {
        self.hydrate_many(response.rows)
    }
}
