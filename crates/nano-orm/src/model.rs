mod json_schema;
pub use json_schema::JsonSchema;

mod mapper;
pub use mapper::Mapper;

mod options;
pub use options::ModelOptions;

use nano_orm_core::{
    schema::{self, FieldDescriptor, FieldSpec},
    Error, Result,
};
use nano_orm_sql::{Statements, TableRef};

use indexmap::IndexMap;
use std::sync::Arc;

/// Everything known about a table, fixed at definition time.
///
/// Shared by every [`Instance`](crate::Instance) of the model through an
/// `Arc`; nothing in it changes after [`define_model`] returns.
#[derive(Debug)]
pub struct ModelDefinition {
    table_name: String,
    id_field_name: String,

    /// Declared fields, in declaration order. The index of a field is its
    /// slot in every instance.
    fields: IndexMap<String, FieldDescriptor>,

    /// One mapper per declared field, parallel to `fields`
    mappers: Vec<Mapper>,

    statements: Statements,
    schema: JsonSchema,
}

/// Defines a model over `table_name`.
///
/// `fields` lists the data columns in table order; each element is a bare
/// name, a [`FieldDescriptor`], or a raw JSON descriptor. The id column is
/// implicit and named by [`ModelOptions::id_field`] (`"id"` by default).
pub fn define_model<I>(
    table_name: impl Into<String>,
    fields: I,
    options: ModelOptions,
) -> Result<Arc<ModelDefinition>>
where
    I: IntoIterator,
    I::Item: Into<FieldSpec>,
{
    let fields = schema::normalize(fields)?;
    ModelDefinition::new(table_name.into(), fields, options).map(Arc::new)
}

/// Defines a model from a field list given as one JSON value.
pub fn define_model_json(
    table_name: impl Into<String>,
    fields: &serde_json::Value,
    options: ModelOptions,
) -> Result<Arc<ModelDefinition>> {
    let fields = schema::normalize_json(fields)?;
    ModelDefinition::new(table_name.into(), fields, options).map(Arc::new)
}

impl ModelDefinition {
    fn new(
        table_name: String,
        fields: Vec<FieldDescriptor>,
        options: ModelOptions,
    ) -> Result<ModelDefinition> {
        if table_name.is_empty() {
            return Err(Error::configuration("table name must not be empty"));
        }

        let id_field_name = options.id_field.unwrap_or_else(|| "id".to_string());

        if id_field_name.is_empty() {
            return Err(Error::configuration(format!(
                "id field name for table `{table_name}` must not be empty"
            )));
        }

        if fields.iter().any(|field| field.name == id_field_name) {
            return Err(Error::configuration(format!(
                "field `{id_field_name}` in model for table `{table_name}` clashes with the id field"
            )));
        }

        let column_names: Vec<&str> = fields.iter().map(|field| field.name.as_str()).collect();
        let statements = Statements::new(TableRef {
            name: &table_name,
            id: &id_field_name,
            columns: &column_names,
        });

        let schema = JsonSchema::new(&table_name, &id_field_name, &fields);
        let mappers = fields.iter().map(Mapper::for_field).collect();
        let fields = fields
            .into_iter()
            .map(|field| (field.name.clone(), field))
            .collect();

        tracing::debug!(
            table = %table_name,
            id = %id_field_name,
            load = %statements.load,
            insert = %statements.insert,
            update = %statements.update,
            "defined model"
        );

        Ok(ModelDefinition {
            table_name,
            id_field_name,
            fields,
            mappers,
            statements,
            schema,
        })
    }

    /// Name of the wrapped table.
    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    /// Name of the id column. Useful when writing predicates for
    /// [`find`](Self::find) by hand.
    pub fn id_field_name(&self) -> &str {
        &self.id_field_name
    }

    /// Names of the declared fields, in declaration order. The id field is
    /// not included.
    pub fn field_names(&self) -> Vec<&str> {
        self.fields.keys().map(String::as_str).collect()
    }

    pub fn fields(&self) -> impl ExactSizeIterator<Item = &FieldDescriptor> {
        self.fields.values()
    }

    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.get(name)
    }

    pub fn statements(&self) -> &Statements {
        &self.statements
    }

    pub fn schema(&self) -> &JsonSchema {
        &self.schema
    }

    /// Slot of a declared field.
    pub(crate) fn field_index(&self, name: &str) -> Option<usize> {
        self.fields.get_index_of(name)
    }

    pub(crate) fn mapper(&self, index: usize) -> Mapper {
        self.mappers[index]
    }

    pub(crate) fn num_fields(&self) -> usize {
        self.fields.len()
    }
}
