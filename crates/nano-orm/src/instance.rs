mod hydrate;
mod lifecycle;

use crate::ModelDefinition;

use nano_orm_core::{stmt::Value, Error, Result};

use indexmap::IndexMap;
use serde::{ser::SerializeMap, Serialize, Serializer};
use std::sync::Arc;

/// One in-memory record of a model.
///
/// Holds the id (0 until the record is first saved), one value per declared
/// field, and a dirty flag that is set whenever the record may differ from
/// the database.
#[derive(Debug, Clone)]
pub struct Instance {
    model: Arc<ModelDefinition>,
    id: i64,

    /// One slot per declared field, in declaration order
    values: Vec<Value>,

    dirty: bool,
}

impl ModelDefinition {
    /// A new, unsaved instance with every field null.
    ///
    /// Never touches the database.
    pub fn construct(self: &Arc<Self>) -> Instance {
        Instance {
            model: self.clone(),
            id: 0,
            values: vec![Value::Null; self.num_fields()],
            dirty: true,
        }
    }

    /// A new, unsaved instance with the given field values; every other
    /// field is null.
    ///
    /// Fails on undeclared field names and on the id field. Text given for a
    /// datetime field is parsed as if read from the database.
    pub fn construct_with<I, K, V>(self: &Arc<Self>, values: I) -> Result<Instance>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<Value>,
    {
        let mut instance = self.construct();
        for (name, value) in values {
            instance.set(name.as_ref(), value)?;
        }
        Ok(instance)
    }
}

impl Instance {
    /// The database id, or 0 if the instance has never been saved.
    pub fn id(&self) -> i64 {
        self.id
    }

    /// Whether the instance may differ from the database, or was never saved.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Forces the next [`save`](Self::save) to write.
    ///
    /// Rarely needed: every field assignment marks the instance dirty.
    pub fn mark_as_dirty(&mut self) {
        self.dirty = true;
    }

    /// The definition this instance was built from.
    pub fn model(&self) -> &Arc<ModelDefinition> {
        &self.model
    }

    /// Reads a field. The id field reads as an integer.
    pub fn get(&self, name: &str) -> Result<Value> {
        if name == self.model.id_field_name() {
            return Ok(Value::I64(self.id));
        }

        let index = self.index_of(name)?;
        Ok(self.values[index].clone())
    }

    /// Reads a field, converted to `T`.
    pub fn get_as<T>(&self, name: &str) -> Result<T>
    where
        T: TryFrom<Value, Error = Error>,
    {
        T::try_from(self.get(name)?)
    }

    /// Assigns a field and marks the instance dirty.
    ///
    /// The id field cannot be assigned; it only changes through
    /// [`save`](Self::save) and [`delete`](Self::delete).
    pub fn set(&mut self, name: &str, value: impl Into<Value>) -> Result<&mut Self> {
        if name == self.model.id_field_name() {
            return Err(Error::immutable_field(self.model.table_name(), name));
        }

        let index = self.index_of(name)?;
        self.values[index] = self.model.mapper(index).from_external(value.into())?;
        self.dirty = true;
        Ok(self)
    }

    /// The id and every field value, keyed by column name with the id first.
    pub fn to_representation(&self) -> IndexMap<String, Value> {
        let mut representation = IndexMap::with_capacity(self.values.len() + 1);
        representation.insert(self.model.id_field_name().to_string(), Value::I64(self.id));

        for (name, value) in self.model.field_names().into_iter().zip(&self.values) {
            representation.insert(name.to_string(), value.clone());
        }

        representation
    }

    pub fn to_json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }

    fn index_of(&self, name: &str) -> Result<usize> {
        self.model
            .field_index(name)
            .ok_or_else(|| Error::unknown_field(self.model.table_name(), name))
    }

    /// Field values as bound to insert/update statements, in declaration
    /// order.
    fn external_values(&self) -> Vec<Value> {
        self.values
            .iter()
            .enumerate()
            .map(|(index, value)| self.model.mapper(index).to_external(value))
            .collect()
    }
}

impl Serialize for Instance {
    fn serialize<S: Serializer>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.values.len() + 1))?;
        map.serialize_entry(self.model.id_field_name(), &self.id)?;

        for (name, value) in self.model.field_names().into_iter().zip(&self.values) {
            map.serialize_entry(name, value)?;
        }

        map.end()
    }
}
