use nano_orm_core::schema::{FieldDescriptor, FieldType};

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::{Map, Value as JsonValue};

/// A JSON-schema-like description of a model's records.
///
/// The id field is part of the schema: it is listed first in `properties`
/// as an integer and first in `required`, since every instance carries an id
/// (0 until saved).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JsonSchema {
    /// Table name
    pub name: String,

    /// Schema hints per field, minus `name` and `required`
    pub properties: IndexMap<String, Map<String, JsonValue>>,

    /// Names of the fields not marked `required: false`
    pub required: Vec<String>,
}

impl JsonSchema {
    pub(crate) fn new(table_name: &str, id_field_name: &str, fields: &[FieldDescriptor]) -> Self {
        let mut properties = IndexMap::with_capacity(fields.len() + 1);
        let mut required = vec![id_field_name.to_string()];

        let mut id_property = Map::new();
        id_property.insert("type".into(), FieldType::Integer.as_str().into());
        properties.insert(id_field_name.to_string(), id_property);

        for field in fields {
            properties.insert(field.name.clone(), field.schema_property());

            if field.required {
                required.push(field.name.clone());
            }
        }

        Self {
            name: table_name.to_string(),
            properties,
            required,
        }
    }

    pub fn to_json(&self) -> JsonValue {
        let properties = self
            .properties
            .iter()
            .map(|(name, property)| (name.clone(), JsonValue::Object(property.clone())))
            .collect::<Map<_, _>>();

        serde_json::json!({
            "name": self.name,
            "properties": properties,
            "required": self.required,
        })
    }
}
