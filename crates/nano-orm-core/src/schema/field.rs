use super::FieldType;
use crate::{Error, Result};

use serde_json::{Map, Value as JsonValue};

/// Keys of a raw descriptor object that are interpreted rather than passed
/// through as schema hints.
const RESERVED_KEYS: [&str; 4] = ["name", "required", "type", "format"];

/// A normalized field descriptor.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDescriptor {
    /// Column name. Unique within a model.
    pub name: String,

    /// Whether the field must be non-null. Defaults to `true`.
    pub required: bool,

    /// Optional storage type. `datetime` fields are mapped to structured
    /// values on hydration.
    pub ty: Option<FieldType>,

    /// Optional JSON-schema `format` hint.
    pub format: Option<String>,

    /// Any other JSON-schema keywords, opaque to the model layer.
    pub hints: Map<String, JsonValue>,

    /// Order in which `type`, `format` and hint keys were given
    schema_keys: Vec<String>,
}

/// One element of a raw field list.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldSpec {
    /// A bare field name
    Name(String),

    /// An already typed descriptor
    Descriptor(FieldDescriptor),

    /// A raw JSON element: either a name string or a descriptor object
    Json(JsonValue),
}

impl FieldDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            required: true,
            ty: None,
            format: None,
            hints: Map::new(),
            schema_keys: vec![],
        }
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn ty(mut self, ty: FieldType) -> Self {
        self.ty = Some(ty);
        self.push_schema_key("type");
        self
    }

    pub fn format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self.push_schema_key("format");
        self
    }

    pub fn hint(mut self, key: impl Into<String>, value: impl Into<JsonValue>) -> Self {
        let key = key.into();
        self.push_schema_key(&key);
        self.hints.insert(key, value.into());
        self
    }

    /// The JSON-schema property for this field: every hint except `name` and
    /// `required`, in the order the descriptor gave them.
    pub fn schema_property(&self) -> Map<String, JsonValue> {
        let mut property = Map::new();

        for key in &self.schema_keys {
            if let Some(value) = self.schema_value(key) {
                property.insert(key.clone(), value);
            }
        }

        // Values assigned through the public fields come after the ordered ones
        for key in ["type", "format"].into_iter().chain(self.hints.keys().map(String::as_str)) {
            if !property.contains_key(key) {
                if let Some(value) = self.schema_value(key) {
                    property.insert(key.to_string(), value);
                }
            }
        }

        property
    }

    fn schema_value(&self, key: &str) -> Option<JsonValue> {
        match key {
            "type" => self.ty.map(|ty| ty.as_str().into()),
            "format" => self.format.clone().map(JsonValue::from),
            _ => self.hints.get(key).cloned(),
        }
    }

    fn push_schema_key(&mut self, key: &str) {
        if !self.schema_keys.iter().any(|existing| existing == key) {
            self.schema_keys.push(key.to_string());
        }
    }

    /// Parses a raw descriptor object.
    pub fn from_json(src: &JsonValue) -> Result<Self> {
        let JsonValue::Object(object) = src else {
            return Err(Error::configuration(format!(
                "field descriptor must be a string or an object; got `{src}`"
            )));
        };

        let name = match object.get("name") {
            Some(JsonValue::String(name)) if !name.is_empty() => name.clone(),
            _ => {
                return Err(Error::configuration(
                    "field descriptor object must have a non-empty string `name`",
                ))
            }
        };

        let required = match object.get("required") {
            None | Some(JsonValue::Null) => true,
            Some(JsonValue::Bool(required)) => *required,
            Some(other) => {
                return Err(Error::configuration(format!(
                    "field `{name}` has a non-boolean `required` value `{other}`"
                )))
            }
        };

        let ty = match object.get("type") {
            None | Some(JsonValue::Null) => None,
            Some(JsonValue::String(ty)) => Some(FieldType::from_name(ty).ok_or_else(|| {
                Error::configuration(format!("field `{name}` has unrecognized type `{ty}`"))
            })?),
            Some(other) => {
                return Err(Error::configuration(format!(
                    "field `{name}` has unrecognized type `{other}`"
                )))
            }
        };

        let format = match object.get("format") {
            None | Some(JsonValue::Null) => None,
            Some(JsonValue::String(format)) => Some(format.clone()),
            Some(other) => {
                return Err(Error::configuration(format!(
                    "field `{name}` has a non-string `format` value `{other}`"
                )))
            }
        };

        let hints = object
            .iter()
            .filter(|(key, _)| !RESERVED_KEYS.contains(&key.as_str()))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();

        let schema_keys = object
            .keys()
            .filter(|key| !matches!(key.as_str(), "name" | "required"))
            .cloned()
            .collect();

        Ok(Self {
            name,
            required,
            ty,
            format,
            hints,
            schema_keys,
        })
    }

    /// Checks a typed descriptor for the same problems `from_json` rejects.
    pub(crate) fn validate(&self) -> Result<()> {
        if self.name.is_empty() {
            return Err(Error::configuration(
                "field descriptor must have a non-empty name",
            ));
        }

        if let Some(key) = self
            .hints
            .keys()
            .find(|key| RESERVED_KEYS.contains(&key.as_str()))
        {
            return Err(Error::configuration(format!(
                "field `{}` uses reserved key `{key}` as a schema hint",
                self.name
            )));
        }

        Ok(())
    }
}

impl FieldSpec {
    pub fn into_descriptor(self) -> Result<FieldDescriptor> {
        match self {
            Self::Name(name) => {
                let descriptor = FieldDescriptor::new(name);
                descriptor.validate()?;
                Ok(descriptor)
            }
            Self::Descriptor(descriptor) => {
                descriptor.validate()?;
                Ok(descriptor)
            }
            Self::Json(JsonValue::String(name)) => Self::Name(name).into_descriptor(),
            Self::Json(src) => FieldDescriptor::from_json(&src),
        }
    }
}

impl From<&str> for FieldSpec {
    fn from(src: &str) -> Self {
        Self::Name(src.to_string())
    }
}

impl From<String> for FieldSpec {
    fn from(src: String) -> Self {
        Self::Name(src)
    }
}

impl From<FieldDescriptor> for FieldSpec {
    fn from(src: FieldDescriptor) -> Self {
        Self::Descriptor(src)
    }
}

impl From<JsonValue> for FieldSpec {
    fn from(src: JsonValue) -> Self {
        Self::Json(src)
    }
}
