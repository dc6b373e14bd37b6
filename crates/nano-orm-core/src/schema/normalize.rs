use super::{FieldDescriptor, FieldSpec};
use crate::{Error, Result};

use serde_json::Value as JsonValue;
use std::collections::HashSet;

/// Normalizes a raw field list into descriptors, in declaration order.
///
/// Fails when the list is empty, when any element is malformed, or when two
/// elements share a name (case-sensitive, regardless of how each element was
/// written).
pub fn normalize<I>(fields: I) -> Result<Vec<FieldDescriptor>>
where
    I: IntoIterator,
    I::Item: Into<FieldSpec>,
{
    let fields = fields
        .into_iter()
        .map(|spec| spec.into().into_descriptor())
        .collect::<Result<Vec<_>>>()?;

    if fields.is_empty() {
        return Err(Error::configuration("no fields specified"));
    }

    let mut seen = HashSet::with_capacity(fields.len());
    for field in &fields {
        if !seen.insert(field.name.as_str()) {
            return Err(Error::configuration(format!(
                "duplicate field name `{}`",
                field.name
            )));
        }
    }

    Ok(fields)
}

/// Normalizes a field list given as a single JSON value.
///
/// Anything other than an array (including `null`) is rejected.
pub fn normalize_json(fields: &JsonValue) -> Result<Vec<FieldDescriptor>> {
    match fields {
        JsonValue::Array(fields) => normalize(fields.iter().cloned()),
        JsonValue::Null => Err(Error::configuration("no fields specified")),
        other => Err(Error::configuration(format!(
            "field list must be an array; got `{other}`"
        ))),
    }
}
