use nano_orm_core::{
    schema::FieldDescriptor,
    stmt::{self, Value},
    Error, Result,
};

/// Converts a field between its in-memory and database representations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mapper {
    /// Values pass through unchanged in both directions
    Identity,

    /// Database text `YYYY-MM-DD HH:MM:SS[.ffffff]` to and from a structured
    /// datetime
    DateTime,
}

impl Mapper {
    pub fn for_field(field: &FieldDescriptor) -> Mapper {
        match field.ty {
            Some(ty) if ty.is_datetime() => Mapper::DateTime,
            _ => Mapper::Identity,
        }
    }

    /// Converts a value read from the database (or supplied by a caller) to
    /// its in-memory form.
    pub fn from_external(&self, value: Value) -> Result<Value> {
        match (self, value) {
            (Mapper::Identity, value) => Ok(value),
            (Mapper::DateTime, Value::String(text)) => match stmt::parse_datetime(&text) {
                Some(datetime) => Ok(Value::DateTime(datetime)),
                None => Err(Error::type_conversion(Value::String(text), "NaiveDateTime")),
            },
            (Mapper::DateTime, value @ (Value::DateTime(_) | Value::Null)) => Ok(value),
            (Mapper::DateTime, value) => Err(Error::type_conversion(value, "NaiveDateTime")),
        }
    }

    /// Converts an in-memory value to the form bound as a statement parameter.
    pub fn to_external(&self, value: &Value) -> Value {
        match (self, value) {
            (Mapper::DateTime, Value::DateTime(datetime)) => {
                Value::String(stmt::format_datetime(datetime))
            }
            (_, value) => value.clone(),
        }
    }
}
