#[macro_use]
mod fmt;
use fmt::ToSql;

mod delim;
use delim::Comma;

mod ident;
use ident::Ident;

mod placeholder;
use placeholder::Placeholder;

// Fragment serializers
mod statement;

use crate::stmt::Statement;

/// Serialize a statement template to a SQL string
#[derive(Debug, Default)]
pub struct Serializer {
    _priv: (),
}

struct Formatter<'a> {
    /// Where to write the serialized SQL
    dst: &'a mut String,
}

impl Serializer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn serialize(&self, stmt: &Statement<'_>) -> String {
        let mut ret = String::new();

        let mut fmt = Formatter { dst: &mut ret };

        stmt.to_sql(&mut fmt);

        ret
    }
}
