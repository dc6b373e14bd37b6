mod statements;
pub use statements::Statements;

/// The table a statement operates on: name, identifier column, and the data
/// columns in declaration order.
#[derive(Debug, Clone, Copy)]
pub struct TableRef<'a> {
    pub name: &'a str,
    pub id: &'a str,
    pub columns: &'a [&'a str],
}

/// A statement template over a single table.
#[derive(Debug, Clone, Copy)]
pub enum Statement<'a> {
    /// Select one row by identifier
    Load(TableRef<'a>),

    /// Select rows, up to and including `WHERE `; the caller appends a
    /// predicate
    FindPrefix(TableRef<'a>),

    /// Insert every data column; the identifier is left to the database
    Insert(TableRef<'a>),

    /// Update every data column of the row with the given identifier
    Update(TableRef<'a>),

    /// Delete the row with the given identifier
    Delete(TableRef<'a>),
}
