use super::{Statement, TableRef};
use crate::Serializer;

/// The rendered statement texts for one model, built once at definition time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statements {
    /// `SELECT <id>,<f1>,... FROM <table> WHERE <id>=?`
    pub load: String,

    /// `SELECT <id>,<f1>,... FROM <table> WHERE `
    pub find_prefix: String,

    /// `INSERT INTO <table>(<f1>,...) VALUES (?,...)`
    pub insert: String,

    /// `UPDATE <table> SET <f1>=?,... WHERE <id>=?`
    pub update: String,

    /// `DELETE FROM <table> WHERE <id>=?`
    pub delete: String,
}

impl Statements {
    pub fn new(table: TableRef<'_>) -> Self {
        let serializer = Serializer::new();

        Self {
            load: serializer.serialize(&Statement::Load(table)),
            find_prefix: serializer.serialize(&Statement::FindPrefix(table)),
            insert: serializer.serialize(&Statement::Insert(table)),
            update: serializer.serialize(&Statement::Update(table)),
            delete: serializer.serialize(&Statement::Delete(table)),
        }
    }

    /// A find statement: the prefix followed verbatim by `predicate`.
    pub fn find(&self, predicate: &str) -> String {
        let mut sql = String::with_capacity(self.find_prefix.len() + predicate.len());
        sql.push_str(&self.find_prefix);
        sql.push_str(predicate);
        sql
    }
}
