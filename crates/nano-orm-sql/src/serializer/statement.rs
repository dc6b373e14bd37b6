use super::{placeholder::Assign, Comma, Formatter, Ident, Placeholder, ToSql};
use crate::stmt::{Statement, TableRef};

impl ToSql for &Statement<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        match self {
            Statement::Load(table) => {
                fmt!(f, Select(table), " WHERE ", Ident(table.id), "=", Placeholder);
            }
            Statement::FindPrefix(table) => {
                fmt!(f, Select(table), " WHERE ");
            }
            Statement::Insert(table) => {
                let columns = Comma(table.columns.iter().map(Ident));
                let values = Comma(table.columns.iter().map(|_| Placeholder));

                fmt!(
                    f,
                    "INSERT INTO ", Ident(table.name), "(", columns, ") VALUES (", values, ")"
                );
            }
            Statement::Update(table) => {
                let assignments = Comma(table.columns.iter().map(|column| Assign(Ident(column))));

                fmt!(
                    f,
                    "UPDATE ", Ident(table.name), " SET ", assignments,
                    " WHERE ", Ident(table.id), "=", Placeholder,
                );
            }
            Statement::Delete(table) => {
                fmt!(
                    f,
                    "DELETE FROM ", Ident(table.name), " WHERE ", Ident(table.id), "=", Placeholder
                );
            }
        }
    }
}

/// `SELECT <id>,<columns> FROM <table>`
struct Select<'a, 'b>(&'b TableRef<'a>);

impl ToSql for Select<'_, '_> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let table = self.0;
        let columns = Comma(
            std::iter::once(&table.id)
                .chain(table.columns.iter())
                .map(Ident),
        );

        fmt!(f, "SELECT ", columns, " FROM ", Ident(table.name));
    }
}
