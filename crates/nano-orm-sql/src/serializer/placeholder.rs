use super::{Formatter, Ident, ToSql};

/// A positional `?` parameter.
pub(super) struct Placeholder;

impl ToSql for Placeholder {
    fn to_sql(self, f: &mut Formatter<'_>) {
        f.dst.push('?');
    }
}

/// `<column>=?`
pub(super) struct Assign<S>(pub(super) Ident<S>);

impl<S: AsRef<str>> ToSql for Assign<S> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        fmt!(f, self.0, "=", Placeholder);
    }
}
