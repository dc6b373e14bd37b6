use super::Row;

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Response {
    /// Rows produced by the statement, in database order
    pub rows: Vec<Row>,

    /// Identifier assigned by the database to an inserted row
    pub last_insert_id: Option<i64>,
}

impl Response {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn rows(rows: impl IntoIterator<Item = Row>) -> Self {
        Self {
            rows: rows.into_iter().collect(),
            last_insert_id: None,
        }
    }

    pub fn inserted(id: i64) -> Self {
        Self {
            rows: vec![],
            last_insert_id: Some(id),
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
