/// Options accepted by [`define_model`](crate::define_model).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModelOptions {
    /// Name of the id column. Defaults to `"id"`.
    pub id_field: Option<String>,
}

impl ModelOptions {
    pub fn id_field(mut self, name: impl Into<String>) -> Self {
        self.id_field = Some(name.into());
        self
    }
}
