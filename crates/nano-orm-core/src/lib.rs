pub mod driver;
pub use driver::{Connection, Response, Row};

mod error;
pub use error::{Error, IntoError};

pub mod schema;
pub use schema::{FieldDescriptor, FieldSpec, FieldType};

pub mod stmt;

/// A Result type alias that uses nano-orm's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

pub use async_trait::async_trait;
