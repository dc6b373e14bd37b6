//! A minimal object-relational mapping layer.
//!
//! A model is defined at runtime from a table name and a list of field
//! descriptors. The resulting [`ModelDefinition`] builds [`Instance`]s,
//! hydrates them from database rows, and carries the precomputed SQL used to
//! load, find, insert, update, and delete them through any [`Connection`].
//!
//! ```ignore
//! let user = nano_orm::define_model("user", ["username", "password"], Default::default())?;
//!
//! let mut sarah = user.construct_with([("username", "Sarah"), ("password", "cats")])?;
//! sarah.save(&mut db).await?;
//!
//! let admins = user.find(&mut db, "username = ?", &["admin".into()]).await?;
//! ```

mod instance;
pub use instance::Instance;

pub mod model;
pub use model::{define_model, define_model_json, JsonSchema, Mapper, ModelDefinition, ModelOptions};

pub use nano_orm_core::{
    bail,
    driver::{self, Connection, Response, Row},
    err,
    schema::{self, FieldDescriptor, FieldSpec, FieldType},
    stmt::{self, Value},
    Error, Result,
};

#[cfg(feature = "sqlite")]
pub use nano_orm_driver_sqlite as sqlite;
