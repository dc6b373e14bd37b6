mod field;
pub use field::{FieldDescriptor, FieldSpec};

mod field_ty;
pub use field_ty::FieldType;

mod normalize;
pub use normalize::{normalize, normalize_json};
