mod value;
pub use value::Value;

mod value_chrono;
pub use value_chrono::{format_datetime, parse_datetime, DATETIME_FORMAT};
