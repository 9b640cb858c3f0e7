//! RFC 6901 JSON pointers over `serde_json::Value`.

mod macros;

mod error;
mod json_pointer;
mod parser;
mod value_ext;

pub use error::ParseJsonPointerError;
pub use json_pointer::JsonPointer;
pub use value_ext::ValueExt;
