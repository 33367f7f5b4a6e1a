//! Form schema registry
//!
//! Static description of the available form types and their fields.

mod field;
mod registry;

pub use field::{FieldDescriptor, FieldKind};
pub use registry::{FormTypeDescriptor, SchemaRegistry};
