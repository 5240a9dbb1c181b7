//! Named, typed keys for material attributes.

pub mod attributes;
pub mod catalog;
pub mod codec;
pub mod key;
pub mod mode;
pub mod value;

pub mod prelude {
    pub use crate::attributes::{AttributeError, MaterialAttributes};
    pub use crate::catalog::{AttributeCatalog, CatalogEntry};
    pub use crate::codec::CodecError;
    pub use crate::key::{AttributeKey, KeyError, TypedAttributeKey};
    pub use crate::mode::{BlendMode, ShadingMode};
    pub use crate::value::{AttributeValue, IncompatibleValueError, MaterialValue, ValueKind};

    pub use vislum_math::Color4;
}
