use std::fmt::Debug;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use vislum_math::Color4;

use crate::mode::{BlendMode, ShadingMode};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("expected a {expected} value, found {found}")]
pub struct IncompatibleValueError {
    pub expected: ValueKind,
    pub found: ValueKind,
}

/// A value type that can be stored in a material.
#[rustfmt::skip]
pub trait AttributeValue: Clone
    + Debug
    + TryFrom<MaterialValue, Error = IncompatibleValueError>
    + Into<MaterialValue>
{
    /// The runtime tag of the value type.
    const KIND: ValueKind;
}

macro_rules! impl_value {
    ($($name:ident($type:ty)),* $(,)?) => {
        /// The runtime tag of a [`MaterialValue`].
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
        pub enum ValueKind {
            $($name,)*
        }

        /// A material attribute value of any supported type.
        #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
        pub enum MaterialValue {
            $($name($type),)*
        }

        impl MaterialValue {
            pub fn kind(&self) -> ValueKind {
                match self {
                    $(Self::$name(_) => ValueKind::$name,)*
                }
            }
        }

        $(
            impl AttributeValue for $type {
                const KIND: ValueKind = ValueKind::$name;
            }

            impl TryFrom<MaterialValue> for $type {
                type Error = IncompatibleValueError;

                fn try_from(value: MaterialValue) -> Result<Self, Self::Error> {
                    match value {
                        MaterialValue::$name(value) => Ok(value),
                        other => Err(IncompatibleValueError {
                            expected: ValueKind::$name,
                            found: other.kind(),
                        }),
                    }
                }
            }

            impl From<$type> for MaterialValue {
                #[inline(always)]
                fn from(value: $type) -> Self {
                    MaterialValue::$name(value)
                }
            }
        )*
    };
}

impl_value! {
    String(String),
    Bool(bool),
    Float(f32),
    Color4(Color4),
    ShadingMode(ShadingMode),
    BlendMode(BlendMode),
}
