use vislum_math::Color4;

use crate::key::{AttributeKey, TypedAttributeKey};
use crate::mode::{BlendMode, ShadingMode};
use crate::value::{AttributeValue, ValueKind};

/// A key from the catalog along with the type of value it addresses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    pub key: AttributeKey,
    pub kind: ValueKind,
}

macro_rules! define_catalog {
    ($($(#[$meta:meta])* $field:ident: $type:ty = $name:literal;)*) => {
        /// The well-known material attributes.
        ///
        /// Built once through [`AttributeCatalog::new`] and shared by reference.
        /// Keys created elsewhere with the same name address the same
        /// attributes.
        #[derive(Debug, Clone)]
        pub struct AttributeCatalog {
            $(
                $(#[$meta])*
                pub $field: TypedAttributeKey<$type>,
            )*
        }

        impl AttributeCatalog {
            /// The number of entries in the catalog.
            pub const LEN: usize = [$($name),*].len();

            pub fn new() -> Self {
                log::debug!("building material attribute catalog ({} entries)", Self::LEN);

                Self {
                    $($field: const { TypedAttributeKey::<$type>::from_static($name) },)*
                }
            }

            /// Lists every entry in declaration order.
            pub fn entries(&self) -> [CatalogEntry; Self::LEN] {
                [
                    $(
                        CatalogEntry {
                            key: self.$field.key().clone(),
                            kind: <$type as AttributeValue>::KIND,
                        },
                    )*
                ]
            }
        }
    };
}

define_catalog! {
    name: String = "Name";
    two_sided: bool = "TwoSided";
    shading_mode: ShadingMode = "ShadingMode";
    wireframe: bool = "Wireframe";
    blend_mode: BlendMode = "BlendMode";
    opacity: f32 = "Opacity";
    bump_scaling: f32 = "BumpScaling";
    shininess: f32 = "Shininess";
    reflectivity: f32 = "Reflectivity";
    shininess_strength: f32 = "ShininessStrength";
    refractivity: f32 = "Refractivity";
    color_diffuse: Color4 = "ColorDiffuse";
    color_ambient: Color4 = "ColorAmbient";
    color_specular: Color4 = "ColorSpecular";
    color_emissive: Color4 = "ColorEmissive";
    color_transparent: Color4 = "ColorTransparent";
    color_reflective: Color4 = "ColorReflective";
}

static_assertions::assert_impl_all!(AttributeCatalog: Send, Sync);

impl AttributeCatalog {
    /// Finds an entry by its exact name.
    pub fn lookup(&self, name: &str) -> Option<CatalogEntry> {
        let entry = self.entries().into_iter().find(|entry| entry.key == name);
        if entry.is_none() {
            log::trace!("'{name}' is not a catalog attribute");
        }

        entry
    }

    #[inline]
    pub fn len(&self) -> usize {
        Self::LEN
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        Self::LEN == 0
    }
}

impl Default for AttributeCatalog {
    fn default() -> Self {
        Self::new()
    }
}
