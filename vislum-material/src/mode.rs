use serde::{Deserialize, Serialize};

/// How a surface is composited onto the target.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum BlendMode {
    /// Regular alpha blending.
    #[default]
    Default,
    /// The surface color is added to the target.
    Additive,
}

/// The shading model a material was authored for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum ShadingMode {
    Flat,
    Gouraud,
    Phong,
    Blinn,
    Toon,
    OrenNayar,
    Minnaert,
    CookTorrance,
    NoShading,
    Fresnel,
}
