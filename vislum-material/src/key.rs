use std::borrow::Borrow;
use std::fmt::{Debug, Display};
use std::hash::{Hash, Hasher};
use std::io::{Read, Write};
use std::marker::PhantomData;
use std::ops::Deref;
use std::sync::Arc;

use atomicow::CowArc;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::codec::{self, CodecError};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeyError {
    #[error("attribute key names must not be empty")]
    EmptyName,
}

/// The name of a material attribute.
///
/// Two keys are equal when their names are equal. The comparison is exact
/// and case-sensitive.
#[derive(Clone)]
pub struct AttributeKey(CowArc<'static, str>);

static_assertions::assert_impl_all!(AttributeKey: Send, Sync);

impl AttributeKey {
    /// Creates a new key from a runtime name.
    pub fn new(name: impl AsRef<str>) -> Result<Self, KeyError> {
        let name = name.as_ref();
        if name.is_empty() {
            return Err(KeyError::EmptyName);
        }

        Ok(Self(CowArc::new_owned_from_arc(Arc::<str>::from(name))))
    }

    /// Creates a new key from a static name.
    ///
    /// # Panics
    ///
    /// Panics if the name is empty. In a const context this is a compile error.
    pub const fn from_static(name: &'static str) -> Self {
        assert!(!name.is_empty(), "attribute key names must not be empty");
        Self(CowArc::Static(name))
    }

    /// Returns the name of the key.
    #[inline]
    pub fn name(&self) -> &str {
        &self.0
    }

    /// Compares against a key that may be absent.
    pub fn equals(&self, other: Option<&AttributeKey>) -> bool {
        other.is_some_and(|other| self == other)
    }

    /// Writes the key name as a length-prefixed string.
    pub fn encode(&self, writer: impl Write) -> Result<(), CodecError> {
        codec::write_string(writer, self.name())
    }

    /// Reads a key written by [`AttributeKey::encode`].
    pub fn decode(reader: impl Read) -> Result<Self, CodecError> {
        let name = codec::read_string(reader)?;
        Ok(Self::new(name)?)
    }
}

impl PartialEq for AttributeKey {
    fn eq(&self, other: &Self) -> bool {
        self.name() == other.name()
    }
}

impl Eq for AttributeKey {}

impl PartialEq<str> for AttributeKey {
    fn eq(&self, other: &str) -> bool {
        self.name() == other
    }
}

impl PartialEq<&str> for AttributeKey {
    fn eq(&self, other: &&str) -> bool {
        self.name() == *other
    }
}

impl Hash for AttributeKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Must match `str`'s hash for `Borrow<str>` lookups.
        self.name().hash(state);
    }
}

impl Borrow<str> for AttributeKey {
    fn borrow(&self) -> &str {
        self.name()
    }
}

impl Debug for AttributeKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("AttributeKey").field(&self.name()).finish()
    }
}

impl Display for AttributeKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<String> for AttributeKey {
    type Error = KeyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if value.is_empty() {
            return Err(KeyError::EmptyName);
        }

        Ok(Self(CowArc::new_owned_from_arc(Arc::<str>::from(value))))
    }
}

impl Serialize for AttributeKey {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for AttributeKey {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let name = String::deserialize(deserializer)?;
        AttributeKey::try_from(name).map_err(serde::de::Error::custom)
    }
}

/// An [`AttributeKey`] that only addresses values of type `T`.
///
/// The type parameter carries no runtime state.
pub struct TypedAttributeKey<T> {
    key: AttributeKey,
    phantom: PhantomData<fn() -> T>,
}

static_assertions::assert_impl_all!(TypedAttributeKey<String>: Send, Sync);

impl<T> TypedAttributeKey<T> {
    pub fn new(name: impl AsRef<str>) -> Result<Self, KeyError> {
        AttributeKey::new(name).map(Self::from_key)
    }

    pub const fn from_static(name: &'static str) -> Self {
        Self::from_key(AttributeKey::from_static(name))
    }

    /// Assigns a value type to an untyped key.
    #[inline]
    pub const fn from_key(key: AttributeKey) -> Self {
        Self { key, phantom: PhantomData }
    }

    /// Returns the untyped key.
    #[inline]
    pub fn key(&self) -> &AttributeKey {
        &self.key
    }

    #[inline]
    pub fn into_key(self) -> AttributeKey {
        self.key
    }

    pub fn encode(&self, writer: impl Write) -> Result<(), CodecError> {
        self.key.encode(writer)
    }

    pub fn decode(reader: impl Read) -> Result<Self, CodecError> {
        AttributeKey::decode(reader).map(Self::from_key)
    }
}

impl<T> Deref for TypedAttributeKey<T> {
    type Target = AttributeKey;

    fn deref(&self) -> &Self::Target {
        &self.key
    }
}

impl<T> From<TypedAttributeKey<T>> for AttributeKey {
    fn from(value: TypedAttributeKey<T>) -> Self {
        value.key
    }
}

impl<T> Clone for TypedAttributeKey<T> {
    fn clone(&self) -> Self {
        Self::from_key(self.key.clone())
    }
}

impl<T> PartialEq for TypedAttributeKey<T> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl<T> Eq for TypedAttributeKey<T> {}

impl<T> PartialEq<AttributeKey> for TypedAttributeKey<T> {
    fn eq(&self, other: &AttributeKey) -> bool {
        self.key == *other
    }
}

impl<T> PartialEq<TypedAttributeKey<T>> for AttributeKey {
    fn eq(&self, other: &TypedAttributeKey<T>) -> bool {
        *self == other.key
    }
}

impl<T> Hash for TypedAttributeKey<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}

impl<T> Debug for TypedAttributeKey<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "TypedAttributeKey<{}>({:?})", std::any::type_name::<T>(), self.name())
    }
}

impl<T> Display for TypedAttributeKey<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.key, f)
    }
}

impl<T> Serialize for TypedAttributeKey<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.key.serialize(serializer)
    }
}

impl<'de, T> Deserialize<'de> for TypedAttributeKey<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        AttributeKey::deserialize(deserializer).map(Self::from_key)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::collections::hash_map::DefaultHasher;
    use std::io::Cursor;

    use super::*;

    fn hash_of(value: &impl Hash) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_same_name_is_equal() {
        let a = AttributeKey::new("Opacity").unwrap();
        let b = AttributeKey::new("Opacity").unwrap();
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
    }

    #[test]
    fn test_static_and_owned_are_equal() {
        let owned = AttributeKey::new(String::from("Shininess")).unwrap();
        let fixed = AttributeKey::from_static("Shininess");
        assert_eq!(owned, fixed);
        assert_eq!(hash_of(&owned), hash_of(&fixed));
    }

    #[test]
    fn test_different_names_are_not_equal() {
        let a = AttributeKey::new("Opacity").unwrap();
        let b = AttributeKey::new("Shininess").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_case_sensitive() {
        let a = AttributeKey::new("Opacity").unwrap();
        let b = AttributeKey::new("opacity").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_equals_absent() {
        let key = AttributeKey::new("Opacity").unwrap();
        assert!(!key.equals(None));
        assert!(key.equals(Some(&key)));
    }

    #[test]
    fn test_empty_name_rejected() {
        assert_eq!(AttributeKey::new("").unwrap_err(), KeyError::EmptyName);
        assert_eq!(AttributeKey::try_from(String::new()).unwrap_err(), KeyError::EmptyName);
        assert!(TypedAttributeKey::<f32>::new("").is_err());
    }

    #[test]
    #[should_panic(expected = "attribute key names must not be empty")]
    fn test_empty_static_name_panics() {
        let name: &'static str = "";
        let _ = AttributeKey::from_static(name);
    }

    #[test]
    #[should_panic(expected = "attribute key names must not be empty")]
    fn test_empty_static_typed_name_panics() {
        let name: &'static str = "";
        let _ = TypedAttributeKey::<f32>::from_static(name);
    }

    #[test]
    fn test_display_is_name() {
        let key = AttributeKey::new("ColorDiffuse").unwrap();
        assert_eq!(key.to_string(), key.name());

        let typed = TypedAttributeKey::<f32>::from_static("Opacity");
        assert_eq!(typed.to_string(), "Opacity");
    }

    #[test]
    fn test_compare_with_str() {
        let key = AttributeKey::from_static("Wireframe");
        assert!(key == "Wireframe");
        assert!(key != "wireframe");
    }

    #[test]
    fn test_lookup_by_str() {
        let mut map = HashMap::new();
        map.insert(AttributeKey::new("Opacity").unwrap(), 1);
        assert_eq!(map.get("Opacity"), Some(&1));
        assert_eq!(map.get("opacity"), None);
    }

    #[test]
    fn test_typed_key_erases_to_same_key() {
        let typed = TypedAttributeKey::<bool>::from_static("TwoSided");
        let untyped = AttributeKey::new("TwoSided").unwrap();
        assert!(typed == untyped);
        assert!(untyped == typed);
        assert!(AttributeKey::from_static("Wireframe") != typed);
        assert_eq!(hash_of(&typed), hash_of(&untyped));
        assert_eq!(AttributeKey::from(typed.clone()), untyped);
        assert_eq!(typed.key(), &untyped);
    }

    #[test]
    fn test_binary_round_trip() {
        let key = AttributeKey::new("ColorReflective").unwrap();
        let mut buffer = Vec::new();
        key.encode(&mut buffer).unwrap();

        assert_eq!(buffer[0] as usize, "ColorReflective".len());
        assert_eq!(&buffer[1..], b"ColorReflective");

        let decoded = AttributeKey::decode(Cursor::new(buffer)).unwrap();
        assert_eq!(decoded, key);
    }

    #[test]
    fn test_typed_binary_round_trip() {
        let key = TypedAttributeKey::<f32>::from_static("BumpScaling");
        let mut buffer = Vec::new();
        key.encode(&mut buffer).unwrap();

        let decoded = TypedAttributeKey::<f32>::decode(Cursor::new(buffer)).unwrap();
        assert_eq!(decoded, key);
    }

    #[test]
    fn test_decode_empty_name() {
        let result = AttributeKey::decode(Cursor::new(vec![0u8]));
        assert!(matches!(result, Err(CodecError::Key(KeyError::EmptyName))));
    }

    #[test]
    fn test_serde_as_string() {
        let key = AttributeKey::new("Refractivity").unwrap();
        let json = serde_json::to_string(&key).unwrap();
        assert_eq!(json, r#""Refractivity""#);

        let decoded: AttributeKey = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, key);
    }

    #[test]
    fn test_serde_rejects_empty() {
        assert!(serde_json::from_str::<AttributeKey>(r#""""#).is_err());
        assert!(serde_json::from_str::<TypedAttributeKey<f32>>(r#""""#).is_err());
    }
}
