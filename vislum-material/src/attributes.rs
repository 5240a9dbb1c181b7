use std::collections::HashMap;
use std::collections::hash_map;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::key::{AttributeKey, TypedAttributeKey};
use crate::value::{AttributeValue, MaterialValue, ValueKind};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum AttributeError {
    #[error("attribute {key} holds a {found} value, expected {expected}")]
    TypeMismatch {
        key: AttributeKey,
        expected: ValueKind,
        found: ValueKind,
    },
}

/// The attributes of a material, addressed by [`AttributeKey`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MaterialAttributes {
    values: HashMap<AttributeKey, MaterialValue>,
}

impl MaterialAttributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets an attribute, returning the previous value if there was one.
    pub fn set<T>(&mut self, key: &TypedAttributeKey<T>, value: T) -> Option<MaterialValue>
    where
        T: AttributeValue,
    {
        self.values.insert(key.key().clone(), value.into())
    }

    /// Gets an attribute.
    ///
    /// Returns `Ok(None)` when the attribute is not set, and an error when
    /// the stored value is not a `T`.
    pub fn get<T>(&self, key: &TypedAttributeKey<T>) -> Result<Option<T>, AttributeError>
    where
        T: AttributeValue,
    {
        let Some(value) = self.values.get(key.key()) else {
            return Ok(None);
        };

        T::try_from(value.clone())
            .map(Some)
            .map_err(|error| AttributeError::TypeMismatch {
                key: key.key().clone(),
                expected: error.expected,
                found: error.found,
            })
    }

    /// Gets an attribute, falling back to `default` when it is missing or
    /// holds another type.
    pub fn get_or<T>(&self, key: &TypedAttributeKey<T>, default: T) -> T
    where
        T: AttributeValue,
    {
        match self.get(key) {
            Ok(Some(value)) => value,
            Ok(None) => default,
            Err(error) => {
                log::warn!("{error}, using the default");
                default
            }
        }
    }

    /// Sets an attribute without a type check.
    pub fn insert_raw(&mut self, key: AttributeKey, value: MaterialValue) -> Option<MaterialValue> {
        self.values.insert(key, value)
    }

    /// Gets an attribute by name.
    pub fn get_raw(&self, name: &str) -> Option<&MaterialValue> {
        self.values.get(name)
    }

    pub fn remove(&mut self, key: &AttributeKey) -> Option<MaterialValue> {
        self.values.remove(key)
    }

    pub fn contains(&self, key: &AttributeKey) -> bool {
        self.values.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> hash_map::Iter<'_, AttributeKey, MaterialValue> {
        self.values.iter()
    }
}

impl<'a> IntoIterator for &'a MaterialAttributes {
    type Item = (&'a AttributeKey, &'a MaterialValue);
    type IntoIter = hash_map::Iter<'a, AttributeKey, MaterialValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
