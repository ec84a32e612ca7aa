use aws_sdk_dynamodb::types;
use serde::Serialize;
use serde_dynamo::{Error, Result, to_attribute_value};
use std::collections;

/// A single key attribute.
///
/// ```rust
/// use dynamodb_futures::common::key;
///
/// let key = key::Key {
///     name: "id".to_string(),
///     value: "1".to_string(),
/// };
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Key<T> {
    /// The attribute name of the key.
    pub name: String,
    /// The value of the key.
    pub value: T,
}

impl<T> Key<T> {
    /// Build a key attribute from a name and a value.
    pub fn new(name: impl Into<String>, value: T) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// The primary key of an item: a hash key and, for composite keys, a range key.
///
/// ```rust
/// use dynamodb_futures::common::key;
///
/// let simple = key::PrimaryKey::new("id", "1");
/// let composite = key::PrimaryKey::new("artist", "No One You Know")
///     .with_range_key("song", "Call Me Today");
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PrimaryKey<T> {
    /// The hash (partition) key.
    pub hash_key: Key<T>,
    /// The range (sort) key, present only on tables with composite keys.
    pub range_key: Option<Key<T>>,
}

impl<T> PrimaryKey<T> {
    /// Build a primary key with only a hash key.
    pub fn new(name: impl Into<String>, value: T) -> Self {
        Self {
            hash_key: Key::new(name, value),
            range_key: None,
        }
    }

    /// Add a range key, turning this into a composite primary key.
    pub fn with_range_key(mut self, name: impl Into<String>, value: T) -> Self {
        self.range_key = Some(Key::new(name, value));
        self
    }
}

impl<T: Serialize> TryFrom<PrimaryKey<T>> for collections::HashMap<String, types::AttributeValue> {
    type Error = Error;

    fn try_from(primary_key: PrimaryKey<T>) -> Result<Self> {
        let hash_key_value = to_attribute_value(primary_key.hash_key.value)?;
        let mut key = Self::from([(primary_key.hash_key.name, hash_key_value)]);
        if let Some(range_key) = primary_key.range_key {
            let range_key_value = to_attribute_value(range_key.value)?;
            key.insert(range_key.name, range_key_value);
        }
        Ok(key)
    }
}
