//! Named field selectors for one record type
//!
//! Fields are registered explicitly by name. Every selector produces
//! `serde_json::Value`s so that fields of two unrelated types can be compared
//! by value.

use pc_comparator::SelectorError;
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

/// Outcome of evaluating a field: absent, present, or failed
pub type FieldResult<V> = Result<Option<V>, SelectorError>;

/// Selector producing a single value
pub type ScalarSelector<T> = dyn Fn(&T) -> FieldResult<Value>;

/// Selector producing an ordered list of values
pub type SequenceSelector<T> = dyn Fn(&T) -> FieldResult<Vec<Value>>;

enum Field<T> {
    Scalar(Box<ScalarSelector<T>>),
    Sequence(Box<SequenceSelector<T>>),
}

/// Registry of named fields of `T`
pub struct FieldRegistry<T> {
    fields: BTreeMap<String, Field<T>>,
}

impl<T> Default for FieldRegistry<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FieldRegistry<T> {
    pub fn new() -> Self {
        Self {
            fields: BTreeMap::new(),
        }
    }

    /// Register a scalar field; a later registration under the same name wins
    pub fn scalar<F>(mut self, name: impl Into<String>, selector: F) -> Self
    where
        F: Fn(&T) -> FieldResult<Value> + 'static,
    {
        self.fields
            .insert(name.into(), Field::Scalar(Box::new(selector)));
        self
    }

    /// Register a sequence field; a later registration under the same name wins
    pub fn sequence<F>(mut self, name: impl Into<String>, selector: F) -> Self
    where
        F: Fn(&T) -> FieldResult<Vec<Value>> + 'static,
    {
        self.fields
            .insert(name.into(), Field::Sequence(Box::new(selector)));
        self
    }

    /// Register a scalar field from any serializable value
    ///
    /// A value that fails to serialize surfaces as a selector failure. So does
    /// a present value that serializes to JSON `null` (a non-finite float or a
    /// unit value), since it would otherwise compare equal to any other such
    /// value. Return `None` from the selector for an absent field.
    pub fn scalar_field<V, F>(self, name: impl Into<String>, selector: F) -> Self
    where
        V: Serialize,
        F: Fn(&T) -> Option<V> + 'static,
    {
        self.scalar(name, move |record| selector(record).map(to_field_value).transpose())
    }

    /// Register a sequence field from any iterable of serializable values
    ///
    /// Every element follows the same rules as [`scalar_field`](Self::scalar_field),
    /// so an element serializing to `null` fails the selector. Register
    /// sequences of optional values with [`sequence`](Self::sequence) instead.
    pub fn sequence_field<V, I, F>(self, name: impl Into<String>, selector: F) -> Self
    where
        V: Serialize,
        I: IntoIterator<Item = V>,
        F: Fn(&T) -> Option<I> + 'static,
    {
        self.sequence(name, move |record| {
            selector(record)
                .map(|items| {
                    items
                        .into_iter()
                        .map(to_field_value)
                        .collect::<Result<Vec<_>, _>>()
                })
                .transpose()
        })
    }

    /// Look up a scalar field; `None` if unknown or registered as a sequence
    pub fn get_scalar(&self, name: &str) -> Option<&ScalarSelector<T>> {
        match self.fields.get(name)? {
            Field::Scalar(selector) => Some(selector.as_ref()),
            Field::Sequence(_) => None,
        }
    }

    /// Look up a sequence field; `None` if unknown or registered as a scalar
    pub fn get_sequence(&self, name: &str) -> Option<&SequenceSelector<T>> {
        match self.fields.get(name)? {
            Field::Sequence(selector) => Some(selector.as_ref()),
            Field::Scalar(_) => None,
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Registered field names, sorted
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }
}

/// Serialize a present value, rejecting values with no JSON representation
///
/// Only the value itself is checked; non-finite floats nested inside a struct
/// still serialize to `null` members.
fn to_field_value<V: Serialize>(value: V) -> Result<Value, SelectorError> {
    match serde_json::to_value(value)? {
        Value::Null => {
            Err("present value serializes to null (non-finite float or unit)".into())
        }
        value => Ok(value),
    }
}
