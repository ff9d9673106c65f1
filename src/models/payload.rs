//! Request payload sent to the gateway and covered by the signature.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A single payload value. `None` is an explicit null.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PayloadValue(Option<String>);

impl PayloadValue {
    pub fn null() -> Self {
        PayloadValue(None)
    }

    pub fn as_str(&self) -> Option<&str> {
        self.0.as_deref()
    }

    pub fn is_null(&self) -> bool {
        self.0.is_none()
    }
}

impl From<&str> for PayloadValue {
    fn from(value: &str) -> Self {
        PayloadValue(Some(value.to_string()))
    }
}

impl From<String> for PayloadValue {
    fn from(value: String) -> Self {
        PayloadValue(Some(value))
    }
}

impl From<&String> for PayloadValue {
    fn from(value: &String) -> Self {
        PayloadValue(Some(value.clone()))
    }
}

macro_rules! payload_value_from_display {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for PayloadValue {
                fn from(value: $ty) -> Self {
                    PayloadValue(Some(value.to_string()))
                }
            }
        )*
    };
}

payload_value_from_display!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

/// `true` signs as `"1"` and `false` as the empty string
impl From<bool> for PayloadValue {
    fn from(value: bool) -> Self {
        PayloadValue(Some(if value { "1" } else { "" }.to_string()))
    }
}

impl<T: Into<PayloadValue>> From<Option<T>> for PayloadValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or_default()
    }
}

/// Key/value payload for a gateway call.
///
/// Keys are unique and always iterate in byte-wise ascending order, so the
/// order in which entries were inserted never affects the signature.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Payload(BTreeMap<String, PayloadValue>);

impl Payload {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a value, returning the previous one
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<PayloadValue>,
    ) -> Option<PayloadValue> {
        self.0.insert(key.into(), value.into())
    }

    /// Builder-style insert
    pub fn with(mut self, key: impl Into<String>, value: impl Into<PayloadValue>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert_null(&mut self, key: impl Into<String>) {
        self.0.insert(key.into(), PayloadValue::null());
    }

    pub fn get(&self, key: &str) -> Option<&PayloadValue> {
        self.0.get(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Entries in canonical (sorted) key order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &PayloadValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Pairs for the wire query string. Null values are left out.
    pub fn query_pairs(&self) -> Vec<(&str, &str)> {
        self.0
            .iter()
            .filter_map(|(k, v)| v.as_str().map(|v| (k.as_str(), v)))
            .collect()
    }
}

impl<K, V> FromIterator<(K, V)> for Payload
where
    K: Into<String>,
    V: Into<PayloadValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Payload(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for Payload
where
    K: Into<String>,
    V: Into<PayloadValue>,
{
    fn from(entries: [(K, V); N]) -> Self {
        entries.into_iter().collect()
    }
}
