//! The generic document model shared by encoder and decoder.

/// A nested keyed/ordered structure mirroring an XML document.
///
/// Maps preserve insertion order so that encoding is deterministic, and
/// duplicate keys are legal on the way in (the decoder collapses repeated
/// sibling elements into a [`Value::List`] under the shared name instead).
///
/// Scalar leaves are always text: the API is stringly typed, so decoding
/// `<id>5</id>` yields `Text("5")`, never a number.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Character data of a single element.
    Text(String),
    /// An element with named children, in document order.
    Map(Vec<(String, Value)>),
    /// Repeated sibling elements sharing one name.
    List(Vec<Value>),
}

impl Default for Value {
    fn default() -> Self {
        Value::Map(Vec::new())
    }
}

impl Value {
    /// Build a map value from key/value pairs, preserving order.
    pub fn map<K, I>(entries: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Value)>,
    {
        Value::Map(entries.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    /// Build a list value.
    pub fn list<I>(items: I) -> Self
    where
        I: IntoIterator<Item = Value>,
    {
        Value::List(items.into_iter().collect())
    }

    /// Look up the first entry with the given key, if this is a map.
    pub fn get(&self, key: &str) -> Option<&Value> {
        match self {
            Value::Map(entries) => entries.iter().find(|(k, _)| k == key).map(|(_, v)| v),
            _ => None,
        }
    }

    /// The text content, if this is a text leaf.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// The entries, if this is a map.
    pub fn as_map(&self) -> Option<&[(String, Value)]> {
        match self {
            Value::Map(entries) => Some(entries.as_slice()),
            _ => None,
        }
    }

    /// The items, if this is a list.
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items.as_slice()),
            _ => None,
        }
    }

    /// True for empty text, an entry-less map, or an item-less list.
    pub fn is_empty(&self) -> bool {
        match self {
            Value::Text(s) => s.is_empty(),
            Value::Map(entries) => entries.is_empty(),
            Value::List(items) => items.is_empty(),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

macro_rules! impl_from_scalar {
    ($($ty:ty),*) => {
        $(impl From<$ty> for Value {
            fn from(v: $ty) -> Self {
                Value::Text(v.to_string())
            }
        })*
    };
}

impl_from_scalar!(i32, i64, u32, u64, f64, bool);
