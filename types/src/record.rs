//! Immutable field-name to value mapping.
//!
//! Every update returns a new [`Record`]. The receiver is never touched, and
//! untouched field values are shared with the result.

use std::collections::BTreeMap;
use std::collections::btree_map;
use std::fmt;
use std::sync::Arc;

use crate::Value;

#[derive(Clone, Default, PartialEq)]
pub struct Record(Arc<BTreeMap<Arc<str>, Value>>);

impl Record {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_fields<K, V>(fields: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<Arc<str>>,
        V: Into<Value>,
    {
        fields.into_iter().collect()
    }

    #[must_use]
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    #[must_use]
    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(|k| &**k)
    }

    pub fn iter(&self) -> btree_map::Iter<'_, Arc<str>, Value> {
        self.0.iter()
    }

    /// Copy of `self` with `field` set to `value`, created if absent.
    #[must_use]
    pub fn with(&self, field: impl Into<Arc<str>>, value: impl Into<Value>) -> Self {
        let mut fields = BTreeMap::clone(&self.0);
        fields.insert(field.into(), value.into());
        Self(Arc::new(fields))
    }

    /// Copy of `self` without `field`. Absent fields are not an error.
    #[must_use]
    pub fn without(&self, field: &str) -> Self {
        let mut fields = BTreeMap::clone(&self.0);
        fields.remove(field);
        Self(Arc::new(fields))
    }

    /// Shallow union; on collision the field from `extension` wins.
    #[must_use]
    pub fn merged(&self, extension: &Record) -> Self {
        let mut fields = BTreeMap::clone(&self.0);
        fields.extend(extension.iter().map(|(k, v)| (Arc::clone(k), v.clone())));
        Self(Arc::new(fields))
    }

    /// Whether both handles point at the same record allocation.
    #[must_use]
    pub fn ptr_eq(a: &Record, b: &Record) -> bool {
        Arc::ptr_eq(&a.0, &b.0)
    }
}

impl<K, V> FromIterator<(K, V)> for Record
where
    K: Into<Arc<str>>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(Arc::new(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        ))
    }
}

impl<'a> IntoIterator for &'a Record {
    type Item = (&'a Arc<str>, &'a Value);
    type IntoIter = btree_map::Iter<'a, Arc<str>, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Debug for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.0.iter()).finish()
    }
}
