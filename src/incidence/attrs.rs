//! Attribute maps for nodes, edges and whole containers.
//!
//! Attributes are insertion-ordered `String → Value` maps. Values are
//! `serde_json::Value`, which covers the scalars, lists and nested maps that
//! callers attach to hypergraph entities.

use indexmap::IndexMap;

use super::id::Id;

pub use serde_json::Value;

/// Insertion-ordered attribute map.
pub type Attrs = IndexMap<String, Value>;

/// Build an [`Attrs`] map from `(key, value)` pairs.
///
/// ```rust
/// use hyper_sieve::incidence::attrs::attrs_from;
/// let a = attrs_from([("color", "red")]);
/// assert_eq!(a["color"], "red");
/// ```
pub fn attrs_from<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Attrs
where
    K: Into<String>,
    V: Into<Value>,
{
    pairs
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}

/// Bulk attribute update accepted by the container setters.
#[derive(Clone, Debug, PartialEq)]
pub enum AttrUpdate {
    /// Store `value` under `name` for every id.
    Uniform { name: String, value: Value },
    /// Store a per-id value under `name`.
    PerId {
        name: String,
        values: IndexMap<Id, Value>,
    },
    /// Merge a per-id attribute map into each record.
    Nested(IndexMap<Id, Attrs>),
}

impl AttrUpdate {
    pub fn uniform(name: impl Into<String>, value: impl Into<Value>) -> Self {
        AttrUpdate::Uniform {
            name: name.into(),
            value: value.into(),
        }
    }

    pub fn per_id<I, K, V>(name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<Id>,
        V: Into<Value>,
    {
        AttrUpdate::PerId {
            name: name.into(),
            values: values
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Anything in a store that carries an attribute map.
pub(crate) trait Record {
    fn attrs(&self) -> &Attrs;
    fn attrs_mut(&mut self) -> &mut Attrs;
}

/// Apply `update` to `records`; ids without a record are skipped with a warning.
pub(crate) fn apply_update<R: Record>(
    records: &mut IndexMap<Id, R>,
    update: AttrUpdate,
    what: &str,
) {
    match update {
        AttrUpdate::Uniform { name, value } => {
            for rec in records.values_mut() {
                rec.attrs_mut().insert(name.clone(), value.clone());
            }
        }
        AttrUpdate::PerId { name, values } => {
            for (id, value) in values {
                match records.get_mut(&id) {
                    Some(rec) => {
                        rec.attrs_mut().insert(name.clone(), value);
                    }
                    None => log::warn!("{what} `{id}` does not exist; attribute `{name}` skipped"),
                }
            }
        }
        AttrUpdate::Nested(map) => {
            for (id, attrs) in map {
                match records.get_mut(&id) {
                    Some(rec) => rec.attrs_mut().extend(attrs),
                    None => log::warn!("{what} `{id}` does not exist; attributes skipped"),
                }
            }
        }
    }
}

/// Collect `name` for every record that carries it.
pub(crate) fn project<R: Record>(records: &IndexMap<Id, R>, name: &str) -> IndexMap<Id, Value> {
    records
        .iter()
        .filter_map(|(id, rec)| rec.attrs().get(name).map(|v| (id.clone(), v.clone())))
        .collect()
}
