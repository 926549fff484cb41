//! Statistic dispatch.
//!
//! Each namespace has an enum of statistic kinds; each variant maps to a pure
//! function `(store, id) -> Value`. Views wrap a kind in a deferred [`Stat`]
//! handle that evaluates once and caches the result.

use std::fmt;

use serde_json::Value;

use crate::incidence::id::Id;

pub mod edge_stats;
pub mod node_stats;
pub mod stat;

pub use edge_stats::{DiEdgeStat, EdgeStat};
pub use node_stats::{DiNodeStat, NodeStat};
pub use stat::{MultiStat, Stat};

/// A statistic computable for a single id of a store `S`.
pub trait StatKind<S: ?Sized>: Clone + fmt::Debug {
    /// Display name, used as the column key of a [`MultiStat`].
    fn name(&self) -> String;

    /// The kind that reads attribute `name`, falling back to `default`.
    fn attribute(name: &str, default: Option<Value>) -> Self;

    /// Evaluate for `id`; `null` when the value does not exist.
    fn eval(&self, store: &S, id: &Id) -> Value;
}

/// Read attribute `name` from `attrs`, with `default` for a missing key.
pub(crate) fn read_attr(
    attrs: Option<&crate::incidence::attrs::Attrs>,
    name: &str,
    default: &Option<Value>,
) -> Value {
    attrs
        .and_then(|a| a.get(name))
        .or(default.as_ref())
        .cloned()
        .unwrap_or(Value::Null)
}

/// `"name"` or `"name(key=value)"`.
pub(crate) fn param_name(base: &str, params: &[(&str, Option<String>)]) -> String {
    let set: Vec<String> = params
        .iter()
        .filter_map(|(k, v)| v.as_ref().map(|v| format!("{k}={v}")))
        .collect();
    if set.is_empty() {
        base.to_string()
    } else {
        format!("{base}({})", set.join(","))
    }
}
