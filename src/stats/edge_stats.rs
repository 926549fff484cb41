//! Built-in edge statistics.
//!
//! Size counts member nodes; order is size minus one, so an empty edge has
//! order `-1`. The optional `degree` parameter counts only members of that
//! node degree.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{StatKind, param_name, read_attr};
use crate::incidence::id::Id;
use crate::incidence::store::{DiHyperStore, IncidenceStore};
use crate::incidence_error::IncidenceError;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum EdgeStat {
    Order { degree: Option<usize> },
    Size { degree: Option<usize> },
    Attr { name: String, default: Option<Value> },
}

impl EdgeStat {
    pub fn order() -> Self {
        EdgeStat::Order { degree: None }
    }

    pub fn size() -> Self {
        EdgeStat::Size { degree: None }
    }

    pub fn attr(name: impl Into<String>) -> Self {
        EdgeStat::Attr {
            name: name.into(),
            default: None,
        }
    }
}

fn count_members<'s, S>(store: &'s S, nodes: impl Iterator<Item = &'s Id>, degree: Option<usize>) -> i64
where
    S: IncidenceStore + ?Sized,
{
    nodes
        .filter(|n| degree.is_none_or(|d| store.degree(n) == d))
        .count() as i64
}

fn sized_name(base: &str, degree: &Option<usize>) -> String {
    param_name(base, &[("degree", degree.map(|d| d.to_string()))])
}

impl<'s> StatKind<dyn IncidenceStore + 's> for EdgeStat {
    fn name(&self) -> String {
        match self {
            EdgeStat::Order { degree } => sized_name("order", degree),
            EdgeStat::Size { degree } => sized_name("size", degree),
            EdgeStat::Attr { name, .. } => name.clone(),
        }
    }

    fn attribute(name: &str, default: Option<Value>) -> Self {
        EdgeStat::Attr {
            name: name.to_string(),
            default,
        }
    }

    fn eval(&self, store: &(dyn IncidenceStore + 's), id: &Id) -> Value {
        match self {
            EdgeStat::Order { degree } => {
                Value::from(count_members(store, store.members(id), *degree) - 1)
            }
            EdgeStat::Size { degree } => Value::from(count_members(store, store.members(id), *degree)),
            EdgeStat::Attr { name, default } => read_attr(store.edge_attrs(id), name, default),
        }
    }
}

impl FromStr for EdgeStat {
    type Err = IncidenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "order" => Ok(EdgeStat::order()),
            "size" => Ok(EdgeStat::size()),
            other => Err(IncidenceError::InvalidArgument(format!(
                "unknown edge statistic `{other}`"
            ))),
        }
    }
}

/// Statistics over the edges of a directed container.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum DiEdgeStat {
    /// Over tail and head together.
    Order { degree: Option<usize> },
    Size { degree: Option<usize> },
    TailOrder { degree: Option<usize> },
    TailSize { degree: Option<usize> },
    HeadOrder { degree: Option<usize> },
    HeadSize { degree: Option<usize> },
    Attr { name: String, default: Option<Value> },
}

impl DiEdgeStat {
    pub fn order() -> Self {
        DiEdgeStat::Order { degree: None }
    }

    pub fn size() -> Self {
        DiEdgeStat::Size { degree: None }
    }
}

impl StatKind<DiHyperStore> for DiEdgeStat {
    fn name(&self) -> String {
        match self {
            DiEdgeStat::Order { degree } => sized_name("order", degree),
            DiEdgeStat::Size { degree } => sized_name("size", degree),
            DiEdgeStat::TailOrder { degree } => sized_name("tail_order", degree),
            DiEdgeStat::TailSize { degree } => sized_name("tail_size", degree),
            DiEdgeStat::HeadOrder { degree } => sized_name("head_order", degree),
            DiEdgeStat::HeadSize { degree } => sized_name("head_size", degree),
            DiEdgeStat::Attr { name, .. } => name.clone(),
        }
    }

    fn attribute(name: &str, default: Option<Value>) -> Self {
        DiEdgeStat::Attr {
            name: name.to_string(),
            default,
        }
    }

    fn eval(&self, store: &DiHyperStore, id: &Id) -> Value {
        let Some(rec) = store.edge(id) else {
            return match self {
                DiEdgeStat::Attr { default, .. } => default.clone().unwrap_or(Value::Null),
                _ => Value::Null,
            };
        };
        let (count, shift) = match self {
            DiEdgeStat::Order { degree } => (count_members(store, store.members(id), *degree), 1),
            DiEdgeStat::Size { degree } => (count_members(store, store.members(id), *degree), 0),
            DiEdgeStat::TailOrder { degree } => (count_members(store, rec.tail().iter(), *degree), 1),
            DiEdgeStat::TailSize { degree } => (count_members(store, rec.tail().iter(), *degree), 0),
            DiEdgeStat::HeadOrder { degree } => (count_members(store, rec.head().iter(), *degree), 1),
            DiEdgeStat::HeadSize { degree } => (count_members(store, rec.head().iter(), *degree), 0),
            DiEdgeStat::Attr { name, default } => {
                return read_attr(Some(rec.attrs()), name, default);
            }
        };
        Value::from(count - shift)
    }
}

impl FromStr for DiEdgeStat {
    type Err = IncidenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let degree = None;
        match s {
            "order" => Ok(DiEdgeStat::Order { degree }),
            "size" => Ok(DiEdgeStat::Size { degree }),
            "tail_order" => Ok(DiEdgeStat::TailOrder { degree }),
            "tail_size" => Ok(DiEdgeStat::TailSize { degree }),
            "head_order" => Ok(DiEdgeStat::HeadOrder { degree }),
            "head_size" => Ok(DiEdgeStat::HeadSize { degree }),
            other => Err(IncidenceError::InvalidArgument(format!(
                "unknown directed edge statistic `{other}`"
            ))),
        }
    }
}
