//! Built-in node statistics.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{StatKind, param_name, read_attr};
use crate::incidence::id::Id;
use crate::incidence::store::{DiHyperStore, IncidenceStore};
use crate::incidence_error::IncidenceError;

/// Statistics over the nodes of an undirected container.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum NodeStat {
    /// Number of incident edges. `order` counts only edges of size
    /// `order + 1`; `weight` sums that edge attribute instead (1.0 if absent).
    Degree {
        order: Option<usize>,
        weight: Option<String>,
    },
    /// Mean degree of the node's neighbors, `0.0` without neighbors.
    AverageNeighborDegree,
    Attr { name: String, default: Option<Value> },
}

impl NodeStat {
    pub fn degree() -> Self {
        NodeStat::Degree {
            order: None,
            weight: None,
        }
    }

    pub fn attr(name: impl Into<String>) -> Self {
        NodeStat::Attr {
            name: name.into(),
            default: None,
        }
    }
}

/// Degree over `edges`, optionally restricted by order and weighted.
fn degree_over<'s, S>(
    store: &'s S,
    edges: impl Iterator<Item = &'s Id>,
    order: Option<usize>,
    weight: Option<&str>,
) -> Value
where
    S: IncidenceStore + ?Sized,
{
    let kept = edges.filter(|e| order.is_none_or(|k| store.edge_size(e) == k + 1));
    match weight {
        None => Value::from(kept.count()),
        Some(w) => {
            let total: f64 = kept
                .map(|e| {
                    store
                        .edge_attrs(e)
                        .and_then(|a| a.get(w))
                        .and_then(Value::as_f64)
                        .unwrap_or(1.0)
                })
                .sum();
            Value::from(total)
        }
    }
}

fn degree_name(base: &str, order: &Option<usize>, weight: &Option<String>) -> String {
    param_name(
        base,
        &[
            ("order", order.map(|k| k.to_string())),
            ("weight", weight.clone()),
        ],
    )
}

impl<'s> StatKind<dyn IncidenceStore + 's> for NodeStat {
    fn name(&self) -> String {
        match self {
            NodeStat::Degree { order, weight } => degree_name("degree", order, weight),
            NodeStat::AverageNeighborDegree => "average_neighbor_degree".into(),
            NodeStat::Attr { name, .. } => name.clone(),
        }
    }

    fn attribute(name: &str, default: Option<Value>) -> Self {
        NodeStat::Attr {
            name: name.to_string(),
            default,
        }
    }

    fn eval(&self, store: &(dyn IncidenceStore + 's), id: &Id) -> Value {
        match self {
            NodeStat::Degree { order, weight } => {
                degree_over(store, store.memberships(id), *order, weight.as_deref())
            }
            NodeStat::AverageNeighborDegree => {
                let neighbors = store.node_neighbors(id, 1);
                if neighbors.is_empty() {
                    return Value::from(0.0);
                }
                let total: usize = neighbors.iter().map(|n| store.degree(n)).sum();
                Value::from(total as f64 / neighbors.len() as f64)
            }
            NodeStat::Attr { name, default } => read_attr(store.node_attrs(id), name, default),
        }
    }
}

impl FromStr for NodeStat {
    type Err = IncidenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "degree" => Ok(NodeStat::degree()),
            "average_neighbor_degree" => Ok(NodeStat::AverageNeighborDegree),
            other => Err(IncidenceError::InvalidArgument(format!(
                "unknown node statistic `{other}`"
            ))),
        }
    }
}

/// Statistics over the nodes of a directed container.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum DiNodeStat {
    /// Edges with the node on either side.
    Degree {
        order: Option<usize>,
        weight: Option<String>,
    },
    /// Edges with the node in their head.
    InDegree {
        order: Option<usize>,
        weight: Option<String>,
    },
    /// Edges with the node in their tail.
    OutDegree {
        order: Option<usize>,
        weight: Option<String>,
    },
    Attr { name: String, default: Option<Value> },
}

impl DiNodeStat {
    pub fn degree() -> Self {
        DiNodeStat::Degree {
            order: None,
            weight: None,
        }
    }

    pub fn in_degree() -> Self {
        DiNodeStat::InDegree {
            order: None,
            weight: None,
        }
    }

    pub fn out_degree() -> Self {
        DiNodeStat::OutDegree {
            order: None,
            weight: None,
        }
    }
}

impl StatKind<DiHyperStore> for DiNodeStat {
    fn name(&self) -> String {
        match self {
            DiNodeStat::Degree { order, weight } => degree_name("degree", order, weight),
            DiNodeStat::InDegree { order, weight } => degree_name("in_degree", order, weight),
            DiNodeStat::OutDegree { order, weight } => degree_name("out_degree", order, weight),
            DiNodeStat::Attr { name, .. } => name.clone(),
        }
    }

    fn attribute(name: &str, default: Option<Value>) -> Self {
        DiNodeStat::Attr {
            name: name.to_string(),
            default,
        }
    }

    fn eval(&self, store: &DiHyperStore, id: &Id) -> Value {
        match self {
            DiNodeStat::Degree { order, weight } => {
                degree_over(store, store.memberships(id), *order, weight.as_deref())
            }
            DiNodeStat::InDegree { order, weight } => {
                degree_over(store, store.in_memberships(id), *order, weight.as_deref())
            }
            DiNodeStat::OutDegree { order, weight } => {
                degree_over(store, store.out_memberships(id), *order, weight.as_deref())
            }
            DiNodeStat::Attr { name, default } => read_attr(store.node_attrs(id), name, default),
        }
    }
}

impl FromStr for DiNodeStat {
    type Err = IncidenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "degree" => Ok(DiNodeStat::degree()),
            "in_degree" => Ok(DiNodeStat::in_degree()),
            "out_degree" => Ok(DiNodeStat::out_degree()),
            other => Err(IncidenceError::InvalidArgument(format!(
                "unknown directed node statistic `{other}`"
            ))),
        }
    }
}
