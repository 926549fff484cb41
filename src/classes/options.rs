//! Policy and option structs shared by the containers.

use serde::{Deserialize, Serialize};

use crate::incidence::id::Id;

/// Empty-edge policy of a [`Hypergraph`](super::Hypergraph).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HypergraphOptions {
    /// Accept edges with no members.
    pub allow_empty_edges: bool,
    /// Delete an edge once removals leave it without members.
    pub remove_empty_edges: bool,
}

impl Default for HypergraphOptions {
    fn default() -> Self {
        Self {
            allow_empty_edges: true,
            remove_empty_edges: true,
        }
    }
}

impl HypergraphOptions {
    /// Reject empty edges outright.
    pub fn strict() -> Self {
        Self {
            allow_empty_edges: false,
            remove_empty_edges: true,
        }
    }
}

/// Closure policy of a [`SimplicialComplex`](super::SimplicialComplex).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimplicialOptions {
    /// Smallest face size kept by the downward closure.
    pub min_size: usize,
}

impl Default for SimplicialOptions {
    fn default() -> Self {
        Self { min_size: 2 }
    }
}

/// Id given to a group of merged duplicate edges.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MergeRename {
    /// Keep the smallest id of the group.
    #[default]
    First,
    /// Issue a fresh id from the edge counter.
    New,
}

/// Attributes of a group of merged duplicate edges.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MergeRule {
    /// Attributes of the edge with the smallest id.
    #[default]
    First,
    /// Per key: the single distinct value, or an array of the distinct values.
    Union,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergeOptions {
    pub rename: MergeRename,
    pub merge_rule: MergeRule,
    /// Store the group size under this edge attribute.
    pub multiplicity: Option<String>,
}

/// What [`Hypergraph::cleanup`](super::Hypergraph::cleanup) keeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleanupOptions {
    pub keep_isolates: bool,
    pub keep_singletons: bool,
    pub keep_multiedges: bool,
    pub keep_empty: bool,
    /// Renumber nodes and edges to `0..n`, keeping the old id under `"label"`.
    pub relabel: bool,
}

impl Default for CleanupOptions {
    fn default() -> Self {
        Self {
            keep_isolates: false,
            keep_singletons: false,
            keep_multiedges: false,
            keep_empty: false,
            relabel: true,
        }
    }
}

/// Outcome of an edge or simplex insertion.
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Insert {
    /// A new edge was created under this id.
    Added(Id),
    /// The explicit id was already taken; nothing changed.
    Duplicate(Id),
    /// An identical simplex already exists under this id; nothing changed.
    Existing(Id),
}

impl Insert {
    pub fn id(&self) -> &Id {
        match self {
            Insert::Added(id) | Insert::Duplicate(id) | Insert::Existing(id) => id,
        }
    }

    pub fn is_added(&self) -> bool {
        matches!(self, Insert::Added(_))
    }
}
