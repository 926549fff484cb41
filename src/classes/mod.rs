//! Containers built on the incidence stores.
//!
//! - [`Hypergraph`]: undirected, multi-edges allowed, empty-edge policy.
//! - [`SimplicialComplex`]: undirected and closed under subsets.
//! - [`DiHypergraph`]: directed, each edge split into tail and head.

use serde_json::Value;

use crate::incidence::attrs::Attrs;

pub mod dihypergraph;
pub mod edge_spec;
pub mod hypergraph;
pub mod input;
pub mod options;
pub mod simplicial;

pub use dihypergraph::DiHypergraph;
pub use edge_spec::{DiEdgeSpec, EdgeSpec};
pub use hypergraph::Hypergraph;
pub use input::{DiHypergraphInput, HypergraphInput};
pub use options::{
    CleanupOptions, HypergraphOptions, Insert, MergeOptions, MergeRename, MergeRule,
    SimplicialOptions,
};
pub use simplicial::SimplicialComplex;

/// The `"name"` container attribute, or `"Unnamed"`.
pub(crate) fn display_name(attrs: &Attrs) -> String {
    match attrs.get("name") {
        Some(Value::String(s)) => s.clone(),
        Some(v) => v.to_string(),
        None => "Unnamed".to_string(),
    }
}

#[cfg(test)]
mod tests;
