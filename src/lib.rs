#![cfg_attr(docsrs, feature(doc_cfg))]
//! # hyper-sieve
//!
//! hyper-sieve is a library for higher-order networks: hypergraphs, directed
//! hypergraphs and simplicial complexes. All three are built on the same pair of
//! mirrored incidence maps (node → edges, edge → nodes), so the structural
//! queries, views and statistics work the same way on each of them.
//!
//! ## Features
//! - Dual incidence stores with insertion-ordered, deterministic iteration
//! - Undirected [`Hypergraph`](classes::Hypergraph) with multi-edges and an
//!   empty-edge policy
//! - [`DiHypergraph`](classes::DiHypergraph) with tail/head split edges
//! - [`SimplicialComplex`](classes::SimplicialComplex) that keeps itself closed
//!   under subsets, including cascading removal
//! - Filterable, set-composable node and edge views
//! - Lazily computed per-id statistics with aggregates
//! - Export to edge lists, dictionaries, bipartite pairs and incidence matrices
//!
//! ## Determinism
//!
//! Every iteration follows insertion order, and removals keep the relative order
//! of what remains. Given the same sequence of calls, two runs produce identical
//! ids, views and exports.
//!
//! ## Invariant checking
//!
//! Every mutator re-validates the incidence duality in debug builds. Enable the
//! `strict-invariants` or `check-invariants` feature to keep those checks in
//! release builds:
//!
//! ```toml
//! [dependencies]
//! hyper-sieve = { version = "0.3", features = ["check-invariants"] }
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use hyper_sieve::prelude::*;
//!
//! let mut h = Hypergraph::from_edge_list([vec![1, 2, 3], vec![2, 3]]).unwrap();
//! assert_eq!(h.nodes().memberships(&Id::from(2)).unwrap().len(), 2);
//!
//! h.remove_node(&Id::from(1), false).unwrap();
//! assert_eq!(to_edge_list(&h), vec![vec![Id::from(2), Id::from(3)]; 2]);
//! ```

pub mod classes;
pub mod convert;
pub mod debug_invariants;
pub mod incidence;
pub mod incidence_error;
pub mod stats;
pub mod views;

pub use debug_invariants::DebugInvariants;
pub use incidence_error::IncidenceError;

/// A convenient prelude to import the most-used traits & types:
pub mod prelude {
    pub use crate::classes::{
        CleanupOptions, DiEdgeSpec, DiHypergraph, DiHypergraphInput, EdgeSpec, Hypergraph,
        HypergraphInput, HypergraphOptions, Insert, MergeOptions, MergeRename, MergeRule,
        SimplicialComplex, SimplicialOptions,
    };
    pub use crate::convert::{
        IncidenceMatrix, incidence_matrix, to_bipartite_edges, to_directed_edge_dict,
        to_directed_edge_list, to_edge_dict, to_edge_list,
    };
    pub use crate::debug_invariants::DebugInvariants;
    pub use crate::incidence::{AttrUpdate, Attrs, Id, IncidenceStore, Side, Value, attrs_from};
    pub use crate::incidence_error::IncidenceError;
    pub use crate::stats::{DiEdgeStat, DiNodeStat, EdgeStat, MultiStat, NodeStat, Stat, StatKind};
    pub use crate::views::{DiEdgeView, DiNodeView, EdgeView, FilterMode, IdView, NodeView};
}
