//! Tagged construction inputs, one loader per variant.

use indexmap::IndexMap;

use crate::incidence::id::Id;
use crate::incidence::store::Side;

/// Raw data a [`Hypergraph`](super::Hypergraph) can be built from.
#[derive(Debug, Clone, PartialEq)]
pub enum HypergraphInput {
    /// One member list per edge; edges get counter ids `0, 1, …`.
    EdgeList(Vec<Vec<Id>>),
    /// Edge id → member list.
    EdgeDict(IndexMap<Id, Vec<Id>>),
    /// `(node, edge)` incidence pairs.
    Bipartite(Vec<(Id, Id)>),
    /// Dense node × edge matrix; a nonzero entry is a membership. Rows become
    /// node ids `0..rows`, columns edge ids `0..cols`.
    Incidence(Vec<Vec<i64>>),
    /// Sparse node × edge matrix as `(row, col)` entries.
    SparseIncidence {
        num_nodes: usize,
        num_edges: usize,
        entries: Vec<(usize, usize)>,
    },
}

/// Raw data a [`DiHypergraph`](super::DiHypergraph) can be built from.
#[derive(Debug, Clone, PartialEq)]
pub enum DiHypergraphInput {
    /// One `(tail, head)` pair per edge.
    EdgeList(Vec<(Vec<Id>, Vec<Id>)>),
    /// Edge id → `(tail, head)`.
    EdgeDict(IndexMap<Id, (Vec<Id>, Vec<Id>)>),
    /// `(node, edge, side)` incidence triples.
    Bipartite(Vec<(Id, Id, Side)>),
}
