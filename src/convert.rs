//! Export primitives: plain Rust data out of any incidence store.
//!
//! The undirected exports take any [`IncidenceStore`], so they work on
//! `Hypergraph`, `SimplicialComplex` and (forgetting directions)
//! `DiHypergraph` alike.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::incidence::id::Id;
use crate::incidence::store::{DiHyperStore, IncidenceStore};

/// Member lists in edge order.
pub fn to_edge_list<S: IncidenceStore + ?Sized>(store: &S) -> Vec<Vec<Id>> {
    store
        .edge_ids()
        .map(|e| store.members(e).cloned().collect())
        .collect()
}

/// Edge id → member list.
pub fn to_edge_dict<S: IncidenceStore + ?Sized>(store: &S) -> IndexMap<Id, Vec<Id>> {
    store
        .edge_ids()
        .map(|e| (e.clone(), store.members(e).cloned().collect()))
        .collect()
}

/// `(node, edge)` incidence pairs, edge by edge.
pub fn to_bipartite_edges<S: IncidenceStore + ?Sized>(store: &S) -> Vec<(Id, Id)> {
    store
        .edge_ids()
        .flat_map(|e| store.members(e).map(move |n| (n.clone(), e.clone())))
        .collect()
}

/// Sparse node × edge incidence matrix with the ids behind each row/column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncidenceMatrix {
    /// Row `i` is node `node_ids[i]`.
    pub node_ids: Vec<Id>,
    /// Column `j` is edge `edge_ids[j]`.
    pub edge_ids: Vec<Id>,
    /// Nonzero `(row, col)` entries, column-major.
    pub entries: Vec<(usize, usize)>,
}

impl IncidenceMatrix {
    /// `(rows, cols)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.node_ids.len(), self.edge_ids.len())
    }

    /// Dense `0/1` rows.
    pub fn to_dense(&self) -> Vec<Vec<i64>> {
        let (rows, cols) = self.shape();
        let mut dense = vec![vec![0; cols]; rows];
        for &(r, c) in &self.entries {
            dense[r][c] = 1;
        }
        dense
    }

    /// Row index → node id.
    pub fn node_index(&self) -> IndexMap<usize, Id> {
        self.node_ids.iter().cloned().enumerate().collect()
    }

    /// Column index → edge id.
    pub fn edge_index(&self) -> IndexMap<usize, Id> {
        self.edge_ids.iter().cloned().enumerate().collect()
    }
}

pub fn incidence_matrix<S: IncidenceStore + ?Sized>(store: &S) -> IncidenceMatrix {
    let rows: IndexMap<&Id, usize> = store.node_ids().enumerate().map(|(i, n)| (n, i)).collect();
    let mut entries = Vec::new();
    let mut edge_ids = Vec::with_capacity(store.num_edges());
    for (c, e) in store.edge_ids().enumerate() {
        edge_ids.push(e.clone());
        entries.extend(store.members(e).filter_map(|n| rows.get(n).map(|&r| (r, c))));
    }
    IncidenceMatrix {
        node_ids: rows.keys().map(|n| (*n).clone()).collect(),
        edge_ids,
        entries,
    }
}

/// `(tail, head)` lists in edge order.
pub fn to_directed_edge_list(store: &DiHyperStore) -> Vec<(Vec<Id>, Vec<Id>)> {
    store
        .edge_records()
        .map(|(_, r)| {
            (
                r.tail().iter().cloned().collect(),
                r.head().iter().cloned().collect(),
            )
        })
        .collect()
}

/// Edge id → `(tail, head)`.
pub fn to_directed_edge_dict(store: &DiHyperStore) -> IndexMap<Id, (Vec<Id>, Vec<Id>)> {
    store
        .edge_records()
        .map(|(e, r)| {
            (
                e.clone(),
                (
                    r.tail().iter().cloned().collect(),
                    r.head().iter().cloned().collect(),
                ),
            )
        })
        .collect()
}
