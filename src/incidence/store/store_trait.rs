//! Core read trait for incidence stores.
//!
//! This module defines the [`IncidenceStore`] trait: the read-only contract that
//! views, statistics, exporters and external algorithms consume. Both the
//! undirected [`HyperStore`](super::HyperStore) and the directed
//! [`DiHyperStore`](super::DiHyperStore) implement it, and every container
//! delegates to the store it wraps.

use indexmap::IndexMap;
use indexmap::IndexSet;

use crate::incidence::attrs::Attrs;
use crate::incidence::id::Id;

/// Bipartite incidence relation between nodes and edges.
///
/// - **Forward** incidence (`memberships`): the edges a node belongs to.
/// - **Backward** incidence (`members`): the nodes an edge contains.
///
/// For directed stores both directions are the union of the tail and head
/// sides, each id reported once.
pub trait IncidenceStore {
    fn num_nodes(&self) -> usize;
    fn num_edges(&self) -> usize;
    fn has_node(&self, id: &Id) -> bool;
    fn has_edge(&self, id: &Id) -> bool;

    /// All node ids in insertion order.
    fn node_ids<'a>(&'a self) -> Box<dyn Iterator<Item = &'a Id> + 'a>;
    /// All edge ids in insertion order.
    fn edge_ids<'a>(&'a self) -> Box<dyn Iterator<Item = &'a Id> + 'a>;

    fn node_attrs(&self, id: &Id) -> Option<&Attrs>;
    fn edge_attrs(&self, id: &Id) -> Option<&Attrs>;

    /// Edges incident to `node`; empty if the node is absent.
    fn memberships<'a>(&'a self, node: &Id) -> Box<dyn Iterator<Item = &'a Id> + 'a>;
    /// Nodes of `edge`; empty if the edge is absent.
    fn members<'a>(&'a self, edge: &Id) -> Box<dyn Iterator<Item = &'a Id> + 'a>;

    /// Number of edges incident to `node`.
    fn degree(&self, node: &Id) -> usize {
        self.memberships(node).count()
    }

    /// Number of nodes in `edge`.
    fn edge_size(&self, edge: &Id) -> usize {
        self.members(edge).count()
    }

    /// Nodes sharing at least `s` edges with `node` (excluding `node`).
    fn node_neighbors(&self, node: &Id, s: usize) -> IndexSet<Id> {
        let mut shared: IndexMap<&Id, usize> = IndexMap::new();
        for e in self.memberships(node) {
            for n in self.members(e) {
                if n != node {
                    *shared.entry(n).or_insert(0) += 1;
                }
            }
        }
        shared
            .into_iter()
            .filter(|(_, c)| *c >= s)
            .map(|(n, _)| n.clone())
            .collect()
    }

    /// Edges sharing at least `s` nodes with `edge` (excluding `edge`).
    fn edge_neighbors(&self, edge: &Id, s: usize) -> IndexSet<Id> {
        let mut shared: IndexMap<&Id, usize> = IndexMap::new();
        for n in self.members(edge) {
            for e in self.memberships(n) {
                if e != edge {
                    *shared.entry(e).or_insert(0) += 1;
                }
            }
        }
        shared
            .into_iter()
            .filter(|(_, c)| *c >= s)
            .map(|(e, _)| e.clone())
            .collect()
    }
}

/// Implement [`IncidenceStore`] for a container by forwarding to one of its fields.
macro_rules! delegate_incidence_store {
    ($ty:ty, $field:ident) => {
        impl $crate::incidence::store::IncidenceStore for $ty {
            fn num_nodes(&self) -> usize {
                $crate::incidence::store::IncidenceStore::num_nodes(&self.$field)
            }
            fn num_edges(&self) -> usize {
                $crate::incidence::store::IncidenceStore::num_edges(&self.$field)
            }
            fn has_node(&self, id: &$crate::incidence::id::Id) -> bool {
                $crate::incidence::store::IncidenceStore::has_node(&self.$field, id)
            }
            fn has_edge(&self, id: &$crate::incidence::id::Id) -> bool {
                $crate::incidence::store::IncidenceStore::has_edge(&self.$field, id)
            }
            fn node_ids<'a>(
                &'a self,
            ) -> Box<dyn Iterator<Item = &'a $crate::incidence::id::Id> + 'a> {
                $crate::incidence::store::IncidenceStore::node_ids(&self.$field)
            }
            fn edge_ids<'a>(
                &'a self,
            ) -> Box<dyn Iterator<Item = &'a $crate::incidence::id::Id> + 'a> {
                $crate::incidence::store::IncidenceStore::edge_ids(&self.$field)
            }
            fn node_attrs(
                &self,
                id: &$crate::incidence::id::Id,
            ) -> Option<&$crate::incidence::attrs::Attrs> {
                $crate::incidence::store::IncidenceStore::node_attrs(&self.$field, id)
            }
            fn edge_attrs(
                &self,
                id: &$crate::incidence::id::Id,
            ) -> Option<&$crate::incidence::attrs::Attrs> {
                $crate::incidence::store::IncidenceStore::edge_attrs(&self.$field, id)
            }
            fn memberships<'a>(
                &'a self,
                node: &$crate::incidence::id::Id,
            ) -> Box<dyn Iterator<Item = &'a $crate::incidence::id::Id> + 'a> {
                $crate::incidence::store::IncidenceStore::memberships(&self.$field, node)
            }
            fn members<'a>(
                &'a self,
                edge: &$crate::incidence::id::Id,
            ) -> Box<dyn Iterator<Item = &'a $crate::incidence::id::Id> + 'a> {
                $crate::incidence::store::IncidenceStore::members(&self.$field, edge)
            }
            fn degree(&self, node: &$crate::incidence::id::Id) -> usize {
                $crate::incidence::store::IncidenceStore::degree(&self.$field, node)
            }
            fn edge_size(&self, edge: &$crate::incidence::id::Id) -> usize {
                $crate::incidence::store::IncidenceStore::edge_size(&self.$field, edge)
            }
        }
    };
}

pub(crate) use delegate_incidence_store;
