//! Node-specific queries on [`NodeView`] and [`DiNodeView`].

use indexmap::{IndexMap, IndexSet};

use super::id_view::IdView;
use super::namespace::{DiNodes, Namespace, Nodes};
use crate::incidence::id::Id;
use crate::incidence::store::IncidenceStore;
use crate::incidence_error::IncidenceError;
use crate::stats::{DiNodeStat, NodeStat, Stat};

/// View over the nodes of an undirected container.
pub type NodeView<'a> = IdView<'a, Nodes<'a>>;
/// View over the nodes of a directed container.
pub type DiNodeView<'a> = IdView<'a, DiNodes<'a>>;

impl<'a> IdView<'a, Nodes<'a>> {
    /// Edge ids containing `id`.
    pub fn memberships(&self, id: &Id) -> Result<IndexSet<Id>, IncidenceError> {
        self.incident(id)
    }

    /// Node → memberships for every node of the view.
    pub fn memberships_map(&self) -> IndexMap<Id, IndexSet<Id>> {
        let store = self.namespace().store();
        self.iter()
            .map(|n| (n.clone(), store.memberships(n).cloned().collect()))
            .collect()
    }

    /// Nodes that belong to no edge.
    ///
    /// With `ignore_singletons`, membership in single-node edges does not count.
    pub fn isolates(&self, ignore_singletons: bool) -> Self {
        let store = self.namespace().store();
        let counted = |e: &Id| !ignore_singletons || store.edge_size(e) > 1;
        self.filter_ids(|n| !store.memberships(n).any(|e| counted(e)))
    }

    pub fn degree(&self) -> Stat<'a, Nodes<'a>> {
        self.stat(NodeStat::degree())
    }

    pub fn average_neighbor_degree(&self) -> Stat<'a, Nodes<'a>> {
        self.stat(NodeStat::AverageNeighborDegree)
    }
}

impl<'a> IdView<'a, DiNodes<'a>> {
    /// Edge ids with `id` on either side.
    pub fn memberships(&self, id: &Id) -> Result<IndexSet<Id>, IncidenceError> {
        self.incident(id)
    }

    /// Edge ids with `id` in their head.
    pub fn in_memberships(&self, id: &Id) -> Result<IndexSet<Id>, IncidenceError> {
        self.check(id)?;
        Ok(self.namespace().store().in_memberships(id).cloned().collect())
    }

    /// Edge ids with `id` in their tail.
    pub fn out_memberships(&self, id: &Id) -> Result<IndexSet<Id>, IncidenceError> {
        self.check(id)?;
        Ok(self.namespace().store().out_memberships(id).cloned().collect())
    }

    pub fn memberships_map(&self) -> IndexMap<Id, IndexSet<Id>> {
        let store = self.namespace().store();
        self.iter()
            .map(|n| (n.clone(), store.memberships(n).cloned().collect()))
            .collect()
    }

    /// Nodes on neither side of any edge.
    pub fn isolates(&self) -> Self {
        let store = self.namespace().store();
        self.filter_ids(|n| store.degree(n) == 0)
    }

    pub fn degree(&self) -> Stat<'a, DiNodes<'a>> {
        self.stat(DiNodeStat::degree())
    }

    pub fn in_degree(&self) -> Stat<'a, DiNodes<'a>> {
        self.stat(DiNodeStat::in_degree())
    }

    pub fn out_degree(&self) -> Stat<'a, DiNodes<'a>> {
        self.stat(DiNodeStat::out_degree())
    }
}
