//! Edge-specific queries on [`EdgeView`] and [`DiEdgeView`].

use indexmap::{IndexMap, IndexSet};

use super::id_view::IdView;
use super::namespace::{DiEdges, Edges, Namespace};
use crate::incidence::id::Id;
use crate::incidence::store::IncidenceStore;
use crate::incidence_error::IncidenceError;
use crate::stats::{DiEdgeStat, EdgeStat, Stat};

/// View over the edges of an undirected container.
pub type EdgeView<'a> = IdView<'a, Edges<'a>>;
/// View over the edges of a directed container.
pub type DiEdgeView<'a> = IdView<'a, DiEdges<'a>>;

impl<'a> IdView<'a, Edges<'a>> {
    /// Member node ids of `id`.
    pub fn members(&self, id: &Id) -> Result<IndexSet<Id>, IncidenceError> {
        self.incident(id)
    }

    pub fn members_map(&self) -> IndexMap<Id, IndexSet<Id>> {
        let store = self.namespace().store();
        self.iter()
            .map(|e| (e.clone(), store.members(e).cloned().collect()))
            .collect()
    }

    /// Member sets in view order.
    pub fn members_list(&self) -> Vec<IndexSet<Id>> {
        let store = self.namespace().store();
        self.iter()
            .map(|e| store.members(e).cloned().collect())
            .collect()
    }

    /// Edges with exactly one member.
    pub fn singletons(&self) -> Self {
        let store = self.namespace().store();
        self.filter_ids(|e| store.edge_size(e) == 1)
    }

    /// Edges with no members.
    pub fn empty(&self) -> Self {
        let store = self.namespace().store();
        self.filter_ids(|e| store.edge_size(e) == 0)
    }

    /// Edges not strictly contained in another edge.
    ///
    /// An edge is maximal when every edge containing all of its members has
    /// the same member set. With `strict`, no other edge may contain them at
    /// all, so multi-edges are never maximal. Empty edges are maximal only in
    /// a container whose edges are all empty.
    pub fn maximal(&self, strict: bool) -> Self {
        let store = self.namespace().store();
        let all_empty = store.edge_ids().all(|e| store.edge_size(e) == 0);
        self.filter_ids(|e| {
            let members: Vec<&Id> = store.members(e).collect();
            let Some((first, rest)) = members.split_first() else {
                return all_empty && (!strict || store.num_edges() == 1);
            };
            let mut supersets: IndexSet<&Id> = store.memberships(first).collect();
            for n in rest {
                let m: IndexSet<&Id> = store.memberships(n).collect();
                supersets.retain(|s| m.contains(s));
            }
            if strict {
                supersets.len() == 1
            } else {
                supersets.iter().all(|s| store.edge_size(s) == members.len())
            }
        })
    }

    pub fn order(&self) -> Stat<'a, Edges<'a>> {
        self.stat(EdgeStat::order())
    }

    pub fn size(&self) -> Stat<'a, Edges<'a>> {
        self.stat(EdgeStat::size())
    }
}

impl<'a> IdView<'a, DiEdges<'a>> {
    /// Tail and head together, each node once.
    pub fn members(&self, id: &Id) -> Result<IndexSet<Id>, IncidenceError> {
        self.incident(id)
    }

    pub fn tail(&self, id: &Id) -> Result<IndexSet<Id>, IncidenceError> {
        Ok(self.dimembers(id)?.0)
    }

    pub fn head(&self, id: &Id) -> Result<IndexSet<Id>, IncidenceError> {
        Ok(self.dimembers(id)?.1)
    }

    /// `(tail, head)` of `id`.
    pub fn dimembers(&self, id: &Id) -> Result<(IndexSet<Id>, IndexSet<Id>), IncidenceError> {
        self.check(id)?;
        let rec = self
            .namespace()
            .store()
            .edge(id)
            .ok_or_else(|| IncidenceError::EdgeNotFound(id.clone()))?;
        Ok((rec.tail().clone(), rec.head().clone()))
    }

    pub fn members_map(&self) -> IndexMap<Id, IndexSet<Id>> {
        let store = self.namespace().store();
        self.iter()
            .map(|e| (e.clone(), store.members(e).cloned().collect()))
            .collect()
    }

    pub fn dimembers_map(&self) -> IndexMap<Id, (IndexSet<Id>, IndexSet<Id>)> {
        let store = self.namespace().store();
        self.iter()
            .filter_map(|e| {
                store
                    .edge(e)
                    .map(|r| (e.clone(), (r.tail().clone(), r.head().clone())))
            })
            .collect()
    }

    pub fn order(&self) -> Stat<'a, DiEdges<'a>> {
        self.stat(DiEdgeStat::order())
    }

    pub fn size(&self) -> Stat<'a, DiEdges<'a>> {
        self.stat(DiEdgeStat::size())
    }

    pub fn tail_order(&self) -> Stat<'a, DiEdges<'a>> {
        self.stat(DiEdgeStat::TailOrder { degree: None })
    }

    pub fn tail_size(&self) -> Stat<'a, DiEdges<'a>> {
        self.stat(DiEdgeStat::TailSize { degree: None })
    }

    pub fn head_order(&self) -> Stat<'a, DiEdges<'a>> {
        self.stat(DiEdgeStat::HeadOrder { degree: None })
    }

    pub fn head_size(&self) -> Stat<'a, DiEdges<'a>> {
        self.stat(DiEdgeStat::HeadSize { degree: None })
    }
}
