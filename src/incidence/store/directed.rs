//! In-memory directed incidence store.
//!
//! Each edge splits its members into a tail and a head; each node tracks the
//! edges it leaves (`out_edges`, node in tail) and the edges it enters
//! (`in_edges`, node in head). The undirected read contract sees the union of
//! both sides.

use indexmap::{IndexMap, IndexSet};

use super::store_trait::IncidenceStore;
use crate::debug_invariants::{DebugInvariants, violation};
use crate::incidence::attrs::{AttrUpdate, Attrs, Record, Value, apply_update, project};
use crate::incidence::id::Id;
use crate::incidence_error::IncidenceError;

/// Which side of a directed edge a node sits on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Side {
    Tail,
    Head,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DiNodeRecord {
    pub(crate) attrs: Attrs,
    /// Edges whose tail contains this node.
    pub(crate) out_edges: IndexSet<Id>,
    /// Edges whose head contains this node.
    pub(crate) in_edges: IndexSet<Id>,
}

impl DiNodeRecord {
    pub fn attrs(&self) -> &Attrs {
        &self.attrs
    }
    pub fn out_edges(&self) -> &IndexSet<Id> {
        &self.out_edges
    }
    pub fn in_edges(&self) -> &IndexSet<Id> {
        &self.in_edges
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DiEdgeRecord {
    pub(crate) attrs: Attrs,
    pub(crate) tail: IndexSet<Id>,
    pub(crate) head: IndexSet<Id>,
}

impl DiEdgeRecord {
    pub fn attrs(&self) -> &Attrs {
        &self.attrs
    }
    pub fn tail(&self) -> &IndexSet<Id> {
        &self.tail
    }
    pub fn head(&self) -> &IndexSet<Id> {
        &self.head
    }
    /// Tail then head, each node once.
    pub fn members(&self) -> IndexSet<Id> {
        self.tail.union(&self.head).cloned().collect()
    }
    pub fn is_empty(&self) -> bool {
        self.tail.is_empty() && self.head.is_empty()
    }
}

impl Record for DiNodeRecord {
    fn attrs(&self) -> &Attrs {
        &self.attrs
    }
    fn attrs_mut(&mut self) -> &mut Attrs {
        &mut self.attrs
    }
}

impl Record for DiEdgeRecord {
    fn attrs(&self) -> &Attrs {
        &self.attrs
    }
    fn attrs_mut(&mut self) -> &mut Attrs {
        &mut self.attrs
    }
}

/// Directed incidence store.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DiHyperStore {
    pub(crate) nodes: IndexMap<Id, DiNodeRecord>,
    pub(crate) edges: IndexMap<Id, DiEdgeRecord>,
}

impl DiHyperStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn node(&self, id: &Id) -> Option<&DiNodeRecord> {
        self.nodes.get(id)
    }

    pub fn edge(&self, id: &Id) -> Option<&DiEdgeRecord> {
        self.edges.get(id)
    }

    pub fn node_records(&self) -> impl Iterator<Item = (&Id, &DiNodeRecord)> + '_ {
        self.nodes.iter()
    }

    pub fn edge_records(&self) -> impl Iterator<Item = (&Id, &DiEdgeRecord)> + '_ {
        self.edges.iter()
    }

    /// Edges entering `node` (node in head).
    pub fn in_memberships<'a>(&'a self, node: &Id) -> Box<dyn Iterator<Item = &'a Id> + 'a> {
        match self.nodes.get(node) {
            Some(r) => Box::new(r.in_edges.iter()),
            None => Box::new(std::iter::empty()),
        }
    }

    /// Edges leaving `node` (node in tail).
    pub fn out_memberships<'a>(&'a self, node: &Id) -> Box<dyn Iterator<Item = &'a Id> + 'a> {
        match self.nodes.get(node) {
            Some(r) => Box::new(r.out_edges.iter()),
            None => Box::new(std::iter::empty()),
        }
    }

    pub fn in_degree(&self, node: &Id) -> usize {
        self.nodes.get(node).map_or(0, |r| r.in_edges.len())
    }

    pub fn out_degree(&self, node: &Id) -> usize {
        self.nodes.get(node).map_or(0, |r| r.out_edges.len())
    }

    pub fn tail_size(&self, edge: &Id) -> usize {
        self.edges.get(edge).map_or(0, |r| r.tail.len())
    }

    pub fn head_size(&self, edge: &Id) -> usize {
        self.edges.get(edge).map_or(0, |r| r.head.len())
    }

    pub fn node_attribute(&self, name: &str) -> IndexMap<Id, Value> {
        project(&self.nodes, name)
    }

    pub fn edge_attribute(&self, name: &str) -> IndexMap<Id, Value> {
        project(&self.edges, name)
    }

    // ---------- mutators ----------

    pub(crate) fn upsert_node(&mut self, id: Id, attrs: Attrs) {
        self.nodes.entry(id).or_default().attrs.extend(attrs);
    }

    /// Insert a new directed edge; `id` must be free.
    pub(crate) fn insert_edge(
        &mut self,
        id: Id,
        tail: IndexSet<Id>,
        head: IndexSet<Id>,
        attrs: Attrs,
    ) {
        debug_assert!(!self.edges.contains_key(&id), "edge id reused: {id:?}");
        for n in &tail {
            self.nodes
                .entry(n.clone())
                .or_default()
                .out_edges
                .insert(id.clone());
        }
        for n in &head {
            self.nodes
                .entry(n.clone())
                .or_default()
                .in_edges
                .insert(id.clone());
        }
        self.edges.insert(id, DiEdgeRecord { attrs, tail, head });
    }

    /// Add `node` to one side of an existing edge.
    pub(crate) fn link(&mut self, edge: &Id, node: Id, side: Side) {
        let Some(rec) = self.edges.get_mut(edge) else {
            return;
        };
        let n = self.nodes.entry(node.clone()).or_default();
        match side {
            Side::Tail => {
                rec.tail.insert(node);
                n.out_edges.insert(edge.clone());
            }
            Side::Head => {
                rec.head.insert(node);
                n.in_edges.insert(edge.clone());
            }
        }
    }

    /// Take `node` off one side of `edge`; false if it was not there.
    pub(crate) fn unlink(&mut self, edge: &Id, node: &Id, side: Side) -> bool {
        let Some(rec) = self.edges.get_mut(edge) else {
            return false;
        };
        let removed = match side {
            Side::Tail => rec.tail.shift_remove(node),
            Side::Head => rec.head.shift_remove(node),
        };
        // the node may still sit on the other side
        if removed {
            if let Some(n) = self.nodes.get_mut(node) {
                match side {
                    Side::Tail => n.out_edges.shift_remove(edge),
                    Side::Head => n.in_edges.shift_remove(edge),
                };
            }
        }
        removed
    }

    pub(crate) fn remove_edge(&mut self, id: &Id) -> Option<DiEdgeRecord> {
        let rec = self.edges.shift_remove(id)?;
        for n in &rec.tail {
            if let Some(node) = self.nodes.get_mut(n) {
                node.out_edges.shift_remove(id);
            }
        }
        for n in &rec.head {
            if let Some(node) = self.nodes.get_mut(n) {
                node.in_edges.shift_remove(id);
            }
        }
        Some(rec)
    }

    /// Strip `id` from both sides of every incident edge, deleting edges whose
    /// sides are both left empty.
    pub(crate) fn remove_node_weak(&mut self, id: &Id) -> Option<DiNodeRecord> {
        let rec = self.nodes.shift_remove(id)?;
        for e in rec.out_edges.union(&rec.in_edges) {
            let emptied = match self.edges.get_mut(e) {
                Some(edge) => {
                    edge.tail.shift_remove(id);
                    edge.head.shift_remove(id);
                    edge.is_empty()
                }
                None => false,
            };
            if emptied {
                self.edges.shift_remove(e);
            }
        }
        Some(rec)
    }

    /// Delete `id` and every edge touching it on either side.
    pub(crate) fn remove_node_strong(&mut self, id: &Id) -> Option<DiNodeRecord> {
        let rec = self.nodes.get(id)?;
        let incident: Vec<Id> = rec.out_edges.union(&rec.in_edges).cloned().collect();
        for e in &incident {
            self.remove_edge(e);
        }
        self.nodes.shift_remove(id)
    }

    pub(crate) fn update_node_attrs(&mut self, update: AttrUpdate) {
        apply_update(&mut self.nodes, update, "node");
    }

    pub(crate) fn update_edge_attrs(&mut self, update: AttrUpdate) {
        apply_update(&mut self.edges, update, "edge");
    }

    pub(crate) fn clear(&mut self) {
        self.nodes.clear();
        self.edges.clear();
    }
}

impl IncidenceStore for DiHyperStore {
    fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    fn num_edges(&self) -> usize {
        self.edges.len()
    }

    fn has_node(&self, id: &Id) -> bool {
        self.nodes.contains_key(id)
    }

    fn has_edge(&self, id: &Id) -> bool {
        self.edges.contains_key(id)
    }

    fn node_ids<'a>(&'a self) -> Box<dyn Iterator<Item = &'a Id> + 'a> {
        Box::new(self.nodes.keys())
    }

    fn edge_ids<'a>(&'a self) -> Box<dyn Iterator<Item = &'a Id> + 'a> {
        Box::new(self.edges.keys())
    }

    fn node_attrs(&self, id: &Id) -> Option<&Attrs> {
        self.nodes.get(id).map(|r| &r.attrs)
    }

    fn edge_attrs(&self, id: &Id) -> Option<&Attrs> {
        self.edges.get(id).map(|r| &r.attrs)
    }

    fn memberships<'a>(&'a self, node: &Id) -> Box<dyn Iterator<Item = &'a Id> + 'a> {
        match self.nodes.get(node) {
            Some(r) => Box::new(r.out_edges.union(&r.in_edges)),
            None => Box::new(std::iter::empty()),
        }
    }

    fn members<'a>(&'a self, edge: &Id) -> Box<dyn Iterator<Item = &'a Id> + 'a> {
        match self.edges.get(edge) {
            Some(r) => Box::new(r.tail.union(&r.head)),
            None => Box::new(std::iter::empty()),
        }
    }
}

impl DebugInvariants for DiHyperStore {
    fn validate_invariants(&self) -> Result<(), IncidenceError> {
        for (e, rec) in &self.edges {
            for n in &rec.tail {
                if !self.nodes.get(n).is_some_and(|r| r.out_edges.contains(e)) {
                    return Err(violation(format!(
                        "edge {e:?} has {n:?} in its tail but the node has no out-edge for it"
                    )));
                }
            }
            for n in &rec.head {
                if !self.nodes.get(n).is_some_and(|r| r.in_edges.contains(e)) {
                    return Err(violation(format!(
                        "edge {e:?} has {n:?} in its head but the node has no in-edge for it"
                    )));
                }
            }
        }
        for (n, rec) in &self.nodes {
            for e in &rec.out_edges {
                if !self.edges.get(e).is_some_and(|r| r.tail.contains(n)) {
                    return Err(violation(format!(
                        "node {n:?} lists out-edge {e:?} which lacks it in its tail"
                    )));
                }
            }
            for e in &rec.in_edges {
                if !self.edges.get(e).is_some_and(|r| r.head.contains(n)) {
                    return Err(violation(format!(
                        "node {n:?} lists in-edge {e:?} which lacks it in its head"
                    )));
                }
            }
        }
        Ok(())
    }
}
