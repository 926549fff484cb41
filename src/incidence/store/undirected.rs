//! In-memory undirected incidence store.
//!
//! [`HyperStore`] keeps two insertion-ordered maps, node → incident edges and
//! edge → member nodes, and every mutator updates both sides in the same call.
//! Containers own a store and put policy (empty edges, id allocation, freezing)
//! on top; the store itself only guarantees the duality.

use indexmap::{IndexMap, IndexSet};

use super::store_trait::IncidenceStore;
use crate::debug_invariants::{DebugInvariants, violation};
use crate::incidence::attrs::{AttrUpdate, Attrs, Record, Value, apply_update, project};
use crate::incidence::id::Id;
use crate::incidence_error::IncidenceError;

/// A node: its attributes and the edges it belongs to.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NodeRecord {
    pub(crate) attrs: Attrs,
    pub(crate) edges: IndexSet<Id>,
}

impl NodeRecord {
    pub fn attrs(&self) -> &Attrs {
        &self.attrs
    }
    pub fn edges(&self) -> &IndexSet<Id> {
        &self.edges
    }
}

/// An edge: its attributes and member nodes.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EdgeRecord {
    pub(crate) attrs: Attrs,
    pub(crate) members: IndexSet<Id>,
}

impl EdgeRecord {
    pub fn attrs(&self) -> &Attrs {
        &self.attrs
    }
    pub fn members(&self) -> &IndexSet<Id> {
        &self.members
    }
}

impl Record for NodeRecord {
    fn attrs(&self) -> &Attrs {
        &self.attrs
    }
    fn attrs_mut(&mut self) -> &mut Attrs {
        &mut self.attrs
    }
}

impl Record for EdgeRecord {
    fn attrs(&self) -> &Attrs {
        &self.attrs
    }
    fn attrs_mut(&mut self) -> &mut Attrs {
        &mut self.attrs
    }
}

/// Undirected incidence store with mirrored node and edge maps.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HyperStore {
    /// Node → record (attributes + incident edge ids).
    pub(crate) nodes: IndexMap<Id, NodeRecord>,
    /// Edge → record (attributes + member node ids).
    pub(crate) edges: IndexMap<Id, EdgeRecord>,
}

impl HyperStore {
    /// Creates a new, empty `HyperStore`.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn node(&self, id: &Id) -> Option<&NodeRecord> {
        self.nodes.get(id)
    }

    pub fn edge(&self, id: &Id) -> Option<&EdgeRecord> {
        self.edges.get(id)
    }

    /// Incident edge ids of `node`, or `None` if the node is absent.
    pub fn node_memberships(&self, node: &Id) -> Option<&IndexSet<Id>> {
        self.nodes.get(node).map(|r| &r.edges)
    }

    /// Member node ids of `edge`, or `None` if the edge is absent.
    pub fn edge_members(&self, edge: &Id) -> Option<&IndexSet<Id>> {
        self.edges.get(edge).map(|r| &r.members)
    }

    pub fn node_records(&self) -> impl Iterator<Item = (&Id, &NodeRecord)> + '_ {
        self.nodes.iter()
    }

    pub fn edge_records(&self) -> impl Iterator<Item = (&Id, &EdgeRecord)> + '_ {
        self.edges.iter()
    }

    /// Node attribute `name` for every node that carries it.
    pub fn node_attribute(&self, name: &str) -> IndexMap<Id, Value> {
        project(&self.nodes, name)
    }

    /// Edge attribute `name` for every edge that carries it.
    pub fn edge_attribute(&self, name: &str) -> IndexMap<Id, Value> {
        project(&self.edges, name)
    }

    /// The dual store: every edge becomes a node and vice versa.
    pub fn dual(&self) -> HyperStore {
        HyperStore {
            nodes: self
                .edges
                .iter()
                .map(|(id, e)| {
                    let rec = NodeRecord {
                        attrs: e.attrs.clone(),
                        edges: e.members.clone(),
                    };
                    (id.clone(), rec)
                })
                .collect(),
            edges: self
                .nodes
                .iter()
                .map(|(id, n)| {
                    let rec = EdgeRecord {
                        attrs: n.attrs.clone(),
                        members: n.edges.clone(),
                    };
                    (id.clone(), rec)
                })
                .collect(),
        }
    }

    // ---------- mutators (callers enforce policy and freezing) ----------

    /// Create `id` if absent, then merge `attrs` into its attributes.
    pub(crate) fn upsert_node(&mut self, id: Id, attrs: Attrs) {
        self.nodes.entry(id).or_default().attrs.extend(attrs);
    }

    /// Insert a new edge; `id` must be free. Member nodes are created on demand.
    pub(crate) fn insert_edge(&mut self, id: Id, members: IndexSet<Id>, attrs: Attrs) {
        debug_assert!(!self.edges.contains_key(&id), "edge id reused: {id:?}");
        for n in &members {
            self.nodes.entry(n.clone()).or_default().edges.insert(id.clone());
        }
        self.edges.insert(id, EdgeRecord { attrs, members });
    }

    /// Add `node` to the existing edge `edge`, creating the node if needed.
    pub(crate) fn link(&mut self, edge: &Id, node: Id) {
        if let Some(rec) = self.edges.get_mut(edge) {
            rec.members.insert(node.clone());
            self.nodes.entry(node).or_default().edges.insert(edge.clone());
        }
    }

    /// Remove one membership; returns whether it existed.
    pub(crate) fn unlink(&mut self, edge: &Id, node: &Id) -> bool {
        let removed = self
            .edges
            .get_mut(edge)
            .is_some_and(|rec| rec.members.shift_remove(node));
        if removed {
            if let Some(rec) = self.nodes.get_mut(node) {
                rec.edges.shift_remove(edge);
            }
        }
        removed
    }

    /// Delete an edge and scrub it from its members' incidence sets.
    pub(crate) fn remove_edge(&mut self, id: &Id) -> Option<EdgeRecord> {
        let rec = self.edges.shift_remove(id)?;
        for n in &rec.members {
            if let Some(node) = self.nodes.get_mut(n) {
                node.edges.shift_remove(id);
            }
        }
        Some(rec)
    }

    /// Delete a node and strip it from every incident edge.
    ///
    /// With `remove_empty`, edges left without members are deleted too.
    pub(crate) fn remove_node_weak(&mut self, id: &Id, remove_empty: bool) -> Option<NodeRecord> {
        let rec = self.nodes.shift_remove(id)?;
        for e in &rec.edges {
            let emptied = match self.edges.get_mut(e) {
                Some(edge) => {
                    edge.members.shift_remove(id);
                    edge.members.is_empty()
                }
                None => false,
            };
            if remove_empty && emptied {
                self.edges.shift_remove(e);
            }
        }
        Some(rec)
    }

    /// Delete a node together with every edge that references it.
    pub(crate) fn remove_node_strong(&mut self, id: &Id) -> Option<NodeRecord> {
        let incident: Vec<Id> = self.nodes.get(id)?.edges.iter().cloned().collect();
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

impl IncidenceStore for HyperStore {
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
            Some(r) => Box::new(r.edges.iter()),
            None => Box::new(std::iter::empty()),
        }
    }

    fn members<'a>(&'a self, edge: &Id) -> Box<dyn Iterator<Item = &'a Id> + 'a> {
        match self.edges.get(edge) {
            Some(r) => Box::new(r.members.iter()),
            None => Box::new(std::iter::empty()),
        }
    }

    #[inline]
    fn degree(&self, node: &Id) -> usize {
        self.nodes.get(node).map_or(0, |r| r.edges.len())
    }

    #[inline]
    fn edge_size(&self, edge: &Id) -> usize {
        self.edges.get(edge).map_or(0, |r| r.members.len())
    }
}

impl DebugInvariants for HyperStore {
    fn validate_invariants(&self) -> Result<(), IncidenceError> {
        for (e, rec) in &self.edges {
            for n in &rec.members {
                let mirrored = self.nodes.get(n).is_some_and(|r| r.edges.contains(e));
                if !mirrored {
                    return Err(violation(format!(
                        "edge {e:?} lists node {n:?} but the node does not list the edge"
                    )));
                }
            }
        }
        for (n, rec) in &self.nodes {
            for e in &rec.edges {
                let mirrored = self.edges.get(e).is_some_and(|r| r.members.contains(n));
                if !mirrored {
                    return Err(violation(format!(
                        "node {n:?} lists edge {e:?} but the edge does not list the node"
                    )));
                }
            }
        }
        Ok(())
    }
}
