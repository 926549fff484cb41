//! `DiHypergraph`: directed container whose edges split into tail and head.

use std::fmt;

use indexmap::{IndexMap, IndexSet};
use log::warn;
use serde_json::Value;

use super::edge_spec::DiEdgeSpec;
use super::hypergraph::Hypergraph;
use super::input::DiHypergraphInput;
use super::options::Insert;
use crate::debug_invariants::{DebugInvariants, debug_invariants};
use crate::incidence::attrs::{AttrUpdate, Attrs};
use crate::incidence::counter::IdCounter;
use crate::incidence::guard::MutationGuard;
use crate::incidence::id::Id;
use crate::incidence::store::{DiHyperStore, HyperStore, IncidenceStore, Side, delegate_incidence_store};
use crate::incidence_error::IncidenceError;
use crate::views::{DiEdgeView, DiEdges, DiNodeView, DiNodes, IdView};

#[derive(Debug, Default)]
pub struct DiHypergraph {
    store: DiHyperStore,
    attrs: Attrs,
    edge_uid: IdCounter,
    guard: MutationGuard,
}

delegate_incidence_store!(DiHypergraph, store);

impl DiHypergraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_input(input: DiHypergraphInput) -> Result<Self, IncidenceError> {
        match input {
            DiHypergraphInput::EdgeList(edges) => Self::from_edge_list(edges),
            DiHypergraphInput::EdgeDict(edges) => {
                let mut h = Self::new();
                h.add_edges_from(
                    edges
                        .into_iter()
                        .map(|(id, (tail, head))| DiEdgeSpec::new(tail, head).with_id(id)),
                )?;
                Ok(h)
            }
            DiHypergraphInput::Bipartite(triples) => Self::from_bipartite(triples),
        }
    }

    /// One edge per spec, ids issued by the counter unless given.
    pub fn from_edge_list<I>(edges: I) -> Result<Self, IncidenceError>
    where
        I: IntoIterator,
        I::Item: Into<DiEdgeSpec>,
    {
        let mut h = Self::new();
        h.add_edges_from(edges)?;
        Ok(h)
    }

    /// Build from `(node, edge, side)` incidence triples.
    pub fn from_bipartite<I, N, E>(triples: I) -> Result<Self, IncidenceError>
    where
        I: IntoIterator<Item = (N, E, Side)>,
        N: Into<Id>,
        E: Into<Id>,
    {
        let mut grouped: IndexMap<Id, DiEdgeSpec> = IndexMap::new();
        for (n, e, side) in triples {
            let e = e.into();
            let spec = grouped.entry(e.clone()).or_insert_with(|| DiEdgeSpec {
                id: Some(e),
                ..DiEdgeSpec::default()
            });
            match side {
                Side::Tail => spec.tail.insert(n.into()),
                Side::Head => spec.head.insert(n.into()),
            };
        }
        Self::from_edge_list(grouped.into_values())
    }

    pub fn store(&self) -> &DiHyperStore {
        &self.store
    }

    pub fn nodes(&self) -> DiNodeView<'_> {
        IdView::new(DiNodes::new(&self.store))
    }

    pub fn edges(&self) -> DiEdgeView<'_> {
        IdView::new(DiEdges::new(&self.store))
    }

    pub fn attr(&self, key: &str) -> Option<&Value> {
        self.attrs.get(key)
    }

    pub fn attrs(&self) -> &Attrs {
        &self.attrs
    }

    pub fn get_node_attribute(&self, name: &str) -> IndexMap<Id, Value> {
        self.store.node_attribute(name)
    }

    pub fn get_edge_attribute(&self, name: &str) -> IndexMap<Id, Value> {
        self.store.edge_attribute(name)
    }

    pub fn is_frozen(&self) -> bool {
        self.guard.is_frozen()
    }

    // ---------- mutation ----------

    pub fn freeze(&mut self) {
        self.guard.freeze();
    }

    pub fn set_attr(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Result<(), IncidenceError> {
        self.guard.check()?;
        self.attrs.insert(key.into(), value.into());
        Ok(())
    }

    pub fn add_node(&mut self, id: impl Into<Id>, attrs: Attrs) -> Result<(), IncidenceError> {
        self.guard.check()?;
        self.store.upsert_node(id.into(), attrs);
        Ok(())
    }

    pub fn add_nodes_from<I, T>(&mut self, ids: I) -> Result<(), IncidenceError>
    where
        I: IntoIterator<Item = T>,
        T: Into<Id>,
    {
        self.guard.check()?;
        for id in ids {
            self.store.upsert_node(id.into(), Attrs::new());
        }
        Ok(())
    }

    pub fn add_nodes_with_attrs<I, T>(&mut self, nodes: I) -> Result<(), IncidenceError>
    where
        I: IntoIterator<Item = (T, Attrs)>,
        T: Into<Id>,
    {
        self.guard.check()?;
        for (id, attrs) in nodes {
            self.store.upsert_node(id.into(), attrs);
        }
        Ok(())
    }

    fn check_sides(tail: &IndexSet<Id>, head: &IndexSet<Id>) -> Result<(), IncidenceError> {
        if tail.is_empty() && head.is_empty() {
            return Err(IncidenceError::InvalidStructure(
                "a directed edge needs a non-empty tail or head".into(),
            ));
        }
        Ok(())
    }

    fn place_edge(&mut self, spec: DiEdgeSpec) -> Insert {
        let id = match spec.id {
            Some(id) if self.store.has_edge(&id) => {
                warn!("edge `{id}` already exists; edge not added");
                return Insert::Duplicate(id);
            }
            Some(id) => {
                self.edge_uid.observe(&id);
                id
            }
            None => self.edge_uid.issue(|c| self.store.has_edge(c)),
        };
        self.store
            .insert_edge(id.clone(), spec.tail, spec.head, spec.attrs);
        Insert::Added(id)
    }

    /// Add a directed edge from `tail` to `head`.
    pub fn add_edge<I, J, T, U>(
        &mut self,
        tail: I,
        head: J,
        id: Option<Id>,
        attrs: Attrs,
    ) -> Result<Insert, IncidenceError>
    where
        I: IntoIterator<Item = T>,
        J: IntoIterator<Item = U>,
        T: Into<Id>,
        U: Into<Id>,
    {
        self.guard.check()?;
        let spec = DiEdgeSpec {
            tail: tail.into_iter().map(Into::into).collect(),
            head: head.into_iter().map(Into::into).collect(),
            id,
            attrs,
        };
        Self::check_sides(&spec.tail, &spec.head)?;
        let out = self.place_edge(spec);
        debug_invariants!(self.store);
        Ok(out)
    }

    /// Add many edges; all are validated before any is inserted.
    pub fn add_edges_from<I>(&mut self, specs: I) -> Result<Vec<Insert>, IncidenceError>
    where
        I: IntoIterator,
        I::Item: Into<DiEdgeSpec>,
    {
        self.guard.check()?;
        let specs: Vec<DiEdgeSpec> = specs.into_iter().map(Into::into).collect();
        for spec in &specs {
            Self::check_sides(&spec.tail, &spec.head)?;
        }
        let out = specs.into_iter().map(|s| self.place_edge(s)).collect();
        debug_invariants!(self.store);
        Ok(out)
    }

    /// Put `node` on one side of `edge`, creating either one if missing.
    pub fn add_node_to_edge(
        &mut self,
        edge: impl Into<Id>,
        node: impl Into<Id>,
        side: Side,
    ) -> Result<(), IncidenceError> {
        self.guard.check()?;
        let (edge, node) = (edge.into(), node.into());
        if !self.store.has_edge(&edge) {
            self.edge_uid.observe(&edge);
            self.store
                .insert_edge(edge.clone(), IndexSet::new(), IndexSet::new(), Attrs::new());
        }
        self.store.link(&edge, node, side);
        debug_invariants!(self.store);
        Ok(())
    }

    /// Weak removal strips the node from both sides of its edges and deletes
    /// edges left with neither; strong removal deletes every edge touching it.
    pub fn remove_node(&mut self, id: &Id, strong: bool) -> Result<(), IncidenceError> {
        self.guard.check()?;
        if !self.store.has_node(id) {
            return Err(IncidenceError::NodeNotFound(id.clone()));
        }
        self.drop_node(id, strong);
        Ok(())
    }

    fn drop_node(&mut self, id: &Id, strong: bool) {
        if strong {
            self.store.remove_node_strong(id);
        } else {
            self.store.remove_node_weak(id);
        }
        debug_invariants!(self.store);
    }

    pub fn remove_nodes_from<'i, I>(&mut self, ids: I, strong: bool) -> Result<(), IncidenceError>
    where
        I: IntoIterator<Item = &'i Id>,
    {
        self.guard.check()?;
        for id in ids {
            if self.store.has_node(id) {
                self.drop_node(id, strong);
            } else {
                warn!("node `{id}` not in directed hypergraph; skipped");
            }
        }
        Ok(())
    }

    pub fn remove_edge(&mut self, id: &Id) -> Result<(), IncidenceError> {
        self.guard.check()?;
        self.store
            .remove_edge(id)
            .ok_or_else(|| IncidenceError::EdgeNotFound(id.clone()))?;
        debug_invariants!(self.store);
        Ok(())
    }

    pub fn remove_edges_from<'i, I>(&mut self, ids: I) -> Result<(), IncidenceError>
    where
        I: IntoIterator<Item = &'i Id>,
    {
        self.guard.check()?;
        for id in ids {
            if self.store.remove_edge(id).is_none() {
                warn!("edge `{id}` not in directed hypergraph; skipped");
            }
        }
        debug_invariants!(self.store);
        Ok(())
    }

    /// Take `node` off one side of `edge`. The edge is deleted once both of
    /// its sides are empty; the node always stays.
    pub fn remove_node_from_edge(
        &mut self,
        edge: &Id,
        node: &Id,
        side: Side,
    ) -> Result<(), IncidenceError> {
        self.guard.check()?;
        let emptied = match self.store.edge(edge) {
            None => return Err(IncidenceError::EdgeNotFound(edge.clone())),
            Some(rec) => {
                let (tail, head) = (rec.tail().len(), rec.head().len());
                let on_side = match side {
                    Side::Tail => rec.tail().contains(node),
                    Side::Head => rec.head().contains(node),
                };
                if !on_side {
                    return Err(IncidenceError::NotAMember {
                        edge: edge.clone(),
                        node: node.clone(),
                    });
                }
                tail + head == 1
            }
        };
        self.store.unlink(edge, node, side);
        if emptied {
            self.store.remove_edge(edge);
        }
        debug_invariants!(self.store);
        Ok(())
    }

    pub fn set_node_attributes(&mut self, update: AttrUpdate) -> Result<(), IncidenceError> {
        self.guard.check()?;
        self.store.update_node_attrs(update);
        Ok(())
    }

    pub fn set_edge_attributes(&mut self, update: AttrUpdate) -> Result<(), IncidenceError> {
        self.guard.check()?;
        self.store.update_edge_attrs(update);
        Ok(())
    }

    pub fn clear(&mut self, keep_attrs: bool) -> Result<(), IncidenceError> {
        self.guard.check()?;
        self.store.clear();
        self.edge_uid = IdCounter::new();
        if !keep_attrs {
            self.attrs.clear();
        }
        Ok(())
    }

    pub fn copy(&self) -> Self {
        Self {
            store: self.store.clone(),
            attrs: self.attrs.clone(),
            edge_uid: self.edge_uid,
            guard: MutationGuard::default(),
        }
    }
}

/// Forget directions: each edge keeps the union of its tail and head.
impl From<&DiHypergraph> for Hypergraph {
    fn from(dh: &DiHypergraph) -> Self {
        let mut store = HyperStore::new();
        for (id, rec) in dh.store.node_records() {
            store.upsert_node(id.clone(), rec.attrs().clone());
        }
        for (id, rec) in dh.store.edge_records() {
            store.insert_edge(id.clone(), rec.members(), rec.attrs().clone());
        }
        Hypergraph::from_parts(store, dh.attrs.clone())
    }
}

impl DebugInvariants for DiHypergraph {
    fn validate_invariants(&self) -> Result<(), IncidenceError> {
        self.store.validate_invariants()
    }
}

impl fmt::Display for DiHypergraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} DiHypergraph with {} nodes and {} hyperedges",
            super::display_name(&self.attrs),
            self.store.num_nodes(),
            self.store.num_edges()
        )
    }
}
