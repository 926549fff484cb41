//! `Hypergraph`: undirected container with multi-edges and an empty-edge policy.
//!
//! Every mutator checks the mutation guard first, validates its input, and only
//! then touches the store, so a returned `Err` leaves the container unchanged.

use std::fmt;

use indexmap::{IndexMap, IndexSet};
use log::{debug, warn};
use serde_json::Value;

use super::edge_spec::EdgeSpec;
use super::input::HypergraphInput;
use super::options::{CleanupOptions, HypergraphOptions, Insert, MergeOptions, MergeRename, MergeRule};
use crate::debug_invariants::{DebugInvariants, debug_invariants};
use crate::incidence::attrs::{AttrUpdate, Attrs};
use crate::incidence::counter::IdCounter;
use crate::incidence::guard::MutationGuard;
use crate::incidence::id::Id;
use crate::incidence::store::{HyperStore, IncidenceStore, delegate_incidence_store};
use crate::incidence_error::IncidenceError;
use crate::views::{EdgeView, Edges, IdView, NodeView, Nodes};

/// Undirected hypergraph.
#[derive(Debug, Default)]
pub struct Hypergraph {
    store: HyperStore,
    attrs: Attrs,
    edge_uid: IdCounter,
    guard: MutationGuard,
    options: HypergraphOptions,
}

delegate_incidence_store!(Hypergraph, store);

impl Hypergraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: HypergraphOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    /// Wrap an existing store; the edge counter starts past its integer ids.
    pub(crate) fn from_parts(store: HyperStore, attrs: Attrs) -> Self {
        Self {
            edge_uid: seeded_counter(&store),
            store,
            attrs,
            ..Self::default()
        }
    }

    // ---------- construction ----------

    pub fn from_input(input: HypergraphInput) -> Result<Self, IncidenceError> {
        match input {
            HypergraphInput::EdgeList(edges) => Self::from_edge_list(edges),
            HypergraphInput::EdgeDict(edges) => Self::from_edge_dict(edges),
            HypergraphInput::Bipartite(pairs) => Self::from_bipartite(pairs),
            HypergraphInput::Incidence(rows) => Self::from_incidence_matrix(&rows),
            HypergraphInput::SparseIncidence {
                num_nodes,
                num_edges,
                entries,
            } => Self::from_sparse_incidence(num_nodes, num_edges, &entries),
        }
    }

    /// One edge per member list, ids issued by the counter.
    pub fn from_edge_list<I, E, T>(edges: I) -> Result<Self, IncidenceError>
    where
        I: IntoIterator<Item = E>,
        E: IntoIterator<Item = T>,
        T: Into<Id>,
    {
        let mut h = Self::new();
        h.add_edges_from(edges.into_iter().map(EdgeSpec::new))?;
        Ok(h)
    }

    pub fn from_edge_dict<I, K, E, T>(edges: I) -> Result<Self, IncidenceError>
    where
        I: IntoIterator<Item = (K, E)>,
        K: Into<Id>,
        E: IntoIterator<Item = T>,
        T: Into<Id>,
    {
        let mut h = Self::new();
        h.add_edges_from(
            edges
                .into_iter()
                .map(|(id, members)| EdgeSpec::new(members).with_id(id)),
        )?;
        Ok(h)
    }

    /// Build from `(node, edge)` incidence pairs.
    pub fn from_bipartite<I, N, E>(pairs: I) -> Result<Self, IncidenceError>
    where
        I: IntoIterator<Item = (N, E)>,
        N: Into<Id>,
        E: Into<Id>,
    {
        let mut grouped: IndexMap<Id, Vec<Id>> = IndexMap::new();
        for (n, e) in pairs {
            grouped.entry(e.into()).or_default().push(n.into());
        }
        Self::from_edge_dict(grouped)
    }

    /// Rows are nodes `0..rows`, columns are edges `0..cols`.
    pub fn from_incidence_matrix(rows: &[Vec<i64>]) -> Result<Self, IncidenceError> {
        let cols = rows.first().map_or(0, Vec::len);
        if let Some((r, row)) = rows.iter().enumerate().find(|(_, row)| row.len() != cols) {
            return Err(IncidenceError::InvalidStructure(format!(
                "ragged incidence matrix: row {r} has {} columns, expected {cols}",
                row.len()
            )));
        }
        let entries: Vec<(usize, usize)> = rows
            .iter()
            .enumerate()
            .flat_map(|(r, row)| {
                row.iter()
                    .enumerate()
                    .filter(|(_, v)| **v != 0)
                    .map(move |(c, _)| (r, c))
            })
            .collect();
        Self::from_sparse_incidence(rows.len(), cols, &entries)
    }

    fn from_sparse_incidence(
        num_nodes: usize,
        num_edges: usize,
        entries: &[(usize, usize)],
    ) -> Result<Self, IncidenceError> {
        if let Some(&(r, c)) = entries.iter().find(|(r, c)| *r >= num_nodes || *c >= num_edges) {
            return Err(IncidenceError::InvalidStructure(format!(
                "incidence entry ({r}, {c}) outside a {num_nodes}x{num_edges} matrix"
            )));
        }
        let mut columns: Vec<Vec<usize>> = vec![Vec::new(); num_edges];
        for &(r, c) in entries {
            columns[c].push(r);
        }
        let mut h = Self::new();
        h.add_nodes_from(0..num_nodes)?;
        let specs: Vec<EdgeSpec> = columns
            .into_iter()
            .enumerate()
            .filter(|(c, members)| {
                let keep = !members.is_empty() || h.options.allow_empty_edges;
                if !keep {
                    warn!("incidence column {c} is empty; skipped");
                }
                keep
            })
            .map(|(c, members)| EdgeSpec::new(members).with_id(c))
            .collect();
        h.add_edges_from(specs)?;
        Ok(h)
    }

    // ---------- read access ----------

    pub fn store(&self) -> &HyperStore {
        &self.store
    }

    pub fn options(&self) -> HypergraphOptions {
        self.options
    }

    pub fn nodes(&self) -> NodeView<'_> {
        IdView::new(Nodes::new(&self.store))
    }

    pub fn edges(&self) -> EdgeView<'_> {
        IdView::new(Edges::new(&self.store))
    }

    /// Container attribute `key`.
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

    /// Disable every mutator from now on.
    pub fn freeze(&mut self) {
        self.guard.freeze();
    }

    pub fn set_attr(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Result<(), IncidenceError> {
        self.guard.check()?;
        self.attrs.insert(key.into(), value.into());
        Ok(())
    }

    /// Create `id` if absent and merge `attrs` into its attributes.
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

    fn check_members(&self, members: &IndexSet<Id>) -> Result<(), IncidenceError> {
        if members.is_empty() && !self.options.allow_empty_edges {
            return Err(IncidenceError::InvalidStructure(
                "empty edges are not allowed".into(),
            ));
        }
        Ok(())
    }

    /// Insert a validated edge. A taken explicit id is a warned no-op.
    fn place_edge(&mut self, members: IndexSet<Id>, id: Option<Id>, attrs: Attrs) -> Insert {
        let id = match id {
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
        self.store.insert_edge(id.clone(), members, attrs);
        Insert::Added(id)
    }

    /// Add one edge. Missing member nodes are created.
    pub fn add_edge<I, T>(&mut self, members: I, id: Option<Id>, attrs: Attrs) -> Result<Insert, IncidenceError>
    where
        I: IntoIterator<Item = T>,
        T: Into<Id>,
    {
        self.guard.check()?;
        let members: IndexSet<Id> = members.into_iter().map(Into::into).collect();
        self.check_members(&members)?;
        let out = self.place_edge(members, id, attrs);
        debug_invariants!(self.store);
        Ok(out)
    }

    /// Add many edges; all of them are validated before any is inserted.
    pub fn add_edges_from<I>(&mut self, specs: I) -> Result<Vec<Insert>, IncidenceError>
    where
        I: IntoIterator,
        I::Item: Into<EdgeSpec>,
    {
        self.guard.check()?;
        let specs: Vec<EdgeSpec> = specs.into_iter().map(Into::into).collect();
        for spec in &specs {
            self.check_members(&spec.members)?;
        }
        let out = specs
            .into_iter()
            .map(|s| self.place_edge(s.members, s.id, s.attrs))
            .collect();
        debug_invariants!(self.store);
        Ok(out)
    }

    /// Add `node` to `edge`, creating either one if it does not exist.
    pub fn add_node_to_edge(&mut self, edge: impl Into<Id>, node: impl Into<Id>) -> Result<(), IncidenceError> {
        self.guard.check()?;
        let (edge, node) = (edge.into(), node.into());
        if self.store.has_edge(&edge) {
            self.store.link(&edge, node);
        } else {
            self.edge_uid.observe(&edge);
            self.store.insert_edge(edge, IndexSet::from([node]), Attrs::new());
        }
        debug_invariants!(self.store);
        Ok(())
    }

    /// Remove a node.
    ///
    /// Weak removal strips the node from its edges (deleting edges left empty
    /// when `remove_empty_edges` is set); strong removal deletes every edge
    /// that contains it.
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
            self.store.remove_node_weak(id, self.options.remove_empty_edges);
        }
        debug_invariants!(self.store);
    }

    /// Remove several nodes; unknown ids are skipped with a warning.
    pub fn remove_nodes_from<'i, I>(&mut self, ids: I, strong: bool) -> Result<(), IncidenceError>
    where
        I: IntoIterator<Item = &'i Id>,
    {
        self.guard.check()?;
        for id in ids {
            if self.store.has_node(id) {
                self.drop_node(id, strong);
            } else {
                warn!("node `{id}` not in hypergraph; skipped");
            }
        }
        Ok(())
    }

    /// Delete an edge; its member nodes stay.
    pub fn remove_edge(&mut self, id: &Id) -> Result<(), IncidenceError> {
        self.guard.check()?;
        self.store
            .remove_edge(id)
            .ok_or_else(|| IncidenceError::EdgeNotFound(id.clone()))?;
        debug_invariants!(self.store);
        Ok(())
    }

    /// Delete several edges; unknown ids are skipped with a warning.
    pub fn remove_edges_from<'i, I>(&mut self, ids: I) -> Result<(), IncidenceError>
    where
        I: IntoIterator<Item = &'i Id>,
    {
        self.guard.check()?;
        for id in ids {
            if self.store.remove_edge(id).is_none() {
                warn!("edge `{id}` not in hypergraph; skipped");
            }
        }
        debug_invariants!(self.store);
        Ok(())
    }

    /// Drop one membership. The node stays; the edge goes if left empty and
    /// `remove_empty_edges` is set.
    pub fn remove_node_from_edge(&mut self, edge: &Id, node: &Id) -> Result<(), IncidenceError> {
        self.guard.check()?;
        if !self.store.has_edge(edge) {
            return Err(IncidenceError::EdgeNotFound(edge.clone()));
        }
        if !self.store.unlink(edge, node) {
            return Err(IncidenceError::NotAMember {
                edge: edge.clone(),
                node: node.clone(),
            });
        }
        if self.options.remove_empty_edges && self.store.edge_size(edge) == 0 {
            self.store.remove_edge(edge);
        }
        debug_invariants!(self.store);
        Ok(())
    }

    /// Collapse edges with identical member sets into one edge per group.
    pub fn merge_duplicate_edges(&mut self, opts: &MergeOptions) -> Result<(), IncidenceError> {
        self.guard.check()?;
        let groups = self.edges().groups();
        for mut group in groups {
            if group.len() > 1 {
                group.sort();
                self.merge_group(&group, opts);
            } else if let Some(key) = &opts.multiplicity {
                self.store
                    .update_edge_attrs(AttrUpdate::per_id(key.clone(), [(group[0].clone(), 1)]));
            }
        }
        debug_invariants!(self.store);
        Ok(())
    }

    /// Replace `group` (sorted, all with equal members) by a single edge.
    fn merge_group(&mut self, group: &[Id], opts: &MergeOptions) {
        let first = &group[0];
        let members = self.store.edge_members(first).cloned().unwrap_or_default();
        let mut attrs = match opts.merge_rule {
            MergeRule::First => self.store.edge_attrs(first).cloned().unwrap_or_default(),
            MergeRule::Union => self.union_attrs(group),
        };
        for id in group {
            self.store.remove_edge(id);
        }
        let new_id = match opts.rename {
            MergeRename::First => first.clone(),
            MergeRename::New => self.edge_uid.issue(|c| self.store.has_edge(c)),
        };
        if let Some(key) = &opts.multiplicity {
            attrs.insert(key.clone(), Value::from(group.len()));
        }
        debug!("merged {} duplicate edges into `{new_id}`", group.len());
        self.store.insert_edge(new_id, members, attrs);
    }

    /// Per key: the single distinct value, or an array of distinct values.
    fn union_attrs(&self, group: &[Id]) -> Attrs {
        let mut values: IndexMap<String, Vec<Value>> = IndexMap::new();
        for id in group {
            for (k, v) in self.store.edge_attrs(id).into_iter().flatten() {
                let seen = values.entry(k.clone()).or_default();
                if !seen.contains(v) {
                    seen.push(v.clone());
                }
            }
        }
        values
            .into_iter()
            .map(|(k, mut vs)| {
                let v = if vs.len() == 1 {
                    vs.remove(0)
                } else {
                    Value::Array(vs)
                };
                (k, v)
            })
            .collect()
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

    /// Remove every node and edge, and the container attributes unless `keep_attrs`.
    pub fn clear(&mut self, keep_attrs: bool) -> Result<(), IncidenceError> {
        self.guard.check()?;
        self.store.clear();
        self.edge_uid = IdCounter::new();
        if !keep_attrs {
            self.attrs.clear();
        }
        Ok(())
    }

    /// Remove multi-edges, singletons, empty edges and isolates, then
    /// optionally renumber everything to consecutive integers.
    pub fn cleanup(&mut self, opts: &CleanupOptions) -> Result<(), IncidenceError> {
        self.guard.check()?;
        if !opts.keep_multiedges {
            self.merge_duplicate_edges(&MergeOptions::default())?;
        }
        let mut doomed: Vec<Id> = Vec::new();
        if !opts.keep_singletons {
            doomed.extend(self.edges().singletons().ids());
        }
        if !opts.keep_empty {
            doomed.extend(self.edges().empty().ids());
        }
        for e in &doomed {
            self.store.remove_edge(e);
        }
        if !opts.keep_isolates {
            let isolates = self.nodes().isolates(false).ids();
            for n in &isolates {
                self.store.remove_node_weak(n, false);
            }
        }
        if opts.relabel {
            self.relabel();
        }
        debug_invariants!(self.store);
        Ok(())
    }

    /// Renumber nodes and edges to `0..n` in store order; old ids go to `"label"`.
    fn relabel(&mut self) {
        let node_map: IndexMap<Id, Id> = self
            .store
            .node_ids()
            .enumerate()
            .map(|(i, n)| (n.clone(), Id::from(i)))
            .collect();
        let mut fresh = HyperStore::new();
        for (old, rec) in self.store.node_records() {
            let mut attrs = rec.attrs().clone();
            attrs.insert("label".into(), Value::from(old));
            fresh.upsert_node(node_map[old].clone(), attrs);
        }
        for (i, (old, rec)) in self.store.edge_records().enumerate() {
            let members = rec.members().iter().map(|n| node_map[n].clone()).collect();
            let mut attrs = rec.attrs().clone();
            attrs.insert("label".into(), Value::from(old));
            fresh.insert_edge(Id::from(i), members, attrs);
        }
        self.edge_uid = seeded_counter(&fresh);
        self.store = fresh;
    }

    // ---------- whole-container transforms ----------

    /// Independent, mutable deep copy (even of a frozen hypergraph).
    pub fn copy(&self) -> Self {
        Self {
            store: self.store.clone(),
            attrs: self.attrs.clone(),
            edge_uid: self.edge_uid,
            guard: MutationGuard::default(),
            options: self.options,
        }
    }

    /// Nodes become edges and edges become nodes.
    pub fn dual(&self) -> Self {
        let mut h = Self::from_parts(self.store.dual(), self.attrs.clone());
        h.options = self.options;
        h
    }
}

/// A counter positioned past every integer edge id of `store`.
fn seeded_counter<S: IncidenceStore + ?Sized>(store: &S) -> IdCounter {
    let mut uid = IdCounter::new();
    for e in store.edge_ids() {
        uid.observe(e);
    }
    uid
}

impl DebugInvariants for Hypergraph {
    fn validate_invariants(&self) -> Result<(), IncidenceError> {
        self.store.validate_invariants()
    }
}

impl fmt::Display for Hypergraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} Hypergraph with {} nodes and {} hyperedges",
            super::display_name(&self.attrs),
            self.store.num_nodes(),
            self.store.num_edges()
        )
    }
}
