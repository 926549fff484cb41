//! `SimplicialComplex`: a hypergraph closed under taking subsets.
//!
//! Inserting a simplex also inserts each of its missing faces down to
//! `min_size` members, as simplices of their own with empty attributes.
//! Removing a simplex first removes every simplex that contains it, so the
//! closure survives both directions.
//!
//! A canonical face index (sorted member list → simplex id) makes content
//! lookups constant-time and rules out two simplices with the same members.

use std::fmt;

use hashbrown::HashMap;
use indexmap::{IndexMap, IndexSet};
use itertools::Itertools;
use log::{debug, trace, warn};
use serde_json::Value;

use super::edge_spec::EdgeSpec;
use super::hypergraph::Hypergraph;
use super::options::{Insert, SimplicialOptions};
use crate::debug_invariants::{DebugInvariants, debug_invariants, violation};
use crate::incidence::attrs::{AttrUpdate, Attrs};
use crate::incidence::counter::IdCounter;
use crate::incidence::guard::MutationGuard;
use crate::incidence::id::Id;
use crate::incidence::store::{HyperStore, IncidenceStore, delegate_incidence_store};
use crate::incidence_error::IncidenceError;
use crate::views::{EdgeView, Edges, IdView, NodeView, Nodes};

/// Sorted, deduplicated member list: the content key of a simplex.
type FaceKey = Vec<Id>;

fn face_key<'i>(members: impl IntoIterator<Item = &'i Id>) -> FaceKey {
    members.into_iter().cloned().sorted().dedup().collect()
}

#[derive(Debug, Default)]
pub struct SimplicialComplex {
    store: HyperStore,
    faces: HashMap<FaceKey, Id>,
    attrs: Attrs,
    edge_uid: IdCounter,
    guard: MutationGuard,
    /// Closure policy.
    options: SimplicialOptions,
}

delegate_incidence_store!(SimplicialComplex, store);

impl SimplicialComplex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: SimplicialOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    /// Close an existing hypergraph: each non-empty edge becomes a simplex
    /// under its own id. Empty edges are skipped with a warning, and an edge
    /// whose members repeat an earlier edge is dropped.
    pub fn from_hypergraph(h: &Hypergraph) -> Result<Self, IncidenceError> {
        let mut sc = Self::new();
        sc.attrs = h.attrs().clone();
        for (id, rec) in h.store().node_records() {
            sc.store.upsert_node(id.clone(), rec.attrs().clone());
        }
        // reserve the hypergraph's ids so generated faces never take them
        for id in h.store().edge_ids() {
            sc.edge_uid.observe(id);
        }
        let mut specs = Vec::new();
        for (id, rec) in h.store().edge_records() {
            if rec.members().is_empty() {
                warn!("edge `{id}` is empty and cannot be a simplex; skipped");
                continue;
            }
            specs.push(EdgeSpec {
                members: rec.members().clone(),
                id: Some(id.clone()),
                attrs: rec.attrs().clone(),
            });
        }
        // smaller simplices first, so closure never pre-empts an explicit edge
        specs.sort_by_key(|s| s.members.len());
        sc.add_simplices_from(specs)?;
        Ok(sc)
    }

    /// The same simplices as a plain hypergraph.
    pub fn to_hypergraph(&self) -> Hypergraph {
        Hypergraph::from(self)
    }

    pub fn store(&self) -> &HyperStore {
        &self.store
    }

    pub fn options(&self) -> SimplicialOptions {
        self.options
    }

    pub fn nodes(&self) -> NodeView<'_> {
        IdView::new(Nodes::new(&self.store))
    }

    /// View over all simplices.
    pub fn edges(&self) -> EdgeView<'_> {
        IdView::new(Edges::new(&self.store))
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

    /// Whether a simplex with exactly these members exists.
    pub fn has_simplex<I, T>(&self, members: I) -> bool
    where
        I: IntoIterator<Item = T>,
        T: Into<Id>,
    {
        let members: Vec<Id> = members.into_iter().map(Into::into).collect();
        self.faces.contains_key(&face_key(&members))
    }

    /// Id of the simplex with exactly these members.
    pub fn simplex_id<I, T>(&self, members: I) -> Option<&Id>
    where
        I: IntoIterator<Item = T>,
        T: Into<Id>,
    {
        let members: Vec<Id> = members.into_iter().map(Into::into).collect();
        self.faces.get(&face_key(&members))
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

    fn check_members(members: &IndexSet<Id>) -> Result<(), IncidenceError> {
        if members.is_empty() {
            return Err(IncidenceError::InvalidStructure(
                "a simplex needs at least one node".into(),
            ));
        }
        Ok(())
    }

    /// Add a simplex and its missing faces.
    ///
    /// Returns `Existing` if a simplex with the same members is present (under
    /// any id) and `Duplicate` if the explicit id is taken by another simplex.
    pub fn add_simplex<I, T>(&mut self, members: I, id: Option<Id>, attrs: Attrs) -> Result<Insert, IncidenceError>
    where
        I: IntoIterator<Item = T>,
        T: Into<Id>,
    {
        self.guard.check()?;
        let members: IndexSet<Id> = members.into_iter().map(Into::into).collect();
        Self::check_members(&members)?;
        let out = self.place_simplex(members, id, attrs);
        debug_invariants!(*self);
        Ok(out)
    }

    /// Add several simplices; all are validated before any is inserted.
    pub fn add_simplices_from<I>(&mut self, specs: I) -> Result<Vec<Insert>, IncidenceError>
    where
        I: IntoIterator,
        I::Item: Into<EdgeSpec>,
    {
        self.guard.check()?;
        let specs: Vec<EdgeSpec> = specs.into_iter().map(Into::into).collect();
        for spec in &specs {
            Self::check_members(&spec.members)?;
        }
        let out = specs
            .into_iter()
            .map(|s| self.place_simplex(s.members, s.id, s.attrs))
            .collect();
        debug_invariants!(*self);
        Ok(out)
    }

    /// Add simplices, replacing any above order `max_order` by its faces of
    /// that order. Ids and attributes of replaced simplices are dropped.
    pub fn add_simplices_from_max_order<I>(&mut self, specs: I, max_order: usize) -> Result<Vec<Insert>, IncidenceError>
    where
        I: IntoIterator,
        I::Item: Into<EdgeSpec>,
    {
        let max_size = max_order + 1;
        let mut expanded = Vec::new();
        for spec in specs.into_iter().map(Into::into) {
            if spec.members.len() > max_size {
                let sorted = face_key(&spec.members);
                expanded.extend(
                    sorted
                        .into_iter()
                        .combinations(max_size)
                        .map(EdgeSpec::new),
                );
            } else {
                expanded.push(spec);
            }
        }
        self.add_simplices_from(expanded)
    }

    /// Insert a validated simplex and close it downward.
    fn place_simplex(&mut self, members: IndexSet<Id>, id: Option<Id>, attrs: Attrs) -> Insert {
        let key = face_key(&members);
        if let Some(existing) = self.faces.get(&key) {
            debug!("simplex {key:?} already present as `{existing}`");
            return Insert::Existing(existing.clone());
        }
        let id = match id {
            Some(id) if self.store.has_edge(&id) => {
                warn!("simplex `{id}` already exists; simplex not added");
                return Insert::Duplicate(id);
            }
            Some(id) => {
                self.edge_uid.observe(&id);
                id
            }
            None => self.edge_uid.issue(|c| self.store.has_edge(c)),
        };
        self.store.insert_edge(id.clone(), members, attrs);
        self.faces.insert(key.clone(), id.clone());
        self.close_downward(&key);
        Insert::Added(id)
    }

    /// Insert every missing face of `key` with at least `min_size` members.
    fn close_downward(&mut self, key: &FaceKey) {
        let min = self.options.min_size.max(1);
        for size in (min..key.len()).rev() {
            for face in key.iter().cloned().combinations(size) {
                if self.faces.contains_key(&face) {
                    continue;
                }
                let id = self.edge_uid.issue(|c| self.store.has_edge(c));
                trace!("closure adds face {face:?} as `{id}`");
                self.store
                    .insert_edge(id.clone(), face.iter().cloned().collect(), Attrs::new());
                self.faces.insert(face, id);
            }
        }
    }

    /// Remove a simplex and, first, every simplex that contains it.
    pub fn remove_simplex_id(&mut self, id: &Id) -> Result<(), IncidenceError> {
        self.guard.check()?;
        if !self.store.has_edge(id) {
            return Err(IncidenceError::EdgeNotFound(id.clone()));
        }
        self.drop_simplex(id);
        debug_invariants!(*self);
        Ok(())
    }

    /// Remove several simplices; unknown ids are skipped with a warning.
    pub fn remove_simplex_ids_from<'i, I>(&mut self, ids: I) -> Result<(), IncidenceError>
    where
        I: IntoIterator<Item = &'i Id>,
    {
        self.guard.check()?;
        for id in ids {
            if self.store.has_edge(id) {
                self.drop_simplex(id);
            } else {
                warn!("simplex `{id}` not in complex; skipped");
            }
        }
        debug_invariants!(*self);
        Ok(())
    }

    fn drop_simplex(&mut self, id: &Id) {
        for sup in self.supersets(id) {
            self.unindex_and_remove(&sup);
        }
        self.unindex_and_remove(id);
    }

    /// Simplices strictly containing simplex `id`.
    fn supersets(&self, id: &Id) -> Vec<Id> {
        let Some(members) = self.store.edge_members(id) else {
            return Vec::new();
        };
        let mut common: Option<IndexSet<&Id>> = None;
        for n in members {
            let here: IndexSet<&Id> = self.store.memberships(n).collect();
            common = Some(match common {
                None => here,
                Some(mut acc) => {
                    acc.retain(|e| here.contains(*e));
                    acc
                }
            });
        }
        common
            .unwrap_or_default()
            .into_iter()
            .filter(|e| *e != id)
            .cloned()
            .collect()
    }

    fn unindex_and_remove(&mut self, id: &Id) {
        if let Some(rec) = self.store.remove_edge(id) {
            self.faces.remove(&face_key(rec.members()));
        }
    }

    /// Remove a node together with every simplex containing it.
    pub fn remove_node(&mut self, id: &Id) -> Result<(), IncidenceError> {
        self.guard.check()?;
        let incident: Vec<Id> = self
            .store
            .node_memberships(id)
            .ok_or_else(|| IncidenceError::NodeNotFound(id.clone()))?
            .iter()
            .cloned()
            .collect();
        for e in &incident {
            self.unindex_and_remove(e);
        }
        self.store.remove_node_strong(id);
        debug_invariants!(*self);
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
        self.faces.clear();
        self.edge_uid = IdCounter::new();
        if !keep_attrs {
            self.attrs.clear();
        }
        Ok(())
    }

    /// Independent, mutable deep copy.
    pub fn copy(&self) -> Self {
        Self {
            store: self.store.clone(),
            faces: self.faces.clone(),
            attrs: self.attrs.clone(),
            edge_uid: self.edge_uid,
            guard: MutationGuard::default(),
            options: self.options,
        }
    }
}

impl From<&SimplicialComplex> for Hypergraph {
    fn from(sc: &SimplicialComplex) -> Self {
        Hypergraph::from_parts(sc.store.clone(), sc.attrs.clone())
    }
}

impl DebugInvariants for SimplicialComplex {
    fn validate_invariants(&self) -> Result<(), IncidenceError> {
        self.store.validate_invariants()?;
        if self.faces.len() != self.store.num_edges() {
            return Err(violation(format!(
                "face index has {} entries for {} simplices",
                self.faces.len(),
                self.store.num_edges()
            )));
        }
        let min = self.options.min_size.max(1);
        for (id, rec) in self.store.edge_records() {
            let key = face_key(rec.members());
            if self.faces.get(&key) != Some(id) {
                return Err(violation(format!("simplex `{id}` missing from face index")));
            }
            if key.len() <= min {
                continue;
            }
            for face in key.iter().cloned().combinations(key.len() - 1) {
                if !self.faces.contains_key(&face) {
                    return Err(violation(format!(
                        "simplex `{id}` lacks face {face:?}"
                    )));
                }
            }
        }
        Ok(())
    }
}

impl fmt::Display for SimplicialComplex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} SimplicialComplex with {} nodes and {} simplices",
            super::display_name(&self.attrs),
            self.store.num_nodes(),
            self.store.num_edges()
        )
    }
}
