//! `IdView`: a read-only, filterable window onto one namespace of a container.
//!
//! A view borrows its container and optionally narrows it to a subset of ids.
//! Every query reads the store directly, and every filter or set operation
//! returns a new view over the same store, so views compose freely:
//!
//! ```rust
//! use hyper_sieve::prelude::*;
//! let h = Hypergraph::from_edge_list([vec![1, 2], vec![2, 3, 4]]).unwrap();
//! let big = h.edges().filterby(EdgeStat::size(), 3, FilterMode::Geq).unwrap();
//! assert_eq!(big.ids(), vec![Id::from(1)]);
//! ```

use std::marker::PhantomData;
use std::ops::{BitAnd, BitOr, BitXor, Sub};

use hashbrown::{HashMap, HashSet};
use indexmap::IndexSet;
use serde_json::Value;

use super::filter::{FilterMode, passes};
use super::namespace::Namespace;
use crate::incidence::attrs::Attrs;
use crate::incidence::id::Id;
use crate::incidence_error::IncidenceError;
use crate::stats::{MultiStat, Stat, StatKind};

/// Scoped view over the ids of namespace `N`.
#[derive(Clone, Debug)]
pub struct IdView<'a, N: Namespace<'a>> {
    ns: N,
    /// `None` means every id in the store.
    scope: Option<IndexSet<Id>>,
    _store: PhantomData<&'a ()>,
}

impl<'a, N: Namespace<'a>> IdView<'a, N> {
    /// A view over every id of `ns`.
    pub fn new(ns: N) -> Self {
        Self {
            ns,
            scope: None,
            _store: PhantomData,
        }
    }

    /// A view over `ns` narrowed to `ids`; ids absent from the store are dropped.
    pub fn from_ids<I, T>(ns: N, ids: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Id>,
    {
        let wanted: IndexSet<Id> = ids.into_iter().map(Into::into).collect();
        Self::new(ns).rescope(|id| wanted.contains(id))
    }

    pub fn namespace(&self) -> N {
        self.ns
    }

    /// Ids of this view in store order.
    pub fn iter(&self) -> impl Iterator<Item = &'a Id> + '_ {
        let scope = self.scope.as_ref();
        self.ns
            .ids()
            .filter(move |id| scope.is_none_or(|s| s.contains(*id)))
    }

    pub fn len(&self) -> usize {
        match &self.scope {
            Some(s) => s.len(),
            None => self.ns.total(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, id: &Id) -> bool {
        self.ns.has(id) && self.scope.as_ref().is_none_or(|s| s.contains(id))
    }

    /// Owned ids of this view in store order.
    pub fn ids(&self) -> Vec<Id> {
        self.iter().cloned().collect()
    }

    /// Attributes of `id`.
    pub fn get(&self, id: &Id) -> Result<&'a Attrs, IncidenceError> {
        self.check(id)?;
        self.ns.attrs(id).ok_or_else(|| N::not_found(id.clone()))
    }

    /// `Ok` if `id` is in the view, otherwise the matching not-found error.
    pub(crate) fn check(&self, id: &Id) -> Result<(), IncidenceError> {
        if self.contains(id) {
            Ok(())
        } else if self.ns.has(id) {
            Err(IncidenceError::NotInView(id.clone()))
        } else {
            Err(N::not_found(id.clone()))
        }
    }

    /// Incident ids of `id` (memberships of a node, members of an edge).
    pub fn incident(&self, id: &Id) -> Result<IndexSet<Id>, IncidenceError> {
        self.check(id)?;
        Ok(self.ns.incident(id).cloned().collect())
    }

    /// Keep ids of this view for which `keep` holds.
    pub(crate) fn filter_ids(&self, mut keep: impl FnMut(&Id) -> bool) -> Self {
        let scope = self.iter().filter(|id| keep(*id)).cloned().collect();
        Self {
            ns: self.ns,
            scope: Some(scope),
            _store: PhantomData,
        }
    }

    /// Keep ids of the whole store for which `keep` holds.
    fn rescope(&self, keep: impl Fn(&Id) -> bool) -> Self {
        let scope = self.ns.ids().filter(|id| keep(*id)).cloned().collect();
        Self {
            ns: self.ns,
            scope: Some(scope),
            _store: PhantomData,
        }
    }

    // ---------- set algebra ----------

    pub fn union(&self, other: &Self) -> Self {
        self.rescope(|id| self.contains(id) || other.contains(id))
    }

    pub fn intersection(&self, other: &Self) -> Self {
        self.filter_ids(|id| other.contains(id))
    }

    pub fn difference(&self, other: &Self) -> Self {
        self.filter_ids(|id| !other.contains(id))
    }

    pub fn symmetric_difference(&self, other: &Self) -> Self {
        self.rescope(|id| self.contains(id) != other.contains(id))
    }

    // ---------- filtering ----------

    /// Keep ids whose statistic compares to `value` under `mode`.
    pub fn filterby(
        &self,
        stat: N::Stat,
        value: impl Into<Value>,
        mode: FilterMode,
    ) -> Result<Self, IncidenceError> {
        self.filterby_fn(|store, id| stat.eval(store, id), value, mode)
    }

    /// [`filterby`](Self::filterby) with the statistic given by name.
    pub fn filterby_name(
        &self,
        stat: &str,
        value: impl Into<Value>,
        mode: FilterMode,
    ) -> Result<Self, IncidenceError> {
        self.filterby(stat.parse()?, value, mode)
    }

    /// Filter on an ad-hoc statistic computed by `f`.
    pub fn filterby_fn<F>(
        &self,
        f: F,
        value: impl Into<Value>,
        mode: FilterMode,
    ) -> Result<Self, IncidenceError>
    where
        F: Fn(&N::Store, &Id) -> Value,
    {
        let value = value.into();
        let store = self.ns.store();
        let mut scope = IndexSet::new();
        for id in self.iter() {
            if passes(&f(store, id), &value, mode)? {
                scope.insert(id.clone());
            }
        }
        Ok(Self {
            ns: self.ns,
            scope: Some(scope),
            _store: PhantomData,
        })
    }

    /// Keep ids whose statistic satisfies `pred`.
    pub fn filterby_pred(&self, stat: N::Stat, pred: impl Fn(&Value) -> bool) -> Self {
        let store = self.ns.store();
        self.filter_ids(|id| pred(&stat.eval(store, id)))
    }

    /// Filter on attribute `name`. Ids without it are dropped unless `missing`
    /// supplies a stand-in value.
    pub fn filterby_attr(
        &self,
        name: &str,
        value: impl Into<Value>,
        mode: FilterMode,
        missing: Option<Value>,
    ) -> Result<Self, IncidenceError> {
        self.filterby(N::Stat::attribute(name, missing), value, mode)
    }

    // ---------- statistics ----------

    /// A deferred statistic over the ids of this view.
    pub fn stat(&self, kind: N::Stat) -> Stat<'a, N> {
        Stat::new(self.clone(), kind)
    }

    /// A deferred statistic by name, e.g. `"degree"`.
    pub fn stat_named(&self, name: &str) -> Result<Stat<'a, N>, IncidenceError> {
        Ok(self.stat(name.parse()?))
    }

    /// The attribute `name` as a statistic; ids without it yield `null`.
    pub fn attrs(&self, name: &str) -> Stat<'a, N> {
        self.stat(N::Stat::attribute(name, None))
    }

    pub fn multi(&self, kinds: impl IntoIterator<Item = N::Stat>) -> MultiStat<'a, N> {
        MultiStat::new(self.clone(), kinds.into_iter().collect())
    }

    // ---------- structure ----------

    /// Ids of this view sharing at least `s` incident ids with `id`.
    pub fn neighbors(&self, id: &Id, s: usize) -> Result<Self, IncidenceError> {
        self.check(id)?;
        let near = self.ns.neighbors(id, s);
        Ok(self.filter_ids(|n| near.contains(n)))
    }

    /// Ids whose incident set equals that of an earlier id of this view.
    pub fn duplicates(&self) -> Self {
        let mut seen: HashSet<Vec<&'a Id>> = HashSet::new();
        let mut dups = IndexSet::new();
        for id in self.iter() {
            if !seen.insert(self.fingerprint(id)) {
                dups.insert(id.clone());
            }
        }
        self.filter_ids(|id| dups.contains(id))
    }

    /// Ids whose incident set is exactly `members`.
    pub fn lookup<I, T>(&self, members: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Id>,
    {
        let wanted: IndexSet<Id> = members.into_iter().map(Into::into).collect();
        self.filter_ids(|id| {
            let got: IndexSet<&Id> = self.ns.incident(id).collect();
            got.len() == wanted.len() && wanted.iter().all(|w| got.contains(w))
        })
    }

    /// Canonical, order-independent key of `id`'s incident set.
    pub(crate) fn fingerprint(&self, id: &Id) -> Vec<&'a Id> {
        let mut key: Vec<&'a Id> = self.ns.incident(id).collect();
        key.sort_unstable();
        key
    }

    /// Group ids of this view by identical incident sets, in first-seen order.
    pub(crate) fn groups(&self) -> Vec<Vec<Id>> {
        let mut slots: HashMap<Vec<&'a Id>, usize> = HashMap::new();
        let mut groups: Vec<Vec<Id>> = Vec::new();
        for id in self.iter() {
            let key = self.fingerprint(id);
            match slots.get(&key) {
                Some(&i) => groups[i].push(id.clone()),
                None => {
                    slots.insert(key, groups.len());
                    groups.push(vec![id.clone()]);
                }
            }
        }
        groups
    }
}

impl<'a, N: Namespace<'a>> PartialEq for IdView<'a, N> {
    /// Views are equal when they hold the same ids.
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|id| other.contains(id))
    }
}

impl<'a, 'v, N: Namespace<'a>> IntoIterator for &'v IdView<'a, N> {
    type Item = &'a Id;
    type IntoIter = Box<dyn Iterator<Item = &'a Id> + 'v>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}

macro_rules! view_operator {
    ($trait:ident, $method:ident, $op:ident) => {
        impl<'a, N: Namespace<'a>> $trait<&IdView<'a, N>> for &IdView<'a, N> {
            type Output = IdView<'a, N>;

            fn $method(self, rhs: &IdView<'a, N>) -> IdView<'a, N> {
                self.$op(rhs)
            }
        }
    };
}

view_operator!(BitOr, bitor, union);
view_operator!(BitAnd, bitand, intersection);
view_operator!(Sub, sub, difference);
view_operator!(BitXor, bitxor, symmetric_difference);
