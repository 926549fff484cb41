//! Deferred statistic handles.

use std::fmt;

use indexmap::IndexMap;
use once_cell::sync::OnceCell;
use serde_json::Value;

use super::StatKind;
use crate::incidence::id::Id;
use crate::incidence_error::IncidenceError;
use crate::views::{IdView, Namespace};

/// One statistic over the ids of a view.
///
/// Nothing is computed until the first materialising call; the per-id values
/// are then cached for the lifetime of the handle.
pub struct Stat<'a, N: Namespace<'a>> {
    view: IdView<'a, N>,
    kind: N::Stat,
    cache: OnceCell<IndexMap<Id, Value>>,
}

impl<'a, N: Namespace<'a>> Stat<'a, N> {
    pub(crate) fn new(view: IdView<'a, N>, kind: N::Stat) -> Self {
        Self {
            view,
            kind,
            cache: OnceCell::new(),
        }
    }

    pub fn kind(&self) -> &N::Stat {
        &self.kind
    }

    pub fn name(&self) -> String {
        self.kind.name()
    }

    /// A new, unevaluated handle for `kind` over the same view.
    pub fn with_kind(&self, kind: N::Stat) -> Self {
        Self::new(self.view.clone(), kind)
    }

    /// Cached per-id values in view order.
    pub fn values(&self) -> &IndexMap<Id, Value> {
        self.cache.get_or_init(|| {
            let store = self.view.namespace().store();
            self.view
                .iter()
                .map(|id| (id.clone(), self.kind.eval(store, id)))
                .collect()
        })
    }

    pub fn as_map(&self) -> IndexMap<Id, Value> {
        self.values().clone()
    }

    pub fn as_vec(&self) -> Vec<Value> {
        self.values().values().cloned().collect()
    }

    /// Values as floats; fails on the first non-numeric value.
    pub fn as_f64s(&self) -> Result<Vec<f64>, IncidenceError> {
        self.values()
            .iter()
            .map(|(id, v)| {
                v.as_f64().ok_or_else(|| {
                    IncidenceError::InvalidArgument(format!(
                        "statistic `{}` of {} `{id}` is not numeric: {v}",
                        self.name(),
                        N::LABEL
                    ))
                })
            })
            .collect()
    }

    /// Value for a single id of the view.
    pub fn get(&self, id: &Id) -> Result<Value, IncidenceError> {
        self.view.check(id)?;
        Ok(self.values().get(id).cloned().unwrap_or(Value::Null))
    }

    pub fn max(&self) -> Result<Option<f64>, IncidenceError> {
        Ok(self.as_f64s()?.into_iter().reduce(f64::max))
    }

    pub fn min(&self) -> Result<Option<f64>, IncidenceError> {
        Ok(self.as_f64s()?.into_iter().reduce(f64::min))
    }

    pub fn sum(&self) -> Result<f64, IncidenceError> {
        Ok(self.as_f64s()?.into_iter().sum())
    }

    pub fn mean(&self) -> Result<Option<f64>, IncidenceError> {
        let xs = self.as_f64s()?;
        Ok(mean(&xs))
    }

    pub fn median(&self) -> Result<Option<f64>, IncidenceError> {
        let mut xs = self.as_f64s()?;
        if xs.is_empty() {
            return Ok(None);
        }
        xs.sort_by(f64::total_cmp);
        let mid = xs.len() / 2;
        Ok(Some(if xs.len() % 2 == 0 {
            (xs[mid - 1] + xs[mid]) / 2.0
        } else {
            xs[mid]
        }))
    }

    /// Population variance.
    pub fn var(&self) -> Result<Option<f64>, IncidenceError> {
        let xs = self.as_f64s()?;
        Ok(mean(&xs).map(|m| xs.iter().map(|x| (x - m).powi(2)).sum::<f64>() / xs.len() as f64))
    }

    /// Population standard deviation.
    pub fn std(&self) -> Result<Option<f64>, IncidenceError> {
        Ok(self.var()?.map(f64::sqrt))
    }
}

fn mean(xs: &[f64]) -> Option<f64> {
    (!xs.is_empty()).then(|| xs.iter().sum::<f64>() / xs.len() as f64)
}

impl<'a, N: Namespace<'a>> Clone for Stat<'a, N> {
    fn clone(&self) -> Self {
        Self {
            view: self.view.clone(),
            kind: self.kind.clone(),
            cache: self.cache.clone(),
        }
    }
}

impl<'a, N: Namespace<'a>> fmt::Debug for Stat<'a, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stat")
            .field("kind", &self.kind)
            .field("len", &self.view.len())
            .field("evaluated", &self.cache.get().is_some())
            .finish()
    }
}

/// Several statistics over the same view.
pub struct MultiStat<'a, N: Namespace<'a>> {
    stats: Vec<Stat<'a, N>>,
    view: IdView<'a, N>,
}

impl<'a, N: Namespace<'a>> MultiStat<'a, N> {
    pub(crate) fn new(view: IdView<'a, N>, kinds: Vec<N::Stat>) -> Self {
        let stats = kinds
            .into_iter()
            .map(|k| Stat::new(view.clone(), k))
            .collect();
        Self { stats, view }
    }

    pub fn names(&self) -> Vec<String> {
        self.stats.iter().map(Stat::name).collect()
    }

    /// id → (stat name → value).
    pub fn as_map(&self) -> IndexMap<Id, IndexMap<String, Value>> {
        self.view
            .iter()
            .map(|id| {
                let row = self
                    .stats
                    .iter()
                    .map(|s| (s.name(), s.values().get(id).cloned().unwrap_or(Value::Null)))
                    .collect();
                (id.clone(), row)
            })
            .collect()
    }

    /// stat name → (id → value).
    pub fn as_columns(&self) -> IndexMap<String, IndexMap<Id, Value>> {
        self.stats.iter().map(|s| (s.name(), s.as_map())).collect()
    }
}

impl<'a, N: Namespace<'a>> fmt::Debug for MultiStat<'a, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MultiStat")
            .field("names", &self.names())
            .field("len", &self.view.len())
            .finish()
    }
}
