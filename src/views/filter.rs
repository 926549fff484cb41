//! Comparison modes for `filterby` and the value ordering they rely on.

use std::cmp::Ordering;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::incidence_error::IncidenceError;

/// How a statistic value is compared against the filter value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterMode {
    #[default]
    Eq,
    Neq,
    Lt,
    Gt,
    Leq,
    Geq,
    /// Inclusive range; the filter value is a two-element array `[lo, hi]`.
    Between,
}

impl FromStr for FilterMode {
    type Err = IncidenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "eq" => FilterMode::Eq,
            "neq" => FilterMode::Neq,
            "lt" => FilterMode::Lt,
            "gt" => FilterMode::Gt,
            "leq" => FilterMode::Leq,
            "geq" => FilterMode::Geq,
            "between" => FilterMode::Between,
            other => {
                return Err(IncidenceError::InvalidArgument(format!(
                    "unknown filter mode `{other}`"
                )));
            }
        })
    }
}

/// Order two values: numbers numerically, strings and booleans among themselves.
pub(crate) fn order(lhs: &Value, rhs: &Value) -> Result<Ordering, IncidenceError> {
    let ord = match (lhs, rhs) {
        (Value::Number(a), Value::Number(b)) => match (exact(a), exact(b)) {
            (Some(a), Some(b)) => Some(a.cmp(&b)),
            _ => a
                .as_f64()
                .zip(b.as_f64())
                .and_then(|(a, b)| a.partial_cmp(&b)),
        },
        (Value::String(a), Value::String(b)) => Some(a.cmp(b)),
        (Value::Bool(a), Value::Bool(b)) => Some(a.cmp(b)),
        _ => None,
    };
    ord.ok_or_else(|| {
        IncidenceError::InvalidArgument(format!("cannot compare {lhs} with {rhs}"))
    })
}

/// Integral numbers widened losslessly; `None` for fractional ones.
fn exact(n: &serde_json::Number) -> Option<i128> {
    n.as_i64()
        .map(i128::from)
        .or_else(|| n.as_u64().map(i128::from))
}

/// Whether `lhs` passes the filter `mode` against `rhs`.
///
/// A missing (`null`) statistic never passes. `Eq`/`Neq` fall back to
/// structural equality for values without an ordering; the ordered modes
/// fail with `InvalidArgument` instead.
pub(crate) fn passes(lhs: &Value, rhs: &Value, mode: FilterMode) -> Result<bool, IncidenceError> {
    if lhs.is_null() {
        return Ok(false);
    }
    match mode {
        FilterMode::Eq | FilterMode::Neq => {
            let equal = match order(lhs, rhs) {
                Ok(o) => o == Ordering::Equal,
                Err(_) => lhs == rhs,
            };
            Ok(equal == (mode == FilterMode::Eq))
        }
        FilterMode::Lt => Ok(order(lhs, rhs)? == Ordering::Less),
        FilterMode::Gt => Ok(order(lhs, rhs)? == Ordering::Greater),
        FilterMode::Leq => Ok(order(lhs, rhs)? != Ordering::Greater),
        FilterMode::Geq => Ok(order(lhs, rhs)? != Ordering::Less),
        FilterMode::Between => match rhs.as_array().map(Vec::as_slice) {
            Some([lo, hi]) => {
                Ok(order(lhs, lo)? != Ordering::Less && order(lhs, hi)? != Ordering::Greater)
            }
            _ => Err(IncidenceError::InvalidArgument(format!(
                "`between` expects a two-element array, got {rhs}"
            ))),
        },
    }
}
