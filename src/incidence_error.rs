//! IncidenceError: Unified error type for hyper-sieve public APIs
//!
//! Every fallible operation on stores, views, statistics and containers returns
//! this error. Mutators validate before touching state, so an `Err` always means
//! the container is exactly as it was before the call.

use crate::incidence::id::Id;
use thiserror::Error;

/// Unified error type for hyper-sieve operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum IncidenceError {
    /// The node id does not exist in the container.
    #[error("node `{0}` not found")]
    NodeNotFound(Id),
    /// The edge id does not exist in the container.
    #[error("edge `{0}` not found")]
    EdgeNotFound(Id),
    /// The edge exists but does not contain the node.
    #[error("node `{node}` is not a member of edge `{edge}`")]
    NotAMember { edge: Id, node: Id },
    /// The id exists in the container but is outside the scope of the view.
    #[error("id `{0}` is not in this view")]
    NotInView(Id),
    /// Structurally malformed input given to a mutator or loader.
    #[error("invalid structure: {0}")]
    InvalidStructure(String),
    /// Mutation attempted on a frozen container.
    #[error("container is frozen and cannot be modified")]
    Frozen,
    /// Unknown statistic or filter name, or values that cannot be compared.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// Duality, closure or index bookkeeping is broken.
    #[error("invariant violated: {0}")]
    InvariantViolation(String),
}

impl IncidenceError {
    /// True for the `NotFound` family (`NodeNotFound`, `EdgeNotFound`,
    /// `NotAMember`, `NotInView`).
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            IncidenceError::NodeNotFound(_)
                | IncidenceError::EdgeNotFound(_)
                | IncidenceError::NotAMember { .. }
                | IncidenceError::NotInView(_)
        )
    }
}
