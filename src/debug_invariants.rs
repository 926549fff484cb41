use crate::incidence_error::IncidenceError;

/// Trait for validating data structure invariants.
pub trait DebugInvariants {
    /// Assert invariants in debug builds or when invariant checking is enabled.
    fn debug_assert_invariants(&self) {
        if let Err(e) = self.validate_invariants() {
            panic!("[invariants] {e}");
        }
    }
    /// Validate invariants and return the first error encountered.
    fn validate_invariants(&self) -> Result<(), IncidenceError>;
}

/// Run [`DebugInvariants::debug_assert_invariants`] on `$s` after a mutation.
///
/// Fires in debug builds and whenever the `strict-invariants` or
/// `check-invariants` feature is enabled; compiles to a no-op otherwise.
#[cfg(any(
    debug_assertions,
    feature = "strict-invariants",
    feature = "check-invariants"
))]
macro_rules! debug_invariants {
    ($s:expr) => {
        $crate::debug_invariants::DebugInvariants::debug_assert_invariants(&$s)
    };
}

#[cfg(not(any(
    debug_assertions,
    feature = "strict-invariants",
    feature = "check-invariants"
)))]
macro_rules! debug_invariants {
    ($s:expr) => {
        ()
    };
}

pub(crate) use debug_invariants;

/// Shorthand for building an [`IncidenceError::InvariantViolation`].
pub(crate) fn violation(msg: impl Into<String>) -> IncidenceError {
    IncidenceError::InvariantViolation(msg.into())
}
