//! Frozen/mutable mode switch checked at the top of every mutator.

use crate::incidence_error::IncidenceError;

/// One flag per container. Once frozen, it stays frozen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MutationGuard {
    frozen: bool,
}

impl MutationGuard {
    /// Disable all further mutation. There is no way back.
    #[inline]
    pub fn freeze(&mut self) {
        self.frozen = true;
    }

    #[inline]
    pub fn is_frozen(&self) -> bool {
        self.frozen
    }

    /// `Err(Frozen)` if mutation is disabled.
    #[inline]
    pub fn check(&self) -> Result<(), IncidenceError> {
        if self.frozen {
            Err(IncidenceError::Frozen)
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn freeze_is_permanent() {
        let mut g = MutationGuard::default();
        assert!(g.check().is_ok());
        g.freeze();
        g.freeze();
        assert!(g.is_frozen());
        assert_eq!(g.check(), Err(IncidenceError::Frozen));
    }
}
