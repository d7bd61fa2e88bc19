use rootwalk_domain::{DomainError, DomainName};
use rustc_hash::FxHashSet;

/// Domains visited by one top-level query, plus the current nesting depth.
///
/// A domain stays visited after its walk returns, so any later CNAME or NS
/// lookup of the same name within the query fails with `ResolutionCycle`.
#[derive(Debug, Default)]
pub(super) struct ResolutionTrail {
    visited: FxHashSet<DomainName>,
    nesting: usize,
}

impl ResolutionTrail {
    pub(super) fn enter(
        &mut self,
        domain: &DomainName,
        max_depth: usize,
    ) -> Result<(), DomainError> {
        if self.visited.contains(domain) {
            return Err(DomainError::ResolutionCycle {
                domain: domain.to_string(),
            });
        }

        // The top-level domain sits at depth 0.
        if self.nesting > max_depth {
            return Err(DomainError::RecursionDepthExceeded {
                domain: domain.to_string(),
                depth: self.nesting,
            });
        }

        self.visited.insert(domain.clone());
        self.nesting += 1;
        Ok(())
    }

    /// Step back out of a finished walk. The domain remains visited.
    pub(super) fn leave(&mut self) {
        self.nesting = self.nesting.saturating_sub(1);
    }

    pub(super) fn depth(&self) -> usize {
        self.nesting.saturating_sub(1)
    }
}
