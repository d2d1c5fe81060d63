use super::bridge::BridgeCandidate;
use super::config::DetectionConfig;
use crate::core::models::ids::AtomId;
use crate::core::models::system::{MolecularSystem, Provenance};

/// Provenance-specific confidence policy, selected once per structure.
///
/// The two branches use opposite inequality directions on different scales,
/// so each threshold lives next to its provenance tag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfidencePolicy {
    /// Predicted model: the confidence scalar is a pLDDT score, higher is more
    /// confident. Atoms strictly below the floor are rejected.
    Predicted { min_plddt: f64 },
    /// Experimental structure: the confidence scalar is a B-factor, lower is
    /// more confident. Atoms strictly above the ceiling are rejected.
    Experimental { max_bfactor: f64 },
}

impl ConfidencePolicy {
    /// Selects the policy for a structure's provenance.
    pub fn for_provenance(provenance: Provenance, config: &DetectionConfig) -> Self {
        match provenance {
            Provenance::Predicted => ConfidencePolicy::Predicted {
                min_plddt: config.min_plddt,
            },
            Provenance::Experimental => ConfidencePolicy::Experimental {
                max_bfactor: config.max_bfactor,
            },
        }
    }

    /// Whether a single atom's confidence scalar passes this policy.
    /// Boundary equality passes in both branches.
    pub fn admits(&self, confidence: f64) -> bool {
        match *self {
            ConfidencePolicy::Predicted { min_plddt } => confidence >= min_plddt,
            ConfidencePolicy::Experimental { max_bfactor } => confidence <= max_bfactor,
        }
    }

    /// Discards candidates where either participating atom fails the policy.
    ///
    /// An atom that cannot be resolved in the system is treated as failing;
    /// the candidate is silently dropped, never an error.
    pub fn filter(
        &self,
        system: &MolecularSystem,
        candidates: Vec<BridgeCandidate>,
    ) -> Vec<BridgeCandidate> {
        candidates
            .into_iter()
            .filter(|candidate| {
                self.admits_atom(system, candidate.first.atom)
                    && self.admits_atom(system, candidate.second.atom)
            })
            .collect()
    }

    fn admits_atom(&self, system: &MolecularSystem, atom: AtomId) -> bool {
        system
            .atom(atom)
            .is_some_and(|atom| self.admits(atom.temp_factor))
    }
}
