use crate::core::models::ids::AtomId;
use crate::core::models::system::MolecularSystem;

/// One endpoint of a bridge candidate: the SG atom plus the chain and residue
/// identifiers needed for reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BridgeEnd {
    pub chain: char,
    pub residue_number: isize,
    pub atom: AtomId,
}

/// An unordered pair of cysteine SG atoms that passed geometric
/// classification.
///
/// Candidates are always derived, never mutated after creation: one either
/// survives the confidence filter into the report or is discarded. No derived
/// geometry (distance, dihedral) is carried beyond the classification step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BridgeCandidate {
    pub first: BridgeEnd,
    pub second: BridgeEnd,
}

impl BridgeCandidate {
    /// Resolves the reporting identities of an accepted SG pair.
    ///
    /// Returns `None` if either atom cannot be traced back through its residue
    /// to a chain; a malformed pair is simply not a candidate.
    pub fn from_pair(system: &MolecularSystem, atom1: AtomId, atom2: AtomId) -> Option<Self> {
        Some(Self {
            first: resolve_end(system, atom1)?,
            second: resolve_end(system, atom2)?,
        })
    }
}

fn resolve_end(system: &MolecularSystem, atom_id: AtomId) -> Option<BridgeEnd> {
    let atom = system.atom(atom_id)?;
    let residue = system.residue(atom.residue_id)?;
    let chain = system.chain(residue.chain_id)?;
    Some(BridgeEnd {
        chain: chain.id,
        residue_number: residue.id,
        atom: atom_id,
    })
}
