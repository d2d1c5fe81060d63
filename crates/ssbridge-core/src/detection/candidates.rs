use crate::core::models::ids::AtomId;
use crate::core::models::system::MolecularSystem;

const SULFUR_GAMMA_ATOM_NAME: &str = "SG";

/// Collects the SG atoms of every cysteine residue, in structure order
/// (chains as they appear in the source file, residues in chain order).
pub fn cysteine_sulfurs(system: &MolecularSystem) -> Vec<AtomId> {
    let mut sulfurs = Vec::new();
    for (_, chain) in system.chains_iter() {
        for &residue_id in chain.residues() {
            let Some(residue) = system.residue(residue_id) else {
                continue;
            };
            if !residue.is_cysteine() {
                continue;
            }
            if let Some(sg_id) = residue.get_atom_id_by_name(SULFUR_GAMMA_ATOM_NAME) {
                sulfurs.push(sg_id);
            }
        }
    }
    sulfurs
}

/// Enumerates all unordered pairs of cysteine SG atoms.
///
/// n sulfurs yield exactly n * (n - 1) / 2 pairs, each produced once, no atom
/// paired with itself. Full quadratic enumeration; realistic cysteine counts
/// are small enough that spatial pruning is not worth the complexity. An empty
/// cysteine set yields an empty pair list, not an error.
pub fn sulfur_pairs(system: &MolecularSystem) -> Vec<(AtomId, AtomId)> {
    let sulfurs = cysteine_sulfurs(system);
    let mut pairs = Vec::with_capacity(sulfurs.len() * sulfurs.len().saturating_sub(1) / 2);
    for (i, &first) in sulfurs.iter().enumerate() {
        for &second in &sulfurs[i + 1..] {
            pairs.push((first, second));
        }
    }
    pairs
}
