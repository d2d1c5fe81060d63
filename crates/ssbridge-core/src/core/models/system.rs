use super::atom::Atom;
use super::chain::{Chain, ChainType};
use super::ids::{AtomId, ChainId, ResidueId};
use super::residue::{Residue, ResidueType};
use slotmap::SlotMap;
use std::collections::HashMap;

/// Whether a structure originated from a computational prediction method or
/// from experimental determination.
///
/// Provenance is fixed once at load time and applied uniformly to every
/// candidate; it governs which confidence scale (pLDDT vs. B-factor) and which
/// threshold direction the confidence filter uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Provenance {
    /// Experimentally determined structure; the temperature-factor column
    /// carries crystallographic B-factors (lower = more confident).
    #[default]
    Experimental,
    /// Computationally predicted model; the temperature-factor column carries
    /// pLDDT scores 0-100 (higher = more confident).
    Predicted,
}

/// Represents a complete molecular structure with atoms, residues, and chains.
///
/// This struct is the central data structure of the library. All components are
/// stored in slot maps for stable, non-owning cross-references, and lookup maps
/// are maintained for O(1) identity-based access. Once loaded, the detection
/// pipeline treats the system as read-only.
#[derive(Debug, Clone, Default)]
pub struct MolecularSystem {
    /// Primary storage for atoms using a slot map for efficient ID management.
    atoms: SlotMap<AtomId, Atom>,
    /// Primary storage for residues using a slot map for efficient ID management.
    residues: SlotMap<ResidueId, Residue>,
    /// Primary storage for chains using a slot map for efficient ID management.
    chains: SlotMap<ChainId, Chain>,
    /// Chain IDs in source-file order.
    chain_order: Vec<ChainId>,
    /// Lookup map for finding residues by chain, sequence number, and insertion code.
    residue_id_map: HashMap<(ChainId, isize, Option<char>), ResidueId>,
    /// Lookup map for finding chains by their single-character identifier.
    chain_id_map: HashMap<char, ChainId>,
    /// Source provenance of the structure, fixed at load time.
    provenance: Provenance,
}

impl MolecularSystem {
    /// Creates a new, empty molecular system with experimental provenance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Retrieves an immutable reference to an atom by its ID.
    pub fn atom(&self, id: AtomId) -> Option<&Atom> {
        self.atoms.get(id)
    }

    /// Returns an iterator over all atoms in the system.
    pub fn atoms_iter(&self) -> impl Iterator<Item = (AtomId, &Atom)> {
        self.atoms.iter()
    }

    /// Retrieves an immutable reference to a residue by its ID.
    pub fn residue(&self, id: ResidueId) -> Option<&Residue> {
        self.residues.get(id)
    }

    /// Returns an iterator over all residues in the system.
    pub fn residues_iter(&self) -> impl Iterator<Item = (ResidueId, &Residue)> {
        self.residues.iter()
    }

    /// Retrieves an immutable reference to a chain by its ID.
    pub fn chain(&self, id: ChainId) -> Option<&Chain> {
        self.chains.get(id)
    }

    /// Returns an iterator over all chains in source-file order.
    pub fn chains_iter(&self) -> impl Iterator<Item = (ChainId, &Chain)> {
        self.chain_order
            .iter()
            .filter_map(|&id| self.chains.get(id).map(|chain| (id, chain)))
    }

    /// Returns the structure's source provenance.
    pub fn provenance(&self) -> Provenance {
        self.provenance
    }

    /// Fixes the structure's source provenance.
    ///
    /// Called once by the structure loader; the detection pipeline never
    /// recomputes provenance per atom or per residue.
    pub fn set_provenance(&mut self, provenance: Provenance) {
        self.provenance = provenance;
    }

    /// Finds a chain ID by its single-character identifier.
    pub fn find_chain_by_id(&self, id: char) -> Option<ChainId> {
        self.chain_id_map.get(&id).copied()
    }

    /// Finds a residue ID by its chain, sequence number, and insertion code.
    pub fn find_residue_by_id(
        &self,
        chain_id: ChainId,
        residue_number: isize,
        icode: Option<char>,
    ) -> Option<ResidueId> {
        self.residue_id_map
            .get(&(chain_id, residue_number, icode))
            .copied()
    }

    /// Adds a new chain to the system or returns the existing one.
    ///
    /// This method is idempotent; if a chain with the given ID already exists,
    /// it returns the existing chain ID without creating a duplicate.
    pub fn add_chain(&mut self, id: char, chain_type: ChainType) -> ChainId {
        *self.chain_id_map.entry(id).or_insert_with(|| {
            let chain_id = self.chains.insert(Chain::new(id, chain_type));
            self.chain_order.push(chain_id);
            chain_id
        })
    }

    /// Adds a new residue to the system or returns the existing one.
    ///
    /// Idempotent on the (chain, sequence number, insertion code) identity.
    /// The residue type is derived from the three-letter residue name;
    /// unrecognized names (hetero groups) yield an untyped residue.
    ///
    /// # Return
    ///
    /// Returns `Some(ResidueId)` if successful, otherwise `None` (e.g., if the
    /// chain does not exist).
    pub fn add_residue(
        &mut self,
        chain_id: ChainId,
        residue_number: isize,
        icode: Option<char>,
        name: &str,
    ) -> Option<ResidueId> {
        let chain = self.chains.get_mut(chain_id)?;
        let key = (chain_id, residue_number, icode);

        let residue_id = *self.residue_id_map.entry(key).or_insert_with(|| {
            let residue_type = ResidueType::from_three_letter(name);
            let residue = Residue::new(residue_number, icode, name, residue_type, chain_id);
            self.residues.insert(residue)
        });

        if !chain.residues.contains(&residue_id) {
            chain.residues.push(residue_id);
        }

        Some(residue_id)
    }

    /// Adds an atom to a specific residue.
    ///
    /// # Return
    ///
    /// Returns `Some(AtomId)` if successful, otherwise `None` (e.g., if the
    /// residue does not exist).
    pub fn add_atom_to_residue(&mut self, residue_id: ResidueId, atom: Atom) -> Option<AtomId> {
        if !self.residues.contains_key(residue_id) {
            return None;
        }

        let name = atom.name.clone();
        let atom_id = self.atoms.insert(atom);

        let residue = self.residues.get_mut(residue_id)?;
        residue.add_atom(&name, atom_id);

        Some(atom_id)
    }
}
