use super::ids::{AtomId, ChainId};
use phf::{Map, phf_map};
use std::collections::HashMap;

static RESIDUE_TYPES_BY_CODE: Map<&'static str, ResidueType> = phf_map! {
    "ALA" => ResidueType::Alanine,
    "ARG" => ResidueType::Arginine,
    "ASN" => ResidueType::Asparagine,
    "ASP" => ResidueType::AsparticAcid,
    "CYS" => ResidueType::Cysteine,
    "GLN" => ResidueType::Glutamine,
    "GLU" => ResidueType::GlutamicAcid,
    "GLY" => ResidueType::Glycine,
    "HIS" => ResidueType::Histidine,
    "ILE" => ResidueType::Isoleucine,
    "LEU" => ResidueType::Leucine,
    "LYS" => ResidueType::Lysine,
    "MET" => ResidueType::Methionine,
    "PHE" => ResidueType::Phenylalanine,
    "PRO" => ResidueType::Proline,
    "SER" => ResidueType::Serine,
    "THR" => ResidueType::Threonine,
    "TRP" => ResidueType::Tryptophan,
    "TYR" => ResidueType::Tyrosine,
    "VAL" => ResidueType::Valine,
};

/// The twenty standard amino acid residue types.
///
/// Only [`ResidueType::Cysteine`] is relevant to bridge detection, but typing
/// every standard residue keeps hetero groups (ligands, waters, modified
/// residues) cleanly distinguishable as `None` at the `Residue` level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResidueType {
    Alanine,
    Arginine,
    Asparagine,
    AsparticAcid,
    Cysteine,
    Glutamine,
    GlutamicAcid,
    Glycine,
    Histidine,
    Isoleucine,
    Leucine,
    Lysine,
    Methionine,
    Phenylalanine,
    Proline,
    Serine,
    Threonine,
    Tryptophan,
    Tyrosine,
    Valine,
}

impl ResidueType {
    /// Looks up a residue type by its three-letter PDB code (case-insensitive).
    pub fn from_three_letter(code: &str) -> Option<Self> {
        RESIDUE_TYPES_BY_CODE
            .get(code.to_ascii_uppercase().as_str())
            .copied()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Residue {
    pub id: isize,                     // Residue sequence number from source file
    pub icode: Option<char>,           // PDB insertion code, if any
    pub name: String,                  // Name of the residue (e.g., "CYS", "GLY")
    pub residue_type: Option<ResidueType>, // Standard amino acid type, None for hetero groups
    pub chain_id: ChainId,             // ID of the parent chain
    pub(crate) atoms: Vec<AtomId>,     // IDs of atoms belonging to this residue
    atom_name_map: HashMap<String, AtomId>, // Map from atom name to its stable ID
}

impl Residue {
    pub(crate) fn new(
        id: isize,
        icode: Option<char>,
        name: &str,
        residue_type: Option<ResidueType>,
        chain_id: ChainId,
    ) -> Self {
        Self {
            id,
            icode,
            name: name.to_string(),
            residue_type,
            chain_id,
            atoms: Vec::new(),
            atom_name_map: HashMap::new(),
        }
    }

    pub(crate) fn add_atom(&mut self, atom_name: &str, atom_id: AtomId) {
        self.atoms.push(atom_id);
        self.atom_name_map.insert(atom_name.to_string(), atom_id);
    }

    pub fn get_atom_id_by_name(&self, name: &str) -> Option<AtomId> {
        self.atom_name_map.get(name).copied()
    }

    pub fn is_cysteine(&self) -> bool {
        self.residue_type == Some(ResidueType::Cysteine)
    }
}
