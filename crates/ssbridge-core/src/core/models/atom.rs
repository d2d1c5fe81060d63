use super::ids::ResidueId;
use nalgebra::Point3;

/// Represents an atom in a molecular structure.
///
/// This struct holds the identity, coordinates, and per-atom confidence scalar
/// of a single atom as read from the structure file. Atoms are read-only views
/// over the loaded structure; nothing in the detection pipeline mutates them.
#[derive(Debug, Clone, PartialEq)]
pub struct Atom {
    /// The name of the atom (e.g., "SG", "CB", "CA").
    pub name: String,
    /// The ID of the parent residue this atom belongs to.
    pub residue_id: ResidueId,
    /// The atom serial number from the source file.
    pub serial: usize,
    /// The 3D coordinates of the atom in Angstroms.
    pub position: Point3<f64>,
    /// The confidence scalar from the temperature-factor column: a
    /// crystallographic B-factor for experimental structures, or a pLDDT score
    /// (0-100) for predicted models. Which scale applies is decided by the
    /// structure-level provenance, never per atom.
    pub temp_factor: f64,
}

impl Atom {
    /// Creates a new `Atom` with a zero temperature factor.
    ///
    /// # Arguments
    ///
    /// * `name` - The name of the atom.
    /// * `residue_id` - The ID of the residue this atom belongs to.
    /// * `position` - The 3D coordinates of the atom.
    pub fn new(name: &str, residue_id: ResidueId, position: Point3<f64>) -> Self {
        Self {
            name: name.to_string(),
            residue_id,
            serial: 0,
            position,
            temp_factor: 0.0,
        }
    }
}
