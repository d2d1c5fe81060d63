use serde::Deserialize;

fn default_min_bond_distance() -> f64 {
    1.5
}
fn default_max_bond_distance() -> f64 {
    2.5
}
fn default_min_dihedral_degrees() -> f64 {
    84.0
}
fn default_max_dihedral_degrees() -> f64 {
    96.0
}
fn default_min_plddt() -> f64 {
    40.0
}
fn default_max_bfactor() -> f64 {
    35.0
}

/// Thresholds for the detection pipeline.
///
/// Every field carries a serde default, so a TOML configuration file may set
/// any subset of them. The defaults encode the characteristic disulfide
/// geometry (S-S distance around 2.05 A, torsion around +-90 degrees) and the
/// customary structure-quality cutoffs.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DetectionConfig {
    /// Lower bound of the accepted S-S distance interval, in Angstroms (closed).
    #[serde(default = "default_min_bond_distance")]
    pub min_bond_distance: f64,
    /// Upper bound of the accepted S-S distance interval, in Angstroms (closed).
    #[serde(default = "default_max_bond_distance")]
    pub max_bond_distance: f64,
    /// Lower bound of the accepted CB-SG-SG-CB dihedral magnitude, in degrees (closed).
    #[serde(default = "default_min_dihedral_degrees")]
    pub min_dihedral_degrees: f64,
    /// Upper bound of the accepted CB-SG-SG-CB dihedral magnitude, in degrees (closed).
    #[serde(default = "default_max_dihedral_degrees")]
    pub max_dihedral_degrees: f64,
    /// Minimum pLDDT an atom must reach in a predicted model (strictly below rejects).
    #[serde(default = "default_min_plddt")]
    pub min_plddt: f64,
    /// Maximum B-factor an atom may have in an experimental structure (strictly above rejects).
    #[serde(default = "default_max_bfactor")]
    pub max_bfactor: f64,
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            min_bond_distance: default_min_bond_distance(),
            max_bond_distance: default_max_bond_distance(),
            min_dihedral_degrees: default_min_dihedral_degrees(),
            max_dihedral_degrees: default_max_dihedral_degrees(),
            min_plddt: default_min_plddt(),
            max_bfactor: default_max_bfactor(),
        }
    }
}
