use super::config::DetectionConfig;
use crate::core::models::ids::AtomId;
use crate::core::models::system::MolecularSystem;
use crate::core::utils::geometry;

const BETA_CARBON_ATOM_NAME: &str = "CB";

/// Decides bond plausibility for one SG pair via two sequential tests.
///
/// 1. Distance gate: the S-S distance must lie in the closed interval
///    `[min_bond_distance, max_bond_distance]`. Pairs outside it are rejected
///    without touching any further geometry.
/// 2. Dihedral gate: the CB-SG-SG-CB torsion magnitude, in degrees, must lie
///    in the closed interval `[min_dihedral_degrees, max_dihedral_degrees]`.
///
/// Any failure to retrieve the atoms or compute the geometry (missing CB,
/// degenerate coordinates) rejects the pair; classification never errors.
/// The decision is deterministic and symmetric in its two atoms.
pub fn is_plausible_bridge(
    system: &MolecularSystem,
    atom1: AtomId,
    atom2: AtomId,
    config: &DetectionConfig,
) -> bool {
    let Some(sg1) = system.atom(atom1) else {
        return false;
    };
    let Some(sg2) = system.atom(atom2) else {
        return false;
    };

    let distance = geometry::distance(&sg1.position, &sg2.position);
    if !passes_distance_gate(distance, config) {
        return false;
    }

    let Some(cb1) = beta_carbon_position(system, atom1) else {
        return false;
    };
    let Some(cb2) = beta_carbon_position(system, atom2) else {
        return false;
    };

    // Unsigned torsion magnitude in [0, 180]; the accepted window sits around
    // the characteristic +-90 degree disulfide geometry.
    let Some(dihedral) = geometry::dihedral_degrees(&cb1, &sg1.position, &sg2.position, &cb2)
    else {
        return false;
    };

    passes_dihedral_gate(dihedral.abs(), config)
}

/// Distance gate: closed interval, boundary values pass.
pub fn passes_distance_gate(distance: f64, config: &DetectionConfig) -> bool {
    distance >= config.min_bond_distance && distance <= config.max_bond_distance
}

/// Dihedral gate over the unsigned torsion magnitude in degrees: closed
/// interval, boundary values pass.
pub fn passes_dihedral_gate(magnitude_degrees: f64, config: &DetectionConfig) -> bool {
    magnitude_degrees >= config.min_dihedral_degrees
        && magnitude_degrees <= config.max_dihedral_degrees
}

fn beta_carbon_position(
    system: &MolecularSystem,
    sg_id: AtomId,
) -> Option<nalgebra::Point3<f64>> {
    let sg = system.atom(sg_id)?;
    let residue = system.residue(sg.residue_id)?;
    let cb_id = residue.get_atom_id_by_name(BETA_CARBON_ATOM_NAME)?;
    Some(system.atom(cb_id)?.position)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::atom::Atom;
    use crate::core::models::chain::ChainType;
    use nalgebra::Point3;

    /// Builds two cysteines whose SG atoms sit `separation` apart along x and
    /// whose CB offsets produce a torsion of `90 - phi_degrees`.
    fn cysteine_pair(separation: f64, phi_degrees: f64) -> (MolecularSystem, AtomId, AtomId) {
        let mut system = MolecularSystem::new();
        let chain = system.add_chain('A', ChainType::Protein);

        let res1 = system.add_residue(chain, 1, None, "CYS").unwrap();
        system
            .add_atom_to_residue(res1, Atom::new("CB", res1, Point3::new(0.0, 1.7, 0.0)))
            .unwrap();
        let sg1 = system
            .add_atom_to_residue(res1, Atom::new("SG", res1, Point3::origin()))
            .unwrap();

        let res2 = system.add_residue(chain, 2, None, "CYS").unwrap();
        let phi = phi_degrees.to_radians();
        let cb2 = Point3::new(separation, 1.7 * phi.sin(), 1.7 * phi.cos());
        system
            .add_atom_to_residue(res2, Atom::new("CB", res2, cb2))
            .unwrap();
        let sg2 = system
            .add_atom_to_residue(
                res2,
                Atom::new("SG", res2, Point3::new(separation, 0.0, 0.0)),
            )
            .unwrap();

        (system, sg1, sg2)
    }

    #[test]
    fn ideal_geometry_is_accepted() {
        let (system, sg1, sg2) = cysteine_pair(2.05, 0.0);
        assert!(is_plausible_bridge(
            &system,
            sg1,
            sg2,
            &DetectionConfig::default()
        ));
    }

    #[test]
    fn classification_is_symmetric() {
        let config = DetectionConfig::default();
        let (system, sg1, sg2) = cysteine_pair(2.05, 0.0);
        assert_eq!(
            is_plausible_bridge(&system, sg1, sg2, &config),
            is_plausible_bridge(&system, sg2, sg1, &config)
        );

        let (system, sg1, sg2) = cysteine_pair(3.0, 0.0);
        assert_eq!(
            is_plausible_bridge(&system, sg1, sg2, &config),
            is_plausible_bridge(&system, sg2, sg1, &config)
        );
    }

    #[test]
    fn classification_is_deterministic() {
        let config = DetectionConfig::default();
        let (system, sg1, sg2) = cysteine_pair(2.05, 3.0);
        let first = is_plausible_bridge(&system, sg1, sg2, &config);
        for _ in 0..10 {
            assert_eq!(is_plausible_bridge(&system, sg1, sg2, &config), first);
        }
    }

    #[test]
    fn distance_boundaries_are_inclusive() {
        let config = DetectionConfig::default();
        for separation in [1.5, 2.5] {
            let (system, sg1, sg2) = cysteine_pair(separation, 0.0);
            assert!(
                is_plausible_bridge(&system, sg1, sg2, &config),
                "distance {} should pass",
                separation
            );
        }
        for separation in [1.49, 2.51] {
            let (system, sg1, sg2) = cysteine_pair(separation, 0.0);
            assert!(
                !is_plausible_bridge(&system, sg1, sg2, &config),
                "distance {} should fail",
                separation
            );
        }
    }

    #[test]
    fn dihedral_boundaries_are_inclusive() {
        let config = DetectionConfig::default();
        assert!(passes_dihedral_gate(84.0, &config));
        assert!(passes_dihedral_gate(96.0, &config));
        assert!(passes_dihedral_gate(90.0, &config));
        assert!(!passes_dihedral_gate(83.9, &config));
        assert!(!passes_dihedral_gate(96.1, &config));
    }

    #[test]
    fn distance_gate_boundaries_are_inclusive() {
        let config = DetectionConfig::default();
        assert!(passes_distance_gate(1.5, &config));
        assert!(passes_distance_gate(2.5, &config));
        assert!(!passes_distance_gate(1.49, &config));
        assert!(!passes_distance_gate(2.51, &config));
    }

    #[test]
    fn torsion_window_is_enforced_on_coordinates() {
        let config = DetectionConfig::default();
        // phi tilts the second CB offset; the resulting torsion is 90 - phi.
        for (phi, expected) in [
            (5.0, true),   // 85 degrees
            (-5.0, true),  // 95 degrees
            (7.0, false),  // 83 degrees
            (-7.0, false), // 97 degrees
        ] {
            let (system, sg1, sg2) = cysteine_pair(2.05, phi);
            assert_eq!(
                is_plausible_bridge(&system, sg1, sg2, &config),
                expected,
                "torsion {} degrees",
                90.0 - phi
            );
        }
    }

    #[test]
    fn missing_beta_carbon_rejects_pair() {
        let mut system = MolecularSystem::new();
        let chain = system.add_chain('A', ChainType::Protein);
        let res1 = system.add_residue(chain, 1, None, "CYS").unwrap();
        let sg1 = system
            .add_atom_to_residue(res1, Atom::new("SG", res1, Point3::origin()))
            .unwrap();
        let res2 = system.add_residue(chain, 2, None, "CYS").unwrap();
        system
            .add_atom_to_residue(res2, Atom::new("CB", res2, Point3::new(2.0, 1.7, 0.0)))
            .unwrap();
        let sg2 = system
            .add_atom_to_residue(res2, Atom::new("SG", res2, Point3::new(2.0, 0.0, 0.0)))
            .unwrap();

        assert!(!is_plausible_bridge(
            &system,
            sg1,
            sg2,
            &DetectionConfig::default()
        ));
    }

    #[test]
    fn degenerate_geometry_rejects_pair() {
        // CB atoms collinear with the S-S axis leave the torsion undefined.
        let mut system = MolecularSystem::new();
        let chain = system.add_chain('A', ChainType::Protein);
        let res1 = system.add_residue(chain, 1, None, "CYS").unwrap();
        system
            .add_atom_to_residue(res1, Atom::new("CB", res1, Point3::new(-1.0, 0.0, 0.0)))
            .unwrap();
        let sg1 = system
            .add_atom_to_residue(res1, Atom::new("SG", res1, Point3::origin()))
            .unwrap();
        let res2 = system.add_residue(chain, 2, None, "CYS").unwrap();
        system
            .add_atom_to_residue(res2, Atom::new("CB", res2, Point3::new(3.0, 0.0, 0.0)))
            .unwrap();
        let sg2 = system
            .add_atom_to_residue(res2, Atom::new("SG", res2, Point3::new(2.0, 0.0, 0.0)))
            .unwrap();

        assert!(!is_plausible_bridge(
            &system,
            sg1,
            sg2,
            &DetectionConfig::default()
        ));
    }

    #[test]
    fn far_pair_is_rejected_before_dihedral_lookup() {
        // No CB atoms at all; the distance gate alone must reject this pair.
        let mut system = MolecularSystem::new();
        let chain = system.add_chain('A', ChainType::Protein);
        let res1 = system.add_residue(chain, 1, None, "CYS").unwrap();
        let sg1 = system
            .add_atom_to_residue(res1, Atom::new("SG", res1, Point3::origin()))
            .unwrap();
        let res2 = system.add_residue(chain, 2, None, "CYS").unwrap();
        let sg2 = system
            .add_atom_to_residue(res2, Atom::new("SG", res2, Point3::new(10.0, 0.0, 0.0)))
            .unwrap();

        assert!(!is_plausible_bridge(
            &system,
            sg1,
            sg2,
            &DetectionConfig::default()
        ));
    }
}
