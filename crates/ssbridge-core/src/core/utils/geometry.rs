use nalgebra::Point3;

pub fn distance(p1: &Point3<f64>, p2: &Point3<f64>) -> f64 {
    (p1 - p2).norm()
}

/// Signed torsion angle in degrees over the four-point chain p1-p2-p3-p4,
/// in (-180, 180]. Returns `None` when the geometry is degenerate (collinear
/// or coincident points leave the torsion undefined).
pub fn dihedral_degrees(
    p1: &Point3<f64>,
    p2: &Point3<f64>,
    p3: &Point3<f64>,
    p4: &Point3<f64>,
) -> Option<f64> {
    let b1 = p2 - p1;
    let b2 = p3 - p2;
    let b3 = p4 - p3;

    let n1 = b1.cross(&b2);
    let n2 = b2.cross(&b3);

    if n1.norm_squared() == 0.0 || n2.norm_squared() == 0.0 || b2.norm_squared() == 0.0 {
        return None;
    }

    let b2_unit = b2.normalize();
    let m1 = n1.cross(&b2_unit);

    let x = n1.dot(&n2);
    let y = m1.dot(&n2);
    let angle = y.atan2(x).to_degrees();
    if angle.is_finite() { Some(angle) } else { None }
}
