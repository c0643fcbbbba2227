use crate::*;

mod geom;

/// a bent, asymmetric set of atoms loosely based on formic acid
fn asymmetric() -> PointSet {
    points![
        12.011  0.0  0.4  0.0
        15.999  1.2  0.9  0.1
        15.999 -1.1  1.1 -0.2
        1.008   0.1 -0.7  0.3
        1.008  -1.9  0.5  0.4
    ]
    .unwrap()
}

/// the three collinear, unit-mass points along x
fn linear() -> PointSet {
    points![
        1.0  1.0 0.0 0.0
        1.0 -1.0 0.0 0.0
        1.0  0.0 0.0 0.0
    ]
    .unwrap()
}

/// Euclidean distances between every pair of points in `points`
fn distances(points: &PointSet) -> Vec<f64> {
    let ps = points.positions();
    let mut ret = Vec::new();
    for (i, p) in ps.iter().enumerate() {
        for q in &ps[i + 1..] {
            ret.push((p - q).norm());
        }
    }
    ret
}
