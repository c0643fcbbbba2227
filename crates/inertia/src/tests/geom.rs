//! tests for geometrical operations like the center of mass and the moment of
//! inertia

use approx::assert_abs_diff_eq;

use super::{asymmetric, linear};
use crate::*;

#[test]
fn com() {
    let got = points![
        1.0 0.0 0.0 0.0
        3.0 4.0 0.0 0.0
    ]
    .unwrap()
    .com();
    assert_abs_diff_eq!(got, Vec3::new(3.0, 0.0, 0.0), epsilon = 1e-12);

    // zero-mass points are allowed but do not move the center
    let got = points![
        2.0 1.0 1.0 1.0
        0.0 9.0 9.0 9.0
    ]
    .unwrap()
    .com();
    assert_abs_diff_eq!(got, Vec3::new(1.0, 1.0, 1.0), epsilon = 1e-12);
}

#[test]
fn com_free_function() {
    let got =
        center_of_mass(asymmetric().positions(), asymmetric().masses())
            .unwrap();
    assert_eq!(got, asymmetric().com());
    assert_abs_diff_eq!(asymmetric().total_mass(), 46.025, epsilon = 1e-12);
    assert_abs_diff_eq!(
        got,
        Vec3::new(
            -0.004660510592069568,
            0.795237370994025,
            -0.019430744160782183
        ),
        epsilon = 1e-12
    );
}

#[test]
fn degenerate_input() {
    assert!(PointSet::new(vec![], vec![]).unwrap_err().is_degenerate_input());
    assert!(
        points![0.0 1.0 2.0 3.0]
            .unwrap_err()
            .is_degenerate_input()
    );
    assert!(
        points![
            1.0 1.0 2.0 3.0
            -1.0 1.0 2.0 3.0
        ]
        .unwrap_err()
        .is_degenerate_input()
    );
    assert!(
        PointSet::new(vec![Vec3::zeros(); 2], vec![1.0])
            .unwrap_err()
            .is_degenerate_input()
    );
    assert!(
        PointSet::new(vec![Vec3::zeros()], vec![f64::NAN])
            .unwrap_err()
            .is_degenerate_input()
    );
    assert_eq!(
        center_of_mass(&[Vec3::zeros()], &[0.0]),
        Err(AlignError::DegenerateInput("total mass is 0".to_owned()))
    );
}

#[test]
fn inertia_tensor() {
    let (centered, com) = linear().centered();
    assert_abs_diff_eq!(com, Vec3::zeros(), epsilon = 1e-15);
    let got = centered.moi();
    let want = nalgebra::matrix![
        0.0, 0.0, 0.0;
        0.0, 2.0, 0.0;
        0.0, 0.0, 2.0;
    ];
    assert_abs_diff_eq!(got, want, epsilon = 1e-12);

    // a single off-axis point gives all of the products of inertia
    let got = points![2.0 1.0 2.0 3.0].unwrap().moi();
    let want = nalgebra::matrix![
        26.0, -4.0, -6.0;
        -4.0, 20.0, -12.0;
        -6.0, -12.0, 10.0;
    ];
    assert_abs_diff_eq!(got, want, epsilon = 1e-12);
}

#[test]
fn inertia_tensor_symmetric_psd() {
    let (centered, _) = asymmetric().centered();
    let moi = centered.moi();
    assert_abs_diff_eq!(moi, moi.transpose(), epsilon = 1e-14);
    let eig = nalgebra::SymmetricEigen::new(moi);
    assert!(eig.eigenvalues.iter().all(|&v| v >= 0.0));
}

#[test]
fn translate_and_transform() {
    let mut got = linear();
    got.translate(Vec3::new(1.0, 2.0, 3.0));
    assert_abs_diff_eq!(got.com(), Vec3::new(1.0, 2.0, 3.0), epsilon = 1e-14);

    let swap = nalgebra::matrix![
        0.0, 1.0, 0.0;
        1.0, 0.0, 0.0;
        0.0, 0.0, 1.0;
    ];
    let got = linear().transform(&swap);
    let want = points![
        1.0 0.0  1.0 0.0
        1.0 0.0 -1.0 0.0
        1.0 0.0  0.0 0.0
    ]
    .unwrap();
    assert_abs_diff_eq!(got, want);
}

#[test]
fn axis() {
    assert_eq!(Axis::default(), Axis::Z);
    assert_eq!("x".parse::<Axis>(), Ok(Axis::X));
    assert_eq!("Y".parse::<Axis>(), Ok(Axis::Y));
    assert!("w".parse::<Axis>().is_err());
    assert_eq!(Axis::Y.unit(), Vec3::y());
    assert_eq!(Axis::Z.to_string(), "z");
}
