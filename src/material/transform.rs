use crate::base::Constraint;
use russell_lab::Matrix;

/// Calculates the matrix T (6 × qdim) that maps the reduced strain vector to the 3D Voigt strain vector
///
/// ```text
/// ε3D = T ε
/// ```
///
/// The transpose maps a gradient w.r.t. ε3D back to a gradient w.r.t. the reduced strain.
///
/// * `UniaxialStrain` -- only the axial component is non-zero
/// * `UniaxialStress` -- the lateral strains are -ν times the axial strain (zero lateral stress)
/// * `PlaneStrain` -- the out-of-plane strain is zero
/// * `PlaneStress` -- the out-of-plane strain is ν/(ν-1) times the sum of the in-plane strains (zero out-of-plane stress)
/// * `Full` -- identity
pub fn transform_to_3d(poisson: f64, constraint: Constraint) -> Matrix {
    let nu = poisson;
    let mut tt = Matrix::new(6, constraint.qdim());
    match constraint {
        Constraint::UniaxialStrain => {
            tt.set(0, 0, 1.0);
        }
        Constraint::UniaxialStress => {
            tt.set(0, 0, 1.0);
            tt.set(1, 0, -nu);
            tt.set(2, 0, -nu);
        }
        Constraint::PlaneStrain => {
            tt.set(0, 0, 1.0);
            tt.set(1, 1, 1.0);
            tt.set(5, 2, 1.0);
        }
        Constraint::PlaneStress => {
            tt.set(0, 0, 1.0);
            tt.set(1, 1, 1.0);
            tt.set(2, 0, nu / (nu - 1.0));
            tt.set(2, 1, nu / (nu - 1.0));
            tt.set(5, 2, 1.0);
        }
        Constraint::Full => {
            for i in 0..6 {
                tt.set(i, i, 1.0);
            }
        }
    }
    tt
}

/// Maps a reduced strain vector to the 3D Voigt vector: `ε3D = T ε`
///
/// # Panics
///
/// A panic will occur if the length of the strain does not match the number of columns of T.
pub fn strain_to_3d(tt: &Matrix, strain: &[f64]) -> [f64; 6] {
    assert_eq!(strain.len(), tt.ncol());
    let mut v = [0.0; 6];
    for i in 0..6 {
        for j in 0..strain.len() {
            v[i] += tt.get(i, j) * strain[j];
        }
    }
    v
}

/// Maps a gradient w.r.t. the 3D Voigt vector back to the reduced space: `g = Tᵗ g3D`
///
/// # Panics
///
/// A panic will occur if the length of the output does not match the number of columns of T.
pub fn gradient_from_3d(g: &mut [f64], tt: &Matrix, g3d: &[f64; 6]) {
    assert_eq!(g.len(), tt.ncol());
    for j in 0..g.len() {
        g[j] = 0.0;
        for i in 0..6 {
            g[j] += tt.get(i, j) * g3d[i];
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::{gradient_from_3d, strain_to_3d, transform_to_3d};
    use crate::base::{elastic_stiffness, Constraint};
    use russell_lab::{approx_eq, vec_approx_eq, Vector};

    #[test]
    fn dimensions_are_correct() {
        for c in Constraint::ALL {
            let tt = transform_to_3d(0.2, c);
            assert_eq!(tt.dims(), (6, c.qdim()));
        }
    }

    #[test]
    fn strain_to_3d_works() {
        let nu = 0.25;
        let tt = transform_to_3d(nu, Constraint::UniaxialStrain);
        vec_approx_eq(&Vector::from(&strain_to_3d(&tt, &[2.0])), &[2.0, 0.0, 0.0, 0.0, 0.0, 0.0], 1e-15);

        let tt = transform_to_3d(nu, Constraint::UniaxialStress);
        vec_approx_eq(&Vector::from(&strain_to_3d(&tt, &[2.0])), &[2.0, -0.5, -0.5, 0.0, 0.0, 0.0], 1e-15);

        let tt = transform_to_3d(nu, Constraint::PlaneStrain);
        vec_approx_eq(
            &Vector::from(&strain_to_3d(&tt, &[1.0, 2.0, 3.0])),
            &[1.0, 2.0, 0.0, 0.0, 0.0, 3.0],
            1e-15,
        );

        let tt = transform_to_3d(nu, Constraint::PlaneStress);
        vec_approx_eq(
            &Vector::from(&strain_to_3d(&tt, &[1.0, 2.0, 3.0])),
            &[1.0, 2.0, -1.0, 0.0, 0.0, 3.0],
            1e-15,
        );

        let tt = transform_to_3d(nu, Constraint::Full);
        let eps = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        vec_approx_eq(&Vector::from(&strain_to_3d(&tt, &eps)), &eps, 1e-15);
    }

    #[test]
    fn gradient_from_3d_is_the_transpose() {
        let nu = 0.2;
        let g3d = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        for c in Constraint::ALL {
            let tt = transform_to_3d(nu, c);
            let mut g = vec![0.0; c.qdim()];
            gradient_from_3d(&mut g, &tt, &g3d);
            // (Tᵗ g3D) · ε = g3D · (T ε)
            let eps: Vec<_> = (0..c.qdim()).map(|i| 0.5 + i as f64).collect();
            let lhs: f64 = g.iter().zip(eps.iter()).map(|(a, b)| a * b).sum();
            let rhs: f64 = strain_to_3d(&tt, &eps).iter().zip(g3d.iter()).map(|(a, b)| a * b).sum();
            approx_eq(lhs, rhs, 1e-14);
        }
    }

    #[test]
    fn reduced_stress_components_vanish() {
        // the 3D elastic stress of the transformed strain must satisfy the stress constraints
        let (young, nu) = (1000.0, 0.2);
        let cc = elastic_stiffness(young, nu, Constraint::Full).unwrap();
        let stress_3d = |eps: &[f64; 6]| -> Vec<f64> {
            (0..6).map(|i| (0..6).map(|j| cc.get(i, j) * eps[j]).sum()).collect()
        };

        let tt = transform_to_3d(nu, Constraint::UniaxialStress);
        let sig = stress_3d(&strain_to_3d(&tt, &[0.01]));
        approx_eq(sig[0], young * 0.01, 1e-12);
        approx_eq(sig[1], 0.0, 1e-12);
        approx_eq(sig[2], 0.0, 1e-12);

        let tt = transform_to_3d(nu, Constraint::PlaneStress);
        let sig = stress_3d(&strain_to_3d(&tt, &[0.01, -0.004, 0.003]));
        approx_eq(sig[2], 0.0, 1e-12);
    }

    #[test]
    #[should_panic]
    fn strain_to_3d_panics_on_wrong_dimension() {
        let tt = transform_to_3d(0.2, Constraint::PlaneStrain);
        strain_to_3d(&tt, &[1.0]);
    }
}
