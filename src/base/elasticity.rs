use super::Constraint;
use crate::StrError;
use russell_lab::Matrix;
use russell_tensor::LinElasticity;

/// Maps the Voigt components (xx, yy, zz, yz, xz, xy) to the Mandel components used by LinElasticity
///
/// The Mandel ordering is (xx, yy, zz, xy, yz, xz) in 3D and (xx, yy, zz, xy) in 2D.
const VOIGT_TO_MANDEL: [usize; 6] = [0, 1, 2, 4, 5, 3];

/// Holds the Voigt components kept by the plane-strain and plane-stress cases
const PLANE_COMPONENTS: [usize; 3] = [0, 1, 5];

/// Holds all Voigt components
const FULL_COMPONENTS: [usize; 6] = [0, 1, 2, 3, 4, 5];

/// Calculates the elastic stiffness matrix C for the given constraint
///
/// The matrix relates the reduced stress and strain vectors (Voigt notation, engineering shear strains):
///
/// ```text
/// σ = C ε
/// ```
///
/// Both uniaxial cases return the bar modulus `[E]`.
///
/// # Input
///
/// * `young` -- Young's modulus E > 0
/// * `poisson` -- Poisson's coefficient -1 < ν < 0.5
/// * `constraint` -- the dimensional reduction
///
/// # Output
///
/// Returns the (qdim × qdim) stiffness matrix
pub fn elastic_stiffness(young: f64, poisson: f64, constraint: Constraint) -> Result<Matrix, StrError> {
    if young <= 0.0 {
        return Err("young must be > 0.0");
    }
    if poisson <= -1.0 || poisson >= 0.5 {
        return Err("poisson must be in (-1.0, 0.5)");
    }
    let n = constraint.qdim();
    let mut cc = Matrix::new(n, n);
    match constraint {
        Constraint::UniaxialStrain | Constraint::UniaxialStress => {
            cc.set(0, 0, young);
        }
        Constraint::PlaneStrain | Constraint::PlaneStress => {
            let plane_stress = constraint == Constraint::PlaneStress;
            let ela = LinElasticity::new(young, poisson, true, plane_stress);
            mandel_to_voigt(&mut cc, ela.get_modulus().matrix(), &PLANE_COMPONENTS);
        }
        Constraint::Full => {
            let ela = LinElasticity::new(young, poisson, false, false);
            mandel_to_voigt(&mut cc, ela.get_modulus().matrix(), &FULL_COMPONENTS);
        }
    }
    Ok(cc)
}

/// Extracts the Voigt stiffness from the Mandel modulus
///
/// ```text
/// Mandel:  σ̄ₛ = √2 σₛ   ε̄ₛ = √2 εₛ = γₛ / √2
/// Voigt:   C_ij = s_i s_j D_ij   with s = 1/√2 for shear components
/// ```
fn mandel_to_voigt(cc: &mut Matrix, dd: &Matrix, components: &[usize]) {
    let factor = |v: usize| if v < 3 { 1.0 } else { std::f64::consts::FRAC_1_SQRT_2 };
    for (i, &vi) in components.iter().enumerate() {
        for (j, &vj) in components.iter().enumerate() {
            let value = factor(vi) * factor(vj) * dd.get(VOIGT_TO_MANDEL[vi], VOIGT_TO_MANDEL[vj]);
            cc.set(i, j, value);
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
