/// Holds the derivative of the first invariant (constant)
const DI1: [f64; 6] = [1.0, 1.0, 1.0, 0.0, 0.0, 0.0];

/// Calculates the first invariant of a strain vector in Voigt notation and its derivative
///
/// ```text
/// I1 = ε0 + ε1 + ε2
/// ```
///
/// Returns `(I1, dI1/dε)`.
pub fn invariant_i1(v: &[f64; 6]) -> (f64, [f64; 6]) {
    (v[0] + v[1] + v[2], DI1)
}

/// Calculates the second invariant of the deviator of a strain vector in Voigt notation and its derivative
///
/// The shear components are engineering strains (γ = 2ε).
///
/// ```text
/// J2 = [(ε0-ε1)² + (ε1-ε2)² + (ε2-ε0)²] / 6 + (γ3² + γ4² + γ5²) / 4
/// ```
///
/// Returns `(J2, dJ2/dε)`.
pub fn invariant_j2(v: &[f64; 6]) -> (f64, [f64; 6]) {
    let d01 = v[0] - v[1];
    let d12 = v[1] - v[2];
    let d20 = v[2] - v[0];
    let jj2 = (d01 * d01 + d12 * d12 + d20 * d20) / 6.0 + 0.25 * (v[3] * v[3] + v[4] * v[4] + v[5] * v[5]);
    let djj2 = [
        (2.0 * v[0] - v[1] - v[2]) / 3.0,
        (2.0 * v[1] - v[2] - v[0]) / 3.0,
        (2.0 * v[2] - v[0] - v[1]) / 3.0,
        0.5 * v[3],
        0.5 * v[4],
        0.5 * v[5],
    ];
    (jj2, djj2)
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::{invariant_i1, invariant_j2};
    use russell_lab::{approx_eq, deriv1_central5};

    const SAMPLES: [[f64; 6]; 4] = [
        [0.3, -0.7, 1.1, 0.25, -0.4, 0.9],
        [-1.2, 0.5, 0.05, -0.6, 0.8, -0.15],
        [2.0, 2.0, 2.0, 0.0, 0.0, 0.0],
        [0.8, -0.1, -0.45, 1.3, 0.35, -0.75],
    ];

    #[test]
    fn invariant_i1_works() {
        let (ii1, di1) = invariant_i1(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        assert_eq!(ii1, 6.0);
        assert_eq!(di1, [1.0, 1.0, 1.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn invariant_j2_works() {
        // hydrostatic strain has no deviator
        let (jj2, djj2) = invariant_j2(&[2.0, 2.0, 2.0, 0.0, 0.0, 0.0]);
        assert_eq!(jj2, 0.0);
        assert_eq!(djj2, [0.0; 6]);

        // pure shear γxy = 2 → εxy = 1 → J2 = εxy² = 1
        let (jj2, _) = invariant_j2(&[0.0, 0.0, 0.0, 0.0, 0.0, 2.0]);
        approx_eq(jj2, 1.0, 1e-15);

        // uniaxial ε = (1, 0, 0) → J2 = 1/3
        let (jj2, _) = invariant_j2(&[1.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
        approx_eq(jj2, 1.0 / 3.0, 1e-15);
    }

    #[test]
    fn derivatives_match_finite_differences() {
        struct Args {
            v: [f64; 6],
        }
        for sample in &SAMPLES {
            let (_, di1) = invariant_i1(sample);
            let (_, djj2) = invariant_j2(sample);
            let mut args = Args { v: *sample };
            for k in 0..6 {
                let num_i1 = deriv1_central5(sample[k], &mut args, |x, a| {
                    let original = a.v[k];
                    a.v[k] = x;
                    let (res, _) = invariant_i1(&a.v);
                    a.v[k] = original;
                    Ok(res)
                })
                .unwrap();
                let num_j2 = deriv1_central5(sample[k], &mut args, |x, a| {
                    let original = a.v[k];
                    a.v[k] = x;
                    let (res, _) = invariant_j2(&a.v);
                    a.v[k] = original;
                    Ok(res)
                })
                .unwrap();
                approx_eq(di1[k], num_i1, 1e-10);
                approx_eq(djj2[k], num_j2, 1e-10);
            }
        }
    }
}
