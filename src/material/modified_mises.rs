use super::{gradient_from_3d, invariant_i1, invariant_j2, strain_to_3d, transform_to_3d};
use crate::base::Constraint;
use russell_lab::Matrix;

/// Holds the regularization added to the square root term to avoid a division by zero at ε = 0
const REGULARIZER: f64 = 1e-14;

/// Implements the modified von Mises equivalent strain
///
/// ```text
/// εeq = K1 I1 + √(K1² I1² + K2 J2)
///
/// K1 = (k - 1) / (2 k (1 - 2ν))
/// K2 = 3 / (k (1 + ν)²)
/// ```
///
/// where k is the ratio between the compressive and the tensile strength. The invariants are
/// computed from the 3D strain obtained from the reduced strain via [transform_to_3d].
#[derive(Clone, Debug)]
pub struct ModifiedMises {
    /// Coefficient of the first invariant
    k1: f64,

    /// Coefficient of the second deviatoric invariant
    k2: f64,

    /// Reduced-to-3D transformation matrix (6 × qdim)
    tt: Matrix,
}

impl ModifiedMises {
    /// Allocates a new instance
    ///
    /// # Input
    ///
    /// * `k` -- ratio between compressive and tensile strength (k > 0)
    /// * `poisson` -- Poisson's coefficient
    /// * `constraint` -- the dimensional reduction
    pub fn new(k: f64, poisson: f64, constraint: Constraint) -> Self {
        ModifiedMises {
            k1: (k - 1.0) / (2.0 * k * (1.0 - 2.0 * poisson)),
            k2: 3.0 / (k * (1.0 + poisson) * (1.0 + poisson)),
            tt: transform_to_3d(poisson, constraint),
        }
    }

    /// Returns the dimension of the reduced strain vector
    pub fn qdim(&self) -> usize {
        self.tt.ncol()
    }

    /// Calculates the equivalent strain and its gradient w.r.t. the reduced strain
    ///
    /// # Output
    ///
    /// * `deeq` -- the gradient dεeq/dε (qdim)
    ///
    /// # Input
    ///
    /// * `strain` -- the reduced strain vector (qdim)
    ///
    /// Returns εeq.
    ///
    /// # Panics
    ///
    /// A panic will occur if the slices do not have length qdim.
    pub fn evaluate(&self, deeq: &mut [f64], strain: &[f64]) -> f64 {
        let eps = strain_to_3d(&self.tt, strain);
        let (ii1, di1) = invariant_i1(&eps);
        let (jj2, djj2) = invariant_j2(&eps);

        let (k1, k2) = (self.k1, self.k2);
        let aa = f64::sqrt(k1 * k1 * ii1 * ii1 + k2 * jj2) + REGULARIZER;
        let eeq = k1 * ii1 + aa;
        let deeq_di1 = k1 + k1 * k1 * ii1 / aa;
        let deeq_djj2 = k2 / (2.0 * aa);

        let mut deeq_3d = [0.0; 6];
        for i in 0..6 {
            deeq_3d[i] = deeq_di1 * di1[i] + deeq_djj2 * djj2[i];
        }
        gradient_from_3d(deeq, &self.tt, &deeq_3d);
        eeq
    }

    /// Calculates the equivalent strain only
    pub fn value(&self, strain: &[f64]) -> f64 {
        let mut deeq = [0.0; 6];
        self.evaluate(&mut deeq[..self.qdim()], strain)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
