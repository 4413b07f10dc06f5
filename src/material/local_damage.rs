use super::{evaluate_kappa, DamageExponential, DamageTrait, History, ModifiedMises};
use crate::base::{elastic_stiffness, Constraint, ParamDamage};
use crate::StrError;
use russell_lab::{Matrix, Vector};

/// Implements the local isotropic damage model
///
/// The history variable is driven by the local (modified von Mises) equivalent strain:
///
/// ```text
/// σ = (1 - ω(κ)) C ε
/// κ = max(κ_stored, εeq(ε))
/// ```
///
/// The consistent tangent is
///
/// ```text
/// dσ/dε = (1 - ω) C - (C ε) (dω/dκ) (dκ/dεeq) (dεeq/dε)ᵗ
/// ```
pub struct LocalDamage {
    /// Elastic stiffness C (qdim × qdim)
    cc: Matrix,

    /// Damage law ω(κ)
    omega: DamageExponential,

    /// Equivalent strain εeq(ε)
    eeq: ModifiedMises,

    /// History variable κ of all points
    history: History,
}

impl LocalDamage {
    /// Allocates a new instance
    ///
    /// # Input
    ///
    /// * `young` -- Young's modulus E
    /// * `poisson` -- Poisson's coefficient ν
    /// * `constraint` -- the dimensional reduction
    /// * `ft` -- tensile strength (κ0 = ft / E)
    /// * `alpha` -- maximum damage fraction α
    /// * `gf` -- fracture-energy-like parameter (β = ft / gf)
    /// * `k` -- ratio between compressive and tensile strength
    ///
    /// The parameters are checked with [ParamDamage::validate].
    pub fn new(
        young: f64,
        poisson: f64,
        constraint: Constraint,
        ft: f64,
        alpha: f64,
        gf: f64,
        k: f64,
    ) -> Result<Self, StrError> {
        ParamDamage::Local {
            young,
            poisson,
            ft,
            alpha,
            gf,
            k,
        }
        .validate()?;
        Ok(LocalDamage {
            cc: elastic_stiffness(young, poisson, constraint)?,
            omega: DamageExponential::new(ft / young, alpha, ft / gf),
            eeq: ModifiedMises::new(k, poisson, constraint),
            history: History::new(),
        })
    }

    /// Returns the equivalent strain model
    pub fn equivalent_strain(&self) -> &ModifiedMises {
        &self.eeq
    }

    /// Calculates the stress and the consistent tangent at the i-th point (trial; the history is not changed)
    ///
    /// # Output
    ///
    /// * `stress` -- the stress vector σ (qdim)
    /// * `dsigma_deps` -- the consistent tangent dσ/dε (qdim × qdim)
    ///
    /// # Input
    ///
    /// * `strain` -- the strain vector ε (qdim)
    /// * `i` -- index of the integration point
    ///
    /// # Panics
    ///
    /// A panic will occur if the dimensions are incorrect or the index is out of range.
    pub fn evaluate(&self, stress: &mut Vector, dsigma_deps: &mut Matrix, strain: &Vector, i: usize) {
        let q = self.qdim();
        assert_eq!(strain.dim(), q);
        assert_eq!(stress.dim(), q);
        assert_eq!(dsigma_deps.dims(), (q, q));

        let mut deeq = [0.0; 6];
        let eeq = self.eeq.evaluate(&mut deeq[..q], strain.as_data());
        let (kappa, dkappa) = evaluate_kappa(eeq, self.history.get(i));
        let (omega, domega) = self.omega.evaluate(kappa);

        // C ε
        let mut c_eps = [0.0; 6];
        for a in 0..q {
            for b in 0..q {
                c_eps[a] += self.cc.get(a, b) * strain[b];
            }
        }

        let coef = domega * dkappa;
        for a in 0..q {
            stress[a] = (1.0 - omega) * c_eps[a];
            for b in 0..q {
                dsigma_deps.set(a, b, (1.0 - omega) * self.cc.get(a, b) - c_eps[a] * coef * deeq[b]);
            }
        }
    }

    /// Commits the history variable of the i-th point
    ///
    /// This function must be called once the load step has converged.
    pub fn update(&mut self, strain: &Vector, i: usize) {
        assert_eq!(strain.dim(), self.qdim());
        let eeq = self.eeq.value(strain.as_data());
        self.history.commit(i, eeq);
    }
}

impl DamageTrait for LocalDamage {
    fn qdim(&self) -> usize {
        self.cc.nrow()
    }

    fn resize(&mut self, n_points: usize) {
        self.history.resize(n_points);
    }

    fn n_points(&self) -> usize {
        self.history.n_points()
    }

    fn kappa(&self, i: usize) -> f64 {
        self.history.get(i)
    }

    fn damage(&self, i: usize) -> f64 {
        self.omega.evaluate(self.history.get(i)).0
    }

    fn stiffness(&self) -> &Matrix {
        &self.cc
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
