use super::{DamageExponential, DamageTrait, History, ModifiedMises};
use crate::base::{elastic_stiffness, Constraint, IpOutputs, IpPointMut, ParamDamage};
use crate::StrError;
use russell_lab::{Matrix, Vector};

/// Implements the gradient-enhanced (implicit nonlocal) isotropic damage model
///
/// The history variable is driven by the nonlocal equivalent strain ē computed by the outer
/// finite element solver (e.g., from a screened Poisson equation using εeq as the source):
///
/// ```text
/// σ = (1 - ω(κ)) C ε
/// κ = max(κ_stored, ē)
/// ```
///
/// The outputs at each integration point are:
///
/// ```text
/// εeq       local equivalent strain (source of the nonlocal equation)
/// dεeq/dε   its gradient
/// σ         stress
/// dσ/dē  = -(C ε) (dω/dκ) (dκ/dē)
/// dσ/dε  = (1 - ω) C
/// ```
///
/// **Note:** The local equivalent strain does not drive the damage; thus dσ/dε contains no
/// correction term.
pub struct GradientDamage {
    /// Elastic stiffness C (qdim × qdim)
    cc: Matrix,

    /// Damage law ω(κ)
    omega: DamageExponential,

    /// Equivalent strain εeq(ε)
    eeq: ModifiedMises,

    /// History variable κ of all points
    history: History,
}

impl GradientDamage {
    /// Allocates a new instance
    ///
    /// # Input
    ///
    /// * `young` -- Young's modulus E
    /// * `poisson` -- Poisson's coefficient ν
    /// * `constraint` -- the dimensional reduction
    /// * `ft` -- tensile strength (κ0 = ft / E)
    /// * `alpha` -- maximum damage fraction α
    /// * `beta` -- softening rate β
    /// * `k` -- ratio between compressive and tensile strength
    ///
    /// The parameters are checked with [ParamDamage::validate].
    pub fn new(
        young: f64,
        poisson: f64,
        constraint: Constraint,
        ft: f64,
        alpha: f64,
        beta: f64,
        k: f64,
    ) -> Result<Self, StrError> {
        ParamDamage::Gradient {
            young,
            poisson,
            ft,
            alpha,
            beta,
            k,
        }
        .validate()?;
        Ok(GradientDamage {
            cc: elastic_stiffness(young, poisson, constraint)?,
            omega: DamageExponential::new(ft / young, alpha, beta),
            eeq: ModifiedMises::new(k, poisson, constraint),
            history: History::new(),
        })
    }

    /// Returns the equivalent strain model
    pub fn equivalent_strain(&self) -> &ModifiedMises {
        &self.eeq
    }

    /// Allocates the output containers with the shapes of this model
    ///
    /// Call [IpOutputs::resize] before using the containers.
    pub fn allocate_outputs(&self) -> IpOutputs {
        IpOutputs::new(self.qdim())
    }

    /// Returns the trial damage of the i-th point for a given nonlocal equivalent strain
    pub fn trial_damage(&self, i: usize, nonlocal_eeq: f64) -> f64 {
        let (kappa, _) = self.history.trial(i, nonlocal_eeq);
        self.omega.evaluate(kappa).0
    }

    /// Calculates the outputs of the i-th point (trial; the history is not changed)
    ///
    /// # Panics
    ///
    /// A panic will occur if the dimensions are incorrect or the index is out of range.
    pub fn evaluate(&self, outputs: &mut IpOutputs, strain: &Vector, nonlocal_eeq: f64, i: usize) {
        assert_eq!(outputs.qdim(), self.qdim());
        self.evaluate_point(outputs.point_mut(i), strain.as_data(), nonlocal_eeq, i);
    }

    /// Calculates the outputs of the i-th point writing into its output blocks
    ///
    /// # Input
    ///
    /// * `point` -- the output blocks of the point
    /// * `strain` -- the strain vector ε (qdim)
    /// * `nonlocal_eeq` -- the nonlocal equivalent strain ē
    /// * `i` -- index of the integration point (used to read the history)
    ///
    /// # Panics
    ///
    /// A panic will occur if the dimensions are incorrect or the index is out of range.
    pub fn evaluate_point(&self, point: IpPointMut, strain: &[f64], nonlocal_eeq: f64, i: usize) {
        let q = self.qdim();
        assert_eq!(strain.len(), q);
        assert_eq!(point.sigma.len(), q);
        assert_eq!(point.dsigma_deps.len(), q * q);

        let (kappa, dkappa) = self.history.trial(i, nonlocal_eeq);
        let (omega, domega) = self.omega.evaluate(kappa);
        *point.eeq = self.eeq.evaluate(point.deeq, strain);

        // C ε
        let mut c_eps = [0.0; 6];
        for a in 0..q {
            for b in 0..q {
                c_eps[a] += self.cc.get(a, b) * strain[b];
            }
        }

        for a in 0..q {
            point.sigma[a] = (1.0 - omega) * c_eps[a];
            point.dsigma_de[a] = -c_eps[a] * domega * dkappa;
        }

        // column-major
        for b in 0..q {
            for a in 0..q {
                point.dsigma_deps[a + b * q] = (1.0 - omega) * self.cc.get(a, b);
            }
        }
    }

    /// Commits the history variable of the i-th point
    ///
    /// The strain is not used because the history is driven by the nonlocal equivalent strain only.
    /// This function must be called once the load step has converged.
    pub fn update(&mut self, strain: &Vector, nonlocal_eeq: f64, i: usize) {
        assert_eq!(strain.dim(), self.qdim());
        self.history.commit(i, nonlocal_eeq);
    }

    /// Commits the history variable of all points
    ///
    /// # Panics
    ///
    /// A panic will occur if the length of `all_nonlocal_eeq` differs from the number of points.
    pub fn update_all(&mut self, all_nonlocal_eeq: &[f64], parallel: bool) {
        self.history.commit_all(all_nonlocal_eeq, parallel);
    }
}

impl DamageTrait for GradientDamage {
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
