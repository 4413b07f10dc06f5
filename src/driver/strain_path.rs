use crate::material::{DamageTrait, GradientDamage, LocalDamage};
use crate::StrError;
use russell_lab::{Matrix, Vector};

/// Holds the results at one state of a strain path
#[derive(Clone, Debug)]
pub struct StrainState {
    /// Strain vector ε
    pub strain: Vector,

    /// Stress vector σ
    pub stress: Vector,

    /// Tangent dσ/dε
    pub dsigma_deps: Matrix,

    /// History variable κ after the update
    pub kappa: f64,

    /// Damage ω after the update
    pub omega: f64,
}

/// Holds a sequence of strain vectors to drive a damage model at a single integration point
pub struct StrainPath {
    /// Dimension of the reduced strain vector
    qdim: usize,

    /// All strains
    pub strains: Vec<Vector>,
}

impl StrainPath {
    /// Allocates an empty path
    pub fn new(qdim: usize) -> Self {
        StrainPath {
            qdim,
            strains: Vec::new(),
        }
    }

    /// Allocates a monotonic path where only the first strain component increases from zero
    ///
    /// # Input
    ///
    /// * `qdim` -- dimension of the reduced strain vector
    /// * `max_strain` -- the final value of the first component
    /// * `n_increments` -- number of increments (the path has `n_increments + 1` states)
    pub fn new_uniaxial(qdim: usize, max_strain: f64, n_increments: usize) -> Result<Self, StrError> {
        let mut target = Vector::new(qdim);
        target[0] = max_strain;
        let mut path = StrainPath::new(qdim);
        path.push(Vector::new(qdim))?.push_linear(&target, n_increments)?;
        Ok(path)
    }

    /// Returns the dimension of the reduced strain vector
    pub fn qdim(&self) -> usize {
        self.qdim
    }

    /// Appends a strain vector
    pub fn push(&mut self, strain: Vector) -> Result<&mut Self, StrError> {
        if strain.dim() != self.qdim {
            return Err("strain vector has incorrect dimension");
        }
        self.strains.push(strain);
        Ok(self)
    }

    /// Appends `n_increments` states linearly interpolated from the last strain to the target
    ///
    /// The interpolation starts at zero if the path is empty.
    pub fn push_linear(&mut self, target: &Vector, n_increments: usize) -> Result<&mut Self, StrError> {
        if target.dim() != self.qdim {
            return Err("strain vector has incorrect dimension");
        }
        if n_increments < 1 {
            return Err("n_increments must be ≥ 1");
        }
        let start = match self.strains.last() {
            Some(last) => last.clone(),
            None => Vector::new(self.qdim),
        };
        for inc in 1..(n_increments + 1) {
            let t = (inc as f64) / (n_increments as f64);
            let mut strain = Vector::new(self.qdim);
            for k in 0..self.qdim {
                strain[k] = start[k] + t * (target[k] - start[k]);
            }
            self.strains.push(strain);
        }
        Ok(self)
    }

    /// Follows the path with the local damage model at the first integration point
    ///
    /// Each state is evaluated and then committed. If the model has no points, one point is allocated.
    pub fn follow_local(&self, law: &mut LocalDamage) -> Result<Vec<StrainState>, StrError> {
        self.check(&mut *law)?;
        let mut results = Vec::with_capacity(self.strains.len());
        for strain in &self.strains {
            let mut stress = Vector::new(self.qdim);
            let mut dsigma_deps = Matrix::new(self.qdim, self.qdim);
            law.evaluate(&mut stress, &mut dsigma_deps, strain, 0);
            law.update(strain, 0);
            results.push(StrainState {
                strain: strain.clone(),
                stress,
                dsigma_deps,
                kappa: law.kappa(0),
                omega: law.damage(0),
            });
        }
        Ok(results)
    }

    /// Follows the path with the gradient-enhanced damage model at the first integration point
    ///
    /// The nonlocal equivalent strain is taken equal to the local one (homogeneous limit); thus,
    /// the stresses match the ones of the local model with the same softening rate.
    ///
    /// Each state is evaluated and then committed. If the model has no points, one point is allocated.
    pub fn follow_gradient(&self, law: &mut GradientDamage) -> Result<Vec<StrainState>, StrError> {
        self.check(&mut *law)?;
        let mut outputs = law.allocate_outputs();
        outputs.resize(law.n_points());
        let mut results = Vec::with_capacity(self.strains.len());
        for strain in &self.strains {
            let nonlocal_eeq = law.equivalent_strain().value(strain.as_data());
            law.evaluate(&mut outputs, strain, nonlocal_eeq, 0);
            law.update(strain, nonlocal_eeq, 0);
            results.push(StrainState {
                strain: strain.clone(),
                stress: outputs.sigma.get_vector(0),
                dsigma_deps: outputs.dsigma_deps.get_matrix(0),
                kappa: law.kappa(0),
                omega: law.damage(0),
            });
        }
        Ok(results)
    }

    /// Checks the dimension and allocates the first point if needed
    fn check(&self, law: &mut dyn DamageTrait) -> Result<(), StrError> {
        if law.qdim() != self.qdim {
            return Err("strain path and model have different dimensions");
        }
        if law.n_points() == 0 {
            law.resize(1);
        }
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::StrainPath;
    use crate::base::{Constraint, SampleParams};
    use crate::material::{DamageModel, GradientDamage, LocalDamage};
    use russell_lab::{approx_eq, Vector};

    #[test]
    fn push_captures_errors() {
        let mut path = StrainPath::new(3);
        assert_eq!(path.push(Vector::new(2)).err(), Some("strain vector has incorrect dimension"));
        assert_eq!(
            path.push_linear(&Vector::new(1), 2).err(),
            Some("strain vector has incorrect dimension")
        );
        assert_eq!(path.push_linear(&Vector::new(3), 0).err(), Some("n_increments must be ≥ 1"));
    }

    #[test]
    fn new_uniaxial_and_push_linear_work() {
        let mut path = StrainPath::new_uniaxial(3, 0.004, 4).unwrap();
        assert_eq!(path.qdim(), 3);
        assert_eq!(path.strains.len(), 5);
        approx_eq(path.strains[0][0], 0.0, 1e-15);
        approx_eq(path.strains[2][0], 0.002, 1e-15);
        approx_eq(path.strains[4][0], 0.004, 1e-15);
        assert_eq!(path.strains[4][1], 0.0);
        path.push_linear(&Vector::new(3), 2).unwrap();
        assert_eq!(path.strains.len(), 7);
        approx_eq(path.strains[5][0], 0.002, 1e-15);
        approx_eq(path.strains[6][0], 0.0, 1e-15);
    }

    #[test]
    fn follow_captures_errors() {
        let path = StrainPath::new_uniaxial(3, 0.004, 4).unwrap();
        let mut law = LocalDamage::new(1000.0, 0.2, Constraint::UniaxialStrain, 1.0, 0.99, 10.0, 10.0).unwrap();
        assert_eq!(
            path.follow_local(&mut law).err(),
            Some("strain path and model have different dimensions")
        );
    }

    #[test]
    fn follow_local_works() {
        let param = SampleParams::param_local_damage();
        let mut model = DamageModel::new(Constraint::UniaxialStrain, &param).unwrap();
        let law = match &mut model {
            DamageModel::Local(law) => law,
            _ => panic!("local model expected"),
        };
        let mut path = StrainPath::new_uniaxial(1, 0.01, 20).unwrap();
        path.push_linear(&Vector::new(1), 5).unwrap();
        let states = path.follow_local(law).unwrap();
        assert_eq!(states.len(), 26);

        // elastic until κ0 = 0.001
        approx_eq(states[1].stress[0], 0.5, 1e-13);
        assert_eq!(states[1].omega, 0.0);

        // history and damage never decrease
        for i in 1..states.len() {
            assert!(states[i].kappa >= states[i - 1].kappa);
            assert!(states[i].omega >= states[i - 1].omega);
        }

        // softening after the peak
        for i in 3..21 {
            assert!(states[i].stress[0] < states[i - 1].stress[0]);
        }
        let last_loading = &states[20];
        assert!(last_loading.omega > 0.0 && last_loading.omega < 1.0);
        assert!(last_loading.stress[0] < 0.2 * 0.01 * 1000.0);
        assert!(last_loading.dsigma_deps.get(0, 0) < 1000.0);

        // unloading towards the origin with the secant stiffness
        let omega = last_loading.omega;
        for state in &states[21..] {
            assert_eq!(state.kappa, last_loading.kappa);
            approx_eq(state.stress[0], (1.0 - omega) * 1000.0 * state.strain[0], 1e-12);
        }
        approx_eq(states[25].stress[0], 0.0, 1e-15);
    }

    #[test]
    fn follow_gradient_matches_local_in_the_homogeneous_limit() {
        let (young, poisson, ft, alpha, gf, k) = (1000.0, 0.2, 1.0, 0.99, 10.0, 10.0);
        for c in [Constraint::UniaxialStress, Constraint::PlaneStress, Constraint::Full] {
            let mut local = LocalDamage::new(young, poisson, c, ft, alpha, gf, k).unwrap();
            let mut gradient = GradientDamage::new(young, poisson, c, ft, alpha, ft / gf, k).unwrap();
            let path = StrainPath::new_uniaxial(c.qdim(), 0.005, 10).unwrap();
            let res_local = path.follow_local(&mut local).unwrap();
            let res_gradient = path.follow_gradient(&mut gradient).unwrap();
            for (a, b) in res_local.iter().zip(res_gradient.iter()) {
                for m in 0..c.qdim() {
                    approx_eq(a.stress[m], b.stress[m], 1e-13);
                }
                assert_eq!(a.kappa, b.kappa);
                assert_eq!(a.omega, b.omega);
            }
            assert!(res_gradient[10].omega > 0.0);
        }
    }
}
