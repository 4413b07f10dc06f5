use crate::base::{Config, IpOutputs, Quantity};
use crate::material::{evaluate_kappa, DamageTrait, GradientDamage};
use rayon::prelude::*;
use russell_lab::Vector;

/// Runs the gradient-enhanced damage model over all integration points
///
/// The strains of all points are given as a single vector with `n_points × qdim` values
/// (point-major) and the nonlocal equivalent strains as a vector with `n_points` values.
/// The results are stored in one flat array per [Quantity].
///
/// # Example
///
/// ```
/// use gdamage::prelude::*;
/// use russell_lab::Vector;
///
/// let param = SampleParams::param_gradient_damage();
/// let mut model = DamageModel::new(Constraint::UniaxialStrain, &param).unwrap();
/// if let DamageModel::Gradient(law) = &mut model {
///     let mut ip_loop = IpLoop::new(law, Config::new());
///     ip_loop.resize(2);
///     let strains = Vector::from(&[0.0005, 0.002]);
///     let neeq = Vector::from(&[0.0005, 0.002]);
///     ip_loop.evaluate(&strains, &neeq);
///     let sigma = ip_loop.get(Quantity::Sigma);
///     assert!((sigma[0] - 0.5).abs() < 1e-12);
///     assert!(sigma[1] < 2.0);
///     ip_loop.update(&strains, &neeq);
/// }
/// ```
pub struct IpLoop<'a> {
    /// Holds the damage law (owns the history)
    law: &'a mut GradientDamage,

    /// Holds configuration options
    config: Config,

    /// Holds the outputs of all points
    outputs: IpOutputs,
}

impl<'a> IpLoop<'a> {
    /// Allocates a new instance
    ///
    /// The outputs are allocated for the current number of points of the law.
    pub fn new(law: &'a mut GradientDamage, config: Config) -> Self {
        let mut outputs = law.allocate_outputs();
        outputs.resize(law.n_points());
        IpLoop { law, config, outputs }
    }

    /// Allocates zeroed outputs and history for `n_points` integration points
    ///
    /// **Warning:** The history of the law is reset.
    pub fn resize(&mut self, n_points: usize) {
        self.outputs.resize(n_points);
        self.law.resize(n_points);
    }

    /// Returns the number of integration points
    pub fn n_points(&self) -> usize {
        self.outputs.n_points()
    }

    /// Returns the dimension of the reduced strain vector
    pub fn qdim(&self) -> usize {
        self.outputs.qdim()
    }

    /// Returns the flat array of a computed quantity (all points)
    pub fn get(&self, quantity: Quantity) -> &[f64] {
        self.outputs.get(quantity).as_data()
    }

    /// Returns access to the outputs
    pub fn outputs(&self) -> &IpOutputs {
        &self.outputs
    }

    /// Returns access to the damage law
    pub fn law(&self) -> &GradientDamage {
        &*self.law
    }

    /// Evaluates the model at all points (the history is not changed)
    ///
    /// # Input
    ///
    /// * `all_strains` -- the strains of all points (`n_points × qdim`)
    /// * `all_nonlocal_eeq` -- the nonlocal equivalent strains of all points (`n_points`)
    ///
    /// # Panics
    ///
    /// A panic will occur if the lengths of the input vectors are incorrect.
    pub fn evaluate(&mut self, all_strains: &Vector, all_nonlocal_eeq: &Vector) {
        let (n, q) = (self.n_points(), self.qdim());
        assert_eq!(all_strains.dim(), n * q);
        assert_eq!(all_nonlocal_eeq.dim(), n);
        let law: &GradientDamage = &*self.law;
        let strains = all_strains.as_data();
        let neeq = all_nonlocal_eeq.as_data();
        if self.config.run_parallel(n) {
            self.outputs.par_points_mut().enumerate().for_each(|(i, point)| {
                law.evaluate_point(point, &strains[i * q..(i + 1) * q], neeq[i], i);
            });
        } else {
            for (i, point) in self.outputs.points_mut().enumerate() {
                law.evaluate_point(point, &strains[i * q..(i + 1) * q], neeq[i], i);
            }
        }
        if self.config.verbose {
            self.print_summary("evaluate", neeq);
        }
    }

    /// Commits the history of all points
    ///
    /// This function must be called once the load step has converged.
    ///
    /// # Panics
    ///
    /// A panic will occur if the lengths of the input vectors are incorrect.
    pub fn update(&mut self, all_strains: &Vector, all_nonlocal_eeq: &Vector) {
        let (n, q) = (self.n_points(), self.qdim());
        assert_eq!(all_strains.dim(), n * q);
        assert_eq!(all_nonlocal_eeq.dim(), n);
        if self.config.verbose {
            self.print_summary("update", all_nonlocal_eeq.as_data());
        }
        let parallel = self.config.run_parallel(n);
        self.law.update_all(all_nonlocal_eeq.as_data(), parallel);
    }

    /// Prints the number of points, the number of points on the loading branch and the maximum damage
    fn print_summary(&self, pass: &str, neeq: &[f64]) {
        let mut n_loading = 0;
        let mut omega_max = 0.0;
        for (i, e) in neeq.iter().enumerate() {
            let (_, dkappa) = evaluate_kappa(*e, self.law.kappa(i));
            if dkappa > 0.0 {
                n_loading += 1;
            }
            omega_max = f64::max(omega_max, self.law.trial_damage(i, *e));
        }
        println!(
            "{:>8}: {} points, {} loading, max damage = {:.6}",
            pass,
            neeq.len(),
            n_loading,
            omega_max
        );
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
