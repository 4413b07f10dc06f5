use rayon::prelude::*;

/// Evaluates the loading function of the history variable
///
/// ```text
/// loading:    εeq ≥ κ  →  (εeq, 1)
/// unloading:  εeq < κ  →  (κ, 0)
/// ```
///
/// Returns the trial history value and its derivative w.r.t. the driving equivalent strain.
pub fn evaluate_kappa(eeq: f64, kappa: f64) -> (f64, f64) {
    if eeq >= kappa {
        (eeq, 1.0)
    } else {
        (kappa, 0.0)
    }
}

/// Holds the history variable κ of all integration points
///
/// The values are non-decreasing and only change via [History::commit] and [History::commit_all].
#[derive(Clone, Debug)]
pub struct History {
    kappa: Vec<f64>,
}

impl History {
    /// Allocates a new (empty) instance
    pub fn new() -> Self {
        History { kappa: Vec::new() }
    }

    /// Allocates `n_points` zeroed values
    ///
    /// **Warning:** Previous values are discarded.
    pub fn resize(&mut self, n_points: usize) {
        self.kappa.clear();
        self.kappa.resize(n_points, 0.0);
    }

    /// Returns the number of integration points
    pub fn n_points(&self) -> usize {
        self.kappa.len()
    }

    /// Returns the stored κ of the i-th point
    ///
    /// # Panics
    ///
    /// A panic will occur if the index is out of range.
    pub fn get(&self, i: usize) -> f64 {
        assert!(i < self.kappa.len());
        self.kappa[i]
    }

    /// Returns access to all stored values
    pub fn as_data(&self) -> &[f64] {
        &self.kappa
    }

    /// Evaluates the trial (κ, dκ/dεeq) of the i-th point without changing the stored value
    pub fn trial(&self, i: usize, driving: f64) -> (f64, f64) {
        evaluate_kappa(driving, self.get(i))
    }

    /// Commits the history of the i-th point given the driving equivalent strain
    pub fn commit(&mut self, i: usize, driving: f64) {
        let (kappa, _) = self.trial(i, driving);
        self.kappa[i] = kappa;
    }

    /// Commits the history of all points given the driving equivalent strains
    ///
    /// # Panics
    ///
    /// A panic will occur if the length of `driving` differs from the number of points.
    pub fn commit_all(&mut self, driving: &[f64], parallel: bool) {
        assert_eq!(driving.len(), self.kappa.len());
        if parallel {
            self.kappa
                .par_iter_mut()
                .zip(driving.par_iter())
                .for_each(|(kappa, &e)| *kappa = evaluate_kappa(e, *kappa).0);
        } else {
            for (kappa, &e) in self.kappa.iter_mut().zip(driving.iter()) {
                *kappa = evaluate_kappa(e, *kappa).0;
            }
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
