/// Implements the exponential softening damage law
///
/// ```text
/// ω(κ) = 0                                        if κ ≤ κ0
/// ω(κ) = 1 - (κ0 / κ) (1 - α + α exp(β (κ0 - κ)))   otherwise
/// ```
///
/// The damage is zero in the elastic range, increases monotonically after κ0 and approaches one
/// asymptotically (the residual stiffness fraction (1 - α) κ0 / κ vanishes only as κ → ∞).
#[derive(Clone, Copy, Debug)]
pub struct DamageExponential {
    /// Elastic limit of the history variable
    kappa0: f64,

    /// Maximum damage fraction
    alpha: f64,

    /// Softening rate
    beta: f64,
}

impl DamageExponential {
    /// Allocates a new instance
    pub fn new(kappa0: f64, alpha: f64, beta: f64) -> Self {
        DamageExponential { kappa0, alpha, beta }
    }

    /// Returns the elastic limit κ0
    pub fn kappa0(&self) -> f64 {
        self.kappa0
    }

    /// Calculates the damage ω and its derivative dω/dκ
    pub fn evaluate(&self, kappa: f64) -> (f64, f64) {
        if kappa <= self.kappa0 {
            return (0.0, 0.0);
        }
        let (k0, a, b) = (self.kappa0, self.alpha, self.beta);
        let e = f64::exp(b * (k0 - kappa));
        let omega = 1.0 - k0 / kappa * (1.0 - a + a * e);
        let domega = k0 / kappa * ((1.0 / kappa + b) * a * e + (1.0 - a) / kappa);
        (omega, domega)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
