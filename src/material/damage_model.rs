use super::{GradientDamage, LocalDamage};
use crate::base::{Constraint, ParamDamage};
use crate::StrError;
use russell_lab::Matrix;

/// Specifies the functions shared by the damage models
pub trait DamageTrait: Send + Sync {
    /// Returns the dimension of the reduced strain vector
    fn qdim(&self) -> usize;

    /// Allocates the (zeroed) history of `n_points` integration points
    fn resize(&mut self, n_points: usize);

    /// Returns the number of integration points
    fn n_points(&self) -> usize;

    /// Returns the stored history variable κ of the i-th point
    fn kappa(&self, i: usize) -> f64;

    /// Returns the damage ω corresponding to the stored κ of the i-th point
    fn damage(&self, i: usize) -> f64;

    /// Returns the elastic stiffness C
    fn stiffness(&self) -> &Matrix;
}

/// Holds the actual damage model implementation
pub enum DamageModel {
    /// Local damage model
    Local(LocalDamage),

    /// Gradient-enhanced damage model
    Gradient(GradientDamage),
}

impl DamageModel {
    /// Allocates a new instance
    pub fn new(constraint: Constraint, param: &ParamDamage) -> Result<Self, StrError> {
        param.validate()?;
        let model = match *param {
            ParamDamage::Local {
                young,
                poisson,
                ft,
                alpha,
                gf,
                k,
            } => DamageModel::Local(LocalDamage::new(young, poisson, constraint, ft, alpha, gf, k)?),
            ParamDamage::Gradient {
                young,
                poisson,
                ft,
                alpha,
                beta,
                k,
            } => DamageModel::Gradient(GradientDamage::new(young, poisson, constraint, ft, alpha, beta, k)?),
        };
        Ok(model)
    }

    /// Returns access to the shared functions
    pub fn actual(&self) -> &dyn DamageTrait {
        match self {
            DamageModel::Local(model) => model,
            DamageModel::Gradient(model) => model,
        }
    }

    /// Returns mutable access to the shared functions
    pub fn actual_mut(&mut self) -> &mut dyn DamageTrait {
        match self {
            DamageModel::Local(model) => model,
            DamageModel::Gradient(model) => model,
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
