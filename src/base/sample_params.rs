use super::ParamDamage;

/// Holds samples of material parameters
pub struct SampleParams {}

impl SampleParams {
    /// Returns sample parameters for the local damage model
    ///
    /// The elastic limit is κ0 = ft / E = 0.001
    pub fn param_local_damage() -> ParamDamage {
        ParamDamage::Local {
            young: 1000.0, // MPa
            poisson: 0.2,  // [-]
            ft: 1.0,       // MPa
            alpha: 0.99,   // [-]
            gf: 10.0,      // MPa
            k: 10.0,       // [-]
        }
    }

    /// Returns sample parameters for the gradient-enhanced damage model
    ///
    /// The elastic limit is κ0 = ft / E = 0.001
    pub fn param_gradient_damage() -> ParamDamage {
        ParamDamage::Gradient {
            young: 1000.0, // MPa
            poisson: 0.2,  // [-]
            ft: 1.0,       // MPa
            alpha: 0.99,   // [-]
            beta: 100.0,   // [-]
            k: 10.0,       // [-]
        }
    }

    /// Returns unit-scaled parameters for the local damage model (κ0 = 1)
    ///
    /// Strains of order one make finite-difference checks well conditioned.
    pub fn param_local_damage_unit() -> ParamDamage {
        ParamDamage::Local {
            young: 1.0,
            poisson: 0.2,
            ft: 1.0,
            alpha: 0.99,
            gf: 2.0,
            k: 10.0,
        }
    }

    /// Returns unit-scaled parameters for the gradient-enhanced damage model (κ0 = 1)
    pub fn param_gradient_damage_unit() -> ParamDamage {
        ParamDamage::Gradient {
            young: 1.0,
            poisson: 0.2,
            ft: 1.0,
            alpha: 0.99,
            beta: 0.5,
            k: 10.0,
        }
    }
}
