//! Makes available common structures needed to evaluate the damage models
//!
//! You may write `use gdamage::prelude::*` in your code and obtain
//! access to commonly used functionality.

pub use crate::base::{elastic_stiffness, Config, Constraint, IpOutputs, IpValues, ParamDamage, Quantity, SampleParams};
pub use crate::driver::{IpLoop, StrainPath, StrainState};
pub use crate::material::{DamageModel, DamageTrait, GradientDamage, LocalDamage};
