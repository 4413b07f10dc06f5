//! Implements the base structures: constraints, elasticity, parameters and integration point storage

mod config;
mod constraint;
mod elasticity;
mod ip_outputs;
mod ip_values;
mod parameters;
mod sample_params;
pub use crate::base::config::*;
pub use crate::base::constraint::*;
pub use crate::base::elasticity::*;
pub use crate::base::ip_outputs::*;
pub use crate::base::ip_values::*;
pub use crate::base::parameters::*;
pub use crate::base::sample_params::*;
