//! Implements the damage models evaluated at integration points

mod damage_exponential;
mod damage_model;
mod gradient_damage;
mod history;
mod invariants;
mod local_damage;
mod modified_mises;
mod transform;
pub use crate::material::damage_exponential::*;
pub use crate::material::damage_model::*;
pub use crate::material::gradient_damage::*;
pub use crate::material::history::*;
pub use crate::material::invariants::*;
pub use crate::material::local_damage::*;
pub use crate::material::modified_mises::*;
pub use crate::material::transform::*;
