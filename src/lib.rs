//! Gradient-enhanced damage model evaluated at the integration points of a finite element simulation
//!
//! The crate provides the local and the gradient-enhanced (nonlocal) versions of an isotropic damage
//! model with exponential softening and a modified von Mises equivalent strain. The laws return the
//! stress and the tangent operators needed by an outer Newton-Raphson solver. The history variable κ
//! is owned by each law and only changes when `update` is called after a converged load step.

/// Defines a type alias for the error type as a static string
pub type StrError = &'static str;

pub mod base;
pub mod driver;
pub mod material;
pub mod prelude;
