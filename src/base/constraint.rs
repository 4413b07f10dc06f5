use crate::StrError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Defines the dimensional reduction applied to the strain and stress tensors
///
/// The reduced components follow the Voigt notation with engineering shear strains:
///
/// ```text
/// UniaxialStrain, UniaxialStress:  (xx)
/// PlaneStrain, PlaneStress:        (xx, yy, xy)
/// Full:                            (xx, yy, zz, yz, xz, xy)
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Deserialize, Serialize)]
pub enum Constraint {
    /// One-dimensional bar with zero lateral strains
    UniaxialStrain,

    /// One-dimensional bar with zero lateral stresses
    UniaxialStress,

    /// Two-dimensional with zero out-of-plane strain
    PlaneStrain,

    /// Two-dimensional with zero out-of-plane stress
    PlaneStress,

    /// Three-dimensional (no reduction)
    Full,
}

impl Constraint {
    /// Holds all constraint cases
    pub const ALL: [Constraint; 5] = [
        Constraint::UniaxialStrain,
        Constraint::UniaxialStress,
        Constraint::PlaneStrain,
        Constraint::PlaneStress,
        Constraint::Full,
    ];

    /// Returns the number of components of the reduced strain (or stress) vector
    pub fn qdim(&self) -> usize {
        match self {
            Constraint::UniaxialStrain => 1,
            Constraint::UniaxialStress => 1,
            Constraint::PlaneStrain => 3,
            Constraint::PlaneStress => 3,
            Constraint::Full => 6,
        }
    }

    /// Returns the lowercase name used in parameter files and the command line
    pub fn name(&self) -> &'static str {
        match self {
            Constraint::UniaxialStrain => "uniaxial-strain",
            Constraint::UniaxialStress => "uniaxial-stress",
            Constraint::PlaneStrain => "plane-strain",
            Constraint::PlaneStress => "plane-stress",
            Constraint::Full => "full",
        }
    }
}

impl FromStr for Constraint {
    type Err = StrError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "uniaxial-strain" => Ok(Constraint::UniaxialStrain),
            "uniaxial-stress" => Ok(Constraint::UniaxialStress),
            "plane-strain" => Ok(Constraint::PlaneStrain),
            "plane-stress" => Ok(Constraint::PlaneStress),
            "full" => Ok(Constraint::Full),
            _ => Err("unknown constraint name"),
        }
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
