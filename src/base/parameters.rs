use crate::StrError;
use serde::{Deserialize, Serialize};
use std::ffi::OsStr;
use std::fs::{self, File};
use std::io::BufReader;
use std::path::Path;

/// Holds parameters for the isotropic damage models
///
/// Both models use an exponential softening law with elastic limit κ0 = ft / E
/// and the modified von Mises equivalent strain.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize, Serialize)]
pub enum ParamDamage {
    /// Local damage model (the history is driven by the local equivalent strain)
    Local {
        /// Young's modulus E
        young: f64,

        /// Poisson's coefficient ν
        poisson: f64,

        /// Tensile strength ft
        ft: f64,

        /// Maximum damage fraction 0 ≤ α < 1 (the residual stiffness fraction is 1 - α)
        alpha: f64,

        /// Fracture-energy-like parameter; the softening rate is β = ft / gf
        gf: f64,

        /// Ratio between compressive and tensile strength k
        k: f64,
    },

    /// Gradient-enhanced damage model (the history is driven by the nonlocal equivalent strain)
    Gradient {
        /// Young's modulus E
        young: f64,

        /// Poisson's coefficient ν
        poisson: f64,

        /// Tensile strength ft
        ft: f64,

        /// Maximum damage fraction 0 ≤ α < 1 (the residual stiffness fraction is 1 - α)
        alpha: f64,

        /// Softening rate β
        beta: f64,

        /// Ratio between compressive and tensile strength k
        k: f64,
    },
}

impl ParamDamage {
    /// Checks the parameters
    pub fn validate(&self) -> Result<(), StrError> {
        let (young, poisson, ft, alpha, k) = match *self {
            ParamDamage::Local {
                young,
                poisson,
                ft,
                alpha,
                gf,
                k,
            } => {
                if gf <= 0.0 {
                    return Err("gf must be > 0.0");
                }
                (young, poisson, ft, alpha, k)
            }
            ParamDamage::Gradient {
                young,
                poisson,
                ft,
                alpha,
                beta,
                k,
            } => {
                if beta < 0.0 {
                    return Err("beta must be ≥ 0.0");
                }
                (young, poisson, ft, alpha, k)
            }
        };
        if young <= 0.0 {
            return Err("young must be > 0.0");
        }
        if poisson <= -1.0 || poisson >= 0.5 {
            return Err("poisson must be in (-1.0, 0.5)");
        }
        if ft <= 0.0 {
            return Err("ft must be > 0.0");
        }
        if alpha < 0.0 || alpha >= 1.0 {
            return Err("alpha must be in [0.0, 1.0)");
        }
        if k <= 0.0 {
            return Err("k must be > 0.0");
        }
        Ok(())
    }

    /// Returns Young's modulus
    pub fn young(&self) -> f64 {
        match *self {
            ParamDamage::Local { young, .. } => young,
            ParamDamage::Gradient { young, .. } => young,
        }
    }

    /// Returns Poisson's coefficient
    pub fn poisson(&self) -> f64 {
        match *self {
            ParamDamage::Local { poisson, .. } => poisson,
            ParamDamage::Gradient { poisson, .. } => poisson,
        }
    }

    /// Returns the elastic limit of the history variable κ0 = ft / E
    pub fn kappa0(&self) -> f64 {
        match *self {
            ParamDamage::Local { young, ft, .. } => ft / young,
            ParamDamage::Gradient { young, ft, .. } => ft / young,
        }
    }

    /// Reads a JSON file containing the parameters
    ///
    /// # Input
    ///
    /// * `full_path` -- may be a String, &str, or Path
    pub fn read_json<P>(full_path: &P) -> Result<Self, StrError>
    where
        P: AsRef<OsStr> + ?Sized,
    {
        let path = Path::new(full_path).to_path_buf();
        let file = File::open(&path).map_err(|_| "file not found")?;
        let reader = BufReader::new(file);
        let param: ParamDamage = serde_json::from_reader(reader).map_err(|_| "deserialize failed")?;
        param.validate()?;
        Ok(param)
    }

    /// Writes a JSON file with the parameters
    ///
    /// # Input
    ///
    /// * `full_path` -- may be a String, &str, or Path
    pub fn write_json<P>(&self, full_path: &P) -> Result<(), StrError>
    where
        P: AsRef<OsStr> + ?Sized,
    {
        let path = Path::new(full_path).to_path_buf();
        if let Some(p) = path.parent() {
            fs::create_dir_all(p).map_err(|_| "cannot create directory")?;
        }
        let mut file = File::create(&path).map_err(|_| "cannot create file")?;
        serde_json::to_writer_pretty(&mut file, &self).map_err(|_| "cannot write file")?;
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
