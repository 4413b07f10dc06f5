use crate::StrError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Holds configuration options for the integration-point loop
#[derive(Clone, Copy, Debug, Deserialize, Serialize)]
pub struct Config {
    /// Runs the evaluation and update passes in parallel (over the integration points)
    pub parallel: bool,

    /// Minimum number of integration points to switch to the parallel loop
    pub parallel_min_points: usize,

    /// Prints a summary after each evaluation and update pass
    pub verbose: bool,
}

impl Config {
    /// Allocates a new instance
    ///
    /// # Default values
    ///
    /// * `parallel = false`
    /// * `parallel_min_points = 1024`
    /// * `verbose = false`
    pub fn new() -> Self {
        Config {
            parallel: false,
            parallel_min_points: 1024,
            verbose: false,
        }
    }

    /// Enables the parallel evaluation and update passes
    pub fn set_parallel(&mut self, flag: bool) -> Result<&mut Self, StrError> {
        self.parallel = flag;
        Ok(self)
    }

    /// Sets the minimum number of integration points to switch to the parallel loop
    pub fn set_parallel_min_points(&mut self, value: usize) -> Result<&mut Self, StrError> {
        if value < 1 {
            return Err("parallel_min_points must be ≥ 1");
        }
        self.parallel_min_points = value;
        Ok(self)
    }

    /// Enables the printing of a summary after each pass
    pub fn set_verbose(&mut self, flag: bool) -> Result<&mut Self, StrError> {
        self.verbose = flag;
        Ok(self)
    }

    /// Returns whether a pass over `n_points` integration points should run in parallel
    pub fn run_parallel(&self, n_points: usize) -> bool {
        self.parallel && n_points >= self.parallel_min_points
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Configuration data\n").unwrap();
        write!(f, "==================\n").unwrap();
        write!(f, "parallel = {:?}\n", self.parallel).unwrap();
        write!(f, "parallel_min_points = {:?}\n", self.parallel_min_points).unwrap();
        write!(f, "verbose = {:?}\n", self.verbose).unwrap();
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
