use super::IpValues;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// Defines the quantities computed by the gradient-enhanced damage model at each integration point
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Deserialize, Serialize)]
pub enum Quantity {
    /// Stress vector σ (qdim)
    Sigma,

    /// Tangent dσ/dε (qdim × qdim)
    DsigmaDeps,

    /// Local equivalent strain εeq (scalar)
    Eeq,

    /// Gradient of the local equivalent strain dεeq/dε (qdim)
    Deeq,

    /// Sensitivity of the stress w.r.t. the nonlocal equivalent strain dσ/dē (qdim)
    DsigmaDe,
}

/// Holds the outputs of all integration points (one container per quantity)
#[derive(Clone, Debug)]
pub struct IpOutputs {
    /// Stress vector σ
    pub sigma: IpValues,

    /// Tangent dσ/dε
    pub dsigma_deps: IpValues,

    /// Local equivalent strain εeq
    pub eeq: IpValues,

    /// Gradient of the local equivalent strain dεeq/dε
    pub deeq: IpValues,

    /// Sensitivity of the stress w.r.t. the nonlocal equivalent strain dσ/dē
    pub dsigma_de: IpValues,
}

/// Holds mutable access to the output blocks of a single integration point
pub struct IpPointMut<'a> {
    /// Stress vector σ (qdim)
    pub sigma: &'a mut [f64],

    /// Tangent dσ/dε (qdim × qdim, column-major)
    pub dsigma_deps: &'a mut [f64],

    /// Local equivalent strain εeq
    pub eeq: &'a mut f64,

    /// Gradient of the local equivalent strain dεeq/dε (qdim)
    pub deeq: &'a mut [f64],

    /// Sensitivity dσ/dē (qdim)
    pub dsigma_de: &'a mut [f64],
}

impl IpOutputs {
    /// Allocates the (empty) containers for a reduced strain dimension
    pub fn new(qdim: usize) -> Self {
        IpOutputs {
            sigma: IpValues::new_vector(qdim),
            dsigma_deps: IpValues::new(qdim, qdim),
            eeq: IpValues::new_scalar(),
            deeq: IpValues::new_vector(qdim),
            dsigma_de: IpValues::new_vector(qdim),
        }
    }

    /// Returns the reduced strain dimension
    pub fn qdim(&self) -> usize {
        self.sigma.rows()
    }

    /// Allocates zeroed values for `n_points` integration points in all containers
    pub fn resize(&mut self, n_points: usize) {
        self.sigma.resize(n_points);
        self.dsigma_deps.resize(n_points);
        self.eeq.resize(n_points);
        self.deeq.resize(n_points);
        self.dsigma_de.resize(n_points);
    }

    /// Returns the number of integration points
    pub fn n_points(&self) -> usize {
        self.eeq.n_points()
    }

    /// Returns the container of a quantity
    pub fn get(&self, quantity: Quantity) -> &IpValues {
        match quantity {
            Quantity::Sigma => &self.sigma,
            Quantity::DsigmaDeps => &self.dsigma_deps,
            Quantity::Eeq => &self.eeq,
            Quantity::Deeq => &self.deeq,
            Quantity::DsigmaDe => &self.dsigma_de,
        }
    }

    /// Returns mutable access to the output blocks of the i-th point
    ///
    /// # Panics
    ///
    /// A panic will occur if the index is out of range.
    pub fn point_mut(&mut self, i: usize) -> IpPointMut<'_> {
        IpPointMut {
            sigma: self.sigma.block_mut(i),
            dsigma_deps: self.dsigma_deps.block_mut(i),
            eeq: &mut self.eeq.block_mut(i)[0],
            deeq: self.deeq.block_mut(i),
            dsigma_de: self.dsigma_de.block_mut(i),
        }
    }

    /// Returns an iterator over the output blocks of all points
    pub fn points_mut(&mut self) -> impl Iterator<Item = IpPointMut<'_>> + '_ {
        let q = self.qdim();
        self.sigma
            .as_mut_data()
            .chunks_mut(q)
            .zip(self.dsigma_deps.as_mut_data().chunks_mut(q * q))
            .zip(self.eeq.as_mut_data().iter_mut())
            .zip(self.deeq.as_mut_data().chunks_mut(q))
            .zip(self.dsigma_de.as_mut_data().chunks_mut(q))
            .map(|((((sigma, dsigma_deps), eeq), deeq), dsigma_de)| IpPointMut {
                sigma,
                dsigma_deps,
                eeq,
                deeq,
                dsigma_de,
            })
    }

    /// Returns a parallel iterator over the output blocks of all points
    pub fn par_points_mut(&mut self) -> impl IndexedParallelIterator<Item = IpPointMut<'_>> + '_ {
        let q = self.qdim();
        self.sigma
            .as_mut_data()
            .par_chunks_mut(q)
            .zip(self.dsigma_deps.as_mut_data().par_chunks_mut(q * q))
            .zip(self.eeq.as_mut_data().par_iter_mut())
            .zip(self.deeq.as_mut_data().par_chunks_mut(q))
            .zip(self.dsigma_de.as_mut_data().par_chunks_mut(q))
            .map(|((((sigma, dsigma_deps), eeq), deeq), dsigma_de)| IpPointMut {
                sigma,
                dsigma_deps,
                eeq,
                deeq,
                dsigma_de,
            })
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
