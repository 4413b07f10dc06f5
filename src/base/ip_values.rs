use russell_lab::{Matrix, Vector};

/// Holds the values of a fixed-shape quantity at all integration points
///
/// The values of all points are stored in a single contiguous array of size `n × rows × cols`.
/// The block of point `i` starts at `i × rows × cols`. Matrix-valued blocks are stored in
/// column-major order (the same as [Matrix]).
///
/// # Panics
///
/// The setters and getters panic if the shape of the given value does not match the shape of
/// the quantity or if the point index is out of range. These are caller bugs.
#[derive(Clone, Debug)]
pub struct IpValues {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl IpValues {
    /// Allocates a new (empty) instance with the given per-point shape
    ///
    /// Call [IpValues::resize] to allocate the values.
    pub fn new(rows: usize, cols: usize) -> Self {
        assert!(rows > 0 && cols > 0);
        IpValues {
            rows,
            cols,
            data: Vec::new(),
        }
    }

    /// Allocates a new instance for a scalar quantity
    pub fn new_scalar() -> Self {
        IpValues::new(1, 1)
    }

    /// Allocates a new instance for a vector quantity
    pub fn new_vector(rows: usize) -> Self {
        IpValues::new(rows, 1)
    }

    /// Allocates zeroed values for `n_points` integration points
    ///
    /// Any previous value is discarded.
    pub fn resize(&mut self, n_points: usize) {
        self.data.clear();
        self.data.resize(n_points * self.rows * self.cols, 0.0);
    }

    /// Returns the number of rows of each block
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns of each block
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns the number of values per integration point
    pub fn block_size(&self) -> usize {
        self.rows * self.cols
    }

    /// Returns the number of integration points
    pub fn n_points(&self) -> usize {
        self.data.len() / self.block_size()
    }

    /// Returns access to all values
    pub fn as_data(&self) -> &[f64] {
        &self.data
    }

    /// Returns mutable access to all values
    pub fn as_mut_data(&mut self) -> &mut [f64] {
        &mut self.data
    }

    /// Returns the block of values of the i-th point
    pub fn block(&self, i: usize) -> &[f64] {
        assert!(i < self.n_points());
        let size = self.block_size();
        &self.data[i * size..(i + 1) * size]
    }

    /// Returns the mutable block of values of the i-th point
    pub fn block_mut(&mut self, i: usize) -> &mut [f64] {
        assert!(i < self.n_points());
        let size = self.block_size();
        &mut self.data[i * size..(i + 1) * size]
    }

    /// Sets the scalar value of the i-th point
    pub fn set_scalar(&mut self, i: usize, value: f64) {
        assert_eq!(self.block_size(), 1);
        self.block_mut(i)[0] = value;
    }

    /// Sets the vector value of the i-th point
    pub fn set_vector(&mut self, i: usize, value: &Vector) {
        assert_eq!(self.cols, 1);
        assert_eq!(value.dim(), self.rows);
        self.block_mut(i).copy_from_slice(value.as_data());
    }

    /// Sets the matrix value of the i-th point
    pub fn set_matrix(&mut self, i: usize, value: &Matrix) {
        assert_eq!(value.dims(), (self.rows, self.cols));
        let rows = self.rows;
        let block = self.block_mut(i);
        for c in 0..value.ncol() {
            for r in 0..rows {
                block[r + c * rows] = value.get(r, c);
            }
        }
    }

    /// Returns the scalar value of the i-th point
    pub fn get_scalar(&self, i: usize) -> f64 {
        assert_eq!(self.block_size(), 1);
        self.block(i)[0]
    }

    /// Returns (a copy of) the vector value of the i-th point
    pub fn get_vector(&self, i: usize) -> Vector {
        assert_eq!(self.cols, 1);
        Vector::from(&self.block(i).to_vec())
    }

    /// Returns (a copy of) the matrix value of the i-th point
    pub fn get_matrix(&self, i: usize) -> Matrix {
        let block = self.block(i);
        let mut value = Matrix::new(self.rows, self.cols);
        for c in 0..self.cols {
            for r in 0..self.rows {
                value.set(r, c, block[r + c * self.rows]);
            }
        }
        value
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
