//! Implements drivers that run the damage models over many integration points or along strain paths

mod ip_loop;
mod strain_path;
pub use crate::driver::ip_loop::*;
pub use crate::driver::strain_path::*;
