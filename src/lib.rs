//! Stable-fluids simulation of density and velocity on a sealed square grid.
//!
//! [`FluidGrid`] owns the fields; [`solver`] holds the numerical operators.
//! Drivers inject impulses, call [`FluidGrid::step`] once per frame and read
//! [`FluidGrid::density`] back for display.

pub mod config;
pub mod error;
pub mod input;
pub mod renderer;
pub mod solver;
pub mod state;

pub use error::GridError;
pub use solver::SolverParams;
pub use state::FluidGrid;
