//! Numerical parameters for a run
//!
//! `Parameters` holds runtime settings:
//! - number of fixed steps and the step size (may be negative to run backward),
//! - softening epsilon shared by every force evaluation

#[derive(Debug, Clone, PartialEq)]
pub struct Parameters {
    pub steps: usize, // number of leapfrog steps
    pub dt: f64,      // step size
    pub epsilon: f64, // softening
}
